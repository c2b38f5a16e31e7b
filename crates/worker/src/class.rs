/// Execution classes used for spawning and observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Work started by a hover that the user is waiting on.
	Interactive,
	/// Feed processing and inline embedding; may lag behind the chat.
	Background,
	/// Delayed actions such as panel hide timers.
	Timer,
}

impl TaskClass {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Background => "background",
			Self::Timer => "timer",
		}
	}
}
