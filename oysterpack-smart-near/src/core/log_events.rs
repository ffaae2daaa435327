use near_sdk::env;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    INFO,
    WARN,
}

/// Log events are written to the NEAR transaction log as `[LEVEL] [NAME] message`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEvent(pub Level, pub &'static str);

impl Display for LogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] [{}]", self.0, self.1)
    }
}

impl LogEvent {
    pub fn name(&self) -> &'static str {
        self.1
    }

    /// formats the log line exactly as it is written by [`LogEvent::log`]
    pub fn message<Msg>(&self, msg: Msg) -> String
    where
        Msg: Display,
    {
        format!("{} {}", self, msg)
    }

    pub fn log<Msg>(&self, msg: Msg)
    where
        Msg: Display,
    {
        env::log(self.message(msg).as_bytes());
    }
}
