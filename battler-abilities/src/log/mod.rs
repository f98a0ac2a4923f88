mod event_log;

pub use event_log::{
    BattleLoggable,
    EventLog,
    LogEvent,
};
