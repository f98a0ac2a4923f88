use battler_abilities::battle::{
    Battle,
    Phase,
};

/// Asserts that new logs in the battle are equal to the given logs.
///
/// Reads the logs out, so the next call only sees logs added after this one.
#[track_caller]
pub fn assert_new_logs_eq(battle: &mut Battle, want: &[&str]) {
    let got = battle.log_mut().read_out().collect::<Vec<&str>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts that the phases queued in the battle are equal to the given phases, draining the queue.
#[track_caller]
pub fn assert_queue_eq(battle: &mut Battle, want: &[Phase]) {
    let got = battle.queue_mut().drain();
    pretty_assertions::assert_eq!(got, want)
}
