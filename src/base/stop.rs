use std::sync::atomic::{AtomicBool, Ordering};

/// Raised from outside (typically a Ctrl-C handler) to abort a long computation at its next
/// [`check_stop!`](crate::base::check_stop) point.
static STOP: AtomicBool = AtomicBool::new(false);

pub fn reset_stop() {
    STOP.store(false, Ordering::SeqCst);
}

pub fn send_stop() {
    STOP.store(true, Ordering::SeqCst);
}

pub fn should_stop() -> bool {
    STOP.load(Ordering::Relaxed)
}
