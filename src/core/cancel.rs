use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use signal_hook::consts::SIGINT;

/// Shared interrupt flag checked by long-running scans.
///
/// A flag made with [`CancelFlag::on_interrupt`] only takes over SIGINT once a
/// scan actually starts (see [`CancelFlag::arm`]); until then Ctrl-C keeps its
/// default behavior.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    cancelled: Arc<AtomicBool>,
    on_interrupt: bool,
    armed: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag raised by SIGINT while a scan is running.
    pub fn on_interrupt() -> Self {
        Self {
            on_interrupt: true,
            ..Self::default()
        }
    }

    /// Route SIGINT to this flag. Called when a scan starts; a no-op for flags
    /// not made with `on_interrupt` and after the first call.
    ///
    /// A second Ctrl-C terminates the process.
    pub fn arm(&self) -> std::io::Result<()> {
        if !self.on_interrupt || self.armed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        signal_hook::flag::register_conditional_shutdown(
            SIGINT,
            130,
            Arc::clone(&self.cancelled),
        )?;
        signal_hook::flag::register(SIGINT, Arc::clone(&self.cancelled))?;
        Ok(())
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
