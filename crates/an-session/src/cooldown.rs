use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Seconds a user waits before another "resend code" click.
pub const RESEND_COOLDOWN_SECS: u64 = 60;

const TICK: Duration = Duration::from_secs(1);

/// Countdown shown next to the resend button.
///
/// Decrements once per second on a background task. Purely cosmetic: it
/// never gates verification. Dropping it stops the task.
#[derive(Debug)]
pub struct ResendCooldown {
    seconds: u64,
    remaining: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl ResendCooldown {
    /// Must be called inside a tokio runtime.
    pub fn start() -> Self {
        Self::with_seconds(RESEND_COOLDOWN_SECS)
    }

    pub fn with_seconds(seconds: u64) -> Self {
        let remaining = Arc::new(AtomicU64::new(seconds));
        let task = Self::spawn_countdown(remaining.clone());
        Self {
            seconds,
            remaining,
            task,
        }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining.load(Ordering::SeqCst)
    }

    pub fn is_ready(&self) -> bool {
        self.remaining() == 0
    }

    /// Starts the countdown over, e.g. after a resend.
    pub fn restart(&mut self) {
        self.task.abort();
        self.remaining.store(self.seconds, Ordering::SeqCst);
        self.task = Self::spawn_countdown(self.remaining.clone());
    }

    fn spawn_countdown(remaining: Arc<AtomicU64>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            while remaining.load(Ordering::SeqCst) > 0 {
                ticker.tick().await;
                let _ = remaining.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                    n.checked_sub(1)
                });
            }
        })
    }
}

impl Drop for ResendCooldown {
    fn drop(&mut self) {
        self.task.abort();
    }
}
