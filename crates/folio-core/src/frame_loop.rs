//! Frame ticker tied to the lifetime of a guard.
//!
//! [`frame_loop`] returns a [`FrameLoopGuard`] and a [`FrameTicker`]. The
//! owning view keeps the guard and spawns [`FrameTicker::run`]. When the
//! guard is dropped (unmount, navigation, theme change, panic unwinding)
//! the ticker sees the cancellation and returns, so no timer outlives
//! the view.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

/// Interval between frames, about 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Creates a linked guard/ticker pair.
pub fn frame_loop() -> (FrameLoopGuard, FrameTicker) {
    let (tx, rx) = watch::channel(false);
    (
        FrameLoopGuard { cancel: Some(tx) },
        FrameTicker {
            cancelled: rx,
            interval: FRAME_INTERVAL,
        },
    )
}

/// Cancels the paired [`FrameTicker`] when dropped.
#[derive(Debug)]
pub struct FrameLoopGuard {
    cancel: Option<watch::Sender<bool>>,
}

impl FrameLoopGuard {
    /// Stops the ticker. Returns false if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(tx) => {
                // The ticker may already be gone; nothing to tell it then.
                let _ = tx.send(true);
                tracing::debug!("Frame loop cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Drop for FrameLoopGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Information passed to each frame callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// 1-based frame number.
    pub index: u64,
    /// Time since the ticker started.
    pub elapsed: Duration,
}

impl FrameTick {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Drives a frame callback until the paired guard is cancelled.
#[derive(Debug)]
pub struct FrameTicker {
    cancelled: watch::Receiver<bool>,
    interval: Duration,
}

impl FrameTicker {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Calls `on_frame` once per interval. Returns the number of frames
    /// delivered once the guard is cancelled or dropped.
    pub async fn run<F: FnMut(FrameTick)>(mut self, mut on_frame: F) -> u64 {
        if *self.cancelled.borrow() {
            return 0;
        }

        tracing::debug!(interval_us = self.interval.as_micros() as u64, "Frame loop started");
        let start = Instant::now();
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut frames = 0;

        loop {
            tokio::select! {
                biased;
                // Err means the guard was dropped without sending; either way we stop.
                _ = self.cancelled.changed() => break,
                _ = ticker.tick() => {
                    frames += 1;
                    on_frame(FrameTick {
                        index: frames,
                        elapsed: start.elapsed(),
                    });
                }
            }
        }

        tracing::debug!(frames, "Frame loop stopped");
        frames
    }
}
