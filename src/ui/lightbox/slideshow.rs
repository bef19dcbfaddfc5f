// SPDX-License-Identifier: MPL-2.0
//! Slideshow timer ownership.
//!
//! While running, the slideshow holds exactly one [`TimerHandle`]. The iced
//! subscription built from that handle is keyed by its generation, so dropping
//! the handle also drops the recurring timer, and ticks from an earlier
//! handle are recognized as stale.

use iced::{time, Subscription};
use std::time::Duration;

/// Owned ticket for the running slideshow timer.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle {
    generation: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct Slideshow {
    interval: Duration,
    timer: Option<TimerHandle>,
    generations: u64,
}

impl Slideshow {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timer: None,
            generations: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Acquires a fresh timer, replacing any existing one.
    pub fn start(&mut self) {
        self.generations += 1;
        self.timer = Some(TimerHandle {
            generation: self.generations,
        });
        log::debug!("Slideshow started (every {:?})", self.interval);
    }

    /// Releases the timer. Idempotent.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("Slideshow stopped");
        }
    }

    /// Starts when stopped, stops when running. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Restarts the countdown after a manual navigation, if running.
    pub fn rearm(&mut self) {
        if self.is_running() {
            self.generations += 1;
            self.timer = Some(TimerHandle {
                generation: self.generations,
            });
        }
    }

    /// Whether a tick carrying `generation` comes from the live timer.
    #[must_use]
    pub fn accepts(&self, generation: u64) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|timer| timer.generation == generation)
    }

    /// Recurring tick while running; nothing otherwise.
    pub fn subscription<Message>(&self, on_tick: fn(u64) -> Message) -> Subscription<Message>
    where
        Message: 'static + Send,
    {
        match &self.timer {
            Some(timer) => time::every(self.interval)
                .with((timer.generation, on_tick))
                .map(|((generation, on_tick), _instant)| on_tick(generation)),
            None => Subscription::none(),
        }
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.stop();
    }
}
