use std::time::Duration;

use tracing::trace;

/// Notifications the carousel emits about user activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A pointer took hold of the track.
    DragStarted,
    /// The pointer let go of the track, by release or by leaving it.
    DragEnded,
    /// The user navigated with an indicator click or an arrow key.
    UserNavigated,
}

/// Frame-driven interval timer that advances the carousel.
///
/// At most one timer is ever pending: `start` replaces whatever was running.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Option<Duration>, // None while stopped
    held: bool,                // A drag holds the track
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self { interval, elapsed: None, held: false }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn start(&mut self) {
        self.stop();
        self.elapsed = Some(Duration::ZERO);
    }

    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Subscriber side of [`Interaction`]: drags pause, finished navigations restart fresh.
    /// Navigation while a drag holds the track leaves the timer paused until the drag ends.
    pub fn on_interaction(&mut self, interaction: Interaction) {
        trace!(?interaction, held = self.held, "autoplay notified");
        match interaction {
            Interaction::DragStarted => {
                self.held = true;
                self.stop();
            }
            Interaction::DragEnded => {
                self.held = false;
                self.start();
            }
            Interaction::UserNavigated if self.held => {}
            Interaction::UserNavigated => self.start(),
        }
    }

    /// Stop the timer and forget any drag in progress.
    pub fn reset(&mut self) {
        self.held = false;
        self.stop();
    }

    /// Advance the timer by `dt` and return how many intervals fired.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return 0;
        };
        if self.interval.is_zero() {
            return 0;
        }
        *elapsed += dt;
        let mut fired = 0;
        while *elapsed >= self.interval {
            *elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}
