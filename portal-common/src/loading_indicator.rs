//! Loading indicator controller
//!
//! Mirrors a boolean "request in flight" signal as a visible, animated
//! ellipsis. The controller owns the animation counter and the timer handle;
//! the host supplies a [`TickScheduler`] for the periodic timer and an
//! [`IndicatorView`] for the elements being updated.
//!
//! All calls happen on one thread: the host invokes
//! [`LoadingIndicator::on_visibility_changed`] when its request tracking
//! reports a change and [`LoadingIndicator::tick`] when the timer fires.

use std::time::Duration;
use tracing::{debug, warn};

/// Element ids and timing for the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorConfig {
    /// Element whose display is toggled
    pub container_id: String,
    /// Element whose text holds the dots
    pub dots_id: String,
    /// Period of the animation timer
    pub tick_interval: Duration,
    /// Highest dot count before wrapping back to zero
    pub max_dots: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            container_id: "loading-indicator".to_string(),
            dots_id: "loading-dots".to_string(),
            tick_interval: Duration::from_millis(100),
            max_dots: 3,
        }
    }
}

/// Periodic timer supplied by the host.
///
/// The host is responsible for calling [`LoadingIndicator::tick`] each period
/// while the returned handle is live.
pub trait TickScheduler {
    type Handle;

    /// Start a periodic timer. `None` means the host could not create one.
    fn schedule(&mut self, period: Duration) -> Option<Self::Handle>;

    /// Cancel a timer previously returned by `schedule`.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Display side of the indicator.
///
/// Implementations must tolerate missing elements by skipping the update.
pub trait IndicatorView {
    fn show(&mut self);
    fn hide(&mut self);
    fn set_text(&mut self, text: &str);
}

/// Dot count cycling through `0..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotCounter {
    count: usize,
    max: usize,
}

impl DotCounter {
    pub fn new(max: usize) -> Self {
        Self { count: 0, max }
    }

    /// Advance by one, wrapping after `max`. Returns the new count.
    pub fn advance(&mut self) -> usize {
        self.count = if self.count >= self.max {
            0
        } else {
            self.count + 1
        };
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The ellipsis text for the current count.
    pub fn text(&self) -> String {
        ".".repeat(self.count)
    }
}

/// Shows the indicator and animates it while a timer is live.
///
/// Invariant: `timer` is `Some` iff the indicator is visible.
pub struct LoadingIndicator<S: TickScheduler, V: IndicatorView> {
    config: IndicatorConfig,
    scheduler: S,
    view: V,
    timer: Option<S::Handle>,
    dots: DotCounter,
}

impl<S: TickScheduler, V: IndicatorView> LoadingIndicator<S, V> {
    pub fn new(config: IndicatorConfig, scheduler: S, view: V) -> Self {
        let dots = DotCounter::new(config.max_dots);
        Self {
            config,
            scheduler,
            view,
            timer: None,
            dots,
        }
    }

    /// Entry point for the host's visibility notification.
    pub fn on_visibility_changed(&mut self, visible: bool) {
        if visible {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Reveal the indicator and start animating. No-op while already running.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }

        match self.scheduler.schedule(self.config.tick_interval) {
            Some(handle) => {
                self.timer = Some(handle);
                self.view.show();
                debug!(
                    "Loading indicator started ({}ms ticks)",
                    self.config.tick_interval.as_millis()
                );
            }
            None => warn!("Could not schedule loading indicator timer"),
        }
    }

    /// Cancel the timer, then hide and clear the indicator.
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            debug!("Loading indicator stopped");
        }
        self.dots.reset();
        self.view.hide();
        self.view.set_text("");
    }

    /// Advance the animation by one step.
    ///
    /// A tick that lands after `stop` is ignored.
    pub fn tick(&mut self) {
        if self.timer.is_none() {
            return;
        }
        self.dots.advance();
        let text = self.dots.text();
        self.view.set_text(&text);
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn dots(&self) -> usize {
        self.dots.count()
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<S: TickScheduler, V: IndicatorView> Drop for LoadingIndicator<S, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}
