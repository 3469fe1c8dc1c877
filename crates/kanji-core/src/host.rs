//! Contracts for the host-provided collaborators.
//!
//! The watch face never reaches for system singletons: the clock source
//! and status bar are injected at construction, and the scheduler is
//! handed in by the host on activation. Everything here is synchronous
//! and expected to return quickly; the face runs on a single-core
//! device that cannot tolerate blocked frames.

use crate::surface::DrawSurface;

/// Localized wall-clock snapshot produced by the RTC.
///
/// A plain read-only copy; the clock source retains ownership of its
/// own state and hands out a fresh snapshot per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    pub year: u16,
    /// 1–12.
    pub month: u8,
    /// 1–31.
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
    /// 0–59.
    pub second: u8,
    /// 0 = Monday, matching the host RTC convention.
    pub weekday: u8,
}

/// Real-time clock collaborator.
///
/// Always succeeds; monotonic wall-clock semantics are the host's
/// responsibility.
pub trait ClockSource {
    fn local_time(&self) -> TimeFields;
}

/// Host-managed status bar shared across apps.
///
/// The bar owns its own screen region (battery, connectivity, and
/// optionally a small clock). It is generic over the surface so the
/// same widget renders on hardware and in the simulator.
pub trait StatusBar<S: DrawSurface> {
    /// Enable or disable the bar's own time-of-day rendering. The
    /// watch face disables it because it draws the time itself.
    fn set_clock_visible(&mut self, visible: bool);

    /// Repaint the bar's entire region.
    fn draw(&mut self, surface: &mut S) -> Result<(), S::Error>;

    /// Lazily refresh the bar.
    ///
    /// Returns the current time fields only when a time-of-day change
    /// was detected, `None` otherwise. The `None` fast path is what
    /// lets callers skip their own rendering.
    fn update(&mut self, surface: &mut S) -> Result<Option<TimeFields>, S::Error>;
}

/// Host scheduler handle used to request periodic tick callbacks.
pub trait TickScheduler {
    /// Ask the host to invoke the app's tick callback every
    /// `interval_ms` milliseconds while it stays in the foreground.
    fn request_periodic(&mut self, interval_ms: u32);
}
