//! The kanji clock face renderer.
//!
//! A single fixed-layout screen: four large kanji numerals for HHMM and
//! a `"{year}Y {month}M {day}D"` date line below them. The interesting
//! part is the update discipline, not the layout. Display writes are
//! expensive on a low-power wearable, so the face distinguishes two
//! draw paths:
//!
//! - **Full redraw** (activation only): clear the surface, repaint the
//!   status bar, render time and date unconditionally.
//! - **Lazy update** (per-second tick, wake from sleep): ask the status
//!   bar to refresh itself; only if the bar reports a time-of-day
//!   change *and* the minute differs from what is already on screen do
//!   the glyphs get redrawn. Display RAM is preserved across sleep, so
//!   waking never needs a full repaint.

use core::fmt::Write;

use heapless::String;
use log::{debug, trace};

use crate::glyphs::glyph_for_digit;
use crate::host::{ClockSource, StatusBar, TickScheduler, TimeFields};
use crate::surface::{DISPLAY_WIDTH_PX, DrawSurface, FontId};
use crate::theme::Theme;

/// Tick cadence requested from the host scheduler on activation.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Left margin of the time glyph row.
const TIME_X_PX: i32 = 1;

/// Top edge of the time glyph row.
const TIME_Y_PX: i32 = 80;

/// Left margin of the date line.
const DATE_X_PX: i32 = 1;

/// Top edge of the date line.
const DATE_Y_PX: i32 = 180;

/// Drawing state handed to the digit blit routine: the glyph cell
/// width from the large font's metrics and the shared row offset.
struct GlyphCell {
    width: u32,
    y: i32,
}

/// Watch face state machine.
///
/// Owns its clock source and status bar (injected at construction);
/// the surface and scheduler are host property and are passed into the
/// lifecycle calls. The host drives everything synchronously from a
/// single thread, so the face holds no locks and never blocks.
pub struct KanjiFace<C, B> {
    clock: C,
    bar: B,
    theme: Theme,
    /// Minute currently on screen. `None` until the first completed
    /// draw; afterwards the glyphs on screen always match it, which is
    /// what lets the tick path skip redundant redraws.
    displayed_minute: Option<u8>,
}

impl<C: ClockSource, B> KanjiFace<C, B> {
    pub fn new(clock: C, bar: B) -> Self {
        Self {
            clock,
            bar,
            theme: Theme::default(),
            displayed_minute: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Bring the face to the foreground.
    ///
    /// Takes over time rendering from the status bar, repaints the
    /// whole screen and asks the host for a periodic tick callback.
    pub fn activate<S>(
        &mut self,
        surface: &mut S,
        scheduler: &mut impl TickScheduler,
    ) -> Result<(), S::Error>
    where
        S: DrawSurface,
        B: StatusBar<S>,
    {
        debug!("kanji face activating");
        self.bar.set_clock_visible(false);
        self.draw(surface, true)?;
        scheduler.request_periodic(TICK_INTERVAL_MS);
        Ok(())
    }

    /// Prepare to enter low-power mode.
    ///
    /// Returns `true`: the host must keep this app on screen instead of
    /// switching to the default app before sleeping.
    pub fn prepare_sleep(&self) -> bool {
        true
    }

    /// Return from low-power mode.
    ///
    /// Time has moved on while asleep, but the display RAM survived, so
    /// a lazy update is sufficient; a full redraw would only waste
    /// power repainting pixels that are already correct.
    pub fn resume<S>(&mut self, surface: &mut S) -> Result<(), S::Error>
    where
        S: DrawSurface,
        B: StatusBar<S>,
    {
        self.draw(surface, false)
    }

    /// Periodic callback while in the foreground.
    pub fn on_tick<S>(&mut self, surface: &mut S, _ticks: u32) -> Result<(), S::Error>
    where
        S: DrawSurface,
        B: StatusBar<S>,
    {
        self.draw(surface, false)
    }

    /// Draw or lazily update the display.
    ///
    /// With `full` set, the surface is cleared and everything is
    /// repainted. Otherwise the update is doubly lazy: the status bar
    /// elides its own work first, and even when it reports a change the
    /// clock glyphs are only redrawn once per minute.
    fn draw<S>(&mut self, surface: &mut S, full: bool) -> Result<(), S::Error>
    where
        S: DrawSurface,
        B: StatusBar<S>,
    {
        let now = if full {
            let now = self.clock.local_time();
            debug!("full redraw at {:02}:{:02}", now.hour, now.minute);

            // Clear the display and repaint the static parts.
            surface.fill()?;
            self.bar.draw(surface)?;
            now
        } else {
            match self.bar.update(surface)? {
                Some(now) if self.displayed_minute != Some(now.minute) => now,
                _ => {
                    // Nothing visible changed; leave the display alone.
                    trace!("lazy update suppressed");
                    return Ok(());
                }
            }
        };

        self.render_time_and_date(surface, &now)?;
        self.displayed_minute = Some(now.minute);
        Ok(())
    }

    /// Repaint the changeable parts of the face: the four time digits
    /// right-to-left, then the date line.
    fn render_time_and_date<S>(&self, surface: &mut S, now: &TimeFields) -> Result<(), S::Error>
    where
        S: DrawSurface,
    {
        surface.set_font(FontId::Large);
        surface.set_color(self.theme.bright);
        let cell = GlyphCell {
            width: surface.glyph_width(FontId::Large),
            y: TIME_Y_PX,
        };

        draw_digit(surface, &cell, now.minute % 10, 3)?;
        draw_digit(surface, &cell, now.minute / 10, 2)?;
        draw_digit(surface, &cell, now.hour % 10, 1)?;
        draw_digit(surface, &cell, now.hour / 10, 0)?;

        surface.set_font(FontId::Small);
        surface.set_color(self.theme.bright);
        let mut date: String<24> = String::new();
        // Cannot overflow: "65535Y 12M 31D" is 14 bytes.
        let _ = write!(date, "{}Y {}M {}D", now.year, now.month, now.day);
        surface.draw_string(&date, DATE_X_PX, DATE_Y_PX, DISPLAY_WIDTH_PX)?;

        Ok(())
    }
}

/// Blit one kanji numeral into digit slot `slot` (0 = leftmost).
fn draw_digit<S: DrawSurface>(
    surface: &mut S,
    cell: &GlyphCell,
    digit: u8,
    slot: u32,
) -> Result<(), S::Error> {
    let mut buf = [0u8; 4];
    let glyph = glyph_for_digit(digit).encode_utf8(&mut buf);
    surface.draw_string(glyph, (slot * cell.width) as i32 + TIME_X_PX, cell.y, cell.width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb565;
    use std::string::{String as StdString, ToString};
    use std::vec;
    use std::vec::Vec;

    /// Glyph cell width reported by the mock's large font.
    const GLYPH_W: u32 = 55;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Fill,
        DrawString {
            text: StdString,
            x: i32,
            y: i32,
            width: u32,
        },
    }

    /// Surface that records every display write.
    #[derive(Default)]
    struct MockSurface {
        ops: Vec<Op>,
    }

    impl MockSurface {
        /// Pixel-touching operations recorded so far.
        fn writes(&self) -> usize {
            self.ops.len()
        }

        fn strings(&self) -> Vec<&Op> {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::DrawString { .. }))
                .collect()
        }
    }

    impl DrawSurface for MockSurface {
        type Error = core::convert::Infallible;

        fn fill(&mut self) -> Result<(), Self::Error> {
            self.ops.push(Op::Fill);
            Ok(())
        }

        fn set_font(&mut self, _font: FontId) {}

        fn set_color(&mut self, _color: Rgb565) {}

        fn glyph_width(&self, font: FontId) -> u32 {
            match font {
                FontId::Large => GLYPH_W,
                FontId::Small => 12,
            }
        }

        fn draw_string(&mut self, text: &str, x: i32, y: i32, width: u32) -> Result<(), Self::Error> {
            self.ops.push(Op::DrawString {
                text: text.to_string(),
                x,
                y,
                width,
            });
            Ok(())
        }
    }

    struct MockClock(TimeFields);

    impl ClockSource for MockClock {
        fn local_time(&self) -> TimeFields {
            self.0
        }
    }

    /// Status bar scripted with the values its `update` should report.
    #[derive(Default)]
    struct ScriptedBar {
        clock_visible: Option<bool>,
        draws: usize,
        updates: Vec<Option<TimeFields>>,
    }

    impl<S: DrawSurface> StatusBar<S> for ScriptedBar {
        fn set_clock_visible(&mut self, visible: bool) {
            self.clock_visible = Some(visible);
        }

        fn draw(&mut self, _surface: &mut S) -> Result<(), S::Error> {
            self.draws += 1;
            Ok(())
        }

        fn update(&mut self, _surface: &mut S) -> Result<Option<TimeFields>, S::Error> {
            Ok(if self.updates.is_empty() {
                None
            } else {
                self.updates.remove(0)
            })
        }
    }

    #[derive(Default)]
    struct MockScheduler {
        requested_ms: Option<u32>,
    }

    impl TickScheduler for MockScheduler {
        fn request_periodic(&mut self, interval_ms: u32) {
            self.requested_ms = Some(interval_ms);
        }
    }

    fn fields(hour: u8, minute: u8) -> TimeFields {
        TimeFields {
            year: 2024,
            month: 3,
            day: 5,
            hour,
            minute,
            second: 0,
            weekday: 1,
        }
    }

    fn drawn_texts(surface: &MockSurface) -> Vec<StdString> {
        surface
            .strings()
            .iter()
            .map(|op| match op {
                Op::DrawString { text, .. } => text.clone(),
                Op::Fill => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn full_redraw_renders_glyphs_and_date() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        let mut surface = MockSurface::default();

        face.draw(&mut surface, true).unwrap();

        // Clears first, then the bar repaints, without consulting the
        // bar's lazy update path.
        assert_eq!(surface.ops[0], Op::Fill);
        assert_eq!(face.bar.draws, 1);

        // Digits drawn right-to-left: ones-of-minute, tens-of-minute,
        // ones-of-hour, tens-of-hour.
        assert_eq!(
            drawn_texts(&surface),
            vec!["七", "〇", "四", "一", "2024Y 3M 5D"]
        );

        let w = GLYPH_W as i32;
        let expected = [(3 * w + 1, 80), (2 * w + 1, 80), (w + 1, 80), (1, 80)];
        for (op, (x, y)) in surface.strings().into_iter().zip(expected) {
            match op {
                Op::DrawString {
                    x: ox,
                    y: oy,
                    width,
                    ..
                } => {
                    assert_eq!((*ox, *oy), (x, y));
                    assert_eq!(*width, GLYPH_W);
                }
                Op::Fill => unreachable!(),
            }
        }

        assert_eq!(
            *surface.strings()[4],
            Op::DrawString {
                text: "2024Y 3M 5D".to_string(),
                x: 1,
                y: 180,
                width: DISPLAY_WIDTH_PX,
            }
        );

        assert_eq!(face.displayed_minute, Some(7));
    }

    #[test]
    fn activate_configures_bar_and_scheduler() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        let mut surface = MockSurface::default();
        let mut scheduler = MockScheduler::default();

        face.activate(&mut surface, &mut scheduler).unwrap();

        assert_eq!(face.bar.clock_visible, Some(false));
        assert_eq!(surface.ops[0], Op::Fill);
        assert_eq!(scheduler.requested_ms, Some(TICK_INTERVAL_MS));
    }

    #[test]
    fn lazy_update_skips_when_bar_reports_no_change() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        face.displayed_minute = Some(6);
        let mut surface = MockSurface::default();

        face.on_tick(&mut surface, 1).unwrap();

        assert_eq!(surface.writes(), 0);
        assert_eq!(face.displayed_minute, Some(6));
    }

    #[test]
    fn lazy_update_skips_when_minute_unchanged() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        face.displayed_minute = Some(7);
        face.bar.updates = vec![Some(fields(14, 7))];
        let mut surface = MockSurface::default();

        face.on_tick(&mut surface, 1).unwrap();

        assert_eq!(surface.writes(), 0);
    }

    #[test]
    fn lazy_update_redraws_on_minute_change() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        face.displayed_minute = Some(7);
        face.bar.updates = vec![Some(fields(14, 8))];
        let mut surface = MockSurface::default();

        face.on_tick(&mut surface, 1).unwrap();

        // Four digits plus the date, but never a clear.
        assert!(!surface.ops.contains(&Op::Fill));
        assert_eq!(surface.strings().len(), 5);
        assert_eq!(drawn_texts(&surface)[0], "八");
        assert_eq!(face.displayed_minute, Some(8));
    }

    #[test]
    fn repeated_ticks_are_idempotent() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        face.bar.updates = vec![Some(fields(14, 7)), Some(fields(14, 7))];
        let mut surface = MockSurface::default();

        face.on_tick(&mut surface, 1).unwrap();
        let writes_after_first = surface.writes();
        assert!(writes_after_first > 0);

        face.on_tick(&mut surface, 2).unwrap();
        assert_eq!(surface.writes(), writes_after_first);
    }

    #[test]
    fn prepare_sleep_retains_current_screen() {
        let face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        assert!(face.prepare_sleep());
    }

    #[test]
    fn resume_updates_lazily_without_clearing() {
        let mut face = KanjiFace::new(MockClock(fields(14, 7)), ScriptedBar::default());
        face.displayed_minute = Some(7);
        face.bar.updates = vec![Some(fields(16, 42))];
        let mut surface = MockSurface::default();

        face.resume(&mut surface).unwrap();

        assert!(!surface.ops.contains(&Op::Fill));
        assert_eq!(face.displayed_minute, Some(42));
    }

    #[test]
    fn hour_rollover_with_unchanged_minute_is_suppressed() {
        // The comparison is minute-only by contract: an hour change at
        // an already-displayed minute 00 does not trigger a redraw.
        let mut face = KanjiFace::new(MockClock(fields(14, 0)), ScriptedBar::default());
        face.displayed_minute = Some(0);
        face.bar.updates = vec![Some(fields(15, 0))];
        let mut surface = MockSurface::default();

        face.on_tick(&mut surface, 1).unwrap();

        assert_eq!(surface.writes(), 0);
    }

    #[test]
    fn digits_decompose_per_field() {
        let cases = [
            (0u8, 0u8, ["〇", "〇", "〇", "〇"]),
            (23, 59, ["九", "五", "三", "二"]),
            (9, 10, ["〇", "一", "九", "〇"]),
        ];

        for (hour, minute, expected) in cases {
            let mut face = KanjiFace::new(MockClock(fields(hour, minute)), ScriptedBar::default());
            let mut surface = MockSurface::default();

            face.draw(&mut surface, true).unwrap();

            let texts = drawn_texts(&surface);
            for (drawn, wanted) in texts.iter().zip(expected) {
                assert_eq!(drawn, wanted, "at {hour:02}:{minute:02}");
            }
        }
    }
}
