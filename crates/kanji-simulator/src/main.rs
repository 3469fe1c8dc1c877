//! Desktop simulator host for the kanji clock watch face.
//!
//! Stands in for the watch firmware: owns the display, drives the face
//! through its lifecycle (activate, periodic ticks, sleep, wake) and
//! provides the system clock and a simple status bar. Renders in an
//! SDL2 window via `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key   | Action                          |
//! |-------|---------------------------------|
//! | S     | Enter low-power mode (sleep)    |
//! | W     | Wake from low-power mode        |
//! | Q/Esc | Quit                            |

mod fonts;

use std::time::{Duration, Instant};

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use kanji_core::{
    ClockSource, DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, DrawSurface, EgSurface, FontId, FontSet,
    KanjiFace, StatusBar, TICK_INTERVAL_MS, TickScheduler, TimeFields,
};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Status bar text color - medium gray
const STATUS_COLOR: Rgb565 = Rgb565::new(21, 42, 21);

/// Synthetic battery drain per status-bar update, in percent.
const BATTERY_DRAIN_PCT: f32 = 0.002;

// ---------------------------------------------------------------------------
// Host collaborators
// ---------------------------------------------------------------------------

/// Clock source backed by the system clock in the local time zone.
struct SystemClock;

impl ClockSource for SystemClock {
    fn local_time(&self) -> TimeFields {
        let now = jiff::Zoned::now();
        TimeFields {
            year: now.year() as u16,
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
            weekday: now.weekday().to_monday_zero_offset() as u8,
        }
    }
}

/// Minimal status bar: a synthetic battery percentage (and the time of
/// day while no app renders its own clock) in the top-left corner.
struct SimStatusBar {
    clock: SystemClock,
    clock_visible: bool,
    battery_pct: f32,
    /// Minute last reported to the app, for change detection.
    last_minute: Option<u8>,
}

impl SimStatusBar {
    fn new() -> Self {
        Self {
            clock: SystemClock,
            clock_visible: true,
            battery_pct: 93.0,
            last_minute: None,
        }
    }

    fn render<S: DrawSurface>(&mut self, surface: &mut S, now: &TimeFields) -> Result<(), S::Error> {
        let mut text = format!("{:.0}%", self.battery_pct);
        if self.clock_visible {
            text.push_str(&format!("  {:02}:{:02}", now.hour, now.minute));
        }

        surface.set_font(FontId::Small);
        surface.set_color(STATUS_COLOR);
        surface.draw_string(&text, 0, 0, DISPLAY_WIDTH_PX)?;

        self.last_minute = Some(now.minute);
        Ok(())
    }
}

impl<S: DrawSurface> StatusBar<S> for SimStatusBar {
    fn set_clock_visible(&mut self, visible: bool) {
        self.clock_visible = visible;
    }

    fn draw(&mut self, surface: &mut S) -> Result<(), S::Error> {
        let now = self.clock.local_time();
        self.render(surface, &now)
    }

    fn update(&mut self, surface: &mut S) -> Result<Option<TimeFields>, S::Error> {
        self.battery_pct = (self.battery_pct - BATTERY_DRAIN_PCT).max(5.0);

        let now = self.clock.local_time();
        if self.last_minute == Some(now.minute) {
            return Ok(None);
        }

        self.render(surface, &now)?;
        Ok(Some(now))
    }
}

/// Records the tick cadence the app asks for; the main loop honors it.
#[derive(Default)]
struct HostScheduler {
    interval_ms: Option<u32>,
}

impl TickScheduler for HostScheduler {
    fn request_periodic(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting kanji clock simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: S=Sleep  W=Wake  Q=Quit");

    // SDL2 display and window
    let display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Kanji Clock", &output_settings);

    let mut surface = EgSurface::new(
        display,
        FontSet {
            large: &fonts::KANJI_16X16,
            small: &FONT_6X10,
        },
    );

    let mut face = KanjiFace::new(SystemClock, SimStatusBar::new());
    let mut scheduler = HostScheduler::default();

    if let Err(e) = face.activate(&mut surface, &mut scheduler) {
        error!("activation draw failed: {:?}", e);
    }
    window.update(surface.display());

    let tick_interval =
        Duration::from_millis(u64::from(scheduler.interval_ms.unwrap_or(TICK_INTERVAL_MS)));
    let mut last_tick = Instant::now();
    let mut ticks: u32 = 0;
    let mut sleeping = false;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,

                    Keycode::S if !sleeping => {
                        // The face keeps the screen through low-power
                        // mode; the display RAM is preserved.
                        let keep_screen = face.prepare_sleep();
                        info!("entering sleep (keep screen: {keep_screen})");
                        sleeping = true;
                    }

                    Keycode::W if sleeping => {
                        info!("waking from sleep");
                        sleeping = false;
                        if let Err(e) = face.resume(&mut surface) {
                            error!("resume draw failed: {:?}", e);
                        }
                        last_tick = Instant::now();
                    }

                    _ => {}
                },

                _ => {}
            }
        }

        // --- Periodic tick ------------------------------------------------
        if !sleeping && last_tick.elapsed() >= tick_interval {
            ticks = ticks.wrapping_add(1);
            if let Err(e) = face.on_tick(&mut surface, ticks) {
                error!("tick draw failed: {:?}", e);
            }
            last_tick = Instant::now();
        }

        window.update(surface.display());

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
