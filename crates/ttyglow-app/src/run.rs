use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyEvent;

use ttyglow_core::{assets::Assets, clock::FrameCounter, snapshot::MetricsSource};
use ttyglow_ui::{renderer::render_frame, surface::Surface};

/// Pause between frames.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Where frames are drawn and keys are read from.
pub trait Screen {
    /// Draw one frame by handing `paint` a surface sized to the terminal.
    fn draw(&mut self, paint: &mut dyn FnMut(&mut dyn Surface)) -> Result<()>;

    /// Return a pending key press, waiting at most `timeout`.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// The dashboard run loop: snapshot, render, sleep, poll.
pub struct Dashboard<M> {
    metrics: M,
    assets: Assets,
    interface: String,
    frames: FrameCounter,
    tick_interval: Duration,
}

impl<M: MetricsSource> Dashboard<M> {
    /// Resolve the primary interface once and start at frame 0.
    pub fn new(mut metrics: M, assets: Assets) -> Self {
        let interface = metrics.primary_interface();
        Self {
            metrics,
            assets,
            interface,
            frames: FrameCounter::new(),
            tick_interval: TICK_INTERVAL,
        }
    }

    #[cfg(test)]
    fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Render one frame, sleep, then check for a key press.
    ///
    /// Draw and input failures are logged and otherwise ignored; the only way
    /// out is a key press.
    pub fn tick<S: Screen + ?Sized>(&mut self, screen: &mut S) -> Step {
        let snap = self.metrics.snapshot(&self.interface);
        let frame = self.frames.get();
        let assets = &self.assets;

        let drawn = screen.draw(&mut |surface: &mut dyn Surface| {
            render_frame(surface, &snap, frame, assets);
        });
        if let Err(err) = drawn {
            tracing::warn!(frame, error = %format!("{err:#}"), "frame not drawn");
        }

        std::thread::sleep(self.tick_interval);
        self.frames.advance();

        match screen.poll_key(Duration::ZERO) {
            Ok(Some(key)) => {
                tracing::info!(code = ?key.code, "key pressed, exiting");
                Step::Exit
            }
            Ok(None) => Step::Continue,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "key poll failed");
                Step::Continue
            }
        }
    }

    /// Tick until a key is pressed. Returns the number of frames rendered.
    pub fn run<S: Screen + ?Sized>(&mut self, screen: &mut S) -> u64 {
        while self.tick(screen) == Step::Continue {}
        self.frames.get()
    }

    /// Open a screen with `open`, run until a key press, then drop the screen.
    ///
    /// A screen that cannot be opened is reported and counts as zero frames;
    /// the caller's exit actions still run.
    pub fn run_in<S: Screen>(&mut self, open: impl FnOnce() -> Result<S>) -> u64 {
        let mut screen = match open() {
            Ok(screen) => screen,
            Err(err) => {
                tracing::error!(error = %format!("{err:#}"), "terminal setup failed");
                eprintln!("Failed to set up terminal: {err:#}");
                return 0;
            }
        };
        self.run(&mut screen)
    }

    /// Interface whose address is displayed.
    pub fn interface(&self) -> &str {
        &self.interface
    }
}
