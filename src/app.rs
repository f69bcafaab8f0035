//! The Bubble Tea model tying input to the countdown.
//!
//! [`App`] owns every piece of state: the [`Countdown`], the presentation
//! flags and the last known terminal size. Key presses, mouse clicks, resizes
//! and ticks all arrive as messages in [`App::update`], so nothing is shared
//! with another thread.
//!
//! # Running
//!
//! ```rust,no_run
//! use bubbletea_rs::{MouseMotion, Program};
//! use countdown_tui::App;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let program = Program::<App>::builder()
//!     .alt_screen(true)
//!     .mouse_motion(MouseMotion::Cell)
//!     .build()?;
//! program.run().await?;
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::countdown::{Adjust, Countdown};
use crate::key::{Action, KeyMap};
use crate::view::{self, Layout};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg, WindowSizeMsg};
use crossterm::event::{MouseButton, MouseEventKind};
use std::time::{Duration, Instant};

/// Pairs consecutive left clicks into double-clicks.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    window: Duration,
    last: Option<(Instant, u16, u16)>,
}

impl ClickTracker {
    /// Creates a tracker treating clicks closer than `window` as a double.
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Records a click at (`x`, `y`) and reports whether it completes a
    /// double-click. A completed pair is forgotten, so a third click starts a
    /// new pair.
    pub fn register(&mut self, x: u16, y: u16, at: Instant) -> bool {
        if let Some((prev, px, py)) = self.last {
            if (px, py) == (x, y) && at.saturating_duration_since(prev) <= self.window {
                self.last = None;
                return true;
            }
        }
        self.last = Some((at, x, y));
        false
    }
}

/// The countdown application.
#[derive(Debug, Clone)]
pub struct App {
    countdown: Countdown,
    config: Config,
    keymap: KeyMap,
    clicks: ClickTracker,
    fullscreen: bool,
    width: u16,
    height: u16,
}

impl App {
    /// Creates an app from `config`, sized to the configured window until the
    /// terminal reports its real size.
    pub fn new(config: Config) -> Self {
        Self {
            countdown: Countdown::new(),
            keymap: KeyMap::default(),
            clicks: ClickTracker::new(config.double_click_window()),
            fullscreen: config.start_fullscreen,
            width: config.windowed_width,
            height: config.windowed_height,
            config,
        }
    }

    /// The countdown being displayed.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Whether the window fills the terminal.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Last known terminal size.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Layout of the current frame.
    pub fn layout(&self) -> Layout {
        Layout::compute(
            self.width,
            self.height,
            self.fullscreen,
            &self.config,
            &self.countdown.label(),
        )
    }

    /// Flips between windowed and fullscreen.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        tracing::debug!(fullscreen = self.fullscreen, "fullscreen toggled");
    }

    /// Records a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        tracing::debug!(
            width,
            height,
            font_size = self.layout().font_size,
            "resized"
        );
    }

    /// Handles a left click at terminal cell (`x`, `y`).
    ///
    /// A click on the label selects the clock field under it. The second of
    /// two quick clicks on the same cell toggles fullscreen.
    pub fn click(&mut self, x: u16, y: u16, at: Instant) {
        if let Some(offset) = self.layout().label_offset(x, y) {
            let width = self.layout().label.width;
            self.countdown.select_section(offset, width);
        }
        if self.clicks.register(x, y, at) {
            self.toggle_fullscreen();
        }
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        match self.keymap.action_for(key_msg)? {
            Action::Increment => {
                self.countdown.adjust(Adjust::Increment);
                None
            }
            Action::Decrement => {
                self.countdown.adjust(Adjust::Decrement);
                None
            }
            Action::Toggle => self.countdown.toggle(),
            Action::Reset => {
                self.countdown.reset();
                None
            }
            Action::Escape => {
                if self.fullscreen {
                    self.toggle_fullscreen();
                    None
                } else {
                    tracing::info!("quitting");
                    Some(quit())
                }
            }
            Action::Quit => {
                tracing::info!("quitting");
                Some(quit())
            }
        }
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut app = App::new(Config::load_or_default());
        if let Ok((width, height)) = crossterm::terminal::size() {
            app.width = width;
            app.height = height;
        }
        tracing::info!(size = ?app.size(), fullscreen = app.fullscreen, "countdown started");
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(mouse_msg) = msg.downcast_ref::<MouseMsg>() {
            if mouse_msg.button == MouseEventKind::Down(MouseButton::Left) {
                self.click(mouse_msg.x, mouse_msg.y, Instant::now());
            }
            return None;
        }

        if let Some(size_msg) = msg.downcast_ref::<WindowSizeMsg>() {
            self.resize(size_msg.width, size_msg.height);
            return None;
        }

        self.countdown.update(&msg)
    }

    fn view(&self) -> String {
        view::render(
            &self.layout(),
            self.height,
            &self.countdown,
            &self.config,
            &self.keymap.short_help(),
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
