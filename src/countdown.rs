//! The countdown state machine.
//!
//! [`Countdown`] owns the remaining time, the run state, the selected clock
//! section and the status line. It never touches the terminal: every operation
//! mutates state and, where time has to keep flowing, hands back a command for
//! the next tick. The Bubble Tea model in [`crate::app`] forwards events here and
//! renders whatever this reports.
//!
//! ```text
//!   Idle --toggle--> Running --toggle--> Paused
//!                      ^  |                 |
//!                      |  +--reaches 0--> Expired
//!                      +------toggle--------+
//!   any state --reset--> Idle
//! ```
//!
//! # Example
//!
//! ```rust
//! use countdown_tui::countdown::{Countdown, RunState, Section};
//!
//! let mut countdown = Countdown::new();
//! countdown.increment();
//! assert_eq!(countdown.remaining(), 60);
//!
//! countdown.select(Section::Seconds);
//! countdown.increment();
//! assert_eq!(countdown.label(), "01:01");
//!
//! let _tick = countdown.toggle();
//! assert_eq!(countdown.state(), RunState::Running);
//! ```

use crate::format::{format_clock, shows_hours, SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::timer::{TickMsg, Ticker};
use bubbletea_rs::{Cmd, Msg};

/// Status line shown while paused.
pub const STATUS_PAUSED: &str = "Paused";
/// Status line shown once time is up.
pub const STATUS_EXPIRED: &str = "Press 'DEL' button to reset time";
/// Label text shown once time is up.
pub const EXPIRED_LABEL: &str = "TIME'S UP!";

/// Lifecycle phase of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not started, or reset.
    #[default]
    Idle,
    /// Counting down once per second.
    Running,
    /// Frozen until resumed.
    Paused,
    /// Reached zero. Only a reset leaves this state.
    Expired,
}

/// Clock field targeted by keyboard adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The `HH` field.
    Hours,
    /// The `MM` field.
    Minutes,
    /// The `SS` field.
    Seconds,
}

impl Section {
    /// Number of seconds one adjustment of this field adds or removes.
    pub fn step(self) -> u64 {
        match self {
            Section::Hours => SECS_PER_HOUR,
            Section::Minutes => SECS_PER_MINUTE,
            Section::Seconds => 1,
        }
    }
}

/// Direction of an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjust {
    /// Add one step.
    Increment,
    /// Remove one step.
    Decrement,
}

/// Countdown state plus the ticker driving it.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: u64,
    state: RunState,
    selected: Option<Section>,
    status: &'static str,
    ticker: Ticker,
}

impl Countdown {
    /// Creates an idle countdown at `00:00`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle countdown preset to `secs`.
    pub fn with_remaining(secs: u64) -> Self {
        Self {
            remaining: secs,
            ..Self::default()
        }
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Section chosen by the last click, if any.
    pub fn selected(&self) -> Option<Section> {
        self.selected
    }

    /// Status line text. Empty when there is nothing to say.
    pub fn status(&self) -> &str {
        self.status
    }

    /// Whether the alert presentation is in effect.
    pub fn is_alert(&self) -> bool {
        self.state == RunState::Expired
    }

    /// The ticker driving this countdown.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Text for the clock label.
    pub fn label(&self) -> String {
        if self.is_alert() {
            EXPIRED_LABEL.to_string()
        } else {
            format_clock(self.remaining)
        }
    }

    /// Selects the field targeted by subsequent adjustments.
    pub fn select(&mut self, section: Section) {
        self.selected = Some(section);
    }

    /// Maps a click at `x` within a label `width` cells wide to a clock field.
    ///
    /// The label is split into equal zones, three when hours are shown and
    /// two otherwise. Returns `None` and leaves the selection alone when the
    /// label has no width.
    pub fn select_section(&mut self, x: u16, width: u16) -> Option<Section> {
        if width == 0 {
            return None;
        }
        let (x, width) = (u32::from(x), u32::from(width));
        let section = if shows_hours(self.remaining) {
            if x * 3 < width {
                Section::Hours
            } else if x * 3 < width * 2 {
                Section::Minutes
            } else {
                Section::Seconds
            }
        } else if x * 2 < width {
            Section::Minutes
        } else {
            Section::Seconds
        };
        tracing::debug!(?section, x, width, "section selected");
        self.selected = Some(section);
        Some(section)
    }

    /// Adds or removes one step of the selected field, minutes by default.
    ///
    /// A decrement larger than the time left falls back to one minute, and
    /// does nothing when less than a minute is left. Ignored once expired.
    pub fn adjust(&mut self, direction: Adjust) {
        if self.state == RunState::Expired {
            return;
        }
        let step = self.selected.unwrap_or(Section::Minutes).step();
        match direction {
            Adjust::Increment => self.remaining = self.remaining.saturating_add(step),
            Adjust::Decrement => {
                if self.remaining >= step {
                    self.remaining -= step;
                } else if self.remaining >= SECS_PER_MINUTE {
                    self.remaining -= SECS_PER_MINUTE;
                }
            }
        }
        tracing::debug!(remaining = self.remaining, ?direction, "adjusted");
    }

    /// Shorthand for `adjust(Adjust::Increment)`.
    pub fn increment(&mut self) {
        self.adjust(Adjust::Increment);
    }

    /// Shorthand for `adjust(Adjust::Decrement)`.
    pub fn decrement(&mut self) {
        self.adjust(Adjust::Decrement);
    }

    /// Starts, pauses or resumes.
    ///
    /// Returns the command for the first tick when time starts flowing.
    /// Starting at zero expires immediately. Does nothing once expired.
    pub fn toggle(&mut self) -> Option<Cmd> {
        match self.state {
            RunState::Idle | RunState::Paused => {
                if self.state == RunState::Paused {
                    self.status = "";
                }
                if self.remaining == 0 {
                    self.expire();
                    return None;
                }
                self.state = RunState::Running;
                tracing::debug!(remaining = self.remaining, "running");
                Some(self.ticker.start())
            }
            RunState::Running => {
                self.ticker.stop();
                self.state = RunState::Paused;
                self.status = STATUS_PAUSED;
                tracing::debug!(remaining = self.remaining, "paused");
                None
            }
            RunState::Expired => None,
        }
    }

    /// Returns to idle at `00:00` and clears status and alert.
    pub fn reset(&mut self) {
        self.ticker.stop();
        self.state = RunState::Idle;
        self.remaining = 0;
        self.status = "";
        tracing::debug!("reset");
    }

    /// Applies one tick. Stale ticks and ticks outside `Running` are dropped.
    ///
    /// Returns the next tick unless this one brought the countdown to zero.
    pub fn tick(&mut self, msg: &TickMsg) -> Option<Cmd> {
        if self.state != RunState::Running || !self.ticker.accepts(msg) {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expire();
            return None;
        }
        Some(self.ticker.next())
    }

    /// Routes a runtime message to this countdown.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            return self.tick(tick_msg);
        }
        None
    }

    fn expire(&mut self) {
        self.ticker.stop();
        self.state = RunState::Expired;
        self.status = STATUS_EXPIRED;
        tracing::info!("time is up");
    }
}
