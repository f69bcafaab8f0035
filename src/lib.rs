//! # countdown-tui
//!
//! A full-terminal countdown timer built on [bubbletea-rs](https://docs.rs/bubbletea-rs).
//!
//! Set a duration with the arrow keys, start and pause it with space and reset
//! it with delete. Clicking the clock picks which field the arrows change, and
//! a double-click toggles fullscreen. When time runs out the window turns red
//! and shows `TIME'S UP!` until reset.
//!
//! The pieces are usable on their own:
//!
//! - [`countdown`]: the state machine, free of any terminal concerns
//! - [`timer`]: one-second tick scheduling with stale-tick rejection
//! - [`format`]: clock formatting and font scaling
//! - [`view`] and [`digits`]: layout and block-glyph rendering
//! - [`app`]: the Bubble Tea model wiring input to all of the above
//!
//! ```rust
//! use countdown_tui::prelude::*;
//!
//! let mut countdown = Countdown::new();
//! countdown.select(Section::Seconds);
//! countdown.increment();
//! assert_eq!(countdown.label(), "00:01");
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod countdown;
pub mod digits;
pub mod error;
pub mod format;
pub mod key;
pub mod logging;
pub mod timer;
pub mod view;

pub use app::App;
pub use config::Config;
pub use countdown::{Adjust, Countdown, RunState, Section};
pub use error::{Error, Result};
pub use key::{Action, Binding, KeyMap};
pub use timer::{TickMsg, Ticker};

/// Commonly used types.
pub mod prelude {
    pub use crate::app::{App, ClickTracker};
    pub use crate::config::Config;
    pub use crate::countdown::{Adjust, Countdown, RunState, Section};
    pub use crate::format::format_clock;
    pub use crate::key::{Action, Binding, KeyMap};
    pub use crate::timer::{TickMsg, Ticker};
    pub use crate::view::{Layout, Rect};
}
