//! One-second tick scheduling for the countdown.
//!
//! A running countdown is driven by a chain of one-shot tick commands: every
//! accepted [`TickMsg`] schedules the next one. Each message carries the id of
//! the ticker that produced it and the generation tag that was current when it
//! was scheduled. Starting, stopping and resetting all bump the tag, so any tick
//! still in flight from an earlier run is rejected when it arrives and at most
//! one chain is ever live.
//!
//! # Example
//!
//! ```rust
//! use countdown_tui::timer::Ticker;
//! use std::time::Duration;
//!
//! let mut ticker = Ticker::new();
//! assert_eq!(ticker.interval, Duration::from_secs(1));
//!
//! let _first_tick = ticker.start();
//! assert!(ticker.is_active());
//!
//! ticker.stop();
//! assert!(!ticker.is_active());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered once per interval while a ticker chain is live.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifier of the ticker that scheduled this tick.
    pub id: i64,
    tag: i64,
}

impl TickMsg {
    /// Generation tag this tick was scheduled under.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// Schedules ticks and decides which arriving ticks are still current.
#[derive(Debug, Clone)]
pub struct Ticker {
    /// Time between ticks.
    pub interval: Duration,

    id: i64,
    tag: i64,
    active: bool,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    /// Creates an idle ticker with a one second interval.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Creates an idle ticker with a custom interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            active: false,
        }
    }

    /// Unique identifier of this ticker.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Current generation tag.
    pub fn tag(&self) -> i64 {
        self.tag
    }

    /// Whether a tick chain is live.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begins a new chain, orphaning any tick from a previous one, and returns
    /// the command for its first tick.
    pub fn start(&mut self) -> Cmd {
        self.tag += 1;
        self.active = true;
        tracing::trace!(id = self.id, tag = self.tag, "tick chain started");
        self.schedule()
    }

    /// Ends the live chain. The tick already in flight will be rejected.
    pub fn stop(&mut self) {
        if self.active {
            tracing::trace!(id = self.id, tag = self.tag, "tick chain stopped");
        }
        self.tag += 1;
        self.active = false;
    }

    /// Reports whether `msg` belongs to the live chain of this ticker.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.active && msg.id == self.id && msg.tag == self.tag
    }

    /// Command delivering the next tick of the live chain.
    pub fn next(&self) -> Cmd {
        self.schedule()
    }

    fn schedule(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    #[cfg(test)]
    pub(crate) fn current_tick(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }
}
