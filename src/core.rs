//! Shared event/log model, pacing contract, and run-state types.
//!
//! This module defines:
//! - [`TraceEvent`] / [`EventKind`]: the narrated step log entries.
//! - [`TraceSink`]: the observer trait hosts implement to render runs live.
//! - [`TraceLog`]: a ready-made collecting sink.
//! - [`Pacer`]: the cooperative suspension point between steps.
//! - [`SortState`] / [`SearchState`]: highlight markers for a run in progress.

use std::thread;
use std::time::Duration;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound for the host-facing animation delay, in milliseconds.
pub const SPEED_MIN_MS: u64 = 100;
/// Upper bound for the host-facing animation delay, in milliseconds.
pub const SPEED_MAX_MS: u64 = 1000;
/// Default delay between steps.
pub const SPEED_DEFAULT_MS: u64 = 500;

/// Category tag attached to every trace event.
///
/// Kinds are presentation hints only (log line coloring, badge icons);
/// they never affect engine behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EventKind {
    /// An item was appended to the list.
    Add,
    /// Structural narration: run start/end, partition ranges, pivot choice.
    Select,
    /// An ordering decision (element vs pivot, or which half to search).
    Compare,
    /// Two elements exchanged positions (self-swaps included).
    Swap,
    /// A binary-search midpoint inspection.
    Scan,
    /// Search target located.
    Found,
    /// Search range exhausted without a match.
    NotFound,
}

/// One narrated step of a traced run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    /// 1-based position in the log of the current operation.
    pub sequence: u32,
    /// Presentation category.
    pub kind: EventKind,
    /// Human-readable narration for the step.
    pub message: String,
}

/// Highlight markers for a sort run in progress.
///
/// Marker fields are `None` whenever no element currently holds that role;
/// all of them are cleared when the run completes. `low`/`high` mirror the
/// bounds of the partition being processed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SortState {
    pub low: isize,
    pub high: isize,
    /// Index of the current pivot element.
    pub pivot: Option<usize>,
    /// Element currently being compared against the pivot.
    pub cursor: Option<usize>,
    /// Second element of an active swap.
    pub swap_mark: Option<usize>,
    /// Comparisons performed so far in this run.
    pub comparisons: u32,
}

/// Highlight markers for a search run in progress.
///
/// Invariant: `left <= right + 1`; the run terminates once `left > right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchState {
    pub left: isize,
    pub right: isize,
    /// Midpoint currently under inspection.
    pub cursor: Option<usize>,
    /// Midpoint checks performed so far in this run.
    pub comparisons: u32,
}

/// Observer contract between the engine and its host.
///
/// The engine calls these synchronously, in emission order, just before the
/// next suspension point, so a renderer always sees list and marker state
/// consistent with the narration. Everything except [`TraceSink::event`]
/// defaults to a no-op; implement only what your host renders.
///
/// # Examples
///
/// ```
/// use tracesort::core::{TraceEvent, TraceSink};
///
/// struct Printer;
///
/// impl TraceSink<String> for Printer {
///     fn event(&mut self, event: &TraceEvent) {
///         println!("{:04} - {}", event.sequence, event.message);
///     }
/// }
/// ```
pub trait TraceSink<T> {
    /// A trace event was appended to the current operation's log.
    fn event(&mut self, event: &TraceEvent);

    /// The list mutated; `items` is the full snapshot after the swap.
    fn items(&mut self, items: &[T]) {
        let _ = items;
    }

    /// Sort highlight markers changed.
    fn sort_state(&mut self, state: &SortState) {
        let _ = state;
    }

    /// Search highlight markers changed.
    fn search_state(&mut self, state: &SearchState) {
        let _ = state;
    }
}

/// Append-only event log; the collecting [`TraceSink`] used by hosts that
/// render after the fact, and by the test suite.
///
/// A log spans exactly one operation: the engine restarts its 1-based
/// sequence numbering per run, so a log reused across runs must be
/// [`reset`](TraceLog::reset) in between.
#[derive(Clone, Debug, Default)]
pub struct TraceLog {
    events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous operation's entries.
    pub fn reset(&mut self) {
        self.events.clear();
    }

    /// Appends a host-side event (e.g. an `Add` narration), numbering it
    /// after the current tail of the log.
    pub fn push(&mut self, kind: EventKind, message: String) {
        let sequence = self.events.len() as u32 + 1;
        self.events.push(TraceEvent {
            sequence,
            kind,
            message,
        });
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TraceEvent> {
        self.events.last()
    }
}

impl<T> TraceSink<T> for TraceLog {
    fn event(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Sink that discards everything. Useful for benchmarks and for callers
/// interested only in outcomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl<T> TraceSink<T> for NullSink {
    fn event(&mut self, _event: &TraceEvent) {}
}

/// Cooperative suspension point between traced steps.
///
/// The engine calls [`Pacer::pause`] once per comparison and once per swap
/// during a sort, and once per midpoint during a search. It performs no
/// other work while paused; animation delays (or async yields) live entirely
/// in the pacer, which keeps the core logic testable without wall-clock
/// waits.
pub trait Pacer {
    fn pause(&mut self);
}

/// Pacer that never pauses. The default for headless runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self) {}
}

/// Pacer that sleeps the current thread for a fixed delay at every
/// suspension point.
///
/// The delay is fixed for the lifetime of the pacer; hosts adjust speed
/// between runs by constructing a new one.
#[derive(Clone, Copy, Debug)]
pub struct DelayPacer {
    delay: Duration,
}

impl DelayPacer {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }
}

impl Pacer for DelayPacer {
    fn pause(&mut self) {
        thread::sleep(self.delay);
    }
}

/// Input validation failures surfaced by the host layer.
///
/// The engine operations themselves are total over their preconditions;
/// only roster-level input checks can fail.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A name to add was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,
    /// A search target was empty after trimming.
    #[error("search target must not be empty")]
    EmptyTarget,
}
