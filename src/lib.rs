//! # Tracesort
//!
//! `tracesort` is a step-traced sorting and searching engine for
//! algorithm-visualization hosts: an in-place quicksort (Lomuto
//! partitioning, rightmost pivot) and an iterative binary search,
//! instrumented so that every comparison, swap, and midpoint inspection is
//! narrated as a typed trace event and separated by a cooperative
//! suspension point the host can turn into an animation delay.
//!
//! The engine is deliberately host-agnostic: it owns no UI state, retains
//! nothing across runs, and reports everything through a caller-supplied
//! [`TraceSink`]. Whether the host keeps its state in a global store or per
//! component is its own business.
//!
//! ## Key Features
//!
//! - **Narrated steps**: a 1-based, append-only stream of [`TraceEvent`]s
//!   (`Select`, `Compare`, `Swap`, `Scan`, `Found`, ...) describing each
//!   run in order, delivered live rather than batched.
//! - **Live markers**: [`SortState`] / [`SearchState`] highlight updates
//!   (pivot, cursor, swap pair, search bounds) published before every
//!   suspension point, so a renderer always draws a consistent frame.
//! - **Pluggable pacing**: the [`Pacer`] trait turns the gap between steps
//!   into whatever the host needs: a thread sleep ([`DelayPacer`]), an
//!   async yield, or nothing at all ([`NoPacer`]) for tests.
//! - **Faithful counts**: strict-`<` Lomuto partitioning, self-swaps
//!   included, so comparison and swap sequences are deterministic and
//!   reproducible, not just the final order.
//!
//! ## Usage
//!
//! ### Sorting with a collected log
//!
//! ```rust
//! use tracesort::prelude::*;
//!
//! let names = vec!["Dedi".to_string(), "Budi".to_string(), "Andi".to_string()];
//! let mut log = TraceLog::new();
//!
//! let outcome = Engine::new().run_sort(names, &mut log);
//!
//! assert_eq!(outcome.items, vec!["Andi", "Budi", "Dedi"]);
//! assert_eq!(outcome.comparisons, 3);
//! assert!(log.len() > 0);
//! ```
//!
//! ### Searching a sorted list
//!
//! Binary search trusts the caller's claim that the list is sorted; it is
//! not re-verified.
//!
//! ```rust
//! use tracesort::prelude::*;
//!
//! let names: Vec<String> = ["Andi", "Budi", "Dedi"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut log = TraceLog::new();
//!
//! let outcome = Engine::new().run_search(&names, &"Budi".to_string(), &mut log);
//!
//! assert_eq!(outcome.index, Some(1));
//! assert_eq!(outcome.comparisons, 1);
//! ```
//!
//! ### A paced run with a custom sink
//!
//! ```rust,no_run
//! use tracesort::prelude::*;
//! use tracesort::core::TraceEvent;
//!
//! struct Console;
//!
//! impl TraceSink<String> for Console {
//!     fn event(&mut self, event: &TraceEvent) {
//!         println!("{:04} - {}", event.sequence, event.message);
//!     }
//! }
//!
//! let names = vec!["Rina".to_string(), "Agus".to_string()];
//! let mut engine = Engine::with_pacer(DelayPacer::from_millis(500));
//! engine.run_sort(names, &mut Console);
//! ```
//!
//! ### The roster host
//!
//! [`Roster`] is a ready-made in-process host: a name list with input
//! validation, a sorted flag, random generation/shuffling, and an internal
//! log.
//!
//! ```rust
//! use tracesort::prelude::*;
//!
//! let mut roster = Roster::new();
//! roster.set_speed(100);
//! roster.add("Dewi").unwrap();
//! roster.add("Budi").unwrap();
//! assert!(roster.add("   ").is_err());
//!
//! roster.sort();
//! assert!(roster.is_sorted());
//! assert_eq!(roster.names(), ["Budi", "Dewi"]);
//! ```

pub mod algo;
pub mod core;
pub mod roster;

pub use algo::{Engine, SearchOutcome, SortOutcome};
pub use core::{
    DelayPacer, EventKind, NoPacer, NullSink, Pacer, SearchState, SortState, TraceEvent, TraceLog,
    TraceSink, ValidationError,
};
pub use roster::Roster;

pub mod prelude {
    pub use crate::algo::{Engine, SearchOutcome, SortOutcome};
    pub use crate::core::{
        DelayPacer, EventKind, NoPacer, NullSink, Pacer, TraceLog, TraceSink, ValidationError,
    };
    pub use crate::roster::Roster;
}
