//! Traced sorting and searching (Lomuto quicksort and binary search).
//!
//! Both algorithms are instrumented: every comparison, swap, and midpoint
//! inspection emits a [`TraceEvent`] and updates the highlight markers
//! before yielding at a [`Pacer`] suspension point. The event stream is the
//! product here, not raw speed; the exact order and count of events is part
//! of the contract and is pinned by the test suite.
//!
//! The main entry points are [`Engine::run_sort`] and [`Engine::run_search`].

use std::cmp::Ordering;
use std::fmt::Display;

use crate::core::{EventKind, NoPacer, Pacer, SearchState, SortState, TraceEvent, TraceSink};

/// Result of a traced sort run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOutcome<T> {
    /// The input list, sorted ascending.
    pub items: Vec<T>,
    /// Total `(element, pivot)` comparisons performed.
    pub comparisons: u32,
}

/// Result of a traced search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Index of a matching element, or `None` when the target is absent.
    pub index: Option<usize>,
    /// Total midpoint checks performed.
    pub comparisons: u32,
}

/// The traced algorithm engine.
///
/// Holds only the pacing strategy. All run state lives for the duration of
/// a single operation and is handed to the sink step by step; the engine
/// never retains the list across runs. Exactly one operation runs at a
/// time: both entry points take `&mut self` and drive the run to completion
/// before returning (there is no mid-run cancellation).
///
/// # Examples
///
/// ```
/// use tracesort::prelude::*;
///
/// let names = vec!["Dedi".to_string(), "Budi".to_string(), "Andi".to_string()];
/// let mut log = TraceLog::new();
///
/// let outcome = Engine::new().run_sort(names, &mut log);
///
/// assert_eq!(outcome.items, vec!["Andi", "Budi", "Dedi"]);
/// assert_eq!(outcome.comparisons, 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine<P = NoPacer> {
    pacer: P,
}

impl Engine<NoPacer> {
    /// Engine with pacing disabled (headless runs, tests).
    pub fn new() -> Self {
        Self { pacer: NoPacer }
    }
}

impl<P: Pacer> Engine<P> {
    /// Engine with a custom pacing strategy.
    pub fn with_pacer(pacer: P) -> Self {
        Self { pacer }
    }

    /// Sorts `items` ascending in place with a traced Lomuto quicksort
    /// (rightmost element as pivot, strict `<`, so elements equal to the
    /// pivot stay on its right).
    ///
    /// Emits one `Compare` event per `(element, pivot)` comparison and one
    /// `Swap` event per exchange, self-swaps and the final pivot placement
    /// included, with a suspension point after each. Any input completes;
    /// empty and singleton lists produce only the start/end narration and
    /// zero comparisons.
    pub fn run_sort<T, S>(&mut self, items: Vec<T>, sink: &mut S) -> SortOutcome<T>
    where
        T: Ord + Display,
        S: TraceSink<T>,
    {
        let high = items.len() as isize - 1;
        let mut run = SortRun {
            items,
            sink,
            pacer: &mut self.pacer,
            state: SortState::default(),
            seq: 0,
        };
        run.emit(EventKind::Select, "Starting quicksort".to_string());
        run.quicksort(0, high);
        run.emit(EventKind::Select, "Quicksort complete".to_string());
        run.finish()
    }

    /// Binary search for `target` over `items`, which the caller asserts
    /// are sorted ascending under the same ordering `run_sort` produces.
    ///
    /// The precondition is trusted, not re-verified: on an unsorted list
    /// the run still completes, but the answer is unreliable. When the
    /// target occurs more than once, the returned index is whichever
    /// occurrence the descent lands on first.
    ///
    /// Emits one `Scan` event per midpoint inspection (one suspension point
    /// each), a `Compare` event per directional decision, and a terminal
    /// `Found` or `NotFound`. An empty list is an immediate `NotFound` with
    /// zero midpoint checks.
    pub fn run_search<T, S>(&mut self, items: &[T], target: &T, sink: &mut S) -> SearchOutcome
    where
        T: Ord + Display,
        S: TraceSink<T>,
    {
        let mut run = SearchRun {
            items,
            sink,
            pacer: &mut self.pacer,
            state: SearchState {
                left: 0,
                right: items.len() as isize - 1,
                cursor: None,
                comparisons: 0,
            },
            seq: 0,
        };
        run.emit(
            EventKind::Select,
            format!("Starting binary search for {target}"),
        );
        let index = run.descend(target);
        run.finish(index)
    }
}

/// State owned by one sort run: the list, the event counter, and the
/// highlight markers, plus borrows of the host's sink and pacer.
struct SortRun<'a, T, S, P> {
    items: Vec<T>,
    sink: &'a mut S,
    pacer: &'a mut P,
    state: SortState,
    seq: u32,
}

impl<T, S, P> SortRun<'_, T, S, P>
where
    T: Ord + Display,
    S: TraceSink<T>,
    P: Pacer,
{
    fn emit(&mut self, kind: EventKind, message: String) {
        self.seq += 1;
        let event = TraceEvent {
            sequence: self.seq,
            kind,
            message,
        };
        self.sink.event(&event);
    }

    fn publish_state(&mut self) {
        self.sink.sort_state(&self.state);
    }

    fn quicksort(&mut self, low: isize, high: isize) {
        if low >= high {
            return;
        }
        self.state.low = low;
        self.state.high = high;
        self.publish_state();
        self.emit(
            EventKind::Select,
            format!("Partitioning from index {low} to {high}"),
        );
        let pi = self.partition(low, high);
        self.emit(
            EventKind::Select,
            format!("Pivot element placed at index {pi}"),
        );
        self.quicksort(low, pi - 1);
        self.quicksort(pi + 1, high);
    }

    /// Lomuto partition over `[low, high]` with `items[high]` as pivot.
    /// Returns the pivot's final index.
    fn partition(&mut self, low: isize, high: isize) -> isize {
        let hi = high as usize;
        // The pivot value stays at `hi` until the placement swap, but swaps
        // move elements under us, so capture its label up front.
        let pivot_label = self.items[hi].to_string();
        self.state.pivot = Some(hi);
        self.publish_state();
        self.emit(EventKind::Select, format!("Selecting pivot: {pivot_label}"));

        let mut i = low - 1;
        for j in low..high {
            let ju = j as usize;
            self.state.cursor = Some(ju);
            self.state.comparisons += 1;
            self.publish_state();
            self.emit(
                EventKind::Compare,
                format!("Comparing {} with pivot {pivot_label}", self.items[ju]),
            );
            self.pacer.pause();
            // Strict `<`: ties with the pivot do not move left.
            if self.items[ju] < self.items[hi] {
                i += 1;
                let iu = i as usize;
                self.state.swap_mark = Some(iu);
                self.publish_state();
                self.emit(
                    EventKind::Swap,
                    format!("Swapping {} and {}", self.items[iu], self.items[ju]),
                );
                self.swap(iu, ju);
            }
        }

        let dest = (i + 1) as usize;
        self.emit(
            EventKind::Swap,
            format!("Swapping {} and {} (pivot)", self.items[dest], self.items[hi]),
        );
        self.swap(dest, hi);
        self.state.pivot = None;
        self.publish_state();
        i + 1
    }

    /// One traced exchange: pause, swap, then show the renderer the moved
    /// pair and the fresh snapshot. `i == j` is allowed and still narrated.
    fn swap(&mut self, i: usize, j: usize) {
        self.pacer.pause();
        self.items.swap(i, j);
        self.state.cursor = Some(i);
        self.state.swap_mark = Some(j);
        self.publish_state();
        self.sink.items(&self.items);
    }

    fn finish(mut self) -> SortOutcome<T> {
        self.state.low = 0;
        self.state.high = 0;
        self.state.pivot = None;
        self.state.cursor = None;
        self.state.swap_mark = None;
        self.publish_state();
        SortOutcome {
            items: self.items,
            comparisons: self.state.comparisons,
        }
    }
}

struct SearchRun<'a, T, S, P> {
    items: &'a [T],
    sink: &'a mut S,
    pacer: &'a mut P,
    state: SearchState,
    seq: u32,
}

impl<T, S, P> SearchRun<'_, T, S, P>
where
    T: Ord + Display,
    S: TraceSink<T>,
    P: Pacer,
{
    fn emit(&mut self, kind: EventKind, message: String) {
        self.seq += 1;
        let event = TraceEvent {
            sequence: self.seq,
            kind,
            message,
        };
        self.sink.event(&event);
    }

    fn publish_state(&mut self) {
        self.sink.search_state(&self.state);
    }

    fn descend(&mut self, target: &T) -> Option<usize> {
        while self.state.left <= self.state.right {
            let mid = ((self.state.left + self.state.right) / 2) as usize;
            self.state.cursor = Some(mid);
            self.state.comparisons += 1;
            self.publish_state();
            self.emit(
                EventKind::Scan,
                format!("Checking middle element at index {mid}: {}", self.items[mid]),
            );
            self.pacer.pause();

            match self.items[mid].cmp(target) {
                Ordering::Equal => {
                    self.emit(EventKind::Found, format!("{target} found at index {mid}"));
                    return Some(mid);
                }
                Ordering::Less => {
                    self.emit(
                        EventKind::Compare,
                        format!("{target} is larger, searching the right half"),
                    );
                    self.state.left = mid as isize + 1;
                }
                Ordering::Greater => {
                    self.emit(
                        EventKind::Compare,
                        format!("{target} is smaller, searching the left half"),
                    );
                    self.state.right = mid as isize - 1;
                }
            }
        }

        self.emit(EventKind::NotFound, format!("{target} not found in the list"));
        None
    }

    fn finish(mut self, index: Option<usize>) -> SearchOutcome {
        // Leave the cursor on the match (if any) so a renderer keeps it
        // highlighted after the run.
        self.state.cursor = index;
        self.publish_state();
        SearchOutcome {
            index,
            comparisons: self.state.comparisons,
        }
    }
}
