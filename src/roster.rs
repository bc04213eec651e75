//! Reference host layer: the mutable name list the engine operates on.
//!
//! [`Roster`] owns what the engine deliberately does not: the list between
//! runs, the sorted flag, the animation speed, and the narration log. It is
//! an in-process convenience host, not a UI; hosts that render live (badge
//! highlights, scrolling logs) should drive [`Engine`] directly with their
//! own [`TraceSink`](crate::core::TraceSink).

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algo::{Engine, SearchOutcome};
use crate::core::{
    DelayPacer, EventKind, SPEED_DEFAULT_MS, SPEED_MAX_MS, SPEED_MIN_MS, TraceLog, ValidationError,
};

const FIRST_NAMES: &[&str] = &[
    "Budi", "Siti", "Andi", "Dewi", "Joko", "Rina", "Agus", "Lina", "Dedi", "Nia",
];

const LAST_NAMES: &[&str] = &[
    "Wijaya", "Sari", "Kusuma", "Pratama", "Putri", "Saputra", "Utami", "Hidayat", "Nugraha",
    "Permata",
];

/// A mutable list of names with a sorted flag, an animation speed, and a
/// narration log.
///
/// Duplicates are permitted and never merged; entries are identified by
/// position only. The sorted flag is set by [`Roster::sort`] and cleared by
/// any mutation. [`Roster::search`] trusts the flag's contract rather than
/// verifying it: searching an unsorted roster quietly produces an
/// unreliable answer, matching the engine's documented behavior.
#[derive(Clone, Debug)]
pub struct Roster {
    names: Vec<String>,
    sorted: bool,
    speed_ms: u64,
    log: TraceLog,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            sorted: false,
            speed_ms: SPEED_DEFAULT_MS,
            log: TraceLog::new(),
        }
    }

    pub fn with_names(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::new()
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True only between a completed sort and the next mutation.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Narration log of the most recent operation, plus any host-side
    /// events (adds, shuffles) appended since.
    pub fn log(&self) -> &TraceLog {
        &self.log
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Sets the inter-step delay, clamped to the [`SPEED_MIN_MS`] to
    /// [`SPEED_MAX_MS`] range. Takes effect on the next run.
    pub fn set_speed(&mut self, ms: u64) {
        self.speed_ms = ms.clamp(SPEED_MIN_MS, SPEED_MAX_MS);
    }

    /// Appends a name. The name is trimmed; an empty result is rejected.
    pub fn add(&mut self, name: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        self.names.push(name.to_string());
        self.sorted = false;
        self.log.push(EventKind::Add, format!("Name added: {name}"));
        Ok(())
    }

    /// Appends `count` random full names from the fixed name pool.
    pub fn generate(&mut self, count: usize) {
        let mut rng = rand::rng();
        for _ in 0..count {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            self.names.push(format!("{first} {last}"));
        }
        self.sorted = false;
        self.log
            .push(EventKind::Add, format!("{count} names generated"));
    }

    /// Shuffles the list into a random order.
    pub fn shuffle(&mut self) {
        let mut rng = rand::rng();
        self.names.shuffle(&mut rng);
        self.sorted = false;
        self.log.push(EventKind::Select, "Names shuffled".to_string());
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.sorted = false;
        self.log
            .push(EventKind::Select, "All names removed".to_string());
    }

    /// Runs a traced sort at the configured speed, recording the narration
    /// in the internal log (the previous log is discarded). Marks the
    /// roster sorted and returns the comparison count.
    pub fn sort(&mut self) -> u32 {
        self.log.reset();
        let mut engine = Engine::with_pacer(DelayPacer::from_millis(self.speed_ms));
        let outcome = engine.run_sort(std::mem::take(&mut self.names), &mut self.log);
        self.names = outcome.items;
        self.sorted = true;
        outcome.comparisons
    }

    /// Runs a traced binary search for `target` against the current list,
    /// recording the narration in the internal log. The target is trimmed;
    /// an empty result is rejected.
    ///
    /// Callers should gate this on [`Roster::is_sorted`]; the search itself
    /// does not check the flag.
    pub fn search(&mut self, target: &str) -> Result<SearchOutcome, ValidationError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }
        self.log.reset();
        let mut engine = Engine::with_pacer(DelayPacer::from_millis(self.speed_ms));
        Ok(engine.run_search(&self.names, &target.to_string(), &mut self.log))
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
