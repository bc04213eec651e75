use std::cell::Cell;
use std::rc::Rc;

use rand::Rng;
use tracesort::prelude::*;

// Pacer that counts its suspension points instead of sleeping. The counter
// is shared so the test can read it after the engine consumes the pacer.
#[derive(Clone, Default)]
struct CountingPacer {
    pauses: Rc<Cell<u32>>,
}

impl Pacer for CountingPacer {
    fn pause(&mut self) {
        self.pauses.set(self.pauses.get() + 1);
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn swap_count(log: &TraceLog) -> u32 {
    log.events()
        .iter()
        .filter(|e| e.kind == EventKind::Swap)
        .count() as u32
}

#[test]
fn test_sort_pauses_once_per_comparison_and_swap() {
    // Pinned run: ["Dedi", "Budi", "Andi"] performs 3 comparisons and 3
    // swaps (one self-swap, two pivot placements), so 6 suspension points.
    let pacer = CountingPacer::default();
    let pauses = pacer.pauses.clone();
    let mut log = TraceLog::new();

    let outcome =
        Engine::with_pacer(pacer).run_sort(names(&["Dedi", "Budi", "Andi"]), &mut log);

    assert_eq!(outcome.comparisons, 3);
    assert_eq!(swap_count(&log), 3);
    assert_eq!(pauses.get(), 6);
}

#[test]
fn test_sort_never_pauses_on_empty_or_singleton() {
    let pacer = CountingPacer::default();
    let pauses = pacer.pauses.clone();
    let mut engine = Engine::with_pacer(pacer);

    engine.run_sort(Vec::<String>::new(), &mut NullSink);
    assert_eq!(pauses.get(), 0);

    engine.run_sort(names(&["Siti"]), &mut NullSink);
    assert_eq!(pauses.get(), 0);
}

#[test]
fn test_search_pauses_once_per_midpoint() {
    let sorted = names(&["Andi", "Budi", "Dedi"]);

    // "Zeno" exhausts the range after 2 midpoint checks.
    let pacer = CountingPacer::default();
    let pauses = pacer.pauses.clone();
    let outcome =
        Engine::with_pacer(pacer).run_search(&sorted, &"Zeno".to_string(), &mut NullSink);
    assert_eq!(outcome.comparisons, 2);
    assert_eq!(pauses.get(), 2);

    // "Budi" is the first midpoint: one check, one pause.
    let pacer = CountingPacer::default();
    let pauses = pacer.pauses.clone();
    let outcome =
        Engine::with_pacer(pacer).run_search(&sorted, &"Budi".to_string(), &mut NullSink);
    assert_eq!(outcome.comparisons, 1);
    assert_eq!(pauses.get(), 1);
}

#[test]
fn test_search_empty_list_never_pauses() {
    let pacer = CountingPacer::default();
    let pauses = pacer.pauses.clone();

    Engine::with_pacer(pacer).run_search(&Vec::<String>::new(), &"Andi".to_string(), &mut NullSink);
    assert_eq!(pauses.get(), 0);
}

#[test]
fn test_fuzz_pause_count_matches_steps() {
    // For any input, sort pauses exactly once per comparison plus once per
    // swap event, and search exactly once per midpoint check.
    let mut rng = rand::rng();

    for _ in 0..200 {
        let count = rng.random_range(0..20);
        let input: Vec<String> = (0..count)
            .map(|_| {
                let len = rng.random_range(1..6);
                (0..len)
                    .map(|_| char::from(b'a' + rng.random_range(0..26)))
                    .collect()
            })
            .collect();

        let pacer = CountingPacer::default();
        let pauses = pacer.pauses.clone();
        let mut log = TraceLog::new();
        let outcome = Engine::with_pacer(pacer).run_sort(input, &mut log);
        assert_eq!(pauses.get(), outcome.comparisons + swap_count(&log));

        let target: String = (0..3)
            .map(|_| char::from(b'a' + rng.random_range(0..26)))
            .collect();
        let pacer = CountingPacer::default();
        let pauses = pacer.pauses.clone();
        let found = Engine::with_pacer(pacer).run_search(&outcome.items, &target, &mut NullSink);
        assert_eq!(pauses.get(), found.comparisons);
    }
}
