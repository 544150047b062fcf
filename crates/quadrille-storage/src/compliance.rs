//! BoardStorage contract compliance helpers.
//!
//! These functions verify that a backend satisfies the invariants required
//! by the trait contract. Reused across the Dense, Sparse and Overlay test
//! modules. Every helper takes a factory producing a fresh backend that can
//! already accept writes anywhere in `0..4 x 0..4`, with `'.'` as its empty
//! value.

use crate::storage::BoardStorage;
use indexmap::IndexSet;
use quadrille_core::Point;

type Factory<'a> = &'a dyn Fn() -> Box<dyn BoardStorage<i32, char>>;

fn p(x: i32, y: i32) -> Point<i32> {
    Point::new(x, y)
}

fn ordered(s: &dyn BoardStorage<i32, char>) -> Vec<(Point<i32>, char)> {
    let mut out = Vec::new();
    s.iterate_ordered(&mut |q, v| {
        out.push((q, *v));
        true
    });
    out
}

/// Assert that a written value reads back and overwrites silently.
pub fn assert_set_then_get(make: Factory<'_>) {
    let mut s = make();
    s.set(p(2, 3), 'x');
    assert_eq!(s.get(p(2, 3)), Some(&'x'), "{}: set/get", s.backend_name());
    s.set(p(2, 3), 'y');
    assert_eq!(s.get(p(2, 3)), Some(&'y'), "{}: overwrite", s.backend_name());
}

/// Assert that far-away coordinates are not found and default-substitute.
pub fn assert_missing_uses_default(make: Factory<'_>) {
    let s = make();
    assert_eq!(s.get(p(-40, -40)), None, "{}: missing get", s.backend_name());
    assert_eq!(
        s.get_or_default(p(-40, -40), '?'),
        '?',
        "{}: missing get_or_default",
        s.backend_name()
    );
}

/// Assert that after `delete` the cell reads as either unset or empty.
pub fn assert_delete_is_consistent(make: Factory<'_>) {
    let mut s = make();
    s.set(p(1, 1), 'x');
    s.delete(p(1, 1));
    let after = s.get(p(1, 1));
    assert!(
        after.is_none() || after == Some(&'.'),
        "{}: delete left {after:?}",
        s.backend_name()
    );
    assert_eq!(s.get_or_default(p(1, 1), '.'), '.');
}

/// Assert that `iterate_ordered` is strictly increasing and repeatable.
pub fn assert_ordered_iteration_deterministic(make: Factory<'_>) {
    let mut s = make();
    for (x, y, c) in [(3, 0, 'a'), (0, 2, 'b'), (1, 0, 'c'), (2, 2, 'd')] {
        s.set(p(x, y), c);
    }
    let first = ordered(s.as_ref());
    let second = ordered(s.as_ref());
    assert_eq!(first, second, "{}: ordered walk not repeatable", s.backend_name());
    assert!(
        first.windows(2).all(|w| w[0].0 < w[1].0),
        "{}: ordered walk not strictly row-major",
        s.backend_name()
    );
}

/// Assert that `iterate` and `iterate_ordered` visit the same population
/// exactly once each.
pub fn assert_iterate_matches_ordered(make: Factory<'_>) {
    let mut s = make();
    for (x, y, c) in [(0, 0, 'a'), (3, 3, 'b'), (1, 2, 'c')] {
        s.set(p(x, y), c);
    }
    let mut unordered = Vec::new();
    s.iterate(&mut |q, v| {
        unordered.push((q, *v));
        true
    });
    let unique: IndexSet<_> = unordered.iter().map(|(q, _)| *q).collect();
    assert_eq!(unique.len(), unordered.len(), "{}: duplicate visit", s.backend_name());
    unordered.sort();
    assert_eq!(unordered, ordered(s.as_ref()));
    assert_eq!(s.len(), unordered.len());
}

/// Assert that a visitor returning `false` stops both walks.
pub fn assert_iteration_short_circuits(make: Factory<'_>) {
    let mut s = make();
    s.set(p(0, 0), 'a');
    s.set(p(1, 0), 'b');
    let mut visits = 0;
    assert!(!s.iterate(&mut |_, _| {
        visits += 1;
        false
    }));
    assert_eq!(visits, 1);
    visits = 0;
    assert!(!s.iterate_ordered(&mut |_, _| {
        visits += 1;
        false
    }));
    assert_eq!(visits, 1);
}

/// Assert that a copy shares no mutable state with its source.
pub fn assert_copy_is_independent(make: Factory<'_>) {
    let mut s = make();
    s.set(p(0, 1), 'a');
    let mut copy = s.copy_to_storage();
    assert_eq!(ordered(s.as_ref()), ordered(copy.as_ref()));
    copy.set(p(0, 1), 'z');
    copy.set(p(2, 2), 'y');
    assert_eq!(s.get(p(0, 1)), Some(&'a'));
    s.set(p(3, 1), 'q');
    assert_ne!(copy.get(p(3, 1)), Some(&'q'));
}

/// Run every compliance check against backends produced by `make`.
pub fn run_full_compliance(make: impl Fn() -> Box<dyn BoardStorage<i32, char>>) {
    assert_set_then_get(&make);
    assert_missing_uses_default(&make);
    assert_delete_is_consistent(&make);
    assert_ordered_iteration_deterministic(&make);
    assert_iterate_matches_ordered(&make);
    assert_iteration_short_circuits(&make);
    assert_copy_is_independent(&make);
}
