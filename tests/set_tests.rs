//! Unit tests for `Set`.
//!
//! These tests exercise the full operation contract: construction,
//! mutation, membership, set algebra, and the functional combinators,
//! including their empty-set and tie-break behavior.

use rstest::rstest;
use setkit::{Set, set};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: Set<i32> = Set::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: Set<i32> = Set::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_construction_collapses_duplicates_silently() {
    let from_array: Set<&str> = ["a", "a", "b"].into();
    let from_iter: Set<&str> = ["a", "a", "b"].into_iter().collect();
    let from_macro = set!["a", "a", "b"];

    assert_eq!(from_array.len(), 2);
    assert_eq!(from_iter.len(), 2);
    assert_eq!(from_macro.len(), 2);
}

#[rstest]
fn test_len_counts_distinct_insertions() {
    let mut set = Set::new();
    for element in [1, 2, 2, 3, 3, 3] {
        set.insert(element);
    }
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Mutation Idempotence
// =============================================================================

#[rstest]
fn test_double_insert_equals_single_insert() {
    let mut once: Set<i32> = [1, 2].into();
    once.insert(3);

    let mut twice: Set<i32> = [1, 2].into();
    twice.insert(3);
    twice.insert(3);

    assert_eq!(once, twice);
}

#[rstest]
fn test_remove_absent_element_is_a_noop() {
    let mut set: Set<i32> = [1, 2].into();
    let before = set.clone();

    assert!(!set.remove(&99));
    assert_eq!(set, before);
}

#[rstest]
fn test_clear_empties_but_keeps_set_usable() {
    let mut set: Set<i32> = [1, 2, 3].into();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.to_vec(), Vec::<i32>::new());

    set.insert(42);
    assert!(set.contains(&42));
}

// =============================================================================
// Spec Scenarios
// =============================================================================

#[rstest]
fn test_union_of_string_sets() {
    let set_a: Set<&str> = ["a", "b"].into();
    let set_b: Set<&str> = ["b", "c"].into();

    assert_eq!(set_a.union(&set_b), ["a", "b", "c"].into());
}

#[rstest]
fn test_difference_of_string_sets() {
    let set: Set<&str> = ["a", "b", "c"].into();
    let to_remove: Set<&str> = ["b"].into();

    assert_eq!(set.difference(&to_remove), ["a", "c"].into());
}

#[rstest]
fn test_subset_of_string_sets() {
    let smaller: Set<&str> = ["a", "b"].into();
    let larger: Set<&str> = ["a", "b", "c"].into();

    assert!(smaller.is_subset(&larger));
    assert!(!larger.is_subset(&smaller));
}

#[rstest]
fn test_find_on_empty_string_set_is_none() {
    let empty: Set<String> = Set::new();
    assert_eq!(empty.find(|_| true), None);
}

#[rstest]
fn test_fold_with_initial_ten() {
    let set: Set<i32> = [1, 2, 3].into();
    let total = set.fold(10, |accumulator, element| accumulator + element);
    assert_eq!(total, 16);
}

// =============================================================================
// Algebra Edge Cases
// =============================================================================

#[rstest]
fn test_union_with_empty_set_is_identity() {
    let set: Set<i32> = [1, 2].into();
    let empty: Set<i32> = Set::new();

    assert_eq!(set.union(&empty), set);
    assert_eq!(empty.union(&set), set);
}

#[rstest]
fn test_intersection_with_empty_set_is_empty() {
    let set: Set<i32> = [1, 2].into();
    let empty: Set<i32> = Set::new();

    assert!(set.intersection(&empty).is_empty());
    assert!(empty.intersection(&set).is_empty());
}

#[rstest]
fn test_derived_sets_are_independent_of_operands() {
    let set_a: Set<i32> = [1, 2].into();
    let set_b: Set<i32> = [2, 3].into();

    let mut union = set_a.union(&set_b);
    union.insert(99);
    union.remove(&1);

    assert!(set_a.contains(&1));
    assert!(!set_a.contains(&99));
    assert!(!set_b.contains(&99));
}

#[rstest]
fn test_equal_sets_with_different_insertion_histories() {
    let mut grown = Set::new();
    grown.insert(1);
    grown.insert(2);
    grown.insert(3);
    grown.remove(&3);

    let direct: Set<i32> = [2, 1].into();

    assert_eq!(grown, direct);
    assert_eq!(direct, grown);
}

#[rstest]
fn test_empty_sets_are_equal() {
    let set_a: Set<i32> = Set::new();
    let set_b: Set<i32> = Set::new();
    assert_eq!(set_a, set_b);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_map_collapse_pinned_by_contract() {
    let set: Set<i32> = [1, 2, 3].into();
    let parities = set.map(|element| element % 2);

    // {1, 2, 3} under x mod 2 collapses to {0, 1}: cardinality 2, not 3.
    assert_eq!(parities, [0, 1].into());
}

#[rstest]
fn test_map_with_injective_function_preserves_cardinality() {
    let set: Set<i32> = [1, 2, 3].into();
    let doubled = set.map(|element| element * 2);

    assert_eq!(doubled, [2, 4, 6].into());
}

#[rstest]
fn test_filter_returns_new_set() {
    let set: Set<i32> = [1, 2, 3, 4, 5].into();
    let odd = set.filter(|element| element % 2 == 1);

    assert_eq!(odd, [1, 3, 5].into());
    assert_eq!(set.len(), 5); // source unmodified
}

#[rstest]
fn test_filter_with_never_matching_predicate_is_empty() {
    let set: Set<i32> = [1, 2, 3].into();
    assert!(set.filter(|_| false).is_empty());
}

#[rstest]
fn test_reduce_accumulator_starts_at_type_default() {
    let set: Set<i32> = [1, 2, 3].into();

    // Sum works because 0 is the additive identity...
    assert_eq!(set.reduce(|accumulator, element| accumulator + element), 6);

    // ...but the zero start swallows products. Pinned on purpose.
    assert_eq!(set.reduce(|accumulator, element| accumulator * element), 0);
}

#[rstest]
fn test_reduce_on_empty_set_is_default() {
    let empty: Set<String> = Set::new();
    let joined = empty.reduce(|accumulator, element| accumulator + element);
    assert_eq!(joined, String::new());
}

#[rstest]
fn test_for_each_while_halts_on_first_false() {
    let set: Set<i32> = [10, 20, 30].into();

    let mut visited = Vec::new();
    set.for_each_while(|element| {
        visited.push(*element);
        visited.len() < 2
    });

    assert_eq!(visited.len(), 2);
}

#[rstest]
fn test_for_each_while_on_empty_set_never_calls_closure() {
    let empty: Set<i32> = Set::new();
    empty.for_each_while(|_| panic!("closure must not run on an empty set"));
}

#[rstest]
fn test_for_each_visits_each_element_exactly_once() {
    let set: Set<i32> = [1, 2, 3, 4].into();

    let mut seen: Set<i32> = Set::new();
    let mut calls = 0;
    set.for_each(|element| {
        seen.insert(*element);
        calls += 1;
    });

    assert_eq!(calls, 4);
    assert_eq!(seen, set);
}

#[rstest]
fn test_vacuous_quantifiers_on_empty_set() {
    let empty: Set<i32> = Set::new();

    assert!(!empty.any(|_| true));
    assert!(empty.all(|_| false));
    assert!(empty.none(|_| true));
}

#[rstest]
fn test_quantifiers_are_consistent() {
    let set: Set<i32> = [1, 2, 3].into();

    assert_eq!(set.none(|element| *element > 2), !set.any(|element| *element > 2));
    assert!(set.all(|element| *element >= 1));
    assert!(set.any(|element| *element == 3));
}

#[rstest]
fn test_find_all_collects_every_match() {
    let set: Set<i32> = (1..=10).collect();

    let matches = set.find_all(|element| element % 3 == 0);
    assert_eq!(matches.len(), 3);
    assert!(matches.contains(&&3));
    assert!(matches.contains(&&6));
    assert!(matches.contains(&&9));
}

#[rstest]
fn test_find_all_without_matches_is_empty() {
    let set: Set<i32> = [1, 2].into();
    assert!(set.find_all(|element| *element > 10).is_empty());
}

// =============================================================================
// Diagnostics
// =============================================================================

#[rstest]
fn test_display_contains_every_element() {
    let set: Set<i32> = [1, 2, 3].into();
    let rendered = format!("{set}");

    assert!(rendered.starts_with('{'));
    assert!(rendered.ends_with('}'));
    for element in ["1", "2", "3"] {
        assert!(rendered.contains(element));
    }
}

#[rstest]
fn test_display_of_empty_set() {
    let empty: Set<i32> = Set::new();
    assert_eq!(format!("{empty}"), "{}");
}
