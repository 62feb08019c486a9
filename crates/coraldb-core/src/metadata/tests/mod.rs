
use super::*;
use crate::{
    action::{IndicesOptions, OriginalIndices},
    index::Index,
};
use std::{collections::BTreeMap, ptr};

fn original(indices: &[&str]) -> OriginalIndices {
    OriginalIndices::new(
        indices.iter().map(ToString::to_string).collect(),
        IndicesOptions::strict_expand_open(),
    )
}

fn remote_entry(alias: &str, expression: &str) -> BTreeMap<String, OriginalIndices> {
    BTreeMap::from([(alias.to_string(), original(&[expression]))])
}

#[test]
fn of_collects_unique_names() {
    let resolved = ResolvedIndices::of(["b", "a", "b"]);

    assert_eq!(resolved.local().names_as_vec(), ["a", "b"]);
    assert!(resolved.local().contains("a"));
    assert!(!resolved.local().contains("c"));
    assert!(resolved.local().original_indices().is_none());
    assert!(resolved.remote().is_empty());
}

#[test]
fn of_empty_is_empty() {
    let resolved = ResolvedIndices::of(Vec::<String>::new());

    assert!(resolved.local().is_empty());
    assert!(resolved.is_empty());
}

#[test]
fn of_indices_reads_only_names() {
    let open = Index::new("logs", "uuid-1");
    let recreated = Index::new("logs", "uuid-2");
    let pending = Index::unknown_uuid("metrics");

    let resolved = ResolvedIndices::of_indices([&open, &recreated, &pending]);

    assert_eq!(resolved.local().names_as_vec(), ["logs", "metrics"]);
}

#[test]
fn of_non_null_skips_absent_entries() {
    let resolved = ResolvedIndices::of_non_null([Some("a"), None, Some("b")]);

    assert_eq!(resolved.local().names_as_vec(), ["a", "b"]);
}

#[test]
fn all_is_never_empty_and_contains_everything() {
    let all = ResolvedIndices::all();

    assert!(!all.local().is_empty());
    assert!(!all.is_empty());
    assert!(all.local().contains("anything"));
    assert!(all.local().contains("never-created-index"));
}

#[test]
fn all_stores_the_match_all_sentinel() {
    let all = ResolvedIndices::all();

    assert_eq!(all.local().names_as_vec(), [MATCH_ALL]);
    assert!(all.remote().is_empty());
}

#[test]
fn with_empty_remote_shares_receiver_storage() {
    let base = ResolvedIndices::of(["x"]);
    let layered = base.with_remote_indices(BTreeMap::new());

    assert!(ptr::eq(base.remote(), layered.remote()));
    assert!(ptr::eq(base.local().names(), layered.local().names()));
}

#[test]
fn with_remote_keeps_existing_entries_on_collision() {
    let first = original(&["a*"]);
    let second = original(&["b*"]);
    let added = original(&["c*"]);

    let r1 = ResolvedIndices::of(["x"])
        .with_remote_indices(BTreeMap::from([("c1".to_string(), first.clone())]));
    let r2 = r1.with_remote_indices(BTreeMap::from([
        ("c1".to_string(), second),
        ("c2".to_string(), added.clone()),
    ]));

    assert_eq!(r2.remote().get("c1"), Some(&first));
    assert_eq!(r2.remote().get("c2"), Some(&added));
}

#[test]
fn with_remote_leaves_receiver_unchanged() {
    let first = original(&["a*"]);

    let r1 = ResolvedIndices::of(["x"])
        .with_remote_indices(BTreeMap::from([("c1".to_string(), first.clone())]));
    let _r2 = r1.with_remote_indices(remote_entry("c2", "b*"));

    assert_eq!(r1.remote().len(), 1);
    assert_eq!(r1.remote().get("c1"), Some(&first));
}

#[test]
fn with_local_original_indices_last_write_wins() {
    let earlier = original(&["a*"]);
    let later = original(&["b*"]);

    let resolved = ResolvedIndices::of(["a", "b"])
        .with_local_original_indices(earlier)
        .with_local_original_indices(later.clone());

    assert_eq!(resolved.local().original_indices(), Some(&later));
    assert_eq!(resolved.local().names_as_vec(), ["a", "b"]);
}

#[test]
fn with_local_original_indices_leaves_receiver_unchanged() {
    let base = ResolvedIndices::of(["a"]);
    let layered = base.with_local_original_indices(original(&["a*"]));

    assert!(base.local().original_indices().is_none());
    assert!(layered.local().original_indices().is_some());
}

#[test]
fn is_empty_requires_both_portions_empty() {
    let none = Vec::<String>::new();

    assert!(ResolvedIndices::of(none.clone()).is_empty());
    assert!(!ResolvedIndices::of(["x"]).is_empty());
    assert!(
        !ResolvedIndices::of(none)
            .with_remote_indices(remote_entry("c1", "a*"))
            .is_empty()
    );
    assert!(
        !ResolvedIndices::of(["x"])
            .with_remote_indices(remote_entry("c1", "a*"))
            .is_empty()
    );
}

#[test]
fn remote_targets_never_affect_match_all() {
    let all = ResolvedIndices::all().with_remote_indices(remote_entry("c1", "a*"));

    assert!(all.local().contains("anything"));
    assert!(!all.local().is_empty());
    assert_eq!(all.remote().len(), 1);
}
