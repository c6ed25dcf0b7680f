use kruskal_core::hashing::{hash_value, trace_fingerprint};
use kruskal_core::{run, Edge, TreeGoal};
use serde_json::json;

#[test]
fn hash_value_produces_hex_64() {
    let v = json!({"b":2, "a":1});
    let h = hash_value(&v);
    // blake3 hex length is 64
    assert_eq!(h.len(), 64);
    // deterministic: same value with different key order yields same hash
    let v2 = json!({"a":1, "b":2});
    assert_eq!(h, hash_value(&v2));
}

#[test]
fn trace_fingerprint_matches_history() {
    let h = run(["A", "B"], vec![Edge::new("A", "B", 1)], false).unwrap();
    assert_eq!(trace_fingerprint(TreeGoal::Minimum, h.steps()), h.fingerprint());
    assert_ne!(trace_fingerprint(TreeGoal::Maximum, h.steps()), h.fingerprint());
}
