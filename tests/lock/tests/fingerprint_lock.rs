//! Hash domain and fingerprint lock tests.
//!
//! A change to the state byte layout or a domain prefix breaks these on
//! purpose: stored fingerprints would silently stop matching.

use std::collections::BTreeSet;

use gripper_kernel::proof::hash::{canonical_hash, DOMAIN_SEARCH_STATS, DOMAIN_WORLD_STATE};
use gripper_kernel::world::snapshot::WorldSnapshot;
use gripper_search::node::DOMAIN_SEARCH_NODE;
use lock_tests::fixtures::{small_world, SMALL_WORLD_FINGERPRINT};

const DOMAINS: [&[u8]; 3] = [DOMAIN_WORLD_STATE, DOMAIN_SEARCH_STATS, DOMAIN_SEARCH_NODE];

#[test]
fn domains_are_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in DOMAINS {
        assert!(seen.insert(domain), "duplicate domain {domain:?}");
        assert_eq!(domain.last(), Some(&0), "domain {domain:?} not null-terminated");
        let text = std::str::from_utf8(&domain[..domain.len() - 1]).unwrap();
        assert!(text.starts_with("GRIPPER::") && text.ends_with("::V1"), "{text}");
    }
}

#[test]
fn small_world_fingerprint_is_locked() {
    let (state, _) = small_world();
    assert_eq!(state.fingerprint().as_str(), SMALL_WORLD_FINGERPRINT);
}

#[test]
fn domains_separate_equal_bytes() {
    let (state, _) = small_world();
    let bytes = state.identity_bytes();
    assert_ne!(
        canonical_hash(DOMAIN_WORLD_STATE, &bytes),
        canonical_hash(DOMAIN_SEARCH_NODE, &bytes)
    );
}

#[test]
fn snapshot_round_trip_keeps_fingerprint() {
    let (state, objects) = small_world();
    let snapshot = WorldSnapshot::from_world(&state, &objects);
    let json = serde_json::to_vec(&snapshot).unwrap();
    let (again, _) = WorldSnapshot::from_json_slice(&json)
        .unwrap()
        .into_world()
        .unwrap();
    assert_eq!(again.fingerprint(), state.fingerprint());
}
