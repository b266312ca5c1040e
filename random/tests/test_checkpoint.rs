//! Checkpoint Tests - Save/Load Generator State
//!
//! Critical invariants tested:
//! - Determinism: restored generator produces identical results
//! - Seed matching: reject checkpoints from a differently seeded generator
//! - Shape: reject corrupted state on load

use scarlet_random::{
    compute_seed_digest, Alea, AleaState, Checkpoint, RngError, CHECKPOINT_VERSION,
};

fn advanced(seed: &str, n: usize) -> Alea {
    let mut rng = Alea::new(seed);
    for _ in 0..n {
        rng.next();
    }
    rng
}

#[test]
fn test_checkpoint_fields() {
    let rng = advanced("fields", 12);
    let checkpoint = rng.checkpoint();

    assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
    assert_eq!(checkpoint.seed_digest, compute_seed_digest("fields"));
    assert_eq!(checkpoint.draws, 12);
    assert_eq!(checkpoint.state, rng.export_state());
}

#[test]
fn test_checkpoint_json_round_trip_preserves_sequence() {
    let mut original = advanced("save-load", 50);
    let json = original.checkpoint().to_json().unwrap();

    let loaded = Checkpoint::from_json(&json).unwrap();
    assert_eq!(loaded, original.checkpoint());

    let mut restored = Alea::new("save-load");
    restored.restore(&loaded).unwrap();
    assert_eq!(restored.draws(), 50);

    for i in 0..100 {
        assert_eq!(restored.next(), original.next(), "Diverged at draw {}", i);
    }
}

#[test]
fn test_state_json_round_trip_many_seeds() {
    for i in 0..1000 {
        let mut rng = Alea::new(&format!("seed-{}", i));
        for _ in 0..50 {
            let state = rng.export_state();
            let json = serde_json::to_string(&state).unwrap();
            let loaded: AleaState = serde_json::from_str(&json)
                .unwrap_or_else(|e| panic!("state {} failed to load: {}", json, e));
            assert_eq!(loaded, state);
            rng.next();
        }
    }
}

#[test]
fn test_checkpoint_json_round_trip_many_seeds() {
    for i in 0..500 {
        let seed = format!("checkpoint-{}", i);
        let mut rng = Alea::new(&seed);
        for step in 0..20 {
            let json = rng.checkpoint().to_json().unwrap();
            let loaded = Checkpoint::from_json(&json)
                .unwrap_or_else(|e| panic!("seed {} step {}: {:?}", seed, step, e));
            assert_eq!(loaded, rng.checkpoint());

            let mut restored = Alea::new(&seed);
            restored.restore(&loaded).unwrap();
            assert_eq!(restored.next().to_bits(), rng.clone().next().to_bits());

            rng.next();
        }
    }
}

#[test]
fn test_checkpoint_after_import_counts_from_import() {
    let foreign = advanced("elsewhere", 40).export_state();
    let mut rng = advanced("local", 10);
    rng.import_state(foreign);
    rng.next();

    assert_eq!(rng.checkpoint().draws, 1);
}

#[test]
fn test_checkpoint_does_not_store_seed() {
    let json = Alea::new("top secret seed").checkpoint().to_json().unwrap();
    assert!(!json.contains("top secret seed"));
}

#[test]
fn test_restore_rejects_different_seed() {
    let checkpoint = advanced("alpha", 3).checkpoint();
    let mut rng = Alea::new("beta");

    let result = rng.restore(&checkpoint);
    assert_eq!(result.err(), Some(RngError::SeedMismatch));
}

#[test]
fn test_restore_is_fluent() {
    let mut original = advanced("chain", 8);
    let checkpoint = original.checkpoint();

    let value = Alea::new("chain").restore(&checkpoint).unwrap().next();
    assert_eq!(value, original.next());
}

#[test]
fn test_load_rejects_corrupted_state() {
    let json = advanced("corrupt", 2).checkpoint().to_json().unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["state"]["c"] = serde_json::json!(5_000_000);

    let err = Checkpoint::from_json(&value.to_string()).unwrap_err();
    assert!(
        matches!(err, RngError::Serialization(ref msg) if msg.contains("Invalid state")),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_load_rejects_missing_fields() {
    let err = Checkpoint::from_json(r#"{"version":1}"#).unwrap_err();
    assert!(matches!(err, RngError::Serialization(_)));
}

#[test]
fn test_restore_rejects_unknown_version() {
    let mut checkpoint = Alea::new("versioned").checkpoint();
    checkpoint.version = 99;

    let mut rng = Alea::new("versioned");
    assert_eq!(
        rng.restore(&checkpoint).err(),
        Some(RngError::UnsupportedVersion {
            found: 99,
            expected: CHECKPOINT_VERSION,
        })
    );
}

#[test]
fn test_restore_empty_seed() {
    let mut original = advanced("", 5);
    let checkpoint = original.checkpoint();

    let mut restored = Alea::new("");
    restored.restore(&checkpoint).unwrap();
    assert_eq!(restored.next(), original.next());
}
