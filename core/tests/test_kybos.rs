//! Tests for the Kybos engine

use replayable_random_core_rs::{Alea, Engine, Kybos, MutRand};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct Sample {
    engine: String,
    seed: String,
    #[serde(rename = "u32")]
    values: Vec<u32>,
}

fn load_sample() -> Sample {
    serde_json::from_str(include_str!("data/kybos_sample.json")).unwrap()
}

fn valid_plain() -> Value {
    json!({
        "type": "kybos",
        "subprng": { "type": "alea", "carry": 1, "seed0": 0.5, "seed1": 0.25, "seed2": 0.125 },
        "seeds": [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875],
        "phase": 0,
        "consumable": 0
    })
}

#[test]
fn test_golden_sample() {
    let sample = load_sample();
    assert_eq!(sample.engine, "kybos");

    let mut g = Kybos::from_seed(&sample.seed).unwrap();
    for (i, &expected) in sample.values.iter().enumerate() {
        assert_eq!(g.next_u32(), expected, "mismatch at draw {}", i);
    }
}

#[test]
fn test_batches_stay_within_table_size() {
    let mut g = Kybos::from_seed("batches").unwrap();
    for _ in 0..1000 {
        g.next_fract32();
        assert!(g.consumable() < 8);
    }
}

#[test]
fn test_subgenerator_is_seeded_from_first_words() {
    let g = Kybos::from_seed("seed").unwrap();
    let value = g.to_plain().to_value();
    let alea = Alea::from_plain_value(&value["subprng"]).unwrap();

    // Kybos hashes 11 words; the first three seed its Alea
    let words = replayable_random_core_rs::util::mash::mashes(b"seed", 11);
    assert_eq!(value["subprng"]["seed0"], f64::from(words[0]) / 4294967296.0);
    assert_eq!(value["seeds"][0], f64::from(words[3]) / 4294967296.0);
    assert_eq!(alea.to_plain().to_value(), value["subprng"]);
}

#[test]
fn test_fork_isolation() {
    let mut original = Kybos::from_seed("seed").unwrap();
    original.next_u32();
    let before = original.to_plain();

    let mut forked = original.fork();
    for _ in 0..50 {
        forked.next_u32();
    }
    assert_eq!(original.to_plain(), before);

    let sample = load_sample();
    for &expected in &sample.values[1..50] {
        assert_eq!(original.next_u32(), expected);
    }
}

#[test]
fn test_plain_round_trip_resumes_sequence() {
    let mut g = Kybos::from_seed("seed").unwrap();
    for _ in 0..23 {
        g.next_u32();
    }

    let value = g.to_plain().to_value();
    assert_eq!(value["type"], "kybos");
    assert_eq!(value["subprng"]["type"], "alea");

    let mut resumed = Kybos::from_plain_value(&value).unwrap();
    assert_eq!(resumed, g);
    for _ in 0..100 {
        assert_eq!(resumed.next_u32(), g.next_u32());
    }
}

#[test]
fn test_accepts_handwritten_state() {
    let mut g = Kybos::from_plain_value(&valid_plain()).unwrap();
    let f = g.next_fract32();
    assert!((0.0..1.0).contains(&f));
}

#[test]
fn test_subprng_carry_above_multiplier_is_accepted() {
    let mut value = valid_plain();
    value["subprng"]["carry"] = json!(3000000);
    let mut g = Kybos::from_plain_value(&value).unwrap();
    assert!((0.0..1.0).contains(&g.next_fract32()));
}

#[test]
fn test_rejects_malformed_values() {
    assert!(Kybos::from_plain_value(&json!(null)).is_none());
    assert!(Kybos::from_plain_value(&json!({})).is_none());

    let cases = [
        ("phase", json!(8)),
        ("consumable", json!(8)),
        ("seeds", json!([0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5])),
        ("seeds", json!([0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 1.0])),
        ("seeds", json!([0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.3])),
        ("subprng", json!(null)),
        ("subprng", json!({ "type": "alea", "carry": 1, "seed0": 1.0, "seed1": 0, "seed2": 0 })),
        ("subprng", json!({ "type": "uhe", "carry": 1, "seeds": vec![1u32; 48], "phase": 48 })),
    ];
    for (field, bad) in cases {
        let mut value = valid_plain();
        value[field] = bad;
        assert!(
            Kybos::from_plain_value(&value).is_none(),
            "{} should be rejected",
            field
        );
    }
}

#[test]
fn test_serde_goes_through_validation() {
    let g = Kybos::from_seed("seed").unwrap();
    let json = serde_json::to_string(&g).unwrap();
    let decoded: Kybos = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, g);

    let mut bad = valid_plain();
    bad["consumable"] = json!(9);
    assert!(serde_json::from_value::<Kybos>(bad).is_err());
}
