use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use serde::Deserialize;

use indic_itrans::{EngineConfig, Segment, Transliterator};

#[derive(Deserialize)]
struct GoldenRecord {
    id: usize,
    input: String,
    segments: Vec<Segment>,
}

fn golden_records() -> Vec<GoldenRecord> {
    let golden_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/golden_segments.jsonl");
    let file = File::open(golden_path).expect("Failed to open golden master");
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.expect("Failed to read line");
        if line.trim().is_empty() { continue; }
        records.push(serde_json::from_str(&line).expect("Failed to parse golden record"));
    }
    records
}

#[test]
fn test_against_golden_master() {
    let transliterator = Transliterator::builtin();
    let config = EngineConfig::default();

    let mut passed = 0;
    let mut failed = 0;

    for record in golden_records() {
        let segments = transliterator.transliterate_segments(&record.input, &config);

        if segments != record.segments {
            println!("Mismatch at ID {}", record.id);
            println!("Input:  {}", record.input);
            println!("Golden: {:?}", record.segments);
            println!("Rust:   {:?}", segments);
            failed += 1;
        } else {
            passed += 1;
        }
    }

    println!("Passed: {}, Failed: {}", passed, failed);
    assert!(passed > 0, "golden master is empty");
    assert_eq!(failed, 0, "Integration test failed with {} mismatches", failed);
}

#[test]
fn test_golden_inputs_are_idempotent() {
    let transliterator = Transliterator::builtin();
    let config = EngineConfig::default();

    for record in golden_records() {
        let once = transliterator.transliterate(&record.input, &config).into_owned();
        let twice = transliterator.transliterate(&once, &config);
        assert_eq!(twice, once, "record {} changed on a second pass", record.id);
    }
}

#[test]
fn test_segments_partition_input_runs() {
    let transliterator = Transliterator::builtin();
    let config = EngineConfig::default();

    for record in golden_records() {
        let segments = transliterator.transliterate_segments(&record.input, &config);
        for pair in segments.windows(2) {
            assert_ne!(pair[0].script, pair[1].script, "record {}: adjacent runs not coalesced", record.id);
        }
        assert!(segments.iter().all(|s| !s.text.is_empty()), "record {}: empty segment", record.id);
    }
}
