//! Helpers for tests that need real or deliberately broken cache entries.

use serde_json::json;
use shared_types::{Record, RecordHash};
use std::path::Path;

/// A well-formed zonefile for `name`.
pub fn sample_record(name: &str) -> Record {
    Record::new()
        .with_field("$origin", name)
        .with_field("$ttl", 3600)
        .with_field(
            "uri",
            json!([{"name": "_http._tcp", "priority": 10, "weight": 1,
                    "target": format!("https://storage.example.org/{}", name)}]),
        )
}

/// Write raw bytes under a hash key, bypassing verification.
pub fn write_raw_blob(dir: &Path, hash: &RecordHash, bytes: &[u8]) {
    std::fs::write(dir.join(hash.to_hex()), bytes).expect("write raw blob");
}
