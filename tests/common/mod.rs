#![allow(dead_code)]

use esg_scorecard::{Dataset, LoadOptions};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"))
}

pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn load_fixture(name: &str) -> Dataset {
    Dataset::from_json_str_with(&fixture(name), &LoadOptions::default())
        .unwrap_or_else(|e| panic!("fixture {name} failed to load: {e}"))
}

pub fn reference() -> Dataset {
    Dataset::reference().expect("bundled dataset loads")
}

pub const REFERENCE_COMPANIES: [&str; 7] = [
    "Exxon Mobil",
    "Shell",
    "Phillips 66",
    "NextEra Energy",
    "American Electric Power",
    "Ormat Technologies",
    "Sempra Energy",
];
