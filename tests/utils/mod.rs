pub mod assertions;
pub mod builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::assert_close;
#[allow(unused_imports)]
pub use builders::{frame, snapshot, FrameBuilder, PlayerBuilder};

use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}
