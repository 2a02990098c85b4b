//! figsearch-test - Regression test framework for figsearch
//!
//! Regression tests run in one of three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use figsearch_test::{RegParams, load_test_bitmap};
//!
//! let bitmap = load_test_bitmap("cross.txt").unwrap();
//! let mut rp = RegParams::new("lines");
//! rp.compare_values(5.0, run.length as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test bitmap from the test data directory
///
/// `name` is a file name under `tests/data/bitmaps` (e.g. "cross.txt").
pub fn load_test_bitmap(name: &str) -> TestResult<figsearch_core::Bitmap> {
    let path = test_data_path(name);
    figsearch_io::read_bitmap(&path).map_err(|e| TestError::BitmapLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // figsearch-test is at crates/figsearch-test
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/bitmaps/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
