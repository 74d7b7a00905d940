#![allow(dead_code)]

mod fixtures;
mod path_test_properties;

pub use fixtures::*;
pub use path_test_properties::*;

/// Install `env_logger` once per test binary, output is captured by the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
