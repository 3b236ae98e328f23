//! # FizzBuzz Testing Guide
//!
//! A tiny domain (classify an integer by divisibility by 3 and 5) used to walk
//! through Rust's testing toolbox.
//!
//! ## Patterns Covered
//!
//! 1. **Assertions** - `assert_eq!`, property tests with proptest and QuickCheck
//! 2. **Skipping** - `#[ignore]` on suites and single tests
//! 3. **Exclusive runs** - selecting suites and tests with name filters
//! 4. **Timeouts** - bounding a test's run time with `tokio::time::timeout`
//! 5. **Function mocks** - spies that keep behavior, mocks that replace it
//! 6. **Module mocks** - swapping a whole module of free functions with mockall
//!
//! ## Running Examples
//!
//! ```bash
//! cargo test --bin p1_basic_assertions
//! cargo test --bin p2_skip -- --ignored
//! cargo test --bin p3_only exclusive
//! cargo test --bin p4_timeout
//! cargo test --bin p5_function_mocks
//! cargo test --bin p6_module_mocks
//!
//! cargo run --bin fizzbuzz -- 3 5 15 --style phrase
//! ```

pub mod config;
pub mod error;
pub mod fizz_buzz;
pub mod input;
pub mod logging;
pub mod report;
pub mod spy;

pub use error::{ClassifyError, ConfigError, Error, ReportError, Result};
pub use fizz_buzz::{classify, Classify, FizzBuzz, Label};
pub use input::{classify_input, parse_input};
pub use spy::Spy;
