// Pattern 3: Selecting Suites and Tests to Run
// The test harness has no "only" marker; selection happens on the command line.
// A filter is a substring of the full test path (`module::test_name`), so
// grouping the tests you want in a module named `exclusive` lets
// `cargo test --bin p3_only exclusive` run just those, and `--exact` picks one.

use fizzbuzz_testing::{classify, Label};

// ============================================================================
// Example: Exclusive Suite
// ============================================================================


// ============================================================================
// Example: Exclusive Test Inside Another Suite
// ============================================================================

#[cfg(test)]
mod another_suite {
    use super::*;

    // Filtered out by `cargo test --bin p3_only exclusive`.
    #[test]
    fn not_selected() {
        assert_eq!(classify(7), Label::Neither);
    }

    // Selected: its path is `another_suite::exclusive_test`.
    #[test]
    fn exclusive_test() {
        assert_eq!(classify(9), Label::Three);
    }
}

fn main() {
    println!("Selecting tests - run with: cargo test --bin p3_only exclusive");
    println!("One test only: cargo test --bin p3_only -- --exact another_suite::exclusive_test");
    println!("Skip a group: cargo test --bin p3_only -- --skip exclusive");
}
