// Pattern 2: Skipping Suites and Tests
// `#[ignore]` keeps a test compiled but out of the default run. There is no
// suite-level attribute, so a skipped suite is a module whose tests are all
// ignored. Ignored tests still run with `-- --ignored` or `-- --include-ignored`.

use fizzbuzz_testing::{classify, Label};

// ============================================================================
// Example: Skipped Suite
// ============================================================================


// ============================================================================
// Example: Skipped Test Inside a Running Suite
// ============================================================================


fn main() {
    println!("Skipping tests - run with: cargo test --bin p2_skip");
    println!("Run only the ignored tests: cargo test --bin p2_skip -- --ignored");
    println!("Run everything: cargo test --bin p2_skip -- --include-ignored");
}
