// Pattern 1: Assertions
// The getting-started suite for the classifier: example-based tests with the
// assertion macros, then property tests with proptest and QuickCheck.

use fizzbuzz_testing::{classify, Label};

// ============================================================================
// Example: One Test per Rule
// ============================================================================


// ============================================================================
// Example: Assertion Macros
// ============================================================================

#[cfg(test)]
mod assertion_tests {
    use super::*;

    #[test]
    fn assertion_examples() {
        // Equality
        assert_eq!(classify(15), Label::Both);

        // Inequality
        assert_ne!(classify(15), Label::Three);

        // Boolean with a message
        assert!(
            matches!(classify(9), Label::Three),
            "9 should be THREE, got {}",
            classify(9)
        );
    }

    #[test]
    fn zero_and_negatives() {
        assert_eq!(classify(0), Label::Both);
        assert_eq!(classify(-15), Label::Both);
        assert_eq!(classify(-3), Label::Three);
        assert_eq!(classify(-5), Label::Five);
        assert_eq!(classify(-1), Label::Neither);
    }

    #[test]
    fn table_driven() {
        let cases = [
            (1, Label::Neither),
            (6, Label::Three),
            (10, Label::Five),
            (30, Label::Both),
            (98, Label::Neither),
            (99, Label::Three),
            (100, Label::Five),
        ];
        for (input, expected) in cases {
            assert_eq!(classify(input), expected, "classify({input})");
        }
    }
}

// ============================================================================
// Example: Property-Based Testing with proptest
// ============================================================================


// ============================================================================
// Example: QuickCheck
// ============================================================================

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn adding_fifteen_keeps_the_label(n: i32) -> bool {
        let n = i64::from(n);
        classify(n) == classify(n + 15)
    }

    #[quickcheck]
    fn negation_keeps_the_label(n: i32) -> bool {
        let n = i64::from(n);
        classify(n) == classify(-n)
    }
}

fn main() {
    println!("Assertions and property tests - run with: cargo test --bin p1_basic_assertions");
    for n in 1..=15 {
        println!("{:>3}: {}", n, classify(n).phrase());
    }
}
