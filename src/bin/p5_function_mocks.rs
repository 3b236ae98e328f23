// Pattern 5: Mocking Functions
// Two kinds of double:
// - a spy watches a real function: it records calls and results, behavior unchanged
// - a mock replaces the function: behavior is whatever the test says, per call if needed
// Shown first with the `Spy` recorder from the library, then with mockall.

use fizzbuzz_testing::report::classify_all;
use fizzbuzz_testing::{classify, Classify, Label, Spy};

/// A classifier whose every call goes through a spy.
struct SpiedClassifier {
    spy: Spy<i64, Label>,
}

impl SpiedClassifier {
    fn new() -> Self {
        SpiedClassifier {
            spy: Spy::on(classify),
        }
    }
}

impl Classify for SpiedClassifier {
    fn classify(&self, num: i64) -> Label {
        self.spy.call(num)
    }
}

// ============================================================================
// Example: Recording Calls on a Mock Function
// ============================================================================

#[cfg(test)]
mod recorder_basics {
    use super::*;

    #[test]
    fn sample() {
        // A mock with no implementation yet.
        let f: Spy<(&'static str, i32), &'static str> = Spy::fn_mock();

        // It is a mock function, not a wrapper around a real one.
        assert!(f.is_mock());

        f.call(("hello", 1));

        // First call received ("hello", 1).
        assert_eq!(f.calls()[0], ("hello", 1));

        // Give it an implementation that returns its first argument.
        f.mock_implementation(|(arg, _)| arg);

        f.call(("world", 2));

        // Second call returned "world".
        assert_eq!(f.results()[1], "world");
    }
}

// ============================================================================
// Example: Spying
// ============================================================================


// ============================================================================
// Example: Mocking with One-Shot Overrides
// ============================================================================

#[cfg(test)]
mod mocking {
    use super::*;
    use fizzbuzz_testing::report::{render, LabelStyle, OutputFormat};

    #[test]
    fn one_shot_then_original_behavior() {
        let spied = SpiedClassifier::new();
        spied.spy.mock_return_value_once(Label::Neither);

        let entries = classify_all(&spied, [15, 15]);

        assert_eq!(entries[0].label, Label::Neither);
        assert_eq!(entries[1].label, Label::Both);
    }

    #[test]
    fn replaced_implementation_drives_rendering() {
        let spied = SpiedClassifier::new();
        spied.spy.mock_implementation(|_| Label::Five);

        let entries = classify_all(&spied, [1, 2]);
        let text = render(&entries, OutputFormat::Text, LabelStyle::Phrase).unwrap();

        assert_eq!(text, "1: Buzz!\n2: Buzz!\n");
    }

    #[test]
    fn reset_restores_the_real_function() {
        let spied = SpiedClassifier::new();
        spied.spy.mock_implementation(|_| Label::Five);
        spied.spy.mock_reset();

        assert_eq!(spied.classify(2), Label::Neither);
    }
}

// ============================================================================
// Example: The Same Ideas with mockall
// ============================================================================


fn main() {
    println!("Function mocks - run with: cargo test --bin p5_function_mocks");

    let spied = SpiedClassifier::new();
    spied.spy.mock_return_value_once(Label::Neither);
    let entries = classify_all(&spied, [15, 15, 9]);
    for entry in &entries {
        println!("{}: {}", entry.number, entry.label);
    }
    println!("calls recorded: {:?}", spied.spy.calls());
    println!("results recorded: {:?}", spied.spy.results());
}
