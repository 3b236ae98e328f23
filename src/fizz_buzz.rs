//! The FizzBuzz classifier.
//!
//! Every integer falls into exactly one of four labels depending on whether it
//! is divisible by 3, by 5, by both, or by neither.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
use mockall::automock;

/// Result of classifying one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    /// Divisible by 3 and by 5.
    Both,
    /// Divisible by 3 only.
    Three,
    /// Divisible by 5 only.
    Five,
    /// Divisible by neither.
    Neither,
}

impl Label {
    pub const ALL: [Label; 4] = [Label::Both, Label::Three, Label::Five, Label::Neither];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Both => "BOTH",
            Label::Three => "THREE",
            Label::Five => "FIVE",
            Label::Neither => "NEITHER",
        }
    }

    /// The classic FizzBuzz phrase for this label.
    pub fn phrase(self) -> &'static str {
        match self {
            Label::Both => "Fizz Buzz!!",
            Label::Three => "Fizz!",
            Label::Five => "Buzz!",
            Label::Neither => "Not FizzBuzz.",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label '{}' (expected BOTH, THREE, FIVE or NEITHER)", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Classify `num` by divisibility by 3 and 5.
///
/// Total over all of `i64`: `%` by a positive constant never overflows, so even
/// `i64::MIN` gets a label.
pub fn classify(num: i64) -> Label {
    let by_three = num % 3 == 0;
    let by_five = num % 5 == 0;

    // Precedence: the conjunction must be tested before either single rule,
    // otherwise multiples of 15 would be reported as THREE.
    if by_three && by_five {
        Label::Both
    } else if by_three {
        Label::Three
    } else if by_five {
        Label::Five
    } else {
        Label::Neither
    }
}

/// Seam for anything that maps a number to a label.
#[cfg_attr(test, automock)]
pub trait Classify {
    fn classify(&self, num: i64) -> Label;
}

/// The production classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FizzBuzz;

impl Classify for FizzBuzz {
    fn classify(&self, num: i64) -> Label {
        classify(num)
    }
}
