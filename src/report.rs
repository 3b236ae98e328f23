// Rendering classified numbers as text or JSON lines.

use crate::error::ReportError;
use crate::fizz_buzz::{Classify, Label};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which text to show for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `BOTH`, `THREE`, `FIVE`, `NEITHER`
    #[default]
    Label,
    /// `Fizz Buzz!!`, `Fizz!`, `Buzz!`, `Not FizzBuzz.`
    Phrase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub number: i64,
    pub label: Label,
}

#[derive(Serialize)]
struct PhraseEntry {
    number: i64,
    label: Label,
    phrase: &'static str,
}

pub fn classify_all<C, I>(classifier: &C, numbers: I) -> Vec<Entry>
where
    C: Classify + ?Sized,
    I: IntoIterator<Item = i64>,
{
    numbers
        .into_iter()
        .map(|number| Entry {
            number,
            label: classifier.classify(number),
        })
        .collect()
}

/// Longest range `classify_range` will materialise.
pub const DEFAULT_MAX_RANGE_LEN: u64 = 1_000_000;

/// Number of integers in `start..=end`, or `None` when `start > end`.
pub fn range_len(start: i64, end: i64) -> Option<u128> {
    if start > end {
        return None;
    }
    // i128 holds the full i64 span without overflow.
    Some((i128::from(end) - i128::from(start) + 1) as u128)
}

/// Classify every number in `start..=end`, up to [`DEFAULT_MAX_RANGE_LEN`] of them.
pub fn classify_range<C>(classifier: &C, start: i64, end: i64) -> Result<Vec<Entry>, ReportError>
where
    C: Classify + ?Sized,
{
    classify_range_limited(classifier, start, end, DEFAULT_MAX_RANGE_LEN)
}

/// Classify every number in `start..=end`, refusing ranges longer than `max`.
pub fn classify_range_limited<C>(
    classifier: &C,
    start: i64,
    end: i64,
    max: u64,
) -> Result<Vec<Entry>, ReportError>
where
    C: Classify + ?Sized,
{
    let len = range_len(start, end).ok_or(ReportError::EmptyRange { start, end })?;
    if len > u128::from(max) {
        return Err(ReportError::RangeTooLarge { start, end, max });
    }
    debug!(start, end, "classifying range");
    Ok(classify_all(classifier, start..=end))
}

pub fn render(entries: &[Entry], format: OutputFormat, style: LabelStyle) -> Result<String, ReportError> {
    let mut out = String::new();
    for entry in entries {
        match format {
            OutputFormat::Text => {
                let text = match style {
                    LabelStyle::Label => entry.label.as_str(),
                    LabelStyle::Phrase => entry.label.phrase(),
                };
                // Writing into a String cannot fail.
                let _ = writeln!(out, "{}: {}", entry.number, text);
            }
            OutputFormat::Json => {
                let line = match style {
                    LabelStyle::Label => serde_json::to_string(entry)?,
                    LabelStyle::Phrase => serde_json::to_string(&PhraseEntry {
                        number: entry.number,
                        label: entry.label,
                        phrase: entry.label.phrase(),
                    })?,
                };
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

/// Per-label counts, always listing all four labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub counts: BTreeMap<Label, usize>,
    pub total: usize,
}

impl Summary {
    pub fn tally(entries: &[Entry]) -> Self {
        let mut counts: BTreeMap<Label, usize> = Label::ALL.iter().map(|&l| (l, 0)).collect();
        for entry in entries {
            *counts.entry(entry.label).or_insert(0) += 1;
        }
        Summary {
            counts,
            total: entries.len(),
        }
    }

    pub fn count(&self, label: Label) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(label, count)| format!("{label}={count}"))
            .collect();
        format!("total={} {}", self.total, parts.join(" "))
    }
}
