//! Drill field parsing.
//!
//! Turns one segment of coaching text into a [`DrillRecord`] by running a
//! fixed sequence of heuristics: directive cleanup, then sets, time, reps
//! and finally the drill name.
//!
//! The parser is total. Any string, including empty or purely numeric
//! ones, yields either a record or `None`, never an error.

use crate::core::DrillRecord;
use crate::extract::patterns::Pattern;
use crate::extract::segment::is_candidate;

/// Maximum number of words kept in a derived drill name.
pub const MAX_NAME_WORDS: usize = 6;

/// Parses drill fields out of a single segment.
///
/// # Examples
///
/// ```
/// use courtside::extract::DrillFieldParser;
///
/// let drill = DrillFieldParser::new()
///     .parse("Between the legs: 5 sets of 50 reps")
///     .unwrap();
/// assert_eq!(drill.name, "Between the legs");
/// assert_eq!(drill.sets.as_deref(), Some("5"));
/// assert_eq!(drill.reps.as_deref(), Some("50"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DrillFieldParser;

/// Location of the `<n> sets` match within the cleaned line.
#[derive(Debug, Clone, Copy)]
struct SetsMatch<'a> {
    count: &'a str,
    start: usize,
    end: usize,
}

impl DrillFieldParser {
    /// Creates a field parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses `segment` into a drill record.
    ///
    /// Returns `None` when the segment carries no name-worthy content and
    /// no sets, reps or time.
    #[must_use]
    pub fn parse(&self, segment: &str) -> Option<DrillRecord> {
        let cleaned = strip_directive(segment);

        let sets = find_sets(&cleaned);
        let time = find_time(&cleaned);
        let reps = find_reps(&cleaned, sets);

        let name = match cleaned.split_once(':') {
            Some((label, _)) => label.trim().to_string(),
            None => derive_name(&cleaned),
        };

        // A `label:` line counts even when the directive strip ate its label.
        let labelled = segment.contains(':');
        let name_worthy = !name.is_empty() && (labelled || is_candidate(&cleaned));

        if !name_worthy && sets.is_none() && reps.is_none() && time.is_none() {
            return None;
        }

        Some(
            DrillRecord::new(name, segment)
                .with_sets(sets.map(|s| s.count.to_string()))
                .with_reps(reps)
                .with_time(time),
        )
    }
}

/// Removes one leading directive word ("Try", "Finish with", ...).
fn strip_directive(segment: &str) -> String {
    Pattern::Directive
        .regex()
        .replace(segment, "")
        .trim()
        .to_string()
}

fn find_sets(cleaned: &str) -> Option<SetsMatch<'_>> {
    let caps = Pattern::SetCount.regex().captures(cleaned)?;
    let whole = caps.get(0)?;
    Some(SetsMatch {
        count: caps.get(1)?.as_str(),
        start: whole.start(),
        end: whole.end(),
    })
}

fn find_time(cleaned: &str) -> Option<String> {
    let caps = Pattern::Duration.regex().captures(cleaned)?;
    let first = caps.get(1)?.as_str();
    let unit = caps.get(3)?.as_str();
    Some(match caps.get(2) {
        Some(second) => format!("{first}-{} {unit}", second.as_str()),
        None => format!("{first} {unit}"),
    })
}

fn find_reps(cleaned: &str, sets: Option<SetsMatch<'_>>) -> Option<String> {
    if let Some(caps) = Pattern::RepRange.regex().captures(cleaned) {
        return Some(format!("{}-{}", &caps[1], &caps[2]));
    }

    if let Some(caps) = Pattern::RepCount.regex().captures(cleaned) {
        let candidate = caps.get(1).map(|m| m.as_str())?;
        // Prefer the first number after the sets count so "5 sets of 50 reps"
        // never reads the set count as reps.
        let after_sets = sets.and_then(|s| Pattern::Number.regex().find_at(cleaned, s.end));
        return Some(after_sets.map_or(candidate, |m| m.as_str()).to_string());
    }

    let sets = sets?;
    Pattern::SetsOf
        .regex()
        .captures_at(cleaned, sets.start)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Builds a name from a line without a `label:` prefix.
///
/// Numbers, filler words and punctuation are dropped, then the first
/// [`MAX_NAME_WORDS`] words are title-cased.
fn derive_name(cleaned: &str) -> String {
    let without_numbers = Pattern::StandaloneNumber.regex().replace_all(cleaned, " ");
    let without_filler = Pattern::FillerWord
        .regex()
        .replace_all(&without_numbers, " ");
    let without_punct = Pattern::NamePunctuation
        .regex()
        .replace_all(&without_filler, " ");

    without_punct
        .split_whitespace()
        .take(MAX_NAME_WORDS)
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases every letter that follows a non-letter and lower-cases the
/// rest, so `o'neil` becomes `O'Neil` and `3pt` becomes `3Pt`.
fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
