//! Structured drill records.
//!
//! A [`DrillRecord`] is what the field parser pulls out of one segment of
//! an assistant reply. Records are immutable values; summaries are rebuilt
//! from the conversation on every request rather than updated in place.

use serde::{Deserialize, Serialize};

/// Name given to a drill whose segment yields no usable name.
pub const DEFAULT_DRILL_NAME: &str = "Drill";

/// A drill extracted from one segment of coaching text.
///
/// # Examples
///
/// ```
/// use courtside::core::DrillRecord;
///
/// let drill = DrillRecord::new("Crossovers", "Crossovers: 3 sets")
///     .with_sets(Some("3".to_string()));
/// assert_eq!(drill.sets.as_deref(), Some("3"));
/// assert!(drill.reps.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillRecord {
    /// Drill name (never empty, falls back to [`DEFAULT_DRILL_NAME`]).
    pub name: String,

    /// Number of sets, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,

    /// Repetitions per set, or a range such as `10-12`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,

    /// Duration with its unit, such as `1 minute` or `30-45 seconds`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// The segment this record came from, before directive cleanup.
    pub source: String,
}

impl DrillRecord {
    /// Creates a record with only a name and its source segment.
    ///
    /// An empty name is replaced by [`DEFAULT_DRILL_NAME`].
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                DEFAULT_DRILL_NAME.to_string()
            } else {
                name
            },
            sets: None,
            reps: None,
            time: None,
            source: source.into(),
        }
    }

    /// Sets the set count.
    #[must_use]
    pub fn with_sets(mut self, sets: Option<String>) -> Self {
        self.sets = sets;
        self
    }

    /// Sets the rep count.
    #[must_use]
    pub fn with_reps(mut self, reps: Option<String>) -> Self {
        self.reps = reps;
        self
    }

    /// Sets the duration.
    #[must_use]
    pub fn with_time(mut self, time: Option<String>) -> Self {
        self.time = time;
        self
    }

    /// Returns true if any of sets, reps or time is present.
    #[must_use]
    pub const fn has_volume(&self) -> bool {
        self.sets.is_some() || self.reps.is_some() || self.time.is_some()
    }
}

/// A drill together with the index of the message it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedDrill {
    /// Position of the source message in the conversation (0-based).
    pub message_index: usize,

    /// The extracted drill.
    #[serde(flatten)]
    pub drill: DrillRecord,
}

impl TaggedDrill {
    /// Tags a drill with its message index.
    #[must_use]
    pub const fn new(message_index: usize, drill: DrillRecord) -> Self {
        Self {
            message_index,
            drill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_defaults() {
        let drill = DrillRecord::new("", "3 sets");
        assert_eq!(drill.name, DEFAULT_DRILL_NAME);
        assert_eq!(drill.source, "3 sets");
    }

    #[test]
    fn test_has_volume() {
        let drill = DrillRecord::new("Finish", "Finish: strong");
        assert!(!drill.has_volume());
        let drill = drill.with_time(Some("30 seconds".to_string()));
        assert!(drill.has_volume());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let drill = DrillRecord::new("Crossovers", "Crossovers: 3 sets")
            .with_sets(Some("3".to_string()));
        let json = serde_json::to_string(&drill).unwrap();
        assert!(json.contains("\"sets\":\"3\""));
        assert!(!json.contains("reps"));
        assert!(!json.contains("time"));
    }

    #[test]
    fn test_tagged_drill_flattens() {
        let tagged = TaggedDrill::new(2, DrillRecord::new("Wall Sits", "Wall sits"));
        let value = serde_json::to_value(&tagged).unwrap();
        assert_eq!(value["message_index"], 2);
        assert_eq!(value["name"], "Wall Sits");
    }
}
