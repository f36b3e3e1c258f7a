//! Entry types with shape validation.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length in characters.
pub const MAX_TITLE_LEN: usize = 60;

/// Maximum notes length in characters.
pub const MAX_NOTES_LEN: usize = 1000;

/// Validation errors for entry fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A string field exceeded its length bound.
    #[error("{field} cannot be more than {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// The category label is not one of the known variants.
    #[error("unknown category: {value}")]
    UnknownCategory { value: String },

    /// The difficulty label is not one of the known variants.
    #[error("unknown difficulty: {value}")]
    UnknownDifficulty { value: String },
}

/// Activity category for an entry.
///
/// This is a closed set; free-form strings never enter the data model, so
/// category distributions and color lookups cannot be corrupted by typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "DSA")]
    Dsa,
    Development,
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Interview Prep")]
    InterviewPrep,
    Learning,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Dsa,
        Self::Development,
        Self::SystemDesign,
        Self::InterviewPrep,
        Self::Learning,
    ];

    /// Canonical display label, also used for storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dsa => "DSA",
            Self::Development => "Development",
            Self::SystemDesign => "System Design",
            Self::InterviewPrep => "Interview Prep",
            Self::Learning => "Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ValidationError;

    /// Accepts the canonical label plus lowercase/hyphenated CLI spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "dsa" => Ok(Self::Dsa),
            "development" | "dev" => Ok(Self::Development),
            "system design" => Ok(Self::SystemDesign),
            "interview prep" => Ok(Self::InterviewPrep),
            "learning" => Ok(Self::Learning),
            _ => Err(ValidationError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Fields supplied when creating an entry.
///
/// The store assigns `id` and `created_at`; everything else comes from the
/// caller and must pass [`EntryDraft::validate`] before being persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub category: Category,
    /// Time spent in minutes.
    pub time_spent_min: u32,
    pub problems_solved: u32,
    pub notes: Option<String>,
    /// Calendar date the activity occurred on (not the creation time).
    pub date: NaiveDate,
}

impl EntryDraft {
    /// Checks the shape bounds: non-empty title within 60 characters,
    /// notes within 1000 characters. Numeric fields are non-negative by type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        let title_len = title.chars().count();
        if title_len > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
                len: title_len,
            });
        }
        if let Some(notes) = &self.notes {
            let notes_len = notes.chars().count();
            if notes_len > MAX_NOTES_LEN {
                return Err(ValidationError::TooLong {
                    field: "notes",
                    max: MAX_NOTES_LEN,
                    len: notes_len,
                });
            }
        }
        Ok(())
    }
}

/// One logged study/coding activity record.
///
/// `date` and `created_at` are independent: `date` is the user-assigned
/// calendar day the activity belongs to, `created_at` is when the record was
/// written. Multiple entries may share the same `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub time_spent_min: u32,
    pub problems_solved: u32,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Returns the draft fields of this entry, dropping `id`/`created_at`.
    #[must_use]
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            category: self.category,
            time_spent_min: self.time_spent_min,
            problems_solved: self.problems_solved,
            notes: self.notes.clone(),
            date: self.date,
        }
    }
}

/// Partial update for an existing entry. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub time_spent_min: Option<u32>,
    pub problems_solved: Option<u32>,
    /// `Some(None)` clears the notes; `None` leaves them unchanged.
    pub notes: Option<Option<String>>,
    pub date: Option<NaiveDate>,
}

impl EntryPatch {
    /// True if no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.time_spent_min.is_none()
            && self.problems_solved.is_none()
            && self.notes.is_none()
            && self.date.is_none()
    }

    /// Merges this patch into a draft. The result still needs validation.
    #[must_use]
    pub fn apply(&self, base: &EntryDraft) -> EntryDraft {
        EntryDraft {
            title: self.title.clone().unwrap_or_else(|| base.title.clone()),
            category: self.category.unwrap_or(base.category),
            time_spent_min: self.time_spent_min.unwrap_or(base.time_spent_min),
            problems_solved: self.problems_solved.unwrap_or(base.problems_solved),
            notes: self.notes.clone().unwrap_or_else(|| base.notes.clone()),
            date: self.date.unwrap_or(base.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft {
            title: "Graph practice".to_string(),
            category: Category::Dsa,
            time_spent_min: 45,
            problems_solved: 3,
            notes: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn draft_validates_title_bounds() {
        assert!(draft().validate().is_ok());

        let mut empty = draft();
        empty.title = "   ".to_string();
        assert_eq!(
            empty.validate(),
            Err(ValidationError::Empty { field: "title" })
        );

        let mut long = draft();
        long.title = "x".repeat(61);
        assert!(matches!(
            long.validate(),
            Err(ValidationError::TooLong { field: "title", .. })
        ));
    }

    #[test]
    fn draft_validates_notes_length() {
        let mut d = draft();
        d.notes = Some("n".repeat(1000));
        assert!(d.validate().is_ok());
        d.notes = Some("n".repeat(1001));
        assert!(matches!(
            d.validate(),
            Err(ValidationError::TooLong { field: "notes", .. })
        ));
    }

    #[test]
    fn category_parses_known_labels() {
        assert_eq!("DSA".parse::<Category>().unwrap(), Category::Dsa);
        assert_eq!(
            "system-design".parse::<Category>().unwrap(),
            Category::SystemDesign
        );
        assert_eq!(
            "Interview Prep".parse::<Category>().unwrap(),
            Category::InterviewPrep
        );
        assert!("Gaming".parse::<Category>().is_err());
    }

    #[test]
    fn category_serde_uses_display_labels() {
        let json = serde_json::to_string(&Category::SystemDesign).unwrap();
        assert_eq!(json, "\"System Design\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::SystemDesign);
    }

    #[test]
    fn patch_merges_and_clears_notes() {
        let base = draft();
        let patch = EntryPatch {
            problems_solved: Some(5),
            notes: Some(None),
            ..EntryPatch::default()
        };
        let merged = patch.apply(&base);
        assert_eq!(merged.problems_solved, 5);
        assert_eq!(merged.notes, None);
        assert_eq!(merged.title, base.title);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(EntryPatch::default().is_empty());
        let patch = EntryPatch {
            date: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
            ..EntryPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
