use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a subject in the catalog (e.g. `PMM`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of an assignment as shown in the chooser (e.g. `Week 3`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentKey(String);

impl AssignmentKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for the `index`-th auto-chunked group, 1-based.
    #[must_use]
    pub fn week(index: usize) -> Self {
        Self(format!("Week {index}"))
    }

    /// Synthetic key for a random sample of `count` questions.
    #[must_use]
    pub fn random(count: usize) -> Self {
        Self(format!("Random {count} Questions"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubjectId({})", self.0)
    }
}

impl fmt::Debug for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignmentKey({})", self.0)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AssignmentKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One entry of the assignment chooser.
///
/// Regular entries are bank keys and carry their position among the regular
/// entries. Random entries are synthetic and resolve to a fresh sample each
/// time they are chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssignmentEntry {
    Regular { key: AssignmentKey, ordinal: usize },
    Random { key: AssignmentKey, count: usize },
}

impl AssignmentEntry {
    #[must_use]
    pub fn key(&self) -> &AssignmentKey {
        match self {
            Self::Regular { key, .. } | Self::Random { key, .. } => key,
        }
    }

    #[must_use]
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            Self::Regular { ordinal, .. } => Some(*ordinal),
            Self::Random { .. } => None,
        }
    }

    #[must_use]
    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_use_chooser_labels() {
        assert_eq!(AssignmentKey::week(2).as_str(), "Week 2");
        assert_eq!(AssignmentKey::random(30).as_str(), "Random 30 Questions");
    }

    #[test]
    fn random_entries_have_no_ordinal() {
        let entry = AssignmentEntry::Random {
            key: AssignmentKey::random(50),
            count: 50,
        };
        assert!(entry.is_random());
        assert_eq!(entry.ordinal(), None);
        assert_eq!(entry.key().to_string(), "Random 50 Questions");
    }
}
