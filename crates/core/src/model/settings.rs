use thiserror::Error;

use crate::model::{AssignmentEntry, AssignmentKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("assignment chunk size must be > 0")]
    InvalidChunkSize,

    #[error("random sample size must be > 0")]
    InvalidRandomSize,

    #[error("random sample size {0} is listed more than once")]
    DuplicateRandomSize(usize),
}

/// Settings that shape how a bank is split into assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    chunk_size: usize,
    random_sizes: Vec<usize>,
}

impl Default for QuizSettings {
    /// Weekly chunks of 10 questions, plus random samples of 30 and 50.
    fn default() -> Self {
        Self {
            chunk_size: 10,
            random_sizes: vec![30, 50],
        }
    }
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError` if the chunk size or any random size is zero,
    /// or if a random size repeats.
    pub fn new(chunk_size: usize, random_sizes: Vec<usize>) -> Result<Self, SettingsError> {
        if chunk_size == 0 {
            return Err(SettingsError::InvalidChunkSize);
        }
        for (idx, size) in random_sizes.iter().enumerate() {
            if *size == 0 {
                return Err(SettingsError::InvalidRandomSize);
            }
            if random_sizes[..idx].contains(size) {
                return Err(SettingsError::DuplicateRandomSize(*size));
            }
        }
        Ok(Self {
            chunk_size,
            random_sizes,
        })
    }

    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    #[must_use]
    pub fn random_sizes(&self) -> &[usize] {
        &self.random_sizes
    }

    /// Trailing chooser entries, one per random sample size.
    #[must_use]
    pub fn random_entries(&self) -> Vec<AssignmentEntry> {
        self.random_sizes
            .iter()
            .map(|&count| AssignmentEntry::Random {
                key: AssignmentKey::random(count),
                count,
            })
            .collect()
    }
}
