use std::path::{Path, PathBuf};

use serde::Deserialize;

use quiz_core::QuestionBank;
use quiz_core::model::SubjectId;

use super::loader::{load_bank, parse_bank};
use crate::error::BankError;

/// Optional file in a bank directory that lists subjects explicitly.
pub const MANIFEST_FILE: &str = "subjects.json";

const BUILTIN: [(&str, &str, &str); 3] = [
    (
        "PMM",
        "Project Management for Managers",
        include_str!("../../data/pmm.json"),
    ),
    (
        "PBM",
        "Project and Budget Management",
        include_str!("../../data/pbm.json"),
    ),
    (
        "FVR",
        "Foundation and Virtual Reality",
        include_str!("../../data/fvr.json"),
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: SubjectId,
    pub title: String,
    pub bank: QuestionBank,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    id: String,
    #[serde(default)]
    title: Option<String>,
    file: PathBuf,
}

/// The subjects offered on the first screen, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectCatalog {
    subjects: Vec<Subject>,
}

impl SubjectCatalog {
    /// # Errors
    ///
    /// Returns `BankError::DuplicateSubject` if two subjects share an id.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, BankError> {
        for (idx, subject) in subjects.iter().enumerate() {
            if subjects[..idx].iter().any(|s| s.id == subject.id) {
                return Err(BankError::DuplicateSubject(subject.id.clone()));
            }
        }
        Ok(Self { subjects })
    }

    /// The subjects bundled with the application.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if a bundled bank fails to parse.
    pub fn builtin() -> Result<Self, BankError> {
        let subjects = BUILTIN
            .iter()
            .map(|(id, title, json)| -> Result<Subject, BankError> {
                Ok(Subject {
                    id: SubjectId::new(*id),
                    title: (*title).to_string(),
                    bank: parse_bank(json, id)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(subjects)
    }

    /// Load subjects from a directory.
    ///
    /// With a `subjects.json` manifest, its entries are loaded in order.
    /// Otherwise every `*.json` file is a subject named after its file stem,
    /// sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns `BankError` naming the file that failed to read or parse.
    pub fn from_dir(dir: &Path) -> Result<Self, BankError> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let subjects = if manifest_path.is_file() {
            load_manifest(dir, &manifest_path)?
        } else {
            scan_dir(dir)?
        };
        tracing::info!(dir = %dir.display(), subjects = subjects.len(), "loaded subject catalog");
        Self::new(subjects)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id.as_str() == id)
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

fn load_manifest(dir: &Path, manifest_path: &Path) -> Result<Vec<Subject>, BankError> {
    let raw = std::fs::read_to_string(manifest_path).map_err(|source| BankError::Io {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&raw).map_err(|source| BankError::Parse {
            origin: manifest_path.display().to_string(),
            source,
        })?;

    entries
        .into_iter()
        .map(|entry| -> Result<Subject, BankError> {
            let bank = load_bank(&dir.join(&entry.file))?;
            Ok(Subject {
                title: entry.title.unwrap_or_else(|| entry.id.clone()),
                id: SubjectId::new(entry.id),
                bank,
            })
        })
        .collect()
}

fn scan_dir(dir: &Path) -> Result<Vec<Subject>, BankError> {
    let read = std::fs::read_dir(dir).map_err(|source| BankError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in read {
        let entry = entry.map_err(|source| BankError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .filter_map(|path| {
            let stem = path.file_stem()?.to_string_lossy().into_owned();
            Some((stem, path))
        })
        .map(|(stem, path)| -> Result<Subject, BankError> {
            Ok(Subject {
                id: SubjectId::new(stem.clone()),
                title: stem,
                bank: load_bank(&path)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = SubjectCatalog::builtin().unwrap();
        let ids: Vec<_> = catalog.subjects().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["PMM", "PBM", "FVR"]);
        for subject in catalog.subjects() {
            assert!(subject.bank.question_count() > 0, "{} is empty", subject.id);
        }
        assert!(matches!(catalog.get("PBM").unwrap().bank, QuestionBank::Grouped(_)));
        assert!(catalog.get("XYZ").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let subject = Subject {
            id: SubjectId::new("PMM"),
            title: "x".into(),
            bank: QuestionBank::Flat(Vec::new()),
        };
        let err = SubjectCatalog::new(vec![subject.clone(), subject]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateSubject(id) if id.as_str() == "PMM"));
    }
}
