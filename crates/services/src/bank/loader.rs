use std::path::Path;

use serde_json::Value;

use quiz_core::QuestionBank;
use quiz_core::model::{AssignmentKey, Question};

use crate::error::BankError;

/// Parse a bank document.
///
/// A JSON array is a flat bank; a JSON object maps assignment keys to arrays
/// and keeps its key order. `origin` names the source in errors.
///
/// # Errors
///
/// Returns `BankError::Parse` for malformed JSON or questions and
/// `BankError::Shape` when the top level is neither an array nor an object.
pub fn parse_bank(json: &str, origin: &str) -> Result<QuestionBank, BankError> {
    let value: Value = serde_json::from_str(json).map_err(|source| BankError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(QuestionBank::Flat(questions_from(items, origin)?)),
        Value::Object(groups) => {
            let mut grouped = Vec::with_capacity(groups.len());
            for (key, list) in groups {
                let Value::Array(items) = list else {
                    return Err(BankError::Shape {
                        origin: format!("{origin} ({key})"),
                    });
                };
                grouped.push((AssignmentKey::new(key), questions_from(items, origin)?));
            }
            Ok(QuestionBank::Grouped(grouped))
        }
        _ => Err(BankError::Shape {
            origin: origin.to_string(),
        }),
    }
}

/// Read and parse a bank file.
///
/// # Errors
///
/// Returns `BankError::Io` if the file cannot be read, otherwise the errors of
/// [`parse_bank`].
pub fn load_bank(path: &Path) -> Result<QuestionBank, BankError> {
    let json = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bank = parse_bank(&json, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        questions = bank.question_count(),
        "loaded question bank"
    );
    Ok(bank)
}

fn questions_from(items: Vec<Value>, origin: &str) -> Result<Vec<Question>, BankError> {
    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<Question>, _>>()
        .map_err(|source| BankError::Parse {
            origin: origin.to_string(),
            source,
        })
}
