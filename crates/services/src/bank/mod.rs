mod catalog;
mod loader;

pub use catalog::{MANIFEST_FILE, Subject, SubjectCatalog};
pub use loader::{load_bank, parse_bank};
