//! Output filename generation.
//!
//! Extracted messages are written to `<person>[_<owner>].txt`, with all
//! whitespace removed from each name. Word cloud images are named after the
//! input file: everything before the first `.` of its file name.

use std::path::Path;

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Fallback when a name component compacts to nothing.
const FALLBACK_NAME: &str = "messages";

/// Fallback stem for cloud images when the input name has none.
const FALLBACK_STEM: &str = "cloud";

/// Extension for extracted message files.
pub const MESSAGES_EXTENSION: &str = "txt";

/// Extension for rendered word clouds.
pub const CLOUD_EXTENSION: &str = "svg";

/// Removes whitespace and filesystem-invalid characters from a name.
///
/// `"Alice Smith"` becomes `"AliceSmith"`. Non-ASCII letters are kept.
pub fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && !c.is_control() && !INVALID_CHARS.contains(c))
        .collect()
}

/// Filename for a person's extracted messages, optionally paired with the owner.
pub fn messages_filename(person: &str, owner: Option<&str>) -> Result<String, FilenameError> {
    let mut base = compact(person);
    if base.is_empty() {
        base = FALLBACK_NAME.to_string();
    }

    if let Some(owner) = owner {
        let owner = compact(owner);
        if !owner.is_empty() {
            base.push('_');
            base.push_str(&owner);
        }
    }

    let filename = format!("{}.{}", base, MESSAGES_EXTENSION);
    validate_length(&filename)?;
    Ok(filename)
}

/// Filename for the word cloud rendered from `input`.
///
/// `renders/AliceSmith.txt` gives `AliceSmith.svg`; `notes.2024.txt` gives `notes.svg`.
pub fn cloud_filename(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    format!("{}.{}", stem, CLOUD_EXTENSION)
}

/// Validates that a final filename doesn't exceed filesystem limits.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Errors that can occur during filename operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    /// Filename exceeds 255 character filesystem limit.
    TooLong { length: usize, max: usize },
}

impl std::fmt::Display for FilenameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilenameError::TooLong { length, max } => {
                write!(f, "Filename too long: {} characters (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for FilenameError {}
