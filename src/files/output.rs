//! Writing extracted messages and rendered clouds to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Summary of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    /// Lines or items written.
    pub items: usize,
    pub bytes: u64,
}

/// Write one message per line, skipping empty messages.
///
/// Creates the parent directory if needed.
pub fn write_messages<'a, I>(path: &Path, messages: I) -> Result<Written>
where
    I: IntoIterator<Item = &'a str>,
{
    ensure_parent(path)?;

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let mut items = 0;
    let mut bytes = 0u64;

    for message in messages.into_iter().filter(|m| !m.is_empty()) {
        writeln!(writer, "{}", message)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        items += 1;
        bytes += message.len() as u64 + 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Written {
        path: path.to_path_buf(),
        items,
        bytes,
    })
}

/// Write a text document (e.g. an SVG), creating the parent directory if needed.
pub fn write_document(path: &Path, contents: &str) -> Result<Written> {
    ensure_parent(path)?;
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Written {
        path: path.to_path_buf(),
        items: 1,
        bytes: contents.len() as u64,
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
