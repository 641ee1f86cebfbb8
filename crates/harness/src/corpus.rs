// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Corpus discovery: every file with a given extension under a root.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus root `{}` is not a directory", .0.display())]
    MissingRoot(PathBuf),

    /// Glob patterns are UTF-8, so such a root cannot be searched verbatim.
    #[error("corpus root `{}` is not valid UTF-8", .0.display())]
    NonUtf8Root(PathBuf),

    #[error("file extension must not be empty")]
    EmptyExtension,

    #[error("invalid corpus pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Lazily yield files under `root` (recursively) whose name ends in `.<extension>`.
///
/// A leading dot on `extension` is ignored. Entries that cannot be read are
/// skipped with a warning.
pub fn walk_files(
    root: &Path,
    extension: &str,
) -> Result<impl Iterator<Item = PathBuf>, CorpusError> {
    if !root.is_dir() {
        return Err(CorpusError::MissingRoot(root.to_path_buf()));
    }
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return Err(CorpusError::EmptyExtension);
    }

    let root_text = root.to_str().ok_or_else(|| CorpusError::NonUtf8Root(root.to_path_buf()))?;

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(root_text),
        glob::Pattern::escape(extension)
    );
    let entries = glob::glob(&pattern)
        .map_err(|source| CorpusError::Pattern { pattern: pattern.clone(), source })?;

    Ok(entries.filter_map(|entry| match entry {
        Ok(path) if path.is_file() => Some(path),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(path = %e.path().display(), error = %e.error(), "skipping corpus entry");
            None
        }
    }))
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
