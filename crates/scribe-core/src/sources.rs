use std::path::{Path, PathBuf};

use crate::error::{DocsError, Result};

/// One discovered documentation source: the file stem and its Markdown body.
///
/// A source whose stem equals a registered version label contributes to that
/// version's document only; any other stem contributes to every document.
#[derive(Debug, Clone)]
pub struct DocSource {
    pub name: String,
    pub body: String,
}

impl DocSource {
    /// Whether this source belongs in the document for `label`, given the
    /// full set of registered labels.
    pub fn applies_to(&self, label: &str, all_labels: &[String]) -> bool {
        self.name == label || !all_labels.iter().any(|l| l == &self.name)
    }
}

/// Scan `dir` for Markdown documentation sources, in filename order.
///
/// The scan is non-recursive and matches `*.md` files only. A missing
/// directory yields zero sources; an unreadable entry inside an existing
/// directory is an error.
pub fn scan_sources(dir: &Path) -> Result<Vec<DocSource>> {
    if !dir.is_dir() {
        tracing::debug!(
            dir = %dir.display(),
            "documentation source directory not found, skipping scan"
        );
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| DocsError::Source {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DocsError::Source {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let body = std::fs::read_to_string(&path).map_err(|e| DocsError::Source {
            path: path.clone(),
            source: e,
        })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();
        tracing::debug!(source = %path.display(), "registered documentation source");
        sources.push(DocSource {
            name,
            body: body.trim().to_string(),
        });
    }

    Ok(sources)
}
