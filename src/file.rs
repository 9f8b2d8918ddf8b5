// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::to_export_string;
use crate::data::{export_view, DataSet};
use crate::error::{Error, Result};

/// Serialize the export view of `ds` (URL column dropped) with the current
/// format and header policy.
pub fn export_string(export: &ExportOptions, ds: &DataSet) -> String {
    let view = export_view(ds);
    to_export_string(&view.headers, &view.rows, export.include_headers, export.delim())
}

/// Write the page's export file. Returns the final path written to.
pub fn write_export(export: &ExportOptions, kind: PageKind, ds: &DataSet) -> Result<PathBuf> {
    let path = export.out_path(kind);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, export_string(export, ds))?;
    logf!("Export: {} row(s) → {}", ds.row_count(), path.display());
    Ok(path)
}

/// One keyword per line; blank lines and `#` comments skipped.
pub fn read_keywords_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
