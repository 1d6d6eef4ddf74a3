//! Utilities: input path collection and the object-graph copy primitive.

use anyhow::Context;
use lopdf::{Document, Object};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Returns a flattened list of resolved paths.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> anyhow::Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern)?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"**/*.pdf"`
/// - `"./docs/*.pdf"`
fn collect_paths_for_pattern<P: AsRef<str>>(pattern: P) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = pattern.as_ref();
    let mut resolved_paths = Vec::new();

    let paths =
        glob::glob(pattern).with_context(|| format!("Invalid glob pattern: '{pattern}'"))?;

    for entry in paths {
        let path = entry.with_context(|| format!("Failed to resolve '{pattern}'"))?;
        resolved_paths.push(path);
    }

    Ok(resolved_paths)
}

/// Recursively collect `*.pdf` files under `dir`, case-insensitively.
///
/// Results come back sorted so batch operations see a stable order.
pub fn collect_pdfs_in_dir(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Human-readable file size for UI labels, e.g. `"2.40 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}

/// Copy object references from one PDF document to another.
///
/// If `obj` is (or contains) a reference, this walks the structure
/// recursively and inserts missing referenced objects into the `target`
/// document. References that do not resolve in `source` are left alone;
/// references to objects already present in `target` end the walk, which
/// also bounds recursion on cyclic graphs.
pub(crate) fn copy_references(target: &mut Document, source: &Document, obj: &Object) {
    match obj {
        Object::Reference(ref_id) => {
            if !target.objects.contains_key(ref_id)
                && let Ok(referenced_obj) = source.get_object(*ref_id)
            {
                target.objects.insert(*ref_id, referenced_obj.clone());
                copy_references(target, source, referenced_obj);
            }
        }
        Object::Dictionary(dict) => {
            for (_, value) in dict.iter() {
                copy_references(target, source, value);
            }
        }
        Object::Array(arr) => {
            for item in arr {
                copy_references(target, source, item);
            }
        }
        Object::Stream(stream) => {
            for (_, value) in stream.dict.iter() {
                copy_references(target, source, value);
            }
        }
        _ => {}
    }
}
