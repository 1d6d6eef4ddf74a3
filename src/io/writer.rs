//! Output document writing.
//!
//! [`DocumentWriter`] serializes an assembled document to disk. Writes are
//! atomic by default: the document is written to a sibling `.tmp` file and
//! renamed into place only after a successful flush, so a crash or error can
//! never leave a partial file at the final path.
//!
//! Serialization runs on the blocking thread pool via `spawn_blocking`.

use crate::error::AssemblyError;
use lopdf::Document;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tokio::task;

/// Options controlling how output files are written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temp file and rename on success.
    pub atomic: bool,
    /// Compress content streams before serializing.
    pub compress: bool,
    /// Buffer size for the output writer, in bytes.
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Writes assembled documents to disk.
#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
    options: WriteOptions,
}

impl DocumentWriter {
    /// Create a writer with default options (atomic, compressed).
    pub fn new() -> Self {
        DocumentWriter::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        DocumentWriter { options }
    }

    /// Write `document` to `path`, returning the written size in bytes.
    ///
    /// # Errors
    ///
    /// [`AssemblyError::Io`] on any create, write, flush, or rename failure.
    /// With atomic writes the temp file is removed best-effort on failure.
    pub async fn save(&self, document: Document, path: &Path) -> Result<u64, AssemblyError> {
        let path_buf = path.to_path_buf();
        let options = self.options.clone();

        task::spawn_blocking(move || write_document(document, &path_buf, &options))
            .await
            .map_err(|err| AssemblyError::io(path, io::Error::other(err)))?
    }

    /// Check that `path` can be written: the parent directory exists and an
    /// existing file at the path is not read-only.
    ///
    /// Best-effort preflight; the write itself can still fail.
    pub async fn can_write(&self, path: &Path) -> Result<(), AssemblyError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            match tokio::fs::metadata(parent).await {
                Ok(metadata) if metadata.is_dir() => {}
                Ok(_) => {
                    return Err(AssemblyError::io(
                        parent,
                        io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
                    ));
                }
                Err(err) => return Err(AssemblyError::io(parent, err)),
            }
        }

        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.permissions().readonly() => Err(AssemblyError::io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
            )),
            _ => Ok(()),
        }
    }
}

fn write_document(
    mut document: Document,
    path: &Path,
    options: &WriteOptions,
) -> Result<u64, AssemblyError> {
    if options.compress {
        document.compress();
    }

    let write_path: PathBuf = if options.atomic {
        path.with_extension("tmp")
    } else {
        path.to_path_buf()
    };

    let write_result = (|| {
        let file = File::create(&write_path).map_err(|err| AssemblyError::io(&write_path, err))?;
        let mut writer = BufWriter::with_capacity(options.buffer_size, file);
        document
            .save_to(&mut writer)
            .map_err(|err| AssemblyError::io(&write_path, io::Error::other(err)))?;
        writer
            .flush()
            .map_err(|err| AssemblyError::io(&write_path, err))
    })();

    if let Err(err) = write_result {
        if options.atomic {
            let _ = std::fs::remove_file(&write_path);
        }
        return Err(err);
    }

    if options.atomic
        && let Err(err) = std::fs::rename(&write_path, path)
    {
        let _ = std::fs::remove_file(&write_path);
        return Err(AssemblyError::io(path, err));
    }

    let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    Ok(size)
}
