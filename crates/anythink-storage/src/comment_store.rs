//! File system storage for comments

use crate::document::CommentDocument;
use anythink_core::comment::{Comment, CommentStore, CommentUpdate, NewComment};
use anythink_core::error::{AnythinkError, Result};
use anythink_core::types::CommentId;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

/// File system based comment storage, one JSON document per comment
pub struct FileSystemStorage {
    /// Base directory for storage
    base_dir: PathBuf,
    /// Comments subdirectory
    comments_dir: PathBuf,
    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FileSystemStorage {
    /// Create a new file system storage
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        let comments_dir = base_dir.join("comments");

        let storage = Self {
            base_dir,
            comments_dir,
            write_lock: Mutex::new(()),
        };

        storage.ensure_dirs()?;
        Ok(storage)
    }

    /// Create storage with default directory (~/.anythink)
    pub fn default_location() -> Result<Self> {
        Self::new(Self::default_dir())
    }

    /// Platform data directory, falling back to ~/.anythink
    pub fn default_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "anythink", "anythink")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".anythink")
            })
    }

    /// Ensure required directories exist
    fn ensure_dirs(&self) -> Result<()> {
        if !self.comments_dir.exists() {
            fs::create_dir_all(&self.comments_dir).map_err(|e| {
                AnythinkError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create comments directory: {}", e),
                ))
            })?;
            debug!("Created comments directory: {:?}", self.comments_dir);
        }
        Ok(())
    }

    /// Path of a comment document, or None if this engine could never have issued the id
    ///
    /// Only the canonical lowercase hyphenated spelling is accepted, so other
    /// spellings of the same UUID do not alias a stored comment.
    fn document_path(&self, id: &CommentId) -> Option<PathBuf> {
        let uuid = id.as_uuid()?;
        let canonical = uuid.hyphenated().to_string();
        if canonical != id.as_str() {
            return None;
        }
        Some(self.comments_dir.join(format!("{}.json", canonical)))
    }

    /// Get a temporary path for atomic writes
    fn temp_path(&self, id: &CommentId) -> PathBuf {
        self.comments_dir
            .join(format!(".{}.{}.json.tmp", id, Uuid::new_v4().simple()))
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| AnythinkError::Storage("comment store lock poisoned".to_string()))
    }

    /// Write a document atomically (write to temp, then rename)
    fn atomic_write(&self, path: &Path, document: &CommentDocument) -> Result<()> {
        let id = &document.comment.id;
        self.write_via_temp(id, path, |writer| {
            serde_json::to_writer_pretty(writer, document)?;
            Ok(())
        })?;

        debug!("Saved comment {} to {:?}", id, path);
        Ok(())
    }

    /// Run `write` against a fresh temp file, then rename it over `path`.
    /// The temp file is removed whenever any step fails.
    fn write_via_temp<F>(&self, id: &CommentId, path: &Path, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<fs::File>) -> Result<()>,
    {
        let temp_path = self.temp_path(id);

        let temp_file = fs::File::create(&temp_path).map_err(|e| {
            AnythinkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(temp_file);
        let written = write(&mut writer).and_then(|_| writer.flush().map_err(AnythinkError::from));
        drop(writer);
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        // Rename to final path (atomic on most filesystems)
        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AnythinkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file: {}", e),
            ))
        })
    }

    /// Read a document for removal; unparseable documents are hidden like in `list`
    fn read_removable(&self, path: &Path) -> Result<Option<CommentDocument>> {
        match self.read_document(path) {
            Err(e @ (AnythinkError::Serde(_) | AnythinkError::UnsupportedSchemaVersion(_))) => {
                warn!("Ignoring unreadable comment file {:?}: {}", path, e);
                Ok(None)
            }
            other => other,
        }
    }

    /// Read and parse a comment document; a missing file is None
    fn read_document(&self, path: &Path) -> Result<Option<CommentDocument>> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AnythinkError::Io(e)),
        };

        let reader = BufReader::new(file);
        let document: CommentDocument = serde_json::from_reader(reader)?;
        document.ensure_compatible()?;
        Ok(Some(document))
    }

    /// Get base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get comments directory
    pub fn comments_dir(&self) -> &PathBuf {
        &self.comments_dir
    }
}

impl CommentStore for FileSystemStorage {
    fn list(&self) -> Result<Vec<Comment>> {
        let mut documents = Vec::new();

        let entries = fs::read_dir(&self.comments_dir).map_err(|e| {
            AnythinkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read comments directory: {}", e),
            ))
        })?;

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();

            // Skip non-json files and temp files
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }

            match self.read_document(&path) {
                Ok(Some(document)) => documents.push(document),
                // Deleted between read_dir and open
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to read comment file {:?}: {}", path, e);
                }
            }
        }

        documents.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.comment.id.cmp(&b.comment.id))
        });

        Ok(documents
            .into_iter()
            .map(CommentDocument::into_comment)
            .collect())
    }

    fn insert(&self, comment: NewComment) -> Result<Comment> {
        let id = CommentId::generate();
        let path = self
            .document_path(&id)
            .ok_or_else(|| AnythinkError::Storage(format!("Generated invalid id {}", id)))?;
        let document = CommentDocument::new(comment.into_comment(id));

        let _guard = self.lock()?;
        self.atomic_write(&path, &document)?;
        Ok(document.into_comment())
    }

    fn remove(&self, id: &CommentId) -> Result<Option<Comment>> {
        let Some(path) = self.document_path(id) else {
            return Ok(None);
        };

        let _guard = self.lock()?;
        let Some(document) = self.read_removable(&path)? else {
            return Ok(None);
        };

        fs::remove_file(&path).map_err(|e| {
            AnythinkError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to delete comment file: {}", e),
            ))
        })?;

        debug!("Deleted comment {} from {:?}", id, path);
        Ok(Some(document.into_comment()))
    }

    fn replace(&self, id: &CommentId, update: CommentUpdate) -> Result<Option<Comment>> {
        let Some(path) = self.document_path(id) else {
            return Ok(None);
        };

        let _guard = self.lock()?;
        let Some(mut document) = self.read_document(&path)? else {
            return Ok(None);
        };

        document.comment.apply(update);
        self.atomic_write(&path, &document)?;
        Ok(Some(document.into_comment()))
    }
}
