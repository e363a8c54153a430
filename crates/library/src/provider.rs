// FILE: crates/library/src/provider.rs

//! Folder pickers and directory enumerators
//!
//! The host environment owns the folder picker dialog and the directory
//! listing. The core only sees them through [`FileSystemProvider`], so it can
//! be driven by a real directory ([`LocalFileSystem`]) or by a fixed list of
//! entries ([`MemoryFileSystem`]).

use crate::error::{LibraryError, LibraryResult};
use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Kind of a directory entry as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single entry under the picked root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl RawEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }
}

/// The folder the user picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHandle {
    name: String,
    location: PathBuf,
}

impl RootHandle {
    pub fn new(name: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Builds a handle named after the last component of `path`
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let location = path.into();
        let name = location
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.display().to_string());
        Self { name, location }
    }

    /// Directory name, used as the folder name in the catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Path {
        &self.location
    }
}

/// Stream of entries under a root; finite and not restartable
pub type EntryStream<'a> = BoxStream<'a, LibraryResult<RawEntry>>;

/// Host-supplied folder picker and enumerator
pub trait FileSystemProvider: Send + Sync {
    /// Asks the user for a folder; `None` means the pick was cancelled
    fn pick_root(&self) -> BoxFuture<'_, Option<RootHandle>>;

    /// Lists the entries directly under `root`
    fn enumerate<'a>(&'a self, root: &'a RootHandle) -> EntryStream<'a>;
}

/// Provider over a real directory chosen up front
///
/// There is no dialog: the "pick" resolves to the configured path, and a path
/// that is missing or not a directory behaves like a cancelled pick.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSystemProvider for LocalFileSystem {
    fn pick_root(&self) -> BoxFuture<'_, Option<RootHandle>> {
        async move {
            match fs::metadata(&self.root).await {
                Ok(metadata) if metadata.is_dir() => {
                    let root = fs::canonicalize(&self.root)
                        .await
                        .unwrap_or_else(|_| self.root.clone());
                    Some(RootHandle::from_path(root))
                }
                Ok(_) => {
                    warn!("Not a directory: {}", self.root.display());
                    None
                }
                Err(e) => {
                    warn!("Cannot open folder {}: {}", self.root.display(), e);
                    None
                }
            }
        }
        .boxed()
    }

    fn enumerate<'a>(&'a self, root: &'a RootHandle) -> EntryStream<'a> {
        enum ReadState {
            Start(PathBuf),
            Reading(fs::ReadDir),
            Done,
        }

        stream::unfold(
            ReadState::Start(root.location().to_path_buf()),
            |mut state| async move {
                loop {
                    match state {
                        ReadState::Start(path) => match fs::read_dir(&path).await {
                            Ok(read_dir) => state = ReadState::Reading(read_dir),
                            Err(e) => {
                                let err = LibraryError::FolderUnreadable(format!(
                                    "{}: {}",
                                    path.display(),
                                    e
                                ));
                                return Some((Err(err), ReadState::Done));
                            }
                        },
                        ReadState::Reading(mut read_dir) => match read_dir.next_entry().await {
                            Ok(Some(entry)) => match to_raw_entry(&entry).await {
                                Ok(Some(raw)) => return Some((Ok(raw), ReadState::Reading(read_dir))),
                                Ok(None) => state = ReadState::Reading(read_dir),
                                Err(e) => return Some((Err(e), ReadState::Reading(read_dir))),
                            },
                            Ok(None) => return None,
                            Err(e) => return Some((Err(LibraryError::Io(e)), ReadState::Done)),
                        },
                        ReadState::Done => return None,
                    }
                }
            },
        )
        .boxed()
    }
}

/// Converts a directory entry, following symlinks; other kinds are skipped
async fn to_raw_entry(entry: &fs::DirEntry) -> LibraryResult<Option<RawEntry>> {
    let name = entry.file_name().to_string_lossy().into_owned();

    let mut file_type = entry.file_type().await?;
    if file_type.is_symlink() {
        file_type = fs::metadata(entry.path()).await?.file_type();
    }

    if file_type.is_file() {
        Ok(Some(RawEntry::file(name)))
    } else if file_type.is_dir() {
        Ok(Some(RawEntry::directory(name)))
    } else {
        debug!("Skipping special file: {}", entry.path().display());
        Ok(None)
    }
}

/// Provider returning a fixed listing, for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    root: Option<RootHandle>,
    entries: Vec<Result<RawEntry, String>>,
}

impl MemoryFileSystem {
    /// A folder named `root_name` containing `entries`, in order
    pub fn new(root_name: impl Into<String>, entries: Vec<RawEntry>) -> Self {
        let name = root_name.into();
        Self {
            root: Some(RootHandle::new(name.clone(), name)),
            entries: entries.into_iter().map(Ok).collect(),
        }
    }

    /// A provider whose picker is always dismissed
    pub fn cancelled() -> Self {
        Self::default()
    }

    /// Appends an entry that fails to read
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.entries.push(Err(message.into()));
        self
    }

    /// Appends a readable entry
    pub fn with_entry(mut self, entry: RawEntry) -> Self {
        self.entries.push(Ok(entry));
        self
    }
}

impl FileSystemProvider for MemoryFileSystem {
    fn pick_root(&self) -> BoxFuture<'_, Option<RootHandle>> {
        future::ready(self.root.clone()).boxed()
    }

    fn enumerate<'a>(&'a self, _root: &'a RootHandle) -> EntryStream<'a> {
        stream::iter(self.entries.iter().map(|entry| match entry {
            Ok(raw) => Ok(raw.clone()),
            Err(message) => Err(LibraryError::Provider(message.clone())),
        }))
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use tempfile::TempDir;

    #[test]
    fn test_root_handle_from_path() {
        let root = RootHandle::from_path("/books/fantasy");
        assert_eq!(root.name(), "fantasy");
        assert_eq!(root.location(), Path::new("/books/fantasy"));
    }

    #[tokio::test]
    async fn test_memory_provider_lists_in_order() {
        let provider = MemoryFileSystem::new(
            "shelf",
            vec![RawEntry::file("b.pdf"), RawEntry::file("a.pdf")],
        );

        let root = provider.pick_root().await.unwrap();
        assert_eq!(root.name(), "shelf");

        let entries: Vec<_> = provider.enumerate(&root).try_collect().await.unwrap();
        assert_eq!(entries, vec![RawEntry::file("b.pdf"), RawEntry::file("a.pdf")]);
    }

    #[tokio::test]
    async fn test_memory_provider_cancelled() {
        assert!(MemoryFileSystem::cancelled().pick_root().await.is_none());
    }

    #[tokio::test]
    async fn test_local_provider_lists_files_and_dirs() -> LibraryResult<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("a.pdf"), b"%PDF")?;
        std::fs::create_dir(temp_dir.path().join("notes"))?;

        let provider = LocalFileSystem::new(temp_dir.path());
        let root = provider.pick_root().await.expect("directory should be picked");

        let mut entries: Vec<_> = provider.enumerate(&root).try_collect().await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries, vec![RawEntry::file("a.pdf"), RawEntry::directory("notes")]);
        Ok(())
    }

    #[tokio::test]
    async fn test_local_provider_missing_root_is_cancelled_pick() {
        let provider = LocalFileSystem::new("/nonexistent/readshelf/path");
        assert!(provider.pick_root().await.is_none());
    }

    #[tokio::test]
    async fn test_local_provider_file_root_is_cancelled_pick() -> LibraryResult<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("single.pdf");
        std::fs::write(&file, b"%PDF")?;

        assert!(LocalFileSystem::new(file).pick_root().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_local_provider_unreadable_root_yields_error() {
        let provider = LocalFileSystem::new("/unused");
        let root = RootHandle::new("gone", "/nonexistent/readshelf/path");

        let items: Vec<_> = provider.enumerate(&root).collect().await;
        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(LibraryError::FolderUnreadable(_))));
    }
}
