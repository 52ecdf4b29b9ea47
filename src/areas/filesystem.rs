//! Filesystem access for tree comparison
//!
//! Everything the comparator and the content oracle need from the filesystem goes
//! through the [`FileSystem`] trait, so tests can swap in doubles that count or fail
//! individual operations. [`LocalFileSystem`] is the real implementation.
//!
//! Entry types are always classified from `lstat`: a symlink pointing at a directory is
//! a [`EntryKind::Symlink`], never a [`EntryKind::Directory`].

use crate::errors::{CompareError, CompareResult};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{FileType, Metadata};
use std::io::Read;
use std::os::unix::prelude::MetadataExt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Children of one directory, keyed by base name in byte order
pub type DirListing = BTreeMap<OsString, PathBuf>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Block/char device, FIFO or socket
    Special,
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Symlink => "symlink",
            EntryKind::Special => "special file",
        }
    }
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        // symlink first: a FileType from lstat never reports is_dir for a link
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Special
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The slice of `stat` data the comparison looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStat {
    pub kind: EntryKind,
    /// Size in bytes
    pub size: u64,
    /// Device containing the entry
    pub dev: u64,
    /// Inode number
    pub ino: u64,
    /// Device number for special files
    pub rdev: u64,
}

impl EntryStat {
    /// Both stats describe the same filesystem object (hard links, or the same path)
    pub fn same_identity(&self, other: &EntryStat) -> bool {
        self.dev == other.dev && self.ino == other.ino
    }
}

impl From<&Metadata> for EntryStat {
    fn from(metadata: &Metadata) -> Self {
        EntryStat {
            kind: metadata.file_type().into(),
            size: metadata.size(),
            dev: metadata.dev(),
            ino: metadata.ino(),
            rdev: metadata.rdev(),
        }
    }
}

pub trait FileSystem {
    /// Immediate children of `path`, without following symlinks inside it
    fn list_dir(&self, path: &Path) -> CompareResult<DirListing>;

    /// Symlink-aware stat (`lstat`)
    fn stat(&self, path: &Path) -> CompareResult<EntryStat>;

    /// Dereferencing stat, used for the user-supplied roots
    fn metadata(&self, path: &Path) -> CompareResult<EntryStat>;

    fn read_link(&self, path: &Path) -> CompareResult<PathBuf>;

    fn open(&self, path: &Path) -> CompareResult<Box<dyn Read>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn list_dir(&self, path: &Path) -> CompareResult<DirListing> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .map(|entry| {
                let entry = entry.map_err(|err| {
                    let failed_path = err.path().unwrap_or(path).to_path_buf();
                    CompareError::filesystem("list", failed_path, err.into())
                })?;

                Ok((entry.file_name().to_os_string(), entry.into_path()))
            })
            .collect()
    }

    fn stat(&self, path: &Path) -> CompareResult<EntryStat> {
        let metadata = std::fs::symlink_metadata(path)
            .map_err(|err| CompareError::filesystem("stat", path, err))?;

        Ok((&metadata).into())
    }

    fn metadata(&self, path: &Path) -> CompareResult<EntryStat> {
        let metadata =
            std::fs::metadata(path).map_err(|err| CompareError::filesystem("stat", path, err))?;

        Ok((&metadata).into())
    }

    fn read_link(&self, path: &Path) -> CompareResult<PathBuf> {
        std::fs::read_link(path).map_err(|err| CompareError::filesystem("readlink", path, err))
    }

    fn open(&self, path: &Path) -> CompareResult<Box<dyn Read>> {
        let file =
            std::fs::File::open(path).map_err(|err| CompareError::filesystem("open", path, err))?;

        Ok(Box::new(file))
    }
}
