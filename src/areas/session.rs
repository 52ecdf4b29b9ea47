use crate::areas::filesystem::{FileSystem, LocalFileSystem};
use crate::artifacts::filter::ignore_filter::IgnoreFilter;
use crate::artifacts::progress::ProgressSink;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// Settings that influence what counts as a difference
#[derive(Debug, Clone, Default, new)]
pub struct CompareOptions {
    /// Compare file data even for entries sharing device and inode
    pub paranoid: bool,
    pub ignore: IgnoreFilter,
}

/// Everything one comparison run writes to or reads from
pub struct Session {
    writer: RefCell<Box<dyn Write>>,
    fs: Box<dyn FileSystem>,
    progress: Box<dyn ProgressSink>,
}

impl Session {
    pub fn new(
        writer: Box<dyn Write>,
        fs: Box<dyn FileSystem>,
        progress: Box<dyn ProgressSink>,
    ) -> Self {
        Session {
            writer: RefCell::new(writer),
            fs,
            progress,
        }
    }

    pub fn local(writer: Box<dyn Write>, progress: Box<dyn ProgressSink>) -> Self {
        Self::new(writer, Box::new(LocalFileSystem), progress)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn progress(&self) -> &dyn ProgressSink {
        self.progress.as_ref()
    }
}
