use colored::{ColoredString, Colorize};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// One of the two trees under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "1st tree"),
            Side::B => write!(f, "2nd tree"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// The name exists on one side only
    Missing { absent_from: Side },
    /// Both sides have the name, but as different entry types
    TypeMismatch,
    /// Same type, different data (or, for directories, a differing subtree)
    ContentDiff,
}

/// Node of the diff tree
///
/// A `ContentDiff` record with children is a directory whose subtree differs; with no
/// children it is a differing file, symlink or special file. Only directory records carry
/// `a_path`/`b_path`, for tools that need to revisit both real directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord {
    pub kind: DiffKind,
    pub name: OsString,
    pub a_path: Option<PathBuf>,
    pub b_path: Option<PathBuf>,
    pub children: Vec<DiffRecord>,
}

impl DiffRecord {
    pub const ROOT_NAME: &'static str = "<root>";

    pub fn missing(name: &OsStr, absent_from: Side) -> Self {
        Self::leaf(DiffKind::Missing { absent_from }, name)
    }

    pub fn type_mismatch(name: &OsStr) -> Self {
        Self::leaf(DiffKind::TypeMismatch, name)
    }

    pub fn changed_leaf(name: &OsStr) -> Self {
        Self::leaf(DiffKind::ContentDiff, name)
    }

    pub fn changed_dir(name: &OsStr, a_path: &Path, b_path: &Path, children: Vec<DiffRecord>) -> Self {
        DiffRecord {
            kind: DiffKind::ContentDiff,
            name: name.to_os_string(),
            a_path: Some(a_path.to_path_buf()),
            b_path: Some(b_path.to_path_buf()),
            children,
        }
    }

    /// Synthetic record wrapping a top-level result list for display
    pub fn root(children: Vec<DiffRecord>) -> Self {
        DiffRecord {
            kind: DiffKind::ContentDiff,
            name: OsString::from(Self::ROOT_NAME),
            a_path: None,
            b_path: None,
            children,
        }
    }

    fn leaf(kind: DiffKind, name: &OsStr) -> Self {
        DiffRecord {
            kind,
            name: name.to_os_string(),
            a_path: None,
            b_path: None,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == DiffKind::ContentDiff && !self.children.is_empty()
    }

    pub fn display_name(&self) -> std::borrow::Cow<'_, str> {
        self.name.to_string_lossy()
    }

    pub fn marker(&self) -> char {
        match self.kind {
            DiffKind::Missing {
                absent_from: Side::B,
            } => '-',
            DiffKind::Missing {
                absent_from: Side::A,
            } => '+',
            DiffKind::TypeMismatch => '!',
            DiffKind::ContentDiff => '?',
        }
    }

    /// Marker and name, colored by kind
    pub fn label(&self) -> ColoredString {
        let label = format!("{} {}", self.marker(), self.display_name());

        match self.kind {
            DiffKind::Missing {
                absent_from: Side::B,
            } => label.red(),
            DiffKind::Missing {
                absent_from: Side::A,
            } => label.green(),
            DiffKind::TypeMismatch => label.blue(),
            DiffKind::ContentDiff => label.yellow(),
        }
    }

    /// Number of records in this subtree, the record itself excluded
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
