use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Component, Path, PathBuf},
};

use super::Error;

/// Looks up the text of an expression source by path.
pub trait FileProvider {
    /// Returns the raw bytes stored at `path`.
    ///
    /// # Errors
    /// - [`Error::IoError`] if nothing can be read at `path`.
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error>;

    /// Returns the text stored at `path`, decoded as UTF-8.
    ///
    /// # Errors
    /// - [`Error::IoError`] if nothing can be read at `path`.
    /// - [`Error::Utf8Error`] if the bytes are not UTF-8.
    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, str>, Error> {
        match self.read_bytes(path)? {
            Cow::Borrowed(bytes) => Ok(Cow::Borrowed(std::str::from_utf8(bytes)?)),
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|err| err.utf8_error().into()),
        }
    }
}

/// Reads sources from disk, relative to a root directory (the working directory by default).
#[derive(Debug, Clone)]
pub struct FsProvider {
    root: PathBuf,
}

impl FsProvider {
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for FsProvider {
    fn default() -> Self {
        Self::from(".")
    }
}

impl<P: Into<PathBuf>> From<P> for FsProvider {
    fn from(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl FileProvider for FsProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error> {
        let full_path = self.resolve(path.as_ref());
        std::fs::read(&full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::IoError(format!("{}: {err}", full_path.display())))
    }
}

/// Serves sources kept in memory, keyed by their normalized relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: HashMap<String, String>,
}

impl MemoryProvider {
    /// Creates an empty [`MemoryProvider`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` at `path`, replacing whatever was there.
    ///
    /// Paths that climb above the root with `..` are ignored.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, content: impl Into<String>) {
        let path = path.as_ref();
        match normalize_path_str(path) {
            Some(key) => {
                self.files.insert(key, content.into());
            }
            None => tracing::warn!(path = %path.display(), "ignoring source outside of the root"),
        }
    }

    fn lookup(&self, path: &Path) -> Result<&str, Error> {
        let key = normalize_path_str(path)
            .ok_or_else(|| Error::IoError(format!("{}: path leaves the root", path.display())))?;
        self.files
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| Error::IoError(format!("{key}: no such source")))
    }
}

impl FileProvider for MemoryProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error> {
        self.lookup(path.as_ref()).map(|text| Cow::Borrowed(text.as_bytes()))
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, str>, Error> {
        self.lookup(path.as_ref()).map(Cow::Borrowed)
    }
}

/// Joins the normal components of `path` with `/`, folding `.` and `..`.
///
/// Returns [`None`] for absolute paths, paths that are not UTF-8, and paths that climb above the
/// root.
fn normalize_path_str(path: &Path) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(parts.join("/"))
}
