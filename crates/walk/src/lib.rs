// crates/walk/src/lib.rs
//! Reading rule files from a real directory tree.
//!
//! [`FsDir`] implements [`gitignore::Dir`] on top of the local filesystem.
//! Sub-directories are listed with [`walkdir`] and visited in file-name
//! order, so the priority of nested rule files does not depend on the order
//! the operating system returns entries in.

use gitignore::Dir;
use logging::DebugFlag;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory on disk, addressed relative to the traversal root.
#[derive(Clone, Debug)]
pub struct FsDir {
    location: PathBuf,
    path: Vec<String>,
    follow_links: bool,
}

impl FsDir {
    /// Open `root` as the top of a traversal.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        let meta = fs::metadata(root)?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self {
            location: root.to_path_buf(),
            path: Vec::new(),
            follow_links: false,
        })
    }

    /// Descend into symlinked directories as well.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Location of this directory on disk.
    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl Dir for FsDir {
    fn path(&self) -> &[String] {
        &self.path
    }

    fn read_file(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let file = self.location.join(name);
        match fs::metadata(&file) {
            Ok(meta) if meta.is_dir() => return Ok(None),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        }
        match fs::read(&file) {
            Ok(data) => Ok(Some(data)),
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::IsADirectory) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn subdirs(&self) -> io::Result<Vec<Self>> {
        let mut out = Vec::new();
        let entries = WalkDir::new(&self.location)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.follow_links)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry.map_err(|err| {
                let msg = err.to_string();
                err.into_io_error().unwrap_or_else(|| io::Error::other(msg))
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let mut path = self.path.clone();
            path.push(entry.file_name().to_string_lossy().into_owned());
            out.push(FsDir {
                location: entry.into_path(),
                path,
                follow_links: self.follow_links,
            });
        }
        tracing::debug!(
            target: DebugFlag::Walk.target(),
            dir = %self.location.display(),
            subdirs = out.len(),
        );
        Ok(out)
    }
}
