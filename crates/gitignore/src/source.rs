// crates/gitignore/src/source.rs
//! Collecting patterns from per-directory rule files.

use crate::pattern::{Pattern, parse_lines};
use logging::{DebugFlag, InfoFlag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// Name of the per-directory rule file.
pub const DEFAULT_FILE_NAME: &str = ".gitignore";
/// Version-control metadata directory never searched for rule files.
pub const DEFAULT_SKIP_DIR: &str = ".git";

/// A directory from which rule files can be read and sub-directories listed.
pub trait Dir: Sized {
    /// Segments from the traversal root to this directory; empty for the root.
    fn path(&self) -> &[String];

    /// Contents of the file `name` in this directory, `None` if absent.
    fn read_file(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Immediate sub-directories, in the order they should be visited.
    fn subdirs(&self) -> io::Result<Vec<Self>>;
}

/// Which files are read and which directories are passed over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Rule file looked up in every directory.
    pub file_name: String,
    /// Directory names not descended into.
    pub skip_dirs: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            skip_dirs: vec![DEFAULT_SKIP_DIR.to_string()],
        }
    }
}

impl LoadOptions {
    /// Replace the rule file name.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Replace the list of skipped directory names.
    pub fn with_skip_dirs<I>(mut self, dirs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.skip_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    fn skips(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }
}

/// Read rule files below `dir`, depth first.
///
/// The result is in ascending priority: each directory's own rules come
/// before those of its sub-directories, and sub-directories follow the order
/// returned by [`Dir::subdirs`]. Errors from the directory abstraction are
/// returned as they are.
pub fn read_patterns<D: Dir>(dir: &D, opts: &LoadOptions) -> io::Result<Vec<Pattern>> {
    let mut patterns = Vec::new();
    collect(dir, opts, &mut patterns)?;
    Ok(patterns)
}

fn collect<D: Dir>(dir: &D, opts: &LoadOptions, out: &mut Vec<Pattern>) -> io::Result<()> {
    let domain = dir.path();
    if let Some(data) = dir.read_file(&opts.file_name)? {
        let text = String::from_utf8_lossy(&data);
        let source: PathBuf = domain.iter().chain([&opts.file_name]).collect();
        let before = out.len();
        out.extend(
            parse_lines(&text, domain)
                .into_iter()
                .map(|p| p.with_source(&source)),
        );
        tracing::info!(
            target: InfoFlag::Load.target(),
            file = %source.display(),
            patterns = out.len() - before,
        );
    }

    for sub in dir.subdirs()? {
        let skipped = sub.path().last().is_some_and(|name| opts.skips(name));
        if skipped {
            tracing::info!(
                target: InfoFlag::Skip.target(),
                dir = %sub.path().join("/"),
            );
            continue;
        }
        collect(&sub, opts, out)?;
    }
    Ok(())
}

/// An in-memory directory tree.
///
/// Handy for fixtures and for sources that are not a real filesystem, such
/// as the contents of an archive.
#[derive(Clone, Debug, Default)]
pub struct MemDir {
    path: Vec<String>,
    files: BTreeMap<String, Vec<u8>>,
    dirs: Vec<MemDir>,
    list_error: Option<(io::ErrorKind, String)>,
}

impl MemDir {
    /// An empty root directory.
    pub fn root() -> Self {
        Self::default()
    }

    /// Add a file to this directory.
    pub fn with_file(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), data.into());
        self
    }

    /// Add a sub-directory named `name`, populated by `build`.
    pub fn with_dir(mut self, name: &str, build: impl FnOnce(MemDir) -> MemDir) -> Self {
        let mut path = self.path.clone();
        path.push(name.to_string());
        let child = MemDir {
            path,
            ..MemDir::default()
        };
        self.dirs.push(build(child));
        self
    }

    /// Make [`Dir::subdirs`] fail on this directory.
    pub fn with_error(mut self, kind: io::ErrorKind, msg: impl Into<String>) -> Self {
        self.list_error = Some((kind, msg.into()));
        self
    }
}

impl Dir for MemDir {
    fn path(&self) -> &[String] {
        &self.path
    }

    fn read_file(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.files.get(name).cloned())
    }

    fn subdirs(&self) -> io::Result<Vec<Self>> {
        if let Some((kind, msg)) = &self.list_error {
            tracing::debug!(target: DebugFlag::Walk.target(), dir = %self.path.join("/"), %msg);
            return Err(io::Error::new(*kind, msg.clone()));
        }
        Ok(self.dirs.clone())
    }
}
