// src/lib.rs
//! Layered gitignore-style exclusion for directory trees.
//!
//! Rule files found anywhere below a root are compiled into one
//! [`Matcher`]. Each rule only applies inside the directory whose rule file
//! declared it, and rules from deeper directories override those above them.
//!
//! ```no_run
//! use layered_ignore::{IgnoreConfig, load_matcher};
//!
//! let cfg = IgnoreConfig::builder().overrides(["*.tmp"]).build();
//! let matcher = load_matcher("/path/to/repo", &cfg)?;
//! if matcher.is_excluded(&["target", "debug"], true) {
//!     // skip it
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

mod config;

pub use config::{IgnoreConfig, IgnoreConfigBuilder};
pub use gitignore::{
    DEFAULT_FILE_NAME, DEFAULT_SKIP_DIR, Dir, Glob, LoadOptions, MatchResult, Matcher, MemDir,
    Pattern, parse_lines, read_patterns,
};
pub use walk::FsDir;

use std::io;
use std::path::Path;

/// Read every rule file below `root` and build a matcher from them.
///
/// [`IgnoreConfig::overrides`] are appended last, scoped to the root, so they
/// take precedence over anything read from disk.
pub fn load_matcher(root: impl AsRef<Path>, cfg: &IgnoreConfig) -> io::Result<Matcher> {
    let dir = FsDir::open(root)?;
    load_from(&dir, cfg)
}

/// [`load_matcher`] over any [`Dir`] implementation.
pub fn load_from<D: Dir>(dir: &D, cfg: &IgnoreConfig) -> io::Result<Matcher> {
    let mut patterns = read_patterns(dir, &cfg.load)?;
    let from_files = patterns.len();
    patterns.extend(
        cfg.overrides
            .iter()
            .filter_map(|rule| Pattern::parse_line(rule, dir.path())),
    );
    tracing::info!(
        target: logging::InfoFlag::Load.target(),
        patterns = from_files,
        overrides = patterns.len() - from_files,
        "matcher ready"
    );
    Ok(Matcher::new(patterns))
}

/// Install the global log subscriber described by `cfg`.
pub fn init_logging(cfg: &IgnoreConfig) -> io::Result<()> {
    logging::init(cfg.subscriber_config())
}
