// crates/gitignore/src/matcher.rs
//! Priority resolution over a pattern collection.

use crate::pattern::{MatchResult, Pattern};
use logging::DebugFlag;
use std::path::{Component, Path};
use std::sync::Arc;

/// Resolves paths against an ordered collection of patterns.
///
/// Patterns are held in ascending priority: generic rules first, then the
/// repository's root rules, then rules of nested directories, then any
/// command-line overrides. The highest-priority pattern that applies to a
/// path decides. The collection is shared and never modified, so clones of a
/// matcher are cheap and can be used from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    patterns: Arc<[Pattern]>,
}

impl Matcher {
    /// Build a matcher over `patterns`, lowest priority first.
    pub fn new(patterns: impl Into<Arc<[Pattern]>>) -> Self {
        Self {
            patterns: patterns.into(),
        }
    }

    /// The patterns in ascending priority.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when there are no patterns, so nothing is ever excluded.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if `path` is excluded. Paths no rule applies to are kept.
    pub fn is_excluded<S: AsRef<str>>(&self, path: &[S], is_dir: bool) -> bool {
        self.decide(path, is_dir).excluded().unwrap_or(false)
    }

    /// Result of the deciding pattern, or `NoMatch` if none applies.
    pub fn decide<S: AsRef<str>>(&self, path: &[S], is_dir: bool) -> MatchResult {
        self.deciding_pattern(path, is_dir)
            .map_or(MatchResult::NoMatch, |(_, result)| result)
    }

    /// The highest-priority pattern with a decisive result for `path`.
    pub fn deciding_pattern<S: AsRef<str>>(
        &self,
        path: &[S],
        is_dir: bool,
    ) -> Option<(&Pattern, MatchResult)> {
        let found = self.patterns.iter().rev().find_map(|pattern| {
            let result = pattern.matches(path, is_dir);
            result.is_decisive().then_some((pattern, result))
        });
        if tracing::enabled!(target: DebugFlag::Match.target(), tracing::Level::DEBUG) {
            let joined = path.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/");
            let (rule, result) = match found {
                Some((pattern, result)) => (pattern.rule(), result),
                None => ("", MatchResult::NoMatch),
            };
            tracing::debug!(
                target: DebugFlag::Match.target(),
                path = %joined,
                is_dir,
                ?result,
                rule,
            );
        }
        found
    }

    /// [`Matcher::is_excluded`] for a [`Path`] relative to the traversal
    /// root. `.` components are dropped, so `./a/b` and `a/b` are the same
    /// query. A path that is absolute or steps out with `..` lies outside
    /// every rule's domain and is never excluded.
    pub fn is_path_excluded<P: AsRef<Path>>(&self, path: P, is_dir: bool) -> bool {
        let mut segments = Vec::new();
        for component in path.as_ref().components() {
            match component {
                Component::Normal(name) => segments.push(name.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return false;
                }
            }
        }
        self.is_excluded(&segments, is_dir)
    }
}

impl From<Vec<Pattern>> for Matcher {
    fn from(patterns: Vec<Pattern>) -> Self {
        Self::new(patterns)
    }
}

impl FromIterator<Pattern> for Matcher {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
