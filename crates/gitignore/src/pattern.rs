// crates/gitignore/src/pattern.rs
//! Compilation of one ignore rule and matching of a path against it.

use crate::glob::{Glob, has_fused_double_star};
use logging::DebugFlag;
use std::fmt;
use std::path::{Path, PathBuf};

const INCLUSION_PREFIX: char = '!';
const COMMENT_PREFIX: char = '#';
const DIR_SEP: char = '/';
const ANY_DIRS: &str = "**";

/// Outcome of testing a path against a single [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchResult {
    /// The rule does not apply; a lower-priority rule decides.
    NoMatch,
    /// The rule excludes the path.
    Exclude,
    /// The rule re-includes the path.
    Include,
}

impl MatchResult {
    /// `Exclude` or `Include`.
    pub fn is_decisive(self) -> bool {
        self != MatchResult::NoMatch
    }

    /// `Some(true)` for `Exclude`, `Some(false)` for `Include`.
    pub fn excluded(self) -> Option<bool> {
        match self {
            MatchResult::NoMatch => None,
            MatchResult::Exclude => Some(true),
            MatchResult::Include => Some(false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Empty piece left by a leading `/`.
    Anchor,
    /// A lone `**`.
    AnyDirs,
    /// `**` glued to other characters; poisons the whole pattern.
    Fused(String),
    Name(Glob),
}

impl Segment {
    fn compile(raw: &str) -> Self {
        if raw.is_empty() {
            Segment::Anchor
        } else if raw == ANY_DIRS {
            Segment::AnyDirs
        } else if has_fused_double_star(raw) {
            Segment::Fused(raw.to_string())
        } else {
            Segment::Name(Glob::new(raw))
        }
    }

    fn as_str(&self) -> &str {
        match self {
            Segment::Anchor => "",
            Segment::AnyDirs => ANY_DIRS,
            Segment::Fused(raw) => raw,
            Segment::Name(glob) => glob.as_str(),
        }
    }
}

/// One compiled ignore rule, scoped to the directory that declared it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rule: String,
    domain: Vec<String>,
    segments: Vec<Segment>,
    inclusion: bool,
    dir_only: bool,
    is_glob: bool,
    source: Option<PathBuf>,
}

impl Pattern {
    /// Compile `rule` as declared in the directory `domain`.
    ///
    /// Comment and blank lines are not filtered here, see
    /// [`Pattern::parse_line`].
    pub fn new<S: AsRef<str>>(rule: &str, domain: &[S]) -> Self {
        let mut body = rule;
        let mut inclusion = false;
        if let Some(rest) = body.strip_prefix(INCLUSION_PREFIX) {
            inclusion = true;
            body = rest;
        }

        body = trim_trailing_spaces(body);

        let mut dir_only = false;
        if let Some(rest) = body.strip_suffix(DIR_SEP) {
            dir_only = true;
            body = rest;
        }

        let is_glob = body.contains(DIR_SEP);
        let segments = body.split(DIR_SEP).map(Segment::compile).collect();

        let pattern = Self {
            rule: rule.to_string(),
            domain: domain.iter().map(|s| s.as_ref().to_string()).collect(),
            segments,
            inclusion,
            dir_only,
            is_glob,
            source: None,
        };
        tracing::trace!(
            target: DebugFlag::Pattern.target(),
            rule = %pattern.rule,
            domain = %pattern.domain.join("/"),
            inclusion,
            dir_only,
            is_glob,
        );
        pattern
    }

    /// Compile a line from a rule file, skipping blanks and comments.
    pub fn parse_line<S: AsRef<str>>(line: &str, domain: &[S]) -> Option<Self> {
        if line.starts_with(COMMENT_PREFIX) || line.trim().is_empty() {
            return None;
        }
        Some(Self::new(line, domain))
    }

    /// Record the file the rule was read from.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The rule line as given to [`Pattern::new`].
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Directory the rule was declared in, as segments from the root.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Glob text of each `/`-separated piece of the rule body.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(Segment::as_str)
    }

    /// Rule started with `!`.
    pub fn is_inclusion(&self) -> bool {
        self.inclusion
    }

    /// Rule ended with `/`.
    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Rule body has an inner `/` and is matched segment by segment.
    pub fn is_glob(&self) -> bool {
        self.is_glob
    }

    /// Rule file the pattern came from, if known.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Test `path` (segments from the traversal root) against this rule.
    /// `is_dir` describes the last segment.
    pub fn matches<S: AsRef<str>>(&self, path: &[S], is_dir: bool) -> MatchResult {
        if path.len() <= self.domain.len() {
            return MatchResult::NoMatch;
        }
        let (head, rel) = path.split_at(self.domain.len());
        if !head.iter().zip(&self.domain).all(|(p, d)| p.as_ref() == d) {
            return MatchResult::NoMatch;
        }

        let matched = if self.is_glob {
            self.glob_match(rel, is_dir)
        } else {
            self.simple_name_match(rel, is_dir)
        };

        match (matched, self.inclusion) {
            (false, _) => MatchResult::NoMatch,
            (true, true) => MatchResult::Include,
            (true, false) => MatchResult::Exclude,
        }
    }

    fn simple_name_match<S: AsRef<str>>(&self, rel: &[S], is_dir: bool) -> bool {
        let name_matches = |name: &str| match self.segments.first() {
            Some(Segment::Name(glob)) => glob.is_match(name),
            Some(Segment::AnyDirs) => true,
            _ => false,
        };
        let last = rel.len() - 1;
        rel.iter().enumerate().any(|(i, name)| {
            name_matches(name.as_ref()) && (!self.dir_only || i < last || is_dir)
        })
    }

    fn glob_match<S: AsRef<str>>(&self, rel: &[S], is_dir: bool) -> bool {
        if self.segments.iter().any(|s| matches!(s, Segment::Fused(_))) {
            return false;
        }
        let mut failed = vec![false; (self.segments.len() + 1) * (rel.len() + 1)];
        self.walk(0, rel, 0, is_dir, &mut failed)
    }

    // Lockstep walk of pattern piece `pi` against path segment `si`. A piece
    // that follows `**` may match at any later position; each candidate is
    // tried in order until the remainder of the pattern fits. States that
    // already failed are recorded in `failed`, so each (piece, segment) pair
    // is explored once.
    fn walk<S: AsRef<str>>(
        &self,
        pi: usize,
        path: &[S],
        si: usize,
        is_dir: bool,
        failed: &mut [bool],
    ) -> bool {
        let key = pi * (path.len() + 1) + si;
        if failed[key] {
            return false;
        }
        let found = match self.segments.get(pi) {
            None => self.accepts_end(pi, path.len() - si, is_dir),
            Some(Segment::Anchor | Segment::AnyDirs) => {
                self.walk(pi + 1, path, si, is_dir, failed)
            }
            Some(Segment::Fused(_)) => false,
            Some(Segment::Name(glob)) => {
                let limit = if self.follows_any_dirs(pi) {
                    path.len()
                } else {
                    path.len().min(si + 1)
                };
                (si..limit).any(|i| {
                    glob.is_match(path[i].as_ref())
                        && self.walk(pi + 1, path, i + 1, is_dir, failed)
                })
            }
        };
        if !found {
            failed[key] = true;
        }
        found
    }

    fn follows_any_dirs(&self, pi: usize) -> bool {
        pi > 0 && matches!(self.segments[pi - 1], Segment::AnyDirs)
    }

    // Every piece has matched with `left` path segments to spare. Without a
    // trailing `**`, leftovers mean the match ended on an ancestor directory.
    // A trailing `**` swallows the leftovers, so a directory-only rule needs
    // at least one of them to be a directory: two or more segments, or a
    // final segment that is a directory itself.
    fn accepts_end(&self, pi: usize, left: usize, is_dir: bool) -> bool {
        if !self.dir_only || is_dir {
            return true;
        }
        if self.follows_any_dirs(pi) {
            left >= 2
        } else {
            left > 0
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rule)
    }
}

/// Compile every rule in `text`, one per line, skipping blanks and comments.
pub fn parse_lines<S: AsRef<str>>(text: &str, domain: &[S]) -> Vec<Pattern> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter_map(|line| Pattern::parse_line(line, domain))
        .collect()
}

// Drops trailing spaces unless the last one is escaped by an odd run of
// backslashes, in which case that one space stays.
fn trim_trailing_spaces(s: &str) -> &str {
    let trimmed = s.trim_end_matches(' ');
    if trimmed.len() == s.len() {
        return s;
    }
    let slashes = trimmed.chars().rev().take_while(|&c| c == '\\').count();
    if slashes % 2 == 1 {
        &s[..trimmed.len() + 1]
    } else {
        trimmed
    }
}
