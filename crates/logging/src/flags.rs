// crates/logging/src/flags.rs
#![allow(missing_docs)]

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Informational topics, enabled at `info` level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum InfoFlag {
    Load,
    Skip,
}

impl InfoFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            InfoFlag::Load => "load",
            InfoFlag::Skip => "skip",
        }
    }

    pub const fn target(self) -> &'static str {
        match self {
            InfoFlag::Load => "info::load",
            InfoFlag::Skip => "info::skip",
        }
    }
}

impl From<&InfoFlag> for InfoFlag {
    fn from(flag: &InfoFlag) -> Self {
        *flag
    }
}

/// Diagnostic topics, enabled down to `trace` level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DebugFlag {
    Pattern,
    Match,
    Walk,
}

impl DebugFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            DebugFlag::Pattern => "pattern",
            DebugFlag::Match => "match",
            DebugFlag::Walk => "walk",
        }
    }

    pub const fn target(self) -> &'static str {
        match self {
            DebugFlag::Pattern => "debug::pattern",
            DebugFlag::Match => "debug::match",
            DebugFlag::Walk => "debug::walk",
        }
    }
}

impl From<&DebugFlag> for DebugFlag {
    fn from(flag: &DebugFlag) -> Self {
        *flag
    }
}

/// Where formatted events are written.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, Default)]
#[clap(rename_all = "kebab-case")]
pub enum StderrMode {
    /// Warnings and errors on stderr, everything else on stdout.
    #[clap(alias = "e")]
    #[default]
    Errors,
    /// Every event on stderr.
    #[clap(alias = "a")]
    All,
}

#[derive(Clone, Debug)]
pub struct SubscriberConfig {
    pub format: LogFormat,
    pub verbose: u8,
    pub info: Vec<InfoFlag>,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
    pub stderr: StderrMode,
    pub colored: bool,
    pub timestamps: bool,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            verbose: 0,
            info: Vec::new(),
            debug: Vec::new(),
            quiet: false,
            stderr: StderrMode::Errors,
            colored: true,
            timestamps: false,
        }
    }
}

#[derive(Default)]
pub struct SubscriberConfigBuilder {
    cfg: SubscriberConfig,
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }
}

impl SubscriberConfigBuilder {
    pub fn format(mut self, format: LogFormat) -> Self {
        self.cfg.format = format;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    pub fn info<I>(mut self, info: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<InfoFlag>,
    {
        self.cfg.info = info.into_iter().map(Into::into).collect();
        self
    }

    pub fn debug<I>(mut self, debug: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DebugFlag>,
    {
        self.cfg.debug = debug.into_iter().map(Into::into).collect();
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.cfg.quiet = quiet;
        self
    }

    pub fn stderr(mut self, stderr: StderrMode) -> Self {
        self.cfg.stderr = stderr;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.cfg.colored = colored;
        self
    }

    pub fn timestamps(mut self, timestamps: bool) -> Self {
        self.cfg.timestamps = timestamps;
        self
    }

    pub fn build(self) -> SubscriberConfig {
        self.cfg
    }
}
