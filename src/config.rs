// src/config.rs

use gitignore::LoadOptions;
use logging::{DebugFlag, InfoFlag, LogFormat, SubscriberConfig};
use serde::{Deserialize, Serialize};

/// Settings for loading a matcher and for the log output around it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Rule file name and directories passed over.
    pub load: LoadOptions,
    /// Extra rules at the root, above every rule file in priority.
    pub overrides: Vec<String>,
    pub log_format: LogFormat,
    pub verbose: u8,
    pub info: Vec<InfoFlag>,
    pub debug: Vec<DebugFlag>,
    pub quiet: bool,
}

impl IgnoreConfig {
    /// Create a new builder for [`IgnoreConfig`].
    pub fn builder() -> IgnoreConfigBuilder {
        IgnoreConfigBuilder::default()
    }

    /// The logging part of the configuration.
    pub fn subscriber_config(&self) -> SubscriberConfig {
        SubscriberConfig::builder()
            .format(self.log_format)
            .verbose(self.verbose)
            .info(&self.info)
            .debug(&self.debug)
            .quiet(self.quiet)
            .build()
    }
}

/// Builder for [`IgnoreConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct IgnoreConfigBuilder {
    cfg: IgnoreConfig,
}

impl IgnoreConfigBuilder {
    pub fn load(mut self, load: LoadOptions) -> Self {
        self.cfg.load = load;
        self
    }

    pub fn overrides<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.cfg.overrides = rules.into_iter().map(Into::into).collect();
        self
    }

    pub fn log_format(mut self, log_format: LogFormat) -> Self {
        self.cfg.log_format = log_format;
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

    pub fn build(self) -> IgnoreConfig {
        self.cfg
    }
}
