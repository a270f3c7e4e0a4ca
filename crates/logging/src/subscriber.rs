// crates/logging/src/subscriber.rs

use crate::flags::{LogFormat, SubscriberConfig};
use crate::sink::LogWriter;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, filter::Directive, fmt as tracing_fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn directive(text: String) -> io::Result<Directive> {
    text.parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{text}: {e}")))
}

/// Build a [`tracing`] subscriber from `cfg`.
///
/// Verbosity picks the default level (`warn`, then `info`, `debug` and
/// `trace` for each extra step); `quiet` forces `error`. Each requested info
/// or debug flag adds a directive for its target on top of that default.
/// `RUST_LOG` is honored as well.
pub fn subscriber(cfg: SubscriberConfig) -> io::Result<Box<dyn tracing::Subscriber + Send + Sync>> {
    let SubscriberConfig {
        format,
        verbose,
        info,
        debug,
        quiet,
        stderr,
        colored,
        timestamps,
    } = cfg;

    let mut level = if quiet {
        LevelFilter::ERROR
    } else if verbose > 2 {
        LevelFilter::TRACE
    } else if verbose > 1 {
        LevelFilter::DEBUG
    } else if verbose > 0 {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    if !quiet {
        if !debug.is_empty() && level < LevelFilter::DEBUG {
            level = LevelFilter::DEBUG;
        } else if !info.is_empty() && level < LevelFilter::INFO {
            level = LevelFilter::INFO;
        }
    }

    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if !quiet {
        for flag in &info {
            filter = filter.add_directive(directive(format!("{}=info", flag.target()))?);
        }
        for flag in &debug {
            filter = filter.add_directive(directive(format!("{}=trace", flag.target()))?);
        }
    }

    let base = tracing_fmt::layer()
        .with_writer(LogWriter { mode: stderr })
        .with_ansi(colored);
    let fmt_layer = if timestamps {
        match format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Text => base.boxed(),
        }
    } else {
        let base = base.without_time();
        match format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Text => base.boxed(),
        }
    };

    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
    Ok(Box::new(registry))
}

/// Initialise the global [`tracing`] subscriber.
pub fn init(cfg: SubscriberConfig) -> io::Result<()> {
    subscriber(cfg)?.init();
    Ok(())
}
