// crates/logging/src/sink.rs
use crate::flags::StderrMode;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::writer::{EitherWriter, MakeWriter};

/// Routes formatted events to stderr or stdout according to a [`StderrMode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter {
    /// Routing policy.
    pub mode: StderrMode,
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = EitherWriter<io::Stderr, io::Stdout>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.mode {
            StderrMode::All => EitherWriter::A(io::stderr()),
            StderrMode::Errors => EitherWriter::B(io::stdout()),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if self.mode == StderrMode::All || *meta.level() <= Level::WARN {
            EitherWriter::A(io::stderr())
        } else {
            EitherWriter::B(io::stdout())
        }
    }
}
