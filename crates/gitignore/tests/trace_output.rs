// crates/gitignore/tests/trace_output.rs
use gitignore::{LoadOptions, Matcher, MemDir, read_patterns};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::subscriber::with_default;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

#[derive(Clone, Default)]
struct VecWriter(Arc<Mutex<Vec<u8>>>);

struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl Write for VecWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

impl VecWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture(filter: &str, f: impl FnOnce()) -> String {
    let writer = VecWriter::default();
    let sub = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    with_default(sub, f);
    writer.contents()
}

#[test]
fn load_events_name_the_rule_file() {
    let root = MemDir::root()
        .with_file(".gitignore", "*.o\n*.a\n")
        .with_dir(".git", |d| d);
    let out = capture("info::load=info,info::skip=info", || {
        read_patterns(&root, &LoadOptions::default()).unwrap();
    });
    assert!(out.contains("file=.gitignore"), "{out}");
    assert!(out.contains("patterns=2"), "{out}");
    assert!(out.contains("dir=.git"), "{out}");
}

#[test]
fn match_events_carry_deciding_rule() {
    let root = MemDir::root().with_file(".gitignore", "build/\n");
    let matcher = Matcher::new(read_patterns(&root, &LoadOptions::default()).unwrap());
    let out = capture("debug::match=debug", || {
        assert!(matcher.is_excluded(&["build", "out"], false));
    });
    assert!(out.contains("path=build/out"), "{out}");
    assert!(out.contains("result=Exclude"), "{out}");
    assert!(out.contains("rule=\"build/\"") || out.contains("rule=build/"), "{out}");
}

#[test]
fn match_events_are_silent_by_default() {
    let matcher = Matcher::default();
    let out = capture("warn", || {
        assert!(!matcher.is_excluded(&["a"], false));
    });
    assert!(out.is_empty(), "{out}");
}
