// tests/config.rs

use layered_ignore::{IgnoreConfig, init_logging};
use logging::{DebugFlag, InfoFlag, LogFormat};

#[test]
fn config_defaults_apply_to_missing_fields() {
    let cfg: IgnoreConfig = serde_json::from_str(r#"{"overrides":["*.bak"]}"#).unwrap();
    assert_eq!(cfg.overrides, ["*.bak"]);
    assert_eq!(cfg.load.file_name, ".gitignore");
    assert_eq!(cfg.load.skip_dirs, [".git"]);
    assert_eq!(cfg.log_format, LogFormat::Text);
    assert_eq!(cfg.verbose, 0);
    assert!(!cfg.quiet);
}

#[test]
fn config_reads_logging_fields() {
    let cfg: IgnoreConfig = serde_json::from_str(
        r#"{
            "load": {"file_name": ".ignore"},
            "log_format": "json",
            "verbose": 2,
            "info": ["load"],
            "debug": ["match", "walk"],
            "quiet": true
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.load.file_name, ".ignore");
    assert_eq!(cfg.load.skip_dirs, [".git"]);

    let sub = cfg.subscriber_config();
    assert_eq!(sub.format, LogFormat::Json);
    assert_eq!(sub.verbose, 2);
    assert_eq!(sub.info, [InfoFlag::Load]);
    assert_eq!(sub.debug, [DebugFlag::Match, DebugFlag::Walk]);
    assert!(sub.quiet);
}

#[test]
fn config_serializes_back() {
    let cfg = IgnoreConfig::builder()
        .overrides(["/dist"])
        .debug([DebugFlag::Pattern])
        .build();
    let text = serde_json::to_string(&cfg).unwrap();
    let back: IgnoreConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn init_logging_installs_once() {
    let cfg = IgnoreConfig::builder().quiet(true).build();
    init_logging(&cfg).unwrap();
    tracing::error!("logging initialised");
}
