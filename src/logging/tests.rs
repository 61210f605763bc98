// envtree: Environment-to-State-Tree Materializer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_parse() {
    let parsed: Vec<_> = ["0", "3", "debug", "WARN", "silent", "dump", "7", "loud"]
        .into_iter()
        .map(|s| (s, s.parse::<LogLevel>().map(u8::from).ok()))
        .collect();
    insta::assert_debug_snapshot!(parsed, @r#"
    [
        (
            "0",
            Some(
                0,
            ),
        ),
        (
            "3",
            Some(
                3,
            ),
        ),
        (
            "debug",
            Some(
                4,
            ),
        ),
        (
            "WARN",
            Some(
                2,
            ),
        ),
        (
            "silent",
            Some(
                0,
            ),
        ),
        (
            "dump",
            Some(
                6,
            ),
        ),
        (
            "7",
            None,
        ),
        (
            "loud",
            None,
        ),
    ]
    "#);
}

#[test]
fn test_log_level_filter_strings() {
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
    assert_eq!(LogLevel::DEBUG.to_filter_string(), "envtree=debug");
    assert_eq!(LogLevel::DUMP.to_filter_string(), "trace");
    assert_eq!(LogLevel::INFO.to_string(), "3 (info)");
}

#[test]
fn test_log_level_rejects_out_of_range() {
    insta::assert_snapshot!(
        LogLevel::new(9).unwrap_err().to_string(),
        @"invalid value for 'level' in section '[log]': log level must be 0-6 or a level name, got '9'"
    );
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(u8::from(LogLevel::TRACE), 5);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    assert_eq!(serde_json::to_string(&level).unwrap(), "4");
    assert!(serde_json::from_str::<LogLevel>("12").is_err());
}

#[test]
fn test_log_level_deserializes_names() {
    let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
    assert_eq!(level, LogLevel::DEBUG);
    let level: LogLevel = serde_json::from_str("\"5\"").unwrap();
    assert_eq!(level, LogLevel::TRACE);
    assert!(serde_json::from_str::<LogLevel>("-1").is_err());

    let err = serde_json::from_str::<LogLevel>("\"loud\"").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'level' in section '[log]': log level must be 0-6 or a level name, got 'loud'"
    );
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::DEBUG)
        .with_log_file("out/envtree.log".to_string())
        .with_json(true)
        .build();

    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("out/envtree.log"));
    assert!(config.json());
    assert!(!config.show_target());

    let default = LogConfig::default();
    assert_eq!(default.console_level(), LogLevel::WARN);
    assert_eq!(default.log_file(), None);
}
