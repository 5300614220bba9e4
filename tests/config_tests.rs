use chatwrap::config::Config;
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[wrap]
max_line_length = 64

[dispatch]
send_delay_ms = 100
rich = true
default_color = "yellow"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.wrap.max_line_length, 64);
    assert_eq!(config.dispatch.send_delay_ms, 100);
    assert!(config.dispatch.rich);
    assert_eq!(config.dispatch.default_color, "yellow");
}

#[test]
fn test_example_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::from_file(path).unwrap();
    assert_eq!(config.wrap.max_line_length, 90);
    assert!(!config.dispatch.rich);
}

#[test]
fn test_invalid_config_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[wrap]\nmax_line_length = \"wide\"").unwrap();

    let err = Config::from_file(file.path().to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
