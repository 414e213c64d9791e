//! Unit tests for TOML configuration parsing.

use std::io::Write;

use bounded_arith::config::{load_config, ArithConfig};
use bounded_arith::{Bounds, Percent};

/// Test parsing explicit bounds from TOML.
#[test]
fn test_parse_bounds() {
    let toml_str = r#"
[bounds]
min = -20
max = 20
"#;

    let config: ArithConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.bounds.min, -20);
    assert_eq!(config.bounds.max, 20);
}

/// Test that a missing bounds table falls back to [0, 100].
#[test]
fn test_default_bounds() {
    let config: ArithConfig = toml::from_str("").expect("Failed to parse TOML");
    assert_eq!(config.bounds, Bounds::PERCENT);
}

/// Test that Percent fields validate during deserialization.
#[test]
fn test_percent_field_validates() {
    #[derive(serde::Deserialize)]
    struct Levels {
        volume: Percent,
    }

    let ok: Levels = toml::from_str("volume = 40").expect("Failed to parse TOML");
    assert_eq!(ok.volume.value(), 40);

    let err = toml::from_str::<Levels>("volume = 140").err().expect("Should reject 140");
    assert!(err.to_string().contains("value must be between 0 and 100"));
}

/// Test loading configuration from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("bounded-arith-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        writeln!(file, "[bounds]\nmin = 5\nmax = 15").expect("Failed to write file");
    }

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.bounds, Bounds::new(5, 15));
}
