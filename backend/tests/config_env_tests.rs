//! Server configuration read from the environment.

use std::path::PathBuf;

use seed_timeline::{PipelineConfig, ServerConfig};

mod support;

#[test]
fn test_server_config_defaults() {
    support::with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", None),
            ("SEED_CSV_PATH", None),
            ("TIMELINE_CONFIG", None),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8080);
            assert_eq!(config.csv_path, PathBuf::from("2025-seeds.csv"));
            assert_eq!(config.config_path, None);
        },
    );
}

#[test]
fn test_server_config_from_env() {
    support::with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9000")),
            ("SEED_CSV_PATH", Some("/data/seeds.csv")),
            ("TIMELINE_CONFIG", Some("/etc/timeline.toml")),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 9000);
            assert_eq!(config.csv_path, PathBuf::from("/data/seeds.csv"));
            assert_eq!(config.config_path, Some(PathBuf::from("/etc/timeline.toml")));
        },
    );
}

#[test]
fn test_invalid_port_is_configuration_error() {
    support::with_scoped_env(&[("PORT", Some("eighty"))], || {
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("PORT"));
    });
}

#[test]
fn test_pipeline_config_from_explicit_file() {
    let file = support::create_temp_file("[pipeline]\nseason_end = \"2025-10-13\"\ninclude_stage_split = true\n");
    let path = file.path().to_string_lossy().to_string();
    support::with_scoped_env(&[("TIMELINE_CONFIG", Some(path.as_str()))], || {
        let config = ServerConfig::from_env().unwrap().pipeline_config().unwrap();
        assert!(config.include_stage_split);
        assert_eq!(config.season_end.to_string(), "2025-10-13");
        assert_eq!(config.date_adjust_days, PipelineConfig::default().date_adjust_days);
    });
}

#[test]
fn test_shipped_timeline_toml_parses() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("timeline.toml");
    let config = PipelineConfig::from_file(path).unwrap();
    assert_eq!(config, PipelineConfig::default());
}
