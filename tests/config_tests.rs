use std::fs;
use std::time::Duration;

use dolar_bot::error::{ConfigError, Error};
use dolar_bot::infrastructure::config::settings::Config;
use dolar_bot::port::Destination;
use rust_decimal_macros::dec;

const EXAMPLE: &str = include_str!("../config.example.toml");

#[test]
fn example_config_only_lacks_token() {
    let result = Config::parse_toml(EXAMPLE);

    // The example ships with an empty token; the environment may supply one.
    match result {
        Err(Error::Config(ConfigError::MissingField {
            field: "telegram_token",
        })) => {}
        Ok(config) => assert_eq!(config.target, Destination::Channel("@dolarbrou".into())),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn example_config_with_token_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let contents = EXAMPLE.replace("telegram_token = \"\"", "telegram_token = \"123:abc\"");
    fs::write(&path, contents).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.target, Destination::Channel("@dolarbrou".into()));
    assert!(config.admin_id.is_none());
    assert_eq!(config.interval(), Duration::from_millis(300_000));
    assert_eq!(config.detector.threshold, dec!(0.05));
    assert_eq!(config.message.locale, "es_ES");
}

#[test]
fn unreadable_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
