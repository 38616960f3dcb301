use super::AppConfig;
use clap::Parser;
use std::time::Duration;

#[test]
fn defaults_validate() {
    let mut cfg = AppConfig::parse_from(["irmix"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.port, "COM3");
    assert_eq!(cfg.baud, 9_600);
}

#[test]
fn rejects_empty_port() {
    let mut cfg = AppConfig::parse_from(["irmix", "--port", ""]);
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::parse_from(["irmix", "--port", "   "]);
    assert!(cfg.validate().is_err());
}

#[test]
fn normalizes_port_whitespace() {
    let mut cfg = AppConfig::parse_from(["irmix", "--port", " COM4 "]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.port, "COM4");
}

#[test]
fn rejects_zero_baud() {
    let mut cfg = AppConfig::parse_from(["irmix", "--baud", "0"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_poll_ms_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["irmix", "--poll-ms", "9"]);
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::parse_from(["irmix", "--poll-ms", "5001"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn accepts_poll_ms_bounds() {
    let mut cfg = AppConfig::parse_from(["irmix", "--poll-ms", "10"]);
    assert!(cfg.validate().is_ok());

    let mut cfg = AppConfig::parse_from(["irmix", "--poll-ms", "5000"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn rejects_read_timeout_out_of_bounds() {
    let mut cfg = AppConfig::parse_from(["irmix", "--read-timeout-ms", "9"]);
    assert!(cfg.validate().is_err());

    let mut cfg = AppConfig::parse_from(["irmix", "--read-timeout-ms", "2001"]);
    assert!(cfg.validate().is_err());
}

#[test]
fn durations_reflect_cli_values() {
    let mut cfg = AppConfig::parse_from(["irmix", "--poll-ms", "250", "--read-timeout-ms", "75"]);
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.poll_interval(), Duration::from_millis(250));
    assert_eq!(cfg.read_timeout(), Duration::from_millis(75));
}
