//! Unit tests for domain error types

use appshell_domain::Error;

#[test]
fn test_not_registered_error() {
    let error = Error::not_registered("dyn appshell_domain::ports::HttpClient");
    match &error {
        Error::NotRegistered { capability } => {
            assert!(capability.contains("HttpClient"));
        }
        _ => panic!("Expected NotRegistered error"),
    }
    let display_str = format!("{}", error);
    assert!(display_str.contains("capability not registered"));
}

#[test]
fn test_not_found_error() {
    let error = Error::not_found("setting 'volume'");
    match error {
        Error::NotFound { resource } => assert_eq!(resource, "setting 'volume'"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("Invalid input provided");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "Invalid input provided"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_session_error() {
    let error = Error::session("user is already logged on");
    match error {
        Error::Session { message } => assert_eq!(message, "user is already logged on"),
        _ => panic!("Expected Session error"),
    }
}

#[test]
fn test_timeout_error_display() {
    let error = Error::timeout("GET http://localhost");
    let display_str = format!("{}", error);
    assert!(display_str.contains("timed out"));
}

#[test]
fn test_storage_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::storage_with_source("Failed to write settings file", io);
    match error {
        Error::Storage { message, source } => {
            assert_eq!(message, "Failed to write settings file");
            assert!(source.is_some());
        }
        _ => panic!("Expected Storage error"),
    }
}

#[test]
fn test_network_error_variants() {
    let simple = Error::network("Connection refused");
    match simple {
        Error::Network { message, source } => {
            assert_eq!(message, "Connection refused");
            assert!(source.is_none());
        }
        _ => panic!("Expected Network error"),
    }

    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
    let wrapped = Error::network_with_source("Request failed", io);
    match wrapped {
        Error::Network { source, .. } => assert!(source.is_some()),
        _ => panic!("Expected Network error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let parse = "x".parse::<u32>().unwrap_err();
    let error = Error::configuration_with_source("Failed to extract configuration", parse);
    match error {
        Error::Configuration { message, source } => {
            assert!(message.contains("configuration"));
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    match error {
        Error::IoSimple { .. } => {}
        _ => panic!("Expected IoSimple error"),
    }
}

#[test]
fn test_internal_and_config_errors() {
    match Error::internal("cache entry has unexpected type") {
        Error::Internal { message } => assert!(message.contains("unexpected")),
        _ => panic!("Expected Internal error"),
    }
    match Error::config("autosave delay must be at least one second") {
        Error::Config { message } => assert!(message.contains("autosave")),
        _ => panic!("Expected Config error"),
    }
}
