use crate::error::{RosterError, ErrorContext};
use crate::roster_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));
    
    let roster_result = result.context("Failed to read config file");
    
    match roster_result {
        Err(RosterError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected RosterError::Unknown"),
    }
}

#[test]
fn test_terminal_error_message() {
    let error = roster_error!(TerminalError, "Could not enter alternate screen: {}", "not a tty");
    assert_eq!(error.to_string(), "Terminal error: Could not enter alternate screen: not a tty");
}

#[test]
fn test_roster_error_macro() {
    let error = roster_error!(ApiError, "Request failed");
    match error {
        RosterError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected RosterError::ApiError"),
    }
    
    let error = roster_error!(InvalidInput, "Unknown sort key: {}", "priority");
    match error {
        RosterError::InvalidInput(msg) => assert_eq!(msg, "Unknown sort key: priority"),
        _ => panic!("Expected RosterError::InvalidInput"),
    }
}

#[test]
fn test_json_errors_convert() {
    fn parse(payload: &str) -> crate::error::RosterResult<Vec<u64>> {
        Ok(serde_json::from_str(payload)?)
    }

    let err = parse("not json").unwrap_err();
    assert!(matches!(err, RosterError::JsonError(_)));
    assert!(err.to_string().starts_with("JSON error"));
}
