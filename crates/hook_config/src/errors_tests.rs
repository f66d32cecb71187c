use super::*;

#[test]
fn test_file_not_found_display() {
    let error = HookConfigError::FileNotFound {
        path: "webhook.yaml".to_string(),
        reason: "No such file or directory (os error 2)".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Hooks file not found: webhook.yaml: No such file or directory (os error 2)"
    );
}

#[test]
fn test_parse_error_display_includes_reason() {
    let error = HookConfigError::ParseError {
        path: "webhook.yaml".to_string(),
        reason: "did not find expected key".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Invalid YAML in webhook.yaml: did not find expected key"
    );
}

#[test]
fn test_missing_field_display() {
    let error = HookConfigError::MissingField {
        hook_index: 2,
        field: "execute-command".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Hook #2 failed validation: missing required field 'execute-command'"
    );
}

#[test]
fn test_missing_argument_field_display() {
    let error = HookConfigError::MissingArgumentField {
        hook_index: 1,
        argument_index: 3,
        field: "source".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Hook #1 failed validation: argument #3 is missing 'source'"
    );
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HookConfigError>();
}
