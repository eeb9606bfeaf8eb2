// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fitness_tracker::error::AppError;

#[test]
fn test_user_message_passes_detail_through() {
    let err = AppError::Login("No active account found with the given credentials".to_string());
    assert_eq!(
        err.user_message(),
        "No active account found with the given credentials"
    );

    let err = AppError::CreateActivity(AppError::CREATE_FAILED.to_string());
    assert_eq!(err.user_message(), "Failed to create activity");
}

#[test]
fn test_fallback_messages_match_ui_copy() {
    assert_eq!(AppError::REGISTRATION_FAILED, "Registration failed");
    assert_eq!(AppError::LOGIN_FAILED, "Login failed");
    assert_eq!(AppError::FETCH_FAILED, "Failed to fetch activities");
    assert_eq!(AppError::CREATE_FAILED, "Failed to create activity");
    assert_eq!(AppError::UPDATE_FAILED, "Failed to update activity");
    assert_eq!(AppError::DELETE_FAILED, "Failed to delete activity");
}

#[test]
fn test_is_auth_error_matches() {
    assert!(AppError::Login("nope".to_string()).is_auth_error());
    assert!(AppError::Registration("nope".to_string()).is_auth_error());
    assert!(!AppError::DeleteActivity("nope".to_string()).is_auth_error());
    assert!(!AppError::Storage("disk".to_string()).is_auth_error());
}

#[test]
fn test_storage_errors_are_prefixed() {
    let err = AppError::Storage("disk full".to_string());
    assert_eq!(err.to_string(), "Token storage error: disk full");
}
