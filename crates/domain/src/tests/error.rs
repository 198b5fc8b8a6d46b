// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_invalid_entity_id_message_names_the_field() {
    let err = DomainError::InvalidEntityId {
        field: "store_id",
        value: -1,
    };

    let message = err.to_string();
    assert!(message.contains("store_id"));
    assert!(message.contains("-1"));
}

#[test]
fn test_date_parse_error_message_includes_input() {
    let err = DomainError::DateParseError {
        date_string: String::from("2024-99-99"),
        error: String::from("invalid month"),
    };

    assert!(err.to_string().contains("2024-99-99"));
}

#[test]
fn test_errors_implement_std_error() {
    fn assert_error<E: std::error::Error>(_err: &E) {}

    assert_error(&DomainError::InvalidReason(String::from("blank")));
}
