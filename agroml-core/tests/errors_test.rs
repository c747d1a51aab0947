use agroml_core::errors::{
    AgromlError, FieldViolation, GatewayError, HistoryError, StorageError, ValidationError,
};

#[test]
fn missing_fields_message_lists_every_field() {
    let err = ValidationError::MissingFields {
        fields: vec!["N".to_string(), "ph".to_string()],
    };
    assert_eq!(err.to_string(), "missing required fields: N, ph");
}

#[test]
fn out_of_range_message_lists_every_violation() {
    let err = ValidationError::OutOfRange {
        violations: vec![
            FieldViolation {
                field: "ph".to_string(),
                value: 14.0,
                min: 3.0,
                max: 10.0,
            },
            FieldViolation {
                field: "humidity".to_string(),
                value: 120.0,
                min: 0.0,
                max: 100.0,
            },
        ],
    };
    let msg = err.to_string();
    assert!(msg.contains("ph value 14 out of valid range [3, 10]"));
    assert!(msg.contains("humidity value 120 out of valid range [0, 100]"));
}

#[test]
fn http_status_mapping_distinguishes_all_kinds() {
    let validation: AgromlError = ValidationError::EmptyImage.into();
    assert_eq!(validation.http_status(), 400);

    let unavailable: AgromlError = GatewayError::ServiceUnavailable {
        reason: "connection refused".to_string(),
    }
    .into();
    assert_eq!(unavailable.http_status(), 503);

    let rejected: AgromlError = GatewayError::InvalidUpstreamInput {
        reason: "HTTP 400".to_string(),
    }
    .into();
    assert_eq!(rejected.http_status(), 400);

    let internal: AgromlError = GatewayError::UpstreamInternalError { status: 500 }.into();
    assert_eq!(internal.http_status(), 503);

    let other: AgromlError = GatewayError::UpstreamError {
        reason: "protocol".to_string(),
    }
    .into();
    assert_eq!(other.http_status(), 502);

    let storage: AgromlError = StorageError::Sqlite {
        message: "disk I/O error".to_string(),
    }
    .into();
    assert_eq!(storage.http_status(), 500);

    let forbidden: AgromlError = HistoryError::RoleNotPermitted {
        role: "admin".to_string(),
    }
    .into();
    assert_eq!(forbidden.http_status(), 403);
}

#[test]
fn upstream_rejection_message_differs_from_local_validation() {
    let local = ValidationError::MissingFields {
        fields: vec!["N".to_string()],
    }
    .to_string();
    let upstream = GatewayError::InvalidUpstreamInput {
        reason: "HTTP 400".to_string(),
    }
    .to_string();
    assert_ne!(local, upstream);
    assert!(upstream.contains("prediction service"));
}
