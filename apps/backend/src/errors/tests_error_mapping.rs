//! Tests for the DomainError -> AppError mapping: every domain failure must
//! surface with a stable code and the HTTP status the API documents.

use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

fn mapped(err: DomainError) -> AppError {
    AppError::from(err)
}

#[test]
fn validation_kinds_map_to_400_with_specific_codes() {
    let cases = [
        (ValidationKind::InvalidGameSet, ErrorCode::InvalidGameSet),
        (ValidationKind::UnknownCategory, ErrorCode::UnknownCategory),
        (ValidationKind::TooFewItems, ErrorCode::TemplateTooFewItems),
        (ValidationKind::MissingRating, ErrorCode::TemplateMissingRating),
        (
            ValidationKind::BadTargetCount,
            ErrorCode::TemplateBadTargetCount,
        ),
        (ValidationKind::MissingSecret, ErrorCode::TemplateMissingSecret),
        (ValidationKind::MissingImage, ErrorCode::TemplateMissingImage),
        (
            ValidationKind::RatingNotAllowed,
            ErrorCode::TemplateRatingNotAllowed,
        ),
    ];
    for (kind, code) in cases {
        let app = mapped(DomainError::validation(kind, "detail"));
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.code(), code);
    }
}

#[test]
fn not_found_kinds_map_to_404() {
    let cases = [
        (NotFoundKind::Round, ErrorCode::RoundNotFound),
        (NotFoundKind::Item, ErrorCode::ItemNotFound),
        (NotFoundKind::Template, ErrorCode::TemplateNotFound),
        (NotFoundKind::Other("X".into()), ErrorCode::NotFound),
    ];
    for (kind, code) in cases {
        let app = mapped(DomainError::not_found(kind, "detail"));
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.code(), code);
    }
}

#[test]
fn conflicts_map_to_409() {
    let finished = mapped(DomainError::conflict(
        ConflictKind::RoundFinished,
        "Round already finished",
    ));
    assert_eq!(finished.status(), StatusCode::CONFLICT);
    assert_eq!(finished.code(), ErrorCode::RoundFinished);

    let eliminated = mapped(DomainError::conflict(
        ConflictKind::ItemEliminated,
        "Item already eliminated",
    ));
    assert_eq!(eliminated.status(), StatusCode::CONFLICT);
    assert_eq!(eliminated.code(), ErrorCode::ItemAlreadyEliminated);
}

#[test]
fn invariant_violations_are_internal_errors() {
    let app = mapped(DomainError::invariant("failed to resolve target item id"));
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.code(), ErrorCode::InvariantViolation);
}

#[test]
fn infra_failures_stay_500_and_keep_the_db_unavailable_code() {
    let unavailable = mapped(DomainError::infra(
        InfraErrorKind::DbUnavailable,
        "pool exhausted",
    ));
    assert_eq!(unavailable.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(unavailable.code(), ErrorCode::DbUnavailable);

    let other = mapped(DomainError::infra(
        InfraErrorKind::Other("Db".into()),
        "boom",
    ));
    assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(other.code(), ErrorCode::DbError);
}

#[test]
fn error_codes_are_unique_strings() {
    let codes = [
        ErrorCode::InvalidGameSet,
        ErrorCode::UnknownCategory,
        ErrorCode::TemplateTooFewItems,
        ErrorCode::TemplateMissingRating,
        ErrorCode::TemplateBadTargetCount,
        ErrorCode::TemplateMissingSecret,
        ErrorCode::TemplateMissingImage,
        ErrorCode::TemplateRatingNotAllowed,
        ErrorCode::ValidationError,
        ErrorCode::BadRequest,
        ErrorCode::RoundNotFound,
        ErrorCode::ItemNotFound,
        ErrorCode::TemplateNotFound,
        ErrorCode::NotFound,
        ErrorCode::RoundFinished,
        ErrorCode::ItemAlreadyEliminated,
        ErrorCode::Conflict,
        ErrorCode::DbError,
        ErrorCode::DbUnavailable,
        ErrorCode::InvariantViolation,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];
    let mut strings: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
    strings.sort_unstable();
    let before = strings.len();
    strings.dedup();
    assert_eq!(before, strings.len());
}
