//! Error codes for the Gambit backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Gambit backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Game-Set header/name missing or not exactly 6 characters
    InvalidGameSet,
    /// Unknown built-in dataset category
    UnknownCategory,
    /// Template has fewer than 2 items
    TemplateTooFewItems,
    /// Rated template item without a rating
    TemplateMissingRating,
    /// Manual/carousel template without exactly one target
    TemplateBadTargetCount,
    /// Manual/carousel template item without hidden text
    TemplateMissingSecret,
    /// Carousel template item without image data
    TemplateMissingImage,
    /// Carousel template item carrying a rating
    TemplateRatingNotAllowed,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Round not found (in this game set)
    RoundNotFound,
    /// Item not found (in this round)
    ItemNotFound,
    /// Template not found (in this game set)
    TemplateNotFound,
    /// General not found error
    NotFound,

    // State Conflicts
    /// Round already finished
    RoundFinished,
    /// Item already eliminated
    ItemAlreadyEliminated,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal invariant violation (bug or corrupted data)
    InvariantViolation,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::InvalidGameSet => "INVALID_GAME_SET",
            Self::UnknownCategory => "UNKNOWN_CATEGORY",
            Self::TemplateTooFewItems => "TEMPLATE_TOO_FEW_ITEMS",
            Self::TemplateMissingRating => "TEMPLATE_MISSING_RATING",
            Self::TemplateBadTargetCount => "TEMPLATE_BAD_TARGET_COUNT",
            Self::TemplateMissingSecret => "TEMPLATE_MISSING_SECRET",
            Self::TemplateMissingImage => "TEMPLATE_MISSING_IMAGE",
            Self::TemplateRatingNotAllowed => "TEMPLATE_RATING_NOT_ALLOWED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // State Conflicts
            Self::RoundFinished => "ROUND_FINISHED",
            Self::ItemAlreadyEliminated => "ITEM_ALREADY_ELIMINATED",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
