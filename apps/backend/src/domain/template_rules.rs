//! Template item payloads and per-kind structural validation.
//!
//! Validation runs twice by design: when a template is saved, and again when
//! it is instantiated into a round, so a template edited or corrupted after
//! saving can never produce an unplayable round.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::kind::RoundKind;
use crate::errors::domain::{DomainError, ValidationKind};

/// One authored template item as submitted or stored. Which fields matter
/// depends on the template kind; `validate` is the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItemDraft {
    pub title: String,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub secret_text: Option<String>,
    #[serde(default)]
    pub is_target: bool,
    #[serde(default)]
    pub image_data: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(s) => s.trim().is_empty(),
        None => true,
    }
}

/// Enforce the structural invariants of a template for its kind.
///
/// The match over `RoundKind` is exhaustive on purpose: adding a kind must
/// force a decision here.
pub fn validate(kind: RoundKind, items: &[TemplateItemDraft]) -> Result<(), DomainError> {
    if items.len() < 2 {
        return Err(DomainError::validation(
            ValidationKind::TooFewItems,
            "Template must have at least 2 items",
        ));
    }

    match kind {
        RoundKind::Rated => {
            if items.iter().any(|it| it.rating.is_none()) {
                return Err(DomainError::validation(
                    ValidationKind::MissingRating,
                    "Rated round: each item must have a numeric rating",
                ));
            }
            Ok(())
        }
        RoundKind::Manual => validate_manual_like(items, false),
        RoundKind::Carousel => validate_manual_like(items, true),
    }
}

fn validate_manual_like(
    items: &[TemplateItemDraft],
    require_images: bool,
) -> Result<(), DomainError> {
    let targets = items.iter().filter(|it| it.is_target).count();
    if targets != 1 {
        return Err(DomainError::validation(
            ValidationKind::BadTargetCount,
            format!("Exactly 1 item must be marked as target, found {targets}"),
        ));
    }
    if items.iter().any(|it| is_blank(&it.secret_text)) {
        return Err(DomainError::validation(
            ValidationKind::MissingSecret,
            "Each item must have hidden info (secret_text)",
        ));
    }
    if require_images {
        if items.iter().any(|it| is_blank(&it.image_data)) {
            return Err(DomainError::validation(
                ValidationKind::MissingImage,
                "Carousel round: each item must have image_data",
            ));
        }
        if items.iter().any(|it| it.rating.is_some()) {
            return Err(DomainError::validation(
                ValidationKind::RatingNotAllowed,
                "Carousel round: rating must be null",
            ));
        }
    }
    Ok(())
}
