//! Game-set extractor: the namespace token every scoped request carries.
//!
//! The token doubles as the authorization boundary — a wrong token makes
//! scoped entities look exactly like missing ones, so no handler needs to
//! special-case it.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;

use crate::error::AppError;
use crate::services::game_sets::validate_name;

/// Request header carrying the game-set token.
pub const GAME_SET_HEADER: &str = "X-Game-Set";

/// Validated game-set token (exactly 6 characters) from the request header.
#[derive(Debug, Clone, Serialize)]
pub struct GameSet(pub String);

impl GameSet {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for GameSet {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<GameSet, AppError> {
    let raw = req
        .headers()
        .get(GAME_SET_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::invalid(
                crate::errors::ErrorCode::InvalidGameSet,
                format!("{GAME_SET_HEADER} header is required"),
            )
        })?;

    let name = validate_name(raw)?;
    Ok(GameSet(name))
}
