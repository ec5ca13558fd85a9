//! DTOs for items_sea adapter.

use rust_decimal::Decimal;
use uuid::Uuid;

/// DTO for inserting a round item. Items start non-eliminated.
#[derive(Debug, Clone)]
pub struct ItemCreate {
    pub round_id: Uuid,
    pub title: String,
    pub rating: Option<Decimal>,
    pub secret_text: Option<String>,
    pub image_data: Option<String>,
}
