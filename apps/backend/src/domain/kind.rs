use serde::{Deserialize, Serialize};

/// Round/template kind. Determines which item fields are required, how the
/// target is chosen, and what the reveal policy shows during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    Rated,
    Manual,
    Carousel,
}

impl RoundKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoundKind::Rated => "rated",
            RoundKind::Manual => "manual",
            RoundKind::Carousel => "carousel",
        }
    }

    /// Manual and carousel templates share target flagging and hidden text.
    pub fn is_manual_like(self) -> bool {
        matches!(self, RoundKind::Manual | RoundKind::Carousel)
    }
}

/// Round lifecycle. `Finished` is terminal; no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Active,
    Finished,
}

impl RoundStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoundStatus::Active => "active",
            RoundStatus::Finished => "finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&RoundKind::Rated).unwrap(), "\"rated\"");
        assert_eq!(
            serde_json::to_string(&RoundKind::Carousel).unwrap(),
            "\"carousel\""
        );
        assert_eq!(
            serde_json::to_string(&RoundStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn unknown_kind_is_rejected_at_the_serde_boundary() {
        assert!(serde_json::from_str::<RoundKind>("\"ranked\"").is_err());
    }
}
