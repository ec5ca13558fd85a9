use serde::{Serialize, Serializer};

use crate::errors::domain::DomainError;

/// One of the two competing teams. Serialized as 1 or 2 on the wire and
/// stored as SMALLINT 1/2 at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    One,
    Two,
}

impl Team {
    /// The involution 1↔2: whose turn comes next, and who wins when the
    /// other team loses.
    pub fn other(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub fn as_i16(self) -> i16 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

impl TryFrom<i16> for Team {
    type Error = DomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            other => Err(DomainError::invariant(format!(
                "stored team must be 1 or 2, got {other}"
            ))),
        }
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i16(self.as_i16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_an_involution() {
        assert_eq!(Team::One.other(), Team::Two);
        assert_eq!(Team::Two.other(), Team::One);
        assert_eq!(Team::One.other().other(), Team::One);
    }

    #[test]
    fn stored_values_round_trip() {
        assert_eq!(Team::try_from(1).unwrap(), Team::One);
        assert_eq!(Team::try_from(2).unwrap(), Team::Two);
        assert_eq!(Team::One.as_i16(), 1);
        assert_eq!(Team::Two.as_i16(), 2);
    }

    #[test]
    fn corrupt_stored_value_is_an_invariant_error() {
        assert!(Team::try_from(0).is_err());
        assert!(Team::try_from(3).is_err());
    }
}
