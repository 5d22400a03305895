use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ROOM_CODE_DIGITS;
use crate::error::MilkarError;

// Event document identifier, assigned by the store on creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 6-digit human-enterable join code. Knowing the code IS the access
/// grant: anyone who learns it can view and contribute to the event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RoomCode(String);

impl RoomCode {
    /// Draw a fresh random code. Uniqueness across live events is
    /// probabilistic, not enforced (one in 900k per pair).
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        Self(n.to_string())
    }

    /// Parse user input: exactly six ASCII digits, surrounding
    /// whitespace ignored.
    pub fn parse(input: &str) -> Result<Self, MilkarError> {
        let input = input.trim();
        if input.len() != ROOM_CODE_DIGITS || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MilkarError::Validation(format!(
                "room code must be {ROOM_CODE_DIGITS} digits"
            )));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Participant identity = display name + '#' + 4-digit suffix.
// Minted locally at first login, never reused across devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    /// Mint a new id for a display name, with a random suffix to keep
    /// same-named participants apart.
    pub fn mint(display_name: &str) -> Self {
        let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
        Self(format!("{display_name}#{suffix:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
