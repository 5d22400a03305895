use serde::{Deserialize, Serialize};

use crate::error::MilkarError;
use crate::types::ParticipantId;

/// A locally stored participant profile. No account, no password: the
/// display name plus payment handle is the whole identity, disambiguated
/// by a random 4-digit suffix minted at first login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Name shown to other members of a room.
    pub display_name: String,
    /// Payment handle of the form `name@provider`. Never verified against
    /// any payment system; it only feeds the payment URI.
    pub payment_handle: String,
    /// `display_name#NNNN`, stable for the lifetime of the local session.
    pub participant_id: ParticipantId,
}

impl Participant {
    /// Build a fresh profile from login input.
    ///
    /// Fails when the display name is blank or the payment handle has no
    /// `@` separator. Both fields are trimmed before validation.
    pub fn new(display_name: &str, payment_handle: &str) -> Result<Self, MilkarError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(MilkarError::Validation(
                "display name must not be empty".into(),
            ));
        }

        let payment_handle = payment_handle.trim();
        if !payment_handle.contains('@') {
            return Err(MilkarError::Validation(format!(
                "payment handle '{payment_handle}' is missing the '@' separator"
            )));
        }

        Ok(Self {
            display_name: display_name.to_string(),
            payment_handle: payment_handle.to_string(),
            participant_id: ParticipantId::mint(display_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_happy_path() {
        let p = Participant::new("Asha", "asha@upi").expect("valid profile");
        assert_eq!(p.display_name, "Asha");
        assert_eq!(p.payment_handle, "asha@upi");
        assert!(p.participant_id.as_str().starts_with("Asha#"));
    }

    #[test]
    fn test_login_trims_input() {
        let p = Participant::new("  Asha  ", " asha@upi ").expect("valid profile");
        assert_eq!(p.display_name, "Asha");
        assert_eq!(p.payment_handle, "asha@upi");
    }

    #[test]
    fn test_login_rejects_blank_name() {
        assert!(matches!(
            Participant::new("   ", "asha@upi"),
            Err(MilkarError::Validation(_))
        ));
    }

    #[test]
    fn test_login_rejects_handle_without_separator() {
        assert!(matches!(
            Participant::new("Asha", "asha.upi"),
            Err(MilkarError::Validation(_))
        ));
    }
}
