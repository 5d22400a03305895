//! Login, session restore, and logout.
//!
//! There is no account behind a profile: logging in just validates the
//! two fields, mints a suffixed participant id, and persists the result
//! locally. The same person on two devices is two participants.

use milkar_shared::Participant;
use milkar_sync::DocumentStore;
use tracing::info;

use crate::state::App;
use crate::Result;

impl<S: DocumentStore> App<S> {
    /// Validate the entered name and payment handle, mint a participant
    /// id, and persist the profile for future restores.
    ///
    /// If a profile is already persisted it is returned as-is, inputs
    /// ignored: a stray second login must not mint a new suffix and
    /// orphan the claims made under the old id. Changing name or handle
    /// goes through [`App::logout`] first.
    pub fn login(&self, display_name: &str, payment_handle: &str) -> Result<Participant> {
        let participant = Participant::new(display_name, payment_handle)?;

        let local = self.local()?;
        if let Some(existing) = local.load_profile()? {
            info!(participant_id = %existing.participant_id, "profile already present, reusing");
            return Ok(existing);
        }
        local.save_profile(&participant)?;

        info!(participant_id = %participant.participant_id, "logged in");
        Ok(participant)
    }

    /// Reuse the profile persisted by an earlier login, if one exists.
    /// Called at startup so returning users skip the login screen.
    pub fn restore_session(&self) -> Result<Option<Participant>> {
        Ok(self.local()?.load_profile()?)
    }

    /// Forget the saved profile. Irreversible for the local session: the
    /// next login mints a fresh suffix, so callers confirm with the user
    /// first. Unlocked rooms deliberately survive.
    pub fn logout(&self) -> Result<()> {
        self.local()?.clear_profile()?;
        info!("logged out");
        Ok(())
    }
}
