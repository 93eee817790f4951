//! services/clinic/src/session.rs
//!
//! The signed-in vet, kept in the session storage under the same keys the
//! dashboard pages read. The credential check is a placeholder: any
//! non-empty password signs a known vet in.

use petopia_core::ports::{PortError, StorageService};

use crate::directory;

const LOGGED_IN_KEY: &str = "loggedInVet";
const VET_NAME_KEY: &str = "vetName";

/// The provider identity a dashboard scopes everything to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetIdentity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown vet id '{0}'")]
    UnknownVet(String),
    #[error("Please enter your password")]
    MissingPassword,
    #[error("You must be logged in to view the dashboard")]
    NotLoggedIn,
    #[error(transparent)]
    Port(#[from] PortError),
}

/// Signs a vet in. Placeholder credential check only: the id must exist in
/// the directory and the password must be non-empty.
pub fn login(
    session: &dyn StorageService,
    vet_id: &str,
    password: &str,
) -> Result<VetIdentity, SessionError> {
    if password.trim().is_empty() {
        return Err(SessionError::MissingPassword);
    }
    let profile =
        directory::find(vet_id).ok_or_else(|| SessionError::UnknownVet(vet_id.to_string()))?;
    session.write(LOGGED_IN_KEY, profile.id)?;
    session.write(VET_NAME_KEY, profile.name)?;
    tracing::info!(vet = profile.id, "vet signed in");
    Ok(VetIdentity {
        id: profile.id.to_string(),
        name: profile.name.to_string(),
    })
}

/// The currently signed-in vet, or `NotLoggedIn` for the login redirect.
pub fn current_vet(session: &dyn StorageService) -> Result<VetIdentity, SessionError> {
    let id = session.read(LOGGED_IN_KEY)?.ok_or(SessionError::NotLoggedIn)?;
    let name = match session.read(VET_NAME_KEY)? {
        Some(name) => name,
        // Older sessions only stored the id.
        None => directory::find(&id)
            .map(|p| p.name.to_string())
            .unwrap_or_default(),
    };
    Ok(VetIdentity { id, name })
}

pub fn logout(session: &dyn StorageService) -> Result<(), SessionError> {
    session.remove(LOGGED_IN_KEY)?;
    session.remove(VET_NAME_KEY)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;

    #[test]
    fn login_stores_the_identity_for_later_reads() {
        let session = MemoryStorage::new();
        let vet = login(&session, "omar", "hunter2").unwrap();
        assert_eq!(vet.name, "Dr. Omar Awwad");
        assert_eq!(current_vet(&session).unwrap(), vet);
    }

    #[test]
    fn login_rejects_unknown_ids_and_blank_passwords() {
        let session = MemoryStorage::new();
        assert!(matches!(
            login(&session, "omar", "  "),
            Err(SessionError::MissingPassword)
        ));
        assert!(matches!(
            login(&session, "nobody", "pw"),
            Err(SessionError::UnknownVet(_))
        ));
        assert!(matches!(
            current_vet(&session),
            Err(SessionError::NotLoggedIn)
        ));
    }

    #[test]
    fn logout_clears_the_session() {
        let session = MemoryStorage::new();
        login(&session, "lina", "pw").unwrap();
        logout(&session).unwrap();
        assert!(matches!(
            current_vet(&session),
            Err(SessionError::NotLoggedIn)
        ));
    }
}
