//! Request session carrying the authenticated owner.

use thiserror::Error;

/// The caller has no authenticated owner.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Not authenticated")]
pub struct Unauthenticated;

/// Who is making the current call. Every owned record is scoped by the
/// owner ID held here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    owner_id: Option<String>,
}

impl Session {
    /// A session with nobody logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for a logged-in owner.
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
        }
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.owner_id.is_some()
    }

    /// The owner ID, or [`Unauthenticated`].
    pub fn require_owner(&self) -> Result<&str, Unauthenticated> {
        self.owner_id().ok_or(Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_requires_owner() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.require_owner(), Err(Unauthenticated));
    }

    #[test]
    fn test_owner_session() {
        let session = Session::for_owner("user-1");
        assert_eq!(session.require_owner(), Ok("user-1"));
    }
}
