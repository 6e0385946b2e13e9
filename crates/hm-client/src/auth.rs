/// Source of the authenticated user's identity
///
/// The identity provider itself lives outside this crate; the profile store
/// only needs the current user id to key the profile document.
pub trait AuthSession: Send + Sync {
    /// Id of the signed-in user, `None` when signed out
    fn current_user_id(&self) -> Option<String>;
}

/// Session with a fixed identity
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    uid: Option<String>,
}

impl StaticSession {
    /// Session of the given user; an empty id counts as signed out
    pub fn signed_in(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
        }
    }

    /// Session with no user
    pub fn signed_out() -> Self {
        Self::default()
    }
}

impl AuthSession for StaticSession {
    fn current_user_id(&self) -> Option<String> {
        self.uid.clone().filter(|uid| !uid.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_session() {
        assert_eq!(
            StaticSession::signed_in("u1").current_user_id().as_deref(),
            Some("u1")
        );
        assert!(StaticSession::signed_out().current_user_id().is_none());
        assert!(StaticSession::signed_in("").current_user_id().is_none());
    }
}
