use crate::auth::application::domain::entities::UserId;

/// Answers "who is signed in right now" for a builder session.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// Identity fixed at construction, e.g. from a request's bearer token.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSession {
    user: Option<UserId>,
}

impl FixedSession {
    pub fn signed_in(user: UserId) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for FixedSession {
    fn current_user(&self) -> Option<UserId> {
        self.user
    }
}
