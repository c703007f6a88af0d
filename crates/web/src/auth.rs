//! Session lookup for the pages.
//!
//! Pages never authenticate anyone. They ask an [`AuthProvider`] whether a
//! session is still being resolved and who, if anyone, is signed in.

/// A signed-in user as the session reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}

pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    /// True while the session is still being resolved.
    fn is_loading(&self) -> bool;

    /// Management controls (add, the row menu) are shown only when the
    /// session has resolved to a signed-in user.
    fn can_manage(&self) -> bool {
        !self.is_loading() && self.current_user().is_some()
    }
}

/// A session that never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticAuth {
    Loading,
    Anonymous,
    SignedIn(User),
}

impl StaticAuth {
    pub fn signed_in(id: impl Into<String>, name: impl Into<String>) -> Self {
        StaticAuth::SignedIn(User {
            id: id.into(),
            name: name.into(),
        })
    }
}

impl AuthProvider for StaticAuth {
    fn current_user(&self) -> Option<User> {
        match self {
            StaticAuth::SignedIn(user) => Some(user.clone()),
            StaticAuth::Loading | StaticAuth::Anonymous => None,
        }
    }

    fn is_loading(&self) -> bool {
        matches!(self, StaticAuth::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_resolved_user_can_manage() {
        assert!(!StaticAuth::Loading.can_manage());
        assert!(!StaticAuth::Anonymous.can_manage());
        assert!(StaticAuth::signed_in("u1", "Ada").can_manage());
    }
}
