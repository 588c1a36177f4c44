use serde::{Deserialize, Serialize};

/// E-mail suffix the mock sign-in treats as staff.
pub const STAFF_EMAIL_SUFFIX: &str = "@storyweave.org";

/// The person using the app right now. Held only in process memory for
/// the lifetime of the page session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    /// Display gating only: controls which navigation entries render.
    /// Real capabilities are the server's to decide.
    pub is_admin: bool,
}

/// At most one signed-in user per page session. The login and logout
/// handlers are the only writers; everything else reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    /// Replaces any current user.
    pub fn login(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|user| user.is_admin).unwrap_or(false)
    }
}

/// Stand-in for a server-granted capability: there is no real sign-in,
/// so the login page flags staff addresses for the admin navigation.
/// Never treat this as authorization.
pub fn mock_admin_grant(email: &str) -> bool {
    email.trim().to_ascii_lowercase().ends_with(STAFF_EMAIL_SUFFIX)
}
