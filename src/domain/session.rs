use crate::domain::model::AuthenticatedUser;
use crate::utils::error::{HolidazeError, Result};

/// Logged-in state for one process. Passed explicitly to every service call
/// that needs credentials; `logout` drops everything.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
    api_key: Option<String>,
}

/// Borrowed view of what authenticated requests need.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub access_token: &'a str,
    pub api_key: &'a str,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated(user: AuthenticatedUser, api_key: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            api_key: Some(api_key.into()),
        }
    }

    pub fn login(&mut self, user: AuthenticatedUser) {
        tracing::debug!("Session opened for {}", user.name);
        self.user = Some(user);
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::debug!("Session closed for {}", user.name);
        }
        self.api_key = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    pub fn require_user(&self) -> Result<&AuthenticatedUser> {
        self.user.as_ref().ok_or(HolidazeError::NotAuthenticated)
    }

    pub fn credentials(&self) -> Result<Credentials<'_>> {
        let user = self.require_user()?;
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(HolidazeError::NotAuthenticated)?;
        Ok(Credentials {
            access_token: &user.access_token,
            api_key,
        })
    }

    pub fn set_venue_manager(&mut self, enabled: bool) {
        if let Some(user) = self.user.as_mut() {
            user.venue_manager = enabled;
        }
    }

    pub fn is_venue_manager(&self) -> bool {
        self.user.as_ref().map(|u| u.venue_manager).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            name: "kari".to_string(),
            email: "kari@stud.noroff.no".to_string(),
            avatar: None,
            banner: None,
            venue_manager: false,
            access_token: "token-123".to_string(),
        }
    }

    #[test]
    fn test_credentials_require_user_and_key() {
        let mut session = Session::new();
        assert!(matches!(
            session.credentials(),
            Err(HolidazeError::NotAuthenticated)
        ));

        session.login(user());
        assert!(session.credentials().is_err());

        session.set_api_key("key-abc");
        let creds = session.credentials().unwrap();
        assert_eq!(creds.access_token, "token-123");
        assert_eq!(creds.api_key, "key-abc");
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::authenticated(user(), "key-abc");
        session.set_venue_manager(true);
        assert!(session.is_venue_manager());

        session.logout();

        assert!(!session.is_logged_in());
        assert!(!session.is_venue_manager());
        assert!(session.credentials().is_err());
    }
}
