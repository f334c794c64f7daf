use crate::domain::model::{LoginRequest, Profile, RegisterRequest};
use crate::domain::ports::AuthGateway;
use crate::domain::session::Session;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

const API_KEY_NAME: &str = "holidaze";

pub struct AuthService<G: AuthGateway> {
    gateway: G,
}

impl<G: AuthGateway> AuthService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Logs in and creates an API key, returning a fully authenticated session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let user = self.gateway.login(&request).await?;
        tracing::info!("🔑 Logged in as {}", user.name);

        let api_key = self
            .gateway
            .create_api_key(&user.access_token, API_KEY_NAME)
            .await?;
        tracing::debug!("API key '{}' created ({})", api_key.name, api_key.status);

        let mut session = Session::new();
        session.login(user);
        session.set_api_key(api_key.key);
        Ok(session)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Profile> {
        request.validate()?;
        let profile = self.gateway.register(request).await?;
        tracing::info!("✅ Registered {}", profile.name);
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ApiKey, AuthenticatedUser};
    use crate::utils::error::HolidazeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct MockGateway {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AuthGateway for MockGateway {
        async fn login(&self, request: &LoginRequest) -> Result<AuthenticatedUser> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AuthenticatedUser {
                name: "ola".to_string(),
                email: request.email.clone(),
                avatar: None,
                banner: None,
                venue_manager: true,
                access_token: "access".to_string(),
            })
        }

        async fn register(&self, request: &RegisterRequest) -> Result<Profile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Profile {
                name: request.name.clone(),
                email: request.email.clone(),
                bio: None,
                avatar: None,
                banner: None,
                venue_manager: request.venue_manager,
                bookings: None,
                venues: None,
            })
        }

        async fn create_api_key(&self, access_token: &str, name: &str) -> Result<ApiKey> {
            assert_eq!(access_token, "access");
            Ok(ApiKey {
                name: name.to_string(),
                status: "ACTIVE".to_string(),
                key: "generated-key".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_login_builds_authenticated_session() {
        let service = AuthService::new(MockGateway::default());
        let session = service.login("ola@stud.noroff.no", "secret").await.unwrap();

        let creds = session.credentials().unwrap();
        assert_eq!(creds.access_token, "access");
        assert_eq!(creds.api_key, "generated-key");
        assert!(session.is_venue_manager());
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_any_request() {
        let gateway = MockGateway::default();
        let service = AuthService::new(gateway.clone());

        let result = service.login("not-an-email", "secret").await;
        assert!(matches!(result, Err(HolidazeError::ValidationError { .. })));

        let register = RegisterRequest {
            name: "ola".to_string(),
            email: "ola@example.com".to_string(),
            password: "password1".to_string(),
            confirm_password: "password1".to_string(),
            avatar: None,
            venue_manager: false,
        };
        assert!(service.register(&register).await.is_err());
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }
}
