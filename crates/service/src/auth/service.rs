use std::sync::Arc;

use configs::SessionBinding;
use models::User;
use tracing::{debug, info, instrument, warn};

use super::domain::{LoginInput, LoginSession, RegisterInput};
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Auth service configuration
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub session_binding: SessionBinding,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a username with its password and create the matching user.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, domain::RegisterInput};
    /// use service::MemoryStore;
    /// use models::Role;
    /// let svc = AuthService::new(MemoryStore::new(), AuthConfig::default());
    /// let input = RegisterInput { username: "alice".into(), password: "pw".into(), role: Role::ServiceConsumer };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegisterInput) -> Result<User, AuthError> {
        let user = self.repo.register(&input.username, &input.password, input.role).await?;
        info!(user_id = user.id, role = %user.role, "user_registered");
        Ok(user)
    }

    /// Check credentials and open a session.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, domain::{RegisterInput, LoginInput}};
    /// use service::MemoryStore;
    /// use models::Role;
    /// let svc = AuthService::new(MemoryStore::new(), AuthConfig::default());
    /// let _ = tokio_test::block_on(svc.register(RegisterInput { username: "u".into(), password: "pw".into(), role: Role::ServiceProvider }));
    /// let login = tokio_test::block_on(svc.login(LoginInput { username: "u".into(), password: "pw".into() })).unwrap();
    /// assert_eq!(login.session.session_id, "1");
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<LoginSession, AuthError> {
        let cred = match self.repo.find_credential(&input.username).await? {
            Some(c) if c.matches(&input.password) => c,
            Some(_) => {
                warn!("login_rejected: password mismatch");
                return Err(AuthError::Unauthorized);
            }
            None => {
                warn!("login_rejected: unknown username");
                return Err(AuthError::Unauthorized);
            }
        };

        let bound = match self.cfg.session_binding {
            SessionBinding::AuthenticatedUser => self.repo.find_user(cred.user_id).await?,
            SessionBinding::LastRegistered => self.repo.last_registered_user().await?,
        };
        let user = bound.ok_or_else(|| {
            AuthError::Repository(format!("no user to bind session for {}", input.username))
        })?;
        if user.id != cred.user_id {
            debug!(credential_user_id = cred.user_id, bound_user_id = user.id, "session bound to last registered user");
        }

        let session = self.repo.create_session(user.id).await?;
        info!(session_id = %session.session_id, user_id = user.id, "login_succeeded");
        Ok(LoginSession { session, username: input.username, user })
    }

    /// Resolve a session ID to the user it is bound to.
    pub async fn resolve_session(&self, session_id: &str) -> Result<User, AuthError> {
        let session = self.repo.find_session(session_id).await?.ok_or(AuthError::InvalidSession)?;
        self.repo.find_user(session.user_id).await?.ok_or(AuthError::InvalidSession)
    }
}
