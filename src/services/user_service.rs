use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{password, GoogleTokenVerifier},
    errors::{AppError, AppResult},
    models::domain::user::User,
    models::dto::request::{GoogleAuthRequest, LoginRequest, SignupRequest},
    repositories::UserRepository,
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    google: GoogleTokenVerifier,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, google: GoogleTokenVerifier) -> Self {
        Self { users, google }
    }

    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::validation("email is already registered"));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = User::new_local(&request.name, &request.email, &password_hash);

        let user = self.users.create(user).await?;
        log::info!("New user registered: {}", user.id);
        Ok(user)
    }

    /// Local login. Unknown email and wrong password produce the same
    /// authentication error.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !password::verify_password(&request.password, hash)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    /// Google sign-in: verify the ID token, then find-or-create the
    /// user keyed by email.
    pub async fn login_google(&self, request: GoogleAuthRequest) -> AppResult<User> {
        let profile = self.google.verify(&request.credential).await?;

        if let Some(user) = self.users.find_by_email(&profile.email).await? {
            return Ok(user);
        }

        let user = User::new_google(&profile.name, &profile.email, &profile.google_id);
        let user = self.users.create(user).await?;
        log::info!("New user registered via Google: {}", user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::domain::user::UserRole;
    use crate::repositories::user_repository::MockUserRepository;

    fn verifier() -> GoogleTokenVerifier {
        GoogleTokenVerifier::new("test-client-id.apps.googleusercontent.com")
    }

    fn signup_request() -> SignupRequest {
        SignupRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "correct horse battery staple".to_string(),
        }
    }

    #[actix_rt::test]
    async fn signup_hashes_the_password_and_stores_the_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|user: &User| {
                user.password_hash
                    .as_deref()
                    .map(|h| h.starts_with("$argon2"))
                    .unwrap_or(false)
            })
            .returning(|user| Ok(user));

        let svc = UserService::new(Arc::new(users), verifier());
        let user = svc.signup(signup_request()).await.unwrap();

        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.role, UserRole::User);
    }

    #[actix_rt::test]
    async fn signup_rejects_duplicate_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| {
            Ok(Some(User::test_user("user-1", "John Doe", UserRole::User)))
        });
        users.expect_create().times(0);

        let svc = UserService::new(Arc::new(users), verifier());
        let err = svc.signup(signup_request()).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[actix_rt::test]
    async fn signup_rejects_invalid_payload_before_hitting_the_store() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().times(0);

        let svc = UserService::new(Arc::new(users), verifier());
        let err = svc
            .signup(SignupRequest {
                name: "John".to_string(),
                email: "not-an-email".to_string(),
                password: "short".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[actix_rt::test]
    async fn login_verifies_the_stored_hash() {
        let hash = password::hash_password("hunter2hunter2").unwrap();
        let mut stored = User::test_user("user-1", "John Doe", UserRole::User);
        stored.email = "john@example.com".to_string();
        stored.password_hash = Some(hash);

        let mut users = MockUserRepository::new();
        {
            let stored = stored.clone();
            users
                .expect_find_by_email()
                .returning(move |_| Ok(Some(stored.clone())));
        }

        let svc = UserService::new(Arc::new(users), verifier());

        let user = svc
            .login(LoginRequest {
                email: "john@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, "user-1");

        let err = svc
            .login(LoginRequest {
                email: "john@example.com".to_string(),
                password: "wrong password".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Authentication(_)));
    }

    #[actix_rt::test]
    async fn login_with_unknown_email_does_not_reveal_which_field_was_wrong() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let svc = UserService::new(Arc::new(users), verifier());
        let err = svc
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "whatever password".to_string(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::Authentication(message) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected authentication error, got {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn login_against_a_google_only_account_fails_cleanly() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| {
            Ok(Some(User::new_google(
                "Jane Smith",
                "jane@example.com",
                "google-sub-123",
            )))
        });

        let svc = UserService::new(Arc::new(users), verifier());
        let err = svc
            .login(LoginRequest {
                email: "jane@example.com".to_string(),
                password: "any password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Authentication(_)));
    }
}
