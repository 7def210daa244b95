use std::sync::Arc;

use crate::{
    auth::{GoogleTokenVerifier, JwtService},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizAttemptRepository, MongoQuizRepository, MongoUserRepository},
    services::{QuizService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub user_service: Arc<UserService>,
    pub jwt_service: JwtService,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempt_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository,
            attempt_repository,
            user_repository.clone(),
        ));

        let google_verifier = GoogleTokenVerifier::new(&config.google_client_id);
        let user_service = Arc::new(UserService::new(user_repository, google_verifier));

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        Ok(Self {
            quiz_service,
            user_service,
            jwt_service,
            config: Arc::new(config),
            db,
        })
    }
}
