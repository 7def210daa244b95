use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::quiz_dto::{AuthResponse, UserDto},
    models::dto::request::{GoogleAuthRequest, LoginRequest, SignupRequest},
    models::dto::response::ApiEnvelope,
};

#[post("/api/auth/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.signup(request.into_inner()).await?;
    let token = state.jwt_service.create_token(&user)?;

    Ok(HttpResponse::Created().json(ApiEnvelope::data(AuthResponse {
        token,
        user: user.into(),
    })))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.login(request.into_inner()).await?;
    let token = state.jwt_service.create_token(&user)?;

    Ok(HttpResponse::Ok().json(ApiEnvelope::data(AuthResponse {
        token,
        user: user.into(),
    })))
}

#[post("/api/auth/google")]
pub async fn google_auth(
    state: web::Data<AppState>,
    request: web::Json<GoogleAuthRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .login_google(request.into_inner())
        .await?;
    let token = state.jwt_service.create_token(&user)?;

    Ok(HttpResponse::Ok().json(ApiEnvelope::data(AuthResponse {
        token,
        user: user.into(),
    })))
}

#[get("/api/auth/me")]
pub async fn me(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&auth.0.sub).await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::data(UserDto::from(user))))
}
