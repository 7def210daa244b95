use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{
        CreateQuizRequest, QuizListParams, SubmitAttemptRequest, UpdateQuizRequest,
    },
    models::dto::response::ApiEnvelope,
};

#[get("/api/quizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<QuizListParams>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes(&query).await?;
    let count = quizzes.len();
    Ok(HttpResponse::Ok().json(ApiEnvelope::list(quizzes, count)))
}

#[get("/api/quizzes/subjects")]
pub async fn list_subjects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let subjects = state.quiz_service.list_subjects().await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::data(subjects)))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::data(quiz)))
}

#[post("/api/quizzes/create")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .create_quiz(request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(ApiEnvelope::data(quiz)))
}

#[put("/api/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&id, request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::data(quiz)))
}

#[delete("/api/quizzes/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&id, &auth.0).await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::data(serde_json::json!({}))))
}

#[post("/api/quizzes/{id}/attempt")]
pub async fn submit_attempt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempt = state
        .quiz_service
        .submit_attempt(&id, request.into_inner(), &auth.0)
        .await?;
    Ok(HttpResponse::Created().json(ApiEnvelope::data(attempt)))
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let response = serde_json::json!({
        "status": if db_health.is_ok() { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
