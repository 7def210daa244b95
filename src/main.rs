use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizhub_server::{
    app_state::AppState,
    auth::AuthMiddleware,
    config::Config,
    handlers::{
        create_quiz, delete_quiz, get_quiz, google_auth, health_check, list_quizzes,
        list_subjects, login, me, signup, submit_attempt, update_quiz,
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    if std::env::var("RUN_MODE").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize application state: {}", e));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(state.jwt_service.clone()))
            // Public surface: listing, subjects, single fetch, local
            // and Google sign-in. Route order matters: `/subjects`
            // must register before the `/{id}` catch-all.
            .service(health_check)
            .service(list_quizzes)
            .service(list_subjects)
            .service(get_quiz)
            .service(signup)
            .service(login)
            .service(google_auth)
            // Everything below requires a valid bearer token.
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(create_quiz)
                    .service(update_quiz)
                    .service(delete_quiz)
                    .service(submit_attempt)
                    .service(me),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
