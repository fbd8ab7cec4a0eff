use actix_web::{web, App, HttpServer};
use stonex_backend::config::ai::providers_from_env;
use stonex_backend::config::game::match_rules_from_env;
use stonex_backend::config::gesture::classifier_from_env;
use stonex_backend::middleware::cors::cors_middleware;
use stonex_backend::middleware::request_trace::RequestTrace;
use stonex_backend::middleware::structured_logger::StructuredLogger;
use stonex_backend::routes;
use stonex_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("STONEX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("STONEX_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("STONEX_PORT must be a valid port number");
            std::process::exit(1);
        });

    let rules = match match_rules_from_env() {
        Ok(rules) => rules,
        Err(e) => {
            eprintln!("Invalid match rules configuration: {e}");
            std::process::exit(1);
        }
    };

    let (ai, ai_fallback) = match providers_from_env() {
        Ok(providers) => providers,
        Err(e) => {
            eprintln!("Invalid AI provider configuration: {e}");
            std::process::exit(1);
        }
    };

    let gesture = match classifier_from_env() {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("Invalid gesture classifier configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(rules, ai, ai_fallback).with_gesture(gesture);
    let data = web::Data::new(app_state);

    println!("Starting StoneX backend on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
