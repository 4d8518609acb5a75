use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use jobboard_api::database::DatabaseManager;
use jobboard_api::state::AppState;
use jobboard_api::{config, handlers, middleware};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting job board API in {:?} mode", config.environment);

    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("migrations not applied: {}", e);
    }

    let state = match AppState::from_env() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("JOBBOARD_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Job board API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected API behind the bearer-token middleware
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::public::{auth, avatar, jobs};

    Router::new()
        // Token acquisition
        .route("/auth/login", post(auth::login))
        .route("/auth/signup", post(auth::signup))
        // The board
        .route("/jobs", get(jobs::list))
        .route("/jobs/:id", get(jobs::detail))
        // Identicons
        .route("/avatars/:name", get(avatar::get))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use axum::routing::{delete, post, put};
    use handlers::protected::{admin, auth, jobs};

    Router::new()
        // Session management
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/auth/session", delete(auth::sign_out))
        // Business job management
        .route("/api/jobs", post(jobs::create))
        .route("/api/jobs/mine", get(jobs::mine))
        .route("/api/jobs/:id/status", put(jobs::update_status))
        .route("/api/jobs/:id", delete(jobs::delete))
        // Moderation
        .route("/api/admin", get(admin::overview))
        .route("/api/admin/jobs", get(admin::jobs))
        .route("/api/admin/users", get(admin::users))
        .route("/api/admin/jobs/:id", delete(admin::delete_job))
        .route("/api/admin/users/:id", delete(admin::delete_user))
        .layer(axum::middleware::from_fn_with_state(
            state,
            middleware::jwt_auth_middleware,
        ))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Job Board API",
            "version": version,
            "description": "Job board backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/login, /auth/signup (public - token acquisition)",
                "jobs": "/jobs[/:id] (public - listings)",
                "avatars": "/avatars/:name (public - SVG identicons)",
                "session": "/api/auth/whoami, /api/auth/session (protected)",
                "manage": "/api/jobs[/:id], /api/jobs/mine (protected - business)",
                "admin": "/api/admin/* (protected - admin)",
            }
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.store.ping().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
