//! # Donor Registry Backend
//!
//! Blood donor records, user accounts and dashboard statistics, persisted in flat files.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (axum REST handlers, sessions)
//!     ↓
//! Domain Layer (validation, eligibility, statistics, services)
//!     ↓
//! Storage Layer (donors.json + donors.csv mirror, users.csv)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Argon2Hasher, DonorService, UserService};
use crate::io::SessionStore;
use crate::storage::{CsvConnection, DonorRepository, UserRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub donor_service: DonorService,
    pub user_service: UserService,
    pub sessions: SessionStore,
}

impl AppState {
    /// Wire services onto the flat-file stores of `connection`
    pub fn from_connection(connection: CsvConnection) -> Self {
        let donor_repository = Arc::new(DonorRepository::new(&connection));
        let user_repository = Arc::new(UserRepository::new(connection));

        Self {
            donor_service: DonorService::new(donor_repository),
            user_service: UserService::new(user_repository, Arc::new(Argon2Hasher)),
            sessions: SessionStore::new(),
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory: {}", config.data_dir.display());
    let connection = CsvConnection::new(&config.data_dir)?;

    info!("Setting up application state");
    Ok(AppState::from_connection(connection))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let api_routes = Router::new()
        .route("/register", post(io::register))
        .route("/login", post(io::login))
        .route("/logout", post(io::logout))
        .route("/dashboard", get(io::get_dashboard))
        .route("/donors", get(io::list_donors).post(io::create_donor))
        .route("/donors/search", get(io::search_donors))
        .route(
            "/donors/:index",
            get(io::get_donor).put(io::update_donor).delete(io::delete_donor),
        );

    let mut router = Router::new().nest("/api", api_routes);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router = router.layer(TraceLayer::new_for_http());

    if let Some(origin) = &config.cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin: {}", origin))?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    Ok(router.with_state(app_state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn setup() -> (TestEnvironment, Router) {
        let env = TestEnvironment::new().unwrap();
        let state = AppState::from_connection(env.connection.clone());
        let router = create_router(state, &AppConfig::default()).unwrap();
        (env, router)
    }

    async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn donor_form(name: &str, blood_group: &str) -> Value {
        json!({
            "name": name,
            "blood_group": blood_group,
            "phone": "1234567890",
            "email": "donor@example.com",
            "address": "42 Harbour Road"
        })
    }

    #[tokio::test]
    async fn test_donor_crud_over_http() {
        let (_env, router) = setup();

        let response = send(&router, "POST", "/api/donors", Some(donor_form("John3", "O+")), None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["form"]["name"], "John3");

        let response = send(&router, "POST", "/api/donors", Some(donor_form("John Doe", "O+")), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["donor"]["index"], 0);
        assert_eq!(body["donor"]["eligible"], true);

        send(&router, "POST", "/api/donors", Some(donor_form("Jane Roe", "A-")), None).await;

        let response = send(&router, "GET", "/api/donors?page=1&blood_group=A-", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["donors"][0]["index"], 1);

        let response = send(&router, "GET", "/api/donors/search?q=o%2B", None, None).await;
        let body = body_json(response).await;
        assert_eq!(body["donors"].as_array().unwrap().len(), 1);
        assert_eq!(body["donors"][0]["name"], "John Doe");

        let response = send(&router, "PUT", "/api/donors/1", Some(donor_form("Janet Roe", "A-")), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&router, "GET", "/api/donors/9", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["redirect_to"], "/api/donors");

        let response = send(&router, "DELETE", "/api/donors/0", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["deleted_name"], "John Doe");

        let response = send(&router, "GET", "/api/donors/0", None, None).await;
        assert_eq!(body_json(response).await["name"], "Janet Roe");
    }

    #[tokio::test]
    async fn test_register_login_dashboard_logout() {
        let (_env, router) = setup();

        let response = send(&router, "GET", "/api/dashboard", None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let registration = json!({
            "fullname": "Jane Roe",
            "email": "jane@example.com",
            "password": "s3cret",
            "confirm_password": "s3cret",
            "blood_group": "B+",
            "phone": "1234567890",
            "address": "1 Main St"
        });
        let response = send(&router, "POST", "/api/register", Some(registration.clone()), None).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(&router, "POST", "/api/register", Some(registration), None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0], "Email already registered");
        assert_eq!(body["form"]["password"], "");

        let response = send(
            &router,
            "POST",
            "/api/login",
            Some(json!({"email": "jane@example.com", "password": "wrong"})),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(
            &router,
            "POST",
            "/api/login",
            Some(json!({"email": "jane@example.com", "password": "s3cret"})),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["token"].as_str().unwrap().to_string();

        send(&router, "POST", "/api/donors", Some(donor_form("John Doe", "O+")), None).await;

        let response = send(&router, "GET", "/api/dashboard", None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_donors"], 1);
        assert_eq!(body["eligible_donors"], 1);
        assert_eq!(body["blood_stats"]["O+"]["count"], 1);
        assert_eq!(body["blood_stats"].as_object().unwrap().len(), 8);
        assert_eq!(body["user_name"], "Jane Roe");

        let response = send(&router, "POST", "/api/logout", None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&router, "GET", "/api/dashboard", None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        let env = TestEnvironment::new().unwrap();
        let state = AppState::from_connection(env.connection.clone());
        let config = AppConfig {
            cors_origin: Some("bad\norigin".to_string()),
            ..AppConfig::default()
        };
        assert!(create_router(state, &config).is_err());
    }

    #[tokio::test]
    async fn test_malformed_donor_index_redirects_to_listing() {
        let (_env, router) = setup();

        for uri in ["/api/donors/-1", "/api/donors/abc"] {
            let response = send(&router, "GET", uri, None, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
            let body = body_json(response).await;
            assert_eq!(body["message"], "Invalid donor ID");
            assert_eq!(body["redirect_to"], "/api/donors");
        }

        let response = send(&router, "PUT", "/api/donors/-1", Some(donor_form("John Doe", "O+")), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&router, "DELETE", "/api/donors/abc", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["redirect_to"], "/api/donors");
    }

    #[tokio::test]
    async fn test_incomplete_form_gets_validation_shape() {
        let (_env, router) = setup();

        let response = send(&router, "POST", "/api/donors", Some(json!({"name": "John Doe"})), None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert!(body["form"].is_null());

        let response = send(&router, "POST", "/api/register", Some(json!({"email": "a@b.com"})), None).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["errors"].is_array());
    }

    #[tokio::test]
    async fn test_failed_save_is_a_server_error() {
        let (env, router) = setup();
        // A directory where the JSON temp file belongs makes every save fail
        std::fs::create_dir(env.base_directory().join("donors.json.tmp")).unwrap();

        let response = send(&router, "POST", "/api/donors", Some(donor_form("John Doe", "O+")), None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "Storage operation failed");

        let response = send(&router, "GET", "/api/donors", None, None).await;
        assert_eq!(body_json(response).await["total"], 0);
    }
}
