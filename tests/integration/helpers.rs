//! Shared helpers for the integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use streamgate_api::app::{build_app, build_state};
use streamgate_auth::PasswordHasher;
use streamgate_core::config::AppConfig;
use streamgate_database::connection::DatabasePool;
use streamgate_database::migration::run_migrations;
use streamgate_database::repositories::user::UserRepository;
use streamgate_entity::user::CreateUser;

/// A fully wired application instance backed by the test database.
pub struct TestApp {
    pub router: Router,
    pub db_pool: PgPool,
    pub config: AppConfig,
}

/// Status and parsed JSON body of a routed request.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Connects to the test database, runs migrations, wipes all tables,
    /// and builds the router.
    pub async fn new() -> Self {
        let config =
            AppConfig::load_file("tests/fixtures/test_config.toml").expect("test config loads");

        let pool = DatabasePool::connect(&config.database)
            .await
            .expect("test database is reachable");
        run_migrations(pool.pool()).await.expect("migrations run");

        let db_pool = pool.into_pool();
        clean_database(&db_pool).await;

        let state = build_state(config.clone(), db_pool.clone());
        let router = build_app(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Sends a request through the router and parses the JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request builds"),
            None => builder.body(Body::empty()).expect("request builds"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Inserts a user directly through the repository.
    pub async fn create_user(
        &self,
        name: &str,
        password: &str,
        allowed_devices: i32,
        is_admin: bool,
    ) -> Uuid {
        let repo = UserRepository::new(self.db_pool.clone());
        let hasher = PasswordHasher::new();
        let user = repo
            .create(&CreateUser {
                name: name.to_string(),
                password_hash: hasher.hash_password(password).expect("password hashes"),
                allowed_devices,
                is_admin,
            })
            .await
            .expect("user inserts");
        user.id
    }

    /// Logs in with a password and returns the session token.
    pub async fn login(&self, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("login returns a token")
            .to_string()
    }

    /// Logs in tied to a device identifier.
    pub async fn login_with_device(&self, password: &str, device_id: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "password": password, "deviceId": device_id })),
            None,
        )
        .await
    }

    /// Creates an admin, logs in, and returns the token.
    pub async fn admin_token(&self) -> String {
        self.create_user("Administrador", "19801605", 3, true).await;
        self.login("19801605").await
    }
}

/// Truncates every table so each test starts from a clean slate.
async fn clean_database(pool: &PgPool) {
    for table in [
        "messages", "sessions", "episodes", "seasons", "series", "movies", "channels", "users",
    ] {
        sqlx::query(&format!("TRUNCATE TABLE {table} CASCADE"))
            .execute(pool)
            .await
            .unwrap_or_else(|e| panic!("failed to truncate {table}: {e}"));
    }
}

/// Creates a series through the API and returns its id.
pub async fn create_series(app: &TestApp, token: &str, title: &str) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/series",
            Some(serde_json::json!({
                "title": title,
                "synopsis": "A test series",
                "genre": "Drama",
                "year": 2023,
                "coverUrl": "https://example.com/cover.jpg",
                "videoUrl": "https://example.com/trailer.mp4",
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "create series: {:?}",
        response.body
    );
    parse_id(&response.body["series"]["id"])
}

/// Creates a season through the API and returns its id.
pub async fn create_season(app: &TestApp, token: &str, series_id: Uuid, number: i32) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/seasons",
            Some(serde_json::json!({
                "seriesId": series_id,
                "number": number,
                "title": format!("Season {number}"),
                "year": 2023,
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "create season: {:?}",
        response.body
    );
    parse_id(&response.body["season"]["id"])
}

/// Creates an episode through the API and returns its id.
pub async fn create_episode(app: &TestApp, token: &str, season_id: Uuid, number: i32) -> Uuid {
    let response = app
        .request(
            "POST",
            "/api/episodes",
            Some(serde_json::json!({
                "seasonId": season_id,
                "number": number,
                "title": format!("Episode {number}"),
                "duration": 42,
                "videoUrl": "https://example.com/episode.mp4",
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::OK,
        "create episode: {:?}",
        response.body
    );
    parse_id(&response.body["episode"]["id"])
}

/// Parses a UUID out of a JSON string value.
pub fn parse_id(value: &Value) -> Uuid {
    value
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(|| panic!("expected a UUID, got {value}"))
}
