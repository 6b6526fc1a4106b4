use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use analysis::{AnalysisClient, AnalysisError};
use async_trait::async_trait;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::router::create_router;
use crate::schemas::AppState;

/// Router timeout used by test servers.
pub const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Internal detail carried by [`StubReply::Fail`]; must never reach a client.
pub const UPSTREAM_SECRET_DETAIL: &str = "upstream exploded at 10.0.0.7";

/// What a [`StubAnalyzer`] answers.
#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    MissingKey,
    Fail,
}

/// Analysis client that answers from a script and counts calls.
#[derive(Debug)]
pub struct StubAnalyzer {
    reply: StubReply,
    calls: AtomicUsize,
}

impl StubAnalyzer {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisClient for StubAnalyzer {
    async fn analyze(&self, _content: &str) -> analysis::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::MissingKey => Err(AnalysisError::Configuration(
                "GEMINI_API_KEY is missing. Set it in the environment.".to_string(),
            )),
            StubReply::Fail => Err(AnalysisError::Upstream {
                status: 500,
                body: UPSTREAM_SECRET_DETAIL.to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    // Run migrations
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create AppState for testing around the given analysis client
pub async fn setup_test_app_state(analyzer: Arc<dyn AnalysisClient>) -> AppState {
    let db = setup_test_db().await;
    AppState { db, analyzer }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG and defaults to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create a test server for the given state.
pub fn setup_test_server(state: AppState) -> TestServer {
    let _guard = init_test_tracing();
    TestServer::new(create_router(state, TEST_REQUEST_TIMEOUT))
        .expect("Failed to start test server")
}
