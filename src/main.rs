//! prakriti-care API server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prakriti_care::adapters::auth::JwtSessionValidator;
use prakriti_care::adapters::http::{app_router, AppPorts};
use prakriti_care::adapters::postgres::{
    PostgresAccessChecker, PostgresAssessmentRepository, PostgresFollowUpRepository,
    PostgresProfileRepository, PostgresProgressRepository, PostgresQuestionReader,
    PostgresRecommendationReader,
};
use prakriti_care::config::{AppConfig, ServerConfig};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    tracing::info!(
        environment = ?config.server.environment,
        "starting prakriti-care"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("applying database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let ports = AppPorts {
        questions: Arc::new(PostgresQuestionReader::new(pool.clone())),
        assessments: Arc::new(PostgresAssessmentRepository::new(pool.clone())),
        recommendations: Arc::new(PostgresRecommendationReader::new(pool.clone())),
        follow_ups: Arc::new(PostgresFollowUpRepository::new(pool.clone())),
        progress: Arc::new(PostgresProgressRepository::new(pool.clone())),
        profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
        access: Arc::new(PostgresAccessChecker::new(pool.clone())),
        sessions: Arc::new(JwtSessionValidator::from_config(&config.auth)),
    };

    let app = app_router(ports, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; JSON lines outside development.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
