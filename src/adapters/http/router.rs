//! Top-level axum router: wires application handlers to every HTTP module
//! and applies the cross-cutting layers.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::application::handlers::{
    CompleteFollowUpHandler, CreateFollowUpHandler, DeleteFollowUpHandler,
    GetCurrentAssessmentHandler, GetDailyScheduleHandler, GetDashboardHandler,
    GetDietChartHandler, GetProfileHandler, GetQuestionsHandler, ListFollowUpsHandler,
    ListMembersHandler, ListProgressHandler, ListUserFollowUpsHandler, RecordProgressHandler,
    SelectRecommendationsHandler, SubmitAssessmentHandler, UpdateProfileHandler,
};
use crate::config::ServerConfig;
use crate::ports::{
    AccessChecker, AssessmentRepository, FollowUpRepository, ProfileRepository,
    ProgressRepository, QuestionReader, RecommendationReader, SessionValidator,
};

use super::admin::{admin_routes, AdminHandlers};
use super::assessment::{assessment_routes, AssessmentHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::follow_up::{follow_up_routes, FollowUpHandlers};
use super::middleware::auth_middleware;
use super::profile::{profile_routes, ProfileHandlers};
use super::progress::{progress_routes, ProgressHandlers};
use super::recommendation::{recommendation_routes, RecommendationHandlers};

/// Port implementations the API runs against.
#[derive(Clone)]
pub struct AppPorts {
    pub questions: Arc<dyn QuestionReader>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub recommendations: Arc<dyn RecommendationReader>,
    pub follow_ups: Arc<dyn FollowUpRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub access: Arc<dyn AccessChecker>,
    pub sessions: Arc<dyn SessionValidator>,
}

/// Per-module handler state, built once from [`AppPorts`].
#[derive(Clone)]
pub struct ApiHandlers {
    pub assessment: AssessmentHandlers,
    pub recommendation: RecommendationHandlers,
    pub follow_up: FollowUpHandlers,
    pub progress: ProgressHandlers,
    pub profile: ProfileHandlers,
    pub admin: AdminHandlers,
    pub dashboard: DashboardHandlers,
}

impl ApiHandlers {
    pub fn from_ports(ports: &AppPorts) -> Self {
        let selector = Arc::new(SelectRecommendationsHandler::new(
            ports.recommendations.clone(),
        ));

        Self {
            assessment: AssessmentHandlers::new(
                Arc::new(GetQuestionsHandler::new(ports.questions.clone())),
                Arc::new(SubmitAssessmentHandler::new(
                    ports.questions.clone(),
                    ports.assessments.clone(),
                )),
                Arc::new(GetCurrentAssessmentHandler::new(ports.assessments.clone())),
            ),
            recommendation: RecommendationHandlers::new(
                Arc::new(GetDietChartHandler::new(
                    ports.assessments.clone(),
                    selector.clone(),
                )),
                Arc::new(GetDailyScheduleHandler::new(
                    ports.assessments.clone(),
                    selector.clone(),
                )),
                selector,
            ),
            follow_up: FollowUpHandlers::new(
                Arc::new(ListFollowUpsHandler::new(ports.follow_ups.clone())),
                Arc::new(CompleteFollowUpHandler::new(ports.follow_ups.clone())),
            ),
            progress: ProgressHandlers::new(
                Arc::new(RecordProgressHandler::new(ports.progress.clone())),
                Arc::new(ListProgressHandler::new(ports.progress.clone())),
            ),
            profile: ProfileHandlers::new(
                Arc::new(GetProfileHandler::new(ports.profiles.clone())),
                Arc::new(UpdateProfileHandler::new(ports.profiles.clone())),
            ),
            admin: AdminHandlers::new(
                Arc::new(ListMembersHandler::new(
                    ports.access.clone(),
                    ports.profiles.clone(),
                )),
                Arc::new(ListUserFollowUpsHandler::new(
                    ports.access.clone(),
                    ports.follow_ups.clone(),
                )),
                Arc::new(CreateFollowUpHandler::new(
                    ports.access.clone(),
                    ports.follow_ups.clone(),
                )),
                Arc::new(DeleteFollowUpHandler::new(
                    ports.access.clone(),
                    ports.follow_ups.clone(),
                )),
            ),
            dashboard: DashboardHandlers::new(Arc::new(GetDashboardHandler::new(
                ports.assessments.clone(),
                ports.follow_ups.clone(),
            ))),
        }
    }
}

/// Routes under `/api`, without authentication or transport layers.
pub fn api_routes(handlers: ApiHandlers) -> Router {
    Router::new()
        .nest("/assessment", assessment_routes(handlers.assessment))
        .nest("/recommendations", recommendation_routes(handlers.recommendation))
        .nest("/follow-ups", follow_up_routes(handlers.follow_up))
        .nest("/progress", progress_routes(handlers.progress))
        .nest("/profile", profile_routes(handlers.profile))
        .nest("/admin", admin_routes(handlers.admin))
        .nest("/dashboard", dashboard_routes(handlers.dashboard))
}

/// The complete application: `/api/*`, `/health` and every layer.
pub fn app_router(ports: AppPorts, server: &ServerConfig) -> Router {
    let handlers = ApiHandlers::from_ports(&ports);

    Router::new()
        .nest("/api", api_routes(handlers))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(
            ports.sessions.clone(),
            auth_middleware,
        ))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Any origin when none are configured, otherwise the configured list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}
