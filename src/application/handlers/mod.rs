//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod dashboard;
pub mod follow_up;
pub mod profile;
pub mod progress;
pub mod recommendation;

pub use assessment::{
    GetCurrentAssessmentHandler, GetCurrentAssessmentQuery, GetQuestionsHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler,
};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use follow_up::{
    CompleteFollowUpCommand, CompleteFollowUpHandler, CreateFollowUpCommand,
    CreateFollowUpHandler, DeleteFollowUpCommand, DeleteFollowUpHandler, ListFollowUpsHandler,
    ListFollowUpsQuery, ListUserFollowUpsHandler, ListUserFollowUpsQuery,
};
pub use profile::{
    GetProfileHandler, GetProfileQuery, ListMembersHandler, ListMembersQuery,
    UpdateProfileCommand, UpdateProfileHandler,
};
pub use progress::{
    ListProgressHandler, ListProgressQuery, RecordProgressCommand, RecordProgressHandler,
};
pub use recommendation::{
    DailySchedule, DietChart, GetDailyScheduleHandler, GetDailyScheduleQuery,
    GetDietChartHandler, GetDietChartQuery, RecommendationSelection,
    SelectRecommendationsHandler,
};
