//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reference Data
//!
//! - `QuestionReader` - Active Prakriti questions
//! - `RecommendationReader` - Diet and schedule tables keyed by dosha
//!
//! ## Member Data
//!
//! - `AssessmentRepository` - Append-only assessment results
//! - `FollowUpRepository` - Reminders scheduled for members
//! - `ProgressRepository` - Daily tracking entries
//! - `ProfileRepository` - Member profiles
//!
//! ## Identity
//!
//! - `SessionValidator` - Access token validation
//! - `AccessChecker` - Administrator flag lookup

mod access_checker;
mod assessment_repository;
mod follow_up_repository;
mod profile_repository;
mod progress_repository;
mod question_reader;
mod recommendation_reader;
mod session_validator;

pub use access_checker::AccessChecker;
pub use assessment_repository::AssessmentRepository;
pub use follow_up_repository::FollowUpRepository;
pub use profile_repository::ProfileRepository;
pub use progress_repository::ProgressRepository;
pub use question_reader::QuestionReader;
pub use recommendation_reader::RecommendationReader;
pub use session_validator::SessionValidator;
