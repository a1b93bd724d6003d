//! Prakriti Care - Ayurvedic wellness backend
//!
//! Scores a member's Prakriti (constitution) questionnaire into a dominant
//! dosha label, selects matching diet and daily-routine recommendations,
//! and keeps follow-ups, progress entries and profiles behind a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
