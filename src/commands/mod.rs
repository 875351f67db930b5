//! CLI commands for gradebook

pub mod average;
pub mod chart;
pub mod check;
pub mod dispatch;
pub mod gpa;
pub mod helpers;
pub mod list;
pub mod templates;
