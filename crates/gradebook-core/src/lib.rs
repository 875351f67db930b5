//! Gradebook Core Library
//!
//! Domain logic for the Gradebook academic records tool: the grade template
//! catalog, the weighted-average calculator, the letter/GPA scale, the
//! record model, GPA aggregation, and listing filters.

pub mod audit;
pub mod config;
pub mod error;
pub mod format;
pub mod gpa;
pub mod logging;
pub mod model;
pub mod query;
pub mod scale;
pub mod score;
pub mod template;
