//! Fixed catalog of grading weight templates.
//!
//! A template splits a subject grade into 3 or 4 weighted components
//! (e.g. coursework, midterm, final). The catalog is static: ids are the
//! dash-joined percentage sequence, weights always sum to 100, and there
//! is one display label per weight.

use serde::Serialize;

use crate::error::{GradebookError, Result};

/// A named weight scheme for combining component scores into one average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeTemplate {
    /// Unique key, dash-joined percentages (e.g. `10-10-30-50`)
    pub id: &'static str,
    /// Display label showing the percentage breakdown
    pub name: &'static str,
    /// Component weights, sum to 100
    pub weights: &'static [u32],
    /// One display label per weight
    pub labels: &'static [&'static str],
}

impl GradeTemplate {
    /// Number of active score components (3 or 4)
    pub fn fields(&self) -> usize {
        self.weights.len()
    }
}

/// Maximum number of score components a template may carry.
pub const MAX_COMPONENTS: usize = 4;

pub const TEMPLATES: &[GradeTemplate] = &[
    GradeTemplate {
        id: "10-10-10-70",
        name: "10% - 10% - 10% - 70%",
        weights: &[10, 10, 10, 70],
        labels: &[
            "Component 1 (10%)",
            "Component 2 (10%)",
            "Component 3 (10%)",
            "Component 4 (70%)",
        ],
    },
    GradeTemplate {
        id: "10-10-30-50",
        name: "10% - 10% - 30% - 50%",
        weights: &[10, 10, 30, 50],
        labels: &[
            "Component 1 (10%)",
            "Component 2 (10%)",
            "Component 3 (30%)",
            "Component 4 (50%)",
        ],
    },
    GradeTemplate {
        id: "10-10-20-60",
        name: "10% - 10% - 20% - 60%",
        weights: &[10, 10, 20, 60],
        labels: &[
            "Component 1 (10%)",
            "Component 2 (10%)",
            "Component 3 (20%)",
            "Component 4 (60%)",
        ],
    },
    GradeTemplate {
        id: "10-20-20-50",
        name: "10% - 20% - 20% - 50%",
        weights: &[10, 20, 20, 50],
        labels: &[
            "Component 1 (10%)",
            "Component 2 (20%)",
            "Component 3 (20%)",
            "Component 4 (50%)",
        ],
    },
    GradeTemplate {
        id: "10-30-60",
        name: "10% - 30% - 60%",
        weights: &[10, 30, 60],
        labels: &["Component 1 (10%)", "Component 2 (30%)", "Component 3 (60%)"],
    },
    GradeTemplate {
        id: "10-20-70",
        name: "10% - 20% - 70%",
        weights: &[10, 20, 70],
        labels: &["Component 1 (10%)", "Component 2 (20%)", "Component 3 (70%)"],
    },
    GradeTemplate {
        id: "10-10-80",
        name: "10% - 10% - 80%",
        weights: &[10, 10, 80],
        labels: &["Component 1 (10%)", "Component 2 (10%)", "Component 3 (80%)"],
    },
];

/// Look up a catalog template by id. Linear scan; the catalog is tiny.
pub fn template_by_id(id: &str) -> Option<&'static GradeTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// First catalog entry, used when a caller has no selection yet.
pub fn default_template() -> &'static GradeTemplate {
    &TEMPLATES[0]
}

/// Resolve a template id, failing loudly on unknown ids.
pub fn require_template(id: &str) -> Result<&'static GradeTemplate> {
    template_by_id(id).ok_or_else(|| GradebookError::UnknownTemplate { id: id.to_string() })
}

/// Parse weights out of a dash-joined template id (`"10-20-70"` -> `[10, 20, 70]`).
///
/// Stored grades may carry ids that predate the current catalog; their
/// weights are still recoverable from the id itself. Returns `None` when
/// any segment is non-numeric, the component count is not 3 or 4, or the
/// weights do not sum to 100.
pub fn weights_from_id(id: &str) -> Option<Vec<u32>> {
    let weights: Vec<u32> = id
        .split('-')
        .map(|part| part.parse::<u32>().ok())
        .collect::<Option<_>>()?;

    if weights.len() < 3 || weights.len() > MAX_COMPONENTS {
        return None;
    }
    if weights.iter().sum::<u32>() != 100 {
        return None;
    }

    Some(weights)
}
