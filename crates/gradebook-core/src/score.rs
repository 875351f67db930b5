//! Weighted grade-average calculator.
//!
//! Components that were never entered are skipped entirely: the average is
//! re-normalized against the weight actually present, not against the full
//! 100%. A grade with only the final exam entered is therefore that exam
//! score, whatever its weight.

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::template::{GradeTemplate, MAX_COMPONENTS};

/// Up to four optional component scores for one grade record.
///
/// Serializes as a plain 4-slot array with `null` marking absent entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSet {
    pub components: [Option<f64>; MAX_COMPONENTS],
}

impl ScoreSet {
    pub fn new(components: [Option<f64>; MAX_COMPONENTS]) -> Self {
        Self { components }
    }

    /// Build a score set from raw form-field strings.
    ///
    /// Empty or `-` fields mark an absent component. Anything else must
    /// parse as a finite number in 0..=10; malformed input is rejected
    /// here rather than propagated as NaN into the average.
    pub fn from_raw<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        if fields.len() > MAX_COMPONENTS {
            crate::bail_usage!(format!(
                "too many scores: {} (templates have at most {} components)",
                fields.len(),
                MAX_COMPONENTS
            ));
        }

        let mut components = [None; MAX_COMPONENTS];
        for (slot, raw) in components.iter_mut().zip(fields) {
            *slot = parse_component(raw.as_ref())?;
        }
        Ok(Self { components })
    }

    /// True when no component has been entered
    pub fn is_empty(&self) -> bool {
        self.components.iter().all(Option::is_none)
    }

    /// Count of entered components
    pub fn present(&self) -> usize {
        self.components.iter().filter(|c| c.is_some()).count()
    }
}

impl From<[Option<f64>; MAX_COMPONENTS]> for ScoreSet {
    fn from(components: [Option<f64>; MAX_COMPONENTS]) -> Self {
        Self::new(components)
    }
}

/// Parse one raw component field.
///
/// Returns `Ok(None)` for blank or `-` input, `Ok(Some(v))` for a valid
/// score, and a typed error for non-numeric or out-of-range values.
pub fn parse_component(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| GradebookError::InvalidScore {
        value: raw.to_string(),
    })?;

    if !value.is_finite() {
        return Err(GradebookError::InvalidScore {
            value: raw.to_string(),
        });
    }
    if !(0.0..=10.0).contains(&value) {
        return Err(GradebookError::ScoreOutOfRange { value });
    }

    Ok(Some(value))
}

/// Weighted average of the entered components, rounded to one decimal.
///
/// Only indices below `weights.len()` are considered; absent components
/// contribute to neither accumulator. Returns 0.0 when nothing was entered.
pub fn weighted_average(scores: &ScoreSet, weights: &[u32]) -> f64 {
    let mut total = 0.0;
    let mut total_weight = 0.0;

    for (component, weight) in scores.components.iter().zip(weights) {
        if let Some(score) = component {
            total += score * f64::from(*weight);
            total_weight += f64::from(*weight);
        }
    }

    if total_weight > 0.0 {
        round1(total / total_weight)
    } else {
        0.0
    }
}

/// Weighted average against a catalog template.
pub fn average_for_template(scores: &ScoreSet, template: &GradeTemplate) -> f64 {
    weighted_average(scores, template.weights)
}

/// Round half-up to one decimal digit (display contract for averages)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round half-up to two decimal digits (display contract for GPA values)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
