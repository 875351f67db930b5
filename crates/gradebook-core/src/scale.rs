//! Letter grades and 4.0-scale grade points.
//!
//! Band cutoffs sit just under the displayed boundary (8.95 rather than
//! 9.0) so that a 10-point average which *rounds* to the boundary still
//! earns the higher letter.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    F,
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        write!(f, "{}", s)
    }
}

/// (cutoff, letter, grade points), highest band first
const BANDS: &[(f64, LetterGrade, f64)] = &[
    (8.95, LetterGrade::APlus, 4.0),
    (8.45, LetterGrade::A, 3.7),
    (7.95, LetterGrade::BPlus, 3.5),
    (6.95, LetterGrade::B, 3.0),
    (6.45, LetterGrade::CPlus, 2.5),
    (5.45, LetterGrade::C, 2.0),
    (4.95, LetterGrade::DPlus, 1.5),
    (3.95, LetterGrade::D, 1.0),
];

/// Letter grade for a 10-point average
pub fn letter_for(average: f64) -> LetterGrade {
    for (cutoff, letter, _) in BANDS {
        if average >= *cutoff {
            return *letter;
        }
    }
    LetterGrade::F
}

/// 4.0-scale grade points for a 10-point average
pub fn grade_point(average: f64) -> f64 {
    for (cutoff, _, points) in BANDS {
        if average >= *cutoff {
            return *points;
        }
    }
    0.0
}
