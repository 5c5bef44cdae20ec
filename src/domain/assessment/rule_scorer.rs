//! Rule-based heuristic scorer.
//!
//! An additive point table over the raw attributes. It compares the raw,
//! lower-cased strings rather than the canonical vocabulary, so it stays
//! meaningful when the model path is degraded.

use serde::Serialize;

use super::feature_vector::Measurements;
use super::{AssessmentError, Field, RawInput};
use crate::domain::foundation::Probability;

/// The raw attributes the point table reads.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleInputs {
    pub age: i64,
    pub bmi: f64,
    pub smoker: String,
    pub alcohol: String,
    pub exercise: String,
    pub diet: String,
    pub stress_level: i64,
    pub sleep_hours: f64,
}

impl RuleInputs {
    pub fn from_raw(raw: &RawInput) -> Result<Self, AssessmentError> {
        let measurements = Measurements::from_raw(raw)?;
        Ok(Self {
            age: measurements.age,
            bmi: measurements.bmi,
            smoker: raw.lowered_text(Field::Smoker)?,
            alcohol: raw.lowered_text(Field::Alcohol)?,
            exercise: raw.lowered_text(Field::Exercise)?,
            diet: raw.lowered_text(Field::Diet)?,
            stress_level: measurements.stress_level,
            sleep_hours: measurements.sleep_hours,
        })
    }
}

/// Points contributed by each attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RuleBreakdown {
    pub age: f64,
    pub bmi: f64,
    pub smoker: f64,
    pub alcohol: f64,
    pub exercise: f64,
    pub diet: f64,
    pub stress: f64,
    pub sleep: f64,
}

impl RuleBreakdown {
    /// Unclamped sum of every band.
    pub fn total(&self) -> f64 {
        self.age
            + self.bmi
            + self.smoker
            + self.alcohol
            + self.exercise
            + self.diet
            + self.stress
            + self.sleep
    }
}

pub struct RuleScorer;

impl RuleScorer {
    /// Scores a raw record.
    pub fn score_raw(raw: &RawInput) -> Result<Probability, AssessmentError> {
        Ok(Self::score(&RuleInputs::from_raw(raw)?))
    }

    /// Sum of all matching bands, capped at 1.0.
    pub fn score(inputs: &RuleInputs) -> Probability {
        Probability::new(Self::breakdown(inputs).total().min(1.0))
    }

    /// Evaluates each attribute's band. Each attribute contributes at most once.
    pub fn breakdown(inputs: &RuleInputs) -> RuleBreakdown {
        RuleBreakdown {
            age: age_points(inputs.age),
            bmi: bmi_points(inputs.bmi),
            smoker: smoker_points(&inputs.smoker),
            alcohol: alcohol_points(&inputs.alcohol),
            exercise: exercise_points(&inputs.exercise),
            diet: diet_points(&inputs.diet),
            stress: stress_points(inputs.stress_level),
            sleep: sleep_points(inputs.sleep_hours),
        }
    }
}

fn age_points(age: i64) -> f64 {
    if age >= 70 {
        0.22
    } else if age >= 60 {
        0.16
    } else if age >= 45 {
        0.10
    } else {
        0.0
    }
}

fn bmi_points(bmi: f64) -> f64 {
    if bmi >= 35.0 || bmi < 18.5 {
        0.18
    } else if bmi >= 30.0 {
        0.12
    } else if bmi >= 25.0 {
        0.06
    } else {
        0.0
    }
}

fn smoker_points(smoker: &str) -> f64 {
    if smoker == "yes" {
        0.18
    } else {
        0.0
    }
}

fn alcohol_points(alcohol: &str) -> f64 {
    match alcohol {
        "high" => 0.12,
        "moderate" => 0.06,
        _ => 0.0,
    }
}

fn exercise_points(exercise: &str) -> f64 {
    match exercise {
        "none" => 0.14,
        "1-2" => 0.07,
        _ => 0.0,
    }
}

fn diet_points(diet: &str) -> f64 {
    match diet {
        "poor" => 0.12,
        "average" => 0.06,
        _ => 0.0,
    }
}

fn stress_points(stress: i64) -> f64 {
    if stress >= 8 {
        0.10
    } else if stress >= 6 {
        0.06
    } else if stress >= 4 {
        0.03
    } else {
        0.0
    }
}

fn sleep_points(sleep: f64) -> f64 {
    if sleep < 5.0 {
        0.10
    } else if sleep < 6.0 {
        0.06
    } else if sleep > 9.5 {
        0.04
    } else {
        0.0
    }
}
