//! Canonical feature vector for the classifier path.

use serde::Serialize;

use super::vocabulary::{
    AlcoholConsumption, Categorical, DietQuality, ExerciseFrequency, Gender, SmokingStatus,
};
use super::{AssessmentError, Field, RawInput};

/// Column order the classifier was fit on.
pub const FEATURE_COLUMNS: [&str; 11] = [
    "Age",
    "Gender",
    "Height_cm",
    "Weight_kg",
    "BMI",
    "Smoker",
    "Exercise_Freq",
    "Diet_Quality",
    "Alcohol_Consumption",
    "Stress_Level",
    "Sleep_Hours",
];

/// Numeric columns, in the order the preprocessing step scales them.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Age",
    "Height_cm",
    "Weight_kg",
    "BMI",
    "Stress_Level",
    "Sleep_Hours",
];

/// Categorical columns, in the order the preprocessing step encodes them.
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "Gender",
    "Smoker",
    "Exercise_Freq",
    "Diet_Quality",
    "Alcohol_Consumption",
];

/// Numeric attributes with the BMI policy applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub age: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_derived: bool,
    pub stress_level: i64,
    pub sleep_hours: f64,
}

impl Measurements {
    /// Parses the numeric fields.
    ///
    /// A usable `bmi` is taken verbatim; otherwise it is derived as
    /// `weight_kg / (height_cm / 100)^2`.
    pub fn from_raw(raw: &RawInput) -> Result<Self, AssessmentError> {
        let age = raw.require_integer(Field::Age)?;
        let height_cm = positive(raw.require_number(Field::Height)?, Field::Height)?;
        let weight_kg = positive(raw.require_number(Field::Weight)?, Field::Weight)?;
        let stress_level = raw.require_integer(Field::StressLevel)?;
        let sleep_hours = raw.require_number(Field::SleepHours)?;

        let (bmi, bmi_derived) = match raw.optional_number(Field::Bmi) {
            Some(bmi) => (bmi, false),
            None => (derive_bmi(height_cm, weight_kg), true),
        };

        Ok(Self {
            age,
            height_cm,
            weight_kg,
            bmi,
            bmi_derived,
            stress_level,
            sleep_hours,
        })
    }
}

/// Body mass index from centimetres and kilograms.
pub fn derive_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / height_m.powi(2)
}

fn positive(value: f64, field: Field) -> Result<f64, AssessmentError> {
    if value <= 0.0 {
        return Err(AssessmentError::invalid_field(
            field.key(),
            format!("must be greater than zero, got {}", value),
        ));
    }
    Ok(value)
}

/// A single value in the feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(&'static str),
}

impl FeatureValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&'static str> {
        match self {
            FeatureValue::Categorical(label) => Some(label),
            FeatureValue::Numeric(_) => None,
        }
    }
}

/// One row in the exact schema the classifier expects.
///
/// Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureVector {
    age: i64,
    gender: Gender,
    #[serde(rename = "Height_cm")]
    height_cm: f64,
    #[serde(rename = "Weight_kg")]
    weight_kg: f64,
    #[serde(rename = "BMI")]
    bmi: f64,
    smoker: SmokingStatus,
    #[serde(rename = "Exercise_Freq")]
    exercise_freq: ExerciseFrequency,
    #[serde(rename = "Diet_Quality")]
    diet_quality: DietQuality,
    #[serde(rename = "Alcohol_Consumption")]
    alcohol_consumption: AlcoholConsumption,
    #[serde(rename = "Stress_Level")]
    stress_level: i64,
    #[serde(rename = "Sleep_Hours")]
    sleep_hours: f64,
}

impl FeatureVector {
    /// Normalizes a raw record into the canonical schema.
    pub fn build(raw: &RawInput) -> Result<Self, AssessmentError> {
        let measurements = Measurements::from_raw(raw)?;
        Ok(Self {
            age: measurements.age,
            gender: Gender::normalize(raw.require_text(Field::Gender)?)?,
            height_cm: measurements.height_cm,
            weight_kg: measurements.weight_kg,
            bmi: measurements.bmi,
            smoker: SmokingStatus::normalize(raw.require_text(Field::Smoker)?)?,
            exercise_freq: ExerciseFrequency::normalize(raw.require_text(Field::Exercise)?)?,
            diet_quality: DietQuality::normalize(raw.require_text(Field::Diet)?)?,
            alcohol_consumption: AlcoholConsumption::normalize(raw.require_text(Field::Alcohol)?)?,
            stress_level: measurements.stress_level,
            sleep_hours: measurements.sleep_hours,
        })
    }

    /// Looks a column up by name.
    pub fn value(&self, column: &str) -> Option<FeatureValue> {
        let value = match column {
            "Age" => FeatureValue::Numeric(self.age as f64),
            "Gender" => FeatureValue::Categorical(self.gender.label()),
            "Height_cm" => FeatureValue::Numeric(self.height_cm),
            "Weight_kg" => FeatureValue::Numeric(self.weight_kg),
            "BMI" => FeatureValue::Numeric(self.bmi),
            "Smoker" => FeatureValue::Categorical(self.smoker.label()),
            "Exercise_Freq" => FeatureValue::Categorical(self.exercise_freq.label()),
            "Diet_Quality" => FeatureValue::Categorical(self.diet_quality.label()),
            "Alcohol_Consumption" => FeatureValue::Categorical(self.alcohol_consumption.label()),
            "Stress_Level" => FeatureValue::Numeric(self.stress_level as f64),
            "Sleep_Hours" => FeatureValue::Numeric(self.sleep_hours),
            _ => return None,
        };
        Some(value)
    }

    /// All columns in schema order.
    pub fn columns(&self) -> Vec<(&'static str, FeatureValue)> {
        FEATURE_COLUMNS
            .iter()
            .filter_map(|column| self.value(column).map(|value| (*column, value)))
            .collect()
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn smoker(&self) -> SmokingStatus {
        self.smoker
    }

    pub fn exercise_freq(&self) -> ExerciseFrequency {
        self.exercise_freq
    }

    pub fn diet_quality(&self) -> DietQuality {
        self.diet_quality
    }

    pub fn alcohol_consumption(&self) -> AlcoholConsumption {
        self.alcohol_consumption
    }
}
