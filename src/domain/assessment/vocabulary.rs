//! Categorical vocabularies and the field normalizer.
//!
//! Each categorical field has a table mapping accepted lower-cased
//! synonyms to exactly one canonical label. Lookups trim and lowercase
//! the raw value first; there is no partial or fuzzy matching.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use super::{AssessmentError, Field};

/// A read-only synonym table for one categorical field.
#[derive(Debug)]
pub struct VocabularyTable<T: 'static> {
    field: Field,
    entries: HashMap<&'static str, T>,
}

impl<T: Copy> VocabularyTable<T> {
    fn new(field: Field, synonyms: &[(&'static str, T)]) -> Self {
        Self {
            field,
            entries: synonyms.iter().copied().collect(),
        }
    }

    /// Resolves a raw value to its canonical category.
    pub fn normalize(&self, raw: &str) -> Result<T, AssessmentError> {
        let key = raw.trim().to_lowercase();
        self.entries
            .get(key.as_str())
            .copied()
            .ok_or_else(|| AssessmentError::unsupported_value(self.field.key(), raw, self.allowed()))
    }

    /// Every accepted synonym, sorted.
    pub fn allowed(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().map(|k| k.to_string()).collect();
        keys.sort();
        keys
    }

    pub fn field(&self) -> Field {
        self.field
    }
}

/// A closed set of canonical labels backed by a synonym table.
pub trait Categorical: Copy + Eq + 'static {
    /// Every canonical value.
    const ALL: &'static [Self];

    fn table() -> &'static VocabularyTable<Self>;

    /// The label the classifier was trained on.
    fn label(&self) -> &'static str;

    fn normalize(raw: &str) -> Result<Self, AssessmentError> {
        Self::table().normalize(raw)
    }
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, $field:expr, $table:ident {
            $($variant:ident => $label:literal : [$($synonym:literal),+ $(,)?]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        static $table: Lazy<VocabularyTable<$name>> = Lazy::new(|| {
            VocabularyTable::new(
                $field,
                &[$($(($synonym, $name::$variant),)+)+],
            )
        });

        impl Categorical for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn table() -> &'static VocabularyTable<Self> {
                &$table
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }
    };
}

categorical! {
    /// Self-reported gender.
    Gender, Field::Gender, GENDER_TABLE {
        Male => "Male": ["m", "male", "man"],
        Female => "Female": ["f", "female", "woman"],
        Other => "Other": ["other", "non-binary", "nonbinary"],
    }
}

categorical! {
    /// Current smoking status.
    SmokingStatus, Field::Smoker, SMOKER_TABLE {
        Yes => "Yes": ["yes", "y", "true", "1", "smoker"],
        No => "No": ["no", "n", "false", "0", "non-smoker"],
    }
}

categorical! {
    /// Alcohol consumption. The model has no "None" class, so
    /// abstainers map to the lowest known category.
    AlcoholConsumption, Field::Alcohol, ALCOHOL_TABLE {
        Low => "Low": ["none", "0", "low"],
        Moderate => "Moderate": ["moderate", "medium"],
        High => "High": ["high", "heavy"],
    }
}

categorical! {
    /// Weekly exercise frequency.
    ExerciseFrequency, Field::Exercise, EXERCISE_TABLE {
        None => "None": ["none", "0", "never"],
        OneToTwo => "1-2 times/week": ["1-2", "1-2 times/week"],
        ThreeToFive => "3-5 times/week": ["3-5", "3-5 times/week"],
        Daily => "Daily": ["daily", "everyday"],
    }
}

categorical! {
    /// Self-assessed diet quality.
    DietQuality, Field::Diet, DIET_TABLE {
        Poor => "Poor": ["poor"],
        Average => "Average": ["average"],
        Good => "Good": ["good"],
        Excellent => "Excellent": ["excellent"],
    }
}

/// Normalizes a raw value for a categorical field to its canonical label.
///
/// Numeric fields are not categorical and are rejected.
pub fn normalize(field: Field, raw: &str) -> Result<&'static str, AssessmentError> {
    match field {
        Field::Gender => Gender::normalize(raw).map(|v| v.label()),
        Field::Smoker => SmokingStatus::normalize(raw).map(|v| v.label()),
        Field::Alcohol => AlcoholConsumption::normalize(raw).map(|v| v.label()),
        Field::Exercise => ExerciseFrequency::normalize(raw).map(|v| v.label()),
        Field::Diet => DietQuality::normalize(raw).map(|v| v.label()),
        numeric => Err(AssessmentError::invalid_field(
            numeric.key(),
            "not a categorical field",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_every_label_reachable<T: Categorical + std::fmt::Debug>() {
        let table = T::table();
        for value in T::ALL {
            let reachable = table
                .allowed()
                .iter()
                .any(|synonym| table.normalize(synonym).ok() == Some(*value));
            assert!(reachable, "{:?} has no synonym in {}", value, table.field());
        }
    }

    #[test]
    fn every_canonical_label_is_reachable() {
        assert_every_label_reachable::<Gender>();
        assert_every_label_reachable::<SmokingStatus>();
        assert_every_label_reachable::<AlcoholConsumption>();
        assert_every_label_reachable::<ExerciseFrequency>();
        assert_every_label_reachable::<DietQuality>();
    }

    #[test]
    fn lookups_ignore_case_and_whitespace() {
        assert_eq!(normalize(Field::Gender, "M").unwrap(), "Male");
        assert_eq!(normalize(Field::Gender, "male").unwrap(), "Male");
        assert_eq!(normalize(Field::Gender, "Male ").unwrap(), "Male");
        assert_eq!(normalize(Field::Diet, "  EXCELLENT").unwrap(), "Excellent");
    }

    #[test]
    fn lowest_tiers_accept_zero_and_none() {
        assert_eq!(ExerciseFrequency::normalize("0").unwrap(), ExerciseFrequency::None);
        assert_eq!(ExerciseFrequency::normalize("none").unwrap(), ExerciseFrequency::None);
        assert_eq!(AlcoholConsumption::normalize("None").unwrap(), AlcoholConsumption::Low);
    }

    #[test]
    fn exercise_labels_match_training_categories() {
        assert_eq!(normalize(Field::Exercise, "1-2").unwrap(), "1-2 times/week");
        assert_eq!(normalize(Field::Exercise, "3-5 Times/Week").unwrap(), "3-5 times/week");
        assert_eq!(normalize(Field::Exercise, "daily").unwrap(), "Daily");
    }

    #[test]
    fn unknown_gender_lists_allowed_values() {
        let err = normalize(Field::Gender, "unknown").unwrap_err();
        match err {
            AssessmentError::UnsupportedValue { field, value, allowed } => {
                assert_eq!(field, "gender");
                assert_eq!(value, "unknown");
                assert!(allowed.contains(&"female".to_string()));
                assert!(allowed.contains(&"male".to_string()));
                let mut sorted = allowed.clone();
                sorted.sort();
                assert_eq!(allowed, sorted);
            }
            other => panic!("Expected UnsupportedValue, got {:?}", other),
        }
    }

    #[test]
    fn no_partial_matches() {
        assert!(Gender::normalize("ma").is_err());
        assert!(DietQuality::normalize("goodish").is_err());
        assert!(ExerciseFrequency::normalize("1").is_err());
    }

    #[test]
    fn numeric_fields_are_not_categorical() {
        assert!(matches!(
            normalize(Field::Age, "45"),
            Err(AssessmentError::InvalidField { .. })
        ));
    }

    #[test]
    fn categories_serialize_as_labels() {
        let json = serde_json::to_string(&ExerciseFrequency::ThreeToFive).unwrap();
        assert_eq!(json, "\"3-5 times/week\"");
    }
}
