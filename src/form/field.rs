//! Catalogue of the thirteen clinical parameters.

use std::{fmt, str::FromStr};

use crate::error::PredictError;

/// One of the clinical parameters collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Age,
    Sex,
    Cp,
    Trestbps,
    Chol,
    Fbs,
    Restecg,
    Thalach,
    Exang,
    Oldpeak,
    Slope,
    Ca,
    Thal,
}

/// Descriptive value domain of a field. Never enforced locally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Any positive number.
    Positive,
    /// Any non-negative real.
    NonNegative,
    /// One of a fixed set of coded values with display labels.
    Coded(&'static [(&'static str, &'static str)]),
}

const YES_NO: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

impl Field {
    /// All fields in canonical (wire) order.
    pub const ALL: [Field; 13] = [
        Field::Age,
        Field::Sex,
        Field::Cp,
        Field::Trestbps,
        Field::Chol,
        Field::Fbs,
        Field::Restecg,
        Field::Thalach,
        Field::Exang,
        Field::Oldpeak,
        Field::Slope,
        Field::Ca,
        Field::Thal,
    ];

    /// JSON key used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Cp => "cp",
            Field::Trestbps => "trestbps",
            Field::Chol => "chol",
            Field::Fbs => "fbs",
            Field::Restecg => "restecg",
            Field::Thalach => "thalach",
            Field::Exang => "exang",
            Field::Oldpeak => "oldpeak",
            Field::Slope => "slope",
            Field::Ca => "ca",
            Field::Thal => "thal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::Cp => "Chest Pain",
            Field::Trestbps => "Resting BP (mm Hg)",
            Field::Chol => "Cholesterol (mg/dl)",
            Field::Fbs => "Fasting BS > 120",
            Field::Restecg => "Resting ECG",
            Field::Thalach => "Max Heart Rate",
            Field::Exang => "Exercise Angina",
            Field::Oldpeak => "Oldpeak (ST Depression)",
            Field::Slope => "Slope",
            Field::Ca => "Major Vessels",
            Field::Thal => "Thalassemia",
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            Field::Age | Field::Trestbps | Field::Chol | Field::Thalach => Domain::Positive,
            Field::Oldpeak => Domain::NonNegative,
            Field::Sex => Domain::Coded(&[("1", "Male"), ("0", "Female")]),
            Field::Cp => Domain::Coded(&[
                ("1", "Typical Angina"),
                ("2", "Atypical Angina"),
                ("3", "Non-anginal"),
                ("4", "Asymptomatic"),
            ]),
            Field::Fbs | Field::Exang => Domain::Coded(YES_NO),
            Field::Restecg => Domain::Coded(&[
                ("0", "Normal"),
                ("1", "ST-T Abnormality"),
                ("2", "LV Hypertrophy"),
            ]),
            Field::Slope => {
                Domain::Coded(&[("1", "Upsloping"), ("2", "Flat"), ("3", "Downsloping")])
            }
            Field::Ca => Domain::Coded(&[("0", "0"), ("1", "1"), ("2", "2"), ("3", "3")]),
            Field::Thal => Domain::Coded(&[
                ("3", "Normal"),
                ("6", "Fixed Defect"),
                ("7", "Reversable Defect"),
            ]),
        }
    }

    /// Initial text shown before the user edits anything. Free-form
    /// measurements start blank; coded fields start on their first option.
    pub fn default_value(self) -> &'static str {
        match self.domain() {
            Domain::Positive | Domain::NonNegative => "",
            Domain::Coded(options) => options.first().map(|(code, _)| *code).unwrap_or(""),
        }
    }

    /// Position in [`Field::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| PredictError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Positive => f.write_str("positive number"),
            Domain::NonNegative => f.write_str("non-negative real"),
            Domain::Coded(options) => {
                let rendered = options
                    .iter()
                    .map(|(code, label)| format!("{code}={label}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{rendered}}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_canonical_order() {
        for (idx, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), idx);
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.key().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "Age".parse::<Field>(),
            Err(PredictError::UnknownField(name)) if name == "Age"
        ));
    }

    #[test]
    fn defaults_follow_form_initial_state() {
        let defaults: Vec<&str> = Field::ALL.iter().map(|f| f.default_value()).collect();
        assert_eq!(
            defaults,
            vec!["", "1", "1", "", "", "0", "0", "", "0", "", "1", "0", "3"]
        );
    }

    #[test]
    fn coded_domain_renders_options() {
        assert_eq!(Field::Fbs.domain().to_string(), "{0=No, 1=Yes}");
        assert_eq!(Field::Oldpeak.domain().to_string(), "non-negative real");
    }
}
