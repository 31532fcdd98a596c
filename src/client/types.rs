//! Wire types exchanged with the prediction service.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::{PredictError, PredictResult},
    form::Field,
};

/// Coerced request body. `None` entries serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: Option<f64>,
    pub sex: Option<f64>,
    pub cp: Option<f64>,
    pub trestbps: Option<f64>,
    pub chol: Option<f64>,
    pub fbs: Option<f64>,
    pub restecg: Option<f64>,
    pub thalach: Option<f64>,
    pub exang: Option<f64>,
    pub oldpeak: Option<f64>,
    pub slope: Option<f64>,
    pub ca: Option<f64>,
    pub thal: Option<f64>,
}

impl PredictionRequest {
    /// Build a request by evaluating `value` once per field.
    pub fn from_fn(mut value: impl FnMut(Field) -> Option<f64>) -> Self {
        Self {
            age: value(Field::Age),
            sex: value(Field::Sex),
            cp: value(Field::Cp),
            trestbps: value(Field::Trestbps),
            chol: value(Field::Chol),
            fbs: value(Field::Fbs),
            restecg: value(Field::Restecg),
            thalach: value(Field::Thalach),
            exang: value(Field::Exang),
            oldpeak: value(Field::Oldpeak),
            slope: value(Field::Slope),
            ca: value(Field::Ca),
            thal: value(Field::Thal),
        }
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Age => self.age,
            Field::Sex => self.sex,
            Field::Cp => self.cp,
            Field::Trestbps => self.trestbps,
            Field::Chol => self.chol,
            Field::Fbs => self.fbs,
            Field::Restecg => self.restecg,
            Field::Thalach => self.thalach,
            Field::Exang => self.exang,
            Field::Oldpeak => self.oldpeak,
            Field::Slope => self.slope,
            Field::Ca => self.ca,
            Field::Thal => self.thal,
        }
    }

    /// Fields that will go over the wire as `null`.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_none())
            .collect()
    }
}

/// Categorical output of the remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => f.write_str("High"),
            RiskLevel::Low => f.write_str("Low"),
        }
    }
}

/// Successful prediction body. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk_level: RiskLevel,
    pub probability: f64,
    /// Binary class label, when the service includes it.
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub prediction: Option<u8>,
}

/// Accept `1`, `1.0` or `"1"`; anything else reads as no label.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let number = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|n| n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(n))
        .map(|n| n as u8))
}

impl PredictionResult {
    /// Decode and range-check a response body.
    pub fn from_slice(body: &[u8]) -> PredictResult<Self> {
        let result: Self =
            serde_json::from_slice(body).map_err(|e| PredictError::Malformed(e.to_string()))?;
        if !result.probability.is_finite() || !(0.0..=1.0).contains(&result.probability) {
            return Err(PredictError::Malformed(format!(
                "probability {} outside [0, 1]",
                result.probability
            )));
        }
        Ok(result)
    }

    /// Probability as a whole percentage, as displayed to the user.
    pub fn percent(&self) -> u8 {
        (self.probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Liveness banner served at the service root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}
