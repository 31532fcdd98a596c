//! Editable text record of the clinical parameters and its numeric coercion.

use tracing::warn;

use crate::{client::PredictionRequest, error::PredictResult, form::Field};

/// The form state: one raw string per field, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientParameters {
    values: [String; 13],
}

impl Default for PatientParameters {
    fn default() -> Self {
        Self {
            values: Field::ALL.map(|field| field.default_value().to_string()),
        }
    }
}

impl PatientParameters {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Replace one field's text verbatim. No validation happens here.
    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        self.values[field.index()] = raw.into();
    }

    /// Like [`set`](Self::set) but keyed by wire name.
    pub fn set_named(&mut self, name: &str, raw: impl Into<String>) -> PredictResult<()> {
        let field: Field = name.parse()?;
        self.set(field, raw);
        Ok(())
    }

    /// Iterate `(field, text)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Coerce every field to a number. Unparseable or non-finite text
    /// becomes `None`, which serializes as JSON `null`.
    pub fn to_request(&self) -> PredictionRequest {
        let request = PredictionRequest::from_fn(|field| coerce(self.get(field)));
        let missing = request.missing();
        if !missing.is_empty() {
            let names = missing.iter().map(|f| f.key()).collect::<Vec<_>>();
            warn!(fields = ?names, "fields did not coerce to a number; forwarding null");
        }
        request
    }
}

/// Numeric coercion used at submission time.
pub fn coerce(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_accepts_decimal_text() {
        assert_eq!(coerce("60"), Some(60.0));
        assert_eq!(coerce(" 2.5 "), Some(2.5));
        assert_eq!(coerce("-1"), Some(-1.0));
    }

    #[test]
    fn coerce_rejects_blank_garbage_and_non_finite() {
        assert_eq!(coerce(""), None);
        assert_eq!(coerce("abc"), None);
        assert_eq!(coerce("12abc"), None);
        assert_eq!(coerce("inf"), None);
        assert_eq!(coerce("NaN"), None);
    }

    #[test]
    fn set_named_rejects_unknown_without_mutation() {
        let mut params = PatientParameters::default();
        let before = params.clone();
        assert!(params.set_named("weight", "80").is_err());
        assert_eq!(params, before);
    }

    #[test]
    fn stored_text_is_verbatim() {
        let mut params = PatientParameters::default();
        params.set(Field::Chol, "  not a number ");
        assert_eq!(params.get(Field::Chol), "  not a number ");
    }
}
