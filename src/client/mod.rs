//! Transport to the remote prediction service.

pub mod http;
pub mod types;

use std::future::Future;

pub use http::HttpPredictor;
pub use types::{PredictionRequest, PredictionResult, RiskLevel, ServiceStatus};

use crate::error::PredictResult;

/// Anything that can turn a coerced request into a prediction.
pub trait Predictor {
    fn predict(
        &self,
        request: &PredictionRequest,
    ) -> impl Future<Output = PredictResult<PredictionResult>> + Send;
}

