//! Client for a remote heart-disease risk prediction service.

pub mod cli;
pub mod client;
pub mod config;
pub mod cycle;
pub mod error;
pub mod form;
pub mod logging;
pub mod view;

pub use client::{HttpPredictor, PredictionRequest, PredictionResult, Predictor, RiskLevel};
pub use cycle::{Outcome, PredictionCycle, Submission, SubmissionId};
pub use error::{PredictError, PredictResult};
pub use form::{Field, PatientParameters};
