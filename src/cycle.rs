//! The form-to-prediction request cycle.
//!
//! A submission is split in two halves so a host that shares the cycle can
//! overlap requests: [`PredictionCycle::begin_submit`] runs synchronously and
//! hands back a [`Submission`], and [`PredictionCycle::resolve`] applies the
//! network outcome. Only the most recently issued submission may change the
//! state; earlier ones resolving late are dropped.

use tracing::{debug, info, warn};

use crate::{
    client::{PredictionRequest, PredictionResult, Predictor},
    error::PredictResult,
    form::{Field, PatientParameters},
};

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    /// Nothing submitted yet, or a submission is in flight.
    #[default]
    AwaitingInput,
    Ready(PredictionResult),
    Failed { message: String },
}

impl Outcome {
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            Outcome::Ready(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Sequence token identifying one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionId(u64);

/// A submission that has been started but not yet resolved.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: PredictionRequest,
}

#[derive(Debug, Default)]
pub struct PredictionCycle {
    parameters: PatientParameters,
    outcome: Outcome,
    pending: bool,
    latest: u64,
}

impl PredictionCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: PatientParameters) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &PatientParameters {
        &self.parameters
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.outcome.result()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn update_field(&mut self, field: Field, raw: impl Into<String>) {
        self.parameters.set(field, raw);
    }

    pub fn update_named(&mut self, name: &str, raw: impl Into<String>) -> PredictResult<()> {
        self.parameters.set_named(name, raw)
    }

    /// Mark the cycle pending, clear the previous outcome and coerce the
    /// current parameters into a request.
    pub fn begin_submit(&mut self) -> Submission {
        self.pending = true;
        self.outcome = Outcome::AwaitingInput;
        self.latest += 1;
        let id = SubmissionId(self.latest);
        let request = self.parameters.to_request();
        info!(submission = id.0, "submission started");
        Submission { id, request }
    }

    /// Apply the outcome of a submission. Returns `false` when a newer
    /// submission has been issued since and the outcome was discarded.
    pub fn resolve(
        &mut self,
        id: SubmissionId,
        outcome: PredictResult<PredictionResult>,
    ) -> bool {
        if id.0 != self.latest {
            debug!(submission = id.0, latest = self.latest, "discarding stale response");
            return false;
        }
        self.pending = false;
        self.outcome = match outcome {
            Ok(result) => Outcome::Ready(result),
            Err(err) => {
                warn!(submission = id.0, transport = err.is_transport(), %err, "prediction failed");
                Outcome::Failed {
                    message: err.to_string(),
                }
            }
        };
        true
    }

    /// Run one full submission against `predictor`.
    pub async fn submit<P: Predictor>(&mut self, predictor: &P) -> &Outcome {
        let Submission { id, request } = self.begin_submit();
        let response = predictor.predict(&request).await;
        self.resolve(id, response);
        &self.outcome
    }
}
