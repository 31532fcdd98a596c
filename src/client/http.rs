//! reqwest-backed predictor talking to `{base}/predict`.

use reqwest::{Client, Response};
use tracing::{debug, info};

use crate::{
    client::{
        types::{ErrorBody, PredictionRequest, PredictionResult, ServiceStatus},
        Predictor,
    },
    config::Settings,
    error::{PredictError, PredictResult},
};

/// HTTP client for the prediction service. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: Client,
    base_url: String,
}

impl HttpPredictor {
    pub fn new(base_url: &str) -> PredictResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("heart-predict/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Use a caller-configured reqwest client.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> PredictResult<Self> {
        Self::new(&settings.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    /// Query the service root for its liveness banner.
    pub async fn status(&self) -> PredictResult<ServiceStatus> {
        let url = format!("{}/", self.base_url);
        debug!(%url, "checking prediction service");
        let resp = self.client.get(&url).send().await?;
        let body = success_body(resp).await?;
        serde_json::from_slice(&body).map_err(|e| PredictError::Malformed(e.to_string()))
    }
}

impl Predictor for HttpPredictor {
    async fn predict(&self, request: &PredictionRequest) -> PredictResult<PredictionResult> {
        let url = self.endpoint();
        info!(%url, "posting prediction request");
        let resp = self.client.post(&url).json(request).send().await?;
        let body = success_body(resp).await?;
        let result = PredictionResult::from_slice(&body)?;
        info!(risk_level = %result.risk_level, probability = result.probability, "prediction received");
        Ok(result)
    }
}

/// Return the body of a 2xx response, or map the status to an error.
async fn success_body(resp: Response) -> PredictResult<Vec<u8>> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if status.is_success() {
        return Ok(bytes.to_vec());
    }
    Err(PredictError::Status {
        status: status.as_u16(),
        detail: error_detail(&bytes),
    })
}

fn error_detail(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(message),
        }) => message,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}
