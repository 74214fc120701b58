use std::future::Future;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};
use serde::de::DeserializeOwned;

use super::{
    wire::{
        decode_response,
        PredictRequest,
        PredictResponse,
        SymptomsResponse,
    },
    PredictionApi,
};
use crate::core::{
    models::Prediction,
    ClientConfig,
    ClientError,
};

/// reqwest-backed client for the prediction backend.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    symptoms_url: String,
    predict_url: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("symptom-predictor/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            symptoms_url: config.endpoint("symptoms"),
            predict_url: config.endpoint("predict"),
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    let url = response.url().clone();
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        tracing::warn!("HTTP error {} from {}", status, url);
    }
    decode_response(status, &body)
}

impl PredictionApi for HttpApi {
    fn fetch_symptoms(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send {
        let request = self.client.get(&self.symptoms_url);

        async move {
            let response = request.send().await?;
            let payload: SymptomsResponse = read_json(response).await?;
            Ok(payload.symptoms)
        }
    }

    fn predict(
        &self,
        symptoms: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Prediction>, ClientError>> + Send {
        let request = self.client.post(&self.predict_url).json(&PredictRequest { symptoms });

        async move {
            let response = request.send().await?;
            let payload: PredictResponse = read_json(response).await?;
            Ok(payload.top3_predictions)
        }
    }
}
