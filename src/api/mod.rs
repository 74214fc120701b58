//! Backend contract: `GET /symptoms` and `POST /predict`.

mod http;
pub mod wire;

use std::future::Future;

pub use http::HttpApi;

use crate::core::{
    models::Prediction,
    ClientError,
};

pub trait PredictionApi {
    /// Raw symptom identifiers, in server order.
    fn fetch_symptoms(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;

    /// Ranked predictions, in server order.
    fn predict(
        &self,
        symptoms: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Prediction>, ClientError>> + Send;
}
