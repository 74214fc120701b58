pub mod client;
pub mod config;
pub mod errors;
pub mod labels;
pub mod models;
pub mod presentation;
pub mod state;
pub mod tasks;

pub use client::PredictionClient;
pub use config::ClientConfig;
pub use errors::ClientError;
pub use models::{
    Prediction,
    RequestState,
    SelectedSymptoms,
    Symptom,
};
pub use state::{
    ClientState,
    SubmitPolicy,
};
