use crate::core::{
    models::{
        Prediction,
        RequestId,
    },
    ClientError,
};

#[derive(Debug)]
pub enum TaskResult {
    SymptomsFetched(Result<Vec<String>, ClientError>),
    PredictionFetched { request: RequestId, result: Result<Vec<Prediction>, ClientError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::SymptomsFetched(_) => "symptoms",
            TaskResult::PredictionFetched { .. } => "prediction",
        }
    }
}
