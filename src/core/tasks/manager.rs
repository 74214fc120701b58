use std::sync::{
    mpsc,
    Arc,
};

use tokio::runtime::Runtime;

use super::{
    TaskHandle,
    TaskResult,
};
use crate::{
    api::PredictionApi,
    core::{
        models::RequestId,
        ClientError,
    },
};

/// Runs network calls on a background runtime; the UI thread collects
/// their results with [`TaskManager::poll_results`].
pub struct TaskManager {
    runtime: Runtime,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("predictor-net")
            .enable_all()
            .build()
            .map_err(|e| ClientError::Runtime(e.to_string()))?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn fetch_symptoms<A>(&self, api: Arc<A>) -> TaskHandle
    where
        A: PredictionApi + Send + Sync + 'static,
    {
        let sender = self.sender.clone();

        let join_handle = self.runtime.spawn(async move {
            let result = api.fetch_symptoms().await;
            let _ = sender.send(TaskResult::SymptomsFetched(result));
        });

        TaskHandle::new(join_handle)
    }

    pub fn predict<A>(&self, api: Arc<A>, request: RequestId, symptoms: Vec<String>) -> TaskHandle
    where
        A: PredictionApi + Send + Sync + 'static,
    {
        let sender = self.sender.clone();

        let join_handle = self.runtime.spawn(async move {
            let result = api.predict(symptoms).await;
            let _ = sender.send(TaskResult::PredictionFetched { request, result });
        });

        TaskHandle::new(join_handle)
    }
}
