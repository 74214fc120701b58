use std::sync::Arc;

use super::{
    models::{
        RequestId,
        SelectedSymptoms,
    },
    state::{
        ClientEvent,
        ClientState,
        SubmitPolicy,
        Transition,
    },
    tasks::{
        TaskHandle,
        TaskManager,
        TaskResult,
    },
    ClientError,
};
use crate::api::PredictionApi;

/// Owns the session state and drives the backend calls that change it.
pub struct PredictionClient<A> {
    api: Arc<A>,
    state: ClientState,
    task_manager: TaskManager,
    in_flight: Option<TaskHandle>,
    symptoms_requested: bool,
    next_request: u64,
}

impl<A> PredictionClient<A>
where
    A: PredictionApi + Send + Sync + 'static,
{
    pub fn new(api: A, policy: SubmitPolicy) -> Result<Self, ClientError> {
        Ok(Self {
            api: Arc::new(api),
            state: ClientState::new(policy),
            task_manager: TaskManager::new()?,
            in_flight: None,
            symptoms_requested: false,
            next_request: 0,
        })
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn is_busy(&self) -> bool {
        self.state.pending_request().is_some() || self.state.symptoms_state().is_loading()
    }

    /// Fetches the symptom list. Only the first call per session does anything.
    pub fn load_symptoms(&mut self) {
        if self.symptoms_requested {
            tracing::debug!("Symptom list already requested this session");
            return;
        }
        self.symptoms_requested = true;

        tracing::info!("Loading symptom list");
        self.dispatch(ClientEvent::SymptomsRequested);
        // Symptom fetches are never cancelled, so the handle is not kept.
        let _ = self.task_manager.fetch_symptoms(Arc::clone(&self.api));
    }

    /// Sends `selected` for prediction. Empty selections fail locally and
    /// never reach the network.
    pub fn submit_prediction(
        &mut self,
        selected: &SelectedSymptoms,
    ) -> Result<RequestId, ClientError> {
        if selected.is_empty() {
            if self.state.can_submit() {
                self.cancel_in_flight();
            }
            let error = ClientError::EmptySelection;
            self.dispatch(ClientEvent::PredictionFailed {
                request: None,
                message: error.to_string(),
            });
            return Err(error);
        }

        if !self.state.can_submit() {
            tracing::debug!("Submission rejected, request already pending");
            return Err(ClientError::SubmissionPending);
        }

        self.cancel_in_flight();

        self.next_request += 1;
        let request = RequestId(self.next_request);
        let symptoms = selected.to_vec();

        tracing::info!("Submitting prediction {} with {} symptoms", request, symptoms.len());
        self.dispatch(ClientEvent::PredictionRequested { request, symptoms: symptoms.clone() });
        self.in_flight = Some(self.task_manager.predict(Arc::clone(&self.api), request, symptoms));

        Ok(request)
    }

    /// Applies finished network results. Returns true if anything arrived.
    pub fn poll(&mut self) -> bool {
        let results = self.task_manager.poll_results();
        let changed = !results.is_empty();

        for result in results {
            tracing::debug!("Task finished: {}", result.task_type());
            let event = match result {
                TaskResult::SymptomsFetched(Ok(symptoms)) => {
                    tracing::info!("Loaded {} symptoms", symptoms.len());
                    ClientEvent::SymptomsLoaded { symptoms }
                }
                TaskResult::SymptomsFetched(Err(e)) => {
                    tracing::warn!("Failed to load symptoms: {:?}", e);
                    ClientEvent::SymptomsFailed { message: e.to_string() }
                }
                TaskResult::PredictionFetched { request, result: Ok(predictions) } => {
                    tracing::info!("Prediction {} returned {} results", request, predictions.len());
                    ClientEvent::PredictionSucceeded { request, predictions }
                }
                TaskResult::PredictionFetched { request, result: Err(e) } => {
                    tracing::warn!("Prediction {} failed: {:?}", request, e);
                    ClientEvent::PredictionFailed { request: Some(request), message: e.to_string() }
                }
            };
            self.dispatch(event);
        }

        if self.state.pending_request().is_none() {
            self.in_flight = None;
        }

        changed
    }

    fn dispatch(&mut self, event: ClientEvent) {
        if let Transition::Ignored(reason) = self.state.reduce(event) {
            tracing::debug!("Event ignored: {:?}", reason);
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                if let Some(request) = self.state.pending_request() {
                    tracing::info!("Cancelling prediction {}", request);
                }
                handle.cancel();
            }
        }
    }
}
