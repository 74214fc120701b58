//! Client session state and its transition function.
//!
//! All UI-visible state lives in [`ClientState`] and only changes through
//! [`ClientState::reduce`], one [`ClientEvent`] at a time.

use serde::{
    Deserialize,
    Serialize,
};

use super::models::{
    Prediction,
    RequestId,
    RequestState,
    SelectedSymptoms,
    Symptom,
};

/// What happens when the user submits while a prediction is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    #[default]
    DisableWhilePending,
    CancelPrevious,
}

impl SubmitPolicy {
    pub const ALL: [SubmitPolicy; 2] =
        [SubmitPolicy::DisableWhilePending, SubmitPolicy::CancelPrevious];

    pub fn label(&self) -> &'static str {
        match self {
            SubmitPolicy::DisableWhilePending => "Disable submit while pending",
            SubmitPolicy::CancelPrevious => "Cancel previous request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    SymptomsRequested,
    SymptomsLoaded { symptoms: Vec<String> },
    SymptomsFailed { message: String },
    PredictionRequested { request: RequestId, symptoms: Vec<String> },
    PredictionSucceeded { request: RequestId, predictions: Vec<Prediction> },
    /// `request` is `None` for a submission rejected before reaching the network.
    PredictionFailed { request: Option<RequestId>, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A prediction is pending and the policy forbids overlap.
    Busy,
    /// The response belongs to a superseded request.
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Default)]
pub struct ClientState {
    policy: SubmitPolicy,
    symptoms: Vec<Symptom>,
    symptoms_state: RequestState,
    predictions: Vec<Prediction>,
    prediction_state: RequestState,
    pending: Option<RequestId>,
    last_submitted: Vec<String>,
    validation: Option<String>,
}

impl ClientState {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn symptoms_state(&self) -> &RequestState {
        &self.symptoms_state
    }

    /// Ranked as received from the server.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn prediction_state(&self) -> &RequestState {
        &self.prediction_state
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn last_submitted(&self) -> &[String] {
        &self.last_submitted
    }

    /// Latest local rejection. Cleared by the next accepted submission.
    pub fn validation_message(&self) -> Option<&str> {
        self.validation.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        match self.policy {
            SubmitPolicy::DisableWhilePending => self.pending.is_none(),
            SubmitPolicy::CancelPrevious => true,
        }
    }

    pub fn is_known_symptom(&self, id: &str) -> bool {
        self.symptoms.iter().any(|s| s.id == id)
    }

    /// Selected identifiers missing from the fetched symptom list.
    pub fn unknown_symptoms<'a>(&self, selected: &'a SelectedSymptoms) -> Vec<&'a str> {
        selected.iter().filter(|id| !self.is_known_symptom(id)).collect()
    }

    pub fn reduce(&mut self, event: ClientEvent) -> Transition {
        match event {
            ClientEvent::SymptomsRequested => {
                self.symptoms_state = RequestState::Loading;
            }

            ClientEvent::SymptomsLoaded { symptoms } => {
                let mut loaded: Vec<Symptom> = Vec::with_capacity(symptoms.len());
                for symptom in symptoms.iter().filter_map(|raw| Symptom::from_identifier(raw)) {
                    if !loaded.iter().any(|s| s.id == symptom.id) {
                        loaded.push(symptom);
                    }
                }
                self.symptoms = loaded;
                self.symptoms_state = RequestState::Success;
            }

            ClientEvent::SymptomsFailed { message } => {
                self.symptoms.clear();
                self.symptoms_state = RequestState::Error(message);
            }

            ClientEvent::PredictionRequested { request, symptoms } => {
                if !self.can_submit() {
                    return Transition::Ignored(IgnoreReason::Busy);
                }
                self.pending = Some(request);
                self.last_submitted = symptoms;
                self.validation = None;
                self.predictions.clear();
                self.prediction_state = RequestState::Loading;
            }

            ClientEvent::PredictionSucceeded { request, predictions } => {
                if self.pending != Some(request) {
                    return Transition::Ignored(IgnoreReason::Stale);
                }
                self.pending = None;
                self.predictions = predictions;
                self.prediction_state = RequestState::Success;
            }

            ClientEvent::PredictionFailed { request: Some(request), message } => {
                if self.pending != Some(request) {
                    return Transition::Ignored(IgnoreReason::Stale);
                }
                self.pending = None;
                self.predictions.clear();
                self.prediction_state = RequestState::Error(message);
            }

            ClientEvent::PredictionFailed { request: None, message } => {
                // A pending request that may not be superseded keeps running.
                if self.can_submit() {
                    self.pending = None;
                    self.predictions.clear();
                    self.prediction_state = RequestState::Error(message.clone());
                }
                self.validation = Some(message);
            }
        }

        Transition::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(disease: &str, probability: f64) -> Prediction {
        Prediction { disease: disease.to_string(), probability }
    }

    fn requested(id: u64) -> ClientEvent {
        ClientEvent::PredictionRequested {
            request: RequestId(id),
            symptoms: vec!["fever".to_string()],
        }
    }

    #[test]
    fn test_symptom_loading() {
        let mut state = ClientState::default();
        state.reduce(ClientEvent::SymptomsRequested);
        assert!(state.symptoms_state().is_loading());

        state.reduce(ClientEvent::SymptomsLoaded {
            symptoms: vec![
                "sore_throat".to_string(),
                "fever".to_string(),
                " ".to_string(),
                "Fever".to_string(),
            ],
        });

        assert_eq!(state.symptoms_state(), &RequestState::Success);
        let ids: Vec<_> = state.symptoms().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["sore_throat", "fever"]);
        assert_eq!(state.symptoms()[0].label, "Sore Throat");
    }

    #[test]
    fn test_symptom_failure_leaves_list_empty() {
        let mut state = ClientState::default();
        state.reduce(ClientEvent::SymptomsLoaded { symptoms: vec!["fever".to_string()] });
        state.reduce(ClientEvent::SymptomsFailed {
            message: "Cannot reach the prediction service".to_string(),
        });

        assert!(state.symptoms().is_empty());
        assert_eq!(
            state.symptoms_state().error(),
            Some("Cannot reach the prediction service")
        );
    }

    #[test]
    fn test_prediction_success_replaces_list() {
        let mut state = ClientState::default();
        assert_eq!(state.reduce(requested(1)), Transition::Applied);
        assert!(state.prediction_state().is_loading());
        assert_eq!(state.last_submitted(), ["fever".to_string()]);

        let predictions = vec![prediction("flu", 0.82), prediction("cold", 0.45)];
        let transition = state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(1),
            predictions: predictions.clone(),
        });

        assert_eq!(transition, Transition::Applied);
        assert_eq!(state.predictions(), predictions.as_slice());
        assert_eq!(state.pending_request(), None);
    }

    #[test]
    fn test_prediction_failure_clears_predictions() {
        let mut state = ClientState::default();
        state.reduce(requested(1));
        state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(1),
            predictions: vec![prediction("flu", 0.82)],
        });

        state.reduce(requested(2));
        state.reduce(ClientEvent::PredictionFailed {
            request: Some(RequestId(2)),
            message: "boom".to_string(),
        });

        assert!(state.predictions().is_empty());
        assert_eq!(state.prediction_state().error(), Some("boom"));

        // Next attempt clears the error.
        state.reduce(requested(3));
        assert_eq!(state.prediction_state(), &RequestState::Loading);
    }

    #[test]
    fn test_disable_while_pending_rejects_overlap() {
        let mut state = ClientState::new(SubmitPolicy::DisableWhilePending);
        state.reduce(requested(1));
        assert!(!state.can_submit());

        assert_eq!(state.reduce(requested(2)), Transition::Ignored(IgnoreReason::Busy));
        assert_eq!(state.pending_request(), Some(RequestId(1)));
    }

    #[test]
    fn test_cancel_previous_ignores_stale_responses() {
        let mut state = ClientState::new(SubmitPolicy::CancelPrevious);
        state.reduce(requested(1));
        assert!(state.can_submit());
        assert_eq!(state.reduce(requested(2)), Transition::Applied);

        let stale = state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(1),
            predictions: vec![prediction("stale", 0.9)],
        });
        assert_eq!(stale, Transition::Ignored(IgnoreReason::Stale));
        assert!(state.prediction_state().is_loading());

        state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(2),
            predictions: vec![prediction("fresh", 0.6)],
        });
        assert_eq!(state.predictions()[0].disease, "fresh");
    }

    #[test]
    fn test_local_validation_failure() {
        let mut state = ClientState::default();
        state.reduce(requested(1));
        state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(1),
            predictions: vec![prediction("flu", 0.82)],
        });

        state.reduce(ClientEvent::PredictionFailed {
            request: None,
            message: "Please select at least one symptom".to_string(),
        });
        assert!(state.predictions().is_empty());
        assert_eq!(state.prediction_state().error(), Some("Please select at least one symptom"));
        assert_eq!(state.validation_message(), Some("Please select at least one symptom"));

        state.reduce(requested(2));
        assert_eq!(state.validation_message(), None);
    }

    #[test]
    fn test_local_validation_keeps_pending_request() {
        let mut state = ClientState::new(SubmitPolicy::DisableWhilePending);
        state.reduce(requested(1));

        let transition = state.reduce(ClientEvent::PredictionFailed {
            request: None,
            message: "Please select at least one symptom".to_string(),
        });

        assert_eq!(transition, Transition::Applied);
        assert_eq!(state.validation_message(), Some("Please select at least one symptom"));
        assert_eq!(state.pending_request(), Some(RequestId(1)));
        assert!(state.prediction_state().is_loading());

        state.reduce(ClientEvent::PredictionSucceeded {
            request: RequestId(1),
            predictions: vec![prediction("flu", 0.82)],
        });
        assert_eq!(state.predictions()[0].disease, "flu");
    }

    #[test]
    fn test_hyphenated_identifiers_survive_loading() {
        let mut state = ClientState::default();
        state.reduce(ClientEvent::SymptomsLoaded {
            symptoms: vec!["burning-micturition".to_string(), "skin_rash".to_string()],
        });

        let mut selected = SelectedSymptoms::new();
        for symptom in state.symptoms() {
            selected.toggle(&symptom.id);
        }
        assert_eq!(
            selected.to_vec(),
            vec!["burning-micturition".to_string(), "skin_rash".to_string()]
        );
    }

    #[test]
    fn test_unknown_symptoms() {
        let mut state = ClientState::default();
        state.reduce(ClientEvent::SymptomsLoaded {
            symptoms: vec!["fever".to_string(), "cough".to_string()],
        });

        let selected: SelectedSymptoms = ["fever", "purple_toes"].into_iter().collect();
        assert_eq!(state.unknown_symptoms(&selected), vec!["purple_toes"]);
    }

    #[test]
    fn test_events_serialize() {
        let event = ClientEvent::PredictionSucceeded {
            request: RequestId(7),
            predictions: vec![prediction("flu", 0.5)],
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"PredictionSucceeded\""));
        let back: ClientEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
