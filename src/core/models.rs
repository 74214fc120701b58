use std::{
    collections::BTreeSet,
    fmt,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::labels::{
    display_label,
    normalize_identifier,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symptom {
    pub id: String,
    pub label: String,
}

impl Symptom {
    /// Returns `None` for identifiers that normalize to nothing.
    pub fn from_identifier(raw: &str) -> Option<Self> {
        let id = normalize_identifier(raw);
        if id.is_empty() {
            return None;
        }
        let label = display_label(&id);
        Some(Self { id, label })
    }
}

/// Symptom identifiers chosen for the next submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedSymptoms {
    ids: BTreeSet<String>,
}

impl SelectedSymptoms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: &str) -> bool {
        let id = normalize_identifier(id);
        !id.is_empty() && self.ids.insert(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.insert(id);
        }
    }

    /// Replaces the whole selection.
    pub fn replace<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ids.clear();
        self.extend(ids);
    }

    pub fn extend<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.insert(id.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectedSymptoms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = Self::new();
        selected.extend(iter);
        selected
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    pub probability: f64,
}

/// Lifecycle of one async operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symptom_from_identifier() {
        let symptom = Symptom::from_identifier("sore_throat").unwrap();
        assert_eq!(symptom.id, "sore_throat");
        assert_eq!(symptom.label, "Sore Throat");

        let symptom = Symptom::from_identifier(" Skin Rash ").unwrap();
        assert_eq!(symptom.id, "skin_rash");

        assert!(Symptom::from_identifier("  ").is_none());
    }

    #[test]
    fn test_selection_edits() {
        let mut selected = SelectedSymptoms::new();
        assert!(selected.is_empty());

        assert!(selected.insert("Fever"));
        assert!(!selected.insert("fever"));
        assert!(!selected.insert(" "));
        selected.toggle("cough");
        assert!(selected.contains("cough"));
        selected.toggle("cough");
        assert!(!selected.contains("cough"));

        selected.replace(["headache", "nausea"]);
        assert_eq!(selected.to_vec(), vec!["headache".to_string(), "nausea".to_string()]);

        selected.clear();
        assert_eq!(selected.len(), 0);
    }
}
