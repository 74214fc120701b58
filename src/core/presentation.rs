use super::{
    labels::display_label,
    models::Prediction,
};

const HIGH_ABOVE: i64 = 70;
const MEDIUM_ABOVE: i64 = 40;

/// Display emphasis only; never used to filter or reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTier {
    High,
    Medium,
    Low,
}

impl SeverityTier {
    pub fn from_percentage(percent: i64) -> Self {
        if percent > HIGH_ABOVE {
            SeverityTier::High
        } else if percent > MEDIUM_ABOVE {
            SeverityTier::Medium
        } else {
            SeverityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::High => "high",
            SeverityTier::Medium => "medium",
            SeverityTier::Low => "low",
        }
    }
}

/// Probability scaled to a whole percentage, rounded half away from zero.
pub fn percentage(probability: f64) -> i64 {
    (probability * 100.0).round() as i64
}

pub fn format_percentage(probability: f64) -> String {
    format!("{}%", percentage(probability))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub rank: usize,
    pub label: String,
    pub percent: i64,
    pub confidence: String,
    pub tier: SeverityTier,
}

impl PredictionRow {
    pub fn new(rank: usize, prediction: &Prediction) -> Self {
        let percent = percentage(prediction.probability);
        Self {
            rank,
            label: display_label(&prediction.disease),
            percent,
            confidence: format!("{percent}%"),
            tier: SeverityTier::from_percentage(percent),
        }
    }
}

/// First `max_results` predictions in the order the server sent them.
pub fn prediction_rows(predictions: &[Prediction], max_results: usize) -> Vec<PredictionRow> {
    predictions
        .iter()
        .take(max_results)
        .enumerate()
        .map(|(i, prediction)| PredictionRow::new(i + 1, prediction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(disease: &str, probability: f64) -> Prediction {
        Prediction { disease: disease.to_string(), probability }
    }

    #[test]
    fn test_percentage_rendering() {
        assert_eq!(format_percentage(0.734), "73%");
        assert_eq!(format_percentage(1.0), "100%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(0.125), "13%");
    }

    #[test]
    fn test_tier_boundaries() {
        let tier = |p: f64| SeverityTier::from_percentage(percentage(p));

        assert_eq!(tier(0.70), SeverityTier::Medium);
        assert_eq!(tier(0.71), SeverityTier::High);
        assert_eq!(tier(0.41), SeverityTier::Medium);
        assert_eq!(tier(0.40), SeverityTier::Low);
        assert_eq!(tier(0.0), SeverityTier::Low);
        assert_eq!(tier(1.0), SeverityTier::High);
    }

    #[test]
    fn test_rows_keep_server_order() {
        // Deliberately unsorted: the client must not reorder.
        let predictions = vec![
            prediction("common_cold", 0.2),
            prediction("flu", 0.9),
            prediction("covid", 0.5),
        ];

        let rows = prediction_rows(&predictions, 3);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Common Cold", "Flu", "Covid"]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rows_truncate_to_max_results() {
        let predictions =
            vec![prediction("flu", 0.82), prediction("cold", 0.45), prediction("covid", 0.12)];

        let rows = prediction_rows(&predictions, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].confidence, "45%");
        assert!(prediction_rows(&predictions, 0).is_empty());
    }
}
