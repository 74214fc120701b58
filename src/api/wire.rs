use serde::{
    de::DeserializeOwned,
    Deserialize,
    Serialize,
};

use crate::core::{
    models::Prediction,
    ClientError,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}

/// The ranked top-3 shape is the only accepted predict response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub top3_predictions: Vec<Prediction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a completed HTTP exchange to the payload or a `ClientError`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error }) if !error.trim().is_empty() => error,
            _ => format!("Prediction service returned HTTP {status}"),
        };
        return Err(ClientError::Server { status, message });
    }

    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_top3() {
        let body = r#"{"top3_predictions":[
            {"disease":"flu","probability":0.82},
            {"disease":"cold","probability":0.45},
            {"disease":"covid","probability":0.12}
        ]}"#;

        let response: PredictResponse = decode_response(200, body).unwrap();
        let diseases: Vec<_> =
            response.top3_predictions.iter().map(|p| p.disease.as_str()).collect();
        assert_eq!(diseases, vec!["flu", "cold", "covid"]);
        assert_eq!(response.top3_predictions[0].probability, 0.82);
    }

    #[test]
    fn test_single_disease_shape_is_rejected() {
        let result = decode_response::<PredictResponse>(200, r#"{"predicted_disease":"flu"}"#);
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_server_error_message_is_verbatim() {
        let result = decode_response::<PredictResponse>(
            400,
            r#"{"error":"Please provide a list of symptoms"}"#,
        );
        match result {
            Err(ClientError::Server { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Please provide a list of symptoms");
            }
            other => panic!("Expected server error, got {:?}", other),
        }
    }

    #[test]
    fn test_server_error_without_body() {
        let result = decode_response::<SymptomsResponse>(502, "<html>Bad Gateway</html>");
        match result {
            Err(e) => assert_eq!(e.to_string(), "Prediction service returned HTTP 502"),
            Ok(_) => panic!("Expected an error"),
        }
    }
}
