//! Prediction request/response models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use healthscore_core::features::{FEATURE_COUNT, FEATURE_LAYOUT};
use healthscore_core::FeatureVector;

use crate::error::AppError;

/// Body of `POST /predict`.
///
/// Fields are captured as raw JSON values so validation can report exactly
/// which one is missing, null, or not a number instead of a generic
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "BMI")]
    pub bmi: Option<Value>,

    #[serde(rename = "Exercise_Frequency")]
    pub exercise_frequency: Option<Value>,

    #[serde(rename = "Sleep_Hours")]
    pub sleep_hours: Option<Value>,

    #[serde(rename = "Smoking_Status")]
    pub smoking_status: Option<Value>,
}

impl PredictRequest {
    /// Check presence and numeric convertibility of all four fields, in
    /// layout order, reporting the first offending field by name.
    pub fn validate(&self) -> Result<FeatureVector, AppError> {
        let fields = [
            &self.bmi,
            &self.exercise_frequency,
            &self.sleep_hours,
            &self.smoking_status,
        ];

        let mut values = [0.0f64; FEATURE_COUNT];
        for (i, (name, field)) in FEATURE_LAYOUT.iter().zip(fields).enumerate() {
            values[i] = parse_field(name, field)?;
        }

        Ok(FeatureVector::from_values(values))
    }
}

fn parse_field(name: &str, value: &Option<Value>) -> Result<f64, AppError> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(AppError::Validation(format!(
                "Field '{}' is required and must not be null.",
                name
            )));
        }
        Some(v) => v,
    };

    // JSON numbers and numeric strings are accepted, nothing else.
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        AppError::Validation(format!("Value of '{}' must be a valid number.", name))
    })
}

/// Successful prediction response: input echo plus the clipped score.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(rename = "BMI")]
    pub bmi: f64,

    #[serde(rename = "Exercise_Frequency")]
    pub exercise_frequency: f64,

    #[serde(rename = "Sleep_Hours")]
    pub sleep_hours: f64,

    #[serde(rename = "Smoking_Status")]
    pub smoking_status: f64,

    pub health_score: f64,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> PredictRequest {
        serde_json::from_value(body).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "BMI": 23.5,
            "Exercise_Frequency": 4,
            "Sleep_Hours": 7,
            "Smoking_Status": 1
        })
    }

    #[test]
    fn valid_request_builds_a_feature_vector() {
        let v = request(valid_body()).validate().unwrap();
        assert_eq!(v.values, [23.5, 4.0, 7.0, 1.0]);
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let mut body = valid_body();
        body["BMI"] = json!("23.5");
        let v = request(body).validate().unwrap();
        assert_eq!(v.values[0], 23.5);
    }

    #[test]
    fn each_missing_field_is_reported_by_name() {
        for name in FEATURE_LAYOUT {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(*name);

            let err = request(body).validate().unwrap_err();
            match err {
                AppError::Validation(msg) => assert!(msg.contains(name), "message: {}", msg),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn each_null_field_is_reported_by_name() {
        for name in FEATURE_LAYOUT {
            let mut body = valid_body();
            body[*name] = Value::Null;

            let err = request(body).validate().unwrap_err();
            match err {
                AppError::Validation(msg) => assert!(msg.contains(name)),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        for bad in [json!("high"), json!(true), json!([1, 2]), json!({"v": 1})] {
            let mut body = valid_body();
            body["Sleep_Hours"] = bad;

            let err = request(body).validate().unwrap_err();
            match err {
                AppError::Validation(msg) => assert!(msg.contains("Sleep_Hours")),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}
