use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfTheDayResponse {
    /// Absent from plain `{"numberOfTheDay": n}` seed services.
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<NumberOfTheDayError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_the_day: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NumberOfTheDayError {
    InvalidDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DateQueryParam {
    pub ds: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveTargetResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<TargetResolutionErrorCode>,
    pub is_loading: bool,
    pub has_error: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TargetResolutionErrorCode {
    ResolutionFailed,
}
