use serde::{Deserialize, Serialize};

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CloneEventRequest {
    pub source_event_id : i64,
    pub target_user_id  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CloneEventResponse {
    pub success: bool,
    pub new_event_id: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewInstall {
    pub event_id: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct StatusResponse {
    pub status: ResponseStatus,
}

impl StatusResponse {
    pub const fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// Error message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_event_request_from_json() {
        let req: CloneEventRequest =
            serde_json::from_str(r#"{"source_event_id":1,"target_user_id":2}"#).unwrap();
        assert_eq!(1, req.source_event_id);
        assert_eq!(2, req.target_user_id);
    }

    #[test]
    fn status_response_to_json() {
        assert_eq!(
            r#"{"status":"success"}"#,
            serde_json::to_string(&StatusResponse::success()).unwrap()
        );
    }

    #[test]
    fn clone_event_response_to_json() {
        let res = CloneEventResponse {
            success: true,
            new_event_id: 42,
        };
        assert_eq!(
            r#"{"success":true,"new_event_id":42}"#,
            serde_json::to_string(&res).unwrap()
        );
    }
}
