//! Remote mutation client for `joinWaitlist`.
//!
//! The backend is a Convex deployment. Mutations are called over its HTTP
//! API: `POST {deployment}/api/mutation` with the function path and args,
//! answered by `{"status":"success",...}` or `{"status":"error",...}`.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::wizard::WaitlistEntry;

/// Any way a `joinWaitlist` call can fail. The wizard treats them all the
/// same; the variants only make the console log useful.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("mutation failed: {0}")]
    Remote(String),

    #[error("unreadable response: {0}")]
    Malformed(String),
}

impl From<gloo_net::Error> for SubmitError {
    fn from(e: gloo_net::Error) -> Self {
        SubmitError::Transport(e.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct MutationRequest<'a> {
    path: &'a str,
    args: &'a WaitlistEntry,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum MutationResponse {
    Success {
        #[serde(default)]
        value: serde_json::Value,
    },
    Error {
        #[serde(rename = "errorMessage", default)]
        error_message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistClient {
    deployment_url: String,
    function_path: String,
}

impl WaitlistClient {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            deployment_url: config.deployment_url.trim_end_matches('/').to_string(),
            function_path: config.join_waitlist_path.clone(),
        }
    }

    pub fn mutation_url(&self) -> String {
        format!("{}/api/mutation", self.deployment_url)
    }

    pub fn request_body<'a>(&'a self, entry: &'a WaitlistEntry) -> MutationRequest<'a> {
        MutationRequest {
            path: &self.function_path,
            args: entry,
            format: "json",
        }
    }

    /// Fire-and-await: resolves once the backend has accepted or rejected
    /// the entry. The returned value is not used.
    pub async fn join_waitlist(&self, entry: &WaitlistEntry) -> Result<(), SubmitError> {
        let resp = Request::post(&self.mutation_url())
            .json(&self.request_body(entry))?
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        parse_mutation_response(status, &body).map(|_| ())
    }
}

/// Interpret a mutation response. Convex reports function errors with a
/// JSON body on a non-2xx status, so the body wins over the status code
/// when it can be read.
pub fn parse_mutation_response(status: u16, body: &str) -> Result<serde_json::Value, SubmitError> {
    match serde_json::from_str::<MutationResponse>(body) {
        Ok(MutationResponse::Success { value }) if (200..300).contains(&status) => Ok(value),
        Ok(MutationResponse::Success { .. }) => Err(SubmitError::Status(status)),
        Ok(MutationResponse::Error { error_message }) => Err(SubmitError::Remote(error_message)),
        Err(_) if !(200..300).contains(&status) => Err(SubmitError::Status(status)),
        Err(e) => Err(SubmitError::Malformed(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WaitlistClient {
        WaitlistClient::new(&SiteConfig {
            deployment_url: "https://happy-otter-123.convex.cloud/".to_string(),
            join_waitlist_path: "myFunctions:joinWaitlist".to_string(),
        })
    }

    #[test]
    fn test_mutation_url_strips_trailing_slash() {
        assert_eq!(
            client().mutation_url(),
            "https://happy-otter-123.convex.cloud/api/mutation"
        );
    }

    #[test]
    fn test_request_body_wraps_entry_as_args() {
        let entry = WaitlistEntry {
            email: "a@b.com".to_string(),
            name: Some("Ada".to_string()),
            phone: None,
            socials: None,
        };
        let c = client();
        let body = serde_json::to_value(c.request_body(&entry)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "path": "myFunctions:joinWaitlist",
                "args": { "email": "a@b.com", "name": "Ada" },
                "format": "json"
            })
        );
    }

    #[test]
    fn test_success_response() {
        let body = r#"{"status":"success","value":null,"logLines":[]}"#;
        assert_eq!(parse_mutation_response(200, body), Ok(serde_json::Value::Null));
    }

    #[test]
    fn test_error_response_carries_message() {
        let body = r#"{"status":"error","errorMessage":"Already on the list","errorData":{}}"#;
        assert_eq!(
            parse_mutation_response(560, body),
            Err(SubmitError::Remote("Already on the list".to_string()))
        );
    }

    #[test]
    fn test_non_json_error_page_reports_status() {
        assert_eq!(
            parse_mutation_response(502, "<html>Bad Gateway</html>"),
            Err(SubmitError::Status(502))
        );
    }

    #[test]
    fn test_garbage_on_ok_status_is_malformed() {
        assert!(matches!(
            parse_mutation_response(200, "not json"),
            Err(SubmitError::Malformed(_))
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SubmitError::Status(500).to_string(), "server answered HTTP 500");
        assert_eq!(
            SubmitError::Remote("nope".to_string()).to_string(),
            "mutation failed: nope"
        );
    }
}
