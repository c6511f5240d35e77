use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::SavedRound;

/// How many rounds a load asks for.
pub const LOAD_LIMIT: usize = 20;

/// Identifies a stored round for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundKey {
    pub player_name: String,
    pub course: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl From<&SavedRound> for RoundKey {
    fn from(round: &SavedRound) -> Self {
        Self {
            player_name: round.player_name.clone(),
            course: round.course.clone(),
            date: round.date.clone(),
            timestamp: round.timestamp.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoadQuery<'a> {
    player_name: &'a str,
    course: &'a str,
    limit: usize,
}

/// Reply envelope shared by every action.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    scores: Vec<SavedRound>,
}

/// Client for the society's saved-scores endpoint.
///
/// Every call is a single POST of `{"action": ..., <payload fields>}`
/// answered by `{"success": bool, "error"?: string, "scores"?: [...]}`.
pub struct ApiClient {
    http: reqwest::Client,
    url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if no API URL is configured.
    pub fn new(url: Option<&str>) -> Result<Self> {
        let url = match url {
            Some(u) if !u.trim().is_empty() => u.trim().to_string(),
            _ => anyhow::bail!("API URL not configured. Set api_url in the config file."),
        };
        let http = reqwest::Client::builder()
            .user_agent(concat!("clubhouse/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { http, url })
    }

    pub async fn save_round(&self, round: &SavedRound) -> Result<()> {
        self.post("saveScore", round).await?;
        Ok(())
    }

    /// Rounds matching an optional player and course, as the API orders them.
    pub async fn load_rounds(
        &self,
        player: Option<&str>,
        course: Option<&str>,
    ) -> Result<Vec<SavedRound>> {
        let query = LoadQuery {
            player_name: player.unwrap_or(""),
            course: course.unwrap_or(""),
            limit: LOAD_LIMIT,
        };
        Ok(self.post("loadScores", &query).await?.scores)
    }

    pub async fn delete_round(&self, key: &RoundKey) -> Result<()> {
        self.post("deleteScore", key).await?;
        Ok(())
    }

    async fn post<T: Serialize>(&self, action: &str, payload: &T) -> Result<ApiResponse> {
        let body = request_body(action, payload)?;
        tracing::debug!("api: {}", action);

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to reach the scores API ({})", action))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read scores API response")?;
        if !status.is_success() {
            anyhow::bail!("Scores API returned HTTP {} for {}", status, action);
        }

        parse_response(&text)
    }
}

/// Flatten the payload's fields next to the action name.
fn request_body<T: Serialize>(action: &str, payload: &T) -> Result<Value> {
    let mut body = match serde_json::to_value(payload).context("Failed to encode request")? {
        Value::Object(map) => map,
        other => anyhow::bail!("Request payload must be an object, got {}", other),
    };
    body.insert("action".to_string(), Value::String(action.to_string()));
    Ok(Value::Object(body))
}

fn parse_response(text: &str) -> Result<ApiResponse> {
    let response: ApiResponse =
        serde_json::from_str(text).context("Scores API sent an unreadable reply")?;
    if !response.success {
        anyhow::bail!(
            "{}",
            response
                .error
                .as_deref()
                .unwrap_or("Scores API reported a failure")
        );
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url_is_error() {
        let err = ApiClient::new(None).err().unwrap();
        assert!(err.to_string().contains("API URL not configured"));
        assert!(ApiClient::new(Some("  ")).is_err());
    }

    #[test]
    fn test_request_body_flattens_payload() {
        let query = LoadQuery {
            player_name: "Pat",
            course: "",
            limit: LOAD_LIMIT,
        };
        let body = request_body("loadScores", &query).unwrap();
        assert_eq!(body["action"], "loadScores");
        assert_eq!(body["playerName"], "Pat");
        assert_eq!(body["limit"], 20);
    }

    #[test]
    fn test_request_body_rejects_non_object() {
        assert!(request_body("saveScore", &42).is_err());
    }

    #[test]
    fn test_delete_key_omits_missing_timestamp() {
        let key = RoundKey {
            player_name: "Pat".to_string(),
            course: "Trim".to_string(),
            date: "2025-06-14".to_string(),
            timestamp: None,
        };
        let body = request_body("deleteScore", &key).unwrap();
        assert!(body.get("timestamp").is_none());
        assert_eq!(body["date"], "2025-06-14");
    }

    #[test]
    fn test_parse_success_with_scores() {
        let text = r#"{"success": true, "scores": []}"#;
        assert!(parse_response(text).unwrap().scores.is_empty());
    }

    #[test]
    fn test_parse_failure_message() {
        let text = r#"{"success": false, "error": "Sheet locked"}"#;
        let err = parse_response(text).unwrap_err();
        assert_eq!(err.to_string(), "Sheet locked");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_response("<html>").is_err());
    }
}
