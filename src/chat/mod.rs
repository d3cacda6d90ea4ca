//! Orchestrates one chat turn: intent extraction then place search

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::AppConfig;
use crate::google::{PlacesClient, SearchOutcome};
use crate::openai::{MapsIntent, extract_intent};

/// Final payload for one chat message. The raw message is echoed back
/// as `query`; `resolved_location` is null when the extractor found no
/// location; the search outcome fields are flattened in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub query: String,
    pub resolved_location: Option<String>,
    #[serde(flatten)]
    pub outcome: SearchOutcome,
}

fn search_query(intent: &MapsIntent) -> String {
    match &intent.location {
        Some(location) => format!("{} in {}", intent.query, location),
        None => intent.query.clone(),
    }
}

/// Run the full pipeline for a single message. Extraction failures
/// propagate to the caller; search failures are reported in-band by
/// the outcome.
pub async fn process_chat(
    config: &AppConfig,
    places: &PlacesClient,
    message: &str,
) -> Result<ChatResponse> {
    let intent = extract_intent(
        message,
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
    )
    .await?;

    let query = search_query(&intent);
    let open_now = intent.filters.as_ref().and_then(|f| f.open_now);
    let outcome = places.search(&query, open_now, intent.top_k).await;

    Ok(ChatResponse {
        query: message.to_string(),
        resolved_location: intent.location,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(query: &str, location: Option<&str>) -> MapsIntent {
        serde_json::from_value(serde_json::json!({
            "query": query,
            "location": location,
        }))
        .unwrap()
    }

    #[test]
    fn test_search_query_with_location() {
        assert_eq!(
            search_query(&intent("ramen", Some("Cimahi"))),
            "ramen in Cimahi"
        );
    }

    #[test]
    fn test_search_query_without_location() {
        assert_eq!(search_query(&intent("ramen", None)), "ramen");
    }

    #[test]
    fn test_resolved_location_serializes_as_null() {
        let resp = ChatResponse {
            query: "ramen dekat sini".to_string(),
            resolved_location: None,
            outcome: SearchOutcome {
                status: "OK".to_string(),
                provider: None,
                error_message: None,
                results: vec![],
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["resolved_location"].is_null());
        assert_eq!(json["status"], "OK");
        assert!(json.get("provider").is_none());
        assert!(json.get("error_message").is_none());
    }
}
