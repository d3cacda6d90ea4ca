//! Structured place-search intent extraction from free-text messages

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::openai::{Message, Role, completion};

const SYSTEM_PROMPT: &str = "\
Extract Google-Maps-friendly intent from casual Indonesian/English queries.
Return ONLY JSON with schema:
{ query: string, location?: string, radius_km?: number, top_k?: number,
  filters?: { open_now?: boolean, min_rating?: number, price_level?: 0|1|2|3|4 } }
Defaults: top_k=3, radius_km=5. If user implies 'now', set open_now=true.
Do not include any text outside the JSON.";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntentFilters {
    pub open_now: Option<bool>,
    pub min_rating: Option<f64>,
    pub price_level: Option<u8>,
}

/// Search parameters extracted from a chat message. Defaults are
/// applied during deserialization so `top_k` and `radius_km` always
/// resolve to a value; explicit fields from the model win.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapsIntent {
    pub query: String,
    pub location: Option<String>,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    pub filters: Option<IntentFilters>,
}

fn default_radius_km() -> f64 {
    5.0
}

fn default_top_k() -> usize {
    3
}

/// Ask the model for the structured intent behind `message`. A failed
/// upstream call or a response that doesn't parse as the intent schema
/// is a hard error, there is no retry or repair step.
pub async fn extract_intent(
    message: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<MapsIntent> {
    let messages = vec![
        Message::new(Role::System, SYSTEM_PROMPT),
        Message::new(Role::User, message),
    ];
    let resp = completion(&messages, api_hostname, api_key, model)
        .await
        .context("Intent completion request failed")?;

    let Some(raw) = resp["choices"][0]["message"]["content"].as_str() else {
        bail!("No completion content received. Resp:\n\n{}", resp);
    };

    let intent: MapsIntent = serde_json::from_str(raw)
        .with_context(|| format!("Failed to parse intent from completion: {}", raw))?;

    Ok(intent)
}
