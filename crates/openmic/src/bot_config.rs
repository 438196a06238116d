//! Bot-creation payload for the vendor API.
//!
//! Creating a bot injects the relay's three webhook URLs and the schema of
//! the single `fetch_record` function the bot may call mid-conversation.

use serde::Serialize;
use serde_json::{json, Value};

/// The three webhook URLs the vendor calls back on, built from the relay's
/// public base URL.
#[derive(Debug, Clone)]
pub struct WebhookEndpoints {
    pub pre_call: String,
    pub post_call: String,
    pub fetch_record: String,
}

impl WebhookEndpoints {
    /// Builds the endpoint set from a public base URL (with or without a
    /// trailing slash).
    pub fn from_base(public_base_url: &str) -> Self {
        let base = public_base_url.trim_end_matches('/');
        Self {
            pre_call: format!("{base}/api/webhooks/pre-call"),
            post_call: format!("{base}/api/webhooks/post-call"),
            fetch_record: format!("{base}/api/webhooks/function/fetch-record"),
        }
    }
}

/// Webhook registration as the vendor expects it.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookRegistration {
    pub url: String,
    pub method: String,
}

impl WebhookRegistration {
    fn post(url: &str) -> Self {
        Self {
            url: url.to_string(),
            method: "POST".into(),
        }
    }
}

/// A callable function advertised to the bot's dialogue model.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub url: String,
    pub method: String,
}

/// Full bot-creation payload sent to `POST /v1/bots`.
#[derive(Debug, Clone, Serialize)]
pub struct BotConfig {
    pub name: String,
    pub prompt: String,
    pub voice: String,
    pub pre_call_webhook: WebhookRegistration,
    pub post_call_webhook: WebhookRegistration,
    pub functions: Vec<FunctionDef>,
}

impl BotConfig {
    /// Assembles the payload for a new intake bot, wiring in the relay's
    /// webhook endpoints and the `fetch_record` function schema.
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        voice: impl Into<String>,
        endpoints: &WebhookEndpoints,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            voice: voice.into(),
            pre_call_webhook: WebhookRegistration::post(&endpoints.pre_call),
            post_call_webhook: WebhookRegistration::post(&endpoints.post_call),
            functions: vec![FunctionDef {
                name: "fetch_record".into(),
                description: "Fetch patient medical record by Medical ID".into(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "id": {
                            "type": "string",
                            "description":
                                "The Medical ID to fetch (e.g., MED-123, MED-456, MED-789, MED-321)"
                        }
                    },
                    "required": ["id"]
                }),
                url: endpoints.fetch_record.clone(),
                method: "POST".into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_built_from_the_public_base() {
        let endpoints = WebhookEndpoints::from_base("https://relay.example.com/");
        assert_eq!(
            endpoints.pre_call,
            "https://relay.example.com/api/webhooks/pre-call"
        );
        assert_eq!(
            endpoints.post_call,
            "https://relay.example.com/api/webhooks/post-call"
        );
        assert_eq!(
            endpoints.fetch_record,
            "https://relay.example.com/api/webhooks/function/fetch-record"
        );
    }

    #[test]
    fn config_serialises_webhooks_and_function_schema() {
        let endpoints = WebhookEndpoints::from_base("http://localhost:4000");
        let config = BotConfig::new("Test", "p", "alloy", &endpoints);
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["name"], "Test");
        assert_eq!(value["voice"], "alloy");
        assert!(value["pre_call_webhook"]["url"]
            .as_str()
            .unwrap()
            .ends_with("/pre-call"));
        assert!(value["post_call_webhook"]["url"]
            .as_str()
            .unwrap()
            .ends_with("/post-call"));

        let functions = value["functions"].as_array().unwrap();
        assert_eq!(functions.len(), 1);
        assert_eq!(functions[0]["name"], "fetch_record");
        assert_eq!(functions[0]["parameters"]["required"], json!(["id"]));
        assert!(functions[0]["url"]
            .as_str()
            .unwrap()
            .ends_with("/function/fetch-record"));
    }
}
