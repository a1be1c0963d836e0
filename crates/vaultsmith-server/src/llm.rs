//! OpenAI-compatible chat client for model generation.
//!
//! Sends the fixed Data Vault 2.1 modeling prompt to the configured
//! `/chat/completions` endpoint (Groq by default) and returns the assistant
//! content. The caller strips code fences and decodes the JSON document.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::config::LlmConfig;
use crate::error::ApiError;

const LLM_TIMEOUT: Duration = Duration::from_secs(60);

/// Grounded mode embeds at most this many characters of the knowledge
/// document in the system prompt.
const KNOWLEDGE_CHAR_LIMIT: usize = 3000;

const SYSTEM_PROMPT: &str =
    "You are an expert Data Vault 2.1 modeler. Follow standard Data Vault 2.1 best practices.";

const USER_PROMPT_HEAD: &str =
    "Convert the following source database schema into a Data Vault 2.1 model.\n\n\
     Source Schema (extracted from ERD):";

const USER_PROMPT_TAIL: &str = r#"Instructions:
1. Identify all tables and their columns
2. Create Hubs for business entities (tables with natural business keys)
3. Create Links for relationships between Hubs
4. Create Satellites for descriptive attributes
5. Follow Data Vault 2.1 naming: Hub_EntityName, Link_Entity1_Entity2, Sat_EntityName_Context
6. Add proper hash keys and load timestamps

Return ONLY valid JSON (no markdown formatting) in this exact structure:
{
  "nodes": [
    {"id": "Hub_Customer", "type": "hub", "businessKey": "customer_id", "sourceTable": "customer", "attributes": ["customer_id"]},
    {"id": "Sat_Customer_Details", "type": "satellite", "parent": "Hub_Customer", "attributes": ["first_name", "last_name", "email"], "sourceTable": "customer"},
    {"id": "Link_Customer_Order", "type": "link", "connects": ["Hub_Customer", "Hub_Order"], "sourceRelationship": "fk_customer_order"}
  ],
  "edges": [
    {"from": "Hub_Customer", "to": "Sat_Customer_Details"},
    {"from": "Hub_Customer", "to": "Link_Customer_Order"},
    {"from": "Hub_Order", "to": "Link_Customer_Order"}
  ]
}"#;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Runs the model-generation chat and returns the raw assistant content.
///
/// `knowledge` carries the most recent methodology document in grounded
/// mode; `None` falls back to the standard system prompt.
pub async fn generate_model(
    config: &LlmConfig,
    ocr_text: &str,
    knowledge: Option<&str>,
) -> Result<String, ApiError> {
    let Some(api_key) = config.api_key.as_deref() else {
        return Err(ApiError::BadRequest(
            "GROQ_API_KEY is not configured".to_string(),
        ));
    };

    let system_prompt = match knowledge {
        Some(content) => grounded_system_prompt(content),
        None => SYSTEM_PROMPT.to_string(),
    };
    let user_prompt = format!(
        "{}\n<<<\n{}\n>>>\n\n{}",
        USER_PROMPT_HEAD, ocr_text, USER_PROMPT_TAIL
    );

    let body = json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_prompt }
        ],
        "temperature": 0.2,
        "max_tokens": 4000
    });

    let client = reqwest::Client::builder()
        .timeout(LLM_TIMEOUT)
        .build()
        .map_err(|err| ApiError::InternalError(format!("failed to build HTTP client: {}", err)))?;

    let response = client
        .post(config.endpoint.as_str())
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|err| ApiError::Upstream(format!("provider request failed: {}", err)))?;

    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|err| ApiError::Upstream(format!("provider response read failed: {}", err)))?;

    if !status.is_success() {
        return Err(ApiError::Upstream(format!(
            "provider request failed ({}): {}",
            status, body_text
        )));
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(&body_text)
        .map_err(|err| ApiError::Upstream(format!("provider response parse failed: {}", err)))?;

    parsed
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::Upstream("provider response missing assistant content".to_string())
        })
}

/// Removes markdown code-fence markers the model sometimes wraps its JSON in.
pub fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

fn grounded_system_prompt(knowledge: &str) -> String {
    let excerpt: String = knowledge.chars().take(KNOWLEDGE_CHAR_LIMIT).collect();
    format!(
        "You are an expert Data Vault 2.1 modeler.\n\
         Using the following DV2.1 methodology guidelines:\n<<<\n{}\n>>>\n\n\
         Follow these guidelines strictly when creating the model.",
        excerpt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences() {
        let content = "```json\n{\"nodes\": []}\n```";
        assert_eq!(strip_code_fences(content), "{\"nodes\": []}");
    }

    #[test]
    fn strips_bare_fences() {
        let content = "```\n{\"nodes\": []}\n```";
        assert_eq!(strip_code_fences(content), "{\"nodes\": []}");
    }

    #[test]
    fn unfenced_content_is_untouched() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn grounded_prompt_truncates_knowledge() {
        let long = "g".repeat(5000);
        let prompt = grounded_system_prompt(&long);
        assert!(prompt.contains(&"g".repeat(KNOWLEDGE_CHAR_LIMIT)));
        assert!(!prompt.contains(&"g".repeat(KNOWLEDGE_CHAR_LIMIT + 1)));
    }

    #[test]
    fn chat_response_unwraps_content() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": " {\"nodes\": []} "}}]}"#,
        )
        .unwrap();
        let content = parsed.choices[0].message.content.as_deref().unwrap();
        assert_eq!(content.trim(), "{\"nodes\": []}");
    }
}
