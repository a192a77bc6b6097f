use serde::Deserialize;
use serde_json::json;

use crate::server::{
    config::AiProvider,
    error::{gateway::GatewayError, AppError},
    model::credential::ClientCredential,
    service::gateway::{present, GatewayService},
};

const OPENAI_TEMPERATURE: f64 = 0.7;
const OPENAI_MAX_TOKENS: u32 = 150;

/// Validated text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub clinic_id: i32,
    pub message_text: String,
    pub system_prompt: String,
}

impl AnalyzeRequest {
    pub fn new(
        clinic_id: Option<i32>,
        message_text: Option<String>,
        system_prompt: Option<String>,
    ) -> Result<Self, GatewayError> {
        match (clinic_id, present(message_text), present(system_prompt)) {
            (Some(clinic_id), Some(message_text), Some(system_prompt)) => Ok(Self {
                clinic_id,
                message_text,
                system_prompt,
            }),
            _ => Err(GatewayError::InvalidPayload(
                "Fields 'client_id', 'message_text' and 'system_prompt' are required".to_string(),
            )),
        }
    }
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: String,
}

impl<'a> GatewayService<'a> {
    /// Generates a reply to `message_text` with the configured AI provider.
    ///
    /// An active credential of the clinic for the provider overrides the URL, API key
    /// and model from the configuration, field by field.
    ///
    /// # Returns
    /// - `Ok(String)` - Generated text
    /// - `Err(GatewayError::NotConfigured)` - OpenAI selected without an API key
    /// - `Err(GatewayError::AiProvider)` - Provider answered non-2xx or an unexpected body
    /// - `Err(GatewayError::Request)` - Provider unreachable
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<String, AppError> {
        let provider = self.config.ai.provider;
        let credential = self
            .credential(request.clinic_id, provider.credential_service_type())
            .await?;

        tracing::debug!(
            "Requesting {:?} analysis for clinic {}",
            provider,
            request.clinic_id
        );

        let response = match provider {
            AiProvider::Ollama => self.ollama(&request, credential).await?,
            AiProvider::OpenAi => self.openai(&request, credential).await?,
        };

        Ok(response)
    }

    async fn ollama(
        &self,
        request: &AnalyzeRequest,
        credential: Option<ClientCredential>,
    ) -> Result<String, GatewayError> {
        let ai = &self.config.ai;
        let (base_url, model) = match credential {
            Some(c) => (
                present(c.instance_url).unwrap_or_else(|| ai.ollama_url.clone()),
                present(c.model).unwrap_or_else(|| ai.ollama_model.clone()),
            ),
            None => (ai.ollama_url.clone(), ai.ollama_model.clone()),
        };
        let url = format!("{}/api/generate", base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .json(&json!({
                "model": model,
                "prompt": request.message_text,
                "system": request.system_prompt,
                "stream": false,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::AiProvider(format!(
                "Ollama responded with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::AiProvider(format!("Unexpected Ollama response: {}", e)))?;

        Ok(body.response)
    }

    async fn openai(
        &self,
        request: &AnalyzeRequest,
        credential: Option<ClientCredential>,
    ) -> Result<String, GatewayError> {
        let ai = &self.config.ai;
        let (url, api_key, model) = match credential {
            Some(c) => (
                present(c.instance_url).unwrap_or_else(|| ai.openai_url.clone()),
                present(c.api_key).or_else(|| ai.openai_api_key.clone()),
                present(c.model).unwrap_or_else(|| ai.openai_model.clone()),
            ),
            None => (
                ai.openai_url.clone(),
                ai.openai_api_key.clone(),
                ai.openai_model.clone(),
            ),
        };
        let api_key = api_key.ok_or_else(|| {
            GatewayError::NotConfigured("OpenAI API key is not configured".to_string())
        })?;

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&json!({
                "model": model,
                "messages": [
                    { "role": "system", "content": request.system_prompt },
                    { "role": "user", "content": request.message_text },
                ],
                "temperature": OPENAI_TEMPERATURE,
                "max_tokens": OPENAI_MAX_TOKENS,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::AiProvider(format!(
                "OpenAI responded with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let body: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::AiProvider(format!("Unexpected OpenAI response: {}", e)))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::AiProvider("OpenAI returned no choices".to_string()))
    }
}
