use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_ANSWER: &str = "Sorry, I couldn't find an answer.";

const API_KEY_VARS: [&str; 2] = ["GREEN_PROM_API_KEY", "OPENAI_API_KEY"];

#[derive(Debug, Error)]
pub enum RemoteTutorError {
    #[error("remote tutor is disabled")]
    Disabled,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote tutor returned HTTP {0}")]
    Status(u16),

    #[error("remote tutor error: {0}")]
    Service(String),
}

/// Which wire format the remote endpoint speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteMode {
    /// `{ question, context? }` in, `{ answer }` out
    Proxy,
    /// OpenAI-compatible `/v1/chat/completions`
    ChatCompletions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteTutorSettings {
    pub enabled: bool,
    pub mode: RemoteMode,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,

    /// Read from the environment, never written to disk.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for RemoteTutorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: RemoteMode::ChatCompletions,
            endpoint: "http://localhost:1234/v1/chat/completions".into(),
            model: "local-model".into(),
            temperature: 0.7,
            api_key: None,
        }
    }
}

pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    })
}

/* =========================
   Wire types
   ========================= */

#[derive(Debug, Serialize)]
pub struct ProxyRequest<'a> {
    pub question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct ProxyResponse {
    pub answer: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(settings: &RemoteTutorSettings, question: &str, context: Option<&str>) -> Self {
        let mut messages = Vec::new();
        if let Some(context) = context {
            messages.push(ChatMessage {
                role: "system".into(),
                content: context.into(),
            });
        }
        messages.push(ChatMessage {
            role: "user".into(),
            content: question.into(),
        });

        Self {
            model: settings.model.clone(),
            messages,
            temperature: settings.temperature,
        }
    }
}

pub fn answer_from_completion(resp: ChatCompletionResponse) -> String {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|content| !content.trim().is_empty())
        .unwrap_or_else(|| NO_ANSWER.to_string())
}

pub fn answer_from_proxy(resp: ProxyResponse) -> Result<String, RemoteTutorError> {
    match (resp.answer, resp.error) {
        (Some(answer), _) => Ok(answer),
        (None, Some(error)) => Err(RemoteTutorError::Service(error)),
        (None, None) => Err(RemoteTutorError::Service("missing answer".into())),
    }
}

/* =========================
   Client
   ========================= */

/// Optional text-completion fallback. Blocking; run it off the UI thread.
pub struct RemoteTutorClient {
    http: Client,
    settings: RemoteTutorSettings,
}

impl RemoteTutorClient {
    pub fn new(settings: RemoteTutorSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &RemoteTutorSettings {
        &self.settings
    }

    pub fn ask(&self, question: &str, context: Option<&str>) -> Result<String, RemoteTutorError> {
        if !self.settings.enabled {
            return Err(RemoteTutorError::Disabled);
        }

        match self.settings.mode {
            RemoteMode::Proxy => self.ask_proxy(question, context),
            RemoteMode::ChatCompletions => self.ask_chat_completions(question, context),
        }
    }

    fn post(&self) -> reqwest::blocking::RequestBuilder {
        let req = self.http.post(&self.settings.endpoint);
        match &self.settings.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    fn ask_proxy(&self, question: &str, context: Option<&str>) -> Result<String, RemoteTutorError> {
        let resp = self
            .post()
            .json(&ProxyRequest { question, context })
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            // the proxy reports failures as `{ error }` with a 4xx/5xx
            return match resp.json::<ProxyResponse>() {
                Ok(ProxyResponse {
                    error: Some(error), ..
                }) => Err(RemoteTutorError::Service(error)),
                _ => Err(RemoteTutorError::Status(status.as_u16())),
            };
        }

        answer_from_proxy(resp.json::<ProxyResponse>()?)
    }

    fn ask_chat_completions(
        &self,
        question: &str,
        context: Option<&str>,
    ) -> Result<String, RemoteTutorError> {
        let req = ChatCompletionRequest::new(&self.settings, question, context);
        let resp = self.post().json(&req).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RemoteTutorError::Status(status.as_u16()));
        }

        Ok(answer_from_completion(resp.json::<ChatCompletionResponse>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn proxy_request_omits_missing_context() {
        let body = serde_json::to_value(ProxyRequest {
            question: "Is glitter bad?",
            context: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "question": "Is glitter bad?" }));

        let body = serde_json::to_value(ProxyRequest {
            question: "Is glitter bad?",
            context: Some("be brief"),
        })
        .unwrap();
        assert_eq!(body, json!({ "question": "Is glitter bad?", "context": "be brief" }));
    }

    #[test]
    fn chat_request_puts_context_first() {
        let settings = RemoteTutorSettings::default();
        let req = ChatCompletionRequest::new(&settings, "Why thrift?", Some("You are a tutor"));
        let body = serde_json::to_value(&req).unwrap();

        assert_eq!(body["model"], "local-model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are a tutor");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Why thrift?");

        let req = ChatCompletionRequest::new(&settings, "Why thrift?", None);
        assert_eq!(req.messages.len(), 1);
    }

    #[test]
    fn completion_without_choices_uses_default_answer() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(answer_from_completion(resp), NO_ANSWER);

        let resp: ChatCompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(answer_from_completion(resp), NO_ANSWER);

        let resp: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Take the bus."}}]}"#,
        )
        .unwrap();
        assert_eq!(answer_from_completion(resp), "Take the bus.");
    }

    #[test]
    fn proxy_response_variants() {
        let ok: ProxyResponse = serde_json::from_str(r#"{"answer": "Walk!"}"#).unwrap();
        assert_eq!(answer_from_proxy(ok).unwrap(), "Walk!");

        let err: ProxyResponse = serde_json::from_str(r#"{"error": "Missing question"}"#).unwrap();
        assert!(matches!(
            answer_from_proxy(err),
            Err(RemoteTutorError::Service(msg)) if msg == "Missing question"
        ));

        let empty: ProxyResponse = serde_json::from_str("{}").unwrap();
        assert!(answer_from_proxy(empty).is_err());
    }

    #[test]
    fn disabled_client_never_sends() {
        let client = RemoteTutorClient::new(RemoteTutorSettings::default());
        assert!(matches!(
            client.ask("anything", None),
            Err(RemoteTutorError::Disabled)
        ));
    }

    #[test]
    fn settings_json_skips_api_key() {
        let settings = RemoteTutorSettings {
            api_key: Some("secret".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));

        let back: RemoteTutorSettings = serde_json::from_str(r#"{"mode": "proxy"}"#).unwrap();
        assert_eq!(back.mode, RemoteMode::Proxy);
        assert!(!back.enabled);
        assert_eq!(back.api_key, None);
    }
}
