/// One research request, from validated input to a normalized result.
///
/// With a live backend the input goes through the prompt builder, a single model call,
/// code-fence stripping, strict JSON parsing and the normalizer. Without one, the demo
/// generator answers directly. Nothing is retried and nothing is cached.
use std::sync::Arc;

use tracing::{error, info, warn};

use research_common::anthropic::{
    AnthropicClientError, Message, MessageClient, MessagesRequest,
};
use research_common::api::{ResearchResult, SearchInput};

use crate::demo::generate_demo_result;
use crate::normalize::normalize;
use crate::prompt::build_prompt;

#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    #[error("Please provide at least a brand, model, serial number, or description.")]
    MissingInput,

    #[error("Failed to get a response from the research engine.")]
    NoTextBlock,

    #[error("Failed to parse research results. Please try again.")]
    MalformedJson(#[source] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] AnthropicClientError),
}

enum Backend {
    Live {
        client: Arc<dyn MessageClient>,
        model: String,
        max_tokens: u32,
    },
    Demo,
}

pub struct Researcher {
    backend: Backend,
}

impl Researcher {
    pub fn live(client: Arc<dyn MessageClient>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            backend: Backend::Live {
                client,
                model: model.into(),
                max_tokens,
            },
        }
    }

    pub fn demo() -> Self {
        Self {
            backend: Backend::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.backend, Backend::Demo)
    }

    pub async fn research(&self, input: &SearchInput) -> Result<ResearchResult, ResearchError> {
        if !input.has_identifying_field() {
            return Err(ResearchError::MissingInput);
        }

        let (client, model, max_tokens) = match &self.backend {
            Backend::Demo => {
                info!(category = ?input.category, "serving demo research result");
                return Ok(generate_demo_result(input));
            }
            Backend::Live {
                client,
                model,
                max_tokens,
            } => (client, model, *max_tokens),
        };

        let request = MessagesRequest {
            model: model.clone(),
            max_tokens,
            messages: vec![Message::user(build_prompt(input))],
        };

        let response = client.create_message(request).await.inspect_err(|e| {
            error!(error = %e, "research model call failed");
        })?;

        if let Some(usage) = &response.usage {
            info!(
                model = %model,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "research model call complete"
            );
        }

        let text = response.first_text().ok_or_else(|| {
            error!(blocks = response.content.len(), "model reply had no text block");
            ResearchError::NoTextBlock
        })?;

        let raw = serde_json::from_str::<serde_json::Value>(strip_code_fence(text))
            .map_err(|e| {
                warn!(error = %e, "model reply was not valid JSON");
                ResearchError::MalformedJson(e)
            })?;

        Ok(normalize(&raw))
    }
}

/// Removes a surrounding Markdown code fence (optionally tagged `json`) from model text.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.strip_suffix('\n').unwrap_or(rest)
}
