use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Marker prefixed to the untranslated text when the service fails.
pub const UNAVAILABLE_PREFIX: &str = "(Translation unavailable) ";

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape from translation service")]
    BadResponse,
    #[error("nothing to translate")]
    EmptyInput,
}

/// Outcome of one best-effort translation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub target_text: String,
    pub succeeded: bool,
}

/// Secondary-language rendering capability. Implementations report failure
/// as a value; callers must treat it as recoverable, never as a reason to
/// abort the primary answer.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;
}

/// Exactly one translation attempt, failure absorbed into the source text.
///
/// No retry: a second round-trip to a slow service would delay an answer
/// that is already computed.
pub async fn best_effort(translator: &dyn Translator, text: &str) -> TranslationResult {
    match translator.translate(text).await {
        Ok(target_text) => TranslationResult {
            target_text,
            succeeded: true,
        },
        Err(e) => {
            warn!(error = %e, "translation failed, returning source text");
            TranslationResult {
                target_text: format!("{UNAVAILABLE_PREFIX}{text}"),
                succeeded: false,
            }
        }
    }
}

/// Translator backed by the public Google translate endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
    target_lang: String,
}

impl GoogleTranslator {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let base_url = dotenv::var("TRANSLATE_BASE_URL")
            .unwrap_or_else(|_| "https://translate.googleapis.com".to_string());
        let target_lang = dotenv::var("TRANSLATE_TARGET_LANG").unwrap_or_else(|_| "te".to_string());
        let timeout_secs = dotenv::var("TRANSLATE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10);

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            target_lang,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_a/single", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let resp = self
            .client
            .get(self.endpoint())
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", self.target_lang.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = resp.json().await?;
        parse_segments(&body)
    }
}

/// The endpoint answers a nested array; element 0 holds one
/// [translated, source, ...] row per input segment. Concatenate the
/// translated pieces in order.
fn parse_segments(body: &Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or(TranslationError::BadResponse)?;

    let mut out = String::new();
    for segment in segments {
        let piece = segment
            .get(0)
            .and_then(Value::as_str)
            .ok_or(TranslationError::BadResponse)?;
        out.push_str(piece);
    }

    if out.is_empty() {
        return Err(TranslationError::BadResponse);
    }
    Ok(out)
}
