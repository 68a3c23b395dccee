use crate::model::SourceKind;
use crate::source::remote::{OPEN_TRIVIA_ENDPOINT, bank_url};
use std::time::Duration;

pub const DEFAULT_QUESTION_COUNT: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[cfg(not(target_arch = "wasm32"))]
const ENV_SOURCE: &str = "TRIVIA_QUIZ_SOURCE";
#[cfg(not(target_arch = "wasm32"))]
const ENV_COUNT: &str = "TRIVIA_QUIZ_QUESTION_COUNT";
#[cfg(not(target_arch = "wasm32"))]
const ENV_ENDPOINT: &str = "TRIVIA_QUIZ_ENDPOINT";
#[cfg(not(target_arch = "wasm32"))]
const ENV_TIMEOUT: &str = "TRIVIA_QUIZ_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub default_source: SourceKind,
    pub question_count: usize,
    pub bank_endpoint: String,
    /// Solo se aplica en nativo; `fetch` del navegador no tiene timeout.
    pub request_timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_source: SourceKind::Builtin,
            question_count: DEFAULT_QUESTION_COUNT,
            bank_endpoint: OPEN_TRIVIA_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl QuizConfig {
    pub fn bank_url(&self) -> String {
        bank_url(&self.bank_endpoint, self.question_count)
    }

    /// Aplica overrides con claves `source`, `count`, `endpoint`, `timeout`.
    /// Los valores inválidos se ignoran con un aviso.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = non_empty(lookup("source")) {
            match raw.parse::<SourceKind>() {
                Ok(source) => self.default_source = source,
                Err(err) => log::warn!("{err}; se mantiene {}", self.default_source),
            }
        }
        if let Some(raw) = non_empty(lookup("count")) {
            match raw.parse::<usize>() {
                Ok(count) if count > 0 => self.question_count = count,
                _ => log::warn!("número de preguntas inválido: {raw}"),
            }
        }
        if let Some(endpoint) = non_empty(lookup("endpoint")) {
            self.bank_endpoint = endpoint;
        }
        if let Some(raw) = non_empty(lookup("timeout")) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout = Duration::from_secs(secs),
                _ => log::warn!("timeout inválido: {raw}"),
            }
        }
        self
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default().with_overrides(|key| {
            let var = match key {
                "source" => ENV_SOURCE,
                "count" => ENV_COUNT,
                "endpoint" => ENV_ENDPOINT,
                "timeout" => ENV_TIMEOUT,
                _ => return None,
            };
            std::env::var(var).ok()
        })
    }

    /// En navegador: variable de compilación, luego querystring y por último
    /// `<meta name="trivia-quiz-endpoint">` para el endpoint.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default().with_overrides(|key| match key {
            "source" => option_env!("TRIVIA_QUIZ_SOURCE")
                .map(str::to_string)
                .or_else(|| from_querystring("source")),
            "count" => option_env!("TRIVIA_QUIZ_QUESTION_COUNT")
                .map(str::to_string)
                .or_else(|| from_querystring("count")),
            "endpoint" => option_env!("TRIVIA_QUIZ_ENDPOINT")
                .map(str::to_string)
                .or_else(|| from_querystring("endpoint"))
                .or_else(endpoint_from_meta),
            _ => None,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn from_querystring(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(key)
}

#[cfg(target_arch = "wasm32")]
fn endpoint_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='trivia-quiz-endpoint']")
        .ok()??;
    meta.get_attribute("content")
}
