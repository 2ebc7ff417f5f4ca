use super::coach::Coach;
use super::context::Context;
use super::prompt;
use super::truncate::complete_sentences;
use super::truncate::truncate;
use crate::Error;
use crate::settings::CoachSettings;
use serde::Deserialize;
use serde::Serialize;
use std::ops::RangeInclusive;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completions client for an OpenAI-compatible endpoint.
///
/// One explanation may take several attempts: an attempt is repeated when
/// the request fails or the text misses the length window. After the last
/// attempt the longest text seen is truncated to the budget and returned.
pub struct OpenAi {
    http: reqwest::Client,
    key: String,
    model: String,
    url: String,
    attempts: usize,
    budget: usize,
}

impl OpenAi {
    pub fn new(settings: &CoachSettings) -> anyhow::Result<Self> {
        let key = settings
            .key
            .clone()
            .filter(|key| is_valid_key(key))
            .ok_or(Error::ConfigurationMissing("OPENAI_API_KEY"))?;
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            key,
            model: settings.model.clone(),
            url: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            attempts: settings.attempts.max(1),
            budget: settings.budget,
        })
    }

    /// Acceptable explanation lengths, in characters.
    fn window(&self) -> RangeInclusive<usize> {
        self.budget * 3 / 5..=self.budget
    }

    fn request(&self, context: &Context) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: prompt::system(self.budget),
                },
                Message {
                    role: "user",
                    content: prompt::user(context, self.budget),
                },
            ],
            max_tokens: 500,
            temperature: 0.7,
            presence_penalty: 0.6,
            frequency_penalty: 0.5,
        }
    }

    async fn complete(&self, request: &ChatRequest<'_>) -> anyhow::Result<String> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.key)
            .json(request)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("completion API error ({}): {}", status, body);
        }
        Ok(response
            .json::<ChatResponse>()
            .await?
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| complete_sentences(&text).to_string())
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl Coach for OpenAi {
    async fn explain(&self, context: &Context) -> anyhow::Result<String> {
        let request = self.request(context);
        let mut usable = None;
        let mut failure = None;
        let mut attempt = 0;
        while attempt < self.attempts {
            attempt += 1;
            match self.complete(&request).await {
                Ok(text) if self.window().contains(&text.chars().count()) => return Ok(text),
                Ok(text) if text.is_empty() => log::debug!("attempt {} returned nothing", attempt),
                Ok(text) => {
                    let n = text.chars().count();
                    log::debug!("attempt {} returned {} chars", attempt, n);
                    if usable.as_ref().is_none_or(|u: &String| u.chars().count() < n) {
                        usable = Some(text);
                    }
                }
                Err(e) => {
                    log::warn!("attempt {} failed: {}", attempt, e);
                    failure = Some(e);
                }
            }
        }
        match (usable, failure) {
            (Some(text), _) => Ok(truncate(&text, self.budget)),
            (None, Some(e)) => Err(e),
            (None, None) => Err(Error::UpstreamExplanation("empty completion".to_string()).into()),
        }
    }
}

/// Keys that are absent or malformed count as missing configuration.
pub fn is_valid_key(key: &str) -> bool {
    key.starts_with("sk-") && key.len() > 20
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hole;
    use crate::decision::Opponent;
    use actix_web::App;
    use actix_web::HttpResponse;
    use actix_web::HttpServer;
    use actix_web::web;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn settings(key: Option<&str>) -> CoachSettings {
        CoachSettings {
            key: key.map(String::from),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "http://127.0.0.1:9/v1/".to_string(),
            timeout: Duration::from_millis(200),
            deadline: Duration::from_secs(1),
            attempts: 3,
            budget: 250,
        }
    }

    #[test]
    fn key_validation() {
        assert!(is_valid_key("sk-0123456789abcdefghij"));
        assert!(!is_valid_key("sk-short"));
        assert!(!is_valid_key("0123456789abcdefghijklmn"));
        assert!(!is_valid_key(""));
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let error = OpenAi::new(&settings(None)).err().unwrap();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::ConfigurationMissing(_))
        ));
        assert!(OpenAi::new(&settings(Some("not-a-key"))).is_err());
    }

    #[test]
    fn builds_endpoint_url() {
        let client = OpenAi::new(&settings(Some("sk-0123456789abcdefghij"))).unwrap();
        assert_eq!(client.url, "http://127.0.0.1:9/v1/chat/completions");
        assert_eq!(client.window(), (150..=250));
    }

    #[test]
    fn request_serialization() {
        let client = OpenAi::new(&settings(Some("sk-0123456789abcdefghij"))).unwrap();
        let hole = Hole::try_from("Qh Jh").unwrap();
        let context = Context::claimed(hole, "Call", "SB", Opponent::default(), true);
        let json = serde_json::to_value(client.request(&context)).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json["messages"][1]["content"].as_str().unwrap().contains("Q♥ J♥"));
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Raise."}}]}"#;
        let response = serde_json::from_str::<ChatResponse>(body).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Raise."));
    }

    #[tokio::test]
    async fn unreachable_endpoint_errors_after_retries() {
        let client = OpenAi::new(&settings(Some("sk-0123456789abcdefghij"))).unwrap();
        let hole = Hole::try_from("Qh Jh").unwrap();
        let context = Context::claimed(hole, "Call", "SB", Opponent::default(), true);
        assert!(client.explain(&context).await.is_err());
    }

    /// Local chat-completions endpoint answering from a script; `None`
    /// entries (and an exhausted script) answer 500.
    struct Script {
        replies: Mutex<VecDeque<Option<&'static str>>>,
        hits: AtomicUsize,
    }

    impl Script {
        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    async fn reply(script: web::Data<Script>) -> HttpResponse {
        script.hits.fetch_add(1, Ordering::SeqCst);
        let next = script.replies.lock().unwrap().pop_front().flatten();
        match next {
            Some(text) => HttpResponse::Ok().json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": text}}]
            })),
            None => HttpResponse::InternalServerError().body("overloaded"),
        }
    }

    fn scripted(replies: Vec<Option<&'static str>>) -> (OpenAi, web::Data<Script>) {
        let script = web::Data::new(Script {
            replies: Mutex::new(replies.into()),
            hits: AtomicUsize::new(0),
        });
        let data = script.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/v1/chat/completions", web::post().to(reply))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        let mut settings = settings(Some("sk-0123456789abcdefghij"));
        settings.base_url = format!("http://{}/v1", addr);
        settings.timeout = Duration::from_secs(5);
        settings.budget = 50;
        (OpenAi::new(&settings).unwrap(), script)
    }

    fn quiz() -> Context {
        let hole = Hole::try_from("As Ah").unwrap();
        Context::claimed(hole, "Raise 3BB", "SB", Opponent::default(), true)
    }

    const SHORT: &str = "Raise.";
    const INSIDE: &str = "Raise here, the big blind folds far too often.";
    const LONG: &str = "Raise here. The big blind folds far too often to defend. Aces want a big pot.";

    #[actix_web::test]
    async fn retries_until_text_fits_window() {
        let (client, script) = scripted(vec![Some(SHORT), Some(LONG), Some(INSIDE)]);
        assert_eq!(client.explain(&quiz()).await.unwrap(), INSIDE);
        assert_eq!(script.hits(), 3);
    }

    #[actix_web::test]
    async fn stops_at_first_fitting_text() {
        let (client, script) = scripted(vec![Some(INSIDE), Some(SHORT), Some(SHORT)]);
        assert_eq!(client.explain(&quiz()).await.unwrap(), INSIDE);
        assert_eq!(script.hits(), 1);
    }

    #[actix_web::test]
    async fn truncates_longest_text_after_last_attempt() {
        let (client, script) = scripted(vec![Some(LONG), Some(SHORT), None]);
        assert_eq!(client.explain(&quiz()).await.unwrap(), "Raise here.");
        assert_eq!(script.hits(), 3);
    }

    #[actix_web::test]
    async fn every_attempt_failing_is_an_error() {
        let (client, script) = scripted(vec![None, None, None]);
        let error = client.explain(&quiz()).await.unwrap_err();
        assert!(error.to_string().contains("500"));
        assert_eq!(script.hits(), 3);
    }

    #[actix_web::test]
    async fn recovers_after_failed_attempts() {
        let (client, script) = scripted(vec![None, None, Some(INSIDE)]);
        assert_eq!(client.explain(&quiz()).await.unwrap(), INSIDE);
        assert_eq!(script.hits(), 3);
    }

}
