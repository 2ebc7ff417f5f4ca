use super::context::Context;
use crate::Error;
use std::sync::Arc;
use std::time::Duration;

/// A text-generation service that explains a verdict.
///
/// Implementations own their transport, retries and failure modes; the
/// caller only needs prose or an error.
#[async_trait::async_trait]
pub trait Coach: Send + Sync {
    async fn explain(&self, context: &Context) -> anyhow::Result<String>;
}

/// Where an explanation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Coach,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub source: Source,
}

/// Front for an optional coach: bounds the wait and never fails.
///
/// Without a coach, or when it errors or misses the deadline, the
/// templated fallback sentence is returned instead.
#[derive(Clone)]
pub struct Explainer {
    coach: Option<Arc<dyn Coach>>,
    deadline: Duration,
}

impl Explainer {
    pub fn new(coach: Option<Arc<dyn Coach>>, deadline: Duration) -> Self {
        Self { coach, deadline }
    }
    /// An explainer that always answers with the fallback.
    pub fn offline() -> Self {
        Self::new(None, Duration::ZERO)
    }
    pub fn is_online(&self) -> bool {
        self.coach.is_some()
    }
    pub async fn explain(&self, context: &Context) -> Explanation {
        match self.request(context).await {
            Ok(text) => Explanation {
                text,
                source: Source::Coach,
            },
            Err(e) => {
                match e {
                    Error::ConfigurationMissing(_) => log::debug!("{}", e),
                    _ => log::warn!("{}", e),
                }
                Explanation {
                    text: context.fallback(),
                    source: Source::Fallback,
                }
            }
        }
    }
    async fn request(&self, context: &Context) -> Result<String, Error> {
        let coach = self
            .coach
            .as_ref()
            .ok_or(Error::ConfigurationMissing("completion API key"))?;
        match tokio::time::timeout(self.deadline, coach.explain(context)).await {
            Err(_) => Err(Error::UpstreamExplanation(format!(
                "no answer within {:?}",
                self.deadline
            ))),
            Ok(Err(e)) => Err(Error::UpstreamExplanation(e.to_string())),
            Ok(Ok(text)) if text.trim().is_empty() => {
                Err(Error::UpstreamExplanation("empty completion".to_string()))
            }
            Ok(Ok(text)) => Ok(text),
        }
    }
}

/// Coach stand-ins for tests.
#[cfg(test)]
pub(crate) mod doubles {
    use super::*;

    /// Always answers with the same text.
    pub struct Fixed(pub &'static str);
    #[async_trait::async_trait]
    impl Coach for Fixed {
        async fn explain(&self, _: &Context) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Always errors, like an unreachable endpoint.
    pub struct Failing;
    #[async_trait::async_trait]
    impl Coach for Failing {
        async fn explain(&self, _: &Context) -> anyhow::Result<String> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    /// Never answers in time.
    pub struct Stalled;
    #[async_trait::async_trait]
    impl Coach for Stalled {
        async fn explain(&self, _: &Context) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    pub fn explainer(coach: impl Coach + 'static) -> Explainer {
        Explainer::new(Some(Arc::new(coach)), Duration::from_millis(50))
    }
}
