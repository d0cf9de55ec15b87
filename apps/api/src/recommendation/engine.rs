//! Recommendation Engine: picks the strategy and guarantees a well-formed result.
//!
//! Flow:
//!   empty catalogue → "no products" routine
//!   generator configured → LLM routine (validated) → on any failure, local matching
//!   no generator → local matching
//!   local matching panics → `RoutineRecommendation::unavailable()`
//!
//! `recommend` never returns an error; UI code can call it without a fallback of its own.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError, TextGenerator, MODEL};
use crate::models::{Product, RoutineRecommendation, SkinProfile};
use crate::recommendation::matcher::match_routine;
use crate::recommendation::prompts::{build_routine_prompt, routine_system};
use crate::recommendation::response::{parse_routine_reply, ResponseError};

/// Which strategy `recommend` tries first. For display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationProvider {
    Generative,
    RuleBased,
}

impl RecommendationProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationProvider::Generative => "generative",
            RecommendationProvider::RuleBased => "rule-based",
        }
    }

    pub fn label(&self) -> String {
        match self {
            RecommendationProvider::Generative => format!("AI advisor ({MODEL})"),
            RecommendationProvider::RuleBased => "Skin-profile matching".to_string(),
        }
    }
}

/// Why the generative path was abandoned.
#[derive(Debug, Error)]
enum GenerativeError {
    #[error("no skincare products to offer the model")]
    NothingToOffer,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Response(#[from] ResponseError),
}

#[derive(Clone)]
pub struct RecommendationEngine {
    generator: Option<Arc<dyn TextGenerator>>,
    timeout: Duration,
}

impl RecommendationEngine {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Wires an `LlmClient` only when a credential is configured.
    pub fn from_config(config: &Config) -> Self {
        let generator = config.anthropic_api_key.clone().map(|key| {
            Arc::new(LlmClient::new(key, config.llm_timeout)) as Arc<dyn TextGenerator>
        });
        Self::new(generator, config.llm_timeout)
    }

    /// A pure function of whether a generator is configured.
    pub fn provider(&self) -> RecommendationProvider {
        if self.generator.is_some() {
            RecommendationProvider::Generative
        } else {
            RecommendationProvider::RuleBased
        }
    }

    pub async fn recommend(
        &self,
        profile: &SkinProfile,
        catalogue: &[Product],
    ) -> RoutineRecommendation {
        if catalogue.is_empty() {
            info!("Empty catalogue, returning no-products routine");
            return RoutineRecommendation::no_products();
        }

        if let Some(generator) = &self.generator {
            match self.recommend_generative(generator.as_ref(), profile, catalogue).await {
                Ok(recommendation) => return recommendation,
                Err(e) => warn!("Generative recommendation failed, using local matching: {e}"),
            }
        }

        recommend_local(profile, catalogue)
    }

    async fn recommend_generative(
        &self,
        generator: &dyn TextGenerator,
        profile: &SkinProfile,
        catalogue: &[Product],
    ) -> Result<RoutineRecommendation, GenerativeError> {
        let prompt =
            build_routine_prompt(profile, catalogue).ok_or(GenerativeError::NothingToOffer)?;
        let system = routine_system();

        let reply = tokio::time::timeout(self.timeout, generator.generate(&prompt, &system))
            .await
            .map_err(|_| LlmError::Timeout(self.timeout))??;

        Ok(parse_routine_reply(&reply, catalogue)?)
    }
}

fn recommend_local(profile: &SkinProfile, catalogue: &[Product]) -> RoutineRecommendation {
    guarded(|| match_routine(profile, catalogue))
}

/// Terminal guard: a panic inside `f` becomes the unavailable routine.
fn guarded(f: impl FnOnce() -> RoutineRecommendation) -> RoutineRecommendation {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        error!("Local matching panicked, returning unavailable routine");
        RoutineRecommendation::unavailable()
    })
}
