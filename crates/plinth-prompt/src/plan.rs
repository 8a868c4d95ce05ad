use serde::{Deserialize, Serialize};

use plinth_core::{CompilerConfig, Settings, StrengthVerdict};

use crate::compile::compile;
use crate::intents::{expand_intents_limited, INTENTS_PER_PRESET};

/// Generation request shape. Intent diversity and variation count are
/// independent: multi-intent mode uses `intent_count`, single-intent mode uses
/// `variations`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanOptions {
    pub multi_intent: bool,
    pub intent_count: usize,
    pub variations: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for PlanOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            multi_intent: false,
            intent_count: settings.intent_count,
            variations: settings.variations,
        }
    }
}

/// One compiled prompt and the number of images to request with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    pub prompt: String,
    pub images: u32,
}

/// Expand one request into the ordered prompts an orchestrator should send.
///
/// In multi-intent mode any caller-supplied intent is replaced by the preset's
/// sub-intents.
pub fn plan(config: &CompilerConfig, options: &PlanOptions) -> Vec<PlannedRequest> {
    if !options.multi_intent {
        return vec![PlannedRequest {
            intent: config.intent().map(str::to_string),
            prompt: compile(config),
            images: options.variations.max(1),
        }];
    }

    let count = options.intent_count.clamp(1, INTENTS_PER_PRESET);
    expand_intents_limited(config.preset, count)
        .into_iter()
        .map(|label| {
            let scoped = config.clone().with_intent(label);
            PlannedRequest {
                intent: Some(label.to_string()),
                prompt: compile(&scoped),
                images: 1,
            }
        })
        .collect()
}

/// Whether a verdict clears a caller-chosen score gate.
pub fn passes_gate(verdict: &StrengthVerdict, min_score: u8) -> bool {
    verdict.score >= min_score
}
