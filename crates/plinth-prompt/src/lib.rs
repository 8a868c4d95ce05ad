pub mod analyze;
pub mod compile;
pub mod explain;
pub mod intents;
pub mod plan;

use plinth_core::{CompilerConfig, Language, Preset, StrengthVerdict};

pub use explain::build_explanation_prompt;
pub use plan::{passes_gate, PlanOptions, PlannedRequest};

/// Score how specific and controllable a free-text diagram prompt is.
pub fn analyze_prompt_strength(text: &str, language: Language) -> StrengthVerdict {
    analyze::analyze(text, language)
}

/// Compile a configuration into the instruction sent to the image provider.
pub fn build_diagram_prompt(config: &CompilerConfig) -> String {
    compile::compile(config)
}

/// The four sub-intents of a preset, in priority order.
pub fn get_intent_presets(preset: Option<Preset>) -> [&'static str; intents::INTENTS_PER_PRESET] {
    intents::expand_intents(preset)
}

/// The compiled prompts an orchestrator should send for one generation request.
pub fn plan_generation(config: &CompilerConfig, options: &PlanOptions) -> Vec<PlannedRequest> {
    let planned = plan::plan(config, options);
    log::debug!(
        "planned {} request(s), {} image(s) total",
        planned.len(),
        planned.iter().map(|p| p.images).sum::<u32>()
    );
    planned
}
