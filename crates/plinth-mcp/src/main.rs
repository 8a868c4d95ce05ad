use plinth_core::settings::ConfigDefaults;
use plinth_core::{CompilerConfig, Emphasis, Language, Preset, Quality, Selector, Settings, Style};
use plinth_prompt::{compile, PlanOptions};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};

// --- Request types ---

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
struct ConfigArgs {
    /// Free-text description of the diagram the user wants
    #[serde(default)]
    user_prompt: String,
    /// Diagram preset: "massing", "circulation", "zoning", "program", "experience" or "process". Omit for a generic diagram.
    preset: Option<String>,
    /// Rendering style: "minimal" or "bold"
    style: Option<String>,
    /// Facet that must dominate: "all", "massing", "circulation", "program" or "experience"
    emphasis: Option<String>,
    /// "draft" or "portfolio"
    quality: Option<String>,
    /// One specific facet of the preset to focus this image on
    intent: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct AnalyzeRequest {
    /// The prompt text to score
    text: String,
    /// "en" or "zh". Defaults to the configured language.
    language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct CompileRequest {
    #[serde(flatten)]
    config: ConfigArgs,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct IntentPresetsRequest {
    /// Diagram preset. Unknown or omitted presets return the generic list.
    preset: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct ExplainRequest {
    #[serde(flatten)]
    config: ConfigArgs,
    /// "en" or "zh". Defaults to the configured language.
    language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
struct PlanRequest {
    #[serde(flatten)]
    config: ConfigArgs,
    /// Generate one image per preset sub-intent instead of variations of one prompt
    #[serde(default)]
    multi_intent: bool,
    /// Number of sub-intents in multi-intent mode (1-4)
    intent_count: Option<usize>,
    /// Number of images for a single-intent request
    variations: Option<u32>,
}

// --- Response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    #[serde(flatten)]
    verdict: plinth_core::StrengthVerdict,
    min_score: u8,
    passes_gate: bool,
}

#[derive(Serialize)]
struct BlockEntry<'a> {
    name: &'a str,
    text: &'a str,
}

// --- Server ---

#[derive(Clone)]
pub struct PlinthServer {
    settings: Settings,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PlinthServer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Score a diagram prompt for specificity. Returns {score (0-100), level (exploratory|focused|precise), label, reasons, suggestions, breakdown {length, structure, keywords, constraints, vagueness}, minScore, passesGate}."
    )]
    fn analyze_prompt(
        &self,
        Parameters(req): Parameters<AnalyzeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let language = self.language(req.language.as_deref());
        let verdict = plinth_prompt::analyze_prompt_strength(&req.text, language);
        let passes_gate = plinth_prompt::passes_gate(&verdict, self.settings.min_score);
        json_result(&AnalyzeResponse {
            verdict,
            min_score: self.settings.min_score,
            passes_gate,
        })
    }

    #[tool(
        description = "Compile the final image-generation instruction for a diagram. Unknown preset/style/emphasis/quality values fall back to defaults."
    )]
    fn build_diagram_prompt(
        &self,
        Parameters(req): Parameters<CompileRequest>,
    ) -> Result<CallToolResult, McpError> {
        let config = resolve_config(&req.config, &self.settings.defaults);
        Ok(CallToolResult::success(vec![Content::text(
            plinth_prompt::build_diagram_prompt(&config),
        )]))
    }

    #[tool(
        description = "Get the compiled instruction as labelled blocks (role, quality, rendering, composition, grammar, preset, emphasis, intent, request, reminder) in output order"
    )]
    fn get_blocks(
        &self,
        Parameters(req): Parameters<CompileRequest>,
    ) -> Result<CallToolResult, McpError> {
        let config = resolve_config(&req.config, &self.settings.defaults);
        let blocks = compile::labelled_blocks(&config);
        let entries: Vec<BlockEntry> = blocks
            .iter()
            .map(|(name, text)| BlockEntry {
                name: *name,
                text: text.as_ref(),
            })
            .collect();
        json_result(&entries)
    }

    #[tool(description = "Get the four sub-intents of a diagram preset, most central first")]
    fn get_intent_presets(
        &self,
        Parameters(req): Parameters<IntentPresetsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let preset = req.preset.as_deref().and_then(Preset::parse);
        json_result(&plinth_prompt::get_intent_presets(preset))
    }

    #[tool(
        description = "Build a caption request (not an image instruction) describing a diagram generated from the given configuration"
    )]
    fn build_explanation_prompt(
        &self,
        Parameters(req): Parameters<ExplainRequest>,
    ) -> Result<CallToolResult, McpError> {
        let config = resolve_config(&req.config, &self.settings.defaults);
        let language = self.language(req.language.as_deref());
        Ok(CallToolResult::success(vec![Content::text(
            plinth_prompt::build_explanation_prompt(&config, language),
        )]))
    }

    #[tool(
        description = "Plan a generation request. Returns [{intent?, prompt, images}] in the order they should be sent. Single-intent mode asks for `variations` images of one prompt; multi-intent mode compiles one prompt per preset sub-intent."
    )]
    fn plan_generation(
        &self,
        Parameters(req): Parameters<PlanRequest>,
    ) -> Result<CallToolResult, McpError> {
        let config = resolve_config(&req.config, &self.settings.defaults);
        let options = resolve_plan_options(&req, &self.settings);
        json_result(&plinth_prompt::plan_generation(&config, &options))
    }
}

impl PlinthServer {
    fn language(&self, raw: Option<&str>) -> Language {
        raw.and_then(Language::parse).unwrap_or(self.settings.language)
    }
}

#[tool_handler]
impl ServerHandler for PlinthServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// --- Helpers ---

/// Missing or unknown selectors resolve to the configured defaults.
fn resolve_config(args: &ConfigArgs, defaults: &ConfigDefaults) -> CompilerConfig {
    CompilerConfig {
        user_prompt: args.user_prompt.clone(),
        preset: args.preset.as_deref().and_then(Preset::parse),
        style: args
            .style
            .as_deref()
            .and_then(Style::parse)
            .unwrap_or(defaults.style),
        emphasis: args
            .emphasis
            .as_deref()
            .and_then(Emphasis::parse)
            .unwrap_or(defaults.emphasis),
        quality: args
            .quality
            .as_deref()
            .and_then(Quality::parse)
            .unwrap_or(defaults.quality),
        intent: args.intent.clone().filter(|i| !i.trim().is_empty()),
    }
}

fn resolve_plan_options(req: &PlanRequest, settings: &Settings) -> PlanOptions {
    PlanOptions {
        multi_intent: req.multi_intent,
        intent_count: req.intent_count.unwrap_or(settings.intent_count),
        variations: req.variations.unwrap_or(settings.variations),
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
            "Serialization error: {}",
            e
        ))])),
    }
}

const INSTRUCTIONS: &str = r#"Plinth turns free-text descriptions of architectural diagrams into structured image-generation instructions.

## Workflow
1. Call `analyze_prompt` whenever the user's description changes. Show the reasons and suggestions. If `passesGate` is false, help the user add detail before generating.
2. Call `plan_generation` to get the prompt(s) to send to the image provider. Send them in the returned order, one at a time.
3. Use `get_intent_presets` to show which facets multi-intent mode will cover, and `build_explanation_prompt` to caption a finished image.

Plinth never calls an image provider itself."#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = plinth_core::settings::read_settings();
    log::info!(
        "starting plinth-mcp (language={}, minScore={})",
        settings.language.as_str(),
        settings.min_score
    );

    let service = PlinthServer::new(settings)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| log::error!("MCP server error: {}", e))?;
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_args_fall_back_to_settings_defaults() {
        let defaults = ConfigDefaults {
            style: Style::Bold,
            emphasis: Emphasis::Program,
            quality: Quality::Draft,
        };
        let args = ConfigArgs {
            user_prompt: "two towers".to_string(),
            preset: Some("tower".to_string()),
            style: Some("watercolor".to_string()),
            emphasis: None,
            quality: Some("Portfolio".to_string()),
            intent: Some(" ".to_string()),
        };
        let config = resolve_config(&args, &defaults);
        assert_eq!(config.preset, None);
        assert_eq!(config.style, Style::Bold);
        assert_eq!(config.emphasis, Emphasis::Program);
        assert_eq!(config.quality, Quality::Portfolio);
        assert_eq!(config.intent, None);
    }

    #[test]
    fn request_json_uses_camel_case() {
        let req: PlanRequest = serde_json::from_str(
            r#"{"userPrompt":"courtyard house","preset":"zoning","multiIntent":true,"intentCount":2}"#,
        )
        .unwrap();
        let settings = Settings::default();
        let options = resolve_plan_options(&req, &settings);
        assert!(options.multi_intent);
        assert_eq!(options.intent_count, 2);
        assert_eq!(options.variations, settings.variations);
        assert_eq!(req.config.preset.as_deref(), Some("zoning"));
        assert_eq!(req.config.user_prompt, "courtyard house");
    }

    #[test]
    fn language_defaults_to_settings() {
        let server = PlinthServer::new(Settings {
            language: Language::Zh,
            ..Default::default()
        });
        assert_eq!(server.language(None), Language::Zh);
        assert_eq!(server.language(Some("martian")), Language::Zh);
        assert_eq!(server.language(Some("en")), Language::En);
    }

    #[test]
    fn analyze_response_flattens_verdict() {
        let verdict = plinth_prompt::analyze_prompt_strength("nice diagram", Language::En);
        let json = serde_json::to_value(AnalyzeResponse {
            verdict,
            min_score: 40,
            passes_gate: false,
        })
        .unwrap();
        assert_eq!(json["score"], 8);
        assert_eq!(json["level"], "exploratory");
        assert_eq!(json["passesGate"], false);
        assert!(json["breakdown"]["vagueness"].as_f64().unwrap() > 0.0);
    }
}
