pub mod blocks;
pub mod error;
pub mod messages;
pub mod patterns;
pub mod settings;

pub use error::{PlinthError, Result};
pub use settings::Settings;

use serde::{Deserialize, Deserializer, Serialize};

// --- Configuration enums ---

/// Shared behaviour of the string-valued configuration selectors.
///
/// Parsing is lenient: input is trimmed and lowercased, and callers decide
/// what an unknown value resolves to (usually the `Default`).
pub trait Selector: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_lowercase();
        Self::ALL.iter().copied().find(|v| v.as_str() == needle)
    }
}

/// Architectural diagram category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Massing,
    Circulation,
    Zoning,
    Program,
    Experience,
    Process,
}

impl Selector for Preset {
    const ALL: &'static [Self] = &[
        Preset::Massing,
        Preset::Circulation,
        Preset::Zoning,
        Preset::Program,
        Preset::Experience,
        Preset::Process,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Preset::Massing => "massing",
            Preset::Circulation => "circulation",
            Preset::Zoning => "zoning",
            Preset::Program => "program",
            Preset::Experience => "experience",
            Preset::Process => "process",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "massing" => Some(Preset::Massing),
            "circulation" => Some(Preset::Circulation),
            "zoning" => Some(Preset::Zoning),
            "program" | "programme" => Some(Preset::Program),
            "experience" | "spatial-experience" | "spatial_experience" | "immersive" => {
                Some(Preset::Experience)
            }
            "process" => Some(Preset::Process),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Minimal,
    Bold,
}

impl Selector for Style {
    const ALL: &'static [Self] = &[Style::Minimal, Style::Bold];

    fn as_str(&self) -> &'static str {
        match self {
            Style::Minimal => "minimal",
            Style::Bold => "bold",
        }
    }
}

/// Which diagram facet must dominate the output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    All,
    Massing,
    Circulation,
    Program,
    Experience,
}

impl Selector for Emphasis {
    const ALL: &'static [Self] = &[
        Emphasis::All,
        Emphasis::Massing,
        Emphasis::Circulation,
        Emphasis::Program,
        Emphasis::Experience,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Emphasis::All => "all",
            Emphasis::Massing => "massing",
            Emphasis::Circulation => "circulation",
            Emphasis::Program => "program",
            Emphasis::Experience => "experience",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Draft,
    #[default]
    Portfolio,
}

impl Selector for Quality {
    const ALL: &'static [Self] = &[Quality::Draft, Quality::Portfolio];

    fn as_str(&self) -> &'static str {
        match self {
            Quality::Draft => "draft",
            Quality::Portfolio => "portfolio",
        }
    }
}

/// Language of every user-facing string in one verdict or caption request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Selector for Language {
    const ALL: &'static [Self] = &[Language::En, Language::Zh];

    fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Some(Language::En),
            "zh" | "zh-cn" | "zh-hans" | "cn" | "chinese" => Some(Language::Zh),
            _ => None,
        }
    }
}

/// Deserialize a selector from a string, falling back to its default when the
/// value is missing or unknown.
pub fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Selector + Default,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(T::parse).unwrap_or_default())
}

/// Like [`lenient`] but for optional selectors, where unknown means `None`.
pub fn lenient_opt<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Selector,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(T::parse))
}

// --- Compiler input ---

/// Everything the compilers need for one call. Constructed per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    #[serde(default)]
    pub user_prompt: String,
    #[serde(default, deserialize_with = "lenient_opt", skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(default, deserialize_with = "lenient")]
    pub style: Style,
    #[serde(default, deserialize_with = "lenient")]
    pub emphasis: Emphasis,
    #[serde(default, deserialize_with = "lenient")]
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

impl CompilerConfig {
    pub fn new(user_prompt: impl Into<String>) -> Self {
        Self {
            user_prompt: user_prompt.into(),
            ..Default::default()
        }
    }

    /// Build a config from loosely-typed names, resolving anything unknown to
    /// the documented defaults.
    pub fn from_names(
        user_prompt: &str,
        preset: Option<&str>,
        style: Option<&str>,
        emphasis: Option<&str>,
        quality: Option<&str>,
        intent: Option<&str>,
    ) -> Self {
        Self {
            user_prompt: user_prompt.to_string(),
            preset: preset.and_then(Preset::parse),
            style: style.and_then(Style::parse).unwrap_or_default(),
            emphasis: emphasis.and_then(Emphasis::parse).unwrap_or_default(),
            quality: quality.and_then(Quality::parse).unwrap_or_default(),
            intent: intent
                .filter(|i| !i.trim().is_empty())
                .map(|i| i.to_string()),
        }
    }

    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// The intent, if one was supplied and is not blank.
    pub fn intent(&self) -> Option<&str> {
        self.intent.as_deref().filter(|i| !i.trim().is_empty())
    }
}

// --- Analyzer output ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Exploratory,
    Focused,
    Precise,
}

impl StrengthLevel {
    pub const PRECISE_FROM: u8 = 70;
    pub const FOCUSED_FROM: u8 = 40;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::PRECISE_FROM {
            StrengthLevel::Precise
        } else if score >= Self::FOCUSED_FROM {
            StrengthLevel::Focused
        } else {
            StrengthLevel::Exploratory
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        let key = match self {
            StrengthLevel::Exploratory => messages::MessageKey::LabelExploratory,
            StrengthLevel::Focused => messages::MessageKey::LabelFocused,
            StrengthLevel::Precise => messages::MessageKey::LabelPrecise,
        };
        key.text(language)
    }
}

/// The independently computed sub-scores behind a verdict.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub length: f64,
    pub structure: f64,
    pub keywords: f64,
    pub constraints: f64,
    /// Penalty, already clamped; subtracted from the sum of the others.
    pub vagueness: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u8 {
        let raw = self.length + self.structure + self.keywords + self.constraints - self.vagueness;
        raw.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthVerdict {
    pub score: u8,
    pub level: StrengthLevel,
    pub label: String,
    pub reasons: Vec<String>,
    pub suggestions: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_are_exact() {
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::Precise);
        assert_eq!(StrengthLevel::from_score(70), StrengthLevel::Precise);
        assert_eq!(StrengthLevel::from_score(69), StrengthLevel::Focused);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Focused);
        assert_eq!(StrengthLevel::from_score(39), StrengthLevel::Exploratory);
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Exploratory);
    }

    #[test]
    fn breakdown_total_rounds_and_clamps() {
        let low = ScoreBreakdown {
            length: 10.0,
            vagueness: 20.0,
            ..Default::default()
        };
        assert_eq!(low.total(), 0);

        let high = ScoreBreakdown {
            length: 60.0,
            structure: 28.0,
            keywords: 30.0,
            constraints: 20.0,
            vagueness: 0.0,
        };
        assert_eq!(high.total(), 100);

        let half = ScoreBreakdown {
            length: 40.0,
            keywords: 2.5,
            ..Default::default()
        };
        assert_eq!(half.total(), 43);
    }

    #[test]
    fn selectors_parse_leniently() {
        assert_eq!(Preset::parse(" Zoning "), Some(Preset::Zoning));
        assert_eq!(Preset::parse("spatial-experience"), Some(Preset::Experience));
        assert_eq!(Preset::parse("tower"), None);
        assert_eq!(Style::parse("BOLD"), Some(Style::Bold));
        assert_eq!(Language::parse("zh-CN"), Some(Language::Zh));
        assert_eq!(Emphasis::parse("nope"), None);
    }

    #[test]
    fn from_names_falls_back_to_defaults() {
        let config = CompilerConfig::from_names(
            "a plan",
            Some("unknown"),
            Some("watercolor"),
            None,
            Some(""),
            Some("   "),
        );
        assert_eq!(config.preset, None);
        assert_eq!(config.style, Style::Minimal);
        assert_eq!(config.emphasis, Emphasis::All);
        assert_eq!(config.quality, Quality::Portfolio);
        assert_eq!(config.intent, None);
    }

    #[test]
    fn config_deserializes_unknown_values_to_defaults() {
        let json = r#"{"userPrompt":"x","preset":"castle","style":"neon","emphasis":"program","quality":"ultra"}"#;
        let config: CompilerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.preset, None);
        assert_eq!(config.style, Style::Minimal);
        assert_eq!(config.emphasis, Emphasis::Program);
        assert_eq!(config.quality, Quality::Portfolio);

        let empty: CompilerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CompilerConfig::default());
    }

    #[test]
    fn level_labels_follow_language() {
        assert_eq!(StrengthLevel::Precise.label(Language::En), "Precise");
        assert_eq!(StrengthLevel::Precise.label(Language::Zh), "精确");
    }
}
