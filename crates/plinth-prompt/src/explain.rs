//! Caption request builder.
//!
//! Produces a short natural-language request for a text model to caption a
//! generated diagram. Same assembly style as the image compiler, but every
//! fragment follows the selected language.

use plinth_core::{CompilerConfig, Emphasis, Language, Preset};

use crate::compile::BLOCK_SEPARATOR;

type CaptionBlock = fn(&CompilerConfig, Language) -> Option<String>;

const BLOCKS: &[CaptionBlock] = &[role, diagram_type, emphasis, intent, description, format];

fn pick(language: Language, en: &str, zh: &str) -> String {
    match language {
        Language::En => en.to_string(),
        Language::Zh => zh.to_string(),
    }
}

fn role(_: &CompilerConfig, language: Language) -> Option<String> {
    Some(pick(
        language,
        "You write short, precise captions for architectural diagrams.",
        "你负责为建筑图解撰写简短、准确的说明文字。",
    ))
}

fn preset_name(preset: Option<Preset>, language: Language) -> &'static str {
    match (preset, language) {
        (Some(Preset::Massing), Language::En) => "massing diagram",
        (Some(Preset::Massing), Language::Zh) => "体块分析图",
        (Some(Preset::Circulation), Language::En) => "circulation diagram",
        (Some(Preset::Circulation), Language::Zh) => "流线分析图",
        (Some(Preset::Zoning), Language::En) => "zoning diagram",
        (Some(Preset::Zoning), Language::Zh) => "功能分区图",
        (Some(Preset::Program), Language::En) => "program diagram",
        (Some(Preset::Program), Language::Zh) => "功能构成图",
        (Some(Preset::Experience), Language::En) => "spatial experience diagram",
        (Some(Preset::Experience), Language::Zh) => "空间体验图",
        (Some(Preset::Process), Language::En) => "design process diagram",
        (Some(Preset::Process), Language::Zh) => "设计生成过程图",
        (None, Language::En) => "architectural concept diagram",
        (None, Language::Zh) => "建筑概念图解",
    }
}

fn emphasis_name(emphasis: Emphasis, language: Language) -> &'static str {
    match (emphasis, language) {
        (Emphasis::All, Language::En) => "a balanced reading of volumes, movement and program",
        (Emphasis::All, Language::Zh) => "体块、流线与功能的整体关系",
        (Emphasis::Massing, Language::En) => "the massing and volumes",
        (Emphasis::Massing, Language::Zh) => "体块与体量关系",
        (Emphasis::Circulation, Language::En) => "circulation and movement",
        (Emphasis::Circulation, Language::Zh) => "流线与动线组织",
        (Emphasis::Program, Language::En) => "the program and its adjacencies",
        (Emphasis::Program, Language::Zh) => "功能布局与相邻关系",
        (Emphasis::Experience, Language::En) => "the sequence of spatial experience",
        (Emphasis::Experience, Language::Zh) => "空间体验的序列",
    }
}

fn diagram_type(config: &CompilerConfig, language: Language) -> Option<String> {
    let name = preset_name(config.preset, language);
    Some(match language {
        Language::En => format!("Diagram type: {name}."),
        Language::Zh => format!("图解类型：{name}。"),
    })
}

fn emphasis(config: &CompilerConfig, language: Language) -> Option<String> {
    let focus = emphasis_name(config.emphasis, language);
    Some(match language {
        Language::En => format!("It emphasizes {focus}."),
        Language::Zh => format!("图面重点表达{focus}。"),
    })
}

fn intent(config: &CompilerConfig, language: Language) -> Option<String> {
    config.intent().map(|i| match language {
        Language::En => format!("This image focuses on: {i}"),
        Language::Zh => format!("本图聚焦：{i}"),
    })
}

fn description(config: &CompilerConfig, language: Language) -> Option<String> {
    let text = config.user_prompt.trim();
    Some(match (text.is_empty(), language) {
        (true, Language::En) => "Design description: (none given)".to_string(),
        (true, Language::Zh) => "设计描述：（未提供）".to_string(),
        (false, Language::En) => format!("Design description: {text}"),
        (false, Language::Zh) => format!("设计描述：{text}"),
    })
}

fn format(_: &CompilerConfig, language: Language) -> Option<String> {
    Some(pick(
        language,
        "Write 2-3 sentences, under 60 words, in plain text without markdown. Say what the diagram shows and what it reveals about the design.",
        "请用两到三句话、不超过120字、纯文本（不要使用标记语法）说明这张图表达了什么，以及它揭示了设计的哪些特点。",
    ))
}

/// Build the caption request for a diagram generated from `config`.
pub fn build_explanation_prompt(config: &CompilerConfig, language: Language) -> String {
    BLOCKS
        .iter()
        .filter_map(|block| block(config, language))
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
        .trim()
        .to_string()
}
