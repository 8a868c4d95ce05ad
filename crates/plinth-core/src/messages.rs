//! Bilingual display strings for analyzer verdicts.
//!
//! Scoring code only ever picks a [`MessageKey`]; the literal text lives here so
//! a new language is a new column, not a change to the arithmetic.

use crate::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LabelExploratory,
    LabelFocused,
    LabelPrecise,
    ReasonEmpty,
    ReasonEnoughDetail,
    ReasonTooLittleDetail,
    ReasonOrganized,
    ReasonSingleBlock,
    ReasonClearTerms,
    ReasonFewTerms,
    ReasonHasConstraints,
    ReasonFewConstraints,
    ReasonVague,
    SuggestStart,
    SuggestDiagramType,
    SuggestConstraints,
    SuggestStructure,
}

impl MessageKey {
    pub fn text(self, language: Language) -> &'static str {
        let (en, zh) = self.pair();
        match language {
            Language::En => en,
            Language::Zh => zh,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            MessageKey::LabelExploratory => ("Exploratory", "探索"),
            MessageKey::LabelFocused => ("Focused", "聚焦"),
            MessageKey::LabelPrecise => ("Precise", "精确"),
            MessageKey::ReasonEmpty => ("No prompt yet", "还没有输入提示词"),
            MessageKey::ReasonEnoughDetail => ("Enough detail to work with", "细节较充分"),
            MessageKey::ReasonTooLittleDetail => ("Too little detail", "细节太少"),
            MessageKey::ReasonOrganized => (
                "Organized into clauses or lines",
                "有分句或分行的组织",
            ),
            MessageKey::ReasonSingleBlock => (
                "Written as one unbroken block",
                "整段文字没有分隔",
            ),
            MessageKey::ReasonClearTerms => (
                "Clear diagram and architecture terms",
                "图解和建筑术语明确",
            ),
            MessageKey::ReasonFewTerms => (
                "Few diagram or architecture terms",
                "缺少图解或建筑术语",
            ),
            MessageKey::ReasonHasConstraints => (
                "Has numeric or categorical constraints",
                "包含数量或类别约束",
            ),
            MessageKey::ReasonFewConstraints => ("Few hard constraints", "硬性约束较少"),
            MessageKey::ReasonVague => ("Contains vague words", "包含空泛的形容词"),
            MessageKey::SuggestStart => (
                "Describe the building, the diagram type and what it should show",
                "先描述建筑、图解类型以及需要表达的内容",
            ),
            MessageKey::SuggestDiagramType => (
                "Name the diagram type and one spatial relationship, e.g. \"circulation diagram, lobby connected to courtyard\"",
                "写明图解类型和一种空间关系，例如“流线图，大堂连接庭院”",
            ),
            MessageKey::SuggestConstraints => (
                "Add hard constraints: counts, levels, or user groups such as public / private / service",
                "加入硬性约束：数量、层数，或公共 / 私密 / 服务等人群分类",
            ),
            MessageKey::SuggestStructure => (
                "Group requirements with commas, semicolons or line breaks",
                "用逗号、分号或换行把要求分组",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[MessageKey] = &[
        MessageKey::LabelExploratory,
        MessageKey::LabelFocused,
        MessageKey::LabelPrecise,
        MessageKey::ReasonEmpty,
        MessageKey::ReasonEnoughDetail,
        MessageKey::ReasonTooLittleDetail,
        MessageKey::ReasonOrganized,
        MessageKey::ReasonSingleBlock,
        MessageKey::ReasonClearTerms,
        MessageKey::ReasonFewTerms,
        MessageKey::ReasonHasConstraints,
        MessageKey::ReasonFewConstraints,
        MessageKey::ReasonVague,
        MessageKey::SuggestStart,
        MessageKey::SuggestDiagramType,
        MessageKey::SuggestConstraints,
        MessageKey::SuggestStructure,
    ];

    #[test]
    fn every_key_has_both_languages() {
        for key in ALL {
            let en = key.text(Language::En);
            let zh = key.text(Language::Zh);
            assert!(!en.is_empty(), "{key:?} missing en");
            assert!(!zh.is_empty(), "{key:?} missing zh");
            assert_ne!(en, zh, "{key:?} not translated");
        }
    }

    #[test]
    fn chinese_column_has_no_latin_sentences() {
        for key in ALL {
            let zh = key.text(Language::Zh);
            let latin = zh.chars().filter(|c| c.is_ascii_alphabetic()).count();
            assert_eq!(latin, 0, "{key:?} mixes languages: {zh}");
        }
    }
}
