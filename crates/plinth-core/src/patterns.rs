//! Static rule groups used by the prompt strength analyzer.
//!
//! A group is a named list of regular expressions. Scoring always counts every
//! occurrence of every pattern, not just whether a group matched.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub struct RuleGroup {
    pub name: &'static str,
    patterns: Vec<Regex>,
}

impl RuleGroup {
    fn new(name: &'static str, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|src| Regex::new(src).unwrap_or_else(|e| panic!("rule group {name}: {e}")))
            .collect();
        Self { name, patterns }
    }

    /// Total number of non-overlapping matches across all patterns.
    pub fn count(&self, text: &str) -> usize {
        self.patterns.iter().map(|p| p.find_iter(text).count()).sum()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

// --- Specificity vocabulary ---

// English terms use ASCII word boundaries: CJK characters count as word
// characters under Unicode `\b`, which would hide "做一个massing图".

pub static DIAGRAM_TYPES: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "diagram-type",
        &[
            r"(?i)(?-u:\b)diagrams?(?-u:\b)",
            r"(?i)(?-u:\b)(?:axonometric|isometric|exploded|orthographic)(?-u:\b)",
            r"(?i)(?-u:\b)(?:massing|circulation|zoning|program(?:me)?|adjacency)(?-u:\b)",
            r"(?i)(?-u:\b)(?:site|floor)\s+plans?(?-u:\b)|(?-u:\b)sections?(?-u:\b)|(?-u:\b)elevations?(?-u:\b)",
        ],
    )
});

pub static VISUAL_LANGUAGE: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "visual-language",
        &[
            r"(?i)(?-u:\b)(?:line\s?work|monochrome|flat|outlines?|hatch(?:ing)?|dashed|dotted)(?-u:\b)",
            r"(?i)(?-u:\b)arrows?(?-u:\b)",
            r"(?i)(?-u:\b)(?:colou?r(?:ed|s)?|palette|white background|black and white)(?-u:\b)",
        ],
    )
});

pub static SPATIAL_RELATIONS: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "spatial-relation",
        &[
            r"(?i)(?-u:\b)(?:adjacent|next to|around|between|above|below|beneath|along|within|surrounding|facing|connected|linked)(?-u:\b)",
            r"(?i)(?-u:\b)(?:courtyard|atrium|podium|lobby|corridor|core)(?-u:\b)",
        ],
    )
});

pub static OUTPUT_DIRECTIVES: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "output-directive",
        &[
            r"(?i)(?-u:\b)(?:show|shows|showing|highlight|emphasi[sz]e|illustrate|depict|indicate|separate|distinguish)(?-u:\b)",
            r"(?i)(?-u:\b)focus(?:ing)? on(?-u:\b)",
        ],
    )
});

pub static CJK_TERMS: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "cjk-term",
        &[
            r"图解|示意图|轴测|剖面|平面图|立面|体块|流线|动线|分区|功能",
            r"箭头|线稿|单色|虚线",
            r"相邻|围绕|之间|连接|庭院|中庭",
            r"突出|展示|强调|区分",
        ],
    )
});

/// The five groups that together make up the keyword sub-score.
pub fn keyword_groups() -> [&'static RuleGroup; 5] {
    [
        &*DIAGRAM_TYPES,
        &*VISUAL_LANGUAGE,
        &*SPATIAL_RELATIONS,
        &*OUTPUT_DIRECTIVES,
        &*CJK_TERMS,
    ]
}

// --- Constraints ---

pub static NUMBERS: Lazy<RuleGroup> = Lazy::new(|| RuleGroup::new("number", &[r"\d+(?:\.\d+)?"]));

pub static ROLE_WORDS: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "role",
        &[
            r"(?i)(?-u:\b)(?:semi-public|public|private|service|staff|guests?|visitors?|residents?|back-of-house|front-of-house)(?-u:\b)",
            r"半公共|公共|私密|服务|员工|访客|客人|居民|后勤",
        ],
    )
});

pub static ENUM_SEPARATORS: Lazy<RuleGroup> =
    Lazy::new(|| RuleGroup::new("enum-separator", &[r"[/|]"]));

// --- Structure ---

pub static CLAUSE_SEPARATORS: Lazy<RuleGroup> =
    Lazy::new(|| RuleGroup::new("clause-separator", &[r"[,:;，：；、]"]));

pub static LIST_MARKERS: Lazy<RuleGroup> =
    Lazy::new(|| RuleGroup::new("list-marker", &[r"(?m)^\s*(?:[-*•]|\d+[.)])\s+"]));

// --- Vagueness ---

pub static VAGUE_WORDS: Lazy<RuleGroup> = Lazy::new(|| {
    RuleGroup::new(
        "vague",
        &[
            r"(?i)(?-u:\b)(?:nice|beautiful|pretty|cool|awesome|amazing|stunning|gorgeous|random|whatever|something)(?-u:\b)",
            r"(?i)(?-u:\b)make it (?:look )?(?:good|better|pop)(?-u:\b)",
            r"好看|漂亮|高级感|随便|酷炫|美观|大气",
        ],
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_groups_compile() {
        for group in keyword_groups() {
            assert!(!group.patterns.is_empty(), "{}", group.name);
        }
        for group in [
            &*NUMBERS,
            &*ROLE_WORDS,
            &*ENUM_SEPARATORS,
            &*CLAUSE_SEPARATORS,
            &*LIST_MARKERS,
            &*VAGUE_WORDS,
        ] {
            assert!(!group.patterns.is_empty(), "{}", group.name);
        }
    }

    #[test]
    fn counts_every_occurrence() {
        assert_eq!(DIAGRAM_TYPES.count("diagram, diagram and another diagram"), 3);
        assert_eq!(NUMBERS.count("3 levels, 12 units, 4.5m grid"), 3);
        assert_eq!(ENUM_SEPARATORS.count("public/private|service"), 2);
    }

    #[test]
    fn word_boundaries_hold() {
        assert_eq!(VAGUE_WORDS.count("niceties aside"), 0);
        assert_eq!(VAGUE_WORDS.count("Make it nice"), 1);
        assert_eq!(VAGUE_WORDS.count("make it look good"), 1);
        assert_eq!(ROLE_WORDS.count("semi-public terrace"), 1);
        assert_eq!(ROLE_WORDS.count("半公共空间"), 1);
    }

    #[test]
    fn english_terms_match_flush_against_cjk() {
        assert_eq!(DIAGRAM_TYPES.count("做一个massing图"), 1);
        assert_eq!(DIAGRAM_TYPES.count("circulation diagram展示入口"), 2);
        assert_eq!(ROLE_WORDS.count("区分public和private"), 2);
        assert_eq!(VAGUE_WORDS.count("nice的图"), 1);
        assert_eq!(VAGUE_WORDS.count("niceties的图"), 0);
    }

    #[test]
    fn cjk_terms_match_without_spaces() {
        assert_eq!(CJK_TERMS.count("流线图，大堂连接庭院"), 3);
        assert!(VAGUE_WORDS.is_match("做得好看一点"));
    }

    #[test]
    fn list_markers_need_line_start() {
        assert_eq!(LIST_MARKERS.count("- lobby\n- hall\n2. roof"), 3);
        assert_eq!(LIST_MARKERS.count("east - west"), 0);
    }
}
