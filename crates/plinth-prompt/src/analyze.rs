use plinth_core::messages::MessageKey;
use plinth_core::patterns::{self, RuleGroup};
use plinth_core::{Language, ScoreBreakdown, StrengthLevel, StrengthVerdict};

pub const KEYWORD_WEIGHT: f64 = 6.0;
const KEYWORD_MAX: f64 = 30.0;

const NUMBER_WEIGHT: f64 = 4.0;
const ROLE_WEIGHT: f64 = 3.0;
const SEPARATOR_WEIGHT: f64 = 2.0;
const CONSTRAINT_MAX: f64 = 20.0;

pub const VAGUE_WEIGHT: f64 = 8.0;
const VAGUE_MAX: f64 = 20.0;

// Diagnostic thresholds, restated from the scoring rules.
const DETAIL_MIN_CHARS: usize = 80;
const STRUCTURE_OK: f64 = 10.0;
const CLEAR_TERMS: f64 = 18.0;
const HAS_CONSTRAINTS: f64 = 10.0;
const NEEDS_CONSTRAINTS_BELOW: f64 = 8.0;
const NEEDS_DIAGRAM_TYPE_BELOW: u8 = 40;

/// Score a prompt for how specific and controllable it is.
///
/// Total over all input: empty or whitespace-only text yields a zero verdict
/// with a single "no prompt yet" reason and suggestion.
pub fn analyze(text: &str, language: Language) -> StrengthVerdict {
    let text = text.trim();
    if text.is_empty() {
        return empty_verdict(language);
    }

    let chars = text.chars().count();
    let breakdown = ScoreBreakdown {
        length: length_score(chars),
        structure: structure_score(text),
        keywords: keyword_score(text),
        constraints: constraint_score(text),
        vagueness: vagueness_penalty(text),
    };
    let score = breakdown.total();
    let level = StrengthLevel::from_score(score);

    log::debug!(
        "prompt strength: {} chars, {:?} -> {} ({:?})",
        chars,
        breakdown,
        score,
        level
    );

    StrengthVerdict {
        score,
        level,
        label: level.label(language).to_string(),
        reasons: render(&reasons(chars, &breakdown), language),
        suggestions: render(&suggestions(score, &breakdown), language),
        breakdown,
    }
}

fn empty_verdict(language: Language) -> StrengthVerdict {
    let level = StrengthLevel::Exploratory;
    StrengthVerdict {
        score: 0,
        level,
        label: level.label(language).to_string(),
        reasons: render(&[MessageKey::ReasonEmpty], language),
        suggestions: render(&[MessageKey::SuggestStart], language),
        breakdown: ScoreBreakdown::default(),
    }
}

fn render(keys: &[MessageKey], language: Language) -> Vec<String> {
    keys.iter().map(|k| k.text(language).to_string()).collect()
}

// --- Sub-scores ---

/// Rewards the 120–260 character band; very long text drops back a little.
pub fn length_score(chars: usize) -> f64 {
    match chars {
        0..=39 => 10.0,
        40..=79 => 25.0,
        80..=119 => 40.0,
        120..=259 => 60.0,
        260..=379 => 55.0,
        _ => 45.0,
    }
}

pub fn structure_score(text: &str) -> f64 {
    let mut score = 0.0;
    if patterns::CLAUSE_SEPARATORS.is_match(text) {
        score += 10.0;
    }
    if text.contains('\n') {
        score += 8.0;
    }
    if patterns::LIST_MARKERS.is_match(text) {
        score += 10.0;
    }
    score
}

pub fn keyword_score(text: &str) -> f64 {
    let hits: usize = patterns::keyword_groups()
        .iter()
        .map(|group| group.count(text))
        .sum();
    weighted(hits, KEYWORD_WEIGHT, KEYWORD_MAX)
}

pub fn constraint_score(text: &str) -> f64 {
    let raw = count(&patterns::NUMBERS, text) * NUMBER_WEIGHT
        + count(&patterns::ROLE_WORDS, text) * ROLE_WEIGHT
        + count(&patterns::ENUM_SEPARATORS, text) * SEPARATOR_WEIGHT;
    raw.clamp(0.0, CONSTRAINT_MAX)
}

pub fn vagueness_penalty(text: &str) -> f64 {
    weighted(patterns::VAGUE_WORDS.count(text), VAGUE_WEIGHT, VAGUE_MAX)
}

fn count(group: &RuleGroup, text: &str) -> f64 {
    group.count(text) as f64
}

fn weighted(hits: usize, weight: f64, max: f64) -> f64 {
    (hits as f64 * weight).clamp(0.0, max)
}

// --- Diagnostics ---

fn reasons(chars: usize, b: &ScoreBreakdown) -> Vec<MessageKey> {
    let mut out = vec![
        if chars >= DETAIL_MIN_CHARS {
            MessageKey::ReasonEnoughDetail
        } else {
            MessageKey::ReasonTooLittleDetail
        },
        if b.structure >= STRUCTURE_OK {
            MessageKey::ReasonOrganized
        } else {
            MessageKey::ReasonSingleBlock
        },
        if b.keywords >= CLEAR_TERMS {
            MessageKey::ReasonClearTerms
        } else {
            MessageKey::ReasonFewTerms
        },
        if b.constraints >= HAS_CONSTRAINTS {
            MessageKey::ReasonHasConstraints
        } else {
            MessageKey::ReasonFewConstraints
        },
    ];
    if b.vagueness > 0.0 {
        out.push(MessageKey::ReasonVague);
    }
    out
}

fn suggestions(score: u8, b: &ScoreBreakdown) -> Vec<MessageKey> {
    let mut out = Vec::with_capacity(3);
    if score < NEEDS_DIAGRAM_TYPE_BELOW {
        out.push(MessageKey::SuggestDiagramType);
    }
    if b.constraints < NEEDS_CONSTRAINTS_BELOW {
        out.push(MessageKey::SuggestConstraints);
    }
    if b.structure < STRUCTURE_OK {
        out.push(MessageKey::SuggestStructure);
    }
    out
}
