use std::borrow::Cow;

use plinth_core::{blocks, CompilerConfig, Quality};

pub const BLOCK_SEPARATOR: &str = "\n\n";

type BlockFn = for<'a> fn(&'a CompilerConfig) -> Option<Cow<'a, str>>;

/// The compiler's block table, in output order. More specific instructions
/// sit closer to the end.
const BLOCKS: &[(&str, BlockFn)] = &[
    ("role", role),
    ("quality", quality),
    ("rendering", rendering),
    ("composition", composition),
    ("grammar", grammar),
    ("preset", preset),
    ("emphasis", emphasis),
    ("intent", intent),
    ("request", request),
    ("reminder", reminder),
];

fn role(_: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::ROLE))
}

fn quality(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::quality(config.quality)))
}

fn rendering(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    let mut out = String::with_capacity(1024);
    out.push_str(blocks::RENDERING_UNIVERSAL);
    out.push('\n');
    out.push_str(blocks::style(config.style));
    if config.quality == Quality::Portfolio {
        out.push('\n');
        out.push_str(blocks::PORTFOLIO_POLISH);
    }
    Some(Cow::Owned(out))
}

fn composition(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::composition(config.quality)))
}

fn grammar(_: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::DIAGRAM_GRAMMAR))
}

fn preset(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::preset(config.preset)))
}

fn emphasis(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::emphasis(config.emphasis)))
}

fn intent(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    config
        .intent()
        .map(|i| Cow::Owned(format!("{}\n{}", blocks::INTENT_HEADER, i)))
}

fn request(config: &CompilerConfig) -> Option<Cow<'_, str>> {
    let text = match config.user_prompt.trim() {
        "" => blocks::EMPTY_REQUEST,
        t => t,
    };
    Some(Cow::Owned(format!("{}\n{}", blocks::USER_HEADER, text)))
}

fn reminder(_: &CompilerConfig) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(blocks::OUTPUT_REMINDER))
}

/// Evaluate the block table, keeping only blocks with content.
pub fn labelled_blocks(config: &CompilerConfig) -> Vec<(&'static str, Cow<'_, str>)> {
    BLOCKS
        .iter()
        .filter_map(|(name, block)| {
            block(config)
                .filter(|text| !text.trim().is_empty())
                .map(|text| (*name, text))
        })
        .collect()
}

/// Compile a configuration into the final image-generation instruction.
pub fn compile(config: &CompilerConfig) -> String {
    let parts = labelled_blocks(config);
    log::debug!(
        "compiled diagram prompt from {} blocks: {}",
        parts.len(),
        parts.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(",")
    );
    parts
        .iter()
        .map(|(_, text)| text.as_ref())
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_core::{Emphasis, Preset, Selector, Style};

    fn zoning_example() -> CompilerConfig {
        CompilerConfig::new("3 zones around a courtyard")
            .with_preset(Preset::Zoning)
            .with_style(Style::Minimal)
            .with_emphasis(Emphasis::All)
            .with_quality(Quality::Portfolio)
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing block: {needle}"))
    }

    #[test]
    fn example_contains_blocks_in_order() {
        let out = compile(&zoning_example());
        let expected = [
            blocks::ROLE,
            blocks::quality(Quality::Portfolio),
            blocks::style(Style::Minimal),
            blocks::PORTFOLIO_POLISH,
            blocks::preset(Some(Preset::Zoning)),
            blocks::emphasis(Emphasis::All),
            "3 zones around a courtyard",
            blocks::OUTPUT_REMINDER,
        ];
        let positions: Vec<usize> = expected.iter().map(|b| position(&out, b)).collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1], "blocks out of order: {positions:?}");
        }
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let config = zoning_example();
        let names: Vec<&str> = labelled_blocks(&config).iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "role",
                "quality",
                "rendering",
                "composition",
                "grammar",
                "preset",
                "emphasis",
                "request",
                "reminder"
            ]
        );
        let out = compile(&config);
        assert_eq!(out.split(BLOCK_SEPARATOR).count(), names.len());
        assert_eq!(out, out.trim());
    }

    #[test]
    fn draft_drops_polish() {
        let out = compile(&zoning_example().with_quality(Quality::Draft));
        assert!(!out.contains(blocks::PORTFOLIO_POLISH));
        assert!(out.contains(blocks::composition(Quality::Draft)));
        assert!(!out.contains(blocks::composition(Quality::Portfolio)));
    }

    #[test]
    fn user_text_is_trimmed_or_replaced() {
        let out = compile(&CompilerConfig::new("  a tower on a plinth \n"));
        assert!(out.contains("User request:\na tower on a plinth\n"));

        for blank in ["", "   "] {
            let out = compile(&CompilerConfig::new(blank));
            assert!(!out.is_empty());
            assert!(out.contains(blocks::EMPTY_REQUEST));
        }
    }

    #[test]
    fn intent_block_only_when_present() {
        let without = compile(&zoning_example());
        assert!(!without.contains(blocks::INTENT_HEADER));

        let blank = compile(&zoning_example().with_intent("  "));
        assert!(!blank.contains(blocks::INTENT_HEADER));

        let with = compile(&zoning_example().with_intent("service and support zones"));
        let header = position(&with, blocks::INTENT_HEADER);
        assert!(header > position(&with, blocks::emphasis(Emphasis::All)));
        assert!(header < position(&with, blocks::USER_HEADER));
        assert!(with.contains("service and support zones"));
    }

    #[test]
    fn massing_emphasis_excludes_balanced_arrows() {
        let all = compile(&zoning_example());
        let massing = compile(&zoning_example().with_emphasis(Emphasis::Massing));
        let balanced = blocks::emphasis(Emphasis::All);
        assert!(all.contains(balanced));
        assert!(!massing.contains(balanced));
        assert!(!massing.contains("Use arrows"));
        assert!(massing.contains("No arrows"));
    }

    #[test]
    fn exactly_one_emphasis_block() {
        for selected in Emphasis::ALL {
            let out = compile(&zoning_example().with_emphasis(*selected));
            for other in Emphasis::ALL {
                assert_eq!(
                    out.contains(blocks::emphasis(*other)),
                    other == selected,
                    "{selected:?} vs {other:?}"
                );
            }
        }
    }

    #[test]
    fn missing_preset_uses_generic_block() {
        let out = compile(&CompilerConfig::new("pavilion"));
        assert!(out.contains(blocks::GENERIC_PRESET));
        assert!(out.contains(blocks::style(Style::Minimal)));
        assert!(out.contains(blocks::PORTFOLIO_POLISH));
    }

    #[test]
    fn compile_is_deterministic() {
        let config = zoning_example().with_intent("boundaries");
        assert_eq!(compile(&config), compile(&config));
    }
}
