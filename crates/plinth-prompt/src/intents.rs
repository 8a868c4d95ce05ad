use plinth_core::Preset;

pub const INTENTS_PER_PRESET: usize = 4;

/// Sub-intents for a preset, most central facet first.
pub fn expand_intents(preset: Option<Preset>) -> [&'static str; INTENTS_PER_PRESET] {
    match preset {
        Some(Preset::Massing) => [
            "primary volume and overall proportions",
            "stacking and vertical layering of volumes",
            "subtractions, voids and carved openings",
            "relationship of the mass to the site and ground",
        ],
        Some(Preset::Circulation) => [
            "primary circulation loop",
            "secondary branches off the main route",
            "entry sequence from street to interior",
            "separation of public and back-of-house movement",
        ],
        Some(Preset::Zoning) => [
            "public, semi-public and private zones",
            "boundaries and thresholds between zones",
            "vertical zoning across levels",
            "service and support zones",
        ],
        Some(Preset::Program) => [
            "main program volumes sized by area",
            "adjacencies between functions",
            "shared and flexible spaces",
            "support and service program",
        ],
        Some(Preset::Experience) => [
            "arrival and first impression",
            "compression and release along the path",
            "views and light at key moments",
            "destination space at the end of the sequence",
        ],
        Some(Preset::Process) => [
            "initial site volume",
            "primary form operation",
            "secondary adjustments to the form",
            "final resolved building",
        ],
        None => [
            "overall concept",
            "key spatial relationship",
            "movement through the building",
            "relationship to context",
        ],
    }
}

/// The first `n` sub-intents, with `n` clamped to `1..=4`.
pub fn expand_intents_limited(preset: Option<Preset>, n: usize) -> Vec<&'static str> {
    let n = n.clamp(1, INTENTS_PER_PRESET);
    expand_intents(preset)[..n].to_vec()
}
