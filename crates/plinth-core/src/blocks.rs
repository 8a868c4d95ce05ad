//! Diagram prompt blocks: the fixed text fragments the compiler assembles.
//!
//! Every selector here is total. Each enum value maps to exactly one block and
//! a missing preset maps to the generic block.

use crate::{Emphasis, Preset, Quality, Style};

pub const ROLE: &str = "\
You are an architectural diagram illustrator. Produce one clean, presentation-ready \
architectural diagram that explains a design idea, not a rendering of a building.";

pub fn quality(quality: Quality) -> &'static str {
    match quality {
        Quality::Draft => "\
Quality mode: draft. Favor speed and legibility over finish. A quick, clear study \
diagram is the goal.",
        Quality::Portfolio => "\
Quality mode: portfolio. The diagram must be presentation-grade, carefully composed \
and ready for a design portfolio board.",
    }
}

// --- Rendering constraints ---

pub const RENDERING_UNIVERSAL: &str = "\
Rendering constraints:\n\
- Pure white background.\n\
- Flat graphics only. No shading, no gradients, no shadows, no photorealism, no textures.\n\
- Rectilinear, simplified building forms.\n\
- Axonometric or orthographic projection only. No perspective.\n\
- Generous negative space around the drawing.";

pub fn style(style: Style) -> &'static str {
    match style {
        Style::Minimal => "\
Style: minimal.\n\
- Thin, uniform black linework.\n\
- Monochrome with at most one light grey tone for fills.\n\
- No decorative elements.",
        Style::Bold => "\
Style: bold.\n\
- Flat fills in a restricted primary palette (red, blue, yellow) plus black.\n\
- One color per category, used consistently.\n\
- Solid, confident outlines.",
    }
}

pub const PORTFOLIO_POLISH: &str = "\
Polish:\n\
- Balanced margins on all sides.\n\
- Strong figure-ground contrast.\n\
- Consistent spacing and line weights throughout.";

// --- Composition ---

pub fn composition(quality: Quality) -> &'static str {
    match quality {
        Quality::Draft => "\
Composition: keep it simple. Use the minimum number of elements needed to read the idea.",
        Quality::Portfolio => "\
Composition: center the main object with a clear visual hierarchy. Align elements \
to a strong implicit grid. The primary idea must read first, details second.",
    }
}

pub const DIAGRAM_GRAMMAR: &str = "\
Diagram grammar:\n\
- Volumes are simple extruded boxes that stand for spaces or program.\n\
- Arrows only indicate movement or flow and must have a clear start and end.\n\
- Dashed lines indicate boundaries, thresholds or implied relationships.\n\
- No text, labels, numbers or annotations inside the image.";

// --- Presets ---

pub const GENERIC_PRESET: &str = "\
Diagram type: general architectural concept diagram. Choose the simplest diagrammatic \
device that explains the request.";

pub fn preset(preset: Option<Preset>) -> &'static str {
    match preset {
        Some(Preset::Massing) => "\
Diagram type: massing diagram. Show the building as a composition of primary volumes, \
their proportions, stacking and subtractions.",
        Some(Preset::Circulation) => "\
Diagram type: circulation diagram. Show how people move through the building: the main \
route, secondary branches, vertical cores and entries, drawn with continuous arrows.",
        Some(Preset::Zoning) => "\
Diagram type: zoning diagram. Divide the building into clearly bounded zones and make \
the boundaries between them legible.",
        Some(Preset::Program) => "\
Diagram type: program diagram. Represent each function as a distinct volume sized by \
its area and placed by its adjacency.",
        Some(Preset::Experience) => "\
Diagram type: spatial experience diagram. Show the sequence of spaces a visitor passes \
through, with changes in compression, openness and light.",
        Some(Preset::Process) => "\
Diagram type: design process diagram. Show the form evolving in a row of steps from \
an initial volume to the final building, each step one clear operation.",
        None => GENERIC_PRESET,
    }
}

// --- Emphasis overrides ---

pub fn emphasis(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::All => "\
Emphasis: balanced. Volumes, movement and program share the drawing. Use arrows \
sparingly to show the main movement path.",
        Emphasis::Massing => "\
Emphasis override: massing only. Show volumes and their relationships alone. \
No arrows and no circulation marks; ignore any arrow rules above.",
        Emphasis::Circulation => "\
Emphasis override: circulation only. Reduce volumes to faint outlines; movement \
routes and entries dominate the drawing.",
        Emphasis::Program => "\
Emphasis override: program only. Distinguish functions by volume and tone; \
omit movement arrows.",
        Emphasis::Experience => "\
Emphasis override: experience sequence. Arrange the drawing as an ordered sequence \
of moments along one path; the order of spaces matters more than their exact form.",
    }
}

// --- Request and closing ---

pub const INTENT_HEADER: &str = "Intent focus for this image:";

pub const USER_HEADER: &str = "User request:";

pub const EMPTY_REQUEST: &str = "(no specific request; produce a representative diagram for the selected type)";

pub const OUTPUT_REMINDER: &str = "\
Output: a single diagram image that follows every constraint above. Later instructions \
take precedence over earlier ones.";
