use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarkStyle {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
}

#[derive(Debug, Clone, Copy)]
pub struct StyleMeta {
    pub style: VarkStyle,
    pub tag: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Fixed precedence order. Ties anywhere in the crate resolve to the earlier entry.
pub fn style_order() -> &'static [VarkStyle] {
    &[
        VarkStyle::Visual,
        VarkStyle::Auditory,
        VarkStyle::ReadingWriting,
        VarkStyle::Kinesthetic,
    ]
}

const BUILTIN_STYLES: &[StyleMeta] = &[
    StyleMeta {
        style: VarkStyle::Visual,
        tag: "visual",
        name: "Visual",
        description: "You learn best through images, diagrams, charts and spatial layouts. Colour-coded notes, mind maps and videos help you see how ideas connect.",
        icon: "eye",
        color: "blue",
    },
    StyleMeta {
        style: VarkStyle::Auditory,
        tag: "auditory",
        name: "Auditory",
        description: "You learn best by listening and talking things through. Lectures, discussions, podcasts and explaining ideas out loud help you remember.",
        icon: "headphones",
        color: "green",
    },
    StyleMeta {
        style: VarkStyle::ReadingWriting,
        tag: "reading_writing",
        name: "Reading/Writing",
        description: "You learn best through written words. Reading texts, taking notes, making lists and rewriting ideas in your own words help you understand.",
        icon: "book-open",
        color: "purple",
    },
    StyleMeta {
        style: VarkStyle::Kinesthetic,
        tag: "kinesthetic",
        name: "Kinesthetic",
        description: "You learn best by doing. Hands-on activities, experiments, real-world examples and practice help you make sense of new material.",
        icon: "hand",
        color: "orange",
    },
];

pub fn builtin_styles() -> &'static [StyleMeta] {
    BUILTIN_STYLES
}

impl VarkStyle {
    pub fn from_tag(tag: &str) -> Option<Self> {
        BUILTIN_STYLES
            .iter()
            .find(|m| m.tag == tag)
            .map(|m| m.style)
    }

    pub fn meta(self) -> &'static StyleMeta {
        // BUILTIN_STYLES is laid out in precedence order.
        &BUILTIN_STYLES[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            VarkStyle::Visual => 0,
            VarkStyle::Auditory => 1,
            VarkStyle::ReadingWriting => 2,
            VarkStyle::Kinesthetic => 3,
        }
    }

    pub fn tag(self) -> &'static str {
        self.meta().tag
    }

    pub fn name(self) -> &'static str {
        self.meta().name
    }

    pub fn description(self) -> &'static str {
        self.meta().description
    }
}

impl std::fmt::Display for VarkStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/styles.rs"]
mod tests;
