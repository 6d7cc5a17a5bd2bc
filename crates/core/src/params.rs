//! The fixed parameter vocabulary accepted by the generation service.
//!
//! The mapper derives one value of each enum from a weather snapshot; the
//! generation request carries them verbatim. Keep these closed enums — the
//! backend rejects anything outside this vocabulary.

use serde::{Deserialize, Serialize};

/// What the day calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Casual,
    Work,
    Evening,
    Athletic,
    Lounge,
}

/// The silhouette family to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Classic,
    Casual,
    Athleisure,
    Streetwear,
    Cozy,
    Minimal,
}

/// The tonal direction for the look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Relaxed,
    Confident,
    Energetic,
    Cozy,
    Fresh,
    Bold,
}

/// The derived parameter triple handed to the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitParameters {
    pub occasion: Occasion,
    pub style: Style,
    pub mood: Mood,
}

impl Occasion {
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::Work => "Work",
            Occasion::Evening => "Evening",
            Occasion::Athletic => "Athletic",
            Occasion::Lounge => "Lounge",
        }
    }
}

impl Style {
    pub fn label(&self) -> &'static str {
        match self {
            Style::Classic => "Classic",
            Style::Casual => "Casual",
            Style::Athleisure => "Athleisure",
            Style::Streetwear => "Streetwear",
            Style::Cozy => "Cozy",
            Style::Minimal => "Minimal",
        }
    }
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Relaxed => "Relaxed",
            Mood::Confident => "Confident",
            Mood::Energetic => "Energetic",
            Mood::Cozy => "Cozy",
            Mood::Fresh => "Fresh",
            Mood::Bold => "Bold",
        }
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
