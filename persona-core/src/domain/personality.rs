use serde::{Deserialize, Serialize};

/// A classification returned by the inference backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
}

/// The personality classes the UI knows how to brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Extrovert,
    Introvert,
    Ambivert,
    Unknown,
}

/// Display branding for one personality class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalityProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub illustration: &'static str,
}

const EXTROVERT: PersonalityProfile = PersonalityProfile {
    title: "Extrovert",
    description: "You recharge around people and seek out social energy.",
    illustration: "/illustrations/extrovert.svg",
};

const INTROVERT: PersonalityProfile = PersonalityProfile {
    title: "Introvert",
    description: "You recharge alone and prefer smaller, quieter settings.",
    illustration: "/illustrations/introvert.svg",
};

const AMBIVERT: PersonalityProfile = PersonalityProfile {
    title: "Ambivert",
    description: "You sit between both worlds, adapting to the situation.",
    illustration: "/illustrations/ambivert.svg",
};

const DEFAULT: PersonalityProfile = PersonalityProfile {
    title: "Personality",
    description: "Your result is in; we don't have a detailed profile for it yet.",
    illustration: "/illustrations/default.svg",
};

impl Personality {
    /// Classifies a backend label by case-insensitive substring match.
    ///
    /// Any label that matches none of the known classes falls back to
    /// `Unknown`, which carries generic branding.
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("extrovert") {
            Personality::Extrovert
        } else if label.contains("introvert") {
            Personality::Introvert
        } else if label.contains("ambivert") {
            Personality::Ambivert
        } else {
            Personality::Unknown
        }
    }

    pub fn profile(&self) -> &'static PersonalityProfile {
        match self {
            Personality::Extrovert => &EXTROVERT,
            Personality::Introvert => &INTROVERT,
            Personality::Ambivert => &AMBIVERT,
            Personality::Unknown => &DEFAULT,
        }
    }
}

impl PredictionResult {
    pub fn personality(&self) -> Personality {
        Personality::classify(&self.prediction)
    }
}
