use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Primary lifestyle or physiological cause a respondent is classified into.
///
/// Variant order is significant: [`DisruptorCategory::ALL`] is the order in
/// which model output is searched, so an earlier category wins when a reply
/// names more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisruptorCategory {
    Circadian,
    ChronicStressResponse,
    NutritionalDeficiency,
    SedentaryMetabolism,
    DigitalOverstimulation,
    GutDysbiosis,
    Microplastic,
}

impl DisruptorCategory {
    pub const ALL: [DisruptorCategory; 7] = [
        DisruptorCategory::Circadian,
        DisruptorCategory::ChronicStressResponse,
        DisruptorCategory::NutritionalDeficiency,
        DisruptorCategory::SedentaryMetabolism,
        DisruptorCategory::DigitalOverstimulation,
        DisruptorCategory::GutDysbiosis,
        DisruptorCategory::Microplastic,
    ];

    pub const DEFAULT: DisruptorCategory = DisruptorCategory::Circadian;

    pub fn as_str(&self) -> &'static str {
        match self {
            DisruptorCategory::Circadian => "circadian",
            DisruptorCategory::ChronicStressResponse => "chronicstressresponse",
            DisruptorCategory::NutritionalDeficiency => "nutritionaldeficiency",
            DisruptorCategory::SedentaryMetabolism => "sedentarymetabolism",
            DisruptorCategory::DigitalOverstimulation => "digitaloverstimulation",
            DisruptorCategory::GutDysbiosis => "gutdysbiosis",
            DisruptorCategory::Microplastic => "microplastic",
        }
    }
}

impl FromStr for DisruptorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisruptorCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Invalid disruptor category: {}", s))
    }
}

impl fmt::Display for DisruptorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
