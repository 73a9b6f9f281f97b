use serde::Deserialize;

/// Gender guessed by the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderGuess {
    Male,
    Female,
    #[default]
    Unknown,
}

impl GenderGuess {
    /// Maps the service's `gender` field. Anything other than
    /// `"male"`/`"female"` (including null) is unknown.
    pub fn from_api(gender: Option<&str>) -> Self {
        match gender {
            Some("male") => Self::Male,
            Some("female") => Self::Female,
            _ => Self::Unknown,
        }
    }

    /// Text shown on the profile card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "mężczyzna",
            Self::Female => "kobieta",
            Self::Unknown => "inna",
        }
    }
}

/// Result of one successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GenderInference {
    pub subject_name: String,
    pub gender: GenderGuess,
    pub probability: f64,
    pub sample_count: u64,
}

/// Wire format of the service response.
///
/// Every field is optional so a sparse body such as `{"gender":"male"}`
/// still parses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl ApiResponse {
    pub(crate) fn into_inference(self, queried: &str) -> GenderInference {
        GenderInference {
            gender: GenderGuess::from_api(self.gender.as_deref()),
            subject_name: self.name.unwrap_or_else(|| queried.to_string()),
            probability: self.probability.unwrap_or(0.0),
            sample_count: self.count.unwrap_or(0),
        }
    }
}
