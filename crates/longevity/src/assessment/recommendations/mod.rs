mod catalog;

pub use catalog::catalog;

use super::domain::Answers;
use super::questionnaire::ids;
use catalog::{
    HEPATOBURN, KETO_PROTOCOL, MEDITERRANEAN_GUIDE, PALEO_TRANSFORMATION, PRIMEBIOME,
    PROSTAVIVE, QUIETUM_PLUS, SLEEP_OPTIMIZATION, STRESS_MASTERY,
};
use serde::{Deserialize, Serialize};

/// Number of linked recommendations highlighted as "top picks".
pub const TOP_PICK_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Supplement,
    Diet,
    Lifestyle,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supplement => "Supplement",
            Self::Diet => "Diet",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

/// Catalog entry surfaced for a respondent. Links are opaque affiliate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<&'static str>,
}

impl Recommendation {
    /// Product name before the " - " tagline separator.
    pub fn short_title(&self) -> &'static str {
        self.title
            .split_once(" - ")
            .map(|(name, _)| name)
            .unwrap_or(self.title)
    }
}

/// Policy knobs for the recommendation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// When no Mediterranean guide applies, fall back to the Keto or Paleo
    /// guide instead of emitting no diet recommendation.
    pub alternative_diet_guides: bool,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            alternative_diet_guides: true,
        }
    }
}

/// Stateless generator applying the decision table to an answer map.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn recommend(&self, answers: &Answers) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let has_symptoms = answers.any_selection_contains(
            ids::HEALTH_SYMPTOMS,
            &["Joint pain", "fatigue", "energy", "Ear ringing"],
        );

        if has_symptoms {
            if answers.any_selection_contains(ids::HEALTH_SYMPTOMS, &["fatigue", "energy"]) {
                recommendations.push(HEPATOBURN);
            }
            if answers.any_selection_contains(ids::HEALTH_SYMPTOMS, &["Ear ringing"]) {
                recommendations.push(QUIETUM_PLUS);
            }
            recommendations.push(PROSTAVIVE);
        }

        if answers.text_equals(ids::GUT_SKIN_ISSUES, "Yes") {
            recommendations.push(PRIMEBIOME);
        }

        if !has_symptoms || recommendations.len() < 2 {
            if let Some(guide) = self.diet_guide(answers) {
                recommendations.push(guide);
            }
        }

        recommendations.push(SLEEP_OPTIMIZATION);

        let high_stress = answers
            .number(ids::STRESS_LEVEL)
            .is_some_and(|level| level >= 4.0);
        if high_stress || !answers.text_contains(ids::STRESS_MANAGEMENT, "regularly") {
            recommendations.push(STRESS_MASTERY);
        }

        recommendations
    }

    fn diet_guide(&self, answers: &Answers) -> Option<Recommendation> {
        let needs_reset = answers.text_contains(ids::DIET_STYLE, "Standard Western")
            || answers.text_contains(ids::PROCESSED_FOODS, "Often")
            || answers.text_contains(ids::PROCESSED_FOODS, "Daily");

        if needs_reset {
            return Some(MEDITERRANEAN_GUIDE);
        }
        if !self.config.alternative_diet_guides {
            return None;
        }

        if answers.text_contains(ids::DIET_STYLE, "Low-carb")
            || answers.text_contains(ids::EXERCISE_FREQUENCY, "5+")
        {
            Some(KETO_PROTOCOL)
        } else {
            Some(PALEO_TRANSFORMATION)
        }
    }
}

/// Ordered recommendations using the default policy.
pub fn recommend(answers: &Answers) -> Vec<Recommendation> {
    RecommendationEngine::default().recommend(answers)
}

/// The first linked recommendations, in display order.
pub fn top_picks(recommendations: &[Recommendation], limit: usize) -> Vec<Recommendation> {
    recommendations
        .iter()
        .filter(|recommendation| recommendation.link.is_some())
        .take(limit)
        .copied()
        .collect()
}
