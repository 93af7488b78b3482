use serde::Serialize;

use super::super::domain::Answers;
use super::super::questionnaire::ids;
use super::super::recommendations::{
    top_picks, Recommendation, RecommendationConfig, RecommendationEngine, TOP_PICK_LIMIT,
};
use super::super::scoring::{self, ScoreLevel};

const QUICK_START_LIMIT: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct TopPick {
    pub rank: usize,
    pub label: String,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickStart {
    pub label: String,
    pub link: &'static str,
}

/// Everything the results page displays, computed from the shared rules.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub first_name: String,
    pub longevity_score: u8,
    pub level: ScoreLevel,
    pub level_label: &'static str,
    pub level_color: &'static str,
    pub top_picks: Vec<TopPick>,
    pub quick_starts: Vec<QuickStart>,
    pub strengths: Vec<&'static str>,
    pub opportunities: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
}

impl ResultsView {
    pub fn build(first_name: &str, answers: &Answers, config: &RecommendationConfig) -> Self {
        let longevity_score = scoring::score(answers);
        let level = ScoreLevel::from_score(longevity_score);
        let recommendations = RecommendationEngine::new(config.clone()).recommend(answers);

        let top_picks = top_picks(&recommendations, TOP_PICK_LIMIT)
            .into_iter()
            .enumerate()
            .map(|(index, recommendation)| TopPick {
                rank: index + 1,
                label: format!("#{} Pick", index + 1),
                recommendation,
            })
            .collect();

        let quick_starts = recommendations
            .iter()
            .filter_map(|recommendation| {
                recommendation.link.map(|link| QuickStart {
                    label: format!("Start with {}", recommendation.short_title()),
                    link,
                })
            })
            .take(QUICK_START_LIMIT)
            .collect();

        Self {
            first_name: first_name.to_string(),
            longevity_score,
            level,
            level_label: level.label(),
            level_color: level.color(),
            top_picks,
            quick_starts,
            strengths: strengths(answers),
            opportunities: opportunities(answers),
            recommendations,
        }
    }
}

pub fn strengths(answers: &Answers) -> Vec<&'static str> {
    let mut found = Vec::new();
    if answers.text_contains(ids::SLEEP_QUALITY, "Excellent") {
        found.push("Excellent sleep quality");
    }
    if answers.text_contains(ids::EXERCISE_FREQUENCY, "5+") {
        found.push("Regular exercise routine");
    }
    if answers.text_contains(ids::STRESS_MANAGEMENT, "regularly") {
        found.push("Active stress management");
    }
    if answers.text_contains(ids::HYDRATION, "8+") {
        found.push("Optimal hydration levels");
    }
    found
}

pub fn opportunities(answers: &Answers) -> Vec<&'static str> {
    let mut found = Vec::new();
    if answers.text_contains(ids::SLEEP_QUALITY, "Poor") {
        found.push("Sleep quality improvement needed");
    }
    if answers.text_contains(ids::PROCESSED_FOODS, "Daily") {
        found.push("Reduce processed food intake");
    }
    if answers.text_contains(ids::EXERCISE_FREQUENCY, "Rarely") {
        found.push("Increase physical activity");
    }
    if answers
        .number(ids::STRESS_LEVEL)
        .is_some_and(|level| level >= 4.0)
    {
        found.push("Stress level management");
    }
    found
}
