mod rules;

use super::domain::Answers;
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: i32 = 50;
pub const MAX_SCORE: u8 = 100;

/// Answer area a scoring rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    SleepQuality,
    SleepSchedule,
    DietStyle,
    ProcessedFoods,
    Hydration,
    ExerciseFrequency,
    StressLevel,
    StressManagement,
    HealthSymptoms,
    EnergyLevels,
    MentalClarity,
}

/// Discrete contribution to a score, kept so a result can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub delta: i32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub components: Vec<ScoreComponent>,
    /// Sum before clamping; may fall outside 0..=100.
    pub raw_total: i32,
    pub score: u8,
}

/// Banding used by the results page and the email report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 65 {
            Self::Good
        } else if score >= 50 {
            Self::Fair
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#059669",
            Self::Good => "#2563eb",
            Self::Fair => "#d97706",
            Self::NeedsImprovement => "#dc2626",
        }
    }
}

pub fn breakdown(answers: &Answers) -> ScoreBreakdown {
    let components = rules::score_answers(answers);
    let raw_total = components
        .iter()
        .fold(BASE_SCORE, |total, component| total.saturating_add(component.delta));
    let score = raw_total.clamp(0, i32::from(MAX_SCORE)) as u8;

    ScoreBreakdown {
        base: BASE_SCORE,
        components,
        raw_total,
        score,
    }
}

/// Longevity score in `0..=100`. Pure and total over any answer map.
pub fn score(answers: &Answers) -> u8 {
    breakdown(answers).score
}
