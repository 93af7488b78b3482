use serde::Serialize;

/// Stable question identifiers used as keys in [`Answers`](super::Answers).
pub mod ids {
    pub const SLEEP_QUALITY: &str = "sleep_quality";
    pub const SLEEP_SCHEDULE: &str = "sleep_schedule";
    pub const DIET_STYLE: &str = "diet_style";
    pub const PROCESSED_FOODS: &str = "processed_foods";
    pub const HYDRATION: &str = "hydration";
    pub const EXERCISE_FREQUENCY: &str = "exercise_frequency";
    pub const EXERCISE_INTENSITY: &str = "exercise_intensity";
    pub const STRESS_LEVEL: &str = "stress_level";
    pub const STRESS_MANAGEMENT: &str = "stress_management";
    pub const CURRENT_SUPPLEMENTS: &str = "current_supplements";
    pub const SUPPLEMENT_TYPES: &str = "supplement_types";
    pub const HEALTH_SYMPTOMS: &str = "health_symptoms";
    pub const GUT_SKIN_ISSUES: &str = "gut_skin_issues";
    pub const ENERGY_LEVELS: &str = "energy_levels";
    pub const MENTAL_CLARITY: &str = "mental_clarity";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Sleep,
    Diet,
    Exercise,
    Stress,
    Supplements,
    Health,
}

impl QuestionCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Diet => "Diet",
            Self::Exercise => "Exercise",
            Self::Stress => "Stress",
            Self::Supplements => "Supplements",
            Self::Health => "Health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AnswerType {
    SingleChoice,
    YesNo,
    Scale { min: u8, max: u8 },
    MultiSelect,
}

pub const YES_NO_OPTIONS: &[&str] = &["Yes", "No"];

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub answer_type: AnswerType,
    pub options: &'static [&'static str],
    pub category: QuestionCategory,
}

impl Question {
    /// Options presented to the respondent; yes/no questions share a fixed pair.
    pub fn choices(&self) -> &'static [&'static str] {
        match self.answer_type {
            AnswerType::YesNo => YES_NO_OPTIONS,
            _ => self.options,
        }
    }
}

static QUESTIONS: [Question; 15] = [
    Question {
        id: ids::SLEEP_QUALITY,
        prompt: "How would you rate your overall sleep quality?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Excellent (8+ hours, wake refreshed)",
            "Good (7-8 hours, mostly refreshed)",
            "Fair (6-7 hours, sometimes tired)",
            "Poor (Less than 6 hours, often tired)",
        ],
        category: QuestionCategory::Sleep,
    },
    Question {
        id: ids::SLEEP_SCHEDULE,
        prompt: "Do you maintain a consistent sleep schedule?",
        answer_type: AnswerType::YesNo,
        options: &[],
        category: QuestionCategory::Sleep,
    },
    Question {
        id: ids::DIET_STYLE,
        prompt: "Which best describes your current diet?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Standard Western Diet",
            "Mediterranean",
            "Low-carb/Keto",
            "Paleo",
            "Vegetarian/Vegan",
            "Intermittent Fasting",
        ],
        category: QuestionCategory::Diet,
    },
    Question {
        id: ids::PROCESSED_FOODS,
        prompt: "How often do you consume processed foods?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Rarely (1-2 times per week)",
            "Sometimes (3-4 times per week)",
            "Often (5-6 times per week)",
            "Daily or multiple times daily",
        ],
        category: QuestionCategory::Diet,
    },
    Question {
        id: ids::HYDRATION,
        prompt: "How many glasses of water do you drink daily?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "8+ glasses",
            "6-7 glasses",
            "4-5 glasses",
            "Less than 4 glasses",
        ],
        category: QuestionCategory::Diet,
    },
    Question {
        id: ids::EXERCISE_FREQUENCY,
        prompt: "How often do you engage in physical exercise?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "5+ times per week",
            "3-4 times per week",
            "1-2 times per week",
            "Rarely or never",
        ],
        category: QuestionCategory::Exercise,
    },
    Question {
        id: ids::EXERCISE_INTENSITY,
        prompt: "What intensity of exercise do you typically do?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "High intensity (HIIT, competitive sports)",
            "Moderate intensity (jogging, cycling)",
            "Light intensity (walking, yoga)",
            "Minimal physical activity",
        ],
        category: QuestionCategory::Exercise,
    },
    Question {
        id: ids::STRESS_LEVEL,
        prompt: "How would you rate your daily stress levels?",
        answer_type: AnswerType::Scale { min: 1, max: 5 },
        options: &[],
        category: QuestionCategory::Stress,
    },
    Question {
        id: ids::STRESS_MANAGEMENT,
        prompt: "Do you practice stress management techniques?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Yes, regularly (meditation, yoga, etc.)",
            "Sometimes (occasional relaxation)",
            "Rarely (only when very stressed)",
            "No, I don't have time",
        ],
        category: QuestionCategory::Stress,
    },
    Question {
        id: ids::CURRENT_SUPPLEMENTS,
        prompt: "Do you currently take any supplements?",
        answer_type: AnswerType::YesNo,
        options: &[],
        category: QuestionCategory::Supplements,
    },
    Question {
        id: ids::SUPPLEMENT_TYPES,
        prompt: "Which supplements do you currently take? (Select all that apply)",
        answer_type: AnswerType::MultiSelect,
        options: &[
            "Multivitamin",
            "Vitamin D",
            "Omega-3",
            "Probiotics",
            "Magnesium",
            "B-Complex",
            "Vitamin C",
            "None",
        ],
        category: QuestionCategory::Supplements,
    },
    Question {
        id: ids::HEALTH_SYMPTOMS,
        prompt: "Do you experience any of the following? (Select all that apply)",
        answer_type: AnswerType::MultiSelect,
        options: &[
            "Joint pain or stiffness",
            "Chronic fatigue or low energy",
            "Lack of motivation or energy",
            "Ear ringing (tinnitus)",
            "None of the above",
        ],
        category: QuestionCategory::Health,
    },
    Question {
        id: ids::GUT_SKIN_ISSUES,
        prompt: "Are you experiencing health issues with your gut or skin?",
        answer_type: AnswerType::YesNo,
        options: &[],
        category: QuestionCategory::Health,
    },
    Question {
        id: ids::ENERGY_LEVELS,
        prompt: "How are your energy levels throughout the day?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Consistently high energy",
            "Good energy with minor dips",
            "Moderate energy with afternoon crashes",
            "Low energy most of the day",
        ],
        category: QuestionCategory::Health,
    },
    Question {
        id: ids::MENTAL_CLARITY,
        prompt: "How would you rate your mental clarity and focus?",
        answer_type: AnswerType::SingleChoice,
        options: &[
            "Excellent focus and sharp thinking",
            "Good focus with occasional brain fog",
            "Moderate focus with frequent distractions",
            "Poor focus and frequent brain fog",
        ],
        category: QuestionCategory::Health,
    },
];

/// The ordered questionnaire presented by every surface.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}
