use super::super::domain::Answers;
use super::super::questionnaire::ids;
use super::{ScoreComponent, ScoreFactor};

const NO_SYMPTOMS: &str = "None of the above";
const SYMPTOM_PENALTY: i32 = 3;

/// Applies every rule in order. Each rule reads a single answer and
/// contributes at most one component; rules never interact.
pub(crate) fn score_answers(answers: &Answers) -> Vec<ScoreComponent> {
    let mut components = Vec::new();
    let mut push = |factor: ScoreFactor, delta: i32, notes: &str| {
        if delta != 0 {
            components.push(ScoreComponent {
                factor,
                delta,
                notes: notes.to_string(),
            });
        }
    };

    let (delta, notes) = tiered(
        answers,
        ids::SLEEP_QUALITY,
        &[("Excellent", 10), ("Good", 7), ("Fair", 3)],
        Some(-5),
    );
    push(ScoreFactor::SleepQuality, delta, notes);

    if answers.text_equals(ids::SLEEP_SCHEDULE, "Yes") {
        push(ScoreFactor::SleepSchedule, 5, "consistent sleep schedule");
    }

    let (delta, notes) = tiered(
        answers,
        ids::DIET_STYLE,
        &[("Mediterranean", 8), ("Keto", 8), ("Paleo", 8), ("Vegetarian", 5)],
        Some(2),
    );
    push(ScoreFactor::DietStyle, delta, notes);

    let (delta, notes) = tiered(
        answers,
        ids::PROCESSED_FOODS,
        &[("Rarely", 8), ("Sometimes", 4)],
        Some(-3),
    );
    push(ScoreFactor::ProcessedFoods, delta, notes);

    let (delta, notes) = tiered(answers, ids::HYDRATION, &[("8+", 5), ("6-7", 3)], None);
    push(ScoreFactor::Hydration, delta, notes);

    let (delta, notes) = tiered(
        answers,
        ids::EXERCISE_FREQUENCY,
        &[("5+", 10), ("3-4", 7), ("1-2", 3)],
        Some(-5),
    );
    push(ScoreFactor::ExerciseFrequency, delta, notes);

    match answers.number(ids::STRESS_LEVEL) {
        Some(level) if level <= 2.0 => push(ScoreFactor::StressLevel, 8, "low daily stress"),
        Some(level) if level <= 3.0 => push(ScoreFactor::StressLevel, 5, "moderate daily stress"),
        Some(level) if level >= 4.0 => push(ScoreFactor::StressLevel, -5, "high daily stress"),
        _ => {}
    }

    if answers.text_contains(ids::STRESS_MANAGEMENT, "Yes, regularly") {
        push(
            ScoreFactor::StressManagement,
            6,
            "practices stress management regularly",
        );
    }

    if let Some(symptoms) = answers.selections(ids::HEALTH_SYMPTOMS) {
        if !symptoms.is_empty() && !symptoms.iter().any(|symptom| symptom == NO_SYMPTOMS) {
            let count = i32::try_from(symptoms.len()).unwrap_or(i32::MAX / SYMPTOM_PENALTY);
            push(
                ScoreFactor::HealthSymptoms,
                -SYMPTOM_PENALTY * count,
                "reported symptoms",
            );
        }
    }

    let (delta, notes) = tiered(
        answers,
        ids::ENERGY_LEVELS,
        &[("Consistently high", 8), ("Good energy", 5), ("Low energy", -8)],
        None,
    );
    push(ScoreFactor::EnergyLevels, delta, notes);

    let (delta, notes) = tiered(
        answers,
        ids::MENTAL_CLARITY,
        &[("Excellent focus", 6), ("Poor focus", -6)],
        None,
    );
    push(ScoreFactor::MentalClarity, delta, notes);

    components
}

/// First matching substring wins; otherwise the fallback applies (missing or
/// non-text answers included).
fn tiered(
    answers: &Answers,
    id: &str,
    tiers: &[(&'static str, i32)],
    fallback: Option<i32>,
) -> (i32, &'static str) {
    tiers
        .iter()
        .find(|(needle, _)| answers.text_contains(id, needle))
        .map(|(needle, delta)| (*delta, *needle))
        .unwrap_or((fallback.unwrap_or(0), "no qualifying answer"))
}
