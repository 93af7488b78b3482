use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw answer as captured by the wizard. The shape depends on the question's
/// answer type, but nothing enforces that: unexpected JSON is kept verbatim
/// and simply never satisfies a scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(serde_json::Number),
    Text(String),
    Selections(Vec<String>),
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.as_f64(),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(values) => Some(values),
            _ => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        Self::Number(value.into())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(values: Vec<String>) -> Self {
        Self::Selections(values)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Selections(values.into_iter().map(str::to_string).collect())
    }
}

/// Answer map keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: impl Into<AnswerValue>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn remove(&mut self, id: &str) -> Option<AnswerValue> {
        self.0.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    pub fn number(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(AnswerValue::as_number)
    }

    pub fn selections(&self, id: &str) -> Option<&[String]> {
        self.get(id).and_then(AnswerValue::as_selections)
    }

    /// Substring test on a text answer; missing or non-text answers never match.
    pub fn text_contains(&self, id: &str, needle: &str) -> bool {
        self.text(id).is_some_and(|value| value.contains(needle))
    }

    pub fn text_equals(&self, id: &str, expected: &str) -> bool {
        self.text(id) == Some(expected)
    }

    pub fn any_selection_contains(&self, id: &str, needles: &[&str]) -> bool {
        self.selections(id).is_some_and(|values| {
            values
                .iter()
                .any(|value| needles.iter().any(|needle| value.contains(needle)))
        })
    }
}

/// The complete respondent record handed from the wizard to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub answers: Answers,
}

impl Submission {
    /// Blank last names are normalised away so storage sees `NULL`, not `""`.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_reads_camel_case_payload() {
        let payload = json!({
            "firstName": "Ada",
            "lastName": "",
            "email": "ada@example.com",
            "answers": {
                "sleep_quality": "Good (7-8 hours, mostly refreshed)",
                "stress_level": 3,
                "health_symptoms": ["Joint pain or stiffness"],
                "gut_skin_issues": true
            }
        });

        let submission: Submission = serde_json::from_value(payload).expect("payload parses");
        assert_eq!(submission.first_name, "Ada");
        assert_eq!(submission.last_name(), None);
        assert_eq!(submission.answers.number("stress_level"), Some(3.0));
        assert_eq!(
            submission.answers.selections("health_symptoms"),
            Some(&["Joint pain or stiffness".to_string()][..])
        );
        assert_eq!(
            submission.answers.get("gut_skin_issues"),
            Some(&AnswerValue::Other(json!(true)))
        );
        assert_eq!(submission.answers.text("gut_skin_issues"), None);
    }

    #[test]
    fn answers_serialize_as_raw_values() {
        let answers = Answers::new()
            .with("stress_level", 4u8)
            .with("health_symptoms", vec!["None of the above"]);
        let value = serde_json::to_value(&answers).expect("serializes");
        assert_eq!(
            value,
            json!({ "stress_level": 4, "health_symptoms": ["None of the above"] })
        );
    }

    #[test]
    fn missing_answers_default_to_empty() {
        let submission: Submission =
            serde_json::from_value(json!({ "firstName": "Ada", "email": "a@b.c" }))
                .expect("parses");
        assert!(submission.answers.is_empty());
    }
}
