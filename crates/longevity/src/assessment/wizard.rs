//! Respondent-facing state machine: name capture, one step per question, then
//! email capture. Forward transitions are guarded; every blocked transition
//! leaves the wizard untouched.

use super::domain::{AnswerValue, Answers, Submission};
use super::questionnaire::{questions, AnswerType, Question};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "step", content = "index")]
pub enum WizardStep {
    Landing,
    CollectingName,
    AnsweringQuestion(usize),
    CollectingEmail,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("a first name is required to start the assessment")]
    BlankFirstName,
    #[error("question '{0}' needs an answer before continuing")]
    Unanswered(&'static str),
    #[error("an email address is required to receive results")]
    BlankEmail,
    #[error("'{option}' is not an option for question '{question}'")]
    UnknownOption {
        question: &'static str,
        option: String,
    },
    #[error("question '{0}' does not accept multiple selections")]
    NotMultiSelect(&'static str),
    #[error("cannot {action} while {step:?}")]
    InvalidTransition {
        action: &'static str,
        step: WizardStep,
    },
}

#[derive(Debug, Clone)]
pub struct QuizWizard {
    step: WizardStep,
    first_name: String,
    last_name: String,
    email: String,
    answers: Answers,
}

impl Default for QuizWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Landing,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            answers: Answers::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Question shown at the current step, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.step {
            WizardStep::AnsweringQuestion(index) => questions().get(index),
            _ => None,
        }
    }

    /// `(current, total)` where the name step counts as step one.
    pub fn progress(&self) -> (usize, usize) {
        let total = questions().len() + 1;
        let current = match self.step {
            WizardStep::Landing | WizardStep::CollectingName => 1,
            WizardStep::AnsweringQuestion(index) => index + 2,
            WizardStep::CollectingEmail | WizardStep::Complete => total,
        };
        (current, total)
    }

    pub fn start(&mut self) -> Result<WizardStep, WizardError> {
        self.require_step(WizardStep::Landing, "start")?;
        self.step = WizardStep::CollectingName;
        Ok(self.step)
    }

    pub fn set_first_name(&mut self, value: &str) {
        self.first_name = value.to_string();
    }

    pub fn set_last_name(&mut self, value: &str) {
        self.last_name = value.to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
    }

    pub fn submit_name(&mut self) -> Result<WizardStep, WizardError> {
        self.require_step(WizardStep::CollectingName, "submit a name")?;
        if self.first_name.trim().is_empty() {
            return Err(WizardError::BlankFirstName);
        }
        self.step = WizardStep::AnsweringQuestion(0);
        Ok(self.step)
    }

    /// Records the answer for the current question, replacing any earlier one.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<(), WizardError> {
        let question = self.require_question("answer")?;
        self.answers.insert(question.id, value);
        Ok(())
    }

    /// Adds or removes one option of a multi-select question. Deselecting the
    /// last option still leaves an (empty) answer on record.
    pub fn toggle_selection(&mut self, option: &str) -> Result<(), WizardError> {
        let question = self.require_question("toggle a selection")?;
        if question.answer_type != AnswerType::MultiSelect {
            return Err(WizardError::NotMultiSelect(question.id));
        }
        if !question.options.contains(&option) {
            return Err(WizardError::UnknownOption {
                question: question.id,
                option: option.to_string(),
            });
        }

        let mut selected: Vec<String> = self
            .answers
            .selections(question.id)
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        match selected.iter().position(|value| value == option) {
            Some(index) => {
                selected.remove(index);
            }
            None => selected.push(option.to_string()),
        }
        self.answers.insert(question.id, selected);
        Ok(())
    }

    pub fn is_current_answered(&self) -> bool {
        match self.step {
            WizardStep::CollectingName => !self.first_name.trim().is_empty(),
            WizardStep::AnsweringQuestion(index) => questions()
                .get(index)
                .is_some_and(|question| self.answers.contains(question.id)),
            WizardStep::CollectingEmail => !self.email.trim().is_empty(),
            WizardStep::Landing | WizardStep::Complete => false,
        }
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let question = self.require_question("advance")?;
        if !self.answers.contains(question.id) {
            return Err(WizardError::Unanswered(question.id));
        }

        self.step = match self.step {
            WizardStep::AnsweringQuestion(index) if index + 1 < questions().len() => {
                WizardStep::AnsweringQuestion(index + 1)
            }
            _ => WizardStep::CollectingEmail,
        };
        Ok(self.step)
    }

    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::CollectingName => WizardStep::Landing,
            WizardStep::AnsweringQuestion(0) => WizardStep::CollectingName,
            WizardStep::AnsweringQuestion(index) => WizardStep::AnsweringQuestion(index - 1),
            WizardStep::CollectingEmail => {
                WizardStep::AnsweringQuestion(questions().len().saturating_sub(1))
            }
            step @ (WizardStep::Landing | WizardStep::Complete) => {
                return Err(WizardError::InvalidTransition {
                    action: "go back",
                    step,
                })
            }
        };
        Ok(self.step)
    }

    /// Completes the wizard, producing the submission handed to the backend.
    pub fn submit_email(&mut self) -> Result<Submission, WizardError> {
        self.require_step(WizardStep::CollectingEmail, "submit an email")?;
        if self.email.trim().is_empty() {
            return Err(WizardError::BlankEmail);
        }
        self.step = WizardStep::Complete;
        Ok(self.submission())
    }

    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn submission(&self) -> Submission {
        let last_name = self.last_name.trim();
        Submission {
            first_name: self.first_name.trim().to_string(),
            last_name: (!last_name.is_empty()).then(|| last_name.to_string()),
            email: self.email.trim().to_string(),
            answers: self.answers.clone(),
        }
    }

    fn require_step(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                action,
                step: self.step,
            })
        }
    }

    fn require_question(&self, action: &'static str) -> Result<&'static Question, WizardError> {
        self.current_question()
            .ok_or(WizardError::InvalidTransition {
                action,
                step: self.step,
            })
    }
}
