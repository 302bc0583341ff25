use thiserror::Error;

use crate::models::{InputValue, TripInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Location,
    Budget,
    People,
    Complete,
}

impl IntakeStep {
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            Self::Location => Some("Enter your location (e.g., Varkala)"),
            Self::Budget => Some("Enter your travel budget (₹ or $)"),
            Self::People => Some("How many people are travelling?"),
            Self::Complete => None,
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Location => Self::Budget,
            Self::Budget => Self::People,
            Self::People | Self::Complete => Self::Complete,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("answer is empty")]
    EmptyAnswer,
    #[error("all answers were already collected")]
    AlreadyComplete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialInput {
    pub location: Option<String>,
    pub budget: Option<String>,
    pub people: Option<String>,
}

/// Chat-style collection of the three trip answers, one step at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intake {
    step: IntakeStep,
    collected: PartialInput,
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

impl Intake {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::Location,
            collected: PartialInput::default(),
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn collected(&self) -> &PartialInput {
        &self.collected
    }

    pub fn prompt(&self) -> Option<&'static str> {
        self.step.prompt()
    }

    pub fn answer(&mut self, text: &str) -> Result<IntakeStep, IntakeError> {
        let slot = match self.step {
            IntakeStep::Location => &mut self.collected.location,
            IntakeStep::Budget => &mut self.collected.budget,
            IntakeStep::People => &mut self.collected.people,
            IntakeStep::Complete => return Err(IntakeError::AlreadyComplete),
        };

        let answer = normalize_answer(text);
        if answer.is_empty() {
            return Err(IntakeError::EmptyAnswer);
        }

        *slot = Some(answer);
        self.step = self.step.next();
        Ok(self.step)
    }

    /// The collected input once every step is answered. The budget is kept as
    /// typed so the generator still sees any currency glyph.
    pub fn finish(&self) -> Option<TripInput> {
        if self.step != IntakeStep::Complete {
            return None;
        }

        let PartialInput {
            location,
            budget,
            people,
        } = &self.collected;

        Some(TripInput {
            location: location.clone()?,
            budget: InputValue::Text(budget.clone()?),
            people: InputValue::Text(people.clone()?),
        })
    }
}

fn normalize_answer(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
