//! Founder answers to the fixed startup-idea questionnaire.

use serde::{Deserialize, Serialize};

/// One question of the questionnaire, in the order it is asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerField {
    Problem,
    TargetCustomer,
    ExistingAlternatives,
    Solution,
    RevenueModel,
    TechStackThoughts,
    BiggestRisks,
}

impl AnswerField {
    pub const ALL: [AnswerField; 7] = [
        Self::Problem,
        Self::TargetCustomer,
        Self::ExistingAlternatives,
        Self::Solution,
        Self::RevenueModel,
        Self::TechStackThoughts,
        Self::BiggestRisks,
    ];

    /// Human-readable question label, used in prompts and display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Problem => "Problem",
            Self::TargetCustomer => "Target Customer",
            Self::ExistingAlternatives => "Existing Alternatives",
            Self::Solution => "Solution",
            Self::RevenueModel => "Revenue Model",
            Self::TechStackThoughts => "Tech Stack Thoughts",
            Self::BiggestRisks => "Biggest Risks",
        }
    }
}

/// Free-text answers submitted for one idea.
///
/// Every field is optional; an absent or whitespace-only answer means
/// "no information provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    pub problem: Option<String>,
    pub target_customer: Option<String>,
    pub existing_alternatives: Option<String>,
    pub solution: Option<String>,
    pub revenue_model: Option<String>,
    pub tech_stack_thoughts: Option<String>,
    pub biggest_risks: Option<String>,
}

impl Answers {
    /// Raw answer for a field, as submitted (may be blank).
    pub fn raw(&self, field: AnswerField) -> Option<&str> {
        let value = match field {
            AnswerField::Problem => &self.problem,
            AnswerField::TargetCustomer => &self.target_customer,
            AnswerField::ExistingAlternatives => &self.existing_alternatives,
            AnswerField::Solution => &self.solution,
            AnswerField::RevenueModel => &self.revenue_model,
            AnswerField::TechStackThoughts => &self.tech_stack_thoughts,
            AnswerField::BiggestRisks => &self.biggest_risks,
        };
        value.as_deref()
    }

    /// Answer for a field, or `None` when absent or blank.
    pub fn get(&self, field: AnswerField) -> Option<&str> {
        self.raw(field).filter(|s| !s.trim().is_empty())
    }

    /// Number of questions with a non-blank answer.
    pub fn answered_count(&self) -> usize {
        AnswerField::ALL
            .iter()
            .filter(|&&f| self.get(f).is_some())
            .count()
    }
}
