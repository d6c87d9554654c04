//! Prompt templates for the scoring and canvas tasks.

use ideascore_core::Answers;
use ideascore_core::answers::AnswerField;

/// Substituted for any unanswered question.
pub const NOT_PROVIDED: &str = "Not provided";

pub const SCORES_SYSTEM_PROMPT: &str = "\
You are an experienced startup analyst and investor. You evaluate startup ideas \
objectively and in detail. Respond ONLY with a JSON object, no explanation.";

pub const CANVAS_SYSTEM_PROMPT: &str = "\
You are an experienced startup advisor and Lean Canvas expert. You turn startup ideas \
into detailed, professional Lean Canvases. Respond ONLY with a JSON object, no explanation.";

const SCORES_INSTRUCTIONS: &str = r#"Respond in the following JSON format (JSON only, no other text):

{
  "problemValidation": 75,
  "marketMaturity": 65,
  "competition": 70,
  "differentiation": 80,
  "techFeasibility": 60,
  "riskUncertainty": 55
}

Scoring criteria:
- problemValidation: clarity, urgency and realism of the problem statement (0-100)
- marketMaturity: maturity of the market and clarity of the target customer segment (0-100)
- competition: depth of competitive analysis and awareness of alternatives (0-100)
- differentiation: strength of differentiation and unique value of the solution (0-100)
- techFeasibility: technical feasibility and fit of the technology stack (0-100)
- riskUncertainty: risk awareness and handling of uncertainty (0-100, higher awareness = higher score)"#;

const CANVAS_INSTRUCTIONS: &str = r#"Respond in the following JSON format (JSON only, no other text):

{
  "problem": "Core problems customers face (2-3 points)",
  "solution": "Proposed solution approach (2-3 points)",
  "uniqueValueProp": "Unique value proposition (1 sentence)",
  "customerSegments": "Target customer segments",
  "channels": "Channels to reach customers",
  "revenueStreams": "Revenue models and streams",
  "costStructure": "Main cost items",
  "keyMetrics": "Key metrics to track",
  "unfairAdvantage": "Sustainable competitive advantage"
}

Produce detailed, professional and realistic content for every field."#;

/// User prompt asking for the six dimension scores.
pub fn build_scores_prompt(answers: &Answers) -> String {
    format!(
        "Below are the details of a startup idea.\n\
         Give a score between 0 and 100 for each category and answer in JSON.\n\
         \n\
         {answers}\n\
         \n\
         {SCORES_INSTRUCTIONS}",
        answers = answers_block(answers),
    )
}

/// User prompt asking for a nine-field Lean Canvas.
pub fn build_canvas_prompt(answers: &Answers) -> String {
    format!(
        "Below are the details of a startup idea.\n\
         Build a professional Lean Canvas from this information and answer in JSON.\n\
         \n\
         {answers}\n\
         \n\
         {CANVAS_INSTRUCTIONS}",
        answers = answers_block(answers),
    )
}

fn answers_block(answers: &Answers) -> String {
    let mut block = String::from("FOUNDER'S ANSWERS:");
    for field in AnswerField::ALL {
        let value = answers.get(field).map(str::trim).unwrap_or(NOT_PROVIDED);
        block.push_str(&format!("\n- {}: {}", field.label(), value));
    }
    block
}
