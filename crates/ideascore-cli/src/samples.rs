//! Built-in answers used by `test-ai`.

use ideascore_core::Answers;

/// A complete, realistic submission: bookkeeping software for small businesses.
pub fn sample_answers() -> Answers {
    Answers {
        problem: Some(
            "Accounting and financial management is complex and time consuming for small \
             businesses. Manual work is error prone and costly software does not fit small \
             budgets."
                .to_string(),
        ),
        target_customer: Some(
            "Small and medium-sized businesses (SMB), especially companies with 5-50 \
             employees, freelancers and consultants."
                .to_string(),
        ),
        existing_alternatives: Some(
            "International platforms such as QuickBooks, Xero and Sage. Local vendors exist \
             too, but they are usually expensive and complicated."
                .to_string(),
        ),
        solution: Some(
            "An AI-assisted, cloud-based accounting and financial management platform with \
             automated invoice processing, smart categorisation, real-time reporting and \
             compliance with local accounting standards."
                .to_string(),
        ),
        revenue_model: Some(
            "Monthly SaaS subscription. Basic plan 9 USD/month, Pro plan 19 USD/month and \
             custom Enterprise pricing, plus extra revenue from integrations and consulting."
                .to_string(),
        ),
        tech_stack_thoughts: Some(
            "Backend: Rust API with PostgreSQL. Frontend: React. AI: an OpenAI-compatible \
             LLM service. Cloud: AWS or Azure. Scalable microservice architecture on docker."
                .to_string(),
        ),
        biggest_risks: Some(
            "Intense competition, customer acquisition cost, data security and compliance \
             requirements, and the need to adapt quickly to regulation changes."
                .to_string(),
        ),
    }
}
