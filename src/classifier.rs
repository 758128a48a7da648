//! Decides whether a question is about the portfolio owner.
//!
//! Matching is plain substring search over the lower-cased question. Generic
//! terms such as "java", "api" or "rest" make general questions land here too;
//! that overlap is accepted.

/// Checked in order; the first hit short-circuits.
pub const PORTFOLIO_KEYWORDS: &[&str] = &[
    "ehsan",
    "khaliq",
    "portfolio",
    "resume",
    "cv",
    "experience",
    "skill",
    "project",
    "education",
    "java",
    "spring",
    "quarkus",
    "bank",
    "banking",
    "teresol",
    "technogate",
    "bank al habib",
    "cms",
    "credit management",
    "contact",
    "email",
    "phone",
    "linkedin",
    "github",
    "backend",
    "developer",
    "mysql",
    "postgresql",
    "angular",
    "xstate",
    "api",
    "rest",
    "microservices",
];

pub fn is_portfolio_question(question: &str) -> bool {
    let lower = question.to_lowercase();
    PORTFOLIO_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
