use serde::Serialize;

/// How the widget should render an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Text,
    List,
    Code,
}

/// The single answer shape returned by both the local and external paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResponse {
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub sources: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub is_general_knowledge: bool,
}

impl NormalizedResponse {
    pub fn local(
        answer: impl Into<String>,
        kind: ResponseKind,
        sources: &[&str],
        suggestions: &[&str],
    ) -> Self {
        Self {
            answer: answer.into(),
            kind,
            sources: owned(sources),
            suggestions: owned(suggestions),
            is_general_knowledge: false,
        }
    }

    pub fn general(answer: impl Into<String>, source: &str, suggestions: &[&str]) -> Self {
        Self {
            answer: answer.into(),
            kind: ResponseKind::Text,
            sources: vec![source.to_string()],
            suggestions: owned(suggestions),
            is_general_knowledge: true,
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
