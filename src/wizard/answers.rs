use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One answer as typed or picked in a form control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl Answer {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Answer::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Rendered value for a plain input element.
    pub fn display(&self) -> String {
        match self {
            Answer::Number(n) => n.to_string(),
            Answer::Text(s) => s.clone(),
            Answer::List(items) => items.join(", "),
        }
    }
}

/// Answers accumulated across all wizard steps, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Answer> {
        self.0.get(field)
    }

    pub fn set(&mut self, field: &str, answer: Answer) {
        self.0.insert(field.to_string(), answer);
    }

    pub fn remove(&mut self, field: &str) -> Option<Answer> {
        self.0.remove(field)
    }

    /// Trimmed text for `field`; numbers are rendered, lists and blanks are `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Answer::Text(s) => {
                let t = s.trim();
                (!t.is_empty()).then(|| t.to_string())
            }
            Answer::Number(n) => Some(n.to_string()),
            Answer::List(_) => None,
        }
    }

    /// Selected options for `field`; a lone text answer counts as one selection.
    pub fn list(&self, field: &str) -> Option<Vec<String>> {
        match self.0.get(field)? {
            Answer::List(items) => Some(items.clone()),
            Answer::Text(s) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
            _ => None,
        }
    }

    /// Adds `option` to a multi-choice field, or removes it when already picked.
    pub fn toggle(&mut self, field: &str, option: &str) {
        let mut items = self.list(field).unwrap_or_default();
        if let Some(pos) = items.iter().position(|o| o == option) {
            items.remove(pos);
        } else {
            items.push(option.to_string());
        }
        self.set(field, Answer::List(items));
    }

    /// Copies every answer from `other` over this one.
    pub fn merge(&mut self, other: Answers) {
        self.0.extend(other.0);
    }

    /// The subset of answers whose names are in `fields`.
    pub fn subset<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Answers {
        let mut out = Answers::new();
        for name in fields {
            if let Some(answer) = self.0.get(name) {
                out.set(name, answer.clone());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
