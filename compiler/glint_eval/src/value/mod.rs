//! Runtime values and per-statement results.

/// A runtime value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Number(f64),
    Str(String),
    /// What an assignment evaluates to.
    #[default]
    Empty,
}

impl Value {
    /// Name of the value's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Empty => "empty value",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

/// What one top-level statement produced, before rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum StatementOutput {
    /// Assignments, and expressions that evaluate to [`Value::Empty`].
    Empty,
    /// A bare expression statement.
    Value(Value),
    /// `print` or a wrapper keyword, tagged with the keyword text.
    Keyword {
        keyword: &'static str,
        value: Value,
    },
}
