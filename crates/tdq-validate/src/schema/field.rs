//! Declarative field specifications.

use regex::Regex;

/// JSON type a field value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    /// Whole numbers; floats with a zero fractional part are accepted.
    Integer,
    Boolean,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// Named string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

impl StringFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
        }
    }
}

/// Value constraint applied after the type check passes.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Inclusive numeric range, integers only.
    Range { min: i64, max: i64 },
    /// Exact, case-sensitive membership, strings only.
    OneOf(Vec<String>),
    /// Regex the whole string must match, strings only.
    Pattern(Regex),
    Format(StringFormat),
}

impl Constraint {
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }
}

/// A single field of a [`Schema`](super::Schema).
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    pub kind: FieldType,
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// A required field with no constraints yet.
    pub fn required(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            required: true,
            kind,
            constraints: Vec::new(),
        }
    }

    /// An optional field with no constraints yet.
    pub fn optional(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind)
        }
    }

    #[must_use]
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// JSONPath-style location of this field.
    pub fn path(&self) -> String {
        format!("$.{}", self.name)
    }
}
