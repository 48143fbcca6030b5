//! Parsed operation input.
//!
//! Query-language parsing happens outside this engine. The transport hands
//! over an already-parsed operation: which root field to resolve, its
//! arguments, and the selection tree describing the requested output shape.

use crate::{ArgumentError, Value};

/// Whether an operation reads or mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Query => write!(f, "query"),
            OperationKind::Mutation => write!(f, "mutation"),
        }
    }
}

/// Named scalar arguments of a field, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<(String, Value)>);

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from name/value pairs.
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        Self(pairs)
    }

    /// Add an argument, keeping declaration order.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.0.push((name.into(), value));
    }

    /// Look up an argument by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, value)| value)
    }

    /// Fetch a required integer argument.
    pub fn int(&self, name: &str) -> Result<i64, ArgumentError> {
        let value = self.get(name).ok_or_else(|| ArgumentError::Missing {
            name: name.to_string(),
        })?;
        value.as_int().ok_or_else(|| ArgumentError::WrongKind {
            name: name.to_string(),
            expected: "int",
            actual: value.kind(),
        })
    }

    /// Returns true if no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over name/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// One requested field, with an optional nested selection for
/// relationship fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSelection {
    /// Schema name of the requested field.
    pub name: String,
    /// Nested selection, present when the field resolves to an object
    /// or a sequence of objects.
    pub selection: Option<SelectionSet>,
}

impl FieldSelection {
    /// A scalar leaf field.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selection: None,
        }
    }

    /// A relationship field with a nested selection.
    pub fn nested(name: impl Into<String>, selection: SelectionSet) -> Self {
        Self {
            name: name.into(),
            selection: Some(selection),
        }
    }
}

/// The caller-specified shape of the desired result: an ordered list of
/// requested fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet(pub Vec<FieldSelection>);

impl SelectionSet {
    /// Create from a list of fields.
    pub fn new(fields: Vec<FieldSelection>) -> Self {
        Self(fields)
    }

    /// The requested fields in request order.
    pub fn fields(&self) -> &[FieldSelection] {
        &self.0
    }

    /// Returns true if no fields were requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A complete parsed operation as handed over by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Query or mutation.
    pub kind: OperationKind,
    /// The single root field this invocation resolves.
    pub root_field: String,
    /// Arguments of the root field.
    pub arguments: Arguments,
    /// Requested output shape.
    pub selection: SelectionSet,
}

impl Operation {
    /// Build a query operation.
    pub fn query(root_field: impl Into<String>, arguments: Arguments, selection: SelectionSet) -> Self {
        Self {
            kind: OperationKind::Query,
            root_field: root_field.into(),
            arguments,
            selection,
        }
    }

    /// Build a mutation operation.
    pub fn mutation(
        root_field: impl Into<String>,
        arguments: Arguments,
        selection: SelectionSet,
    ) -> Self {
        Self {
            kind: OperationKind::Mutation,
            root_field: root_field.into(),
            arguments,
            selection,
        }
    }
}
