//! Builders for request shapes used by scenario tests.

use fable_core::{Arguments, FieldSelection, SelectionSet, Value};

/// A scalar leaf field.
pub fn leaf(name: &str) -> FieldSelection {
    FieldSelection::leaf(name)
}

/// A relationship field with a nested selection.
pub fn nested(name: &str, fields: Vec<FieldSelection>) -> FieldSelection {
    FieldSelection::nested(name, SelectionSet::new(fields))
}

/// A selection set from requested fields, in request order.
pub fn selection(fields: Vec<FieldSelection>) -> SelectionSet {
    SelectionSet::new(fields)
}

/// Arguments from name/value pairs, in declaration order.
pub fn args(pairs: &[(&str, Value)]) -> Arguments {
    Arguments::from_pairs(
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect(),
    )
}
