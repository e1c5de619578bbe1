//! Filter descriptors: the structured form of one filter condition before it
//! is serialized onto the wire.

use serde::Serialize;
use std::fmt;

/// Comparison operations understood by the backend.
///
/// Serialized by variant name (`"StartsWith"`, `"SqlUnion"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    StartsWith,
    Contains,
    EndsWith,
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Opens a raw fragment group
    Sql,
    /// ORs a raw fragment into the current group
    SqlUnion,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StartsWith => "StartsWith",
            Self::Contains => "Contains",
            Self::EndsWith => "EndsWith",
            Self::Eq => "Eq",
            Self::Ne => "Ne",
            Self::Gt => "Gt",
            Self::Ge => "Ge",
            Self::Lt => "Lt",
            Self::Le => "Le",
            Self::Sql => "Sql",
            Self::SqlUnion => "SqlUnion",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String transform applied to the property before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Transform {
    Lower,
    Upper,
    Trim,
}

impl Transform {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "Lower",
            Self::Upper => "Upper",
            Self::Trim => "Trim",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One filter condition.
///
/// Field order is the wire order: `property, operation, transform, value, sql`.
/// Absent fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Target field, `None` when the descriptor carries a raw fragment
    pub property: Option<String>,
    pub operation: Operation,
    pub transform: Option<Transform>,
    /// Decoded operand
    pub value: String,
    /// Raw fragment template with `@0` bound to `value`
    pub sql: Option<String>,
}

impl Descriptor {
    #[must_use]
    pub fn new(
        property: Option<String>,
        operation: Operation,
        transform: Option<Transform>,
        value: String,
        sql: Option<String>,
    ) -> Self {
        Self {
            property,
            operation,
            transform,
            value,
            sql,
        }
    }

    /// Descriptor comparing a named property
    #[must_use]
    pub fn field(
        property: impl Into<String>,
        operation: Operation,
        transform: Option<Transform>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(Some(property.into()), operation, transform, value.into(), None)
    }

    /// Descriptor carrying a raw fragment from search expansion
    #[must_use]
    pub fn fragment(operation: Operation, sql: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(None, operation, None, value.into(), Some(sql.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_serializes_in_wire_order() {
        let descriptor = Descriptor::field("name", Operation::StartsWith, Some(Transform::Lower), "jo");
        let text = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(
            text,
            r#"{"property":"name","operation":"StartsWith","transform":"Lower","value":"jo","sql":null}"#
        );
    }

    #[test]
    fn test_fragment_has_no_property() {
        let descriptor = Descriptor::fragment(Operation::Sql, "First.ToLower().Contains(@0)", "smith");
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({
                "property": null,
                "operation": "Sql",
                "transform": null,
                "value": "smith",
                "sql": "First.ToLower().Contains(@0)"
            })
        );
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for op in [Operation::SqlUnion, Operation::Ge, Operation::EndsWith] {
            assert_eq!(serde_json::to_value(op).unwrap(), json!(op.to_string()));
        }
        assert_eq!(Transform::Trim.to_string(), "Trim");
    }
}
