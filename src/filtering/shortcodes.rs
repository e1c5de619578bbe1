use super::descriptor::{Operation, Transform};

/// A key prefix encoding an operation and an optional transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcode {
    pub prefix: &'static str,
    pub operation: Operation,
    pub transform: Option<Transform>,
}

const fn code(prefix: &'static str, operation: Operation, transform: Option<Transform>) -> Shortcode {
    Shortcode {
        prefix,
        operation,
        transform,
    }
}

/// Recognised shortcodes, longest prefix first within each family.
pub const SHORTCODES: &[Shortcode] = &[
    code("swl_", Operation::StartsWith, Some(Transform::Lower)),
    code("swu_", Operation::StartsWith, Some(Transform::Upper)),
    code("swt_", Operation::StartsWith, Some(Transform::Trim)),
    code("sw_", Operation::StartsWith, None),
    code("cl_", Operation::Contains, Some(Transform::Lower)),
    code("cu_", Operation::Contains, Some(Transform::Upper)),
    code("ct_", Operation::Contains, Some(Transform::Trim)),
    code("c_", Operation::Contains, None),
    code("ewl_", Operation::EndsWith, Some(Transform::Lower)),
    code("ewu_", Operation::EndsWith, Some(Transform::Upper)),
    code("ewt_", Operation::EndsWith, Some(Transform::Trim)),
    code("ew_", Operation::EndsWith, None),
    code("eql_", Operation::Eq, Some(Transform::Lower)),
    code("equ_", Operation::Eq, Some(Transform::Upper)),
    code("eqt_", Operation::Eq, Some(Transform::Trim)),
    code("eq_", Operation::Eq, None),
    code("nel_", Operation::Ne, Some(Transform::Lower)),
    code("neu_", Operation::Ne, Some(Transform::Upper)),
    code("net_", Operation::Ne, Some(Transform::Trim)),
    code("ne_", Operation::Ne, None),
    code("gt_", Operation::Gt, None),
    code("ge_", Operation::Ge, None),
    code("lt_", Operation::Lt, None),
    code("le_", Operation::Le, None),
];

/// Result of matching a key against [`SHORTCODES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    pub operation: Operation,
    pub transform: Option<Transform>,
    /// Byte length of the matched prefix
    pub prefix_len: usize,
}

impl PrefixMatch {
    /// The key with the matched prefix stripped
    #[must_use]
    pub fn property<'k>(&self, key: &'k str) -> &'k str {
        &key[self.prefix_len..]
    }
}

/// Match `key` against the shortcode table.
///
/// Returns `None` for keys without a recognised shortcode; callers fall back
/// to an implicit equality filter on the whole key.
#[must_use]
pub fn resolve_prefix(key: &str) -> Option<PrefixMatch> {
    SHORTCODES
        .iter()
        .find(|code| key.starts_with(code.prefix))
        .map(|code| PrefixMatch {
            operation: code.operation,
            transform: code.transform,
            prefix_len: code.prefix.len(),
        })
}
