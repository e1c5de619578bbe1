use super::descriptor::{Descriptor, Operation};

/// How a multi-field search compares each field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// `search_` keys
    Contains,
    /// `searchsw_` keys
    StartsWith,
}

impl SearchMode {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Contains => "search_",
            Self::StartsWith => "searchsw_",
        }
    }

    const fn method(self) -> &'static str {
        match self {
            Self::Contains => "Contains",
            Self::StartsWith => "StartsWith",
        }
    }

    /// Fragment template comparing one field against `@0`
    #[must_use]
    pub fn template(self, field: &str) -> String {
        format!("{field}.ToLower().{}(@0)", self.method())
    }

    /// Split a search key into its mode and the underscore-delimited field list.
    #[must_use]
    pub fn detect(key: &str) -> Option<(Self, &str)> {
        [Self::StartsWith, Self::Contains]
            .into_iter()
            .find_map(|mode| key.strip_prefix(mode.prefix()).map(|fields| (mode, fields)))
    }
}

/// Upper-case the first character, leaving the rest untouched
#[must_use]
pub fn proper_case(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Expand `fields` (`first_last_email`) into one fragment descriptor per field.
///
/// The first descriptor opens the group with [`Operation::Sql`]; the rest are
/// [`Operation::SqlUnion`]. All of them share the lower-cased `value`.
#[must_use]
pub fn expand_search(mode: SearchMode, fields: &str, value: &str) -> Vec<Descriptor> {
    let term = value.to_lowercase();
    let descriptors: Vec<Descriptor> = fields
        .split('_')
        .filter(|field| !field.is_empty())
        .enumerate()
        .map(|(i, field)| {
            let operation = if i == 0 { Operation::Sql } else { Operation::SqlUnion };
            Descriptor::fragment(operation, mode.template(&proper_case(field)), term.clone())
        })
        .collect();

    tracing::debug!(
        mode = ?mode,
        fields = %fields,
        expanded = descriptors.len(),
        "Expanded search key"
    );
    descriptors
}
