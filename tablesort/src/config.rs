//! Engine configuration.

use crate::error::ConfigError;

/// Names the markup the engine looks for.
///
/// Attribute names are `data-*` keys without the `data-` prefix, matching
/// how [`tabledom::Element::data`] stores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// ID of the search text input.
    pub search_input_id: String,

    /// Class marking a header as sortable.
    pub sortable_class: String,

    /// Attribute holding a header's 0-based column index.
    pub column_attr: String,

    /// Attribute holding a header's type tag.
    pub type_attr: String,

    /// Attribute set to `asc`/`desc` on the most recently sorted header.
    pub sort_marker_attr: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_input_id: "tableSearch".to_string(),
            sortable_class: "sortable".to_string(),
            column_attr: "column".to_string(),
            type_attr: "type".to_string(),
            sort_marker_attr: "sort".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search input ID.
    pub fn search_input_id(mut self, id: impl Into<String>) -> Self {
        self.search_input_id = id.into();
        self
    }

    /// Set the sortable header class.
    pub fn sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    /// Set the column index attribute.
    pub fn column_attr(mut self, attr: impl Into<String>) -> Self {
        self.column_attr = attr.into();
        self
    }

    /// Set the type tag attribute.
    pub fn type_attr(mut self, attr: impl Into<String>) -> Self {
        self.type_attr = attr.into();
        self
    }

    /// Set the sort marker attribute.
    pub fn sort_marker_attr(mut self, attr: impl Into<String>) -> Self {
        self.sort_marker_attr = attr.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("search_input_id", &self.search_input_id),
            ("sortable_class", &self.sortable_class),
            ("column_attr", &self.column_attr),
            ("type_attr", &self.type_attr),
            ("sort_marker_attr", &self.sort_marker_attr),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptyField(*name));
        }

        let attrs = &fields[2..];
        for (i, (a_name, a)) in attrs.iter().enumerate() {
            if let Some((b_name, _)) = attrs[i + 1..].iter().find(|(_, b)| b == a) {
                return Err(ConfigError::AttributeClash(*a_name, *b_name));
            }
        }
        Ok(())
    }
}
