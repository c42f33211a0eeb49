//! Wiring: attach sorters and the filter to a document and route events.

use log::{debug, trace};
use tabledom::{
    Element, Event, MouseButton, Tag, collect_by_tag, edit_input, find_element, find_element_mut,
};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::filter::{FilterOutcome, RowFilter};
use crate::sorter::ColumnSorter;
use crate::state::SortDirection;

/// What an event did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineResponse {
    /// A table body was reordered.
    Sorted {
        table_id: String,
        header_id: String,
        direction: SortDirection,
    },
    /// The search input was edited and the filter re-run.
    Filtered(FilterOutcome),
    /// The event was not for the engine.
    Ignored,
}

/// One sorter per table plus the shared search filter.
#[derive(Debug)]
pub struct TableEngine {
    config: EngineConfig,
    sorters: Vec<ColumnSorter>,
    filter: Option<RowFilter>,
}

impl TableEngine {
    /// Wire every table and the search input found in `root`.
    ///
    /// Rows and headers must already be rendered. Missing pieces disable the
    /// corresponding feature; only an invalid config is an error.
    pub fn attach(root: &Element, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let sorters: Vec<ColumnSorter> = collect_by_tag(root, Tag::Table)
            .iter()
            .filter_map(|id| find_element(root, id))
            .map(|table| ColumnSorter::bind(table, &config))
            .collect();

        let filter = match find_element(root, &config.search_input_id) {
            Some(input) if input.tag == Tag::Input => {
                Some(RowFilter::new(&config.search_input_id))
            }
            Some(_) => {
                debug!(
                    "'{}' is not a text input, search disabled",
                    config.search_input_id
                );
                None
            }
            None => {
                debug!("no '{}' input, search disabled", config.search_input_id);
                None
            }
        };

        debug!(
            "attached to {} tables ({} sortable headers), search {}",
            sorters.len(),
            sorters.iter().map(ColumnSorter::len).sum::<usize>(),
            if filter.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            config,
            sorters,
            filter,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sorters(&self) -> &[ColumnSorter] {
        &self.sorters
    }

    pub fn filter(&self) -> Option<&RowFilter> {
        self.filter.as_ref()
    }

    /// Handle one event to completion.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> EngineResponse {
        trace!("event {event:?}");
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
            } => self.sort(root, target),
            Event::Key {
                target: Some(target),
                key,
                modifiers,
            } if self.is_search_input(target) => {
                if let Some(input) = find_element_mut(root, target) {
                    edit_input(input, *key, *modifiers);
                }
                // Every keystroke re-filters, even ones that do not edit.
                self.refilter(root)
            }
            _ => EngineResponse::Ignored,
        }
    }

    /// Sort by the header `header_id`, as if it were clicked.
    pub fn sort(&mut self, root: &mut Element, header_id: &str) -> EngineResponse {
        let Some(sorter) = self.sorters.iter_mut().find(|s| s.handles(header_id)) else {
            return EngineResponse::Ignored;
        };

        match sorter.click(root, header_id) {
            Some(direction) => EngineResponse::Sorted {
                table_id: sorter.table_id().to_string(),
                header_id: header_id.to_string(),
                direction,
            },
            None => EngineResponse::Ignored,
        }
    }

    /// Re-run the filter with the search input's current value.
    pub fn refilter(&self, root: &mut Element) -> EngineResponse {
        self.filter
            .as_ref()
            .and_then(|filter| filter.apply(root))
            .map_or(EngineResponse::Ignored, EngineResponse::Filtered)
    }

    fn is_search_input(&self, id: &str) -> bool {
        self.filter.as_ref().is_some_and(|f| f.input_id() == id)
    }
}
