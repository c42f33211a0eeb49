//! Row filter: show only body rows whose text contains the search query.

use log::debug;
use tabledom::{Content, Display, Element, Tag, find_element, input_value};

/// Rows shown and hidden by one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub shown: usize,
    pub hidden: usize,
}

/// Filters every table body row in the document against a search input.
#[derive(Debug, Clone)]
pub struct RowFilter {
    input_id: String,
}

impl RowFilter {
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
        }
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// Current search query, or `None` if the input is absent.
    pub fn query<'a>(&self, root: &'a Element) -> Option<&'a str> {
        find_element(root, &self.input_id).and_then(input_value)
    }

    /// Re-run the filter with the input's current value.
    ///
    /// Returns `None` without touching the document if the input is absent.
    pub fn apply(&self, root: &mut Element) -> Option<FilterOutcome> {
        let query = self.query(root)?.to_string();
        Some(filter_rows(root, &query))
    }
}

/// Whether each row text contains `query`, case-insensitively.
///
/// An empty query matches every row.
pub fn visibility<S: AsRef<str>>(query: &str, texts: &[S]) -> Vec<bool> {
    let needle = query.to_lowercase();
    texts
        .iter()
        .map(|text| text.as_ref().to_lowercase().contains(&needle))
        .collect()
}

/// Show rows matching `query` and hide the rest, across all table bodies.
pub fn filter_rows(root: &mut Element, query: &str) -> FilterOutcome {
    let mut rows = Vec::new();
    collect_body_rows_mut(root, false, &mut rows);

    let texts: Vec<String> = rows.iter().map(|row| row.inner_text()).collect();
    let visible = visibility(query, &texts);

    let mut outcome = FilterOutcome::default();
    for (row, show) in rows.into_iter().zip(visible) {
        if show {
            row.set_display(Display::Default);
            outcome.shown += 1;
        } else {
            row.set_display(Display::None);
            outcome.hidden += 1;
        }
    }

    debug!(
        "filter '{query}': {} shown, {} hidden",
        outcome.shown, outcome.hidden
    );
    outcome
}

fn collect_body_rows_mut<'a>(
    element: &'a mut Element,
    in_body: bool,
    out: &mut Vec<&'a mut Element>,
) {
    let in_body = in_body || element.tag == Tag::TBody;
    if in_body && element.tag == Tag::Tr {
        out.push(element);
        return;
    }

    if let Content::Children(children) = &mut element.content {
        for child in children {
            collect_body_rows_mut(child, in_body, out);
        }
    }
}
