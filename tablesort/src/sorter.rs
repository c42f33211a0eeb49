//! Column sorter: click a header, reorder the table body by that column.

use std::collections::HashMap;

use log::{debug, warn};
use tabledom::{Element, Tag, find_element, find_element_mut};

use crate::column::ColumnType;
use crate::config::EngineConfig;
use crate::error::MarkupError;
use crate::state::{SortDirection, SortState};

/// A sortable header wired to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundColumn {
    pub index: usize,
    pub column_type: ColumnType,
}

/// Sorts the body rows of one table.
#[derive(Debug)]
pub struct ColumnSorter {
    table_id: String,
    body_id: Option<String>,
    headers: HashMap<String, BoundColumn>,
    state: SortState,
    marker_attr: String,
}

impl ColumnSorter {
    /// Wire every sortable header of `table`.
    ///
    /// Headers with a missing or malformed column index are skipped. An
    /// unknown type tag falls back to [`ColumnType::String`].
    pub fn bind(table: &Element, config: &EngineConfig) -> Self {
        let mut headers = HashMap::new();
        let mut state = SortState::new();

        let mut candidates = Vec::new();
        collect_sortable_headers(table, &config.sortable_class, &mut candidates);

        for header in candidates {
            match bind_header(header, config) {
                Ok(bound) => {
                    debug!(
                        "bound header '{}' to column {} ({})",
                        header.id, bound.index, bound.column_type
                    );
                    state.register(bound.index);
                    headers.insert(header.id.clone(), bound);
                }
                Err(e) => debug!("skipping header: {e}"),
            }
        }

        let body_id = own_body(table).map(|b| b.id.clone());
        if body_id.is_none() {
            debug!("table '{}' has no body, sorting disabled", table.id);
        }

        Self {
            table_id: table.id.clone(),
            body_id,
            headers,
            state,
            marker_attr: config.sort_marker_attr.clone(),
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Whether `header_id` is a header wired to this sorter.
    pub fn handles(&self, header_id: &str) -> bool {
        self.headers.contains_key(header_id)
    }

    pub fn column(&self, header_id: &str) -> Option<BoundColumn> {
        self.headers.get(header_id).copied()
    }

    /// Number of wired headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Handle a click on a header.
    ///
    /// Returns the direction that was applied, or `None` if the header is not
    /// wired to this sorter.
    pub fn click(&mut self, root: &mut Element, header_id: &str) -> Option<SortDirection> {
        let column = self.column(header_id)?;
        let direction = self.state.advance(column.index);

        match &self.body_id {
            Some(body_id) => {
                if let Some(body) = find_element_mut(root, body_id) {
                    sort_body(body, column, direction);
                } else {
                    debug!("body '{body_id}' no longer in document");
                }
            }
            None => debug!("table '{}' has no body to sort", self.table_id),
        }

        self.mark_header(root, header_id, direction);
        Some(direction)
    }

    /// Flag the sorted header with its direction and clear the others.
    fn mark_header(&self, root: &mut Element, sorted_id: &str, direction: SortDirection) {
        for id in self.headers.keys() {
            if let Some(header) = find_element_mut(root, id) {
                if id == sorted_id {
                    header.set_data(self.marker_attr.as_str(), direction.as_str());
                } else {
                    header.remove_data(&self.marker_attr);
                }
            }
        }
    }

    /// The order the body would take if `header_id` were sorted in
    /// `direction`, as row IDs. Leaves the document and sort state untouched.
    pub fn preview(
        &self,
        root: &Element,
        header_id: &str,
        direction: SortDirection,
    ) -> Option<Vec<String>> {
        let column = self.column(header_id)?;
        let body = find_element(root, self.body_id.as_deref()?)?;
        let children = body.child_elements();
        let order = body_order(children, column, direction);
        Some(order.into_iter().map(|i| children[i].id.clone()).collect())
    }
}

fn collect_sortable_headers<'a>(
    element: &'a Element,
    class: &str,
    out: &mut Vec<&'a Element>,
) {
    if element.tag == Tag::Th && element.has_class(class) {
        out.push(element);
    }
    for child in element.child_elements() {
        // Nested tables get their own sorter.
        if child.tag != Tag::Table {
            collect_sortable_headers(child, class, out);
        }
    }
}

/// First body of `table` itself. Bodies of nested tables belong to their own
/// sorter.
fn own_body(element: &Element) -> Option<&Element> {
    element
        .child_elements()
        .iter()
        .find_map(|child| match child.tag {
            Tag::TBody => Some(child),
            Tag::Table => None,
            _ => own_body(child),
        })
}

fn column_index(header: &Element, config: &EngineConfig) -> Result<usize, MarkupError> {
    let raw = header
        .get_data(&config.column_attr)
        .ok_or_else(|| MarkupError::MissingColumnIndex {
            header: header.id.clone(),
        })?;

    raw.trim()
        .parse::<usize>()
        .map_err(|_| MarkupError::InvalidColumnIndex {
            header: header.id.clone(),
            value: raw.clone(),
        })
}

fn bind_header(header: &Element, config: &EngineConfig) -> Result<BoundColumn, MarkupError> {
    let index = column_index(header, config)?;

    let column_type = match header
        .get_data(&config.type_attr)
        .map(|t| t.parse::<ColumnType>())
    {
        Some(Ok(column_type)) => column_type,
        Some(Err(source)) => {
            let err = MarkupError::UnknownTypeTag {
                header: header.id.clone(),
                source,
            };
            warn!("{err}, comparing as string");
            ColumnType::String
        }
        None => ColumnType::default(),
    };

    Ok(BoundColumn { index, column_type })
}

/// Trimmed text of the cell at `index`, or an empty string if the row is short.
pub fn cell_text(row: &Element, index: usize) -> String {
    row.child_elements()
        .iter()
        .filter(|c| matches!(c.tag, Tag::Td | Tag::Th))
        .nth(index)
        .map(|cell| cell.inner_text().trim().to_string())
        .unwrap_or_default()
}

/// Compute the new child order for a table body.
///
/// `order[i]` is the current index of the child that belongs at `i`. Only
/// rows move; any other children keep their slots. Equal keys keep their
/// current relative order in both directions.
pub fn body_order(
    children: &[Element],
    column: BoundColumn,
    direction: SortDirection,
) -> Vec<usize> {
    let row_slots: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.tag == Tag::Tr)
        .map(|(i, _)| i)
        .collect();

    let keys: Vec<String> = row_slots
        .iter()
        .map(|&slot| cell_text(&children[slot], column.index))
        .collect();

    let compare = column.column_type.comparator();
    let mut ranked: Vec<usize> = (0..row_slots.len()).collect();
    // Index tie-break keeps the result stable regardless of direction.
    ranked.sort_by(|&a, &b| direction.apply(compare(&keys[a], &keys[b])).then(a.cmp(&b)));

    let mut order: Vec<usize> = (0..children.len()).collect();
    for (slot, rank) in row_slots.iter().zip(&ranked) {
        order[*slot] = row_slots[*rank];
    }
    order
}

fn sort_body(body: &mut Element, column: BoundColumn, direction: SortDirection) {
    let order = body_order(body.child_elements(), column, direction);
    if body.reorder_children(&order) {
        debug!(
            "sorted {} rows of '{}' by column {} {}",
            order.len(),
            body.id,
            column.index,
            direction
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, cells: &[&str]) -> Element {
        Element::tr()
            .id(id)
            .children(cells.iter().map(|c| Element::td(*c)))
    }

    fn ids(order: &[usize], children: &[Element]) -> Vec<String> {
        order.iter().map(|&i| children[i].id.clone()).collect()
    }

    #[test]
    fn test_cell_text_trims_and_defaults() {
        let r = row("r", &["  padded  ", "x"]);
        assert_eq!(cell_text(&r, 0), "padded");
        assert_eq!(cell_text(&r, 5), "");
    }

    #[test]
    fn test_body_order_keeps_non_row_slots() {
        let children = vec![
            row("b", &["2"]),
            Element::div().id("spacer"),
            row("a", &["1"]),
        ];
        let column = BoundColumn {
            index: 0,
            column_type: ColumnType::Number,
        };
        let order = body_order(&children, column, SortDirection::Ascending);
        assert_eq!(ids(&order, &children), vec!["a", "spacer", "b"]);
    }

    #[test]
    fn test_body_order_descending_is_stable() {
        let children = vec![
            row("x1", &["5"]),
            row("y", &["9"]),
            row("x2", &["5"]),
        ];
        let column = BoundColumn {
            index: 0,
            column_type: ColumnType::Number,
        };
        let order = body_order(&children, column, SortDirection::Descending);
        assert_eq!(ids(&order, &children), vec!["y", "x1", "x2"]);
    }

    #[test]
    fn test_bind_skips_headers_without_index() {
        let table = Element::table().id("t").child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("A").id("a").class("sortable").data("column", "0"))
                    .child(Element::th("B").id("b").class("sortable"))
                    .child(Element::th("C").id("c").class("sortable").data("column", "x"))
                    .child(Element::th("D").id("d").data("column", "3")),
            ),
        );
        let sorter = ColumnSorter::bind(&table, &EngineConfig::default());
        assert!(sorter.handles("a"));
        assert!(!sorter.handles("b"));
        assert!(!sorter.handles("c"));
        assert!(!sorter.handles("d"));
        assert_eq!(sorter.len(), 1);
    }

    #[test]
    fn test_bind_unknown_type_defaults_to_string() {
        let table = Element::table().child(
            Element::tr().child(
                Element::th("Amount")
                    .id("amt")
                    .class("sortable")
                    .data("column", "0")
                    .data("type", "currency"),
            ),
        );
        let sorter = ColumnSorter::bind(&table, &EngineConfig::default());
        assert_eq!(
            sorter.column("amt"),
            Some(BoundColumn {
                index: 0,
                column_type: ColumnType::String
            })
        );
    }

    #[test]
    fn test_click_ignores_body_of_nested_table() {
        let inner = Element::table().id("inner").child(
            Element::tbody()
                .id("inner-rows")
                .child(row("i2", &["2"]))
                .child(row("i1", &["1"])),
        );
        let mut root = Element::table()
            .id("outer")
            .child(
                Element::tr().child(
                    Element::th("N")
                        .id("n")
                        .class("sortable")
                        .data("column", "0")
                        .data("type", "number"),
                ),
            )
            .child(Element::tr().child(Element::td("").child(inner)));

        let mut sorter = ColumnSorter::bind(&root, &EngineConfig::default());
        assert_eq!(sorter.click(&mut root, "n"), Some(SortDirection::Ascending));

        let inner_rows: Vec<&str> = find_element(&root, "inner-rows")
            .unwrap()
            .child_elements()
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(inner_rows, vec!["i2", "i1"]);
        assert_eq!(sorter.preview(&root, "n", SortDirection::Ascending), None);
    }

    #[test]
    fn test_preview_leaves_document_and_state_alone() {
        let root = Element::table()
            .child(
                Element::tr().child(
                    Element::th("N")
                        .id("n")
                        .class("sortable")
                        .data("column", "0")
                        .data("type", "number"),
                ),
            )
            .child(
                Element::tbody()
                    .id("rows")
                    .child(row("ten", &["10"]))
                    .child(row("two", &["2"])),
            );
        let sorter = ColumnSorter::bind(&root, &EngineConfig::default());
        let before = root.clone();

        assert_eq!(
            sorter.preview(&root, "n", SortDirection::Ascending),
            Some(vec!["two".to_string(), "ten".to_string()])
        );
        assert_eq!(sorter.preview(&root, "missing", SortDirection::Ascending), None);
        assert_eq!(root, before);
        assert_eq!(sorter.state().peek(0), SortDirection::Ascending);
    }
}
