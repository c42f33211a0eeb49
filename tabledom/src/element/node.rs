use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kind. Only the structure a table needs is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Input,
}

impl Tag {
    /// Tags whose text is separated from the previous sibling by a tab.
    fn is_cell(self) -> bool {
        matches!(self, Tag::Th | Tag::Td)
    }

    /// Tags whose text starts on a new line.
    fn is_block(self) -> bool {
        matches!(
            self,
            Tag::Div | Tag::Table | Tag::THead | Tag::TBody | Tag::Tr
        )
    }
}

/// Inline display style. `None` hides the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Default,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Attributes
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: HashMap<String, String>,

    // Visual
    pub display: Display,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: Vec::new(),
            data: HashMap::new(),
            display: Display::Default,
        }
    }
}

impl Element {
    fn tagged(tag: Tag, prefix: &str) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::tagged(Tag::Div, "div")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Span, "text")
        }
    }

    pub fn table() -> Self {
        Self::tagged(Tag::Table, "table")
    }

    pub fn thead() -> Self {
        Self::tagged(Tag::THead, "thead")
    }

    pub fn tbody() -> Self {
        Self::tagged(Tag::TBody, "tbody")
    }

    pub fn tr() -> Self {
        Self::tagged(Tag::Tr, "tr")
    }

    /// Header cell with text content.
    pub fn th(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Th, "th")
        }
    }

    /// Body cell with text content.
    pub fn td(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Td, "td")
        }
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            content: Content::TextInput { value, cursor },
            ..Self::tagged(Tag::Input, "input")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn remove_data(&mut self, key: &str) -> Option<String> {
        self.data.remove(key)
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn is_displayed(&self) -> bool {
        self.display != Display::None
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct child elements; empty for text and input content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Rendered text of this element and its descendants.
    ///
    /// Cells are joined with a tab and rows or blocks with a newline, the way
    /// a browser's `innerText` lays out a table. Input values are not part of
    /// the text. The element's own display style is ignored so that hidden
    /// rows still report their text.
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        if child.tag.is_block() {
                            out.push('\n');
                        } else if child.tag.is_cell() {
                            out.push('\t');
                        }
                    }
                    child.write_text(out);
                }
            }
            Content::None | Content::TextInput { .. } => {}
        }
    }

    /// Reorder this element's children.
    ///
    /// `order[i]` is the current index of the child that should end up at
    /// position `i`. Children are moved, never cloned. Returns false and
    /// leaves the element untouched when `order` is not a permutation of the
    /// current child indices.
    pub fn reorder_children(&mut self, order: &[usize]) -> bool {
        let Content::Children(children) = &mut self.content else {
            return order.is_empty();
        };
        if order.len() != children.len() {
            log::warn!(
                "reorder of '{}' rejected: {} indices for {} children",
                self.id,
                order.len(),
                children.len()
            );
            return false;
        }

        let mut seen = vec![false; order.len()];
        for &idx in order {
            if idx >= seen.len() || seen[idx] {
                log::warn!("reorder of '{}' rejected: bad index {idx}", self.id);
                return false;
            }
            seen[idx] = true;
        }

        let mut slots: Vec<Option<Element>> =
            std::mem::take(children).into_iter().map(Some).collect();
        *children = order.iter().filter_map(|&idx| slots[idx].take()).collect();
        true
    }
}
