#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Editable single-line text. `cursor` is a character index into `value`.
    TextInput {
        value: String,
        cursor: usize,
    },
}

