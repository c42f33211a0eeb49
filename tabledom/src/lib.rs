pub mod element;
pub mod event;
pub mod text_input;

pub use element::{
    collect_by_tag, find_element, find_element_mut, Content, Display, Element, Tag,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use text_input::{edit_input, input_value, TextEditResult};
