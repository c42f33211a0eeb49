use crate::element::{Content, Element};
use crate::event::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Current value of a text input, or `None` if the element is not an input.
pub fn input_value(element: &Element) -> Option<&str> {
    match &element.content {
        Content::TextInput { value, .. } => Some(value),
        _ => None,
    }
}

/// Apply a key press to a text input element.
pub fn edit_input(element: &mut Element, key: Key, modifiers: Modifiers) -> TextEditResult {
    let Content::TextInput { value, cursor } = &mut element.content else {
        return TextEditResult::Ignored;
    };
    let char_count = value.chars().count();
    *cursor = (*cursor).min(char_count);

    match key {
        Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
            let byte_pos = char_to_byte_index(value, *cursor);
            value.insert(byte_pos, c);
            *cursor += 1;
            TextEditResult::Changed
        }

        Key::Backspace if modifiers.none() => {
            if *cursor == 0 {
                return TextEditResult::Handled;
            }
            let byte_pos = char_to_byte_index(value, *cursor - 1);
            value.remove(byte_pos);
            *cursor -= 1;
            TextEditResult::Changed
        }

        Key::Delete if modifiers.none() => {
            if *cursor >= char_count {
                return TextEditResult::Handled;
            }
            let byte_pos = char_to_byte_index(value, *cursor);
            value.remove(byte_pos);
            TextEditResult::Changed
        }

        Key::Left if !modifiers.ctrl => {
            *cursor = cursor.saturating_sub(1);
            TextEditResult::Handled
        }

        Key::Right if !modifiers.ctrl => {
            *cursor = (*cursor + 1).min(char_count);
            TextEditResult::Handled
        }

        Key::Home => {
            *cursor = 0;
            TextEditResult::Handled
        }

        Key::End => {
            *cursor = char_count;
            TextEditResult::Handled
        }

        Key::Enter => TextEditResult::Submitted,

        _ => TextEditResult::Ignored,
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
