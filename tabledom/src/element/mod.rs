mod content;
mod node;

pub use content::Content;
pub use node::{Display, Element, Tag};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of every element with the given tag, in document order.
pub fn collect_by_tag(root: &Element, tag: Tag) -> Vec<String> {
    let mut ids = Vec::new();
    collect_recursive(root, tag, &mut ids);
    ids
}

fn collect_recursive(element: &Element, tag: Tag, ids: &mut Vec<String>) {
    if element.tag == tag {
        ids.push(element.id.clone());
    }

    for child in element.child_elements() {
        collect_recursive(child, tag, ids);
    }
}
