use tabledom::{
    collect_by_tag, find_element, find_element_mut, Content, Display, Element, Event, Key,
    Tag,
};

fn sample_table() -> Element {
    Element::table()
        .id("cases")
        .child(
            Element::thead().child(
                Element::tr()
                    .child(Element::th("Name").id("h-name"))
                    .child(Element::th("Date").id("h-date")),
            ),
        )
        .child(
            Element::tbody()
                .id("body")
                .child(
                    Element::tr()
                        .id("r1")
                        .child(Element::td("Alpha"))
                        .child(Element::td("2023-01-01")),
                )
                .child(
                    Element::tr()
                        .id("r2")
                        .child(Element::td("Beta"))
                        .child(Element::td("2023-02-01")),
                ),
        )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = Element::div().id("page").child(sample_table());

    assert_eq!(find_element(&root, "r2").map(|e| e.tag), Some(Tag::Tr));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut_allows_edit() {
    let mut root = sample_table();

    find_element_mut(&mut root, "r1")
        .expect("row exists")
        .set_display(Display::None);

    assert!(!find_element(&root, "r1").unwrap().is_displayed());
    assert!(find_element(&root, "r2").unwrap().is_displayed());
}

#[test]
fn test_collect_by_tag_document_order() {
    let root = sample_table();
    assert_eq!(collect_by_tag(&root, Tag::Tr).len(), 3);
    assert_eq!(
        collect_by_tag(&root, Tag::Th),
        vec!["h-name".to_string(), "h-date".to_string()]
    );
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_inner_text_row_joins_cells_with_tab() {
    let root = sample_table();
    let row = find_element(&root, "r1").unwrap();
    assert_eq!(row.inner_text(), "Alpha\t2023-01-01");
}

#[test]
fn test_inner_text_body_joins_rows_with_newline() {
    let root = sample_table();
    let body = find_element(&root, "body").unwrap();
    assert_eq!(body.inner_text(), "Alpha\t2023-01-01\nBeta\t2023-02-01");
}

#[test]
fn test_inner_text_ignores_hidden_flag_and_inputs() {
    let row = Element::tr()
        .display(Display::None)
        .child(Element::td("x"))
        .child(Element::td("").child(Element::input("typed")));
    assert_eq!(row.inner_text(), "x\t");
}

#[test]
fn test_input_holds_value_with_cursor_at_end() {
    let input = Element::input("héllo");
    assert_eq!(input.tag, Tag::Input);
    assert_eq!(
        input.content,
        Content::TextInput {
            value: "héllo".to_string(),
            cursor: 5,
        }
    );
}

// ============================================================================
// Reordering
// ============================================================================

#[test]
fn test_reorder_children_moves_rows() {
    let mut root = sample_table();
    let body = find_element_mut(&mut root, "body").unwrap();
    body.set_data("marker", "kept");

    assert!(body.reorder_children(&[1, 0]));

    let ids: Vec<_> = body.child_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["r2", "r1"]);
    assert_eq!(body.get_data("marker").map(String::as_str), Some("kept"));
}

#[test]
fn test_reorder_children_rejects_bad_permutation() {
    let mut root = sample_table();
    let body = find_element_mut(&mut root, "body").unwrap();

    assert!(!body.reorder_children(&[0, 0]));
    assert!(!body.reorder_children(&[0]));
    assert!(!body.reorder_children(&[0, 2]));

    let ids: Vec<_> = body.child_elements().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_target() {
    assert_eq!(Event::click("h-name").target(), Some("h-name"));
    assert_eq!(Event::key("search", Key::Char('a')).target(), Some("search"));
}

#[test]
fn test_key_from_crossterm() {
    use crossterm::event::KeyCode;
    assert_eq!(Key::from(KeyCode::Char('z')), Key::Char('z'));
    assert_eq!(Key::from(KeyCode::Backspace), Key::Backspace);
    assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
}
