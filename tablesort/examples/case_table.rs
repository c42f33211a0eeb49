use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{Element, Event, Key, find_element};
use tablesort::{EngineConfig, EngineResponse, TableEngine};

const CASES: &[(&str, &str, &str, &str, &str)] = &[
    ("12", "Lease dispute 10", "Kovács Kft.", "2023-01-05", "3.5"),
    ("3", "Lease dispute 2", "Nagy Anna", "2021-07-01", "1"),
    ("7", "Inheritance", "Szabó Péter", "2022-03-10", "12.25"),
    ("21", "Contract review", "Kovács Kft.", "", "n/a"),
    ("5", "Lease dispute 1", "Tóth Bt.", "2022-11-30 14:00", "2"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("case_table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = ui();
    let mut engine = TableEngine::attach(&page, EngineConfig::default())?;

    let script = [
        Event::click("col-name"),
        Event::click("col-date"),
        Event::click("col-date"),
        Event::click("col-hours"),
        Event::key("tableSearch", Key::Char('l')),
        Event::key("tableSearch", Key::Char('e')),
        Event::key("tableSearch", Key::Char('a')),
        Event::click("col-id"),
        Event::key("tableSearch", Key::Backspace),
        Event::key("tableSearch", Key::Backspace),
        Event::key("tableSearch", Key::Backspace),
    ];

    for event in &script {
        let response = engine.handle_event(&mut page, event);
        match &response {
            EngineResponse::Sorted {
                header_id,
                direction,
                ..
            } => println!("sort {header_id} {direction}"),
            EngineResponse::Filtered(outcome) => println!(
                "filter: {} shown, {} hidden",
                outcome.shown, outcome.hidden
            ),
            EngineResponse::Ignored => continue,
        }
        print_rows(&page);
    }

    Ok(())
}

fn print_rows(page: &Element) {
    let Some(body) = find_element(page, "case-rows") else {
        return;
    };
    for row in body.child_elements().iter().filter(|r| r.is_displayed()) {
        println!("  {}", row.inner_text().replace('\t', " | "));
    }
}

fn header(id: &str, label: &str, column: usize, column_type: &str) -> Element {
    Element::th(label)
        .id(id)
        .class("sortable")
        .data("column", column.to_string())
        .data("type", column_type)
}

fn ui() -> Element {
    let head = Element::thead().child(
        Element::tr()
            .child(header("col-id", "ID", 0, "number"))
            .child(header("col-name", "Case", 1, "string"))
            .child(header("col-client", "Client", 2, "string"))
            .child(header("col-date", "Date", 3, "date"))
            .child(header("col-hours", "Hours", 4, "number")),
    );

    let body = Element::tbody()
        .id("case-rows")
        .children(CASES.iter().map(|(id, name, client, date, hours)| {
            Element::tr()
                .id(format!("case-{id}"))
                .child(Element::td(*id))
                .child(Element::td(*name))
                .child(Element::td(*client))
                .child(Element::td(*date))
                .child(Element::td(*hours))
        }));

    Element::div()
        .id("page")
        .child(Element::input("").id("tableSearch"))
        .child(Element::table().id("case-table").child(head).child(body))
}
