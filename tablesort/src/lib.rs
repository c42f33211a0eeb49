//! Interactive sorting and searching for tables in a [`tabledom`] document.
//!
//! [`TableEngine::attach`] wires a [`ColumnSorter`] to every table and a
//! [`RowFilter`] to the search input. The host event loop then passes each
//! click and key press to [`TableEngine::handle_event`], which reorders or
//! hides rows in place.
//!
//! ```ignore
//! let mut page = render_case_table(&cases);
//! let mut engine = TableEngine::attach(&page, EngineConfig::default())?;
//!
//! engine.handle_event(&mut page, &Event::click("col-date"));
//! engine.handle_event(&mut page, &Event::key("tableSearch", Key::Char('a')));
//! ```

pub mod column;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod sorter;
pub mod state;

pub use column::{ColumnType, Comparator};
pub use config::EngineConfig;
pub use engine::{EngineResponse, TableEngine};
pub use error::{ConfigError, MarkupError, ParseColumnTypeError};
pub use filter::{FilterOutcome, RowFilter};
pub use sorter::{BoundColumn, ColumnSorter};
pub use state::{SortDirection, SortState};
