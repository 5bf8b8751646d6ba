pub mod csv;
pub mod demo;
pub mod error;
pub mod gviz;
pub mod layout;
pub mod values;

pub use csv::{parse_csv, tokenize_line};
pub use demo::demo_entries;
pub use error::ParseError;
pub use gviz::{parse_gviz, strip_wrapper};
pub use layout::SheetLayout;
pub use values::parse_values;
