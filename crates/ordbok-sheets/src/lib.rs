mod client;
mod error;
mod source;
mod transport;


pub use client::SheetsClient;
pub use error::SheetsError;
pub use source::{EntrySource, SourceMetadata};
pub use transport::{FetchError, HttpTransport, ReqwestTransport};
