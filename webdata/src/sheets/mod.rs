pub mod charts;
pub mod error;
pub mod ingest;
pub mod parser;
pub mod report;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod monitor;

pub use error::FetchError;
pub use ingest::{aggregate, ingest, mock_data, resolve, try_ingest, YearSheets};
pub use parser::{EducationEnrollmentParser, SheetParser};
