// Adapters layer: concrete roster sources behind the `DetachmentSource` port.

pub mod csv_file;
pub mod in_memory;

pub use csv_file::CsvFileSource;
pub use in_memory::InMemorySource;
