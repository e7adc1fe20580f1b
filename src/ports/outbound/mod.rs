/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system and the console.
pub mod document_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_reader::DocumentReader;
pub use formatter::DocumentFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
