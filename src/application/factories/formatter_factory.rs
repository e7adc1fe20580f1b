use crate::adapters::outbound::formatters::{CanonicalFormatter, IdFormatter, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DocumentFormatter;

/// Factory for creating document formatters
///
/// Selects the outbound formatter adapter for an [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use vexid::application::dto::OutputFormat;
    /// use vexid::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Id);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DocumentFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Canonical => Box::new(CanonicalFormatter::new()),
            OutputFormat::Id => Box::new(IdFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use vexid::application::dto::OutputFormat;
    /// use vexid::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Writing OpenVEX JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Writing OpenVEX JSON output...",
            OutputFormat::Canonical => "📝 Writing canonical representations...",
            OutputFormat::Id => "📝 Writing document ids...",
        }
    }
}
