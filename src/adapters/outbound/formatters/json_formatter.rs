use crate::adapters::outbound::json::to_json_string;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use crate::vex::domain::Document;

/// JsonFormatter adapter emitting pretty-printed OpenVEX JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        Ok(to_json_string(document)?)
    }
}
