//! The UI capability interface.
//!
//! The concrete UI (input field, loading indicator, field-card container, map
//! container, summary area) is an external collaborator. The orchestrator
//! drives it through this trait; the CLI binary provides a terminal
//! implementation and tests provide recording ones.

use crate::render::FieldBlock;

/// Capabilities the orchestrator requires from the UI.
pub trait UiSurface {
    /// Shows the loading indicator.
    fn show_loading(&mut self);

    /// Hides the loading indicator.
    fn hide_loading(&mut self);

    /// Echoes `value` into the IP input field (empty string clears it).
    fn set_input(&mut self, value: &str);

    /// Clears the field-card container.
    fn clear_fields(&mut self);

    /// Displays the rendered field blocks, replacing any previous content.
    fn show_fields(&mut self, blocks: &[FieldBlock]);

    /// Displays the human-readable location summary and reveals its area.
    fn show_summary(&mut self, summary: &str);

    /// Hides the map container and the summary area.
    fn hide_map_and_summary(&mut self);

    /// Replaces the field display with an error block.
    fn show_error(&mut self, message: &str);

    /// Replaces the field display with a validation warning block.
    fn show_warning(&mut self, message: &str);
}
