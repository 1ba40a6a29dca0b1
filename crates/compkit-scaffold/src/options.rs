//! Per-invocation generation options.

use crate::templates::TemplateKind;

/// Options controlling which files are rendered and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub template: TemplateKind,
    /// Emit `<Name>.module.css` and import it from the component.
    pub styled: bool,
    /// Re-export the props type from the barrel file.
    pub typed: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            template: TemplateKind::Simple,
            styled: true,
            typed: true,
        }
    }
}
