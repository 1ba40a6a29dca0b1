//! Embedded component templates.
//!
//! Each variant pairs a component source template with a CSS module
//! template. Templates use `{{ name }}` for the PascalCase component name
//! and `{{ name_lower }}` for its lowercase form.

use serde::Serialize;
use std::fmt;

/// Selector for one of the built-in template pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Simple,
    Interactive,
    Data,
    Form,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Simple,
        TemplateKind::Interactive,
        TemplateKind::Data,
        TemplateKind::Form,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Simple => "simple",
            TemplateKind::Interactive => "interactive",
            TemplateKind::Data => "data",
            TemplateKind::Form => "form",
        }
    }

    /// Look up a variant by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Look up a variant by name, falling back to `simple` for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(template = name, "unknown template type, using 'simple'");
            Self::Simple
        })
    }

    /// The template pair for this variant.
    pub fn template(&self) -> &'static ComponentTemplate {
        ALL_TEMPLATES
            .iter()
            .find(|t| t.kind == *self)
            .unwrap_or(&ALL_TEMPLATES[0])
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A component source template and its CSS module template.
pub struct ComponentTemplate {
    pub kind: TemplateKind,
    /// Content of `<Name>.tsx`.
    pub source: &'static str,
    /// Content of `<Name>.module.css`.
    pub styles: &'static str,
}

/// All available template pairs. `simple` comes first.
pub static ALL_TEMPLATES: &[ComponentTemplate] = &[
    ComponentTemplate {
        kind: TemplateKind::Simple,
        source: include_str!("templates/simple.tsx"),
        styles: include_str!("templates/simple.module.css"),
    },
    ComponentTemplate {
        kind: TemplateKind::Interactive,
        source: include_str!("templates/interactive.tsx"),
        styles: include_str!("templates/interactive.module.css"),
    },
    ComponentTemplate {
        kind: TemplateKind::Data,
        source: include_str!("templates/data.tsx"),
        styles: include_str!("templates/data.module.css"),
    },
    ComponentTemplate {
        kind: TemplateKind::Form,
        source: include_str!("templates/form.tsx"),
        styles: include_str!("templates/form.module.css"),
    },
];

/// Barrel file template.
pub const INDEX_TEMPLATE: &str = include_str!("templates/index.ts");

/// Test stub template.
pub const TEST_TEMPLATE: &str = include_str!("templates/component.test.tsx");
