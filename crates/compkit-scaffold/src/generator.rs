//! Render component templates and write them to disk.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use compkit_core::{CompkitError, CompkitResult};

use crate::options::GenerationOptions;
use crate::templates::{INDEX_TEMPLATE, TEST_TEMPLATE};

/// Base directory component folders are created in by default.
pub const DEFAULT_COMPONENTS_DIR: &str = "components";

const SOURCE: &str = "component.tsx";
const STYLES: &str = "component.module.css";
const INDEX: &str = "index.ts";
const TEST: &str = "component.test.tsx";

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// File name inside the component directory.
    pub filename: String,
    pub content: String,
}

/// Check that a component name is a usable identifier.
pub fn validate_component_name(name: &str) -> CompkitResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if !valid {
        return Err(CompkitError::invalid_name(name));
    }

    if name.starts_with(|c: char| c.is_ascii_lowercase()) {
        tracing::warn!(component = name, "component names should start with an uppercase letter");
    }

    Ok(())
}

/// Render every file for a component without touching the filesystem.
///
/// Output order is source, CSS module (when styled), barrel, test stub.
pub fn render(name: &str, options: &GenerationOptions) -> CompkitResult<Vec<GeneratedFile>> {
    validate_component_name(name)?;

    let template = options.template.template();

    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (SOURCE, template.source),
        (STYLES, template.styles),
        (INDEX, INDEX_TEMPLATE),
        (TEST, TEST_TEMPLATE),
    ])?;

    let mut context = Context::new();
    context.insert("name", name);
    context.insert("name_lower", &name.to_lowercase());
    context.insert("styled", &options.styled);
    context.insert("typed", &options.typed);

    let mut files = Vec::with_capacity(4);

    files.push(GeneratedFile {
        filename: format!("{}.tsx", name),
        content: tera.render(SOURCE, &context)?,
    });

    if options.styled {
        files.push(GeneratedFile {
            filename: format!("{}.module.css", name),
            content: tera.render(STYLES, &context)?,
        });
    }

    files.push(GeneratedFile {
        filename: "index.ts".to_string(),
        content: tera.render(INDEX, &context)?,
    });

    files.push(GeneratedFile {
        filename: format!("{}.test.tsx", name),
        content: tera.render(TEST, &context)?,
    });

    tracing::debug!(
        component = name,
        template = %options.template,
        files = files.len(),
        "rendered component"
    );

    Ok(files)
}

/// Write rendered files into `output_dir`, creating it if needed.
///
/// Existing files are overwritten. A failure part-way leaves earlier files
/// in place.
pub fn write_files(files: &[GeneratedFile], output_dir: &Path) -> CompkitResult<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let path = output_dir.join(&file.filename);
        std::fs::write(&path, &file.content)?;
        tracing::info!(path = %path.display(), "wrote file");
        written.push(path);
    }

    Ok(written)
}

/// Render a component and write it to `<base_dir>/<name>/`.
pub fn generate(
    name: &str,
    options: &GenerationOptions,
    base_dir: &Path,
) -> CompkitResult<Vec<PathBuf>> {
    let files = render(name, options)?;
    write_files(&files, &base_dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateKind;

    fn options(template: TemplateKind, styled: bool, typed: bool) -> GenerationOptions {
        GenerationOptions { template, styled, typed }
    }

    fn file<'a>(files: &'a [GeneratedFile], filename: &str) -> Option<&'a GeneratedFile> {
        files.iter().find(|f| f.filename == filename)
    }

    #[test]
    fn test_every_template_substitutes_name() {
        for kind in TemplateKind::ALL {
            let files = render("UserCard", &options(kind, true, true)).unwrap();
            for f in &files {
                assert!(!f.content.contains("{{"), "{} ({}) kept a placeholder", f.filename, kind);
                assert!(!f.content.contains("{%"), "{} ({}) kept a tag", f.filename, kind);
            }
            let source = file(&files, "UserCard.tsx").unwrap();
            assert!(source.content.contains("export function UserCard"));
            assert!(source.content.contains("data-testid=\"usercard\""));
        }
    }

    #[test]
    fn test_unstyled_templates_have_no_placeholders() {
        for kind in TemplateKind::ALL {
            let files = render("Panel", &options(kind, false, false)).unwrap();
            let source = file(&files, "Panel.tsx").unwrap();
            assert!(!source.content.contains("{{"));
            assert!(!source.content.contains("module.css"));
            assert!(source.content.contains("root: 'panel'"));
        }
    }

    #[test]
    fn test_styled_controls_css_module() {
        let styled = render("Card", &options(TemplateKind::Simple, true, true)).unwrap();
        assert_eq!(styled.len(), 4);
        assert!(file(&styled, "Card.module.css").is_some());
        assert!(file(&styled, "Card.tsx")
            .unwrap()
            .content
            .contains("import styles from './Card.module.css';"));

        let plain = render("Card", &options(TemplateKind::Simple, false, true)).unwrap();
        assert_eq!(plain.len(), 3);
        assert!(plain.iter().all(|f| !f.filename.ends_with(".module.css")));
    }

    #[test]
    fn test_typed_controls_type_export() {
        let typed = render("Card", &options(TemplateKind::Simple, true, true)).unwrap();
        let index = file(&typed, "index.ts").unwrap();
        assert!(index.content.contains("export type { CardProps } from './Card';"));

        let untyped = render("Card", &options(TemplateKind::Simple, true, false)).unwrap();
        let index = file(&untyped, "index.ts").unwrap();
        assert!(!index.content.contains("export type"));
        assert_eq!(index.content, "export { default, Card } from './Card';\n");
    }

    #[test]
    fn test_test_stub_checks_class_name() {
        let files = render("Badge", &GenerationOptions::default()).unwrap();
        let stub = file(&files, "Badge.test.tsx").unwrap();
        assert!(stub.content.contains("render(<Badge />);"));
        assert!(stub.content.contains("className=\"custom-class\""));
        assert!(stub.content.contains("getByTestId('badge')"));
    }

    #[test]
    fn test_generated_css_passes_style_rules() {
        for kind in TemplateKind::ALL {
            let files = render("Widget", &options(kind, true, true)).unwrap();
            let css = file(&files, "Widget.module.css").unwrap();
            let issues = compkit_style::validate_content(&css.content);
            assert!(issues.is_empty(), "{} template CSS has issues: {:?}", kind, issues);
        }
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in ["", "1Card", "My-Card", "My Card", "Card!"] {
            let result = render(name, &GenerationOptions::default());
            assert!(
                matches!(result, Err(CompkitError::InvalidComponentName(_))),
                "expected '{}' to be rejected",
                name
            );
        }
        assert!(validate_component_name("My_Card2").is_ok());
    }

    #[test]
    fn test_generate_writes_component_directory() {
        let dir = tempfile::tempdir().unwrap();
        let written = generate("Header", &GenerationOptions::default(), dir.path()).unwrap();

        let component_dir = dir.path().join("Header");
        assert_eq!(
            written,
            vec![
                component_dir.join("Header.tsx"),
                component_dir.join("Header.module.css"),
                component_dir.join("index.ts"),
                component_dir.join("Header.test.tsx"),
            ]
        );
        for path in &written {
            assert!(path.is_file());
        }
    }

    #[test]
    fn test_regenerate_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(TemplateKind::Form, true, true);

        let first = generate("Signup", &opts, dir.path()).unwrap();
        let before: Vec<String> = first
            .iter()
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();

        let second = generate("Signup", &opts, dir.path()).unwrap();
        let after: Vec<String> = second
            .iter()
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("Blocked");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = generate("Blocked", &GenerationOptions::default(), dir.path());
        assert!(matches!(result, Err(CompkitError::Io(_))));
    }
}
