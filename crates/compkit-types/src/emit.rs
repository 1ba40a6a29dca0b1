//! TypeScript text emission.

use crate::field::FieldSchema;

/// Default output file for a type: `<typename-lowercased>.ts`.
pub fn default_output_file(type_name: &str) -> String {
    format!("{}.ts", type_name.to_lowercase())
}

/// Render `<TypeName>` followed by `<TypeName>Props` with the same fields.
pub fn render_interfaces(type_name: &str, fields: &[FieldSchema]) -> String {
    let mut out = String::new();
    render_interface(&mut out, type_name, fields);
    out.push('\n');
    render_interface(&mut out, &format!("{}Props", type_name), fields);
    out
}

fn render_interface(out: &mut String, name: &str, fields: &[FieldSchema]) {
    out.push_str(&format!("export interface {} {{\n", name));

    for field in fields {
        if let Some(ref description) = field.description {
            out.push_str(&format!("  /** {} */\n", description.replace("*/", "*\\/")));
        }
        out.push_str(&format!(
            "  {}{}: {};\n",
            property_name(&field.name),
            if field.required { "" } else { "?" },
            field.ty
        ));
    }

    out.push_str("}\n");
}

/// Quote property names that are not plain identifiers.
fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let plain = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
