//! GraphQL schema input.
//!
//! A textual scan, not a full SDL parser: the named `type`, `input` or
//! `interface` block is located and each `name: Type` inside it becomes a
//! field. Scalar and object type names are kept as written.

use once_cell::sync::Lazy;
use regex::Regex;

use compkit_core::{CompkitError, CompkitResult};

use crate::emit::render_interfaces;
use crate::field::FieldSchema;

// Block strings, strings and comments in one pass, so whichever starts
// first wins.
static NOISE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)""".*?"""|"(?:[^"\\\n]|\\.)*"|#[^\n]*"#).expect("valid regex")
});

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\w+(?:\s*\([^)]*\))?").expect("valid regex"));

// name, optional arguments, optional `!` after the name, then the type.
static FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*(?:\([^)]*\))?\s*(!)?\s*:\s*(\[+\s*\w+\s*!?(?:\s*\]\s*!?)+|\w+\s*!?)")
        .expect("valid regex")
});

/// Strip strings, comments and directives.
fn strip_noise(schema: &str) -> String {
    let text = NOISE.replace_all(schema, "");
    DIRECTIVE.replace_all(&text, "").into_owned()
}

/// Return the text between the braces of the named type.
///
/// A declaration without a body yields an empty body.
fn type_body<'a>(text: &'a str, type_name: &str) -> CompkitResult<&'a str> {
    let name = regex::escape(type_name);
    let opening = Regex::new(&format!(
        r"\b(?:type|input|interface)\s+{}\b(?:\s+implements\s+&?\s*\w+(?:\s*[&,]\s*\w+)*)?\s*\{{",
        name
    ))
    .map_err(|e| CompkitError::InvalidSchema(e.to_string()))?;

    let Some(found) = opening.find(text) else {
        let declared = Regex::new(&format!(r"\b(?:type|input|interface)\s+{}\b", name))
            .map_err(|e| CompkitError::InvalidSchema(e.to_string()))?;
        return if declared.is_match(text) {
            Ok("")
        } else {
            Err(CompkitError::TypeNotFound(type_name.to_string()))
        };
    };
    let start = found.end();

    let mut depth = 1usize;
    for (offset, c) in text[start..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&text[start..start + offset]);
                }
            }
            _ => {}
        }
    }

    Err(CompkitError::InvalidSchema(format!(
        "type '{}' has no closing brace",
        type_name
    )))
}

/// Blank out anything nested in braces, such as input object defaults.
fn top_level(body: &str) -> String {
    let mut depth = 0usize;
    body.chars()
        .map(|c| match c {
            '{' => {
                depth += 1;
                ' '
            }
            '}' => {
                depth = depth.saturating_sub(1);
                ' '
            }
            _ if depth > 0 => ' ',
            _ => c,
        })
        .collect()
}

/// Convert a GraphQL type reference. Returns the TypeScript type and
/// whether it is non-null.
fn convert_type(raw: &str) -> (String, bool) {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let required = compact.ends_with('!');
    let depth = compact.chars().take_while(|c| *c == '[').count();
    let base = compact
        .trim_start_matches('[')
        .trim_end_matches(|c| c == ']' || c == '!');

    (format!("{}{}", base, "[]".repeat(depth)), required)
}

/// Extract the fields of `type_name`.
pub fn graphql_fields(schema: &str, type_name: &str) -> CompkitResult<Vec<FieldSchema>> {
    let text = strip_noise(schema);
    let body = top_level(type_body(&text, type_name)?);

    let fields = FIELD
        .captures_iter(&body)
        .map(|caps| {
            let (ty, type_required) = convert_type(&caps[3]);
            FieldSchema::new(&caps[1], ty, type_required || caps.get(2).is_some())
        })
        .collect();

    Ok(fields)
}

/// Render interfaces for `type_name` from GraphQL schema text.
///
/// Fails with [`CompkitError::TypeNotFound`] when the type is absent.
pub fn from_graphql_schema(schema: &str, type_name: &str) -> CompkitResult<String> {
    let fields = graphql_fields(schema, type_name)?;
    tracing::debug!(type_name, fields = fields.len(), "extracted GraphQL fields");
    Ok(render_interfaces(type_name, &fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_type() {
        let out = from_graphql_schema("type User { id: ID! name: String }", "User").unwrap();
        assert!(out.contains("  id: ID;\n"));
        assert!(out.contains("  name?: String;\n"));
        assert!(out.contains("export interface UserProps {"));
    }

    #[test]
    fn test_multi_line_schema() {
        let schema = r#"
# Accounts
type Query {
  user(id: ID!): User
}

"""
A registered user.
"""
type User implements Node @key(fields: "id") {
  id: ID!
  # internal: do not expose
  "Display name"
  name: String
  email: String! @deprecated(reason: "use contacts")
  posts(first: Int = 10, after: String): [Post!]!
  scores: [[Int]]
  nickname!: String
}

type Post {
  title: String!
}
"#;
        let fields = graphql_fields(schema, "User").unwrap();
        let summary: Vec<(&str, &str, bool)> = fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str(), f.required))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("id", "ID", true),
                ("name", "String", false),
                ("email", "String", true),
                ("posts", "Post[]", true),
                ("scores", "Int[][]", false),
                ("nickname", "String", true),
            ]
        );
    }

    #[test]
    fn test_input_type() {
        let schema = "input NewUser {\n  name: String!\n  age: Int\n}\n";
        let fields = graphql_fields(schema, "NewUser").unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[test]
    fn test_type_name_must_match_exactly() {
        let schema = "type UserProfile { bio: String }\ntype User { id: ID! }\n";
        let fields = graphql_fields(schema, "User").unwrap();
        assert_eq!(fields, vec![FieldSchema::new("id", "ID", true)]);
    }

    #[test]
    fn test_commented_out_type_is_ignored() {
        let schema = "# type Ghost { id: ID! }\ntype User { id: ID! }\n";
        let result = from_graphql_schema(schema, "Ghost");
        assert!(matches!(result, Err(CompkitError::TypeNotFound(name)) if name == "Ghost"));
    }

    #[test]
    fn test_bodiless_type_does_not_borrow_next_body() {
        let schema = "type Marker\n\ntype Post {\n  title: String!\n}\n";
        assert!(graphql_fields(schema, "Marker").unwrap().is_empty());
        assert_eq!(graphql_fields(schema, "Post").unwrap().len(), 1);
    }

    #[test]
    fn test_implements_list() {
        let schema = "type Admin implements Node & User, Auditable {\n  id: ID!\n}\n";
        assert_eq!(
            graphql_fields(schema, "Admin").unwrap(),
            vec![FieldSchema::new("id", "ID", true)]
        );
    }

    #[test]
    fn test_input_defaults_are_not_fields() {
        let schema = "input Filter { range: Range = { min: 1, max: [2] } name: String = \"x\" }";
        let fields = graphql_fields(schema, "Filter").unwrap();
        let names: Vec<(&str, &str)> = fields
            .iter()
            .map(|f| (f.name.as_str(), f.ty.as_str()))
            .collect();
        assert_eq!(names, vec![("range", "Range"), ("name", "String")]);
    }

    #[test]
    fn test_block_quote_inside_comment() {
        let schema = r#"
# docs use """ blocks
type User { id: ID! }

"""
A post.
"""
type Post { title: String }
"#;
        assert_eq!(
            graphql_fields(schema, "User").unwrap(),
            vec![FieldSchema::new("id", "ID", true)]
        );
        assert_eq!(graphql_fields(schema, "Post").unwrap().len(), 1);
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        let schema = "type Tag {\n  \"Value like #rust\"\n  label: String!\n}\n";
        assert_eq!(
            graphql_fields(schema, "Tag").unwrap(),
            vec![FieldSchema::new("label", "String", true)]
        );
    }

    #[test]
    fn test_missing_type() {
        let result = from_graphql_schema("type User { id: ID! }", "Order");
        assert!(matches!(result, Err(CompkitError::TypeNotFound(_))));
    }

    #[test]
    fn test_unterminated_type() {
        let result = from_graphql_schema("type User {\n  id: ID!\n", "User");
        assert!(matches!(result, Err(CompkitError::InvalidSchema(_))));
    }

    #[test]
    fn test_convert_type() {
        assert_eq!(convert_type("String"), ("String".to_string(), false));
        assert_eq!(convert_type("ID!"), ("ID".to_string(), true));
        assert_eq!(convert_type("[ Post! ]!"), ("Post[]".to_string(), true));
    }
}
