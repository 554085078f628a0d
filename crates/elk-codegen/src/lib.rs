//! Elk Code Generator
//!
//! Renders a parsed Elk document as indented HTML, and provides [`compile`], the
//! single entry point drivers use:
//!
//! ```text
//! source text → Parser::parse() → Document → html::generate() → HTML text
//! ```

pub mod html;

use elk_parser::{Document, Parser};

pub use elk_parser::ParseError;

/// The result of a successful compile: the tree and its rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOutput {
    pub document: Document,
    pub html: String,
}

/// Parse Elk source and render it as HTML.
///
/// Pure: the same source always yields the same output, and nothing is shared
/// between calls.
pub fn compile(source: &str) -> Result<CompilerOutput, ParseError> {
    let document = Parser::parse(source)?;
    let html = html::generate(&document);
    Ok(CompilerOutput { document, html })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_empty() {
        let output = compile("").unwrap();
        assert!(output.document.statements.is_empty());
        assert_eq!(output.html, "");
    }

    #[test]
    fn test_compile_returns_tree_and_html() {
        let output = compile("p.lead: \"Hi\"").unwrap();
        assert_eq!(output.document.statements.len(), 1);
        assert_eq!(output.html, "<p class=\"lead\">Hi</p>");
    }

    #[test]
    fn test_compile_page() {
        let source = r#"
html {
  head { title: "Elk" meta [charset: "utf-8"] }
  body.home {
    h1#top: "Welcome"
    a [href: "/docs", target: "_blank"]: "Read the docs"
  }
}
"#;
        let output = compile(source).unwrap();
        assert_eq!(
            output.html,
            "<html>\n\
             \x20 <head>\n\
             \x20   <title>Elk</title>\n\
             \x20   <meta charset=\"utf-8\"></meta>\n\
             \x20 </head>\n\
             \x20 <body class=\"home\">\n\
             \x20   <h1 id=\"top\">Welcome</h1>\n\
             \x20   <a href=\"/docs\" target=\"_blank\">Read the docs</a>\n\
             \x20 </body>\n\
             </html>"
        );
    }

    #[test]
    fn test_compile_syntax_error() {
        let err = compile("div \"abc").unwrap_err();
        assert_eq!((err.line, err.column), (1, 5));
        assert!(!err.expected.is_empty());
        assert!(err.to_string().starts_with("Syntax error@1:5: expected "));
    }

    #[test]
    fn test_compile_deepest_nesting() {
        let source = "a:".repeat(elk_parser::MAX_NESTING) + "\"x\"";
        let output = compile(&source).unwrap();
        let lines: Vec<&str> = output.html.lines().collect();
        assert_eq!(lines.len(), 2 * elk_parser::MAX_NESTING - 1);
        assert_eq!(lines[127], format!("{}<a>x</a>", "  ".repeat(127)));
    }

    #[test]
    fn test_compile_too_deep_is_an_error() {
        let depth = 10_000;
        let source = "a{".repeat(depth) + &"}".repeat(depth);
        let err = compile(&source).unwrap_err();
        assert_eq!(err.expected, vec!["at most 128 nested blocks"]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let source = "ul { li: \"a\" li.b: \"c\" }";
        assert_eq!(compile(source), compile(source));
    }
}
