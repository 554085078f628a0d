//! HTML code generator.
//!
//! Walks the document tree and writes one statement per line, indented two
//! spaces per nesting level. A tag whose body is a single string (`p: "text"`)
//! or an empty block (`div {}`) stays on one line; any other body goes on its
//! own lines between the opening and closing tags. Values are written exactly as
//! parsed, with no HTML escaping.

use elk_parser::ast::{Body, Document, Statement, Tag};

/// Render a whole document. No trailing newline.
pub fn generate(doc: &Document) -> String {
    render(&doc.statements, 0)
}

/// Render a statement list at the given nesting depth, one statement per line.
pub fn render(statements: &[Statement], depth: usize) -> String {
    let mut html = String::new();
    render_statements(statements, depth, &mut html);
    html
}

fn render_statements(statements: &[Statement], depth: usize, out: &mut String) {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_statement(statement, depth, out);
    }
}

fn render_statement(statement: &Statement, depth: usize, out: &mut String) {
    match statement {
        Statement::Text(text) => {
            push_indent(out, depth);
            out.push_str(text);
        }
        Statement::Tag(tag) => render_tag(tag, depth, out),
    }
}

fn render_tag(tag: &Tag, depth: usize, out: &mut String) {
    push_indent(out, depth);
    open_tag(tag, out);

    match &tag.body {
        None => {}
        Some(Body::Statement(statement)) => match statement.as_ref() {
            Statement::Text(text) => out.push_str(text),
            Statement::Tag(child) => {
                out.push('\n');
                render_tag(child, depth + 1, out);
                out.push('\n');
                push_indent(out, depth);
            }
        },
        Some(Body::Block(children)) if children.is_empty() => {}
        Some(Body::Block(children)) => {
            out.push('\n');
            render_statements(children, depth + 1, out);
            out.push('\n');
            push_indent(out, depth);
        }
    }

    out.push_str(&format!("</{}>", tag.name));
}

/// `<name class="…" id="…" key="value"…>`
fn open_tag(tag: &Tag, out: &mut String) {
    out.push('<');
    out.push_str(&tag.name);

    if let Some(class) = &tag.class {
        push_attribute(out, "class", class);
    }
    if let Some(id) = &tag.id {
        push_attribute(out, "id", id);
    }
    for attr in tag.attributes.iter().flatten() {
        push_attribute(out, &attr.name, &attr.value);
    }

    out.push('>');
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!(" {name}=\"{value}\""));
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elk_parser::ast::Attribute;
    use pretty_assertions::assert_eq;

    fn gen(source: &str) -> String {
        generate(&elk_parser::Parser::parse(source).unwrap())
    }

    fn text(value: &str) -> Statement {
        Statement::Text(value.into())
    }

    // =========================================================================
    // Basic tags
    // =========================================================================

    #[test]
    fn test_empty_document() {
        assert_eq!(gen(""), "");
    }

    #[test]
    fn test_tag_without_body() {
        assert_eq!(gen("div"), "<div></div>");
    }

    #[test]
    fn test_empty_block_collapses() {
        assert_eq!(gen("tag {}"), "<tag></tag>");
        assert_eq!(gen("html {\n}"), "<html></html>");
    }

    #[test]
    fn test_text_collapses() {
        assert_eq!(gen("tag: \"x\""), "<tag>x</tag>");
    }

    #[test]
    fn test_top_level_text() {
        assert_eq!(gen("\"just text\""), "just text");
    }

    #[test]
    fn test_no_trailing_newline() {
        assert!(!gen("a {} b: \"c\"").ends_with('\n'));
    }

    // =========================================================================
    // Class, id and attributes
    // =========================================================================

    #[test]
    fn test_class() {
        assert_eq!(gen("div.someClass"), "<div class=\"someClass\"></div>");
    }

    #[test]
    fn test_id() {
        assert_eq!(gen("div#someID"), "<div id=\"someID\"></div>");
    }

    #[test]
    fn test_attribute_order_preserved() {
        assert_eq!(
            gen("tag [b: \"2\", a: \"1\"]"),
            "<tag b=\"2\" a=\"1\"></tag>"
        );
    }

    #[test]
    fn test_class_id_attribute_order() {
        assert_eq!(
            gen("div#i.c [k: \"v\"]"),
            "<div class=\"c\" id=\"i\" k=\"v\"></div>"
        );
        assert_eq!(gen("div.c#i"), gen("div#i.c"));
    }

    #[test]
    fn test_duplicate_attributes_rendered() {
        assert_eq!(gen("x [k: \"1\", k: \"2\"]"), "<x k=\"1\" k=\"2\"></x>");
    }

    #[test]
    fn test_values_not_escaped() {
        assert_eq!(
            gen(r#"a [title: "<b> & \"q\""]: "<i>raw</i>""#),
            "<a title=\"<b> & \"q\"\"><i>raw</i></a>"
        );
    }

    // =========================================================================
    // Expansion and nesting
    // =========================================================================

    #[test]
    fn test_multiple_statements_expand() {
        assert_eq!(gen("tag { \"a\" \"b\" }"), "<tag>\n  a\n  b\n</tag>");
    }

    #[test]
    fn test_single_text_in_braces_expands() {
        assert_eq!(gen("p { \"x\" }"), "<p>\n  x\n</p>");
    }

    #[test]
    fn test_nesting_indentation() {
        assert_eq!(
            gen("a { b { \"x\" } }"),
            "<a>\n  <b>\n    x\n  </b>\n</a>"
        );
    }

    #[test]
    fn test_colon_tag_expands() {
        assert_eq!(gen("li: a: \"x\""), "<li>\n  <a>x</a>\n</li>");
    }

    #[test]
    fn test_colon_tag_nested_in_block() {
        assert_eq!(
            gen("ul { li: a: \"x\" }"),
            "<ul>\n  <li>\n    <a>x</a>\n  </li>\n</ul>"
        );
    }

    #[test]
    fn test_collapsed_children_inside_block() {
        assert_eq!(
            gen("ul { li: \"1\" li {} li }"),
            "<ul>\n  <li>1</li>\n  <li></li>\n  <li></li>\n</ul>"
        );
    }

    #[test]
    fn test_sibling_top_level_tags() {
        assert_eq!(gen("h1: \"T\"\np: \"x\""), "<h1>T</h1>\n<p>x</p>");
    }

    #[test]
    fn test_decoded_newline_kept_verbatim() {
        assert_eq!(gen(r#"pre: "a\nb""#), "<pre>a\nb</pre>");
        assert_eq!(gen(r#"div { "a\nb" }"#), "<div>\n  a\nb\n</div>");
    }

    // =========================================================================
    // Direct rendering
    // =========================================================================

    #[test]
    fn test_render_at_depth() {
        let statements = vec![text("a"), Statement::Tag(Tag::new("br"))];
        assert_eq!(render(&statements, 2), "    a\n    <br></br>");
    }

    #[test]
    fn test_render_built_tree() {
        let mut tag = Tag::new("section");
        tag.attributes = Some(vec![Attribute {
            name: "role".into(),
            value: "main".into(),
        }]);
        tag.body = Some(Body::Block(vec![text("one"), text("two")]));

        assert_eq!(
            render(&[Statement::Tag(tag)], 1),
            "  <section role=\"main\">\n    one\n    two\n  </section>"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = elk_parser::Parser::parse("a.b#c [d: \"e\"] { f: \"g\" h {} }").unwrap();
        assert_eq!(generate(&doc), generate(&doc));
    }
}
