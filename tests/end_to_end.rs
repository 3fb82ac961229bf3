//! End-to-end tests through the public `jsgen` API.

use std::cell::RefCell;
use std::rc::Rc;

use jsgen::{
    AssignmentOp, BinaryOp, Generator, GeneratorOptions, LogicalOp, Node, SourceLocation,
    SourceRange, UnaryOp, VariableKind,
};

fn range(begin: (u32, u32), end: (u32, u32)) -> SourceRange {
    SourceRange::new(
        SourceLocation::new(begin.0, begin.1),
        SourceLocation::new(end.0, end.1),
    )
}

/// Text covered by a single-line `range` of `output`.
fn slice_line(output: &str, range: SourceRange) -> &str {
    assert_eq!(range.begin.line, range.end.line, "multi-line range");
    let line = output
        .split('\n')
        .nth(range.begin.line as usize - 1)
        .expect("range line exists");
    let begin = range.begin.column as usize - 1;
    let end = range.end.column as usize - 1;
    let start_byte = line.char_indices().nth(begin).map_or(line.len(), |(i, _)| i);
    let end_byte = line.char_indices().nth(end).map_or(line.len(), |(i, _)| i);
    &line[start_byte..end_byte]
}

#[test]
fn test_documented_examples() {
    let mut generator = Generator::new();
    generator.write(Node::expr_stmt(Node::prop(Node::id("value"), "93: ratio")));
    generator.write(Node::expr_stmt(Node::binary(
        Node::id("a"),
        BinaryOp::In,
        Node::id("b"),
    )));
    generator.write(Node::expr_stmt(Node::binary(
        Node::binary(Node::number(1.0), BinaryOp::Power, Node::number(2.0)),
        BinaryOp::Power,
        Node::number(3.0),
    )));
    generator.write(Node::expr_stmt(Node::new_expr(
        Node::call(Node::id("f"), vec![Node::id("hello"), Node::number(13.0)]),
        vec![],
    )));
    assert_eq!(
        generator.output(),
        "value[\"93: ratio\"];\n(a in b);\n(1 ** 2) ** 3;\nnew (f(hello, 13))();\n"
    );
}

#[test]
fn test_second_write_starts_on_next_line() {
    let mut generator = Generator::new();
    let first = generator.write(Node::var_decl(
        VariableKind::Const,
        "answer",
        Some(Node::number(42.0)),
    ));
    let second = generator.write(Node::expr_stmt(Node::call(
        Node::prop(Node::id("console"), "log"),
        vec![Node::id("answer")],
    )));
    assert_eq!(first, range((1, 1), (1, 19)));
    assert_eq!(second.begin, SourceLocation::new(2, 1));
    assert_eq!(slice_line(generator.output(), second), "console.log(answer);");
}

#[test]
fn test_ranges_map_back_to_output() {
    let ranges = Rc::new(RefCell::new(Vec::new()));
    let track = |node: Node| {
        let sink = Rc::clone(&ranges);
        Node::deferred_with_callback(move || node, move |r| sink.borrow_mut().push(r))
    };

    let body = vec![
        Node::var_decl(
            VariableKind::Let,
            "total",
            Some(track(Node::binary(
                Node::id("price"),
                BinaryOp::Multiply,
                Node::id("count"),
            ))),
        ),
        Node::if_stmt(
            track(Node::logical(
                Node::id("discount"),
                LogicalOp::And,
                Node::unary(UnaryOp::LogicalNot, Node::id("expired")),
            )),
            Node::block(vec![Node::expr_stmt(track(Node::assign_op(
                Node::id("total"),
                AssignmentOp::Multiply,
                Node::number(0.9),
            )))]),
            None,
        ),
        Node::ret(Some(track(Node::string("done: é")))),
    ];

    let mut generator = Generator::new();
    generator.write(Node::func_decl("checkout", vec![], body));
    let output = generator.output().to_string();

    let texts: Vec<String> = ranges
        .borrow()
        .iter()
        .map(|r| slice_line(&output, *r).to_string())
        .collect();
    assert_eq!(
        texts,
        vec![
            "price * count",
            "discount && !expired",
            "total *= 0.9",
            "\"done: é\"",
        ]
    );
}

#[test]
fn test_options_from_json() {
    let options = GeneratorOptions::from_json(r#"{"indent": "\t", "lineEnd": "\r\n"}"#)
        .expect("valid options");
    let mut generator = Generator::with_options(options);
    generator.write(Node::while_stmt(
        Node::boolean(true),
        Node::block(vec![Node::expr_stmt(Node::call(Node::id("tick"), vec![]))]),
    ));
    assert_eq!(generator.output(), "while (true) {\r\n\ttick();\r\n}\r\n");
}

#[test]
fn test_invalid_options_are_rejected() {
    let err = GeneratorOptions::from_json(r#"{"lineEnd": "\r"}"#).expect_err("bad line end");
    assert!(format!("{err:#}").contains("lineEnd"));
    assert!(GeneratorOptions::from_json("not json").is_err());
}

#[test]
fn test_init_tracing_is_idempotent() {
    jsgen::tracing_config::init_tracing();
    jsgen::tracing_config::init_tracing();
    assert_eq!(Generator::emit_to_string(Node::id("ok")), "ok");
}

#[test]
fn test_module_aliases() {
    let kind = jsgen::ast::NodeKind::Identifier;
    assert!(!kind.is_statement());
    let location = jsgen::common::SourceLocation::START;
    assert_eq!(location, SourceLocation::new(1, 1));
    let generator = jsgen::emitter::Generator::default();
    assert_eq!(generator.output(), "");
}
