use pretty_assertions::assert_eq;

use clauf_diagnostic::ErrorCode;
use clauf_ir::Span;

use super::parse_source;

#[test]
fn test_empty_translation_unit() {
    let parsed = parse_source("  // nothing here\n");
    assert_eq!(parsed.diagnostics, vec![]);
    assert_eq!(parsed.dump(), "TranslationUnit\n");
}

#[test]
fn test_assert_end_to_end() {
    let parsed = parse_source("int main(){ __clauf_assert(1+2*3 == 7); }");
    assert_eq!(parsed.diagnostics, vec![]);
    assert!(!parsed.errored);
    assert_eq!(
        parsed.dump(),
        "\
TranslationUnit
  FunctionDecl #0 main: int()
    BlockStmt
      BuiltinStmt __clauf_assert
        Binary ==
          Binary +
            IntegerConstant 1
            Binary *
              IntegerConstant 2
              IntegerConstant 3
          IntegerConstant 7
"
    );
}

#[test]
fn test_function_span_covers_definition() {
    let parsed = parse_source("int main() { }\n");
    let arena = &parsed.output.arena;
    let decls = arena.get_decl_list(parsed.unit().declarations);
    assert_eq!(decls.len(), 1);
    assert_eq!(arena.get_decl(decls[0]).span, Span::new(0, 14));
}

#[test]
fn test_scope_resets_between_functions() {
    let parsed = parse_source("int f() { int x; } int g() { x; int x; }");
    assert_eq!(parsed.messages(), vec!["unknown identifier 'x'"]);
    assert_eq!(
        parsed.dump(),
        "\
TranslationUnit
  FunctionDecl #1 f: int()
    BlockStmt
      DeclStmt
        VariableDecl #0 x: int
  FunctionDecl #3 g: int()
    BlockStmt
      ExprStmt
        Identifier x -> <unresolved>
      DeclStmt
        VariableDecl #2 x: int
"
    );
}

#[test]
fn test_unknown_identifier_does_not_stop_later_functions() {
    let parsed = parse_source("int f(){ __clauf_print y; } int main(){ int z; z = 1; }");
    assert!(parsed.errored);
    assert_eq!(parsed.messages(), vec!["unknown identifier 'y'"]);
    assert_eq!(parsed.diagnostics[0].primary_span(), Some(Span::new(23, 24)));
    assert_eq!(
        parsed.dump(),
        "\
TranslationUnit
  FunctionDecl #0 f: int()
    BlockStmt
      BuiltinStmt __clauf_print
        Identifier y -> <unresolved>
  FunctionDecl #2 main: int()
    BlockStmt
      DeclStmt
        VariableDecl #1 z: int
      ExprStmt
        Assignment =
          Identifier z -> #1
          IntegerConstant 1
"
    );
}

#[test]
fn test_definition_without_function_declarator() {
    let parsed = parse_source("int x { y; } int main() { }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E3003, ErrorCode::E2001]);
    assert_eq!(parsed.messages()[0], "'x' is not declared as a function");
    assert_eq!(
        parsed.dump(),
        "\
TranslationUnit
  FunctionDecl #0 main: int()
    BlockStmt
"
    );
}

#[test]
fn test_function_returning_function_definition() {
    let parsed = parse_source("int f()() { }");
    assert_eq!(parsed.codes(), vec![ErrorCode::E3002]);
    assert_eq!(parsed.diagnostics[0].primary_span(), Some(Span::new(4, 9)));
    assert_eq!(parsed.dump(), "TranslationUnit\n");
}

#[test]
fn test_global_variable_is_rejected() {
    let parsed = parse_source("int x;");
    assert!(parsed.output.unit.is_none());
    assert_eq!(parsed.codes(), vec![ErrorCode::E3003, ErrorCode::E1001]);
    assert_eq!(parsed.messages()[1], "expected `{`, found `;`");
}

#[test]
fn test_parameters_are_rejected() {
    let parsed = parse_source("int fib(n) { }");
    assert!(parsed.output.unit.is_none());
    assert_eq!(parsed.messages(), vec!["expected `)`, found identifier"]);
    assert_eq!(
        parsed.diagnostics[0].notes,
        vec!["while parsing a declarator".to_string()]
    );
}

#[test]
fn test_missing_type_specifier() {
    let parsed = parse_source("main() { }");
    assert!(parsed.output.unit.is_none());
    assert_eq!(parsed.messages(), vec!["expected type specifier, found identifier"]);
    assert_eq!(
        parsed.diagnostics[0].notes,
        vec!["while parsing a function definition".to_string()]
    );
}

#[test]
fn test_parse_is_deterministic() {
    let source = "int f() { int a; a = 1 ? a : b; } int main() { int a, a; }";
    let first = parse_source(source);
    let second = parse_source(source);
    assert_eq!(first.output, second.output);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.dump(), second.dump());
}
