use kodme::{
    ast::{BinaryOperator, Expr, LiteralValue, LogicalOperator, RepeatMode, Statement, UnaryOperator},
    error::{ErrorKind, ParseError},
    interpreter::{
        lexer::tokenize,
        parser::core::{MAX_NESTING, parse_program},
        token::{Token, TokenKind},
    },
};

fn parse_ok(src: &str) -> Vec<Statement> {
    kodme::parse(src).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn parse_errors(src: &str) -> Vec<ParseError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    parse_program(&tokens).errors
}

fn num(value: f64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Number(value),
                    line }
}

fn var(name: &str, line: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr, line: usize) -> Expr {
    Expr::Binary { left: Box::new(left),
                   op,
                   right: Box::new(right),
                   line }
}

fn show_expr(statement: &Statement) -> &Expr {
    match statement {
        Statement::Show { expr, .. } => expr,
        other => panic!("Expected a show statement, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statements = parse_ok("show 1 + 2 * 3");

    assert_eq!(statements,
               vec![Statement::Show { expr: binary(num(1.0, 1),
                                                   BinaryOperator::Add,
                                                   binary(num(2.0, 1),
                                                          BinaryOperator::Mul,
                                                          num(3.0, 1),
                                                          1),
                                                   1),
                                      line: 1, }]);
}

#[test]
fn binary_operators_are_left_associative() {
    let statements = parse_ok("show a - b - c");

    assert_eq!(show_expr(&statements[0]),
               &binary(binary(var("a", 1), BinaryOperator::Sub, var("b", 1), 1),
                       BinaryOperator::Sub,
                       var("c", 1),
                       1));
}

#[test]
fn grouping_overrides_precedence() {
    let statements = parse_ok("show (1 + 2) * 3");

    let Expr::Binary { left, op, .. } = show_expr(&statements[0]) else {
        panic!("Expected a binary expression");
    };
    assert_eq!(*op, BinaryOperator::Mul);
    assert!(matches!(**left, Expr::Grouping { .. }));
}

#[test]
fn logical_operators_have_lowest_precedence() {
    let statements = parse_ok("show a == 1 or b and c > 2");

    let Expr::Logical { left, op, right, .. } = show_expr(&statements[0]) else {
        panic!("Expected a logical expression");
    };
    assert_eq!(*op, LogicalOperator::Or);
    assert!(matches!(**left, Expr::Binary { op: BinaryOperator::Equal, .. }));
    assert!(matches!(**right, Expr::Logical { op: LogicalOperator::And, .. }));
}

#[test]
fn unary_minus_is_right_recursive() {
    let statements = parse_ok("show --5");

    assert_eq!(show_expr(&statements[0]),
               &Expr::Unary { op:   UnaryOperator::Negate,
                              expr: Box::new(Expr::Unary { op:   UnaryOperator::Negate,
                                                           expr: Box::new(num(5.0, 1)),
                                                           line: 1, }),
                              line: 1, });
}

#[test]
fn identifier_followed_by_equals_is_an_assignment() {
    let statements = parse_ok("total = total + 1");

    assert_eq!(statements,
               vec![Statement::Assignment { name:  "total".to_string(),
                                            value: binary(var("total", 1),
                                                          BinaryOperator::Add,
                                                          num(1.0, 1),
                                                          1),
                                            line:  1, }]);
}

#[test]
fn bare_expression_is_a_statement() {
    let statements = parse_ok("x == 1");

    assert!(matches!(statements[0], Statement::Expression { line: 1, .. }));
}

#[test]
fn ask_statement_assigns_the_answer() {
    let statements = parse_ok("ask \"Your name?\" name");

    assert_eq!(statements,
               vec![Statement::Assignment { name:  "name".to_string(),
                                            value: Expr::Ask { prompt: "Your name?".to_string(),
                                                               line:   1, },
                                            line:  1, }]);
}

#[test]
fn ask_can_be_used_inside_expressions() {
    let statements = parse_ok("show \"You said: \" + ask \"Say something\"");

    let Expr::Binary { right, .. } = show_expr(&statements[0]) else {
        panic!("Expected a binary expression");
    };
    assert!(matches!(&**right, Expr::Ask { prompt, .. } if prompt == "Say something"));
}

#[test]
fn if_with_else_if_chain() {
    let src = "if x > 1\n    show 1\nelse if x > 0\n    show 2\nelse\n    show 3";
    let statements = parse_ok(src);

    assert_eq!(statements.len(), 1);
    let Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        line: 1,
                        .. } = &statements[0]
    else {
        panic!("Expected an if statement with an else branch");
    };
    assert!(matches!(**then_branch, Statement::Block { .. }));

    let Statement::If { else_branch: Some(last),
                        line: 3,
                        .. } = &**else_branch
    else {
        panic!("Expected a nested else-if");
    };
    let Statement::Block { statements, line: 5 } = &**last else {
        panic!("Expected the final else block");
    };
    assert_eq!(statements.len(), 1);
}

#[test]
fn if_without_else() {
    let statements = parse_ok("if ready\n    show 1\nshow 2");

    assert_eq!(statements.len(), 2);
    assert!(matches!(statements[0], Statement::If { else_branch: None, .. }));
}

#[test]
fn colon_headers_allow_an_inline_statement() {
    let statements = parse_ok("if x: show 1\nelse: show 2");

    let Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        .. } = &statements[0]
    else {
        panic!("Expected an if statement");
    };
    for branch in [&**then_branch, &**else_branch] {
        let Statement::Block { statements, .. } = branch else {
            panic!("Inline bodies are wrapped in a block");
        };
        assert!(matches!(statements[..], [Statement::Show { .. }]));
    }
}

#[test]
fn inline_bodies_can_share_a_line_with_else() {
    let statements = parse_ok("if x: show 1 else: show 2");
    assert_eq!(statements.len(), 1);

    let Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        .. } = &statements[0]
    else {
        panic!("Expected an if statement");
    };
    for branch in [&**then_branch, &**else_branch] {
        let Statement::Block { statements, line: 1 } = branch else {
            panic!("Inline bodies are wrapped in a block");
        };
        assert!(matches!(statements[..], [Statement::Show { line: 1, .. }]));
    }

    let statements = parse_ok("if x: a = 1 else if y: ask \"?\" a else: a");
    let Statement::If { else_branch: Some(else_branch),
                        .. } = &statements[0]
    else {
        panic!("Expected an if statement");
    };
    assert!(matches!(&**else_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn else_without_if_is_still_an_error() {
    let errors = parse_errors("show 1 else: show 2");

    assert_eq!(errors,
               vec![ParseError::ExpectedExpression { found: "'else'".to_string(),
                                                     line:  1, }]);
}

#[test]
fn colon_before_an_indented_block_is_optional() {
    let with_colon = parse_ok("repeat 3:\n    show 1");
    let without_colon = parse_ok("repeat 3\n    show 1");

    assert_eq!(with_colon, without_colon);
}

#[test]
fn repeat_modes_are_exclusive() {
    let statements = parse_ok("repeat 3\n    show 1\nrepeat until done\n    show 2");

    assert!(matches!(&statements[0],
                     Statement::Repeat { mode: RepeatMode::Count(Expr::Literal { .. }), .. }));
    assert!(matches!(&statements[1],
                     Statement::Repeat { mode: RepeatMode::Until(Expr::Variable { .. }), .. }));
}

#[test]
fn nodes_record_their_lines() {
    let statements = parse_ok("\n\nshow 1\n# note\nx = 2");

    assert_eq!(statements[0].line_number(), 3);
    assert_eq!(statements[1].line_number(), 5);
}

#[test]
fn missing_closing_paren() {
    let errors = parse_errors("show (1 + 2");

    assert_eq!(errors, vec![ParseError::ExpectedClosingParen { line: 1 }]);
}

#[test]
fn missing_expression_reports_what_was_found() {
    let errors = parse_errors("show *");

    assert_eq!(errors,
               vec![ParseError::ExpectedExpression { found: "'*'".to_string(),
                                                     line:  1, }]);
}

#[test]
fn several_errors_are_reported_in_one_pass() {
    let src = "show (\nx = 1\nshow 2 3\nif\n    show 4\nshow 5";
    let tokens = tokenize(src).unwrap();
    let program = parse_program(&tokens);

    let lines: Vec<usize> = program.errors.iter().map(ParseError::line).collect();
    assert_eq!(lines, vec![1, 3, 4]);
    // `x = 1`, the orphaned block under the broken `if`, and `show 5`
    assert_eq!(program.statements.len(), 3);
}

#[test]
fn errors_inside_a_block_keep_the_block() {
    let src = "repeat 2\n    show +\n    show 1\nshow 2";
    let tokens = tokenize(src).unwrap();
    let program = parse_program(&tokens);

    assert_eq!(program.errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    let Statement::Repeat { body, .. } = &program.statements[0] else {
        panic!("Expected the repeat to survive");
    };
    assert!(matches!(&**body, Statement::Block { statements, .. } if statements.len() == 1));
}

#[test]
fn missing_block_after_header() {
    let errors = parse_errors("if x\nshow 1");

    assert_eq!(errors,
               vec![ParseError::UnexpectedToken { expected: "an indented block after if condition".into(),
                                                  found:    "'show'".to_string(),
                                                  line:     2, }]);
}

#[test]
fn parse_reports_every_error_as_one_failure() {
    let err = kodme::parse("show )\nshow (").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.line(), 1);
    assert!(err.to_string().starts_with("Error on line 1:"));
}

#[test]
fn end_of_input_errors_carry_the_last_line() {
    let errors = parse_errors("show 1\nshow 1 +");
    assert_eq!(errors,
               vec![ParseError::ExpectedExpression { found: "end of line".to_string(),
                                                     line:  2, }]);

    // a stream without its `Eof` token ends on the line of its last token
    let tokens = [Token::bare(TokenKind::LineBreak, 6, 6, 1),
                  Token::bare(TokenKind::Show, 0, 4, 2)];
    assert_eq!(parse_program(&tokens).errors,
               vec![ParseError::ExpectedExpression { found: "end of input".to_string(),
                                                     line:  2, }]);
}

#[test]
fn nesting_is_limited() {
    let allowed = format!("show {}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(parse_errors(&allowed).is_empty());

    let too_deep = format!("show {}1", "(".repeat(20_000));
    assert_eq!(parse_errors(&too_deep), vec![ParseError::NestingTooDeep { line: 1 }]);

    let negations = format!("x = {}1\nshow x", "-".repeat(MAX_NESTING + 1));
    assert_eq!(parse_errors(&negations), vec![ParseError::NestingTooDeep { line: 1 }]);

    let long_sum = vec!["1"; 1000].join(" + ");
    assert_eq!(parse_errors(&format!("show 0\nshow {long_sum}")),
               vec![ParseError::NestingTooDeep { line: 2 }]);
}

#[test]
fn deep_indentation_is_reported_not_overflowed() {
    let src: String = (0..200).map(|level| format!("{}if true\n", " ".repeat(level * 4)))
                              .chain(std::iter::once(format!("{}show 1", " ".repeat(200 * 4))))
                              .collect();
    let errors = parse_errors(&src);

    assert!(errors.iter()
                  .any(|e| matches!(e, ParseError::NestingTooDeep { .. })),
            "got {errors:?}");
}
