use std::iter::Peekable;

use crate::{
    ast::{Expr, RepeatMode, Statement},
    error::ParseError,
    interpreter::{
        parser::{
            block::{parse_block, parse_body},
            core::{ParseResult, parse_expression},
            utils::{enter, expect_statement_end, parse_identifier, parse_text, peek_token},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment, recognized by an identifier followed by `=`.
/// - `show <expression>`.
/// - `ask "<prompt>" <name>`.
/// - `if` with optional `else` / `else if` branches.
/// - `repeat <count>` or `repeat until <condition>`.
/// - a stray indented block.
/// - an expression used as a statement.
///
/// Every form ends with a line break; a simple statement may instead end in
/// front of the `else` of an enclosing inline `if`. Errors inside nested blocks are
/// recorded into `errors` and recovered from locally; an error in the
/// statement itself is returned.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the statement.
/// - `errors`: Sink for errors recovered inside nested blocks.
/// - `depth`: How many constructs enclose the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              errors: &mut Vec<ParseError>,
                              depth: usize)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_assignment(tokens, depth)? {
        return Ok(statement);
    }

    let token = peek_token(tokens);
    let line = token.line;

    match token.kind {
        TokenKind::Show => {
            tokens.next();
            parse_show(tokens, line, depth)
        },
        TokenKind::Ask => {
            tokens.next();
            parse_ask(tokens, line)
        },
        TokenKind::If => {
            tokens.next();
            parse_if(tokens, errors, line, depth)
        },
        TokenKind::Repeat => {
            tokens.next();
            parse_repeat(tokens, errors, line, depth)
        },
        TokenKind::BlockStart => {
            tokens.next();
            let depth = enter(tokens, depth)?;
            parse_block(tokens, errors, line, depth)
        },
        _ => parse_expression_statement(tokens, line, depth),
    }
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a two-token lookahead on a cloned iterator: only
/// when the next token is an identifier and the one after it is `=` is any
/// input consumed.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize)
                           -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let is_assignment = matches!(lookahead.next(), Some(Token { kind: TokenKind::Identifier, .. }))
                        && matches!(lookahead.peek(), Some(Token { kind: TokenKind::Equals, .. }));
    if !is_assignment {
        return Ok(None);
    }

    let (name, line) = parse_identifier(tokens, "variable name")?;
    tokens.next();

    let value = parse_expression(tokens, depth)?;
    expect_statement_end(tokens, "assignment")?;

    Ok(Some(Statement::Assignment { name, value, line }))
}

/// Parses the rest of a `show` statement.
///
/// Grammar: `show := "show" expression LINE_BREAK`
fn parse_show<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    expect_statement_end(tokens, "show value")?;

    Ok(Statement::Show { expr, line })
}

/// Parses the rest of an `ask` statement.
///
/// `ask "What is your name?" name` asks the host and stores the answer, so it
/// is produced as an assignment whose value is an [`Expr::Ask`].
///
/// Grammar: `ask := "ask" TEXT IDENTIFIER LINE_BREAK`
fn parse_ask<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let prompt = parse_text(tokens, "prompt text after 'ask'")?;
    let (name, _) = parse_identifier(tokens, "variable name after the prompt")?;
    expect_statement_end(tokens, "ask statement")?;

    Ok(Statement::Assignment { name,
                               value: Expr::Ask { prompt, line },
                               line })
}

/// Parses an `if` statement with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if <condition>
///         <block>
///     else if <condition>
///         <block>
///     else
///         <block>
/// ```
/// Each header may end with `:`, which also allows a single statement on the
/// same line. Nested `else if` constructs are parsed recursively. An inline
/// body may be followed by `else` on the same line:
/// ```text
///     if <condition>: <statement> else: <statement>
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `errors`: Sink for errors recovered inside the branches.
/// - `line`: Line number of the `if` token.
/// - `depth`: How many constructs enclose the statement.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                       errors: &mut Vec<ParseError>,
                       line: usize,
                       depth: usize)
                       -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let then_branch = parse_body(tokens, errors, "if condition", line, depth)?;

    let else_branch = match tokens.next_if(|token| token.kind == TokenKind::Else) {
        Some(else_token) => {
            if let Some(if_token) = tokens.next_if(|token| token.kind == TokenKind::If) {
                let depth = enter(tokens, depth)?;
                Some(Box::new(parse_if(tokens, errors, if_token.line, depth)?))
            } else {
                Some(Box::new(parse_body(tokens, errors, "'else'", else_token.line, depth)?))
            }
        },
        None => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `repeat` statement.
///
/// Syntax:
/// ```text
///     repeat <count>
///         <block>
///     repeat until <condition>
///         <block>
/// ```
/// Exactly one of the two forms is produced.
pub fn parse_repeat<'a, I>(tokens: &mut Peekable<I>,
                           errors: &mut Vec<ParseError>,
                           line: usize,
                           depth: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let (mode, context) = if tokens.next_if(|token| token.kind == TokenKind::Until)
                                   .is_some()
    {
        (RepeatMode::Until(parse_expression(tokens, depth)?), "repeat condition")
    } else {
        (RepeatMode::Count(parse_expression(tokens, depth)?), "repeat count")
    };

    let body = parse_body(tokens, errors, context, line, depth)?;

    Ok(Statement::Repeat { mode,
                           body: Box::new(body),
                           line })
}

/// Parses an expression used as a statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize,
                                     depth: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, depth)?;
    expect_statement_end(tokens, "expression")?;

    Ok(Statement::Expression { expr, line })
}
