use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::{MAX_NESTING, ParseResult},
        token::{Literal, Token, TokenKind},
    },
};

/// Stands in for the end of a stream that was not closed by an `Eof` token.
static UNTERMINATED_END: Token = Token::bare(TokenKind::Eof, 0, 0, 0);

/// Returns the next token without consuming it.
///
/// [`parse_program`](crate::interpreter::parser::core::parse_program) always
/// parses a stream that ends in an `Eof` token, and no rule consumes `Eof`, so
/// the next token exists there. A stream that runs dry anyway reads as end of
/// input.
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().copied().unwrap_or(&UNTERMINATED_END)
}

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Token>
{
    peek_token(tokens).kind
}

/// Builds the error for a missing token, describing what was found instead.
///
/// Does not consume anything, so recovery starts at the offending token.
pub(in crate::interpreter::parser) fn unexpected<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseError
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens);
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.to_string(),
                                  line:     token.line, }
}

/// Goes one nesting level deeper.
///
/// Every construct that makes the parser recurse (an indented body, an
/// `else if`, a parenthesis, a prefix `-`, another operand in an operator
/// chain) calls this first. It is called after the construct's opening token
/// was consumed, so recovery always makes progress.
///
/// # Errors
/// `NestingTooDeep` once [`MAX_NESTING`] levels are open.
pub(in crate::interpreter::parser) fn enter<'a, I>(tokens: &mut Peekable<I>,
                                                   depth: usize)
                                                   -> ParseResult<usize>
    where I: Iterator<Item = &'a Token>
{
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { line: peek_token(tokens).line });
    }
    Ok(depth + 1)
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns `UnexpectedToken` describing `expected` otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|token| token.kind == kind) {
        Some(token) => Ok(token),
        None => Err(unexpected(tokens, expected)),
    }
}

/// Consumes the line break that ends a statement or a block header.
///
/// `context` names what the line break should follow, e.g. `"show value"`.
pub(in crate::interpreter::parser) fn expect_line_break<'a, I>(tokens: &mut Peekable<I>,
                                                               context: &str)
                                                               -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::LineBreak, &format!("end of line after {context}"))?;
    Ok(())
}

/// Ends a simple statement.
///
/// A statement ends at a line break, which is consumed, or in front of
/// `else`, which is left for the enclosing `if`. The latter lets an inline
/// `if` body share its line with the `else`:
/// ```text
///     if ready: show "go" else: show "wait"
/// ```
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>,
                                                                  context: &str)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    if peek_kind(tokens) == TokenKind::Else {
        return Ok(());
    }
    expect_line_break(tokens, context)
}

/// Parses a plain identifier and returns its name and line.
///
/// The name is the literal the lexer attached to the token.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              expected: &str)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier, expected)?;
    match &token.literal {
        Literal::Identifier(name) => Ok((name.clone(), token.line)),
        _ => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                               found:    token.to_string(),
                                               line:     token.line, }),
    }
}

/// Parses a text literal and returns its unquoted content.
///
/// # Errors
/// Returns a `ParseError` if the next token is not text.
pub(in crate::interpreter::parser) fn parse_text<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Text, expected)?;
    match &token.literal {
        Literal::Text(text) => Ok(text.clone()),
        _ => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                               found:    token.to_string(),
                                               line:     token.line, }),
    }
}
