use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, parse_expression},
            utils::{enter, parse_text, peek_token},
        },
        token::{Literal, Token, TokenKind},
    },
};

/// Parses a unary expression.
///
/// Supports prefix negation `-`. Unary operators are right-associative, so
/// `--x` is parsed as `-( -x )`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Minus) {
        let depth = enter(tokens, depth)?;
        let expr = parse_unary(tokens, depth)?;
        return Ok(Expr::Unary { op:   UnaryOperator::Negate,
                                expr: Box::new(expr),
                                line: token.line, });
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | TEXT | "true" | "false"
///              | IDENTIFIER
///              | "(" expression ")"
///              | "ask" TEXT
/// ```
/// The offending token is left in place on error so that recovery starts from
/// it.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = peek_token(tokens);
    let line = token.line;

    match (token.kind, &token.literal) {
        (TokenKind::Number, Literal::Number(n)) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Number(*n),
                               line })
        },
        (TokenKind::Text, Literal::Text(text)) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Text(text.clone()),
                               line })
        },
        (TokenKind::True | TokenKind::False, Literal::Boolean(b)) => {
            tokens.next();
            Ok(Expr::Literal { value: LiteralValue::Boolean(*b),
                               line })
        },
        (TokenKind::Identifier, Literal::Identifier(name)) => {
            tokens.next();
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        (TokenKind::LParen, _) => {
            tokens.next();
            let depth = enter(tokens, depth)?;
            parse_grouping(tokens, line, depth)
        },
        (TokenKind::Ask, _) => {
            tokens.next();
            let prompt = parse_text(tokens, "prompt text after 'ask'")?;
            Ok(Expr::Ask { prompt, line })
        },
        _ => Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                  line }),
    }
}

/// Parses the inside of a parenthesized expression.
///
/// The opening `(` has already been consumed.
///
/// # Errors
/// `ExpectedClosingParen` when the expression is not followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         line: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, depth)?;

    if tokens.next_if(|token| token.kind == TokenKind::RParen)
             .is_none()
    {
        let line = tokens.peek().map_or(line, |token| token.line);
        return Err(ParseError::ExpectedClosingParen { line });
    }

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line })
}
