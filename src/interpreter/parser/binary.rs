use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary, utils::enter},
        token::{Token, TokenKind},
    },
};

/// Parses logical OR expressions.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_logical_and(tokens, depth)?;
    let mut depth = depth;
    while let Some(token) = tokens.next_if(|token| token.kind == TokenKind::Or) {
        depth = enter(tokens, depth)?;
        let right = parse_logical_and(tokens, depth)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right),
                               line:  token.line, };
    }
    Ok(left)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_equality(tokens, depth)?;
    let mut depth = depth;
    while let Some(token) = tokens.next_if(|token| token.kind == TokenKind::And) {
        depth = enter(tokens, depth)?;
        let right = parse_equality(tokens, depth)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right),
                               line:  token.line, };
    }
    Ok(left)
}

/// Parses equality expressions.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_level(tokens, depth, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// The rule is: `comparison := additive ((">" | ">=" | "<" | "<=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_level(tokens, depth, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual
                 | BinaryOperator::Less
                 | BinaryOperator::LessEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_level(tokens, depth, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_binary_level(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Parses one left-associative precedence level.
///
/// Operands are parsed with `operand`; operators are taken while `accepts`
/// admits them, folding the chain to the left so `a - b - c` becomes
/// `(a - b) - c`. Every further operand nests the tree one level deeper.
fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                             depth: usize,
                             operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                             accepts: fn(BinaryOperator) -> bool)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = operand(tokens, depth)?;
    let mut depth = depth;
    while let Some((op, line)) =
        tokens.peek().and_then(|token| {
                         token_to_binary_operator(token.kind).filter(|op| accepts(*op))
                                                             .map(|op| (op, token.line))
                     })
    {
        tokens.next();
        depth = enter(tokens, depth)?;
        let right = operand(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including the
/// short-circuiting `and` and `or`.
///
/// # Example
/// ```
/// use kodme::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LessEqual),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}
