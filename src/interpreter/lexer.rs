use logos::Logos;

use crate::{
    error::LexError,
    interpreter::token::{Literal, Token, TokenKind},
};

/// Width a tab contributes to a line's indentation.
pub const TAB_WIDTH: usize = 4;

/// Converts source text into a token stream.
///
/// The source is processed line by line. For every line that holds code, the
/// leading indentation is compared against the stack of open indentation
/// levels to emit `BlockStart`/`BlockEnd` tokens, then the rest of the line is
/// scanned with the rules of [`TokenKind`] and a `LineBreak` closes it. Blank
/// lines and comment-only lines produce nothing but still count towards line
/// numbers. At the end of input every open level is closed and a single `Eof`
/// token is appended.
///
/// # Errors
/// - `LexError::UnexpectedCharacter` for characters no rule accepts.
/// - `LexError::InconsistentIndentation` for a dedent that does not return to
///   an enclosing level.
///
/// # Example
/// ```
/// use kodme::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("a = 10").unwrap()
///                                               .iter()
///                                               .map(|t| t.kind)
///                                               .collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::Equals,
///                 TokenKind::Number,
///                 TokenKind::LineBreak,
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut indent_stack = vec![0];
    let mut line_count = 0;

    for (index, raw_line) in source.split('\n').enumerate() {
        let line = index + 1;
        let text = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        line_count = line;

        let (width, offset) = measure_indent(text);
        let content = &text[offset..];
        // comment-only lines never open or close a block
        if content.trim().is_empty() || content.starts_with('#') {
            continue;
        }

        handle_indentation(&mut tokens, &mut indent_stack, width, line)?;
        scan_line(&mut tokens, content, offset, line)?;

        tokens.push(Token::bare(TokenKind::LineBreak, text.len(), text.len() + 1, line));
    }

    while indent_stack.len() > 1 {
        indent_stack.pop();
        tokens.push(Token::bare(TokenKind::BlockEnd, 0, 0, line_count));
    }
    tokens.push(Token::bare(TokenKind::Eof, 0, 0, line_count));

    Ok(tokens)
}

/// Measures the leading indentation of a line.
///
/// Spaces count as one column and tabs as [`TAB_WIDTH`].
///
/// # Returns
/// `(width, offset)`: the indentation width and the byte offset of the first
/// character after it.
///
/// # Example
/// ```
/// use kodme::interpreter::lexer::measure_indent;
///
/// assert_eq!(measure_indent("    show 1"), (4, 4));
/// assert_eq!(measure_indent("\t show 1"), (5, 2));
/// assert_eq!(measure_indent("show 1"), (0, 0));
/// ```
#[must_use]
pub fn measure_indent(line: &str) -> (usize, usize) {
    let mut width = 0;
    let mut offset = 0;

    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
        offset += 1;
    }

    (width, offset)
}

/// Compares a line's indentation with the open levels and emits layout
/// tokens.
///
/// A deeper line opens one level. A shallower line closes levels until the
/// top of the stack equals its width; landing between two levels is an error.
fn handle_indentation(tokens: &mut Vec<Token>,
                      indent_stack: &mut Vec<usize>,
                      width: usize,
                      line: usize)
                      -> Result<(), LexError> {
    let current = indent_stack.last().copied().unwrap_or(0);

    if width > current {
        indent_stack.push(width);
        tokens.push(Token::bare(TokenKind::BlockStart, 0, width, line));
    } else if width < current {
        while indent_stack.last().is_some_and(|&top| width < top) {
            indent_stack.pop();
            tokens.push(Token::bare(TokenKind::BlockEnd, 0, 0, line));
        }
        if indent_stack.last().copied().unwrap_or(0) != width {
            return Err(LexError::InconsistentIndentation { width, line });
        }
    }

    Ok(())
}

/// Scans the code of a single line and appends its tokens.
///
/// `offset` is the byte length of the indentation that was stripped from the
/// line; it is added to every span so columns refer to the full line.
fn scan_line(tokens: &mut Vec<Token>,
             content: &str,
             offset: usize,
             line: usize)
             -> Result<(), LexError> {
    let mut lexer = TokenKind::lexer(content);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        let Ok(kind) = result else {
            let character = slice.chars().next().unwrap_or_default();
            return Err(LexError::UnexpectedCharacter { character,
                                                       line,
                                                       column: offset + span.start });
        };

        tokens.push(Token::new(kind,
                               literal_for(kind, slice),
                               offset + span.start,
                               offset + span.end,
                               line));
    }

    Ok(())
}

/// Computes the literal value a token of `kind` carries.
///
/// Numbers are parsed, text is unquoted, `true`/`false` become booleans and
/// identifiers keep their name. Everything else carries [`Literal::None`].
fn literal_for(kind: TokenKind, slice: &str) -> Literal {
    match kind {
        TokenKind::Number => slice.parse().map_or(Literal::None, Literal::Number),
        TokenKind::Text => Literal::Text(slice[1..slice.len() - 1].to_string()),
        TokenKind::True => Literal::Boolean(true),
        TokenKind::False => Literal::Boolean(false),
        TokenKind::Identifier => Literal::Identifier(slice.to_string()),
        _ => Literal::None,
    }
}
