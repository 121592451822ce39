use logos::Logos;

/// The kind of a lexical token.
///
/// The rules attached to each variant are applied by `logos` to the content of
/// a single line, after its indentation has been measured. The layout tokens
/// (`LineBreak`, `BlockStart`, `BlockEnd`, `Eof`) carry no rule; the lexer
/// synthesizes them.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,

    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,

    /// `show`
    #[token("show")]
    Show,
    /// `ask`
    #[token("ask")]
    Ask,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `until`
    #[token("until")]
    Until,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,

    /// Double-quoted text such as `"Hello"`. No escape sequences.
    #[regex(r#""[^"\n\r]*""#, allow_greedy = true)]
    Text,
    /// Numeric literals such as `42` or `2.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// Identifier tokens; variable names such as `count` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    /// End of a non-blank source line.
    LineBreak,
    /// The following lines are indented deeper than the previous one.
    BlockStart,
    /// An indentation level was closed.
    BlockEnd,
    /// End of the token stream.
    Eof,

    /// Spaces, tabs and feeds between tokens.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

impl TokenKind {
    /// Returns `true` for the keywords a statement can begin with.
    ///
    /// The parser resynchronizes on these after a syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self, Self::If | Self::Show | Self::Ask | Self::Repeat)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Comment => "comment",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::GreaterEqual => "'>='",
            Self::LessEqual => "'<='",
            Self::Equals => "'='",
            Self::Greater => "'>'",
            Self::Less => "'<'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Show => "'show'",
            Self::Ask => "'ask'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::Repeat => "'repeat'",
            Self::Until => "'until'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Text => "text",
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::LineBreak => "end of line",
            Self::BlockStart => "indented block",
            Self::BlockEnd => "end of block",
            Self::Eof => "end of input",
            Self::Ignored => "whitespace",
        };
        write!(f, "{text}")
    }
}

/// The literal value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Parsed value of a `Number` token.
    Number(f64),
    /// Unquoted content of a `Text` token.
    Text(String),
    /// Value of a `true` or `false` token.
    Boolean(bool),
    /// Name of an `Identifier` token.
    Identifier(String),
    /// Operators, other keywords and layout tokens.
    None,
}

/// A token together with its literal value and source position.
///
/// Lines are 1-based. Columns are 0-based byte offsets into the line;
/// `end_column` is exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:         TokenKind,
    /// The value the token carries, if any.
    pub literal:      Literal,
    /// First column covered by the token.
    pub start_column: usize,
    /// Column just past the token.
    pub end_column:   usize,
    /// Source line of the token.
    pub line:         usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind,
                     literal: Literal,
                     start_column: usize,
                     end_column: usize,
                     line: usize)
                     -> Self {
        Self { kind,
               literal,
               start_column,
               end_column,
               line }
    }

    /// Creates a token that carries no literal value.
    #[must_use]
    pub const fn bare(kind: TokenKind, start_column: usize, end_column: usize, line: usize) -> Self {
        Self::new(kind, Literal::None, start_column, end_column, line)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Literal::Number(n) => write!(f, "number {n}"),
            Literal::Text(s) => write!(f, "text \"{s}\""),
            Literal::Identifier(name) => write!(f, "identifier '{name}'"),
            Literal::Boolean(_) | Literal::None => write!(f, "{}", self.kind),
        }
    }
}
