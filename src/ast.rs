/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, text and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42` or `2.5`.
    Number(f64),
    /// A double-quoted text literal, stored without its quotes.
    Text(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant owns its operands and records the source line it starts on,
/// which runtime errors report.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A short-circuiting `and`/`or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A prefix operation.
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Asks the host for a line of input.
    Ask {
        /// Text shown to the user.
        prompt: String,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use kodme::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. }
            | Self::Grouping { line, .. }
            | Self::Literal { line, .. }
            | Self::Logical { line, .. }
            | Self::Unary { line, .. }
            | Self::Variable { line, .. }
            | Self::Ask { line, .. } => *line,
        }
    }
}

/// Binary operators, all evaluated after both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`, numeric addition or text concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}

/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    /// `and`
    And,
    /// `or`
    Or,
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negate,
}

/// Which of the two loop forms a `repeat` statement uses.
#[derive(Debug, Clone, PartialEq)]
pub enum RepeatMode {
    /// `repeat <count>`: the count is evaluated once.
    Count(Expr),
    /// `repeat until <condition>`: checked before every iteration.
    Until(Expr),
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An indented block with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the block's header.
        line:       usize,
    },
    /// An expression evaluated for its effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if` with an optional `else` branch. `else if` nests another `If`.
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A counted or conditional loop.
    Repeat {
        /// The loop form.
        mode: RepeatMode,
        /// The loop body.
        body: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// `show <expr>`: sends the rendered value to the host.
    Show {
        /// The value to show.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// Binds a name in the innermost scope, shadowing outer bindings.
    VariableDeclaration {
        /// Name of the variable.
        name:        String,
        /// Initial value; the variable starts out absent without one.
        initializer: Option<Expr>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `name = <expr>`: updates the nearest binding or creates one.
    Assignment {
        /// Name of the variable.
        name:  String,
        /// The assigned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Block { line, .. }
            | Self::Expression { line, .. }
            | Self::If { line, .. }
            | Self::Repeat { line, .. }
            | Self::Show { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}
