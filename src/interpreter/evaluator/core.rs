use crate::{
    ast::{Expr, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        host::Host,
        lexer::tokenize,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many statements and expressions may be open inside each other.
///
/// Parsed programs stay far below this. It bounds syntax trees built by hand,
/// which are reported as `NestingTooDeep` instead of exhausting the stack.
pub const MAX_EVAL_DEPTH: usize = 256;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack with every
/// variable binding, and the host that receives output and answers prompts.
///
/// ## Usage
///
/// A `Context` can be reused across several runs. The root scope persists,
/// so a variable assigned by one run is visible to the next.
///
/// ```
/// use kodme::interpreter::{evaluator::core::Context, host::ScriptedHost};
///
/// let mut context = Context::new(ScriptedHost::default());
/// context.run("greeting = \"Hello\"").unwrap();
/// context.run("show greeting + \", world\"").unwrap();
///
/// assert_eq!(context.host().output, vec!["Hello, world"]);
/// ```
pub struct Context<H: Host> {
    environment: Environment,
    host:        H,
    depth:       usize,
}

impl<H: Host> Context<H> {
    /// Creates a new evaluation context with an empty root scope.
    pub fn new(host: H) -> Self {
        Self { environment: Environment::new(),
               host,
               depth: 0 }
    }

    /// Returns the host this context talks to.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host this context talks to, mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the context and hands back its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Returns the variable scopes of this context.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the variable scopes mutably, for embedders that seed variables.
    pub const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Tokenizes, parses and executes a program.
    ///
    /// Nothing is executed when the source has a syntax error: every error
    /// found by the parser is returned together instead.
    ///
    /// # Errors
    /// - `Error::Lex` when the source cannot be tokenized.
    /// - `Error::Parse` with every recorded syntax error.
    /// - `Error::Runtime` with the first runtime error, which stops the run.
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let tokens = tokenize(source)?;
        let statements = parse_program(&tokens).into_result()?;
        self.interpret(&statements)?;
        Ok(())
    }

    /// Executes statements in order, stopping at the first runtime error.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{evaluator::core::Context, host::ScriptedHost};
    ///
    /// let statements = kodme::parse("show 1\nshow missing\nshow 3").unwrap();
    /// let mut context = Context::new(ScriptedHost::default());
    ///
    /// assert!(context.interpret(&statements).is_err());
    /// assert_eq!(context.host().output, vec!["1"]);
    /// ```
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.execute(statement))
    }

    /// Executes a single statement.
    ///
    /// Dispatches on the statement variant. Statements never produce a
    /// value; their effects are variable bindings and host calls.
    ///
    /// # Errors
    /// Any runtime error raised by the statement, or `NestingTooDeep` when
    /// more than [`MAX_EVAL_DEPTH`] statements and expressions are open.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        self.descend(statement.line_number(),
                     |context| context.execute_statement(statement))
    }

    fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Block { statements, .. } => self.execute_block(statements),
            Statement::Expression { expr, .. } => self.eval(expr).map(drop),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.execute_if(condition, then_branch, else_branch.as_deref()),
            Statement::Repeat { mode, body, line } => self.execute_repeat(mode, body, *line),
            Statement::Show { expr, .. } => self.execute_show(expr),
            Statement::VariableDeclaration { name, initializer, .. } => {
                self.execute_declaration(name, initializer.as_ref())
            },
            Statement::Assignment { name, value, .. } => self.execute_assignment(name, value),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right. `and` and `or` evaluate their
    /// right side only when the left side does not decide the result.
    ///
    /// # Example
    /// ```
    /// use kodme::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, host::ScriptedHost, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new(ScriptedHost::default());
    /// let expr = Expr::Binary { left:  Box::new(Expr::Literal { value: 6.0.into(),
    ///                                                           line:  1, }),
    ///                           op:    BinaryOperator::Mul,
    ///                           right: Box::new(Expr::Literal { value: 7.0.into(),
    ///                                                           line:  1, }),
    ///                           line:  1, };
    ///
    /// assert_eq!(context.eval(&expr).unwrap(), Value::Number(42.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.descend(expr.line_number(), |context| context.eval_expr(expr))
    }

    fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Unary { op, expr, line } => {
                let value = self.eval(expr)?;
                eval_unary(*op, &value, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Ask { prompt, .. } => Ok(Value::Text(self.host.ask(prompt))),
        }
    }

    /// Looks up a variable in the nearest scope that binds it.
    ///
    /// # Errors
    /// `UnknownVariable` with the name and line when no scope binds it.
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Runs `body` inside a fresh innermost scope.
    ///
    /// The scope is popped on every exit path, so an error inside the body
    /// leaves the scope stack as it was before the call.
    pub(crate) fn scoped<T>(&mut self,
                            body: impl FnOnce(&mut Self) -> EvalResult<T>)
                            -> EvalResult<T> {
        self.environment.push_scope();
        let result = body(self);
        self.environment.pop_scope();
        result
    }

    /// Runs `body` one nesting level deeper.
    ///
    /// # Errors
    /// `NestingTooDeep` at `line` once [`MAX_EVAL_DEPTH`] levels are open.
    fn descend<T>(&mut self,
                  line: usize,
                  body: impl FnOnce(&mut Self) -> EvalResult<T>)
                  -> EvalResult<T> {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::NestingTooDeep { line });
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }
}
