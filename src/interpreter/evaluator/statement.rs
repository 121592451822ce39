use crate::{
    ast::{Expr, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        host::Host,
        value::core::Value,
    },
};

impl<H: Host> Context<H> {
    /// Executes a block in its own scope.
    ///
    /// Variables first defined inside the block disappear when it ends, while
    /// assignments to variables of enclosing scopes stay visible. The scope is
    /// removed even when a statement fails.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{evaluator::core::Context, host::ScriptedHost};
    ///
    /// let mut context = Context::new(ScriptedHost::default());
    /// context.run("total = 1\nif true\n    total = 2\n    inner = 3").unwrap();
    ///
    /// assert!(context.environment().get("total").is_some());
    /// assert!(context.environment().get("inner").is_none());
    /// assert_eq!(context.environment().depth(), 1);
    /// ```
    pub fn execute_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.scoped(|context| context.interpret(statements))
    }

    /// Executes the branch selected by the truthiness of `condition`.
    pub fn execute_if(&mut self,
                      condition: &Expr,
                      then_branch: &Statement,
                      else_branch: Option<&Statement>)
                      -> EvalResult<()> {
        if self.eval(condition)?.is_truthy() {
            self.execute(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    /// Renders the value of `expr` and hands it to the host.
    pub fn execute_show(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.host_mut().show(&value.to_string());
        Ok(())
    }

    /// Binds `name` in the innermost scope, shadowing any outer binding.
    ///
    /// Without an initializer the variable holds `Absent`.
    pub fn execute_declaration(&mut self,
                               name: &str,
                               initializer: Option<&Expr>)
                               -> EvalResult<()> {
        let value = match initializer {
            Some(expr) => self.eval(expr)?,
            None => Value::Absent,
        };
        self.environment_mut().define(name, value);
        Ok(())
    }

    /// Updates the nearest binding of `name`, defining it in the innermost
    /// scope when no binding exists yet.
    pub fn execute_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<()> {
        let value = self.eval(value)?;
        self.environment_mut().assign_nearest(name, value);
        Ok(())
    }
}
