use crate::{
    ast::{Expr, RepeatMode, Statement},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        host::Host,
    },
    util::num::f64_to_count,
};

impl<H: Host> Context<H> {
    /// Executes a `repeat` statement in either of its two forms.
    pub fn execute_repeat(&mut self,
                          mode: &RepeatMode,
                          body: &Statement,
                          line: usize)
                          -> EvalResult<()> {
        match mode {
            RepeatMode::Count(count) => self.repeat_count(count, body, line),
            RepeatMode::Until(condition) => self.repeat_until(condition, body),
        }
    }

    /// Runs `body` a fixed number of times.
    ///
    /// The count is evaluated once, before the first iteration, and rounded
    /// down. Zero, negative and NaN counts run the body zero times.
    ///
    /// # Errors
    /// - `ExpectedNumber` when the count is not a number.
    /// - `InvalidLoopBounds` when the count is infinite or too large to be
    ///   counted exactly.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{evaluator::core::Context, host::ScriptedHost};
    ///
    /// let mut context = Context::new(ScriptedHost::default());
    /// context.run("repeat 2.9: show \"hi\"\nrepeat -1: show \"never\"").unwrap();
    ///
    /// assert_eq!(context.host().output, vec!["hi", "hi"]);
    /// ```
    pub fn repeat_count(&mut self, count: &Expr, body: &Statement, line: usize) -> EvalResult<()> {
        let count = self.eval(count)?.as_number(line)?;
        let iterations = f64_to_count(count, line)?;

        (0..iterations).try_for_each(|_| self.execute(body))
    }

    /// Runs `body` until `condition` becomes truthy.
    ///
    /// The condition is checked before every iteration, so a condition that
    /// is already truthy runs the body zero times.
    pub fn repeat_until(&mut self, condition: &Expr, body: &Statement) -> EvalResult<()> {
        while !self.eval(condition)?.is_truthy() {
            self.execute(body)?;
        }
        Ok(())
    }
}
