use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A stack of variable scopes.
///
/// Index 0 is the root scope, created with the environment and never removed.
/// Blocks push a scope on entry and pop it on exit. Lookups and assignments
/// walk from the innermost scope toward the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    scope_stack: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()] }
    }

    /// Returns the number of active scopes, the root included.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.depth(), 1);
    ///
    /// env.push_scope();
    /// assert_eq!(env.depth(), 2);
    /// ```
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Pushes a new, empty innermost scope.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
    }

    /// Removes the innermost scope and every binding in it.
    ///
    /// The root scope is never removed.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.push_scope();
    /// env.pop_scope();
    /// env.pop_scope();
    ///
    /// assert_eq!(env.depth(), 1);
    /// ```
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    /// Retrieves a variable from the nearest scope that binds it.
    ///
    /// Returns `None` if the name is not bound in any active scope.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("a", Value::Number(1.0));
    /// env.push_scope();
    ///
    /// assert_eq!(env.get("a"), Some(&Value::Number(1.0)));
    /// assert_eq!(env.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
    }

    /// Binds a variable in the innermost scope.
    ///
    /// An existing binding in the same scope is replaced; bindings of the same
    /// name in outer scopes are shadowed until this scope is popped.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Number(1.0));
    /// env.push_scope();
    /// env.define("x", Value::Number(2.0));
    /// assert_eq!(env.get("x"), Some(&Value::Number(2.0)));
    ///
    /// env.pop_scope();
    /// assert_eq!(env.get("x"), Some(&Value::Number(1.0)));
    /// ```
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        } else {
            self.scope_stack.push(HashMap::from([(name.to_string(), value)]));
        }
    }

    /// Assigns a value to the nearest scope containing the variable.
    ///
    /// Search proceeds from the innermost scope outward. If the variable is not
    /// bound anywhere, it is defined in the innermost scope.
    ///
    /// # Example
    /// ```
    /// use kodme::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("total", Value::Number(0.0));
    ///
    /// env.push_scope();
    /// env.assign_nearest("total", Value::Number(5.0));
    /// env.assign_nearest("step", Value::Number(1.0));
    /// env.pop_scope();
    ///
    /// assert_eq!(env.get("total"), Some(&Value::Number(5.0)));
    /// assert_eq!(env.get("step"), None);
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) {
        for scope in self.scope_stack.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return;
            }
        }
        self.define(name, value);
    }
}
