//! Expression Engine
//!
//! Evaluates restricted condition expressions such as:
//! - `value === 'yes'`
//! - `fields.country == 'US' && fields.age >= 18`
//! - `(checked || required) && value.includes('@')`
//!
//! Expressions are re-parsed on every call. `||` is split before `&&`, so
//! `&&` binds tighter; both short-circuit.

use crate::context::{EvaluationContext, FieldResolver, StateProvider};
use crate::operators::{ComparisonOperator, MethodName};
use crate::resolve::OperandResolver;
use crate::scan::{check_balance, split_top_level, strip_wrapping_parens};
use fieldlogic_domain::constants::DEFAULT_MAX_EXPRESSION_DEPTH;
use fieldlogic_domain::{Error, FieldValue, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

static METHOD_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?s)(.+)\.(includes|startsWith|endsWith)\((.*)\)$").expect("Invalid regex")
});

/// Evaluator for condition expressions
#[derive(Debug, Clone, Copy)]
pub struct ExpressionEngine {
    max_depth: usize,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_EXPRESSION_DEPTH,
        }
    }

    /// Limit how deeply parenthesised groups may nest
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Evaluate an expression, failing closed
    ///
    /// Any malformed input is logged and evaluates to `false`.
    pub fn evaluate(
        &self,
        expression: &str,
        current_value: &FieldValue,
        state: &dyn StateProvider,
        fields: &dyn FieldResolver,
    ) -> bool {
        match self.try_evaluate(expression, current_value, state, fields) {
            Ok(result) => result,
            Err(e) => {
                warn!(expression, error = %e, "Expression evaluation failed, treating as false");
                false
            }
        }
    }

    /// Evaluate an expression, reporting why it could not be evaluated
    pub fn try_evaluate(
        &self,
        expression: &str,
        current_value: &FieldValue,
        state: &dyn StateProvider,
        fields: &dyn FieldResolver,
    ) -> Result<bool> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(Error::expression("expression is empty"));
        }
        check_balance(expression)?;

        let context = EvaluationContext::build(current_value, state);
        let resolver = OperandResolver::new(&context, fields);
        let result = self.eval_expr(expression, &resolver, 0)?;
        trace!(expression, result, "Expression evaluated");
        Ok(result)
    }

    fn eval_expr(&self, expr: &str, resolver: &OperandResolver<'_>, depth: usize) -> Result<bool> {
        if depth > self.max_depth {
            return Err(Error::expression(format!(
                "nesting exceeds the maximum depth of {}",
                self.max_depth
            )));
        }
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(Error::expression("empty sub-expression"));
        }

        let terms = split_top_level(expr, "||");
        if terms.len() > 1 {
            for term in terms {
                if self.eval_expr(term, resolver, depth)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        let terms = split_top_level(expr, "&&");
        if terms.len() > 1 {
            for term in terms {
                if !self.eval_expr(term, resolver, depth)? {
                    return Ok(false);
                }
            }
            return Ok(true);
        }
        self.eval_atom(expr, resolver, depth)
    }

    fn eval_atom(&self, atom: &str, resolver: &OperandResolver<'_>, depth: usize) -> Result<bool> {
        if let Some(inner) = strip_wrapping_parens(atom) {
            return self.eval_expr(inner, resolver, depth + 1);
        }
        if let Some(result) = eval_comparison(atom, resolver)? {
            return Ok(result);
        }
        if let Some(result) = eval_method_call(atom, resolver)? {
            return Ok(result);
        }
        Ok(resolver.resolve(atom)?.is_truthy())
    }
}

/// Compare around the first textual occurrence of the highest-priority
/// operator present in `atom`
///
/// The scan does not understand quotes: `value == 'a>b'` splits on `==`
/// first and works, but `value > 'a==b'` splits on `==`.
fn eval_comparison(atom: &str, resolver: &OperandResolver<'_>) -> Result<Option<bool>> {
    for operator in ComparisonOperator::PRIORITY {
        let symbol = operator.symbol();
        if let Some(idx) = atom.find(symbol) {
            let left = resolver.resolve(&atom[..idx])?;
            let right = resolver.resolve(&atom[idx + symbol.len()..])?;
            return Ok(Some(operator.apply(&left, &right)));
        }
    }
    Ok(None)
}

fn eval_method_call(atom: &str, resolver: &OperandResolver<'_>) -> Result<Option<bool>> {
    let Some(captures) = METHOD_CALL.captures(atom) else {
        return Ok(None);
    };
    let Some(method) = MethodName::parse(&captures[2]) else {
        return Ok(None);
    };
    let receiver = resolver.resolve(&captures[1])?;
    let argument = resolver.resolve(&captures[3])?;
    Ok(Some(method.call(&receiver, &argument)))
}
