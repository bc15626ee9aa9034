use crate::{
    environment::prelude::Environment,
    parser::prelude::{Assignment, BinaryExpression, BinaryOperator, Expression, NegativeExpression, Statement},
};

use super::error::{EvalError, EvalWarning};

/// Tree-walking evaluator owning the session's variables.
///
/// Reading an identifier that was never assigned creates it with the value 0
/// instead of failing. Use [`Evaluator::get_variable`] for a lookup that
/// reports missing variables.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
    warnings: Vec<EvalWarning>,
    materialized: Vec<String>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Evaluates one statement. On failure the environment is left exactly as
    /// it was before the call.
    ///
    /// Only the warnings of the latest statement are kept for
    /// [`Evaluator::take_warnings`].
    pub fn evaluate_statement(&mut self, statement: &Statement) -> Result<i64, EvalError> {
        self.materialized.clear();
        self.warnings.clear();

        let result = match statement {
            Statement::Expression(expression) => self.eval_expression(expression),
            Statement::Assignment(assignment) => self.eval_assignment(assignment)
        };

        if result.is_err() {
            for name in self.materialized.drain(..) {
                self.environment.remove(&name);
            }

            self.warnings.clear();
        }

        result
    }

    pub fn get_variable(&self, name: &str) -> Result<i64, EvalError> {
        self.environment.get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: i64) {
        self.environment.set(name.into(), value);
    }

    pub fn remove_variable(&mut self, name: &str) -> Result<i64, EvalError> {
        self.environment.remove(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    pub fn list_variables(&self) -> Vec<(String, i64)> {
        self.environment.iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }

    pub fn clear_variables(&mut self) {
        self.environment.clear();
    }

    pub fn take_warnings(&mut self) -> Vec<EvalWarning> {
        std::mem::take(&mut self.warnings)
    }

    fn eval_assignment(&mut self, assignment: &Assignment) -> Result<i64, EvalError> {
        let value = self.eval_expression(&assignment.value)?;

        self.environment.set(assignment.identifier.name.clone(), value);

        Ok(value)
    }

    fn eval_expression(&mut self, expression: &Expression) -> Result<i64, EvalError> {
        match expression {
            Expression::Literal { value, .. } => Ok(*value),
            Expression::Identifier(ident) => {
                let (value, materialized) = self.environment.get_or_materialize(&ident.name);

                if materialized {
                    self.materialized.push(ident.name.clone());
                    self.warnings.push(EvalWarning::ImplicitVariable {
                        name: ident.name.clone(),
                        location: ident.location
                    });
                }

                Ok(value)
            },
            Expression::Binary(binary) => self.eval_binary(binary),
            Expression::Negative(negative) => self.eval_negative(negative)
        }
    }

    fn eval_negative(&mut self, negative: &NegativeExpression) -> Result<i64, EvalError> {
        let value = self.eval_expression(&negative.expression)?;

        let (value, overflowed) = value.overflowing_neg();

        if overflowed {
            self.warnings.push(EvalWarning::Overflow { location: negative.location });
        }

        Ok(value)
    }

    fn eval_binary(&mut self, binary: &BinaryExpression) -> Result<i64, EvalError> {
        let left = self.eval_expression(&binary.left)?;
        let right = self.eval_expression(&binary.right)?;

        let (value, overflowed) = match binary.operator {
            BinaryOperator::Add => left.overflowing_add(right),
            BinaryOperator::Sub => left.overflowing_sub(right),
            BinaryOperator::Mul => left.overflowing_mul(right),
            BinaryOperator::Div | BinaryOperator::Mod if right == 0 => {
                return Err(EvalError::DivisionByZero { location: binary.right.location() })
            },
            BinaryOperator::Div => left.overflowing_div(right),
            BinaryOperator::Mod => left.overflowing_rem(right),
        };

        if overflowed {
            self.warnings.push(EvalWarning::Overflow { location: binary.location });
        }

        Ok(value)
    }
}
