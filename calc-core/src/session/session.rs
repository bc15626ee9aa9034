use std::rc::Rc;

use crate::{
    eval::prelude::Evaluator,
    parser::prelude::parse_statement,
    utils::prelude::{Error, Warning, WarningEmitter, WarningEmitterIO},
};

/// One interactive session: the evaluator with its variables plus the sink
/// for warnings produced while evaluating.
pub struct Session {
    evaluator: Evaluator,
    warnings: WarningEmitter,
}

impl Session {
    pub fn new(warnings: Rc<dyn WarningEmitterIO>) -> Self {
        Self {
            evaluator: Evaluator::new(),
            warnings: WarningEmitter::new(warnings),
        }
    }

    /// Parses and evaluates a single line.
    pub fn run(&mut self, line: &str) -> Result<i64, Error> {
        let statement = parse_statement(line)
            .map_err(|error| Error::Parse { src: line.to_string(), error })?;

        let value = self.evaluator.evaluate_statement(&statement)
            .map_err(|error| Error::Eval { src: line.to_string(), error })?;

        for warning in self.evaluator.take_warnings() {
            self.warnings.emit(Warning::Eval {
                src: line.to_string(),
                warning
            });
        }

        Ok(value)
    }

    pub fn variables(&self) -> Vec<(String, i64)> {
        self.evaluator.list_variables()
    }

    pub fn clear(&mut self) {
        self.evaluator.clear_variables();
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn evaluator_mut(&mut self) -> &mut Evaluator {
        &mut self.evaluator
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.count()
    }
}
