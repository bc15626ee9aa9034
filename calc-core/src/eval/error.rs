use thiserror::Error;

use crate::utils::prelude::SrcSpan;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero {
        /// The divisor that evaluated to zero.
        location: SrcSpan
    },
    #[error("variable `{name}` is not defined")]
    UndefinedVariable {
        name: String
    },
}

/// Things worth telling the user about a statement that still succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalWarning {
    ImplicitVariable {
        name: String,
        location: SrcSpan
    },
    Overflow {
        location: SrcSpan
    },
}
