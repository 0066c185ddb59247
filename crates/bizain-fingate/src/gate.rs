//! Positional argument gate.
//!
//! An operation declares an ordered list of `(position, validator)` bindings.
//! At call time [`Gate::run`] checks every bound argument in ascending position
//! order and only then builds the operation body. The first failing validator
//! aborts the call with its error. Unbound positions pass through.

use std::fmt;

use crate::error::ValidationError;
use crate::types::Memo;

/// A positional argument as seen by validators.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Text(&'a str),
    Memo(&'a Memo),
}

impl<'a> Arg<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Arg::Text(value) => Some(value),
            Arg::Memo(_) => None,
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Text(value) => f.write_str(value),
            Arg::Memo(memo) => f.write_str(&memo.target_address),
        }
    }
}

pub type Validator = fn(&Arg<'_>) -> Result<(), ValidationError>;

#[derive(Debug, Clone, Copy)]
pub struct Binding {
    pub position: usize,
    pub validator: Validator,
}

#[derive(Debug, Clone, Default)]
pub struct Gate {
    bindings: Vec<Binding>,
}

impl Gate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `validator` to the argument at `position`. Bindings stay sorted by
    /// position; equal positions keep insertion order.
    pub fn bind(mut self, position: usize, validator: Validator) -> Self {
        let at = self.bindings.partition_point(|b| b.position <= position);
        self.bindings.insert(at, Binding { position, validator });
        self
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Run every bound validator against `args`. Positions past the end of
    /// `args` are skipped.
    pub fn check(&self, args: &[Arg<'_>]) -> Result<(), ValidationError> {
        for binding in &self.bindings {
            let Some(arg) = args.get(binding.position) else {
                continue;
            };
            if let Err(e) = (binding.validator)(arg) {
                tracing::debug!(position = binding.position, "argument rejected by gate");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Validate `args`, then call `body`. `body` is never invoked when a
    /// validator fails, so nothing it would start (futures, I/O) begins.
    pub fn run<T, F>(&self, args: &[Arg<'_>], body: F) -> Result<T, ValidationError>
    where
        F: FnOnce() -> T,
    {
        self.check(args)?;
        Ok(body())
    }
}
