//! The tree-walking interpreter.

use glint_ir::{ExprId, ExprKind, Program, StringInterner};
use glint_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::errors::{undefined_identifier, EvalError, EvalErrorKind, EvalResult, Operand};
use crate::operators::evaluate_binary;
use crate::{Environment, StatementOutput, Value};

/// Walks one program, reading and writing the caller's environment.
pub struct Interpreter<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
    env: &'a mut Environment,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program, interner: &'a StringInterner, env: &'a mut Environment) -> Self {
        Interpreter {
            program,
            interner,
            env,
        }
    }

    /// Evaluate every top-level statement in order, stopping at the first
    /// error.
    pub fn run(&mut self) -> Result<Vec<StatementOutput>, EvalError> {
        let program = self.program;
        program
            .body
            .iter()
            .map(|&id| self.eval_statement(id))
            .collect()
    }

    /// Evaluate one top-level statement.
    ///
    /// `print` and the wrapper keywords only produce a keyword marker here;
    /// nested inside an expression they yield their operand's value.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn eval_statement(&mut self, id: ExprId) -> Result<StatementOutput, EvalError> {
        let output = match self.program.arena.get(id).kind {
            ExprKind::Print(value) => StatementOutput::Keyword {
                keyword: "print",
                value: self.eval(value)?,
            },
            ExprKind::Wrapper { keyword, value } => StatementOutput::Keyword {
                keyword: keyword.as_str(),
                value: self.eval(value)?,
            },
            _ => match self.eval(id)? {
                Value::Empty => StatementOutput::Empty,
                value => StatementOutput::Value(value),
            },
        };
        debug!(?output, "statement done");
        Ok(output)
    }

    /// Evaluate any node to a value.
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.program.arena.get(id);
        match expr.kind {
            ExprKind::Number(bits) => Ok(Value::Number(f64::from_bits(bits))),
            ExprKind::String(name) => Ok(Value::from(&*self.interner.lookup(name))),
            ExprKind::Ident(name) => self.env.lookup(name).cloned().ok_or_else(|| {
                undefined_identifier(&self.interner.lookup(name)).with_span(expr.span)
            }),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                self.env.define(name, value);
                Ok(Value::Empty)
            }
            ExprKind::Print(value) | ExprKind::Wrapper { value, .. } => self.eval(value),
            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval(left)?;
                let rhs = self.eval(right)?;
                evaluate_binary(&lhs, &rhs, op).map_err(|e| {
                    let span = match e.kind {
                        EvalErrorKind::NotNumeric {
                            side: Operand::Left,
                            ..
                        } => self.program.arena.get(left).span,
                        _ => self.program.arena.get(right).span,
                    };
                    e.with_span(span)
                })
            }
        }
    }
}

/// Evaluate `program` with `env`, returning one output per statement.
///
/// # Errors
/// Returns the first [`EvalError`]. Bindings made before the failing
/// statement stay in `env`.
pub fn evaluate_program(
    program: &Program,
    interner: &StringInterner,
    env: &mut Environment,
) -> Result<Vec<StatementOutput>, EvalError> {
    Interpreter::new(program, interner, env).run()
}
