//! Flat AST for Glint programs.
//!
//! Nodes live in an [`ExprArena`] and refer to their children by [`ExprId`].
//! Statements and expressions share one node type because the grammar lets
//! any node appear in any position (`print x = 1` parses).

mod operators;

use std::fmt;

use crate::{Name, Span};

pub use operators::{BinaryOp, WrapperKeyword};

/// Index into an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// One node of the AST.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Node kinds, one per grammar production.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal, stored as `f64` bits.
    Number(u64),
    /// String literal without its delimiting quotes.
    String(Name),
    /// Variable reference.
    Ident(Name),
    /// `name = value`
    Assign { name: Name, value: ExprId },
    /// `print value`
    Print(ExprId),
    /// `Haley value`, `BlueEgg_000 value`, `Nightmare_speakerman value`
    Wrapper {
        keyword: WrapperKeyword,
        value: ExprId,
    },
    /// `op left right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

impl ExprKind {
    /// Build a number node from its value.
    #[inline]
    pub fn number(value: f64) -> Self {
        ExprKind::Number(value.to_bits())
    }
}

/// Arena owning every node of one program.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate a node and return its id.
    ///
    /// # Panics
    /// Panics if the arena holds more than `u32::MAX` nodes.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeds {} nodes", u32::MAX));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }
}

/// A parsed program: top-level statements in source order plus their arena.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Program {
    pub body: Vec<ExprId>,
    pub arena: ExprArena,
}

impl Program {
    pub fn new(body: Vec<ExprId>, arena: ExprArena) -> Self {
        Program { body, arena }
    }
}

#[cfg(test)]
mod tests;
