//! Operator and keyword tags carried by AST nodes.

use crate::TokenKind;

/// Prefix binary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// The operator a token starts, if any.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }
}

/// The three statement keywords that wrap a single expression the same way
/// `print` does.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WrapperKeyword {
    Haley,
    BlueEgg000,
    NightmareSpeakerman,
}

impl WrapperKeyword {
    /// Keyword text as written in source.
    pub const fn as_str(self) -> &'static str {
        match self {
            WrapperKeyword::Haley => "Haley",
            WrapperKeyword::BlueEgg000 => "BlueEgg_000",
            WrapperKeyword::NightmareSpeakerman => "Nightmare_speakerman",
        }
    }

    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Haley => Some(WrapperKeyword::Haley),
            TokenKind::BlueEgg000 => Some(WrapperKeyword::BlueEgg000),
            TokenKind::NightmareSpeakerman => Some(WrapperKeyword::NightmareSpeakerman),
            _ => None,
        }
    }
}
