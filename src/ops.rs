//! Classification of comparison and aggregate tokens into expression
//! operator codes.

use crate::token::TokenKind;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Expression operator codes, the currency of the expression layer above
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprOp {
    Equal,
    Greater,
    Smaller,
    GreaterEqual,
    SmallerEqual,
    NotEqual,
    Count,
    Max,
    Min,
    Sum,
    Avg,
    Every,
    Some,
    StddevPop,
    StddevSamp,
    VarPop,
    VarSamp,
    ArrayAgg,
    GroupConcat,
    Median,
}

// Built once, read-only afterwards; concurrent parser instances share it
// without locking.
static EXPRESSION_OPS: LazyLock<HashMap<TokenKind, ExprOp>> = LazyLock::new(|| {
    HashMap::from([
        (TokenKind::Eq, ExprOp::Equal),
        (TokenKind::Gt, ExprOp::Greater),
        (TokenKind::Lt, ExprOp::Smaller),
        (TokenKind::GtEq, ExprOp::GreaterEqual),
        (TokenKind::LtEq, ExprOp::SmallerEqual),
        (TokenKind::NotEq, ExprOp::NotEqual),
        (TokenKind::Count, ExprOp::Count),
        (TokenKind::Max, ExprOp::Max),
        (TokenKind::Min, ExprOp::Min),
        (TokenKind::Sum, ExprOp::Sum),
        (TokenKind::Avg, ExprOp::Avg),
        (TokenKind::Every, ExprOp::Every),
        (TokenKind::Any, ExprOp::Some),
        (TokenKind::Some, ExprOp::Some),
        (TokenKind::StddevPop, ExprOp::StddevPop),
        (TokenKind::StddevSamp, ExprOp::StddevSamp),
        (TokenKind::VarPop, ExprOp::VarPop),
        (TokenKind::VarSamp, ExprOp::VarSamp),
        (TokenKind::ArrayAgg, ExprOp::ArrayAgg),
        (TokenKind::GroupConcat, ExprOp::GroupConcat),
        (TokenKind::Median, ExprOp::Median),
    ])
});

/// The operator code for a token kind already validated as grammar-legal.
///
/// Panics when the kind is outside the closed operator set; that is a
/// contract violation in the calling grammar, not a user error. Use
/// [`try_expression_op_type`] for the validation step itself.
pub fn expression_op_type(kind: TokenKind) -> ExprOp {
    match try_expression_op_type(kind) {
        Some(op) => op,
        None => panic!("token kind {kind} has no expression operator mapping"),
    }
}

/// The operator code for a token kind, or `None` outside the closed set.
pub fn try_expression_op_type(kind: TokenKind) -> Option<ExprOp> {
    EXPRESSION_OPS.get(&kind).copied()
}
