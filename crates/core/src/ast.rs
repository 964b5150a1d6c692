use crate::token::Token;

pub type Program = Vec<Stmt>;

/// Statements. Every child is uniquely owned by its parent; the tree is
/// acyclic and built bottom-up by the parser, which never returns a
/// partially-filled node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl {
        /// The declaring type keyword token. The code generator owns the
        /// mapping to a C type and rejects anything it cannot map.
        ty: Token,
        name: Token,
        initializer: Option<Expr>,
    },
    Function {
        name: Token,
        params: Vec<Param>,
        /// `None` means the return-type clause was omitted and the function
        /// returns the void-equivalent type.
        return_type: Option<Token>,
        body: Vec<Stmt>,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    /// Fixed-count repetition; there is no condition-controlled loop form
    /// in the language.
    Loop {
        count: Expr,
        body: Vec<Stmt>,
    },
    Return {
        value: Option<Expr>,
    },
    Print {
        value: Expr,
    },
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Token,
    pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Raw literal text, emitted unchanged.
    Number(String),
    /// Escape-decoded string value.
    Str(String),
    Bool(bool),
    Null,
    Variable {
        name: Token,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Unary {
        operator: Token,
        operand: Box<Expr>,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        name: Token,
        arguments: Vec<Expr>,
    },
}
