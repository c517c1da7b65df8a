use serde::{Deserialize, Serialize};

use crate::{Position, Value};

/// The contexts an expression can appear in.
///
/// Many variants of [`Expression`] are valid in more than one context, e.g. a reference is valid
/// both as an instruction of a block and inside an inline expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionCategory {
    /// An instruction of a `begin ... end` block.
    Block,
    /// A sub-expression of another expression.
    Inline,
    /// An expression that can be evaluated at compile time.
    Constexpr,
}

impl ExpressionCategory {
    pub fn description(&self) -> &'static str {
        match self {
            ExpressionCategory::Block => "block instruction",
            ExpressionCategory::Inline => "inline expression",
            ExpressionCategory::Constexpr => "constant expression",
        }
    }
}

/// An expression of a function body.
///
/// Juxtaposed expressions (like `f x + y`) are encoded as a singly-linked chain: each expression
/// that can be followed by another one keeps it in its `next` field, see [`Expression::chain`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expression {
    BlockConditional(BlockConditional),
    Label(Label),
    InlineConditional(InlineConditional),
    Parenthetical(Parenthetical),
    Capture(Capture),
    Reference(Reference),
    Operator(Operator),
    Literal(Literal),
}

/// `if (condition) then ... elseif (condition) then ... else ... endif`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockConditional {
    #[serde(default)]
    pub position: Position,
    pub condition: Box<Expression>,
    pub execution: Vec<Expression>,
    #[serde(default)]
    pub sub_conditionals: Vec<SubConditional>,
    #[serde(default)]
    pub alternative: Vec<Expression>,
}

/// An `elseif` branch of a [`BlockConditional`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubConditional {
    #[serde(default)]
    pub position: Position,
    pub condition: Expression,
    pub execution: Vec<Expression>,
}

/// `label := resolution`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub position: Position,
    pub label: String,
    pub resolution: Box<Expression>,
}

/// `? (condition) execution`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineConditional {
    #[serde(default)]
    pub position: Position,
    pub condition: Box<Expression>,
    pub execution: Box<Expression>,
}

/// `( execution ) next`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parenthetical {
    #[serde(default)]
    pub position: Position,
    pub execution: Box<Expression>,
    #[serde(default)]
    pub next: Option<Box<Expression>>,
}

/// `` `execution` next ``
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default)]
    pub position: Position,
    pub execution: Box<Expression>,
    #[serde(default)]
    pub next: Option<Box<Expression>>,
}

/// A group of identifiers, like `math sum`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub position: Position,
    pub names: Vec<String>,
    #[serde(default)]
    pub next: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operator {
    #[serde(default)]
    pub position: Position,
    pub operator: String,
    #[serde(default)]
    pub next: Option<Box<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub position: Position,
    pub value: Value,
}

impl Expression {
    pub fn pos(&self) -> &Position {
        match self {
            Expression::BlockConditional(e) => &e.position,
            Expression::Label(e) => &e.position,
            Expression::InlineConditional(e) => &e.position,
            Expression::Parenthetical(e) => &e.position,
            Expression::Capture(e) => &e.position,
            Expression::Reference(e) => &e.position,
            Expression::Operator(e) => &e.position,
            Expression::Literal(e) => &e.position,
        }
    }

    /// A short human readable name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::BlockConditional(_) => "conditional block",
            Expression::Label(_) => "label",
            Expression::InlineConditional(_) => "inline conditional",
            Expression::Parenthetical(_) => "parenthetical",
            Expression::Capture(_) => "capture",
            Expression::Reference(_) => "reference",
            Expression::Operator(_) => "operator",
            Expression::Literal(_) => "literal",
        }
    }

    pub fn is_block(&self) -> bool {
        !matches!(self, Expression::Operator(_) | Expression::Literal(_))
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Expression::Parenthetical(_)
                | Expression::Capture(_)
                | Expression::Reference(_)
                | Expression::Operator(_)
        )
    }

    pub fn is_constexpr(&self) -> bool {
        matches!(
            self,
            Expression::Parenthetical(_)
                | Expression::Capture(_)
                | Expression::Reference(_)
                | Expression::Operator(_)
                | Expression::Literal(_)
        )
    }

    /// Whether this expression can appear in the given context.
    pub fn belongs_to(&self, category: ExpressionCategory) -> bool {
        match category {
            ExpressionCategory::Block => self.is_block(),
            ExpressionCategory::Inline => self.is_inline(),
            ExpressionCategory::Constexpr => self.is_constexpr(),
        }
    }

    /// The expression juxtaposed after this one, if any.
    pub fn next(&self) -> Option<&Expression> {
        match self {
            Expression::Parenthetical(e) => e.next.as_deref(),
            Expression::Capture(e) => e.next.as_deref(),
            Expression::Reference(e) => e.next.as_deref(),
            Expression::Operator(e) => e.next.as_deref(),
            _ => None,
        }
    }

    /// This expression followed by all the ones juxtaposed after it.
    pub fn chain(&self) -> impl Iterator<Item = &Expression> {
        std::iter::successors(Some(self), |expression| expression.next())
    }
}
