//! Typed intermediate representation for mathematical expressions.
//!
//! This is the midpoint between source notation (LaTeX) and the rendered
//! markups (MathML, OMML). The tree is renderer-agnostic: frontends build
//! it, the repair pass rewrites it, backends serialize it.

/// Whether a formula renders as a standalone block or an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Inline,
    Block,
}

impl DisplayMode {
    pub fn is_block(self) -> bool {
        matches!(self, DisplayMode::Block)
    }
}

/// A large operator with a stretchable glyph and limit slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LargeOpKind {
    Sum,
    Product,
    Coproduct,
    Integral,
    DoubleIntegral,
    TripleIntegral,
    ContourIntegral,
    Union,
    Intersection,
    Vee,
    Wedge,
    OPlus,
    OTimes,
}

impl LargeOpKind {
    /// The operator glyph as it appears in both MathML and OMML.
    pub fn glyph(self) -> char {
        match self {
            LargeOpKind::Sum => '∑',
            LargeOpKind::Product => '∏',
            LargeOpKind::Coproduct => '∐',
            LargeOpKind::Integral => '∫',
            LargeOpKind::DoubleIntegral => '∬',
            LargeOpKind::TripleIntegral => '∭',
            LargeOpKind::ContourIntegral => '∮',
            LargeOpKind::Union => '⋃',
            LargeOpKind::Intersection => '⋂',
            LargeOpKind::Vee => '⋁',
            LargeOpKind::Wedge => '⋀',
            LargeOpKind::OPlus => '⨁',
            LargeOpKind::OTimes => '⨂',
        }
    }

    /// Integral-family operators place limits beside the glyph rather than
    /// above/below it.
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            LargeOpKind::Integral
                | LargeOpKind::DoubleIntegral
                | LargeOpKind::TripleIntegral
                | LargeOpKind::ContourIntegral
        )
    }
}

/// One node of a math expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathNode {
    /// A single identifier, e.g. `x` or `α`.
    Identifier(String),
    /// A run of digits (possibly with a decimal point).
    Number(String),
    /// An operator or relation glyph, e.g. `=`, `+`, `≤`.
    Operator(String),
    /// Literal text from `\text{...}`, rendered upright.
    Text(String),
    Fraction {
        numerator: Vec<MathNode>,
        denominator: Vec<MathNode>,
    },
    Radical {
        /// `None` for a plain square root.
        degree: Option<Vec<MathNode>>,
        body: Vec<MathNode>,
    },
    /// Sub/superscript attachment. At least one of `sub`/`sup` is present.
    Script {
        base: Vec<MathNode>,
        sub: Option<Vec<MathNode>>,
        sup: Option<Vec<MathNode>>,
    },
    /// Large operator with limit slots and an operand body. The body may
    /// legitimately be empty in the source; the repair pass fills it when a
    /// known operand shape follows the operator.
    LargeOp {
        kind: LargeOpKind,
        lower: Vec<MathNode>,
        upper: Vec<MathNode>,
        body: Vec<MathNode>,
    },
    /// Paired delimiters around a body, e.g. `(...)` or `[...]`.
    Delimited {
        open: String,
        close: String,
        body: Vec<MathNode>,
    },
    /// Rectangular matrix; `rows[i][j]` is one cell's content.
    Matrix {
        rows: Vec<Vec<Vec<MathNode>>>,
        open: String,
        close: String,
    },
    /// Named function application, e.g. `sin(x)`.
    Function {
        name: String,
        arg: Vec<MathNode>,
    },
    /// Transparent grouping with no visual delimiters.
    Group(Vec<MathNode>),
}

impl MathNode {
    pub fn identifier(s: impl Into<String>) -> Self {
        MathNode::Identifier(s.into())
    }

    pub fn number(s: impl Into<String>) -> Self {
        MathNode::Number(s.into())
    }

    pub fn operator(s: impl Into<String>) -> Self {
        MathNode::Operator(s.into())
    }

    /// True for a node that renders as a single glyph.
    pub fn is_single_symbol(&self) -> bool {
        match self {
            MathNode::Identifier(s) | MathNode::Number(s) | MathNode::Operator(s) => {
                s.chars().count() == 1
            }
            _ => false,
        }
    }
}

/// Walk every node list in the tree, applying `f` to each list once.
///
/// `f` receives each `Vec<MathNode>` (the root list, then every child slot)
/// and may rewrite it in place; used by the repair pass.
pub fn visit_node_lists(nodes: &mut Vec<MathNode>, f: &mut impl FnMut(&mut Vec<MathNode>)) {
    f(nodes);
    for node in nodes.iter_mut() {
        match node {
            MathNode::Fraction {
                numerator,
                denominator,
            } => {
                visit_node_lists(numerator, f);
                visit_node_lists(denominator, f);
            }
            MathNode::Radical { degree, body } => {
                if let Some(degree) = degree {
                    visit_node_lists(degree, f);
                }
                visit_node_lists(body, f);
            }
            MathNode::Script { base, sub, sup } => {
                visit_node_lists(base, f);
                if let Some(sub) = sub {
                    visit_node_lists(sub, f);
                }
                if let Some(sup) = sup {
                    visit_node_lists(sup, f);
                }
            }
            MathNode::LargeOp {
                lower, upper, body, ..
            } => {
                visit_node_lists(lower, f);
                visit_node_lists(upper, f);
                visit_node_lists(body, f);
            }
            MathNode::Delimited { body, .. } => visit_node_lists(body, f),
            MathNode::Matrix { rows, .. } => {
                for row in rows.iter_mut() {
                    for cell in row.iter_mut() {
                        visit_node_lists(cell, f);
                    }
                }
            }
            MathNode::Function { arg, .. } => visit_node_lists(arg, f),
            MathNode::Group(inner) => visit_node_lists(inner, f),
            MathNode::Identifier(_)
            | MathNode::Number(_)
            | MathNode::Operator(_)
            | MathNode::Text(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_symbol_detection() {
        assert!(MathNode::identifier("x").is_single_symbol());
        assert!(MathNode::operator("=").is_single_symbol());
        assert!(!MathNode::identifier("xy").is_single_symbol());
        assert!(!MathNode::Group(vec![]).is_single_symbol());
    }

    #[test]
    fn visit_reaches_nested_lists() {
        let mut nodes = vec![MathNode::Fraction {
            numerator: vec![MathNode::identifier("a")],
            denominator: vec![MathNode::Script {
                base: vec![MathNode::identifier("b")],
                sub: Some(vec![MathNode::number("2")]),
                sup: None,
            }],
        }];
        let mut seen = 0usize;
        visit_node_lists(&mut nodes, &mut |_| seen += 1);
        // root, numerator, denominator, script base, script sub
        assert_eq!(seen, 5);
    }
}
