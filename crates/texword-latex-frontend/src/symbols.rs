//! Static symbol tables for zero-argument LaTeX commands.

use phf::{phf_map, phf_set};
use texword_ir::LargeOpKind;

/// Large operators with limit slots.
pub static LARGE_OPERATORS: phf::Map<&'static str, LargeOpKind> = phf_map! {
    "sum" => LargeOpKind::Sum,
    "prod" => LargeOpKind::Product,
    "coprod" => LargeOpKind::Coproduct,
    "int" => LargeOpKind::Integral,
    "iint" => LargeOpKind::DoubleIntegral,
    "iiint" => LargeOpKind::TripleIntegral,
    "oint" => LargeOpKind::ContourIntegral,
    "bigcup" => LargeOpKind::Union,
    "bigcap" => LargeOpKind::Intersection,
    "bigvee" => LargeOpKind::Vee,
    "bigwedge" => LargeOpKind::Wedge,
    "bigoplus" => LargeOpKind::OPlus,
    "bigotimes" => LargeOpKind::OTimes,
};

/// Named functions rendered as upright text.
pub static FUNCTION_NAMES: phf::Set<&'static str> = phf_set! {
    "sin", "cos", "tan", "cot", "sec", "csc",
    "sinh", "cosh", "tanh", "coth",
    "arcsin", "arccos", "arctan",
    "log", "ln", "lg", "exp",
    "lim", "limsup", "liminf",
    "sup", "inf", "max", "min",
    "det", "dim", "ker", "deg", "gcd", "arg", "Pr",
};

/// Relation and operation commands.
pub static OPERATOR_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "pm" => "±",
    "mp" => "∓",
    "times" => "×",
    "div" => "÷",
    "cdot" => "⋅",
    "ast" => "∗",
    "star" => "⋆",
    "circ" => "∘",
    "bullet" => "∙",
    "leq" => "≤",
    "le" => "≤",
    "geq" => "≥",
    "ge" => "≥",
    "neq" => "≠",
    "ne" => "≠",
    "ll" => "≪",
    "gg" => "≫",
    "approx" => "≈",
    "equiv" => "≡",
    "sim" => "∼",
    "simeq" => "≃",
    "cong" => "≅",
    "propto" => "∝",
    "in" => "∈",
    "notin" => "∉",
    "ni" => "∋",
    "subset" => "⊂",
    "supset" => "⊃",
    "subseteq" => "⊆",
    "supseteq" => "⊇",
    "cup" => "∪",
    "cap" => "∩",
    "setminus" => "∖",
    "wedge" => "∧",
    "land" => "∧",
    "vee" => "∨",
    "lor" => "∨",
    "neg" => "¬",
    "lnot" => "¬",
    "oplus" => "⊕",
    "ominus" => "⊖",
    "otimes" => "⊗",
    "forall" => "∀",
    "exists" => "∃",
    "perp" => "⊥",
    "parallel" => "∥",
    "mid" => "∣",
    "to" => "→",
    "rightarrow" => "→",
    "leftarrow" => "←",
    "gets" => "←",
    "leftrightarrow" => "↔",
    "Rightarrow" => "⇒",
    "Leftarrow" => "⇐",
    "Leftrightarrow" => "⇔",
    "mapsto" => "↦",
    "uparrow" => "↑",
    "downarrow" => "↓",
    "implies" => "⟹",
    "iff" => "⟺",
};

/// Letter-like symbols (Greek alphabet and friends).
pub static SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    "alpha" => "α",
    "beta" => "β",
    "gamma" => "γ",
    "delta" => "δ",
    "epsilon" => "ϵ",
    "varepsilon" => "ε",
    "zeta" => "ζ",
    "eta" => "η",
    "theta" => "θ",
    "vartheta" => "ϑ",
    "iota" => "ι",
    "kappa" => "κ",
    "lambda" => "λ",
    "mu" => "μ",
    "nu" => "ν",
    "xi" => "ξ",
    "pi" => "π",
    "varpi" => "ϖ",
    "rho" => "ρ",
    "varrho" => "ϱ",
    "sigma" => "σ",
    "varsigma" => "ς",
    "tau" => "τ",
    "upsilon" => "υ",
    "phi" => "ϕ",
    "varphi" => "φ",
    "chi" => "χ",
    "psi" => "ψ",
    "omega" => "ω",
    "Gamma" => "Γ",
    "Delta" => "Δ",
    "Theta" => "Θ",
    "Lambda" => "Λ",
    "Xi" => "Ξ",
    "Pi" => "Π",
    "Sigma" => "Σ",
    "Upsilon" => "Υ",
    "Phi" => "Φ",
    "Psi" => "Ψ",
    "Omega" => "Ω",
    "infty" => "∞",
    "partial" => "∂",
    "nabla" => "∇",
    "hbar" => "ℏ",
    "ell" => "ℓ",
    "aleph" => "ℵ",
    "Re" => "ℜ",
    "Im" => "ℑ",
    "wp" => "℘",
    "emptyset" => "∅",
    "varnothing" => "∅",
    "angle" => "∠",
    "prime" => "′",
    "ldots" => "…",
    "cdots" => "⋯",
    "vdots" => "⋮",
    "ddots" => "⋱",
    "dots" => "…",
    "dotsc" => "…",
    "dotsb" => "⋯",
};
