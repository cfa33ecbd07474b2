//! LaTeX math notation → math expression IR.
//!
//! Parsing is delegated to `mitex-parser`; this crate folds the resulting
//! rowan tree into [`MathNode`]s. The fold is non-strict: unknown commands
//! degrade to literal runs with a warning instead of failing the whole
//! formula. Hard parse errors are reported separately so the caller can
//! treat the formula as unconvertible.

mod symbols;

use lazy_static::lazy_static;
use mitex_parser::syntax::{CmdItem, EnvItem, SyntaxElement, SyntaxKind, SyntaxNode};
use mitex_parser::CommandSpec;
use mitex_spec_gen::DEFAULT_SPEC;
use rowan::ast::AstNode;

use texword_ir::MathNode;

pub use symbols::{FUNCTION_NAMES, LARGE_OPERATORS, OPERATOR_SYMBOLS, SYMBOLS};

lazy_static! {
    static ref SPEC: CommandSpec = DEFAULT_SPEC.clone();
}

/// Result of folding one formula's notation.
#[derive(Debug, Clone, Default)]
pub struct FrontendOutput {
    pub nodes: Vec<MathNode>,
    /// Non-fatal degradations (unknown commands, skipped constructs).
    pub warnings: Vec<String>,
    /// Hard parse errors; a non-empty list means the notation could not be
    /// represented faithfully.
    pub parse_errors: Vec<String>,
}

/// Parse LaTeX math notation and fold it into IR nodes.
pub fn latex_to_math_nodes(notation: &str) -> FrontendOutput {
    let tree = mitex_parser::parse(notation, SPEC.clone());
    let mut folder = Folder::default();
    let mut nodes = folder.fold_children(&tree);
    normalize(&mut nodes);
    FrontendOutput {
        nodes,
        warnings: folder.warnings,
        parse_errors: folder.parse_errors,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptKind {
    Sub,
    Sup,
}

#[derive(Default)]
struct Folder {
    warnings: Vec<String>,
    parse_errors: Vec<String>,
}

impl Folder {
    fn fold_children(&mut self, node: &SyntaxNode) -> Vec<MathNode> {
        let mut out = Vec::new();
        let mut pending: Option<ScriptKind> = None;
        for child in node.children_with_tokens() {
            self.fold_element(child, &mut out, &mut pending);
        }
        out
    }

    /// Fold one syntax element into `out`. `pending` carries a `_`/`^`
    /// waiting for its script content.
    fn fold_element(
        &mut self,
        elem: SyntaxElement,
        out: &mut Vec<MathNode>,
        pending: &mut Option<ScriptKind>,
    ) {
        use SyntaxKind::*;

        match elem.kind() {
            TokenError => {
                let text = element_text(&elem);
                self.parse_errors.push(format!("parse error near '{}'", text.trim()));
            }

            ScopeRoot | ItemText | ItemParen | ClauseArgument | ItemFormula => {
                if let SyntaxElement::Node(n) = elem {
                    for child in n.children_with_tokens() {
                        self.fold_element(child, out, pending);
                    }
                }
            }

            ItemCurly => {
                if let SyntaxElement::Node(n) = elem {
                    let inner = self.fold_children(&n);
                    self.emit(out, pending, flatten_group(inner));
                }
            }

            ItemLR => {
                if let SyntaxElement::Node(n) = elem {
                    let node = self.fold_lr(&n);
                    self.emit(out, pending, vec![node]);
                }
            }

            ItemAttachComponent => {
                if let SyntaxElement::Node(n) = elem {
                    self.fold_attachment(&n, out);
                }
            }

            ItemCmd => {
                if let SyntaxElement::Node(n) = elem {
                    let nodes = self.fold_command(&n);
                    self.emit(out, pending, nodes);
                }
            }

            ItemEnv => {
                if let SyntaxElement::Node(n) = elem {
                    let nodes = self.fold_environment(&n);
                    self.emit(out, pending, nodes);
                }
            }

            TokenCommandSym => {
                if let SyntaxElement::Token(t) = elem {
                    let nodes = self.fold_symbol_command(t.text());
                    self.emit(out, pending, nodes);
                }
            }

            TokenWord => {
                if let SyntaxElement::Token(t) = elem {
                    let mut nodes = classify_word(t.text());
                    if nodes.is_empty() {
                        return;
                    }
                    if pending.is_some() {
                        // Only the first glyph binds to the script; the rest
                        // continue as siblings (`x^2y` binds `2` alone).
                        let first = nodes.remove(0);
                        self.emit(out, pending, vec![first]);
                        out.extend(nodes);
                    } else {
                        out.extend(nodes);
                    }
                }
            }

            TokenUnderscore => *pending = Some(ScriptKind::Sub),
            TokenCaret => *pending = Some(ScriptKind::Sup),

            TokenApostrophe => attach_script(
                out,
                ScriptKind::Sup,
                vec![MathNode::operator("′")],
            ),
            TokenComma => self.emit(out, pending, vec![MathNode::operator(",")]),
            TokenSemicolon => self.emit(out, pending, vec![MathNode::operator(";")]),
            TokenSlash => self.emit(out, pending, vec![MathNode::operator("/")]),
            TokenAsterisk => self.emit(out, pending, vec![MathNode::operator("∗")]),
            TokenLParen => self.emit(out, pending, vec![MathNode::operator("(")]),
            TokenRParen => self.emit(out, pending, vec![MathNode::operator(")")]),
            TokenLBracket => self.emit(out, pending, vec![MathNode::operator("[")]),
            TokenRBracket => self.emit(out, pending, vec![MathNode::operator("]")]),
            TokenDitto => self.emit(out, pending, vec![MathNode::operator("\"")]),
            TokenAtSign => self.emit(out, pending, vec![MathNode::operator("@")]),
            TokenTilde => {}

            // Delimiters and trivia that carry no content of their own.
            TokenLBrace | TokenRBrace | TokenBeginMath | TokenEndMath | TokenDollar
            | TokenComment | ItemBlockComment | ClauseCommandName | ItemBegin | ItemEnd
            | ItemBracket | TokenWhiteSpace | TokenLineBreak | TokenHash | ItemNewLine
            | TokenAmpersand | ClauseLR => {}

            _ => {}
        }
    }

    /// Push folded nodes, consuming a pending script marker if one is set.
    fn emit(&mut self, out: &mut Vec<MathNode>, pending: &mut Option<ScriptKind>, nodes: Vec<MathNode>) {
        if nodes.is_empty() {
            return;
        }
        if let Some(kind) = pending.take() {
            attach_script(out, kind, nodes);
        } else {
            out.extend(nodes);
        }
    }

    /// `_`/`^` packaged by the parser as an attach component: the marker
    /// token plus its content, with the base as the previous sibling.
    fn fold_attachment(&mut self, node: &SyntaxNode, out: &mut Vec<MathNode>) {
        let mut kind: Option<ScriptKind> = None;
        let mut pending: Option<ScriptKind> = None;
        let mut content = Vec::new();
        for child in node.children_with_tokens() {
            match child.kind() {
                SyntaxKind::TokenUnderscore => kind = Some(ScriptKind::Sub),
                SyntaxKind::TokenCaret => kind = Some(ScriptKind::Sup),
                SyntaxKind::TokenWhiteSpace | SyntaxKind::TokenLineBreak => {}
                _ => {
                    if kind.is_some() {
                        self.fold_element(child, &mut content, &mut pending);
                    } else {
                        // Content before the marker is base material.
                        let mut base_pending = None;
                        self.fold_element(child, out, &mut base_pending);
                    }
                }
            }
        }
        if let Some(kind) = kind {
            attach_script(out, kind, content);
        } else {
            out.extend(content);
        }
    }

    /// `\left ... \right` with delimiter extraction.
    fn fold_lr(&mut self, node: &SyntaxNode) -> MathNode {
        let mut open = String::new();
        let mut close = String::new();
        let mut body = Vec::new();
        let mut pending = None;
        for child in node.children_with_tokens() {
            match &child {
                SyntaxElement::Node(n) if n.kind() == SyntaxKind::ClauseLR => {
                    let text = n.text().to_string();
                    if let Some(rest) = text.strip_prefix("\\left") {
                        open = delimiter_glyph(rest.trim());
                    } else if let Some(rest) = text.strip_prefix("\\right") {
                        close = delimiter_glyph(rest.trim());
                    }
                }
                SyntaxElement::Token(t) if t.text().starts_with("\\left") => {
                    open = delimiter_glyph(&t.text()[5..]);
                }
                SyntaxElement::Token(t) if t.text().starts_with("\\right") => {
                    close = delimiter_glyph(&t.text()[6..]);
                }
                _ => self.fold_element(child, &mut body, &mut pending),
            }
        }
        MathNode::Delimited { open, close, body }
    }

    /// A backslash command with a non-letter or single-letter name, e.g.
    /// `\alpha` lexed as a symbol token, or escapes like `\{`.
    fn fold_symbol_command(&mut self, text: &str) -> Vec<MathNode> {
        let name = text.trim_start_matches('\\');
        if name.is_empty() || name == "begin" || name == "end" {
            return Vec::new();
        }
        self.resolve_command(name)
    }

    fn fold_command(&mut self, node: &SyntaxNode) -> Vec<MathNode> {
        let Some(cmd) = CmdItem::cast(node.clone()) else {
            return Vec::new();
        };
        let name = match cmd.name_tok() {
            Some(tok) => tok.text().trim_start_matches('\\').to_string(),
            None => return Vec::new(),
        };

        match name.as_str() {
            "frac" | "dfrac" | "tfrac" | "cfrac" => {
                let numerator = self.required_arg(&cmd, 0);
                let denominator = self.required_arg(&cmd, 1);
                vec![MathNode::Fraction {
                    numerator,
                    denominator,
                }]
            }
            "sqrt" => {
                let degree = self.optional_arg(&cmd);
                let body = self.required_arg(&cmd, 0);
                vec![MathNode::Radical { degree, body }]
            }
            "text" | "textrm" | "mathrm" | "mbox" | "textbf" | "textit" => {
                let raw = raw_required_arg(&cmd, 0).unwrap_or_default();
                if raw.is_empty() {
                    Vec::new()
                } else {
                    vec![MathNode::Text(raw)]
                }
            }
            "operatorname" => {
                let raw = raw_required_arg(&cmd, 0).unwrap_or_default();
                if raw.is_empty() {
                    Vec::new()
                } else {
                    vec![MathNode::Text(raw.trim().to_string())]
                }
            }
            "mathbb" | "mathcal" | "mathbf" | "mathit" | "mathsf" | "mathfrak" | "bm"
            | "boldsymbol" => {
                // Font variants are not modeled; the letters pass through.
                self.required_arg(&cmd, 0)
            }
            "hat" | "bar" | "tilde" | "vec" | "dot" | "ddot" | "overline" => {
                let body = self.required_arg(&cmd, 0);
                vec![apply_accent(&name, body)]
            }
            "binom" => {
                let top = self.required_arg(&cmd, 0);
                let bottom = self.required_arg(&cmd, 1);
                vec![MathNode::Delimited {
                    open: "(".to_string(),
                    close: ")".to_string(),
                    body: vec![MathNode::Fraction {
                        numerator: top,
                        denominator: bottom,
                    }],
                }]
            }
            _ => self.resolve_command(&name),
        }
    }

    /// Zero-argument command resolution through the symbol tables.
    fn resolve_command(&mut self, name: &str) -> Vec<MathNode> {
        if let Some(kind) = LARGE_OPERATORS.get(name) {
            return vec![MathNode::LargeOp {
                kind: *kind,
                lower: Vec::new(),
                upper: Vec::new(),
                body: Vec::new(),
            }];
        }
        if FUNCTION_NAMES.contains(name) {
            return vec![MathNode::Text(name.to_string())];
        }
        if let Some(glyph) = OPERATOR_SYMBOLS.get(name) {
            return vec![MathNode::operator(*glyph)];
        }
        if let Some(glyph) = SYMBOLS.get(name) {
            return vec![MathNode::identifier(*glyph)];
        }
        match name {
            // Escaped characters keep their literal glyph.
            "{" | "}" | "$" | "%" | "&" | "#" | "_" => {
                return vec![MathNode::operator(name)];
            }
            // Spacing commands contribute no content.
            "," | ";" | ":" | "!" | " " | "quad" | "qquad" | "limits" | "nolimits"
            | "displaystyle" | "textstyle" | "left" | "right" => return Vec::new(),
            _ => {}
        }
        self.warnings
            .push(format!("unknown command '\\{}' passed through as text", name));
        vec![MathNode::identifier(name)]
    }

    /// Matrix-family environments; anything else folds inline with a warning.
    fn fold_environment(&mut self, node: &SyntaxNode) -> Vec<MathNode> {
        let name = EnvItem::cast(node.clone())
            .and_then(|env| env.name_tok().map(|t| t.text().trim().to_string()))
            .unwrap_or_default();

        let delims = match name.trim_end_matches('*') {
            "matrix" => Some(("", "")),
            "pmatrix" => Some(("(", ")")),
            "bmatrix" => Some(("[", "]")),
            "Bmatrix" => Some(("{", "}")),
            "vmatrix" => Some(("|", "|")),
            "Vmatrix" => Some(("‖", "‖")),
            "cases" => Some(("{", "")),
            "aligned" | "align" | "gathered" | "gather" | "split" => Some(("", "")),
            _ => None,
        };

        let Some((open, close)) = delims else {
            self.warnings
                .push(format!("environment '{}' folded inline", name));
            return self.fold_children(node);
        };

        let rows = self.fold_matrix_rows(node);
        if rows.is_empty() {
            return Vec::new();
        }
        vec![MathNode::Matrix {
            rows,
            open: open.to_string(),
            close: close.to_string(),
        }]
    }

    /// Split environment content into rows on `\\` and cells on `&`.
    fn fold_matrix_rows(&mut self, node: &SyntaxNode) -> Vec<Vec<Vec<MathNode>>> {
        let mut rows: Vec<Vec<Vec<MathNode>>> = Vec::new();
        let mut row: Vec<Vec<MathNode>> = Vec::new();
        let mut cell: Vec<MathNode> = Vec::new();
        let mut pending = None;

        for child in node.children_with_tokens() {
            match child.kind() {
                SyntaxKind::ItemBegin | SyntaxKind::ItemEnd => {}
                SyntaxKind::ItemNewLine => {
                    normalize(&mut cell);
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                    pending = None;
                }
                SyntaxKind::TokenAmpersand => {
                    normalize(&mut cell);
                    row.push(std::mem::take(&mut cell));
                    pending = None;
                }
                _ => self.fold_element(child, &mut cell, &mut pending),
            }
        }
        normalize(&mut cell);
        if !cell.is_empty() || !row.is_empty() {
            row.push(cell);
            rows.push(row);
        }
        // Drop fully empty trailing rows left by a final `\\`.
        while rows.len() > 1 {
            let trailing_empty = rows
                .last()
                .map(|r| r.iter().all(|c| c.is_empty()))
                .unwrap_or(false);
            if trailing_empty {
                rows.pop();
            } else {
                break;
            }
        }
        rows
    }

    fn required_arg(&mut self, cmd: &CmdItem, index: usize) -> Vec<MathNode> {
        let mut required = 0usize;
        for child in cmd.syntax().children() {
            if child.kind() != SyntaxKind::ClauseArgument {
                continue;
            }
            let is_bracket = child
                .children()
                .any(|c| c.kind() == SyntaxKind::ItemBracket);
            if is_bracket {
                continue;
            }
            if required == index {
                let mut out = self.fold_children(&child);
                normalize(&mut out);
                return out;
            }
            required += 1;
        }
        Vec::new()
    }

    fn optional_arg(&mut self, cmd: &CmdItem) -> Option<Vec<MathNode>> {
        for child in cmd.syntax().children() {
            if child.kind() != SyntaxKind::ClauseArgument {
                continue;
            }
            let is_bracket = child
                .children()
                .any(|c| c.kind() == SyntaxKind::ItemBracket);
            if is_bracket {
                let mut out = self.fold_children(&child);
                normalize(&mut out);
                if out.is_empty() {
                    return None;
                }
                return Some(out);
            }
        }
        None
    }
}

/// Source text of a required argument, outer braces stripped, no folding.
/// Used for commands whose argument is literal text rather than math.
fn raw_required_arg(cmd: &CmdItem, index: usize) -> Option<String> {
    let mut required = 0usize;
    for child in cmd.syntax().children() {
        if child.kind() != SyntaxKind::ClauseArgument {
            continue;
        }
        let is_bracket = child
            .children()
            .any(|c| c.kind() == SyntaxKind::ItemBracket);
        if is_bracket {
            continue;
        }
        if required == index {
            let text = child.text().to_string();
            let text = text.trim();
            let stripped = text
                .strip_prefix('{')
                .and_then(|t| t.strip_suffix('}'))
                .unwrap_or(text);
            return Some(stripped.to_string());
        }
        required += 1;
    }
    None
}

fn element_text(elem: &SyntaxElement) -> String {
    match elem {
        SyntaxElement::Node(n) => n.text().to_string(),
        SyntaxElement::Token(t) => t.text().to_string(),
    }
}

/// Attach script content to the last node in `out`.
fn attach_script(out: &mut Vec<MathNode>, kind: ScriptKind, content: Vec<MathNode>) {
    let content = flatten_group(content);
    let base = out.pop();
    let node = match base {
        Some(MathNode::LargeOp {
            kind: op,
            lower,
            upper,
            body,
        }) if body.is_empty() => {
            // Limits on a large operator fill its limit slots, not a script.
            let (lower, upper) = match kind {
                ScriptKind::Sub if lower.is_empty() => (content, upper),
                ScriptKind::Sup if upper.is_empty() => (lower, content),
                ScriptKind::Sub => (content, upper),
                ScriptKind::Sup => (lower, content),
            };
            MathNode::LargeOp {
                kind: op,
                lower,
                upper,
                body,
            }
        }
        Some(MathNode::Script { base, sub, sup }) if slot_free(&sub, &sup, kind) => {
            let (sub, sup) = match kind {
                ScriptKind::Sub => (Some(content), sup),
                ScriptKind::Sup => (sub, Some(content)),
            };
            MathNode::Script { base, sub, sup }
        }
        Some(other) => {
            let (sub, sup) = match kind {
                ScriptKind::Sub => (Some(content), None),
                ScriptKind::Sup => (None, Some(content)),
            };
            MathNode::Script {
                base: vec![other],
                sub,
                sup,
            }
        }
        None => {
            let (sub, sup) = match kind {
                ScriptKind::Sub => (Some(content), None),
                ScriptKind::Sup => (None, Some(content)),
            };
            MathNode::Script {
                base: Vec::new(),
                sub,
                sup,
            }
        }
    };
    out.push(node);
}

fn slot_free(sub: &Option<Vec<MathNode>>, sup: &Option<Vec<MathNode>>, kind: ScriptKind) -> bool {
    match kind {
        ScriptKind::Sub => sub.is_none(),
        ScriptKind::Sup => sup.is_none(),
    }
}

/// A one-element group is transparent.
fn flatten_group(nodes: Vec<MathNode>) -> Vec<MathNode> {
    if nodes.len() == 1 {
        if let MathNode::Group(inner) = &nodes[0] {
            return inner.clone();
        }
    }
    nodes
}

/// Classify a plain word token character by character.
fn classify_word(text: &str) -> Vec<MathNode> {
    let mut out = Vec::new();
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() || (ch == '.' && !digits.is_empty()) {
            digits.push(ch);
            continue;
        }
        if !digits.is_empty() {
            out.push(MathNode::number(std::mem::take(&mut digits)));
        }
        if ch.is_whitespace() {
            continue;
        }
        if ch.is_alphabetic() {
            out.push(MathNode::identifier(ch.to_string()));
        } else {
            let glyph = match ch {
                '-' => '−',
                other => other,
            };
            out.push(MathNode::operator(glyph.to_string()));
        }
    }
    if !digits.is_empty() {
        out.push(MathNode::number(digits));
    }
    out
}

fn apply_accent(name: &str, body: Vec<MathNode>) -> MathNode {
    let combining = match name {
        "hat" => '\u{0302}',
        "bar" => '\u{0304}',
        "tilde" => '\u{0303}',
        "vec" => '\u{20D7}',
        "dot" => '\u{0307}',
        "ddot" => '\u{0308}',
        "overline" => '\u{0305}',
        _ => return MathNode::Group(body),
    };
    if body.len() == 1 {
        if let MathNode::Identifier(s) = &body[0] {
            if s.chars().count() == 1 {
                return MathNode::identifier(format!("{}{}", s, combining));
            }
        }
    }
    MathNode::Group(body)
}

/// Map the text after `\left`/`\right` to a delimiter glyph.
fn delimiter_glyph(text: &str) -> String {
    let delim = if let Some(after) = text.strip_prefix('\\') {
        let end = after
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(after.len());
        if end == 0 {
            // Non-letter command like `\{` is backslash plus one char.
            let ch_len = after.chars().next().map(|c| c.len_utf8()).unwrap_or(0);
            &text[..1 + ch_len]
        } else {
            &text[..end + 1]
        }
    } else {
        match text.chars().next() {
            Some(c) => &text[..c.len_utf8()],
            None => return String::new(),
        }
    };
    match delim {
        "." => String::new(),
        "(" | ")" | "[" | "]" => delim.to_string(),
        "\\{" | "\\lbrace" => "{".to_string(),
        "\\}" | "\\rbrace" => "}".to_string(),
        "|" | "\\vert" | "\\lvert" | "\\rvert" => "|".to_string(),
        "\\|" | "\\Vert" | "\\lVert" | "\\rVert" => "‖".to_string(),
        "\\langle" => "⟨".to_string(),
        "\\rangle" => "⟩".to_string(),
        "\\lfloor" => "⌊".to_string(),
        "\\rfloor" => "⌋".to_string(),
        "\\lceil" => "⌈".to_string(),
        "\\rceil" => "⌉".to_string(),
        other => other.trim_start_matches('\\').to_string(),
    }
}

// =============================================================================
// Normalization passes
// =============================================================================

/// Structural normalization applied to every folded node list: group bare
/// paren pairs into `Delimited` nodes, then merge known function names with
/// a following delimited argument.
pub fn normalize(nodes: &mut Vec<MathNode>) {
    let grouped = group_parens(std::mem::take(nodes));
    *nodes = merge_functions(grouped);
}

/// Fold balanced `(` ... `)` operator sequences into `Delimited` nodes so
/// downstream shape matching sees function arguments as one unit.
fn group_parens(nodes: Vec<MathNode>) -> Vec<MathNode> {
    let mut out: Vec<MathNode> = Vec::new();
    let mut stack: Vec<Vec<MathNode>> = Vec::new();
    for node in nodes {
        match &node {
            MathNode::Operator(op) if op == "(" => stack.push(Vec::new()),
            MathNode::Operator(op) if op == ")" => match stack.pop() {
                Some(body) => {
                    let delimited = MathNode::Delimited {
                        open: "(".to_string(),
                        close: ")".to_string(),
                        body,
                    };
                    match stack.last_mut() {
                        Some(open_group) => open_group.push(delimited),
                        None => out.push(delimited),
                    }
                }
                None => out.push(node),
            },
            _ => match stack.last_mut() {
                Some(open_group) => open_group.push(node),
                None => out.push(node),
            },
        }
    }
    // Unbalanced opens degrade back to literal parens.
    for body in stack {
        out.push(MathNode::operator("("));
        out.extend(body);
    }
    out
}

/// `sin` text run followed by a parenthesized group becomes a function
/// application node.
fn merge_functions(nodes: Vec<MathNode>) -> Vec<MathNode> {
    let mut out: Vec<MathNode> = Vec::new();
    let mut iter = nodes.into_iter().peekable();
    while let Some(node) = iter.next() {
        let function_name = match &node {
            MathNode::Text(name) if FUNCTION_NAMES.contains(name.as_str()) => Some(name.clone()),
            _ => None,
        };
        if let Some(name) = function_name {
            let next_is_paren = matches!(
                iter.peek(),
                Some(MathNode::Delimited { open, .. }) if open == "("
            );
            if next_is_paren {
                let arg_node = iter.next().expect("peeked argument present");
                out.push(MathNode::Function {
                    name,
                    arg: vec![arg_node],
                });
                continue;
            }
        }
        out.push(node);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use texword_ir::MathNode;

    fn fold(input: &str) -> Vec<MathNode> {
        let out = latex_to_math_nodes(input);
        assert!(out.parse_errors.is_empty(), "{:?}", out.parse_errors);
        out.nodes
    }

    #[test]
    fn folds_identifiers_and_numbers() {
        let nodes = fold("E = mc^2");
        assert!(nodes.contains(&MathNode::identifier("E")));
        assert!(nodes.contains(&MathNode::operator("=")));
        let has_square = nodes.iter().any(|n| {
            matches!(n, MathNode::Script { base, sup: Some(sup), .. }
                if base == &vec![MathNode::identifier("c")]
                    && sup == &vec![MathNode::number("2")])
        });
        assert!(has_square, "{:?}", nodes);
    }

    #[test]
    fn folds_fraction() {
        let nodes = fold(r"\frac{a}{b}");
        assert_eq!(
            nodes,
            vec![MathNode::Fraction {
                numerator: vec![MathNode::identifier("a")],
                denominator: vec![MathNode::identifier("b")],
            }]
        );
    }

    #[test]
    fn folds_sqrt_with_degree() {
        let nodes = fold(r"\sqrt[3]{x}");
        assert_eq!(
            nodes,
            vec![MathNode::Radical {
                degree: Some(vec![MathNode::number("3")]),
                body: vec![MathNode::identifier("x")],
            }]
        );
    }

    #[test]
    fn sum_limits_fold_into_operator_slots() {
        let nodes = fold(r"\sum_{i=1}^{n} i");
        let op = nodes.iter().find_map(|n| match n {
            MathNode::LargeOp {
                kind, lower, upper, body,
            } => Some((kind, lower, upper, body)),
            _ => None,
        });
        let (kind, lower, upper, body) = op.expect("large operator node");
        assert_eq!(*kind, texword_ir::LargeOpKind::Sum);
        assert!(!lower.is_empty());
        assert_eq!(upper, &vec![MathNode::identifier("n")]);
        // The operand is a following sibling until the repair pass runs.
        assert!(body.is_empty());
    }

    #[test]
    fn folds_pmatrix() {
        let nodes = fold("\\begin{pmatrix} a & b \\\\ c & d \\end{pmatrix}");
        let matrix = nodes.iter().find_map(|n| match n {
            MathNode::Matrix { rows, open, close } => Some((rows, open, close)),
            _ => None,
        });
        let (rows, open, close) = matrix.expect("matrix node");
        assert_eq!(open, "(");
        assert_eq!(close, ")");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][0], vec![MathNode::identifier("a")]);
        assert_eq!(rows[1][1], vec![MathNode::identifier("d")]);
    }

    #[test]
    fn greek_letters_resolve_to_unicode() {
        let nodes = fold(r"\alpha + \beta");
        assert!(nodes.contains(&MathNode::identifier("α")));
        assert!(nodes.contains(&MathNode::identifier("β")));
        assert!(nodes.contains(&MathNode::operator("+")));
    }

    #[test]
    fn unknown_command_degrades_with_warning() {
        let out = latex_to_math_nodes(r"\frobnicate x");
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("frobnicate")));
        assert!(out.nodes.contains(&MathNode::identifier("frobnicate")));
    }

    #[test]
    fn function_application_groups_argument() {
        let nodes = fold(r"\sin(x)");
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            MathNode::Function { name, arg } => {
                assert_eq!(name, "sin");
                assert_eq!(arg.len(), 1);
            }
            other => panic!("expected function node, got {:?}", other),
        }
    }

    #[test]
    fn text_command_keeps_literal_argument() {
        let nodes = fold(r"\text{hello world}");
        assert_eq!(nodes, vec![MathNode::Text("hello world".to_string())]);
    }

    #[test]
    fn operatorname_becomes_upright_text() {
        let nodes = fold(r"\operatorname{argmax}");
        assert_eq!(nodes, vec![MathNode::Text("argmax".to_string())]);
    }

    #[test]
    fn plain_parens_group_into_delimited() {
        let nodes = fold("f(t)");
        assert!(nodes.iter().any(|n| matches!(
            n,
            MathNode::Delimited { open, .. } if open == "("
        )));
    }
}
