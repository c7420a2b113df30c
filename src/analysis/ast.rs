//! Owned syntax tree used by the scanners, lowered from tree-sitter-ruby.
//!
//! Only the node shapes the usecase rules care about get a dedicated
//! [`NodeKind`]. Everything else becomes [`NodeKind::Other`] and is only ever
//! walked generically.

use thiserror::Error;
use tree_sitter::{Node as TsNode, Parser};

/// Kind tag plus the identifying data each shape carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `class Name ... end`. Children: superclass (if any) then body statements.
    ClassDef { name: Option<String> },
    /// `def name ... end`. Children: body statements.
    MethodDef { name: String },
    /// Method invocation. Children: `[receiver?] ++ arguments ++ [block?]`.
    Call {
        method: Option<String>,
        receiver: bool,
        block: bool,
    },
    /// `do ... end` or `{ ... }`. Children: body statements.
    Block,
    /// Local or instance variable assignment. Children: `[target, value]`.
    Assignment,
    SymbolLiteral(String),
    StringLiteral(String),
    /// `Name` or `Scope::Name`. The only child, if any, is the scope.
    ConstantReference { name: String },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub line: Option<usize>,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            children,
            line: None,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Builds a call node with its children in canonical order.
    #[must_use]
    pub fn call(
        method: Option<&str>,
        receiver: Option<Node>,
        arguments: Vec<Node>,
        block: Option<Node>,
    ) -> Self {
        let kind = NodeKind::Call {
            method: method.map(str::to_string),
            receiver: receiver.is_some(),
            block: block.is_some(),
        };
        let children = receiver
            .into_iter()
            .chain(arguments)
            .chain(block)
            .collect();
        Self::new(kind, children)
    }

    #[must_use]
    pub fn constant(name: &str, scope: Option<Node>) -> Self {
        let kind = NodeKind::ConstantReference {
            name: name.to_string(),
        };
        Self::new(kind, scope.into_iter().collect())
    }

    /// The receiver of a call, e.g. `Foo` in `Foo.bar`.
    #[must_use]
    pub fn receiver(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Call { receiver: true, .. } => self.children.first(),
            _ => None,
        }
    }

    /// The positional arguments of a call.
    #[must_use]
    pub fn arguments(&self) -> &[Node] {
        let NodeKind::Call {
            receiver, block, ..
        } = self.kind
        else {
            return &[];
        };
        let start = usize::from(receiver);
        let end = self.children.len().saturating_sub(usize::from(block));
        self.children.get(start..end).unwrap_or(&[])
    }

    /// The block handed to a call, if one is attached.
    #[must_use]
    pub fn block(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Call { block: true, .. } => self.children.last(),
            _ => None,
        }
    }

    /// Right-hand side of an assignment.
    #[must_use]
    pub fn assigned_value(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::Assignment => self.children.get(1),
            _ => None,
        }
    }

    /// Fully qualified constant name, outer scopes first (`Orders::CreateUsecase`).
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let NodeKind::ConstantReference { name } = &self.kind else {
            return None;
        };
        match self.children.first().and_then(Node::qualified_name) {
            Some(scope) => Some(format!("{scope}::{name}")),
            None => Some(name.clone()),
        }
    }
}

/// A file the parser could not turn into a clean tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not parse {path}:{line}: {message}")]
pub struct ParseError {
    pub path: String,
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(path: &str, line: usize, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            line,
            message: message.into(),
        }
    }
}

/// Parses Ruby source and lowers it into a [`Node`] tree.
///
/// # Errors
/// Returns [`ParseError`] if the grammar fails to load or the source contains
/// syntax errors.
pub fn parse(path: &str, source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_ruby::language())
        .map_err(|e| ParseError::new(path, 0, e.to_string()))?;

    let Some(tree) = parser.parse(source, None) else {
        return Err(ParseError::new(path, 0, "parser returned no tree"));
    };

    let root = tree.root_node();
    if root.has_error() {
        let at = first_error(root).unwrap_or(root);
        let message = if at.is_missing() {
            format!("missing `{}`", at.kind())
        } else {
            "unexpected syntax".to_string()
        };
        return Err(ParseError::new(path, at.start_position().row + 1, message));
    }

    let lowering = Lowering {
        source: source.as_bytes(),
    };
    Ok(lowering.lower(root))
}

fn first_error(node: TsNode) -> Option<TsNode> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<TsNode> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

struct Lowering<'a> {
    source: &'a [u8],
}

impl Lowering<'_> {
    fn text(&self, node: TsNode) -> String {
        node.utf8_text(self.source).unwrap_or_default().to_string()
    }

    fn lower(&self, node: TsNode) -> Node {
        let line = node.start_position().row + 1;
        let lowered = match node.kind() {
            "class" => self.lower_class(node),
            "method" => Node::new(
                NodeKind::MethodDef {
                    name: node
                        .child_by_field_name("name")
                        .map(|n| self.text(n))
                        .unwrap_or_default(),
                },
                self.children_except(node, &["name", "parameters"]),
            ),
            "call" | "method_call" => self.lower_call(node),
            // Receiver-less, argument-less method call (or a local read).
            "identifier" => Node::call(Some(&self.text(node)), None, Vec::new(), None),
            "assignment" | "operator_assignment" => self.lower_assignment(node),
            "simple_symbol" | "symbol" | "delayed_symbol" => {
                let content = if node.named_child_count() == 0 {
                    Some(self.text(node).trim_start_matches(':').to_string())
                } else {
                    self.literal_content(node)
                };
                match content {
                    Some(s) => Node::new(NodeKind::SymbolLiteral(s), Vec::new()),
                    None => self.generic(node),
                }
            }
            "string" => match self.literal_content(node) {
                Some(s) => Node::new(NodeKind::StringLiteral(s), Vec::new()),
                None => self.generic(node),
            },
            "constant" => Node::constant(&self.text(node), None),
            "scope_resolution" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| self.text(n))
                    .unwrap_or_default();
                let scope = node.child_by_field_name("scope").map(|s| self.lower(s));
                Node::constant(&name, scope)
            }
            "block" | "do_block" => {
                Node::new(NodeKind::Block, self.children_except(node, &["parameters"]))
            }
            _ => self.generic(node),
        };
        lowered.at_line(line)
    }

    fn generic(&self, node: TsNode) -> Node {
        Node::new(NodeKind::Other, self.children_except(node, &[]))
    }

    fn lower_class(&self, node: TsNode) -> Node {
        let name = node.child_by_field_name("name").map(|n| {
            if n.kind() == "scope_resolution" {
                n.child_by_field_name("name")
                    .map(|inner| self.text(inner))
                    .unwrap_or_default()
            } else {
                self.text(n)
            }
        });
        Node::new(
            NodeKind::ClassDef { name },
            self.children_except(node, &["name"]),
        )
    }

    fn lower_call(&self, node: TsNode) -> Node {
        let method_field = node.child_by_field_name("method");
        // Older grammars nest `recv.meth` inside the `method` field of a `method_call`.
        let (receiver, method) = match method_field {
            Some(m) if m.kind() == "call" => (
                m.child_by_field_name("receiver"),
                m.child_by_field_name("method"),
            ),
            Some(m) if m.kind() == "scope_resolution" && node.kind() == "method_call" => (
                m.child_by_field_name("scope"),
                m.child_by_field_name("name"),
            ),
            m => (node.child_by_field_name("receiver"), m),
        };

        let mut arguments = Vec::new();
        if let Some(list) = node.child_by_field_name("arguments") {
            let mut cursor = list.walk();
            for arg in list.named_children(&mut cursor) {
                self.push_lowered(arg, &mut arguments);
            }
        }

        let method = method.map(|m| self.text(m));
        Node::call(
            method.as_deref(),
            receiver.map(|r| self.lower(r)),
            arguments,
            node.child_by_field_name("block").map(|b| self.lower(b)),
        )
    }

    fn lower_assignment(&self, node: TsNode) -> Node {
        let left = node.child_by_field_name("left");
        let right = node.child_by_field_name("right");
        match (left, right) {
            (Some(l), Some(r)) if matches!(l.kind(), "identifier" | "instance_variable") => {
                Node::new(NodeKind::Assignment, vec![self.lower(l), self.lower(r)])
            }
            _ => self.generic(node),
        }
    }

    /// Text of a string-like literal, or `None` when it interpolates.
    fn literal_content(&self, node: TsNode) -> Option<String> {
        let mut out = String::new();
        let mut cursor = node.walk();
        for part in node.named_children(&mut cursor) {
            match part.kind() {
                "interpolation" => return None,
                _ => out.push_str(&self.text(part)),
            }
        }
        Some(out)
    }

    fn children_except(&self, node: TsNode, skip: &[&str]) -> Vec<Node> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        if !cursor.goto_first_child() {
            return out;
        }
        loop {
            let child = cursor.node();
            let skipped = cursor.field_name().is_some_and(|f| skip.contains(&f));
            if child.is_named() && !skipped {
                self.push_lowered(child, &mut out);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        out
    }

    fn push_lowered(&self, node: TsNode, out: &mut Vec<Node>) {
        match node.kind() {
            "comment" => {}
            // Wrappers the grammar inserts around bodies; statements belong to the parent.
            "body_statement" | "block_body" => out.extend(self.children_except(node, &[])),
            _ => out.push(self.lower(node)),
        }
    }
}
