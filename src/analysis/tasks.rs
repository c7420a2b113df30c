//! Finds rake `task` declarations that never call a usecase.

use super::ast::{Node, NodeKind};
use super::detector::calls_usecase;
use super::FileContext;
use crate::types::Violation;

/// Scans every `task :name` / `task "name"` call in `tree`, including those
/// nested in `namespace` blocks.
#[must_use]
pub fn scan(tree: &Node, ctx: &FileContext) -> Vec<Violation> {
    let mut out = Vec::new();
    visit(tree, ctx, &mut out);
    out
}

fn visit(node: &Node, ctx: &FileContext, out: &mut Vec<Violation>) {
    if let Some(task_name) = task_name(node) {
        // A task without a block has nothing that could call a usecase.
        if !ctx.exclusions.excludes_task(ctx.file, task_name) && !calls_usecase(node.block()) {
            out.push(Violation::TaskWithoutUsecase {
                file: ctx.file.to_string(),
                task_name: task_name.to_string(),
                line: node.line.unwrap_or_default(),
            });
        }
    }
    for child in &node.children {
        visit(child, ctx, out);
    }
}

/// Name of a `task` declaration whose first argument is a literal.
/// Computed names and `task name: :deps` hashes are not recognized.
fn task_name(node: &Node) -> Option<&str> {
    let NodeKind::Call {
        method: Some(method),
        ..
    } = &node.kind
    else {
        return None;
    };
    if method != "task" {
        return None;
    }
    match &node.arguments().first()?.kind {
        NodeKind::SymbolLiteral(name) | NodeKind::StringLiteral(name) => Some(name),
        _ => None,
    }
}
