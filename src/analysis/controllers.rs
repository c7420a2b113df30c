//! Finds controller actions that never call a usecase.

use super::ast::{Node, NodeKind};
use super::detector::calls_usecase;
use super::naming::{is_controller_class, is_plausible_action};
use super::FileContext;
use crate::types::Violation;

/// Scans every controller class in `tree`, at any nesting depth.
///
/// Violations come out in source order: classes first, then methods.
#[must_use]
pub fn scan(tree: &Node, ctx: &FileContext) -> Vec<Violation> {
    let mut out = Vec::new();
    visit(tree, ctx, &mut out);
    out
}

fn visit(node: &Node, ctx: &FileContext, out: &mut Vec<Violation>) {
    if let NodeKind::ClassDef { name: Some(name) } = &node.kind {
        if is_controller_class(name) {
            check_actions(node, ctx, out);
        }
    }
    for child in &node.children {
        visit(child, ctx, out);
    }
}

/// Only direct method children count; defs nested in blocks are not actions.
fn check_actions(class: &Node, ctx: &FileContext, out: &mut Vec<Violation>) {
    for method in &class.children {
        let NodeKind::MethodDef { name } = &method.kind else {
            continue;
        };
        if !is_plausible_action(name) || ctx.exclusions.excludes_action(ctx.file, name) {
            continue;
        }
        if !calls_usecase(Some(method)) {
            out.push(Violation::ActionWithoutUsecase {
                file: ctx.file.to_string(),
                action_name: name.clone(),
                line: method.line.unwrap_or_default(),
            });
        }
    }
}
