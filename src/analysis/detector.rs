//! Decides whether a subtree invokes a usecase.

use super::ast::{Node, NodeKind};
use super::naming::references_usecase;

/// True if anything under `node` calls a usecase. An absent node never does.
#[must_use]
pub fn calls_usecase(node: Option<&Node>) -> bool {
    node.is_some_and(search)
}

fn search(node: &Node) -> bool {
    match &node.kind {
        NodeKind::Call { method, .. } => {
            if method.as_deref().is_some_and(references_usecase) {
                return true;
            }
            if receiver_is_usecase_constant(node) {
                return true;
            }
        }
        // The target can't call anything; only the value matters.
        NodeKind::Assignment => return node.assigned_value().is_some_and(search),
        _ => {}
    }
    node.children.iter().any(search)
}

fn receiver_is_usecase_constant(call: &Node) -> bool {
    call.receiver()
        .and_then(Node::qualified_name)
        .is_some_and(|name| references_usecase(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(kind: NodeKind) -> Node {
        Node::new(kind, Vec::new())
    }

    fn body(statements: Vec<Node>) -> Node {
        Node::new(NodeKind::MethodDef { name: "x".into() }, statements)
    }

    #[test]
    fn absent_and_empty_do_not_call() {
        assert!(!calls_usecase(None));
        assert!(!calls_usecase(Some(&body(vec![]))));
    }

    #[test]
    fn method_name_match() {
        let call = Node::call(Some("create_order_usecase"), None, vec![], None);
        assert!(calls_usecase(Some(&body(vec![call]))));
    }

    #[test]
    fn constant_receiver_match() {
        // CreateOrderUsecase.new.call
        let new = Node::call(Some("new"), Some(Node::constant("CreateOrderUsecase", None)), vec![], None);
        let call = Node::call(Some("call"), Some(new), vec![], None);
        assert!(calls_usecase(Some(&call)));
    }

    #[test]
    fn nested_constant_receiver_match() {
        let scoped = Node::constant("CreateUsecase", Some(Node::constant("Orders", None)));
        let call = Node::call(Some("call"), Some(scoped), vec![], None);
        assert!(calls_usecase(Some(&call)));
    }

    #[test]
    fn constant_outside_receiver_position_is_ignored() {
        let arg = Node::constant("CreateOrderUsecase", None);
        let call = Node::call(Some("run"), None, vec![arg], None);
        assert!(!calls_usecase(Some(&call)));
    }

    #[test]
    fn assignment_checks_value_only() {
        let target = Node::call(Some("result_usecase"), None, vec![], None);
        let value = leaf(NodeKind::StringLiteral("x".into()));
        let assign = Node::new(NodeKind::Assignment, vec![target, value]);
        assert!(!calls_usecase(Some(&assign)));

        let target = Node::call(Some("result"), None, vec![], None);
        let value = Node::call(Some("call"), Some(Node::constant("FooUsecase", None)), vec![], None);
        let assign = Node::new(NodeKind::Assignment, vec![target, value]);
        assert!(calls_usecase(Some(&assign)));
    }

    #[test]
    fn render_is_not_a_usecase_call() {
        let render = Node::call(
            Some("render"),
            None,
            vec![leaf(NodeKind::SymbolLiteral("index".into()))],
            None,
        );
        let method = body(vec![render]);
        assert!(!calls_usecase(Some(&method)));
        // Same answer on repeat.
        assert!(!calls_usecase(Some(&method)));
    }

    #[test]
    fn match_inside_block_is_found() {
        let inner = Node::call(Some("perform_usecase"), None, vec![], None);
        let block = Node::new(NodeKind::Block, vec![inner]);
        let each = Node::call(Some("each"), Some(Node::call(Some("items"), None, vec![], None)), vec![], Some(block));
        assert!(calls_usecase(Some(&body(vec![each]))));
    }
}
