//! Naming heuristics for controllers, actions and usecase references.

/// Rails' RESTful action names. Always treated as actions.
pub const CANONICAL_ACTIONS: [&str; 7] = ["index", "show", "new", "create", "edit", "update", "destroy"];

#[must_use]
pub fn is_controller_class(name: &str) -> bool {
    name.ends_with("Controller")
}

/// Whether a controller method looks like a public action.
///
/// Loose on purpose: anything that isn't `_private_looking` or a `predicate?`
/// counts.
#[must_use]
pub fn is_plausible_action(name: &str) -> bool {
    if CANONICAL_ACTIONS.contains(&name) {
        return true;
    }
    !name.starts_with('_') && !name.ends_with('?')
}

/// Matches both `create_order_usecase` and `CreateOrderUsecase` styles.
#[must_use]
pub fn references_usecase(identifier: &str) -> bool {
    identifier.ends_with("usecase") || identifier.contains("Usecase")
}
