use std::collections::HashSet;

use crate::{Error, Value};

/// Verify that the subtree under `root` contains no reference cycle.
///
/// Runs a depth-first traversal over composite children, keeping the
/// identities of the composite nodes on the active path in an ancestor set.
/// Identity is the heap address of the shared node, never value equality, so
/// two distinct but equal-valued nodes are not a cycle, and the same node
/// referenced from two non-overlapping branches (DAG sharing) passes.
///
/// Called once per top-level encode of a composite root; the ancestor set is
/// allocated fresh here and discarded on return.
pub(crate) fn ensure_acyclic(root: &Value) -> Result<(), Error> {
    if !root.is_composite() {
        return Ok(());
    }
    let mut ancestors = HashSet::new();
    if has_back_edge(root, &mut ancestors) {
        return Err(Error::CircularReference { kind: root.kind() });
    }
    Ok(())
}

/// DFS step. Scalars are terminal; `ancestors` holds the identities of the
/// composite nodes on the path from the root down to (and including)
/// `value`'s parent.
fn has_back_edge(value: &Value, ancestors: &mut HashSet<usize>) -> bool {
    let Some(id) = value.composite_id() else {
        return false;
    };
    ancestors.insert(id);

    let mut found = false;
    for child in value.composite_children() {
        let on_active_path = child
            .composite_id()
            .is_some_and(|child_id| ancestors.contains(&child_id));
        if on_active_path || has_back_edge(&child, ancestors) {
            found = true;
            break;
        }
    }

    ancestors.remove(&id);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, List};

    #[test]
    fn scalar_roots_are_trivially_acyclic() {
        ensure_acyclic(&Value::Integer(7)).unwrap();
        ensure_acyclic(&Value::from("bytes")).unwrap();
    }

    #[test]
    fn self_containing_list_is_rejected() {
        let list = List::new();
        list.push(Value::List(list.clone()));
        let err = ensure_acyclic(&Value::List(list)).unwrap_err();
        assert!(matches!(err, Error::CircularReference { .. }));
    }

    #[test]
    fn equal_valued_distinct_nodes_are_not_a_cycle() {
        let outer = List::new();
        outer.push(Value::List(List::new()));
        outer.push(Value::List(List::new()));
        ensure_acyclic(&Value::List(outer)).unwrap();
    }

    #[test]
    fn diamond_sharing_is_accepted() {
        let shared = Dictionary::new();
        shared.insert("k", 1i64);
        let root = List::new();
        root.push(Value::Dictionary(shared.clone()));
        root.push(Value::Dictionary(shared));
        ensure_acyclic(&Value::List(root)).unwrap();
    }
}
