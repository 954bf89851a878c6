use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Stable identity of a node: the address of its shared payload.
///
/// `Value` handles may be cloned and dropped freely; the payload address is
/// what the traversal keys on, so a node reached through several handles is
/// still visited once.
pub(crate) type NodeId = *const RefCell<ValueData>;

/// Builds a depth-first post-order over every node reachable from `root`
/// via operand edges: each node appears strictly after all of its operands
/// and strictly before every node that depends on it. `Value::backward`
/// walks the result in reverse.
///
/// Iterative with an explicit stack, so deep chains cannot overflow the
/// call stack. The visited set collapses duplicate edges to shared
/// operands: every node is appended exactly once regardless of fan-out.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut ordering: Vec<Value> = Vec::new();
    // (node, expanded): a node is first expanded (operands pushed above it),
    // then appended once all of its operands have been emitted.
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            ordering.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        stack.push((node.clone(), true));
        if let Some(grad_fn) = node.grad_fn() {
            for operand in grad_fn.inputs() {
                if !visited.contains(&operand.node_id()) {
                    stack.push((operand, false));
                }
            }
        }
    }

    ordering
}
