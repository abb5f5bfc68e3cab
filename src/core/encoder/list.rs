//! List item conversion
//!
//! The host has no list container: consecutive LIST_ITEM siblings that share
//! a list id form one list, and each item carries its own nesting level. An
//! item opens an environment when it starts a list or goes deeper than its
//! predecessor, and closes environments down to its successor's level when
//! it ends a list or the successor is shallower. Closing pops the stack of
//! opened environments, so mixed itemize/enumerate nesting closes correctly.

use super::context::{EncodeState, NodeCx};
use super::markup::encode_children;
use crate::data::environment_for_glyph;
use crate::model::{ListItem, Node};
use crate::utils::error::{ConversionResult, WarningKind};

/// The sibling as a list item, if it belongs to the same list.
fn same_list_sibling<'a>(item: &ListItem, sibling: Option<&'a Node>) -> Option<&'a ListItem> {
    sibling
        .and_then(Node::as_list_item)
        .filter(|other| item.same_list(other))
}

/// Encode a LIST_ITEM node.
pub fn encode_list_item<'a>(
    item: &'a ListItem,
    node: &'a Node,
    cx: NodeCx<'a>,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let env = environment_for_glyph(item.glyph.as_str());
    let prev = same_list_sibling(item, cx.prev);
    let next = same_list_sibling(item, cx.next);
    let mut result = String::new();

    if prev.map_or(true, |p| p.nesting < item.nesting) {
        result.push_str(&env.begin());
        state.push_list(env);
    }

    let content = encode_children(&item.children, Some(node), state)?;
    result.push_str("\\item ");
    result.push_str(&content);
    result.push('\n');

    if next.map_or(true, |n| n.nesting < item.nesting) {
        // -1 when the list ends here
        let next_level = next.map_or(-1, |n| i64::from(n.nesting));
        let expected = (i64::from(item.nesting) - next_level).max(0) as usize;
        let target_depth = (next_level + 1) as usize;
        let available = state.list_depth().saturating_sub(target_depth);

        if expected > available {
            state.warn(
                WarningKind::ListStackUnderflow,
                format!(
                    "list '{}' item at level {} closes {} environment(s) but only {} are open",
                    item.list_id, item.nesting, expected, available
                ),
            );
        }
        for _ in 0..available {
            if let Some(open) = state.pop_list() {
                result.push_str(&open.end());
            }
        }
    }

    Ok(result)
}
