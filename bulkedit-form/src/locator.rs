//! Locates the real input control inside a field widget.
//!
//! Widgets nest their input under any number of wrapper levels, and the
//! human-readable title often sits on a wrapper rather than on the input.
//! The search walks children depth-first in declaration order, carries the
//! most recent non-empty title down with it, and stops at the first node
//! that declares a control kind.
//!
//! A title picked up from a child stays in effect for the children after
//! it at the same level, so an earlier sibling's title can label a later
//! untitled control.

use crate::{FormElement, NodePath};

/// Result of a successful search: where the control is and which title it
/// inherits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    path: NodePath,
    inherited_title: Option<String>,
}

impl Located {
    /// Path from the search root to the control.
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// Title to backfill onto the control, set only when the control has
    /// none of its own.
    pub fn inherited_title(&self) -> Option<&str> {
        self.inherited_title.as_deref()
    }

    /// Resolves the control inside `root`, backfilling its title.
    ///
    /// `root` must be the node the search ran on.
    pub fn resolve<'a, T: FormElement>(&self, root: &'a mut T) -> Option<&'a mut T> {
        let control = self.path.resolve_mut(root)?;
        if control.label().is_none() {
            if let Some(title) = &self.inherited_title {
                control.set_title(title.clone());
            }
        }
        Some(control)
    }
}

/// Finds the first descendant of `node` that declares a control kind.
///
/// `title` seeds the inherited title. Returns `None` when the subtree holds
/// no control.
pub fn find_form_element<T: FormElement>(node: &T, title: Option<&str>) -> Option<Located> {
    let mut path = Vec::new();
    search(node, title, &mut path)
}

/// Search plus backfill in one step.
pub fn locate_mut<'a, T: FormElement>(node: &'a mut T, title: Option<&str>) -> Option<&'a mut T> {
    let located = find_form_element(&*node, title)?;
    located.resolve(node)
}

fn search<'a, T: FormElement>(
    node: &'a T,
    mut title: Option<&'a str>,
    path: &mut Vec<String>,
) -> Option<Located> {
    for (key, child) in node.children() {
        if let Some(own) = child.label().or_else(|| child.heading_title()) {
            title = Some(own);
        }

        path.push(key.to_string());
        if child.kind().is_some() {
            let inherited_title = match child.label() {
                Some(_) => None,
                None => title.map(str::to_owned),
            };
            return Some(Located {
                path: NodePath::new(path.clone()),
                inherited_title,
            });
        }
        if let Some(found) = search(child, title, path) {
            return Some(found);
        }
        path.pop();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormNode;

    #[test]
    fn empty_tree_has_no_control() {
        assert_eq!(find_form_element(&FormNode::group(), None), None);
    }

    #[test]
    fn root_itself_is_not_a_candidate() {
        let root = FormNode::of_kind("textfield").with_title("Title");
        assert_eq!(find_form_element(&root, None), None);
    }

    #[test]
    fn seed_title_used_when_nothing_closer() {
        let root = FormNode::group().with_child("value", FormNode::of_kind("textfield"));
        let found = find_form_element(&root, Some("Seed")).unwrap();
        assert_eq!(found.inherited_title(), Some("Seed"));
    }
}
