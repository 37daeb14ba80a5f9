use std::fmt;

/// Read/patch access to a labelled, nested form tree.
///
/// The locator only needs this much of a node, so any host tree shape can
/// be searched by implementing it.
pub trait FormElement {
    /// Control kind (`"textfield"`, `"checkbox"`, ...); `None` for plain
    /// grouping levels.
    fn kind(&self) -> Option<&str>;

    fn title(&self) -> Option<&str>;

    fn set_title(&mut self, title: String);

    /// Literal value carried by the node, e.g. the text of an `html_tag`.
    fn value(&self) -> Option<&str>;

    /// Children in declaration order.
    fn children(&self) -> impl Iterator<Item = (&str, &Self)>;

    fn child(&self, key: &str) -> Option<&Self>;

    fn child_mut(&mut self, key: &str) -> Option<&mut Self>;

    /// The title if it is present and non-empty.
    fn label(&self) -> Option<&str> {
        self.title().filter(|t| !t.is_empty())
    }

    /// Text of a `title` child rendered as an `html_tag` heading.
    fn heading_title(&self) -> Option<&str> {
        let heading = self.child("title")?;
        if heading.kind() != Some("html_tag") {
            return None;
        }
        heading.value().filter(|v| !v.is_empty())
    }
}

/// Child keys leading from a search root to one of its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn new(keys: Vec<String>) -> Self {
        Self(keys)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn resolve<'a, T: FormElement>(&self, root: &'a T) -> Option<&'a T> {
        self.0.iter().try_fold(root, |node, key| node.child(key))
    }

    pub fn resolve_mut<'a, T: FormElement>(&self, root: &'a mut T) -> Option<&'a mut T> {
        self.0.iter().try_fold(root, |node, key| node.child_mut(key))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}
