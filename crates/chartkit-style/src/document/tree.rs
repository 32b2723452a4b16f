//! The chart element tree.

use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;
use crate::rules::StyleSheet;
use crate::selector::{ElementMatchContext, ElementTree};
use crate::{Error, Result};

use super::ChartElement;

new_key_type! {
    /// Stable handle of an element in a [`ChartDocument`].
    ///
    /// Handles stay valid as the tree changes and become invalid when the
    /// element is removed.
    pub struct ElementId;
}

#[derive(Debug, Clone)]
struct Node {
    element: ChartElement,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// A chart definition as a tree of styled elements.
///
/// The document always has a root. Children keep insertion order, which is
/// the document order used for traversal and for sibling navigation.
///
/// # Example
///
/// ```
/// use chartkit_style::document::{ChartDocument, ChartElement};
///
/// let mut document = ChartDocument::new(ChartElement::new("Chart"));
/// let root = document.root();
/// let plot = document.append_child(root, ChartElement::new("Plot")).unwrap();
/// let axis = document.append_child(plot, ChartElement::new("Axis")).unwrap();
///
/// assert_eq!(document.first_child(root), Some(plot));
/// assert_eq!(document.parent(axis), Some(plot));
/// assert_eq!(document.traverse(), vec![root, plot, axis]);
/// ```
#[derive(Debug, Clone)]
pub struct ChartDocument {
    nodes: SlotMap<ElementId, Node>,
    root: ElementId,
    stylesheets: Vec<StyleSheet>,
}

impl ChartDocument {
    /// Create a document with a root element.
    pub fn new(root: ChartElement) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            element: root,
            parent: None,
            children: vec![],
        });
        Self {
            nodes,
            root,
            stylesheets: vec![],
        }
    }

    /// The root element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of elements, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a document has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if an element exists in the document.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Append an element as the last child of `parent`.
    pub fn append_child(&mut self, parent: ElementId, element: ChartElement) -> Result<ElementId> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::InvalidElementId);
        }

        let id = self.nodes.insert(Node {
            element,
            parent: Some(parent),
            children: vec![],
        });
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        tracing::trace!(target: targets::STYLE, ?id, ?parent, "appended element");
        Ok(id)
    }

    /// Remove an element and all its descendants.
    pub fn remove(&mut self, id: ElementId) -> Result<()> {
        if id == self.root {
            return Err(Error::RootElement);
        }
        let descendants = self.descendants(id)?;

        if let Some(parent) = self.nodes.get(id).and_then(|n| n.parent)
            && let Some(parent) = self.nodes.get_mut(parent)
        {
            parent.children.retain(|&child| child != id);
        }

        for descendant in descendants {
            self.nodes.remove(descendant);
        }
        self.nodes.remove(id);
        Ok(())
    }

    /// Get an element.
    pub fn element(&self, id: ElementId) -> Option<&ChartElement> {
        self.nodes.get(id).map(|n| &n.element)
    }

    /// Get an element mutably.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut ChartElement> {
        self.nodes.get_mut(id).map(|n| &mut n.element)
    }

    /// Parent of an element; `None` for the root or a removed element.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Children of an element in document order.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// First child of an element.
    pub fn first_child(&self, id: ElementId) -> Option<ElementId> {
        self.children(id).first().copied()
    }

    /// The sibling that follows an element in document order.
    pub fn next_sibling(&self, id: ElementId) -> Option<ElementId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.get(index + 1).copied()
    }

    /// All descendants of an element in document order, excluding itself.
    pub fn descendants(&self, id: ElementId) -> Result<Vec<ElementId>> {
        if !self.nodes.contains_key(id) {
            return Err(Error::InvalidElementId);
        }
        let mut result = Vec::new();
        self.collect_descendants(id, &mut result);
        Ok(result)
    }

    fn collect_descendants(&self, id: ElementId, result: &mut Vec<ElementId>) {
        for &child in self.children(id) {
            result.push(child);
            self.collect_descendants(child, result);
        }
    }

    /// Every element in document order, starting at the root.
    pub fn traverse(&self) -> Vec<ElementId> {
        let mut result = vec![self.root];
        self.collect_descendants(self.root, &mut result);
        result
    }

    /// Find the first element in document order with the given id.
    pub fn find_by_id(&self, element_id: &str) -> Option<ElementId> {
        self.traverse()
            .into_iter()
            .find(|&id| self.element(id).and_then(ChartElement::id) == Some(element_id))
    }

    /// Every element with the given tag, in document order.
    pub fn elements_by_tag(&self, tag: &str) -> Vec<ElementId> {
        self.traverse()
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| e.tag() == tag))
            .collect()
    }

    /// Attach a stylesheet to the document.
    pub fn add_stylesheet(&mut self, stylesheet: StyleSheet) {
        self.stylesheets.push(stylesheet);
    }

    /// Stylesheets attached to the document.
    pub fn stylesheets(&self) -> &[StyleSheet] {
        &self.stylesheets
    }
}

impl ElementTree for ChartDocument {
    type Node = ElementId;

    fn match_context(&self, node: ElementId) -> ElementMatchContext<'_> {
        match self.element(node) {
            Some(element) => ElementMatchContext {
                tag: element.tag(),
                id: element.id(),
                classes: element.classes(),
            },
            None => ElementMatchContext::default(),
        }
    }

    fn parent_of(&self, node: ElementId) -> Option<ElementId> {
        self.parent(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ChartDocument, Vec<ElementId>) {
        let mut document = ChartDocument::new(ChartElement::new("Chart").with_id("main"));
        let root = document.root();
        let plot = document.append_child(root, ChartElement::new("Plot")).unwrap();
        let a = document.append_child(plot, ChartElement::new("Series").with_id("a")).unwrap();
        let b = document.append_child(plot, ChartElement::new("Series").with_id("b")).unwrap();
        let axis = document.append_child(root, ChartElement::new("Axis")).unwrap();
        (document, vec![root, plot, a, b, axis])
    }

    #[test]
    fn navigation() {
        let (document, ids) = sample();
        let [root, plot, a, b, axis] = ids[..] else {
            panic!("unexpected ids");
        };

        assert_eq!(document.len(), 5);
        assert_eq!(document.first_child(root), Some(plot));
        assert_eq!(document.next_sibling(plot), Some(axis));
        assert_eq!(document.next_sibling(a), Some(b));
        assert_eq!(document.next_sibling(b), None);
        assert_eq!(document.next_sibling(root), None);
        assert_eq!(document.parent(a), Some(plot));
        assert_eq!(document.parent(root), None);
    }

    #[test]
    fn traversal_is_document_order() {
        let (document, ids) = sample();
        assert_eq!(document.traverse(), ids);
        assert_eq!(document.descendants(ids[1]).unwrap(), vec![ids[2], ids[3]]);
        assert_eq!(document.elements_by_tag("Series"), vec![ids[2], ids[3]]);
        assert_eq!(document.find_by_id("b"), Some(ids[3]));
        assert_eq!(document.find_by_id("missing"), None);
    }

    #[test]
    fn remove_cascades() {
        let (mut document, ids) = sample();
        document.remove(ids[1]).unwrap();

        assert_eq!(document.len(), 2);
        assert!(!document.contains(ids[2]));
        assert_eq!(document.children(ids[0]), &[ids[4]]);
        assert!(matches!(document.remove(ids[2]), Err(Error::InvalidElementId)));
        assert!(matches!(document.remove(ids[0]), Err(Error::RootElement)));
    }

    #[test]
    fn append_to_removed_parent_fails() {
        let (mut document, ids) = sample();
        document.remove(ids[4]).unwrap();
        assert!(matches!(
            document.append_child(ids[4], ChartElement::new("Label")),
            Err(Error::InvalidElementId)
        ));
    }
}
