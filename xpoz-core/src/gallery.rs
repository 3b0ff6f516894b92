//! Ordered, deduplicated gallery list that grows page by page at either end.
//!
//! Nodes live in an arena and link to their neighbours by [`NodeId`], so the
//! chain never owns itself. The display order is a separate deque of ids,
//! which keeps prepending cheap while every existing link stays valid.

use std::collections::VecDeque;

use xpoz_contracts::id::Identifiable;

/// Stable handle to a node. Unlike a sequence index it does not shift when
/// records are prepended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn get(self) -> usize {
        self.0
    }
}

/// One record plus its non-owning neighbour links.
#[derive(Debug, Clone)]
pub struct GalleryNode<T: Identifiable> {
    id: NodeId,
    key: T::Key,
    item: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T: Identifiable> GalleryNode<T> {
    fn new(id: NodeId, item: T) -> Self {
        Self {
            id,
            key: item.key().clone(),
            item,
            prev: None,
            next: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &T::Key {
        &self.key
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

#[derive(Debug, Clone)]
pub struct GalleryList<T: Identifiable> {
    nodes: Vec<GalleryNode<T>>,
    order: VecDeque<NodeId>,
}

impl<T: Identifiable> Default for GalleryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> GalleryList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            order: VecDeque::new(),
        }
    }

    /// Add records after the current tail, keeping their input order.
    /// Records whose key is already present are skipped.
    pub fn append<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.size();
        let mut skipped = 0usize;

        for record in records {
            if self.exists(record.key()) {
                skipped += 1;
                continue;
            }

            let id = NodeId(self.nodes.len());
            let mut node = GalleryNode::new(id, record);
            if let Some(&tail) = self.order.back() {
                self.nodes[tail.0].next = Some(id);
                node.prev = Some(tail);
            }
            self.nodes.push(node);
            self.order.push_back(id);
        }

        tracing::debug!(
            added = self.size() - before,
            skipped,
            size = self.size(),
            "gallery append"
        );
        self
    }

    /// Add records before the current head. The batch keeps its input order
    /// at the front: prepending `[a, b, c]` yields `a, b, c, ...`.
    pub fn prepend<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.size();
        let mut skipped = 0usize;
        let batch: Vec<T> = records.into_iter().collect();

        // Walking the batch backwards and linking each record as the new
        // head preserves input order without a reversal pass.
        for record in batch.into_iter().rev() {
            if self.exists(record.key()) {
                skipped += 1;
                continue;
            }

            let id = NodeId(self.nodes.len());
            let mut node = GalleryNode::new(id, record);
            if let Some(&head) = self.order.front() {
                self.nodes[head.0].prev = Some(id);
                node.next = Some(head);
            }
            self.nodes.push(node);
            self.order.push_front(id);
        }

        tracing::debug!(
            added = self.size() - before,
            skipped,
            size = self.size(),
            "gallery prepend"
        );
        self
    }

    /// Membership by linear scan over the cached keys.
    pub fn exists(&self, key: &T::Key) -> bool {
        self.nodes.iter().any(|node| &node.key == key)
    }

    pub fn size(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Sequence position of the record with `key`.
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.order
            .iter()
            .position(|id| &self.nodes[id.0].key == key)
    }

    pub fn node(&self, index: usize) -> Option<&GalleryNode<T>> {
        self.order.get(index).map(|id| &self.nodes[id.0])
    }

    pub fn node_by_id(&self, id: NodeId) -> Option<&GalleryNode<T>> {
        self.nodes.get(id.0)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.node(index).map(GalleryNode::item)
    }

    pub fn first(&self) -> Option<&GalleryNode<T>> {
        self.node(0)
    }

    pub fn last(&self) -> Option<&GalleryNode<T>> {
        self.size().checked_sub(1).and_then(|i| self.node(i))
    }

    /// Neighbour after the node at `index`, following its `next` link.
    pub fn next_of(&self, index: usize) -> Option<&GalleryNode<T>> {
        self.node(index)?.next.and_then(|id| self.node_by_id(id))
    }

    /// Neighbour before the node at `index`, following its `prev` link.
    pub fn prev_of(&self, index: usize) -> Option<&GalleryNode<T>> {
        self.node(index)?.prev.and_then(|id| self.node_by_id(id))
    }

    /// Records in sequence order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.order.iter().map(|id| &self.nodes[id.0].item)
    }

    /// Nodes reached by following `next` links from the head.
    pub fn iter_forward(&self) -> Links<'_, T> {
        Links {
            list: self,
            cursor: self.order.front().copied(),
            forward: true,
        }
    }

    /// Nodes reached by following `prev` links from the tail.
    pub fn iter_backward(&self) -> Links<'_, T> {
        Links {
            list: self,
            cursor: self.order.back().copied(),
            forward: false,
        }
    }
}

/// Iterator that walks the link chain rather than the sequence.
#[derive(Debug)]
pub struct Links<'a, T: Identifiable> {
    list: &'a GalleryList<T>,
    cursor: Option<NodeId>,
    forward: bool,
}

impl<'a, T: Identifiable> Iterator for Links<'a, T> {
    type Item = &'a GalleryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node_by_id(self.cursor?)?;
        self.cursor = if self.forward { node.next } else { node.prev };
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl Identifiable for Item {
        type Key = &'static str;

        fn key(&self) -> &&'static str {
            &self.0
        }
    }

    fn keys(list: &GalleryList<Item>) -> Vec<&'static str> {
        list.iter().map(|i| i.0).collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: GalleryList<Item> = GalleryList::new();
        assert!(list.is_empty());
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert_eq!(list.iter_forward().count(), 0);
    }

    #[test]
    fn append_keeps_input_order() {
        let mut list = GalleryList::new();
        list.append([Item("a"), Item("b")]).append([Item("c")]);
        assert_eq!(keys(&list), ["a", "b", "c"]);
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn prepend_keeps_input_order_at_front() {
        let mut list = GalleryList::new();
        list.append([Item("x")]);
        list.prepend([Item("a"), Item("b"), Item("c")]);
        assert_eq!(keys(&list), ["a", "b", "c", "x"]);
    }

    #[test]
    fn duplicates_are_skipped_without_relinking() {
        let mut list = GalleryList::new();
        list.append([Item("a"), Item("b")]);
        let head_next = list.first().and_then(GalleryNode::next);

        list.append([Item("a")]).prepend([Item("b")]);

        assert_eq!(list.size(), 2);
        assert_eq!(list.first().and_then(GalleryNode::next), head_next);
        assert!(list.first().and_then(GalleryNode::prev).is_none());
        assert!(list.last().and_then(GalleryNode::next).is_none());
    }

    #[test]
    fn duplicates_inside_one_batch_are_skipped() {
        let mut list = GalleryList::new();
        list.append([Item("a"), Item("a"), Item("b")]);
        list.prepend([Item("c"), Item("d"), Item("c")]);
        assert_eq!(keys(&list), ["d", "c", "a", "b"]);
    }

    #[test]
    fn empty_batches_are_noops() {
        let mut list: GalleryList<Item> = GalleryList::new();
        list.append([]).prepend([]);
        assert!(list.is_empty());
    }

    #[test]
    fn neighbour_lookup_follows_links() {
        let mut list = GalleryList::new();
        list.append([Item("b"), Item("c")]).prepend([Item("a")]);

        assert_eq!(list.next_of(0).map(|n| n.item().0), Some("b"));
        assert_eq!(list.prev_of(2).map(|n| n.item().0), Some("b"));
        assert!(list.prev_of(0).is_none());
        assert!(list.next_of(2).is_none());
        assert_eq!(list.position(&"c"), Some(2));
        assert!(list.exists(&"a"));
        assert!(!list.exists(&"z"));
    }
}
