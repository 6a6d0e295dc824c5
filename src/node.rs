use crate::uid::Uid;

/// One record of the node table: a payload plus the uids of its neighbors.
///
/// A node starts out orphaned, with both links unset, and joins the chain
/// only when the list splices it in. Sentinels carry no payload
/// (`value: None`); every user node carries one, immutable after creation.
#[derive(Debug)]
pub struct Node<T> {
    uid: Uid,
    prev: Option<Uid>,
    next: Option<Uid>,
    value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(uid: Uid, value: Option<T>) -> Node<T> {
        Node {
            uid,
            prev: None,
            next: None,
            value,
        }
    }

    /// The uid this node is stored under. Assigned once, never reassigned.
    pub fn uid(&self) -> Uid {
        self.uid
    }

    /// The payload. `None` only for the head and tail sentinels.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Uid of the preceding node, or `None` for the head sentinel and for
    /// orphans not yet spliced into the chain.
    pub fn prev(&self) -> Option<Uid> {
        self.prev
    }

    /// Uid of the following node, or `None` for the tail sentinel and for
    /// orphans.
    pub fn next(&self) -> Option<Uid> {
        self.next
    }

    /// Is this a payload-carrying user node (not a sentinel)?
    pub fn is_user(&self) -> bool {
        self.value.is_some()
    }

    // The setters overwrite unconditionally and validate nothing; whether a
    // uid actually names a table entry is the list's concern.

    pub(crate) fn set_prev(&mut self, prev: Uid) {
        self.prev = Some(prev);
    }

    pub(crate) fn set_next(&mut self, next: Uid) {
        self.next = Some(next);
    }
}
