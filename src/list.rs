use indexmap::IndexMap;

use crate::node::Node;
use crate::uid::{Uid, UidAllocator};

/// Errors for list operations.
///
/// Lookups that merely miss are not errors: [`UidList::node`] returns
/// `Ok(None)` and [`UidList::delete_node`] returns `Ok(false)` for a uid
/// with no table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// [`Uid::NIL`] was passed where a real uid is required.
    NilUid,
    /// A splice referenced a uid with no entry in this list's table. Also
    /// returned when the `after` anchor of [`UidList::add_next`] is an
    /// orphan, since an orphan has no successor to splice in front of.
    UnknownUid,
    /// The operation would splice in front of the tail sentinel, re-splice
    /// a sentinel, or delete one.
    Sentinel,
    /// [`UidList::add_next`] was given a node that already has a link set;
    /// only orphans can be spliced in.
    Spliced,
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::NilUid => f.write_str("a non-nil uid is required"),
            ListError::UnknownUid => f.write_str("uid does not name a usable node in this list"),
            ListError::Sentinel => f.write_str("cannot splice at or delete a sentinel"),
            ListError::Spliced => f.write_str("node is already linked into the chain"),
        }
    }
}

impl std::error::Error for ListError {}

/// A doubly linked list whose nodes live in a flat uid-indexed table.
///
/// Nodes never hold references to each other, only [`Uid`]s resolved through
/// the table, so the structure contains no reference cycles and dropping the
/// list drops every node in one step. Two permanent sentinel nodes bracket
/// the chain; iteration starts after the head sentinel and stops at the tail
/// sentinel, so neither is ever visible to callers.
///
/// Creating a node and linking it are separate steps: [`UidList::create_node`]
/// registers an orphan, and only [`UidList::add_first`] or
/// [`UidList::add_next`] splice it into traversal order.
///
/// # Examples
/// ```
/// use uidlist::UidList;
///
/// let mut list = UidList::new();
/// let a = list.create_node("a");
/// let b = list.create_node("b");
/// list.add_first(a).unwrap();
/// list.add_next(a, b).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Debug)]
pub struct UidList<T> {
    table: IndexMap<Uid, Node<T>>,
    head: Uid,
    tail: Uid,
    len: usize,
    allocator: UidAllocator,
}

impl<T> Default for UidList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UidList<T> {
    /// Create an empty list with a sequential uid allocator.
    pub fn new() -> Self {
        Self::with_allocator(UidAllocator::default())
    }

    /// Create an empty list drawing uids from the given allocator.
    pub fn with_allocator(allocator: UidAllocator) -> Self {
        let mut list = UidList {
            table: IndexMap::new(),
            head: Uid::NIL,
            tail: Uid::NIL,
            len: 0,
            allocator,
        };
        list.head = list.register(None);
        list.tail = list.register(None);
        let (head, tail) = (list.head, list.tail);
        list.set_next(head, tail).expect("sentinel uids are non-nil");
        list.set_prev(tail, head).expect("sentinel uids are non-nil");
        list
    }

    /// Uid of the head sentinel.
    pub fn head(&self) -> Uid {
        self.head
    }

    /// Uid of the tail sentinel.
    pub fn tail(&self) -> Uid {
        self.tail
    }

    /// Number of user nodes currently spliced into the chain. Orphans are
    /// not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register a new orphan node holding `value` and return its uid.
    ///
    /// The node is stored in the table but linked to nothing; it stays
    /// invisible to iteration until spliced in with [`UidList::add_first`]
    /// or [`UidList::add_next`].
    pub fn create_node(&mut self, value: T) -> Uid {
        self.register(Some(value))
    }

    /// Resolve a uid to its node, or `Ok(None)` if the table has no entry.
    pub fn node(&self, uid: Uid) -> Result<Option<&Node<T>>, ListError> {
        Self::require(uid)?;
        Ok(self.table.get(&uid))
    }

    /// Payload shorthand: the value stored under `uid`, if it names a user
    /// node. Sentinels and unknown uids both give `None`.
    pub fn get(&self, uid: Uid) -> Option<&T> {
        self.table.get(&uid).and_then(|node| node.value())
    }

    /// Unlink the node named by `uid` and remove it from the table.
    ///
    /// A spliced node's neighbors close ranks around it and `len` drops by
    /// one; an orphan is simply dropped from the table. Returns `Ok(false)`
    /// if the uid has no entry, leaving the list untouched.
    ///
    /// Having both links set is not proof of being spliced: the link
    /// primitives let callers wire up anything. Only a node whose neighbors
    /// point back at it is rewired around and counted out of `len`.
    pub fn delete_node(&mut self, uid: Uid) -> Result<bool, ListError> {
        Self::require(uid)?;
        if uid == self.head || uid == self.tail {
            return Err(ListError::Sentinel);
        }
        let (prev, next) = match self.table.get(&uid) {
            Some(node) => (node.prev(), node.next()),
            None => return Ok(false),
        };
        if let (Some(prev), Some(next)) = (prev, next) {
            let mutual = self.table.get(&prev).map_or(false, |n| n.next() == Some(uid))
                && self.table.get(&next).map_or(false, |n| n.prev() == Some(uid));
            if mutual {
                self.set_next(prev, next)?;
                self.set_prev(next, prev)?;
                // a chain wired by hand through the primitives never went
                // through add_next, so the count can come up short
                self.len = self.len.saturating_sub(1);
            }
        }
        self.table.shift_remove(&uid);
        Ok(true)
    }

    /// Point `uid`'s forward link at `next`, unconditionally.
    ///
    /// Link primitive: no table membership is checked for `next`, and a
    /// `uid` with no entry is silently a no-op rather than an error. Only
    /// nil arguments are rejected.
    pub fn set_next(&mut self, uid: Uid, next: Uid) -> Result<(), ListError> {
        Self::require(uid)?;
        Self::require(next)?;
        if let Some(node) = self.table.get_mut(&uid) {
            node.set_next(next);
        }
        Ok(())
    }

    /// Point `uid`'s backward link at `prev`, unconditionally. Same contract
    /// as [`UidList::set_next`].
    pub fn set_prev(&mut self, uid: Uid, prev: Uid) -> Result<(), ListError> {
        Self::require(uid)?;
        Self::require(prev)?;
        if let Some(node) = self.table.get_mut(&uid) {
            node.set_prev(prev);
        }
        Ok(())
    }

    /// Forward link of the node named by `uid`. `Ok(None)` both for an
    /// unknown uid and for an unset link.
    pub fn next_of(&self, uid: Uid) -> Result<Option<Uid>, ListError> {
        Self::require(uid)?;
        Ok(self.table.get(&uid).and_then(|node| node.next()))
    }

    /// Backward link of the node named by `uid`. Same contract as
    /// [`UidList::next_of`].
    pub fn prev_of(&self, uid: Uid) -> Result<Option<Uid>, ListError> {
        Self::require(uid)?;
        Ok(self.table.get(&uid).and_then(|node| node.prev()))
    }

    /// Splice the orphan node `uid` in at the front of the chain, right
    /// after the head sentinel.
    pub fn add_first(&mut self, uid: Uid) -> Result<(), ListError> {
        self.add_next(self.head, uid)
    }

    /// Splice the orphan node `uid` in directly after `after`.
    ///
    /// All four affected link fields are rewritten, so the chain stays
    /// mutually consistent: `after` and its old successor both end up
    /// adjacent to `uid`, forward and backward. `uid` must name an orphan;
    /// a node with either link already set fails with
    /// [`ListError::Spliced`].
    pub fn add_next(&mut self, after: Uid, uid: Uid) -> Result<(), ListError> {
        Self::require(after)?;
        Self::require(uid)?;
        if after == self.tail {
            return Err(ListError::Sentinel);
        }
        if uid == self.head || uid == self.tail {
            return Err(ListError::Sentinel);
        }
        let follower = match self.table.get(&after) {
            Some(node) => match node.next() {
                Some(next) => next,
                None => return Err(ListError::UnknownUid),
            },
            None => return Err(ListError::UnknownUid),
        };
        match self.table.get(&uid) {
            Some(node) => {
                if node.prev().is_some() || node.next().is_some() {
                    return Err(ListError::Spliced);
                }
            }
            None => return Err(ListError::UnknownUid),
        }

        self.set_next(after, uid)?;
        self.set_prev(uid, after)?;
        self.set_next(uid, follower)?;
        // the follower's back-link too, so prev stays the mirror of next
        self.set_prev(follower, uid)?;
        self.len += 1;
        Ok(())
    }

    /// Iterate the raw table in insertion order, sentinels and orphans
    /// included. This is the table itself, not the chain; use
    /// [`UidList::iter`] for traversal order.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.table.iter(),
        }
    }

    /// Iterate the values of the chain in traversal order, head to tail,
    /// sentinels skipped. Restart by calling `iter` again.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.table[&self.head].next(),
        }
    }

    /// Like [`UidList::iter`], but yields `(Uid, &T)` pairs.
    pub fn iter_uids(&self) -> IterUids<'_, T> {
        IterUids {
            list: self,
            cursor: self.table[&self.head].next(),
        }
    }

    fn require(uid: Uid) -> Result<(), ListError> {
        if uid.is_nil() {
            Err(ListError::NilUid)
        } else {
            Ok(())
        }
    }

    fn register(&mut self, value: Option<T>) -> Uid {
        let uid = self.fresh_uid();
        self.table.insert(uid, Node::new(uid, value));
        uid
    }

    // Re-draws until the allocator hands out a uid not naming a live node.
    // Sequential allocation never loops; random allocation loops only on a
    // 64-bit collision.
    fn fresh_uid(&mut self) -> Uid {
        loop {
            let uid = self.allocator.allocate();
            if !self.table.contains_key(&uid) {
                return uid;
            }
        }
    }
}

/// Iterator over the values of the chain in traversal order.
pub struct Iter<'a, T> {
    list: &'a UidList<T>,
    cursor: Option<Uid>,
}

/// Iterator over `(Uid, &T)` pairs of the chain in traversal order.
pub struct IterUids<'a, T> {
    list: &'a UidList<T>,
    cursor: Option<Uid>,
}

/// Iterator over the raw `(Uid, &Node<T>)` table entries in insertion order.
pub struct Entries<'a, T> {
    inner: indexmap::map::Iter<'a, Uid, Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let uid = self.cursor?;
        if uid == self.list.tail {
            return None;
        }
        let node = self.list.table.get(&uid)?;
        self.cursor = node.next();
        node.value()
    }
}

impl<'a, T> Iterator for IterUids<'a, T> {
    type Item = (Uid, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let uid = self.cursor?;
        if uid == self.list.tail {
            return None;
        }
        let node = self.list.table.get(&uid)?;
        self.cursor = node.next();
        node.value().map(|value| (uid, value))
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Uid, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(uid, node)| (*uid, node))
    }
}
