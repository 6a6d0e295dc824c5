use rand::Rng;

/// An opaque token naming one node inside a [`UidList`](crate::UidList).
///
/// A [`Uid`] is only a lookup key: it carries no ordering semantics and is
/// meaningless outside the list that issued it. Nodes refer to their
/// neighbors through uids resolved via the list's table, never through
/// references, so the list contains no reference cycles.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid(u64);

impl Uid {
    /// The reserved "no uid" value. Never issued by an allocator; passing it
    /// to a list operation yields [`ListError::NilUid`](crate::ListError).
    pub const NIL: Uid = Uid(0);

    pub fn is_nil(&self) -> bool {
        *self == Uid::NIL
    }

    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    pub(crate) fn from_raw(raw: u64) -> Uid {
        Uid(raw)
    }
}

impl std::fmt::Debug for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_nil() {
            f.write_str("Uid(nil)")
        } else {
            write!(f, "Uid({})", self.0)
        }
    }
}

/// Produces [`Uid`]s for one [`UidList`](crate::UidList).
///
/// Each list owns its allocator, so uniqueness is a per-list guarantee and
/// needs no process-wide state. The sequential strategy is the default; the
/// random strategy draws tokens from [`rand`] and leaves collision re-draws
/// to the owning list.
#[derive(Debug, Clone)]
pub enum UidAllocator {
    /// Counts upward from a starting point. Monotone, so a fresh uid can
    /// never equal one still naming a live node.
    Sequential { next: u64 },
    /// Uniformly random 64-bit tokens, nil excluded.
    Random,
}

impl Default for UidAllocator {
    fn default() -> Self {
        UidAllocator::Sequential { next: 1 }
    }
}

impl UidAllocator {
    /// Produce the next uid. Total, and never [`Uid::NIL`].
    pub fn allocate(&mut self) -> Uid {
        match self {
            UidAllocator::Sequential { next } => {
                let uid = Uid::from_raw(*next);
                *next += 1;
                uid
            }
            UidAllocator::Random => {
                let mut rng = rand::thread_rng();
                loop {
                    let raw: u64 = rng.gen();
                    if raw != 0 {
                        return Uid::from_raw(raw);
                    }
                }
            }
        }
    }
}
