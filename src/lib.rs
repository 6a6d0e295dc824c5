//! A doubly linked list backed by a flat uid-indexed table.
//!
//! Instead of nodes owning pointers to their neighbors, every node is stored
//! under an opaque [`Uid`] in the table of its [`UidList`], and links are just
//! uids resolved through that table. There are no reference cycles to break:
//! dropping the list drops the table, and with it every node, in one step.

mod list;
mod node;
mod uid;

pub use list::{Entries, Iter, IterUids, ListError, UidList};
pub use node::Node;
pub use uid::{Uid, UidAllocator};

#[cfg(test)]
mod tests {
    use crate::UidList;

    #[test]
    fn empty_list_yields_nothing() {
        let list: UidList<i32> = UidList::new();
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn iteration_follows_splice_order_not_creation_order() {
        let mut list = UidList::new();

        let a = list.create_node("A");
        list.add_first(a).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["A"]);

        let b = list.create_node("B");
        list.add_next(a, b).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["A", "B"]);

        // created last, spliced to the front
        let c = list.create_node("C");
        list.add_first(c).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn build_iterate_delete_round() {
        let mut list = UidList::new();

        let mut cursor = list.create_node(String::from("First Node"));
        list.add_first(cursor).unwrap();
        let mut uids = vec![cursor];
        for i in 0..5 {
            let uid = list.create_node(format!("Node-{i}"));
            list.add_next(cursor, uid).unwrap();
            uids.push(uid);
            cursor = uid;
        }

        let values: Vec<&String> = list.iter().collect();
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], "First Node");
        assert_eq!(values[5], "Node-4");

        for uid in uids {
            assert!(list.delete_node(uid).unwrap());
        }
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }
}
