use uidlist::UidList;

// cargo run --example build_list
fn main() {
    let mut list = UidList::new();

    // first node goes right after the head sentinel
    let first = list.create_node(String::from("First Node"));
    list.add_first(first).unwrap();

    let mut cursor = first;
    for i in 0..5 {
        let uid = list.create_node(format!("Node-{i}"));
        list.add_next(cursor, uid).unwrap();
        cursor = uid;
    }

    for (uid, value) in list.iter_uids() {
        println!("{uid:?}: {value}");
    }

    // delete the first node and show the chain closing ranks around it
    list.delete_node(first).unwrap();
    println!("--- after deleting the first node ({} left) ---", list.len());
    for (uid, value) in list.iter_uids() {
        println!("{uid:?}: {value}");
    }
}
