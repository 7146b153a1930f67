use bencodec::{encode_to_vec, Dictionary, Error, List, Value, ValueKind};

#[test]
fn dictionary_containing_itself_fails_encode() {
    let dict = Dictionary::new();
    dict.insert("self", Value::Dictionary(dict.clone()));

    let err = encode_to_vec(&Value::Dictionary(dict)).unwrap_err();
    assert!(matches!(
        err,
        Error::CircularReference {
            kind: ValueKind::Dictionary
        }
    ));
}

#[test]
fn list_containing_itself_fails_encode() {
    let list = List::new();
    list.push(Value::List(list.clone()));

    let err = encode_to_vec(&Value::List(list)).unwrap_err();
    assert!(matches!(
        err,
        Error::CircularReference {
            kind: ValueKind::List
        }
    ));
}

#[test]
fn cycle_through_intermediate_containers_fails_encode() {
    let root = Dictionary::new();
    let middle = List::new();
    let leaf = Dictionary::new();
    leaf.insert("back", Value::Dictionary(root.clone()));
    middle.push(Value::Dictionary(leaf));
    root.insert("down", Value::List(middle));

    let err = encode_to_vec(&Value::Dictionary(root)).unwrap_err();
    assert!(matches!(err, Error::CircularReference { .. }));
}

#[test]
fn nothing_is_written_when_a_cycle_is_found() {
    let list = List::new();
    list.push(Value::List(list.clone()));

    let mut sink = Vec::new();
    let result = Value::List(list).encode(&mut sink);
    assert!(result.is_err());
    assert!(sink.is_empty());
}

#[test]
fn sibling_sharing_is_not_a_cycle() {
    let shared = Dictionary::new();
    shared.insert("n", 1i64);
    let root = List::new();
    root.push(Value::Dictionary(shared.clone()));
    root.push(Value::Dictionary(shared));

    assert_eq!(
        encode_to_vec(&Value::List(root)).unwrap(),
        b"ld1:ni1eed1:ni1eee".to_vec()
    );
}

#[test]
fn shared_node_at_different_depths_is_not_a_cycle() {
    let shared = List::new();
    shared.push(1i64);
    let wrapper = List::new();
    wrapper.push(Value::List(shared.clone()));
    let root = List::new();
    root.push(Value::List(shared));
    root.push(Value::List(wrapper));

    assert_eq!(
        encode_to_vec(&Value::List(root)).unwrap(),
        b"lli1eelli1eeee".to_vec()
    );
}

#[test]
fn removing_the_back_edge_restores_encodability() {
    let dict = Dictionary::new();
    dict.insert("self", Value::Dictionary(dict.clone()));
    let value = Value::Dictionary(dict.clone());
    assert!(encode_to_vec(&value).is_err());

    dict.remove("self");
    dict.insert("ok", 1i64);
    assert_eq!(encode_to_vec(&value).unwrap(), b"d2:oki1ee".to_vec());
}

#[test]
fn equal_valued_distinct_subtrees_are_not_a_cycle() {
    let root = List::new();
    let a = List::new();
    a.push(1i64);
    let b = List::new();
    b.push(1i64);
    root.push(Value::List(a));
    root.push(Value::List(b));

    assert_eq!(
        encode_to_vec(&Value::List(root)).unwrap(),
        b"lli1eeli1eee".to_vec()
    );
}
