use bencodec::{encode_to_vec, ByteString, Dictionary, List, StreamDecoder, Value};

#[test]
fn integer_vectors() {
    assert_eq!(encode_to_vec(&Value::Integer(0)).unwrap(), b"i0e");
    assert_eq!(encode_to_vec(&Value::Integer(-42)).unwrap(), b"i-42e");
    assert_eq!(
        encode_to_vec(&Value::Integer(i64::MAX)).unwrap(),
        b"i9223372036854775807e"
    );
    assert_eq!(
        encode_to_vec(&Value::Integer(i64::MIN)).unwrap(),
        b"i-9223372036854775808e"
    );
}

#[test]
fn byte_string_vectors() {
    assert_eq!(encode_to_vec(&Value::from("")).unwrap(), b"0:");
    assert_eq!(encode_to_vec(&Value::from("spam")).unwrap(), b"4:spam");
    assert_eq!(
        encode_to_vec(&Value::from(vec![0x00, 0xff])).unwrap(),
        b"2:\x00\xff"
    );
}

#[test]
fn list_vector() {
    let list = List::new();
    list.push("spam");
    list.push(42i64);
    assert_eq!(
        encode_to_vec(&Value::List(list)).unwrap(),
        b"l4:spami42ee"
    );
}

#[test]
fn empty_containers() {
    assert_eq!(encode_to_vec(&Value::List(List::new())).unwrap(), b"le");
    assert_eq!(
        encode_to_vec(&Value::Dictionary(Dictionary::new())).unwrap(),
        b"de"
    );
}

#[test]
fn dictionary_emits_keys_in_sorted_order() {
    let dict = Dictionary::new();
    dict.insert("22222", 123i64);
    dict.insert("11111", "abc");
    dict.insert("33333", "xyz");
    assert_eq!(
        encode_to_vec(&Value::Dictionary(dict)).unwrap(),
        b"d5:111113:abc5:22222i123e5:333333:xyze".to_vec()
    );
}

#[test]
fn non_utf8_keys_sort_byte_wise() {
    let dict = Dictionary::new();
    dict.insert(ByteString::from(&[0xff]), 1i64);
    dict.insert("z", 2i64);
    assert_eq!(
        encode_to_vec(&Value::Dictionary(dict)).unwrap(),
        b"d1:zi2e1:\xffi1ee".to_vec()
    );
}

#[test]
fn encoding_is_idempotent() {
    let dict = Dictionary::new();
    dict.insert("a", 1i64);
    let inner = List::new();
    inner.push("nested");
    dict.insert("b", Value::List(inner));
    let value = Value::Dictionary(dict);

    let first = encode_to_vec(&value).unwrap();
    let second = encode_to_vec(&value).unwrap();
    assert_eq!(first, second);
}

#[test]
fn value_encode_writes_to_any_sink() {
    let mut sink = Vec::new();
    Value::Integer(7).encode(&mut sink).unwrap();
    assert_eq!(sink, b"i7e");
}

#[test]
fn hand_built_tree_round_trips() {
    let files = List::new();
    files.push("a.txt");
    files.push("b.txt");
    let info = Dictionary::new();
    info.insert("files", Value::List(files));
    info.insert("piece length", 16384i64);
    let root = Dictionary::new();
    root.insert("announce", "http://tracker.example/announce");
    root.insert("info", Value::Dictionary(info));
    let value = Value::Dictionary(root);

    let bytes = encode_to_vec(&value).unwrap();
    let decoded = StreamDecoder::new(&bytes[..]).next().unwrap().unwrap();
    assert_eq!(decoded, value);
    assert_eq!(encode_to_vec(&decoded).unwrap(), bytes);
}

#[test]
fn mutation_between_encodes_is_observed() {
    let list = List::new();
    list.push(1i64);
    let value = Value::List(list.clone());
    assert_eq!(encode_to_vec(&value).unwrap(), b"li1ee");

    list.push(2i64);
    assert_eq!(encode_to_vec(&value).unwrap(), b"li1ei2ee");
}
