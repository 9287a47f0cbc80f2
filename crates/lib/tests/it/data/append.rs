//! Tests for appending to lists by path

use dotdata::{Data, DataAccess, Value};

use crate::helpers::*;

#[test]
fn test_append() {
    let mut data = sample_data();

    data.append("a", "B").unwrap();
    data.append("c", "c4").unwrap();
    data.append("b.c", "C4").unwrap();
    data.append("b/d/d3", "D3b").unwrap();
    data.append("b.d.d4", "D").unwrap();
    data.append("e", "E").unwrap();
    data.append("f/a", "b").unwrap();
    data.append("h.i", "I2").unwrap();
    data.append("i/k/l", "L").unwrap();

    assert_eq!(*data.get("a").unwrap(), Value::from(vec!["A", "B"]));
    assert_eq!(
        *data.get("c").unwrap(),
        Value::from(vec!["c1", "c2", "c3", "c4"])
    );
    assert_eq!(
        *data.get("b.c").unwrap(),
        Value::from(vec!["C1", "C2", "C3", "C4"])
    );
    assert_eq!(*data.get("b.d.d3").unwrap(), Value::from(vec!["D3", "D3b"]));
    assert_eq!(*data.get("b.d.d4").unwrap(), Value::from(vec!["D"]));
    assert_eq!(*data.get("e").unwrap(), Value::from(vec!["E"]));
    assert_eq!(*data.get("f.a").unwrap(), Value::from(vec!["b"]));
    assert_eq!(*data.get("h.i").unwrap(), Value::from(vec!["I", "I2"]));
    assert_eq!(*data.get("i.k.l").unwrap(), Value::from(vec!["L"]));

    assert!(data.append("", "broken").unwrap_err().is_invalid_path());
}

#[test]
fn test_append_twice_to_missing_path() {
    let mut data = Data::new();

    data.append("list", "V1").unwrap();
    assert_eq!(*data.get("list").unwrap(), Value::from(vec!["V1"]));

    data.append("list", "V2").unwrap();
    assert_eq!(*data.get("list").unwrap(), Value::from(vec!["V1", "V2"]));
}

#[test]
fn test_append_promotes_map_to_list() {
    let mut data = sample_data();

    data.append("h", "extra").unwrap();

    let promoted = data.get("h").unwrap().as_list().unwrap();
    assert_eq!(promoted.len(), 2);
    assert_eq!(promoted[0], Value::Map(map_of(vec![("i", "I".into())])));
    assert_eq!(promoted[1], "extra");
}

#[test]
fn test_append_to_null_starts_fresh_list() {
    let mut data = Data::new();
    data.set("n", Value::Null).unwrap();

    data.append("n", 1).unwrap();
    assert_eq!(*data.get("n").unwrap(), Value::from(vec![1]));
}

#[test]
fn test_append_containers() {
    let mut data = Data::new();

    data.append("rows", map_of(vec![("id", 1.into())])).unwrap();
    data.append("rows", map_of(vec![("id", 2.into())])).unwrap();
    data.append("rows", vec![3, 4]).unwrap();

    let rows = data.get("rows").unwrap().as_list().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].as_map().unwrap()["id"], 2);
    assert_eq!(rows[2], Value::from(vec![3, 4]));
}

#[test]
fn test_append_through_scalar_replaces_it() {
    let mut data = sample_data();

    // Unlike set, append never fails past path validation
    data.append("a.x", "X").unwrap();

    assert_eq!(*data.get("a.x").unwrap(), Value::from(vec!["X"]));
    assert!(data.get("a").unwrap().is_map());
}

#[test]
fn test_append_through_list_keeps_items() {
    let mut data = Data::new();
    data.set("a", vec![1, 2]).unwrap();

    data.append("a.b", "X").unwrap();

    let keyed = data.get("a").unwrap().as_map().unwrap();
    assert_eq!(keyed.keys().collect::<Vec<_>>(), vec!["0", "1", "b"]);
    assert_eq!(*data.get("a.0").unwrap(), 1);
    assert_eq!(*data.get("a.1").unwrap(), 2);
    assert_eq!(*data.get("a.b").unwrap(), Value::from(vec!["X"]));
}

#[test]
fn test_append_through_empty_list() {
    let mut data = Data::new();
    data.set("a", Vec::<Value>::new()).unwrap();

    data.append("a/b", "X").unwrap();
    assert_eq!(
        *data.get("a").unwrap(),
        Value::Map(map_of(vec![("b", Value::from(vec!["X"]))]))
    );
}
