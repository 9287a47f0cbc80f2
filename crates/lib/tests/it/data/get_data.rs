//! Tests for wrapping sub-structures in new accessors

use dotdata::{Data, DataAccess, Map, Value};

use crate::helpers::*;

fn wrapped_data() -> Data {
    let mut wrapped = Data::new();
    wrapped
        .set("wrapped.sampleData", sample_map())
        .unwrap();
    wrapped
}

#[test]
fn test_get_data() {
    let wrapped = wrapped_data();

    let data = wrapped.get_data("wrapped.sampleData").unwrap();
    assert_sample_data(&data);

    let err = wrapped.get_data("wrapped.sampleData.a").unwrap_err();
    assert!(err.is_not_representable());
    assert_eq!(
        err.to_string(),
        "Value at \"wrapped.sampleData.a\" could not be represented as a Data instance"
    );
}

#[test]
fn test_get_data_rejects_lists() {
    let wrapped = wrapped_data();

    let err = wrapped.get_data("wrapped/sampleData/c").unwrap_err();
    assert!(err.is_not_representable());
    assert!(!err.is_bad_path());
}

#[test]
fn test_get_data_empty_containers() {
    let mut data = Data::new();
    data.set("empty_map", Map::new()).unwrap();
    data.set("empty_list", Vec::<Value>::new()).unwrap();

    assert!(data.get_data("empty_map").unwrap().is_empty());
    assert!(data.get_data("empty_list").unwrap().is_empty());
}

#[test]
fn test_get_data_rejects_positional_maps() {
    let mut data = Data::new();
    data.set(
        "positional",
        map_of(vec![("0", "x".into()), ("1", "y".into())]),
    )
    .unwrap();

    assert!(data.get_data("positional").unwrap_err().is_not_representable());
}

#[test]
fn test_get_data_missing_path() {
    let wrapped = wrapped_data();

    assert!(wrapped.get_data("wrapped.other").unwrap_err().is_not_found());
    assert!(wrapped.get_data("").unwrap_err().is_invalid_path());
}

#[test]
fn test_get_data_is_detached() {
    let wrapped = wrapped_data();

    let mut data = wrapped.get_data("wrapped.sampleData").unwrap();
    data.set("a", "changed").unwrap();

    assert_eq!(*wrapped.get("wrapped.sampleData.a").unwrap(), "A");
    assert_eq!(*data.get("a").unwrap(), "changed");
}
