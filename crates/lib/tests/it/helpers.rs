use dotdata::{Data, DataAccess, Map, Value};

/// Sample structure shared by the accessor tests.
///
/// Covers scalars at the root, nested maps three levels deep, and lists both
/// at the root and inside a map.
pub const SAMPLE_JSON: &str = r#"{
    "a": "A",
    "b": {
        "b": "B",
        "c": ["C1", "C2", "C3"],
        "d": {"d1": "D1", "d2": "D2", "d3": "D3"}
    },
    "c": ["c1", "c2", "c3"],
    "f": {"g": {"h": "FGH"}},
    "h": {"i": "I"},
    "i": {"j": "J"}
}"#;

/// Create a Data accessor over the sample structure
pub fn sample_data() -> Data {
    Data::from_json_str(SAMPLE_JSON).expect("sample JSON should parse")
}

/// The sample structure as a plain map
pub fn sample_map() -> Map {
    sample_data().into_map()
}

/// Build a map from literal entries
pub fn map_of(entries: Vec<(&str, Value)>) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Assert that an accessor exposes the sample structure through every read path
pub fn assert_sample_data(data: &impl DataAccess) {
    let null = Value::Null;

    assert_eq!(*data.get("a").unwrap(), "A");
    assert_eq!(*data.get("b.b").unwrap(), "B");
    assert_eq!(*data.get("b/b").unwrap(), "B");
    assert_eq!(*data.get("b.c").unwrap(), Value::from(vec!["C1", "C2", "C3"]));
    assert_eq!(*data.get("b/c").unwrap(), Value::from(vec!["C1", "C2", "C3"]));
    assert_eq!(*data.get("b.d.d3").unwrap(), "D3");
    assert_eq!(*data.get("b/d/d3").unwrap(), "D3");
    assert_eq!(*data.get("c").unwrap(), Value::from(vec!["c1", "c2", "c3"]));

    assert!(data.get_or("foo", &null).unwrap().is_null(), "foo should not exist");
    assert!(data.get_or("f.g.h.i", &null).unwrap().is_null());
    assert!(data.get_or("f/g/h/i", &null).unwrap().is_null());

    let default_1 = Value::from("default-value-1");
    let default_2 = Value::from("default-value-2");
    assert_eq!(*data.get_or("foo", &default_1).unwrap(), "default-value-1");
    assert_eq!(*data.get_or("f.g.h.i", &default_2).unwrap(), "default-value-2");
    assert_eq!(*data.get_or("f/g/h/i", &default_2).unwrap(), "default-value-2");

    let err = data.get("non/existent/path").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.is_bad_path());
    assert!(
        err.to_string().contains("No data exists at the given path"),
        "unexpected message: {err}"
    );
}
