use json_nav_path::{
    all_paths, backfill_insert, count_key, find_value_paths, first_key_path, format_path, get,
    key_paths, materialize, path, resolve, set, PathError, PathSegment,
};
use serde_json::{json, Value};

fn station_results() -> Value {
    json!({
        "metadata": {"resultset": {"count": 10, "limit": 10}},
        "results": [
            {"uid": "gov.noaa.ncdc:C00040", "name": "Monterey A"},
            {"uid": "gov.noaa.ncdc:C00313", "name": "Monterey B"},
            {"uid": "gov.noaa.ncdc:C00822", "name": "Monterey C"}
        ]
    })
}

#[test]
fn get_and_resolve_matrix() {
    let doc = station_results();

    assert_eq!(
        get(&doc, &path!["results", 0, "uid"]),
        Some(&json!("gov.noaa.ncdc:C00040"))
    );
    assert_eq!(
        get(&doc, &path!["results", 2, "uid"]),
        Some(&json!("gov.noaa.ncdc:C00822"))
    );
    assert_eq!(get(&doc, &path!["results", 9, "uid"]), None);
    assert_eq!(get(&doc, &path!["metadata", "resultset", "count"]), Some(&json!(10)));

    assert_eq!(
        resolve(&doc, &path!["results", 9]),
        Err(PathError::IndexOutOfRange(9))
    );
    assert_eq!(
        resolve(&doc, &path!["metadata", "missing"]),
        Err(PathError::KeyNotFound("missing".to_string()))
    );
    assert_eq!(
        resolve(&doc, &path!["metadata", 0]),
        Err(PathError::TypeMismatch("0".to_string()))
    );
}

#[test]
fn set_all_enumerable_paths() {
    // every path that resolves to a scalar can be overwritten strictly
    let mut doc = station_results();
    let scalar_paths: Vec<_> = all_paths(&doc)
        .into_iter()
        .filter(|p| get(&doc, p).map(|v| !v.is_object() && !v.is_array()) == Some(true))
        .collect();

    for p in &scalar_paths {
        set(&mut doc, p, json!("NEWVALUE")).expect("path exists");
    }
    for p in &scalar_paths {
        assert_eq!(get(&doc, p), Some(&json!("NEWVALUE")), "{}", format_path(p));
    }
}

#[test]
fn backfill_and_materialize_matrix() {
    let list: Vec<Value> = (0..10).map(|n| json!(n)).collect();
    let grown = backfill_insert(&list, 20, json!("X"));
    assert_eq!(grown.len(), 21);
    assert!(grown[10..20].iter().all(Value::is_null));
    assert_eq!(grown[20], json!("X"));
    assert_eq!(list.len(), 10);

    assert_eq!(materialize(&path![], json!("X")), json!("X"));
    assert_eq!(
        materialize(&path!["one", "two"], json!("X")),
        json!({"one": {"two": "X"}})
    );
    assert_eq!(
        materialize(&path![1, 2], json!("X")),
        json!([null, [null, null, "X"]])
    );
}

#[test]
fn materialized_structure_resolves_to_its_value() {
    let cases = [
        path!["a", "b", "c"],
        path![0, "a", 1],
        path!["deep", 3, 2, "leaf"],
    ];
    for p in cases {
        let built = materialize(&p, json!("VALUE"));
        assert_eq!(get(&built, &p), Some(&json!("VALUE")), "{}", format_path(&p));
    }
}

#[test]
fn search_matrix() {
    let doc = station_results();

    assert_eq!(
        find_value_paths(&doc, &json!("gov.noaa.ncdc:C00313")),
        vec![path!["results", 1, "uid"]]
    );
    assert_eq!(count_key(&doc, "uid"), 3);
    assert_eq!(
        key_paths(&doc, "uid"),
        vec![
            path!["results", 0, "uid"],
            path!["results", 1, "uid"],
            path!["results", 2, "uid"],
        ]
    );
    assert_eq!(first_key_path(&doc, "limit"), Some(path!["metadata", "resultset", "limit"]));
}

#[test]
fn segment_display_and_macro() {
    assert_eq!(format_path(&path!["a", 0, "b"]), "/a/0/b");
    assert_eq!(PathSegment::key("href").to_string(), "href");
    assert_eq!(PathSegment::index(7).to_string(), "7");
}
