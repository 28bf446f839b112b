//! Integration test: the predicate library end to end.
//!
//! Covers:
//! 1. Every generated pair is an exact negation over a spread of values
//! 2. Naming of inverses under the default rules
//! 3. `is_of`, `is_none` and their inverses
//! 4. Registering a caller-defined predicate and resolving its inverse
//! 5. Re-wrapping is idempotent

use oak::inverse::{self, InverseFactory};
use oak::library::{self, KIND_TABLE};
use oak::{Args, Kind, Namespace, Registry, RuleSet, Signature, Value};

fn sample_values() -> Vec<Value> {
    vec![
        Value::None,
        Value::Bool(true),
        Value::Int(0),
        Value::Int(-7),
        Value::Float(1.5),
        Value::Complex { re: 1.0, im: -1.0 },
        Value::str(""),
        Value::str("x"),
        Value::Bytes(vec![]),
        Value::ByteArray(b"ab".to_vec()),
        Value::List(vec![]),
        Value::list([Value::Int(1), Value::Int(2)]),
        Value::Tuple(vec![]),
        Value::tuple([Value::None]),
        Value::Set(vec![Value::Int(1)]),
        Value::FrozenSet(vec![]),
        Value::Dict(vec![]),
        Value::Dict(vec![(Value::str("k"), Value::None)]),
        Value::Range {
            start: 0,
            stop: 3,
            step: 1,
        },
        Value::Slice {
            start: Some(1),
            stop: None,
            step: None,
        },
        Value::Deque(vec![Value::Int(1)]),
        Value::Counter(vec![(Value::str("a"), 3)]),
        Value::OrderedDict(vec![]),
        Value::DefaultDict {
            default: None,
            entries: vec![],
        },
        Value::Type(Kind::List),
    ]
}

#[test]
fn every_pair_is_an_exact_negation() {
    let ns = library::build().expect("library should build");

    for kind in KIND_TABLE {
        let is = ns
            .resolve(&format!("is_{}", kind.name()))
            .expect("positive predicate registered");
        let isnt = ns
            .resolve(&format!("isnt_{}", kind.name()))
            .expect("inverse predicate registered");

        for value in sample_values() {
            let positive = is.test(value.clone()).expect("unary call binds");
            let negative = isnt.test(value.clone()).expect("unary call binds");
            assert_eq!(positive, !negative, "{kind} on {value:?}");
            assert_eq!(positive, kind.matches(&value), "{kind} on {value:?}");
        }
    }

    for value in sample_values() {
        let is_none = ns.resolve("is_none").unwrap().test(value.clone()).unwrap();
        let isnt_none = ns.resolve("isnt_none").unwrap().test(value.clone()).unwrap();
        assert_eq!(is_none, !isnt_none);
        assert_eq!(is_none, value == Value::None);

        for kinds in [
            Value::kinds([Kind::Str, Kind::List]),
            Value::Tuple(vec![]),
            Value::Type(Kind::Hashable),
        ] {
            let args = Args::from([value.clone(), kinds]);
            let is_of = ns.resolve("is_of").unwrap().call(&args).unwrap();
            let isnt_of = ns.resolve("isnt_of").unwrap().call(&args).unwrap();
            assert_eq!(is_of, !isnt_of);
        }
    }
}

#[test]
fn default_naming_scenarios() {
    let rules = RuleSet::default();
    assert_eq!(oak::derive("is_str", &rules).unwrap(), "isnt_str");
    assert_eq!(
        oak::derive("contains_prefix", &rules).unwrap(),
        "not_contains_prefix"
    );
    assert_eq!(oak::derive("is_", &rules).unwrap(), "isnt_");
    assert_eq!(oak::derive("is_none", &rules).unwrap(), "isnt_none");
}

#[test]
fn is_of_is_a_disjunction() {
    let ns = library::build().unwrap();
    let is_of = ns.resolve("is_of").unwrap();
    let either = Value::kinds([Kind::Str, Kind::Dict]);
    let either_list = Value::list([Value::Type(Kind::Str), Value::Type(Kind::Dict)]);

    for value in sample_values() {
        let expected = Kind::Str.matches(&value) || Kind::Dict.matches(&value);
        let args = Args::from([value.clone(), either.clone()]);
        assert_eq!(is_of.call(&args).unwrap(), expected, "{value:?}");
        let args = Args::from([value.clone(), either_list.clone()]);
        assert_eq!(is_of.call(&args).unwrap(), expected, "{value:?}");

        let none_of = Args::from([value.clone(), Value::Tuple(vec![])]);
        assert!(!is_of.call(&none_of).unwrap(), "{value:?}");
    }
}

#[test]
fn none_scenarios() {
    let ns = library::build().unwrap();
    assert!(ns.resolve("is_none").unwrap().test(Value::None).unwrap());
    assert!(!ns.resolve("is_none").unwrap().test(0_i64).unwrap());
    assert!(ns.resolve("isnt_none").unwrap().test(0_i64).unwrap());
}

#[test]
fn caller_defined_list_predicate_end_to_end() {
    let mut ns = Namespace::new("shapes");
    let is_list = ns.define("is_list", Signature::unary("x"), |p| {
        matches!(p[0], Value::List(_))
    });
    InverseFactory::default()
        .wrap(&mut ns, is_list)
        .expect("default rules always derive a name");

    let isnt_list = ns.resolve("isnt_list").expect("inverse registered");
    assert!(!isnt_list
        .test(Value::list([Value::Int(1), Value::Int(2)]))
        .unwrap());
    assert!(isnt_list.test("x").unwrap());
    assert_eq!(
        isnt_list.doc(),
        Some("The logical inverse of `shapes.is_list`.")
    );
}

#[test]
fn wrapping_twice_leaves_same_observable_state() {
    let mut once = Namespace::new("shapes");
    let mut twice = Namespace::new("shapes");

    for ns in [&mut once, &mut twice] {
        let is_list = ns.define("is_list", Signature::unary("x"), |p| {
            matches!(p[0], Value::List(_))
        });
        inverse::wrap(ns, is_list, &RuleSet::default()).unwrap();
    }
    let is_list = twice.resolve("is_list").unwrap().clone();
    inverse::wrap(&mut twice, is_list, &RuleSet::default()).unwrap();

    let names_once: Vec<&str> = once.names().collect();
    let names_twice: Vec<&str> = twice.names().collect();
    assert_eq!(names_once, names_twice);

    for value in sample_values() {
        assert_eq!(
            once.resolve("isnt_list").unwrap().test(value.clone()).unwrap(),
            twice.resolve("isnt_list").unwrap().test(value.clone()).unwrap()
        );
    }
}

#[test]
fn registry_holds_library_beside_caller_namespaces() {
    let mut registry = Registry::new();
    registry.insert(library::build().unwrap());

    let shapes = registry.namespace_mut("shapes");
    let is_pair = shapes.define("is_pair", Signature::unary("x"), |p| {
        matches!(p[0], Value::Tuple(t) if t.len() == 2)
    });
    shapes
        .with_negation(&is_pair, &RuleSet::default())
        .unwrap();

    assert!(registry
        .resolve(library::NAMESPACE, "isnt_str")
        .unwrap()
        .test(1_i64)
        .unwrap());
    assert!(registry
        .resolve("shapes", "isnt_pair")
        .unwrap()
        .test(Value::tuple([Value::Int(1)]))
        .unwrap());
    assert!(registry.resolve("shapes", "isnt_str").is_err());
}
