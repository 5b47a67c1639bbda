use proptest::arbitrary::any;
use proptest::collection::{btree_map, vec};
use proptest::prop_oneof;
use proptest::strategy::{BoxedStrategy, Just, Strategy};

use crate::term::{Atom, Function, Map, Pid, Reference, Value};

use super::{size_range, NON_EXISTENT_ATOM_PREFIX};

pub mod integer;

pub fn value() -> BoxedStrategy<Value> {
    leaf()
        .prop_recursive(3, 16, 3, |element| {
            prop_oneof![
                list_of(element.clone()),
                tuple_of(element.clone()),
                map_of(element),
            ]
        })
        .boxed()
}

/// Values that hold no other values
fn leaf() -> BoxedStrategy<Value> {
    prop_oneof![
        atom(),
        integer::small(),
        integer::big(),
        float(),
        function(),
        Just(Value::Nil),
        pid(),
        reference(),
        binary(),
    ]
    .boxed()
}

pub fn atom() -> BoxedStrategy<Value> {
    "[a-z][a-z0-9_]{0,8}"
        .prop_filter("Atom cannot collide with the non-existent prefix", |name| {
            !name.starts_with(NON_EXISTENT_ATOM_PREFIX)
        })
        .prop_map(|name| Atom::try_from_str(name).unwrap().into())
        .boxed()
}

pub fn binary() -> BoxedStrategy<Value> {
    vec(any::<u8>(), 0..16).prop_map(Value::binary).boxed()
}

pub fn float() -> BoxedStrategy<Value> {
    any::<f64>()
        .prop_filter_map("Float must be finite", |f| Value::try_from(f).ok())
        .boxed()
}

pub fn function() -> BoxedStrategy<Value> {
    (atom(), atom(), 0..=3u8)
        .prop_map(|(module, function, arity)| {
            let module = module.as_atom().unwrap();
            let function = function.as_atom().unwrap();
            Function::new(module, function, arity).into()
        })
        .boxed()
}

pub fn pid() -> BoxedStrategy<Value> {
    (0..=Pid::NUMBER_MAX, 0..=Pid::SERIAL_MAX)
        .prop_map(|(number, serial)| Pid::new(number, serial).unwrap().into())
        .boxed()
}

pub fn reference() -> BoxedStrategy<Value> {
    any::<u64>()
        .prop_map(|number| Reference::new(number).into())
        .boxed()
}

pub fn list() -> BoxedStrategy<Value> {
    list_of(super::term())
}

fn list_of(element: BoxedStrategy<Value>) -> BoxedStrategy<Value> {
    (vec(element.clone(), 1..=3), prop_oneof![Just(Value::Nil), element])
        .prop_map(|(elements, tail)| {
            elements
                .into_iter()
                .rev()
                .fold(tail, |tail, head| Value::cons(head, tail))
        })
        .boxed()
}

pub fn tuple() -> BoxedStrategy<Value> {
    tuple_of(super::term())
}

fn tuple_of(element: BoxedStrategy<Value>) -> BoxedStrategy<Value> {
    vec(element, size_range()).prop_map(Value::tuple).boxed()
}

pub fn map() -> BoxedStrategy<Value> {
    map_of(super::term())
}

fn map_of(element: BoxedStrategy<Value>) -> BoxedStrategy<Value> {
    // Integer keys, so that generated keys are unique
    btree_map(any::<i32>(), element, size_range())
        .prop_map(|kv| {
            let map: Map = kv
                .into_iter()
                .map(|(k, v)| (Value::small_integer(k.into()), v))
                .collect();
            Value::from(map)
        })
        .boxed()
}

pub fn is_integer() -> BoxedStrategy<Value> {
    prop_oneof![integer::small(), integer::big()].boxed()
}

pub fn is_not_integer() -> BoxedStrategy<Value> {
    super::term()
        .prop_filter("Value cannot be an integer", |v| !v.is_integer())
        .boxed()
}

pub fn is_not_binary() -> BoxedStrategy<Value> {
    prop_oneof![
        integer::big(),
        reference(),
        function(),
        float(),
        Just(Value::Nil),
        pid(),
        atom(),
        integer::small(),
        list(),
        map(),
        tuple(),
    ]
    .boxed()
}
