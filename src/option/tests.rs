#![cfg(test)]

use std::cell::Cell;

use super::*;
use crate::result::{Err, Ok};
use crate::util::panic::{assert_panics, panic_message};

#[test]
fn test_variant_queries() {
    assert!(Some(1).is_some());
    assert!(!Some(1).is_none());
    assert!(None::<u8>.is_none());
    assert!(!None::<u8>.is_some());
    assert_eq!(Option::<u8>::default(), None, "The default Option should be None.");
}

#[test]
fn test_unwrap() {
    assert_eq!(Some("val").unwrap(), "val");
    assert_eq!(Some(3).unwrap_or(0), 3);
    assert_eq!(None.unwrap_or(0), 0);
    assert_eq!(None.unwrap_or_else(|| 5), 5);

    assert_panics!({
        None::<u8>.unwrap();
    });
    assert_eq!(
        panic_message!({
            None::<u8>.unwrap();
        }),
        UnwrapOnNone.to_string()
    );
    assert_eq!(
        panic_message!({
            None::<u8>.expect("wanted a byte");
        }),
        "wanted a byte"
    );
}

#[test]
fn test_combinators() {
    let calls = Cell::new(0);
    let double = |x: i32| {
        calls.set(calls.get() + 1);
        x * 2
    };

    assert_eq!(Some(2).map(double), Some(4));
    assert_eq!(None.map(double), None);
    assert_eq!(calls.get(), 1, "map shouldn't invoke the function for None.");

    assert_eq!(Some(4).and_then(|x| if x > 3 { Some(x) } else { None }), Some(4));
    assert_eq!(Some(2).and_then(|x| if x > 3 { Some(x) } else { None }), None);
    assert_eq!(None.or_else(|| Some(1)), Some(1));
    assert_eq!(Some(2).or_else(|| Some(1)), Some(2));

    assert_eq!(
        Some(1).match_with(Match { some: |x: i32| x + 1, none: || 0 }),
        2
    );
    assert_eq!(
        None.match_with(Match { some: |x: i32| x + 1, none: || 0 }),
        0
    );
}

#[test]
fn test_into_result() {
    assert_eq!(Some(1).ok_or("missing"), Ok(1));
    assert_eq!(None::<i32>.ok_or("missing"), Err("missing"));
    assert_eq!(None::<i32>.ok_or_else(|| "lazy"), Err("lazy"));
}

fn first_even_halved(values: &[i32]) -> Option<i32> {
    let even = values.iter().copied().find(|x| x % 2 == 0)?;
    Some(even / 2)
}

#[test]
fn test_try_operator() {
    assert_eq!(first_even_halved(&[1, 3, 8]), Some(4));
    assert_eq!(first_even_halved(&[1, 3]), None, "? should short-circuit on None.");
}

#[test]
fn test_std_conversions() {
    assert_eq!(Option::from(core::option::Option::Some(3)), Some(3));
    assert_eq!(
        core::option::Option::<u8>::from(None),
        core::option::Option::None
    );
}
