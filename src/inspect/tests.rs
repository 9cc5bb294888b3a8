#![cfg(test)]

use std::any::Any;

use super::*;
use crate::result::{Err, Ok};

#[derive(Debug)]
struct Record {
    #[allow(dead_code)]
    name: &'static str,
}

#[test]
fn test_is_result() {
    let ok: Box<dyn Any> = Box::new(Ok::<i32, String>(1));
    let err: Box<dyn Any> = Box::new(Err::<i32, String>(String::from("e")));

    assert!(is_result::<i32, String>(&*ok));
    assert!(is_result::<i32, String>(&*err));

    assert!(!is_result::<i32, String>(&5_i32), "A bare payload isn't a Result.");
    assert!(!is_result::<i32, String>(&Record { name: "ok" }));
    assert!(!is_result::<i32, String>(&()));
    assert!(
        !is_result::<i32, String>(&core::result::Result::<i32, String>::Ok(1)),
        "A std Result isn't recognised as this crate's Result."
    );
    assert!(
        !is_result::<u8, String>(&*ok),
        "A Result with different payload types shouldn't match."
    );
}

#[test]
fn test_is_ok_and_is_err() {
    let ok = Ok::<i32, String>(1);
    let err = Err::<i32, String>(String::from("e"));

    assert_eq!(is_ok::<i32, String>(&ok), Ok(true));
    assert_eq!(is_err::<i32, String>(&ok), Ok(false));
    assert_eq!(is_ok::<i32, String>(&err), Ok(false));
    assert_eq!(is_err::<i32, String>(&err), Ok(true));

    assert_eq!(
        is_ok::<i32, String>(&Record { name: "ok" }),
        Err(NotAResult),
        "is_ok should refuse to answer for something that isn't a Result."
    );
    assert_eq!(is_err::<i32, String>(&0_u64), Err(NotAResult));
    assert_eq!(NotAResult.to_string(), "value is not a Result");
}

#[test]
fn test_downcast() {
    let value: Box<dyn Any> = Box::new(Err::<u8, &'static str>("e"));
    let res = downcast::<u8, &'static str>(value);
    assert!(matches!(res, Ok(Err("e"))));

    let value: Box<dyn Any> = Box::new(3_u8);
    let res = downcast::<u8, &'static str>(value);
    assert!(
        res.err().is_some_and(|value| value.is::<u8>()),
        "A failed downcast should hand the original value back."
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_predicates() {
    use serde_json::json;

    let ok = json!({ "type": ":ok", "value": 5 });
    let err = json!({ "type": ":err", "value": "bad" });

    assert!(json::is_result(&ok));
    assert!(json::is_result(&err));
    assert_eq!(json::is_ok(&ok), Ok(true));
    assert_eq!(json::is_err(&err), Ok(true));
    assert_eq!(json::is_err(&ok), Ok(false));

    for value in [
        json!(null),
        json!(5),
        json!("ok"),
        json!({ "name": "record" }),
        json!({ "type": ":ok" }),
        json!({ "type": "ok", "value": 5 }),
        json!({ "type": 1, "value": 5 }),
    ] {
        assert!(!json::is_result(&value), "{value} shouldn't be recognised as a Result.");
        assert_eq!(json::is_ok(&value), Err(NotAResult));
    }

    assert!(
        json::is_result(&json!({ "type": ":ok", "value": null })),
        "A null payload is still a payload."
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_from_value() {
    use serde_json::json;

    let res = json::from_value::<i32, String>(json!({ "type": ":ok", "value": 5 }));
    assert!(matches!(res, Ok(Ok(5))));

    let res = json::from_value::<i32, String>(json!({ "type": ":err", "value": "bad" }));
    assert_eq!(res.unwrap(), Err(String::from("bad")));

    let res = json::from_value::<i32, String>(json!({ "kind": ":ok", "value": 5 }));
    assert!(res.err().is_some_and(|err| err.is_not_a_result()));

    let res = json::from_value::<i32, String>(json!({ "type": ":ok", "value": "five" }));
    assert!(
        res.err().is_some_and(|err| err.is_payload()),
        "A well-tagged value with the wrong payload type should fail on the payload."
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_agrees_with_deserialize() {
    use serde_json::json;

    type Nullable = crate::result::Result<core::option::Option<i32>, String>;

    for value in [json!([":ok", 5]), json!({ "type": ":ok" }), json!({ "value": 5 })] {
        assert!(!json::is_result(&value));
        assert!(
            serde_json::from_value::<Nullable>(value.clone()).is_err(),
            "{value} shouldn't deserialize when it isn't recognised as a Result."
        );
        assert!(json::from_value::<core::option::Option<i32>, String>(value).is_err());
    }

    let value = json!({ "value": null, "type": ":ok" });
    assert!(json::is_result(&value));
    assert_eq!(
        serde_json::from_value::<Nullable>(value).unwrap(),
        Ok(core::option::Option::None)
    );
}
