use crate::common::{CURRENT_KEY, codec};
use sigcookie::{
    Cookie, CookieError, CookieOptions, KeyRing, Priority, SameSite, SetCookieList,
};

#[test]
fn test_invalid_names_rejected() {
    for name in ["a;b", "a=b", "", "tab\u{7f}"] {
        assert!(
            matches!(
                Cookie::new(name, Some("v"), CookieOptions::default()),
                Err(CookieError::Validation { field: "name" })
            ),
            "{name:?}"
        );
    }
}

#[test]
fn test_invalid_value_rejected() {
    assert!(matches!(
        Cookie::new("sid", Some("a;b"), CookieOptions::default()),
        Err(CookieError::Validation { field: "value" })
    ));
}

#[test]
fn test_invalid_enums_rejected() {
    assert!(matches!(
        "urgent".parse::<Priority>(),
        Err(CookieError::Validation { field: "priority" })
    ));
    assert!(matches!(
        "sometimes".parse::<SameSite>(),
        Err(CookieError::Validation { field: "sameSite" })
    ));
}

#[test]
fn test_encode_fails_before_emitting() {
    let codec = codec(&[CURRENT_KEY]);
    let mut sink = SetCookieList::new();

    for name in ["a;b", "a=b"] {
        if let Ok(pair) = codec.encode(name, &1, &CookieOptions::default()) {
            pair.write_to(&mut sink);
        }
    }
    let bad_path = CookieOptions::new().path("/x\r\n");
    assert!(matches!(
        codec.encode("sid", &1, &bad_path),
        Err(CookieError::Validation { field: "path" })
    ));
    assert!(sink.is_empty());
}

#[test]
fn test_empty_key_ring_is_config_error() {
    let err = KeyRing::new(Vec::<&str>::new()).unwrap_err();
    assert!(matches!(err, CookieError::Config(_)));
    assert_eq!(
        err.to_string(),
        "configuration error: provide keys for signing cookies"
    );
}

#[test]
fn test_validation_error_names_field() {
    let opts = CookieOptions::new().domain("a\nb");
    let err = Cookie::new("sid", Some("x"), opts).unwrap_err();
    assert_eq!(err.to_string(), "argument domain is invalid");
}
