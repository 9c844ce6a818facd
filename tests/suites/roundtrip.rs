use crate::common::{CURRENT_KEY, codec, cookie_header};
use http::HeaderMap;
use http::header::COOKIE;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sigcookie::{CookieHeader, CookieOptions, SameSite};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cart {
    user_id: u64,
    items: Vec<String>,
    coupon: Option<String>,
}

#[test]
fn test_roundtrip_json_values() {
    let codec = codec(&[CURRENT_KEY]);
    let values = [
        json!(null),
        json!(true),
        json!(12.5),
        json!("plain string"),
        json!(["a", 1, {"nested": [null]}]),
        json!({"name": "Zoë", "emoji": "\u{1f36a}", "quote": "\"; path=/"}),
    ];

    for value in values {
        let pair = codec
            .encode("state", &value, &CookieOptions::default())
            .unwrap();
        let header = cookie_header(&pair);
        let source = CookieHeader::new(Some(header.as_str()));
        let decoded: Option<Value> = codec.get(&source, "state").unwrap();
        assert_eq!(decoded.as_ref(), Some(&value), "value {value}");
    }
}

#[test]
fn test_roundtrip_struct_with_attributes() {
    let codec = codec(&[CURRENT_KEY]);
    let cart = Cart {
        user_id: 42,
        items: vec!["book".to_string(), "lamp".to_string()],
        coupon: None,
    };
    let opts = CookieOptions::new()
        .domain("shop.example")
        .secure(true)
        .same_site(SameSite::None)
        .partitioned(true);

    let pair = codec.encode("cart", &cart, &opts).unwrap();
    let [value_header, sig_header] = pair.headers();
    assert!(value_header.ends_with(
        "; path=/; domain=shop.example; samesite=none; secure; httponly; partitioned"
    ));
    assert!(sig_header.starts_with("cart.sig="));

    let header = format!("theme=dark; {}; lang=en", cookie_header(&pair));
    let decoded = codec
        .decode::<Cart, _>(&CookieHeader::new(Some(header.as_str())), "cart")
        .unwrap()
        .unwrap();
    assert_eq!(decoded.value, cart);
    assert_eq!(decoded.index, 0);
}

#[test]
fn test_roundtrip_through_header_map() {
    let codec = codec(&[CURRENT_KEY]);
    let pair = codec
        .encode("sid", &json!({"id": 7}), &CookieOptions::default())
        .unwrap();

    let mut request = HeaderMap::new();
    request.insert(COOKIE, cookie_header(&pair).parse().unwrap());

    let decoded: Option<Value> = codec.get(&request, "sid").unwrap();
    assert_eq!(decoded, Some(json!({"id": 7})));
}

#[test]
fn test_roundtrip_through_closure_lookup() {
    let codec = codec(&[CURRENT_KEY]);
    let pair = codec.encode("n", &99, &CookieOptions::default()).unwrap();
    let value = pair.value.value().to_string();
    let sig = pair.signature.value().to_string();

    let lookup = move |name: &str| match name {
        "n" => Some(value.clone()),
        "n.sig" => Some(sig.clone()),
        _ => None,
    };
    let decoded: Option<u32> = codec.get(&lookup, "n").unwrap();
    assert_eq!(decoded, Some(99));
}

#[test]
fn test_fixed_vectors_interoperate() {
    let codec = codec(&["k0"]);
    let header = CookieHeader::new(Some("sid=abc; sid.sig=AdFmzgqW_xIzAdNoi9KrAlne-wU"));
    assert_eq!(codec.verify(&header, "sid").index(), Some(0));

    let pair = codec
        .encode("sid", &json!({"a": 1}), &CookieOptions::default())
        .unwrap();
    assert_eq!(pair.value.value(), "eyJhIjoxfQ==");
    assert_eq!(pair.signature.value(), codec.keys().sign("sid=eyJhIjoxfQ=="));
}
