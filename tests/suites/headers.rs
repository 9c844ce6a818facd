use crate::common::{CURRENT_KEY, codec};
use http::HeaderMap;
use http::header::SET_COOKIE;
use sigcookie::{Cookie, CookieOptions, CookieSink, Priority, SameSite, SetCookieList};

#[test]
fn test_default_literal_header() {
    let cookie = Cookie::new("sid", Some("abc"), CookieOptions::default()).unwrap();
    assert_eq!(cookie.to_header(), "sid=abc; path=/; httponly");
}

#[test]
fn test_all_clauses_in_order() {
    let opts = CookieOptions::new()
        .path("/p")
        .expires(time::macros::datetime!(2031-05-06 07:08:09 UTC))
        .domain("d.example")
        .priority("Medium".parse::<Priority>().unwrap())
        .same_site("STRICT".parse::<SameSite>().unwrap())
        .secure(true)
        .partitioned(true);
    let cookie = Cookie::new("n", Some("v"), opts).unwrap();

    assert_eq!(
        cookie.to_header(),
        "n=v; path=/p; expires=Tue, 06 May 2031 07:08:09 GMT; domain=d.example; \
         priority=medium; samesite=strict; secure; httponly; partitioned"
    );
}

#[test]
fn test_http_only_can_be_disabled() {
    let opts = CookieOptions::new().http_only(false);
    let cookie = Cookie::new("n", Some("v"), opts).unwrap();
    assert_eq!(cookie.to_header(), "n=v; path=/");
}

#[test]
fn test_overwrite_leaves_one_header() {
    let mut sink = SetCookieList::new();
    let first = Cookie::new("sid", Some("first"), CookieOptions::default()).unwrap();
    let overwrite = CookieOptions::default().overwrite(true);
    let second = Cookie::new("sid", Some("second"), overwrite).unwrap();
    sink.push(&first);
    sink.push(&second);

    let matching: Vec<&String> = sink
        .headers()
        .iter()
        .filter(|h| h.starts_with("sid="))
        .collect();
    assert_eq!(matching, ["sid=second; path=/; httponly"]);
}

#[test]
fn test_signed_overwrite_on_response_headers() {
    let codec = codec(&[CURRENT_KEY]);
    let opts = CookieOptions::default().overwrite(true);
    let mut response = HeaderMap::new();

    codec.encode("sid", &1, &opts).unwrap().write_to(&mut response);
    let second = codec.encode("sid", &2, &opts).unwrap();
    second.write_to(&mut response);

    let values: Vec<String> = response
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(values, second.headers());
}
