mod headers;
mod roundtrip;
mod validation;
