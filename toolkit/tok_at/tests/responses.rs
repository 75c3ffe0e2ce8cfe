//! End-to-end checks of the public extraction API.

use pretty_assertions::assert_eq;
use tok_at::{parse_cgpaddr, parse_quoted, parse_temperature, ResponseError, Scale};

#[test]
fn cgpaddr_round_trip_from_raw_modem_bytes() {
    let raw = "\r\n+CGPADDR: 192.168.4.20\r\n";
    assert_eq!(parse_cgpaddr(raw), Ok("192.168.4.20".to_owned()));
}

#[test]
fn extraction_failures_are_errors_not_panics() {
    for garbage in ["", "OK", "+CGPADDR: x", "\r\nERROR\r\n"] {
        assert_eq!(
            parse_cgpaddr(garbage),
            Err(ResponseError::Malformed("+CGPADDR")),
            "{garbage:?}"
        );
    }
}

#[test]
fn quoted_and_temperature_extractors_agree_on_their_domains() {
    assert_eq!(parse_quoted("\"ready\""), Ok("ready".to_owned()));

    let reading = parse_temperature("-7C").expect("valid reading");
    assert_eq!(reading.degrees, -7);
    assert_eq!(reading.scale, Scale::Celsius);
}

#[test]
fn error_messages_name_the_response_kind() {
    let err = parse_cgpaddr("junk").expect_err("junk must not parse");
    assert_eq!(err.to_string(), "malformed +CGPADDR response");

    let err = parse_temperature("19C!").expect_err("trailing byte");
    assert_eq!(err.to_string(), "1 trailing bytes after a complete response");
}
