use bmml2dot::core::decode_text;
use bmml2dot::error::DecodeError;

#[test]
fn decoder_handles_plus_and_percent_escapes() {
    assert_eq!(decode_text("go+to%20page").unwrap(), "go to page");
    assert_eq!(decode_text("a%2Cb%0Ac").unwrap(), "a,b\nc");
}

#[test]
fn decoder_maps_escapes_through_latin1() {
    // %FC is u-umlaut in ISO-8859-1, %E9 is e-acute
    assert_eq!(decode_text("Men%FCpunkt").unwrap(), "Men\u{fc}punkt");
    assert_eq!(decode_text("caf%e9").unwrap(), "caf\u{e9}");
}

#[test]
fn decoder_passes_plain_text_through() {
    assert_eq!(decode_text("").unwrap(), "");
    assert_eq!(decode_text("Home.bmml").unwrap(), "Home.bmml");
    assert_eq!(decode_text("gr\u{fc}n").unwrap(), "gr\u{fc}n");
}

#[test]
fn decoder_rejects_broken_escapes() {
    assert_eq!(
        decode_text("abc%4"),
        Err(DecodeError::IncompleteEscape { offset: 3 })
    );
    assert_eq!(decode_text("%"), Err(DecodeError::IncompleteEscape { offset: 0 }));
    assert_eq!(decode_text("x%zz"), Err(DecodeError::IllegalHex { offset: 1 }));
}
