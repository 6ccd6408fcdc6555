use rs_docscrape::{extract_from_bytes, Options};

fn broad(html: &[u8]) -> String {
    let options = Options {
        include_title: false,
        ..Options::default()
    };
    extract_from_bytes(html, "", &options)
        .expect("extraction failed")
        .content
}

/// UTF-8 content is passed through untouched
#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"></head>\
        <body><main><p>Paramètres: é, ñ, ü, 中文</p></main></body></html>"
        .as_bytes();

    assert_eq!(broad(html), "Paramètres: é, ñ, ü, 中文");
}

/// ISO-8859-1 is converted to UTF-8
#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head>\
        <body><article><p>Caf\xE9 espa\xF1ol M\xFCnchen</p></article></body></html>";

    assert_eq!(broad(html), "Café español München");
}

/// Windows-1252 declared through http-equiv
#[test]
fn windows1252_http_equiv() {
    // 0x93/0x94 are curly double quotes in Windows-1252
    let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><main><p>\x93quoted\x94</p></main></body></html>";

    assert_eq!(broad(html), "\u{201c}quoted\u{201d}");
}

/// Invalid UTF-8 without a declaration becomes U+FFFD instead of failing
#[test]
fn invalid_bytes_are_replaced() {
    let html = b"<main><p>bad \xFF byte</p></main>";

    assert_eq!(broad(html), "bad \u{fffd} byte");
}
