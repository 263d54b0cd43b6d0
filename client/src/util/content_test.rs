use super::*;

#[test]
fn build_content_appends_marker_suffix() {
    let content = build_content("Hello #tag", "ABCDE23456");
    assert_eq!(content, "Hello #tag\n\n#SharePli: ABCDE23456");
}

#[test]
fn build_content_suffix_and_length_invariants() {
    for (pattern, code) in [
        ("", ""),
        ("Hello #tag", "ABCDE23456"),
        ("🚀 Check out our new product.\nhttps://example.com", "XY23456789"),
        ("ends with newline\n", "Z234567892"),
    ] {
        let content = build_content(pattern, code);
        let suffix = format!("\n\n#{SHARE_MARKER}: {code}");
        assert!(content.ends_with(&suffix), "pattern = {pattern:?}");
        assert_eq!(content.len(), pattern.len() + suffix.len());
        assert!(content.starts_with(pattern));
    }
}

#[test]
fn build_content_does_not_escape_pattern() {
    let content = build_content("a <b> & \"c\"\n\n#SharePli: fake", "REAL234567");
    assert!(content.starts_with("a <b> & \"c\"\n\n#SharePli: fake"));
    assert!(content.ends_with("#SharePli: REAL234567"));
}
