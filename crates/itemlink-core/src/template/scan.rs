//! Placeholder scanner.
//!
//! A placeholder is `:` followed by the longest run of identifier bytes, so a
//! shorter name can never match inside a longer one (`:id` vs `:idType`).

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Scan {
    pub segments: Vec<Segment>,
    /// Byte offsets of `:` characters directly followed by a digit.
    pub malformed: Vec<usize>,
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns true if `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b) if is_ident_start(b) => bytes.all(is_ident_continue),
        _ => false,
    }
}

pub(crate) fn scan(template: &str) -> Scan {
    let bytes = template.as_bytes();
    let mut out = Scan::default();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b':' {
            match bytes.get(i + 1) {
                Some(&b) if is_ident_start(b) => {
                    let mut end = i + 2;
                    while end < bytes.len() && is_ident_continue(bytes[end]) {
                        end += 1;
                    }
                    if literal_start < i {
                        out.segments
                            .push(Segment::Literal(template[literal_start..i].to_string()));
                    }
                    out.segments
                        .push(Segment::Placeholder(template[i + 1..end].to_string()));
                    i = end;
                    literal_start = end;
                    continue;
                }
                Some(b) if b.is_ascii_digit() => out.malformed.push(i),
                _ => {}
            }
        }
        i += 1;
    }

    if literal_start < bytes.len() {
        out.segments
            .push(Segment::Literal(template[literal_start..].to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn ph(s: &str) -> Segment {
        Segment::Placeholder(s.to_string())
    }

    #[test]
    fn splits_literals_and_placeholders() {
        let s = scan("/items/:id/edit");
        assert_eq!(s.segments, vec![lit("/items/"), ph("id"), lit("/edit")]);
        assert!(s.malformed.is_empty());
    }

    #[test]
    fn longest_identifier_wins() {
        let s = scan("/x/:idType/:id");
        assert_eq!(s.segments, vec![lit("/x/"), ph("idType"), lit("/"), ph("id")]);
    }

    #[test]
    fn placeholder_at_end_and_start() {
        assert_eq!(scan(":a").segments, vec![ph("a")]);
        assert_eq!(scan(":a-:b").segments, vec![ph("a"), lit("-"), ph("b")]);
    }

    #[test]
    fn lone_colons_are_literal() {
        let s = scan("a: b:/c:");
        assert_eq!(s.segments, vec![lit("a: b:/c:")]);
        assert!(s.malformed.is_empty());
    }

    #[test]
    fn double_colon_keeps_first_as_literal() {
        assert_eq!(scan("::id").segments, vec![lit(":"), ph("id")]);
    }

    #[test]
    fn digit_after_colon_is_flagged() {
        let s = scan("/host:8080/:id");
        assert_eq!(s.malformed, vec![5]);
        assert_eq!(s.segments, vec![lit("/host:8080/"), ph("id")]);
    }

    #[test]
    fn non_ascii_literals_survive() {
        assert_eq!(
            scan("/café/:id?q=é").segments,
            vec![lit("/café/"), ph("id"), lit("?q=é")]
        );
    }

    #[test]
    fn identifier_syntax() {
        assert!(is_identifier("id"));
        assert!(is_identifier("_x9"));
        assert!(is_identifier("idType"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9id"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("é"));
    }
}
