use std::borrow::Cow;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Inserts an underscore at the beginning of the string if the string is a
/// reserved keyword.
pub fn unkeywordize(ident: &str) -> Cow<'_, str> {
    if KEYWORDS.binary_search(&ident).is_ok() {
        format!("_{ident}").into()
    } else {
        ident.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_sorted() {
        let mut sorted = KEYWORDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, KEYWORDS);
    }

    #[test]
    fn escapes_keywords() {
        assert_eq!(unkeywordize("in"), "_in");
        assert_eq!(unkeywordize("cr"), "cr");
    }
}
