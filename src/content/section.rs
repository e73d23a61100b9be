//! Section key derivation.

/// Compute the grouping key for a filename.
///
/// The key is everything after the *first* `.` in the name, not the final
/// extension; a name with no `.` (or nothing after it) maps to the literal
/// `.` section. This doubles as the classification hint for page sections,
/// so the first-dot split must not be "simplified" into an extension split.
///
/// ```text
/// section_key("Foo.bar.baz")    == "bar.baz"
/// section_key("archive.tar.gz") == "tar.gz"
/// section_key("noextension")    == "."
/// ```
pub fn section_key(filename: &str) -> &str {
    match filename.split_once('.') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_key_multiple_dots() {
        assert_eq!(section_key("Foo.bar.baz"), "bar.baz");
        assert_eq!(section_key("archive.tar.gz"), "tar.gz");
        assert_eq!(section_key("post.2024.md"), "2024.md");
    }

    #[test]
    fn test_section_key_single_dot() {
        assert_eq!(section_key("hello.md"), "md");
        assert_eq!(section_key("index.html"), "html");
    }

    #[test]
    fn test_section_key_no_dot() {
        assert_eq!(section_key("noextension"), ".");
        assert_eq!(section_key(""), ".");
    }

    #[test]
    fn test_section_key_trailing_dot() {
        // Nothing after the first dot falls back to the dot section.
        assert_eq!(section_key("foo."), ".");
    }

    #[test]
    fn test_section_key_leading_dot() {
        // Dotfiles group under everything after their leading dot.
        assert_eq!(section_key(".gitignore"), "gitignore");
        assert_eq!(section_key(".config.yaml"), "config.yaml");
    }
}
