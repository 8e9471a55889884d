//! String helpers and a readable type-name printer.

/// Splits `s` on every occurrence of `delimiter`.
///
/// Unlike [`str::split`] this returns owned parts and always yields at least
/// one (possibly empty) element.
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![s.to_string()];
    }
    s.split(delimiter).map(str::to_string).collect()
}

/// Splits on `delimiter` only where it is not nested inside `open`/`close`.
///
/// ```
/// # use sxs_toolbox::strings::split_if_not_inside;
/// let parts = split_if_not_inside("a,Map<b,c>,d", ',', '<', '>');
/// assert_eq!(parts, vec!["a", "Map<b,c>", "d"]);
/// ```
pub fn split_if_not_inside(s: &str, delimiter: char, open: char, close: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut last_split = 0;

    for (pos, c) in s.char_indices() {
        if c == delimiter && depth == 0 {
            parts.push(s[last_split..pos].to_string());
            last_split = pos + c.len_utf8();
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
        }
    }
    parts.push(s[last_split..].to_string());
    parts
}

pub fn join<T: AsRef<str>>(parts: &[T], delimiter: &str) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// `std::any::type_name` with module paths stripped, generics included.
///
/// ```
/// # use sxs_toolbox::strings::pretty_type_name;
/// assert_eq!(pretty_type_name::<Vec<String>>(), "Vec<String>");
/// assert_eq!(pretty_type_name::<i32>(), "i32");
/// ```
pub fn pretty_type_name<T: ?Sized>() -> String {
    shorten_type_path(std::any::type_name::<T>())
}

/// Strips the module path off every path segment in a type name.
pub fn shorten_type_path(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(last_path_segment(&segment));
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(last_path_segment(&segment));
    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_empty_part() {
        assert_eq!(split("a--b--", "--"), vec!["a", "b", ""]);
        assert_eq!(split("abc", ""), vec!["abc"]);
    }

    #[test]
    fn test_count_and_join() {
        assert_eq!(count("abababa", "aba"), 2);
        assert_eq!(count("abc", ""), 0);
        assert_eq!(join(&["x", "y", "z"], ", "), "x, y, z");
        assert_eq!(join::<&str>(&[], ", "), "");
    }

    #[test]
    fn test_nested_type_names() {
        assert_eq!(
            shorten_type_path("std::collections::hash::map::HashMap<alloc::string::String, core::option::Option<i32>>"),
            "HashMap<String, Option<i32>>"
        );
        assert_eq!(shorten_type_path("&[u8]"), "&[u8]");
    }
}
