/// Converts a TOON key to a camelCase identifier: splits on underscores,
/// lower-cases the whole first segment and capitalizes the first character
/// of every following segment.
pub fn to_camel_case(input: &str) -> String {
    input
        .split('_')
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(index, part)| {
            if index == 0 {
                part.to_lowercase()
            } else {
                capitalize(part)
            }
        })
        .collect()
}

/// Converts a TOON key to a PascalCase class name.
pub fn to_pascal_case(input: &str) -> String {
    capitalize(&to_camel_case(input))
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Heuristic singular form for collection element class names:
/// `ies` → `y`, else drop a trailing `s`, else unchanged. Irregular plurals
/// are not handled.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    if word.len() > 1 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Renders a Kotlin string literal, escaping backslashes, quotes, and the
/// template marker `$`.
pub fn kotlin_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"'  => out.push_str("\\\""),
            '$'  => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _    => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("first_last_middle"), "firstLastMiddle");
        assert_eq!(to_camel_case("simple"), "simple");
        assert_eq!(to_camel_case("Already"), "already");
        assert_eq!(to_camel_case("__odd__key__"), "oddKey");
    }

    #[test]
    fn test_to_camel_case_lowercases_whole_first_segment() {
        assert_eq!(to_camel_case("USER_NAME"), "userNAME");
        assert_eq!(to_camel_case("ID"), "id");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("hike"), "Hike");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("hikes"), "hike");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("data"), "data");
        assert_eq!(singularize("s"), "s");
    }

    #[test]
    fn test_kotlin_quote() {
        assert_eq!(kotlin_quote("plain"), "\"plain\"");
        assert_eq!(kotlin_quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(kotlin_quote("cost: $5"), "\"cost: \\$5\"");
    }
}
