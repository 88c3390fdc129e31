/// Table naming for model types: snake_case, pluralized unless `singular_table` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingStrategy {
    pub singular_table: bool,
}

impl NamingStrategy {
    pub fn new(singular_table: bool) -> Self {
        Self { singular_table }
    }

    pub fn table_name(&self, model: &str) -> String {
        let name = to_snake_case(model);
        if self.singular_table {
            name
        } else {
            pluralize(&name)
        }
    }
}

/// `UserProfile` -> `user_profile`, `HTTPRequest` -> `http_request`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    out.push('_');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let before_y = stem.chars().last();
        if before_y.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{}ies", stem);
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("User"), "user");
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("HTTPRequest"), "http_request");
        assert_eq!(to_snake_case("userID"), "user_id");
        assert_eq!(to_snake_case("order_item"), "order_item");
    }

    #[test]
    fn test_plural_table_names() {
        let naming = NamingStrategy::default();
        assert_eq!(naming.table_name("UserProfile"), "user_profiles");
        assert_eq!(naming.table_name("Category"), "categories");
        assert_eq!(naming.table_name("Holiday"), "holidays");
        assert_eq!(naming.table_name("Status"), "statuses");
        assert_eq!(naming.table_name("Box"), "boxes");
        assert_eq!(naming.table_name("Match"), "matches");
    }

    #[test]
    fn test_singular_table_names() {
        let naming = NamingStrategy::new(true);
        assert_eq!(naming.table_name("UserProfile"), "user_profile");
        assert_eq!(naming.table_name("Category"), "category");
    }
}
