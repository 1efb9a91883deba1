//! Route template substitution.
//!
//! # Design
//! A route template is a relative path such as `/gitignore/templates/{name}`.
//! `substitute` fills placeholders in a single left-to-right pass: inserted
//! values are copied verbatim and never rescanned, so a value that itself looks
//! like `{name}` cannot trigger a second expansion. Placeholders without a
//! matching entry are left in the output exactly as written; the server is the
//! one that rejects them.

/// Replace every `{key}` in `template` with the value paired with `key`.
///
/// When a key appears more than once in `replace`, the first pair wins.
pub fn substitute(template: &str, replace: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unterminated brace: nothing left to substitute.
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match lookup(replace, key) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Placeholder keys mentioned in `template`, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else { break };
        keys.push(&after[..close]);
        rest = &after[close + 1..];
    }
    keys
}

fn lookup<'a>(replace: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    replace.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(substitute("/emojis", &[]), "/emojis");
        assert_eq!(substitute("/rate_limit", &[("name", "ignored")]), "/rate_limit");
    }

    #[test]
    fn placeholder_is_replaced() {
        let path = substitute("/gitignore/templates/{name}", &[("name", "Python")]);
        assert_eq!(path, "/gitignore/templates/Python");
    }

    #[test]
    fn value_is_inserted_literally() {
        let path = substitute("/gitignore/templates/{name}", &[("name", "C++")]);
        assert_eq!(path, "/gitignore/templates/C++");
    }

    #[test]
    fn inserted_value_is_not_expanded_again() {
        let replace = [("name", "{owner}"), ("owner", "octocat")];
        let path = substitute("/gitignore/templates/{name}", &replace);
        assert_eq!(path, "/gitignore/templates/{owner}");
    }

    #[test]
    fn missing_key_leaves_placeholder() {
        let path = substitute("/gitignore/templates/{name}", &[]);
        assert_eq!(path, "/gitignore/templates/{name}");

        let path = substitute("/gitignore/templates/{name}", &[("other", "x")]);
        assert_eq!(path, "/gitignore/templates/{name}");
    }

    #[test]
    fn several_placeholders() {
        let path = substitute(
            "/repos/{owner}/{repo}/issues",
            &[("repo", "hello-world"), ("owner", "octocat")],
        );
        assert_eq!(path, "/repos/octocat/hello-world/issues");
    }

    #[test]
    fn first_duplicate_wins() {
        let path = substitute("/x/{name}", &[("name", "first"), ("name", "second")]);
        assert_eq!(path, "/x/first");
    }

    #[test]
    fn unterminated_brace_is_copied_through() {
        assert_eq!(substitute("/x/{name", &[("name", "y")]), "/x/{name");
        assert_eq!(substitute("/x/{a}/{b", &[("a", "1")]), "/x/1/{b");
    }

    #[test]
    fn placeholders_are_listed_in_order() {
        assert_eq!(placeholders("/repos/{owner}/{repo}"), vec!["owner", "repo"]);
        assert!(placeholders("/emojis").is_empty());
        assert_eq!(placeholders("/x/{a}/{b"), vec!["a"]);
    }
}
