//! String template rendering utilities.
//!
//! Placeholders have the form `{{KEY}}`. Rendering is a single left-to-right
//! pass: substituted values are never scanned again, and unknown keys are
//! left in the output untouched.

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(len) = after_open.find(CLOSE) else {
            break;
        };

        let key = &after_open[..len];
        match variables.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                result.push_str(&rest[..start]);
                result.push_str(value);
            }
            None => result.push_str(&rest[..start + OPEN.len() + len + CLOSE.len()]),
        }
        rest = &after_open[len + CLOSE.len()..];
    }

    result.push_str(rest);
    result
}

pub fn is_present(template: &str, key: &str) -> bool {
    let placeholder = format!("{{{{{}}}}}", key);
    template.contains(&placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let out = render("{{A}}-{{B}}-{{A}}", &[("A", "1"), ("B", "2")]);
        assert_eq!(out, "1-2-1");
    }

    #[test]
    fn leaves_single_braces_and_unknown_keys() {
        let out = render("{\n{{X}}\n}{{NOPE}}", &[("X", "x")]);
        assert_eq!(out, "{\nx\n}{{NOPE}}");
    }

    #[test]
    fn does_not_rescan_substituted_values() {
        let out = render("{{A}} {{B}}", &[("A", "{{B}}"), ("B", "b")]);
        assert_eq!(out, "{{B}} b");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        assert_eq!(render("x {{A", &[("A", "1")]), "x {{A");
    }

    #[test]
    fn is_present_detects_placeholder() {
        assert!(is_present("a {{KEY}} b", "KEY"));
        assert!(!is_present("a {KEY} b", "KEY"));
    }
}
