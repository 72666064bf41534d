use super::report::RuleCount;

/// A literal find-and-replace rule
///
/// `from` is matched as a plain substring. It must not be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    from: &'static str,
    to: &'static str,
}

impl Substitution {
    /// # Panics
    ///
    /// Panics if `from` is empty; in a `const` this is a compile error.
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        assert!(!from.is_empty(), "substitution pattern is empty");
        Self { from, to }
    }

    pub fn from(&self) -> &'static str {
        self.from
    }

    pub fn to(&self) -> &'static str {
        self.to
    }
}

/// Rules applied to launcher scripts, in order
pub const LAUNCHER_QUOTES: [Substitution; 2] = [
    Substitution::new("$0", "\"$0\""),
    Substitution::new("$DIR", "\"$DIR\""),
];

/// Quote `$0` and `$DIR` everywhere in `content`
///
/// Matching is literal, so an already quoted `"$0"` is quoted again.
pub fn patch(content: &str) -> String {
    patch_with(content, &LAUNCHER_QUOTES).0
}

/// Apply `rules` in order, each one to the output of the previous rule
///
/// Returns the new text and the number of occurrences each rule replaced.
pub fn patch_with(content: &str, rules: &[Substitution]) -> (String, Vec<RuleCount>) {
    let mut text = content.to_owned();
    let mut counts = Vec::with_capacity(rules.len());

    for rule in rules {
        let count = text.matches(rule.from).count();
        if count > 0 {
            text = text.replace(rule.from, rule.to);
        }
        counts.push(RuleCount {
            from: rule.from.to_string(),
            to: rule.to.to_string(),
            count,
        });
    }

    (text, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_self_reference() {
        assert_eq!(patch(r#"exec $0 "$@""#), r#"exec "$0" "$@""#);
    }

    #[test]
    fn quotes_every_dir_occurrence() {
        assert_eq!(patch("DIR=$DIR; cd $DIR"), r#"DIR="$DIR"; cd "$DIR""#);
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let script = "#!/bin/sh\necho hello\n";
        assert_eq!(patch(script), script);
    }

    #[test]
    fn already_quoted_token_is_quoted_again() {
        let once = patch(r#"exec "$0""#);
        assert_eq!(once, r#"exec ""$0"""#);
        assert_eq!(patch(&once), r#"exec """$0""""#);
    }

    #[test]
    fn matches_inside_longer_names() {
        // Literal matching does not respect variable name boundaries.
        assert_eq!(patch("$DIRNAME $01"), r#""$DIR"NAME "$0"1"#);
    }

    #[test]
    fn counts_follow_rule_order() {
        let (text, counts) = patch_with("$0 $DIR $DIR", &LAUNCHER_QUOTES);
        assert_eq!(text, r#""$0" "$DIR" "$DIR""#);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].from, "$0");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].from, "$DIR");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let rules = [Substitution::new("a", "bb"), Substitution::new("bb", "c")];
        let (text, counts) = patch_with("ab", &rules);
        assert_eq!(text, "cb");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    #[should_panic(expected = "substitution pattern is empty")]
    fn empty_pattern_is_rejected() {
        let _ = Substitution::new("", "x");
    }

    #[test]
    fn rule_accessors() {
        assert_eq!(LAUNCHER_QUOTES[1].from(), "$DIR");
        assert_eq!(LAUNCHER_QUOTES[1].to(), "\"$DIR\"");
    }

    #[test]
    fn empty_rule_list_is_identity() {
        let (text, counts) = patch_with("exec $0", &[]);
        assert_eq!(text, "exec $0");
        assert!(counts.is_empty());
    }
}
