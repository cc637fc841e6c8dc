//! Composable field rules.

/// A single check applied to a text field, with the message shown on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Fails when the trimmed value is empty.
    Required(&'static str),
    /// Fails unless the trimmed value parses as an integer in `min..=max`.
    IntegerRange {
        min: i64,
        max: i64,
        message: &'static str,
    },
    /// Fails unless the value is exactly `digits` ASCII digits.
    DigitCount {
        digits: usize,
        message: &'static str,
    },
    /// Fails unless the value looks like `local@domain.tld`.
    EmailShape(&'static str),
    /// Fails when the trimmed value has fewer than `chars` characters.
    MinLength {
        chars: usize,
        message: &'static str,
    },
}

impl Rule {
    /// Check a value against this rule.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let passed = match *self {
            Rule::Required(_) => !value.trim().is_empty(),
            Rule::IntegerRange { min, max, .. } => value
                .trim()
                .parse::<i64>()
                .map(|n| (min..=max).contains(&n))
                .unwrap_or(false),
            Rule::DigitCount { digits, .. } => {
                value.len() == digits && value.bytes().all(|b| b.is_ascii_digit())
            }
            Rule::EmailShape(_) => is_email_shaped(value),
            Rule::MinLength { chars, .. } => value.trim().chars().count() >= chars,
        };

        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Rule::Required(message)
            | Rule::EmailShape(message)
            | Rule::IntegerRange { message, .. }
            | Rule::DigitCount { message, .. }
            | Rule::MinLength { message, .. } => message,
        }
    }
}

/// Run rules in order and return the first failure message.
pub fn first_failure(rules: &[Rule], value: &str) -> Option<String> {
    rules
        .iter()
        .find_map(|rule| rule.check(value).err())
        .map(str::to_string)
}

/// `\S+@\S+\.\S+` found anywhere in the value: some `@` with a non-blank
/// character right before it, followed by a non-blank run holding a dot with
/// something on both sides. Surrounding text is not checked.
fn is_email_shaped(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.iter().enumerate().any(|(at, &c)| {
        c == '@' && at > 0 && !chars[at - 1].is_whitespace() && has_inner_dot(&chars[at + 1..])
    })
}

/// Whether the leading non-blank run of `rest` has a dot that is neither
/// its first nor its last character.
fn has_inner_dot(rest: &[char]) -> bool {
    let run = rest.iter().take_while(|c| !c.is_whitespace()).count();
    (1..run.saturating_sub(1)).any(|i| rest[i] == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PHONE: Rule = Rule::DigitCount {
        digits: 10,
        message: "bad phone",
    };
    const AGE: Rule = Rule::IntegerRange {
        min: 1,
        max: 120,
        message: "bad age",
    };

    #[test]
    fn test_required() {
        let rule = Rule::Required("required");
        assert!(rule.check("x").is_ok());
        assert_eq!(rule.check("   "), Err("required"));
        assert_eq!(rule.check(""), Err("required"));
    }

    #[test]
    fn test_integer_range() {
        assert!(AGE.check("1").is_ok());
        assert!(AGE.check(" 120 ").is_ok());
        assert!(AGE.check("0").is_err());
        assert!(AGE.check("121").is_err());
        assert!(AGE.check("4.5").is_err());
        assert!(AGE.check("abc").is_err());
    }

    #[test]
    fn test_digit_count() {
        assert!(PHONE.check("9876543210").is_ok());
        assert!(PHONE.check("987654321").is_err());
        assert!(PHONE.check("98765432100").is_err());
        assert!(PHONE.check("98765 4321").is_err());
        assert!(PHONE.check("+919876543").is_err());
    }

    #[test]
    fn test_email_shape() {
        let rule = Rule::EmailShape("bad email");
        assert!(rule.check("lab@example.com").is_ok());
        assert!(rule.check("a@b.c").is_ok());
        assert!(rule.check("lab@example").is_err());
        assert!(rule.check("@example.com").is_err());
        assert!(rule.check("lab@.com").is_err());
        assert!(rule.check("lab @example.com").is_err());
        assert!(rule.check("lab@example .com").is_err());
    }

    #[test]
    fn test_email_shape_matches_anywhere_in_value() {
        let rule = Rule::EmailShape("bad email");
        assert!(rule.check("x y@a.b").is_ok());
        assert!(rule.check("Contact: owner@sunrise.in (mornings)").is_ok());
        assert!(rule.check("owner@sunrise").is_err());
        assert!(rule.check("owner@ sunrise.in").is_err());
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let rules = [Rule::Required("Phone is required"), PHONE];
        assert_eq!(first_failure(&rules, "").as_deref(), Some("Phone is required"));
        assert_eq!(first_failure(&rules, "123").as_deref(), Some("bad phone"));
        assert_eq!(first_failure(&rules, "9876543210"), None);
    }

    proptest! {
        #[test]
        fn prop_digit_count_accepts_exactly_ten_digits(phone in "[0-9]{10}") {
            prop_assert!(PHONE.check(&phone).is_ok());
        }

        #[test]
        fn prop_age_range(age in -500i64..500) {
            let ok = AGE.check(&age.to_string()).is_ok();
            prop_assert_eq!(ok, (1..=120).contains(&age));
        }
    }
}
