//! Structural syntax check for route configuration text.
//!
//! Not a TOML parser: it catches the mistakes hand edits and broken
//! generators tend to make, line by line, and reports all of them.

use serde::Serialize;

/// Outcome of a syntax check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyntaxReport {
    pub valid: bool,
    /// One message per problem, in line order.
    pub errors: Vec<String>,
}

/// Check `text` line by line. Never stops at the first problem.
pub fn validate_toml_syntax(text: &str) -> SyntaxReport {
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw.trim()).trim_end();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            check_header(line, line_no, &mut errors);
        } else {
            check_assignment(line, line_no, &mut errors);
        }
    }

    if !errors.is_empty() {
        tracing::warn!(problems = errors.len(), "Route configuration failed syntax check");
    }

    SyntaxReport {
        valid: errors.is_empty(),
        errors,
    }
}

/// Drop a `#` comment that starts outside a double-quoted string.
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;

    for (pos, ch) in line.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else {
            match ch {
                '"' => in_string = true,
                '#' => return &line[..pos],
                _ => {}
            }
        }
    }
    line
}

fn check_header(line: &str, line_no: usize, errors: &mut Vec<String>) {
    let (name, kind) = if line.starts_with("[[") {
        if !line.ends_with("]]") || line.len() < 4 {
            errors.push(format!("Line {line_no}: unclosed array of tables header `{line}`"));
            return;
        }
        (&line[2..line.len() - 2], "array of tables")
    } else {
        if !line.ends_with(']') || line.len() < 2 {
            errors.push(format!("Line {line_no}: unclosed table header `{line}`"));
            return;
        }
        (&line[1..line.len() - 1], "table")
    };

    if name.trim().is_empty() {
        errors.push(format!("Line {line_no}: empty {kind} name"));
    }
}

fn check_assignment(line: &str, line_no: usize, errors: &mut Vec<String>) {
    let separators = assignment_separators(line);
    let eq = match separators.as_slice() {
        [] => {
            errors.push(format!("Line {line_no}: expected `key = value` assignment"));
            return;
        }
        [eq] => *eq,
        _ => {
            errors.push(format!("Line {line_no}: malformed assignment, more than one `=`"));
            return;
        }
    };

    let key = line[..eq].trim();
    let value = line[eq + 1..].trim();

    if key.is_empty() {
        errors.push(format!("Line {line_no}: missing key before `=`"));
    }
    if value.is_empty() {
        errors.push(format!("Line {line_no}: missing value after `=`"));
        return;
    }

    if let Err(problem) = check_value(value) {
        let key = if key.is_empty() { "<missing>" } else { key };
        errors.push(format!("Line {line_no}: value for `{key}` {problem}"));
    }
}

/// Byte offsets of `=` signs outside double-quoted strings.
fn assignment_separators(line: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (pos, ch) in line.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
        } else {
            match ch {
                '"' => in_string = true,
                '=' => positions.push(pos),
                _ => {}
            }
        }
    }
    positions
}

fn check_value(value: &str) -> Result<(), &'static str> {
    if let Some(rest) = value.strip_prefix('"') {
        let inner = rest.strip_suffix('"').ok_or("has an unterminated string")?;
        return check_string_body(inner);
    }

    if value.starts_with('[') || value == "true" || value == "false" || is_number(value) {
        return Ok(());
    }

    Err("must be quoted")
}

fn check_string_body(inner: &str) -> Result<(), &'static str> {
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                // The closing quote was escaped: `"abc\"`.
                if chars.next().is_none() {
                    return Err("has an unterminated string");
                }
            }
            '"' => return Err("contains an unescaped quote"),
            _ => {}
        }
    }
    Ok(())
}

/// TOML integer or float: decimal with optional fraction and exponent,
/// `inf`/`nan`, or unsigned `0x`/`0o`/`0b` integers.
fn is_number(value: &str) -> bool {
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = value.strip_prefix(prefix) {
            return is_digit_run(digits, |c| c.is_digit(radix));
        }
    }

    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if matches!(unsigned, "inf" | "nan") {
        return true;
    }

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let (int, fraction) = match mantissa.split_once('.') {
        Some((int, fraction)) => (int, Some(fraction)),
        None => (mantissa, None),
    };

    let decimal = |s: &str| is_digit_run(s, |c| c.is_ascii_digit());
    if !decimal(int) || (int.len() > 1 && int.starts_with('0')) {
        return false;
    }
    if fraction.is_some_and(|f| !decimal(f)) {
        return false;
    }
    match exponent {
        Some(exp) => decimal(exp.strip_prefix(['+', '-']).unwrap_or(exp)),
        None => true,
    }
}

/// Non-empty digits; `_` only between digits.
fn is_digit_run(s: &str, is_digit: impl Fn(char) -> bool) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars().all(|c| c == '_' || is_digit(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_route_config() {
        let text = "# Routes\n\
                    [[env.staging.routes]]\n\
                    pattern = \"api.example.com/*\"\n\
                    zone_id = \"abc\"\n\
                    \n\
                    [limits]\n\
                    max = 10\n\
                    ratio = 0.5\n\
                    enabled = true\n\
                    tags = [\"a\", \"b\"]\n";
        let report = validate_toml_syntax(text);
        assert!(report.valid, "{:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_empty_text_is_valid() {
        assert!(validate_toml_syntax("").valid);
        assert!(validate_toml_syntax("\n  \n# only comments\n").valid);
    }

    #[test]
    fn test_unclosed_headers() {
        let report = validate_toml_syntax("[[routes]\npattern = \"a\"\n[env\n");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("Line 1: unclosed array of tables"));
        assert!(report.errors[1].starts_with("Line 3: unclosed table"));
    }

    #[test]
    fn test_empty_header_names() {
        let report = validate_toml_syntax("[[ ]]\n[]\n");
        assert_eq!(
            report.errors,
            vec!["Line 1: empty array of tables name", "Line 2: empty table name"]
        );
    }

    #[test]
    fn test_malformed_assignments() {
        let report = validate_toml_syntax("pattern\na = b = c\n= \"x\"\nkey =\n");
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[0].contains("expected `key = value`"));
        assert!(report.errors[1].contains("more than one `=`"));
        assert!(report.errors[2].contains("missing key"));
        assert!(report.errors[3].contains("missing value"));
    }

    #[test]
    fn test_equals_inside_string_is_not_a_separator() {
        assert!(validate_toml_syntax("pattern = \"example.com/?a=b\"").valid);
    }

    #[test]
    fn test_unquoted_string_value() {
        let report = validate_toml_syntax("pattern = example.com/*");
        assert_eq!(report.errors, vec!["Line 1: value for `pattern` must be quoted"]);
    }

    #[test]
    fn test_unescaped_interior_quote() {
        let report = validate_toml_syntax("pattern = \"a\"b\"");
        assert_eq!(report.errors, vec!["Line 1: value for `pattern` contains an unescaped quote"]);

        assert!(validate_toml_syntax(r#"pattern = "a\"b""#).valid);
        assert!(validate_toml_syntax(r#"pattern = "a\\""#).valid);
    }

    #[test]
    fn test_unterminated_string() {
        assert!(!validate_toml_syntax("pattern = \"abc").valid);
        assert!(!validate_toml_syntax(r#"pattern = "abc\""#).valid);
        assert!(!validate_toml_syntax("pattern = \"").valid);
    }

    #[test]
    fn test_numbers_follow_toml_rules() {
        for value in [
            "0", "42", "-17", "+3", "1_000", "3.14", "-0.5", "1e6", "6.02E+23", "1.5e-3", "inf",
            "-inf", "nan", "+nan", "0xff", "0xDEAD_beef", "0o17", "0b101",
        ] {
            let report = validate_toml_syntax(&format!("x = {value}"));
            assert!(report.valid, "{value}: {:?}", report.errors);
        }
    }

    #[test]
    fn test_non_toml_numbers_rejected() {
        for value in [
            "Infinity", "infinity", "INF", "NaN", "NAN", "01", "1__0", "_1", "1_", "1.", ".5",
            "1e", "0x", "-0xff", "0b102", "0o8", "1.2.3",
        ] {
            let report = validate_toml_syntax(&format!("x = {value}"));
            assert_eq!(
                report.errors,
                vec!["Line 1: value for `x` must be quoted".to_string()],
                "{value}"
            );
        }
    }

    #[test]
    fn test_trailing_comments() {
        let text = "[[routes]] # production\n\
                    pattern = \"example.com/*\" # main route\n\
                    weight = 10 # units\n\
                    note = \"a # not a comment\"\n";
        let report = validate_toml_syntax(text);
        assert!(report.valid, "{:?}", report.errors);

        let report = validate_toml_syntax("pattern = bare # comment\n[[routes] # c\n");
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_collects_every_error() {
        let text = "[[routes]\npattern = bare\n[[]]\nx = 1 = 2\n";
        let report = validate_toml_syntax(text);
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[3].starts_with("Line 4:"));
    }
}
