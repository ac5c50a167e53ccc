/// Quote `value` as an XPath string literal.
///
/// XPath 1.0 has no escape sequences inside literals, so a value containing both
/// quote characters is split on `'` and rebuilt with `concat()`.
pub fn escape_xpath_value(value: &str) -> String {
    let has_double = value.contains('"');
    let has_single = value.contains('\'');

    if has_double && has_single {
        let parts: Vec<&str> = value.split('\'').collect();
        return format!("concat('{}')", parts.join("', \"'\", '"));
    }

    if has_single {
        return format!("\"{}\"", value);
    }

    format!("'{}'", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluate a quoted literal or a `concat()` of quoted literals back to its string value.
    fn eval_literal(expr: &str) -> String {
        let expr = expr.trim();
        let body = match expr.strip_prefix("concat(").and_then(|rest| rest.strip_suffix(')')) {
            Some(body) => body,
            None => return read_literal(expr).0,
        };

        let mut out = String::new();
        let mut rest = body.trim_start();
        while !rest.is_empty() {
            let (text, remaining) = read_literal(rest);
            out.push_str(&text);
            rest = remaining.trim_start();
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
            }
        }
        out
    }

    fn read_literal(input: &str) -> (String, &str) {
        let quote = input.chars().next().expect("empty literal");
        assert!(quote == '\'' || quote == '"', "not a literal: {}", input);
        let end = input[1..].find(quote).expect("unterminated literal") + 1;
        (input[1..end].to_string(), &input[end + 1..])
    }

    #[test]
    fn test_plain_value_uses_single_quotes() {
        assert_eq!(escape_xpath_value("Hello"), "'Hello'");
        assert_eq!(escape_xpath_value(""), "''");
    }

    #[test]
    fn test_apostrophe_uses_double_quotes() {
        assert_eq!(escape_xpath_value("O'Brien"), "\"O'Brien\"");
    }

    #[test]
    fn test_double_quote_uses_single_quotes() {
        assert_eq!(escape_xpath_value("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_both_quotes_use_concat() {
        assert_eq!(escape_xpath_value("it's \"x\""), "concat('it', \"'\", 's \"x\"')");
    }

    #[test]
    fn test_round_trip() {
        let values = [
            "plain",
            "O'Brien",
            "\"quoted\"",
            "'both' \"kinds\"",
            "''",
            "'\"'\"",
            "trailing'",
            "\"leading",
            "mixed ' and \" with ' more",
        ];

        for value in values {
            let literal = escape_xpath_value(value);
            assert_eq!(eval_literal(&literal), value, "literal {} did not round-trip", literal);
        }
    }
}
