use std::sync::LazyLock;

use regex::Regex;

static LEADING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?").expect("valid fence regex"));
static TRAILING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```$").expect("valid fence regex"));
static FALLBACK_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-,]\s*").expect("valid delimiter regex"));

/// Removes a leading ```` ``` ```` / ```` ```json ```` marker and a trailing
/// ```` ``` ````, then trims.
pub fn strip_code_fences(raw: &str) -> String {
    let without_leading = LEADING_FENCE.replace(raw.trim(), "");
    let without_trailing = TRAILING_FENCE.replace(&without_leading, "");
    without_trailing.trim().to_string()
}

/// Turns a model reply into an ordered ingredient list.
///
/// A JSON array is taken as-is (non-string elements keep their JSON text).
/// Anything else is split on `-` or `,`, with whitespace and surrounding double
/// quotes stripped from each token. Empty entries are dropped in both cases.
pub fn parse_ingredient_reply(raw: &str) -> Vec<String> {
    let clean = strip_code_fences(raw);

    match serde_json::from_str::<serde_json::Value>(&clean) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|item| !item.is_empty())
            .collect(),
        _ => {
            tracing::debug!(reply = %clean, "Reply is not a JSON array, splitting on delimiters");
            split_fallback(&clean)
        }
    }
}

/// Splits the free-text edit box on commas.
pub fn parse_ingredient_edit(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_fallback(clean: &str) -> Vec<String> {
    FALLBACK_DELIMITER
        .split(clean)
        .map(|token| token.trim().trim_matches('"').trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_reply_equals_inner_text_trimmed() {
        let inner = r#"["양파", "당근"]"#;
        assert_eq!(strip_code_fences(&format!("```json\n{inner}\n```")), inner);
        assert_eq!(strip_code_fences(&format!("  ```JSON {inner} ```  ")), inner);
        assert_eq!(strip_code_fences(&format!("```\n{inner}\n```")), inner);
        assert_eq!(strip_code_fences(inner), inner);
    }

    #[test]
    fn json_array_is_taken_verbatim() {
        assert_eq!(
            parse_ingredient_reply(r#"["양파", "당근", "감자"]"#),
            vec!["양파", "당근", "감자"]
        );
    }

    #[test]
    fn fenced_json_array_is_parsed() {
        assert_eq!(
            parse_ingredient_reply("```json\n[\"두부\", \"대파\"]\n```"),
            vec!["두부", "대파"]
        );
    }

    #[test]
    fn non_json_reply_falls_back_to_delimiters() {
        assert_eq!(
            parse_ingredient_reply("양파 - 당근, 감자"),
            vec!["양파", "당근", "감자"]
        );
    }

    #[test]
    fn fallback_strips_quotes_and_drops_empties() {
        assert_eq!(
            parse_ingredient_reply(r#""계란", , "우유",-"#),
            vec!["계란", "우유"]
        );
    }

    #[test]
    fn non_array_json_uses_fallback() {
        assert_eq!(parse_ingredient_reply(r#""양파, 마늘""#), vec!["양파", "마늘"]);
    }

    #[test]
    fn non_string_array_elements_keep_json_text() {
        assert_eq!(parse_ingredient_reply(r#"["쌀", 3, ""]"#), vec!["쌀", "3"]);
    }

    #[test]
    fn edit_text_splits_on_commas_only() {
        assert_eq!(
            parse_ingredient_edit(" 김치 , 돼지고기,, 고추-장 "),
            vec!["김치", "돼지고기", "고추-장"]
        );
        assert!(parse_ingredient_edit(" , ").is_empty());
    }
}
