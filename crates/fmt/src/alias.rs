use sqlfmt_core::{Token, TokenCategory};

use crate::options::AliasAs;

fn prev_non_comment(tokens: &[Token], i: usize) -> Option<&Token> {
    (0..i).rev().map(|j| &tokens[j]).find(|t| !t.category.is_comment())
}

fn next_non_comment(tokens: &[Token], i: usize) -> Option<&Token> {
    (i + 1..tokens.len()).map(|j| &tokens[j]).find(|t| !t.category.is_comment())
}

fn ends_a_select_list_element(token: &Token) -> bool {
    matches!(
        token.category,
        TokenCategory::Identifier
            | TokenCategory::QuotedIdentifier
            | TokenCategory::ArrayIdentifier
            | TokenCategory::Number
            | TokenCategory::String
            | TokenCategory::BlockEnd
    ) || (token.category == TokenCategory::Operator && token.value == "*")
}

/// True when `next` is a token that could only begin a new clause — i.e.
/// there is nothing else attached to the element the candidate alias
/// belongs to.
fn terminates_the_element(next: Option<&Token>) -> bool {
    match next {
        None => true,
        Some(t) => {
            (t.category == TokenCategory::Operator && (t.value == "," || t.value == ";"))
                || matches!(
                    t.category,
                    TokenCategory::ReservedCommand
                        | TokenCategory::ReservedBinaryCommand
                        | TokenCategory::ReservedDependentClause
                )
        }
    }
}

/// Pure predicate over `(prev_raw_token, cur_token, next_raw_token,
/// aliasAs)` (§9's design note): should the formatter synthesize an `AS`
/// keyword immediately before `tokens[idx]`?
pub fn should_insert_as_before(tokens: &[Token], idx: usize, alias_as: AliasAs) -> bool {
    if alias_as != AliasAs::Always {
        return false;
    }
    let cur = &tokens[idx];
    if !matches!(
        cur.category,
        TokenCategory::Identifier | TokenCategory::QuotedIdentifier | TokenCategory::ArrayIdentifier
    ) {
        return false;
    }
    let Some(prev) = prev_non_comment(tokens, idx) else {
        return false;
    };
    if prev.category == TokenCategory::ReservedKeyword && prev.value.eq_ignore_ascii_case("as") {
        return false;
    }
    ends_a_select_list_element(prev) && terminates_the_element(next_non_comment(tokens, idx))
}

/// Whether `tokens[idx]` is an `AS` keyword that should be dropped from the
/// output under `aliasAs: never`.
pub fn should_remove_as(token: &Token, alias_as: AliasAs) -> bool {
    alias_as == AliasAs::Never
        && token.category == TokenCategory::ReservedKeyword
        && token.value.eq_ignore_ascii_case("as")
}

/// Chooses the casing for a synthesized `AS` to match the majority keyword
/// case already observed in the statement.
pub fn synthesized_as_text(statement: &[Token]) -> &'static str {
    let mut upper = 0usize;
    let mut lower = 0usize;
    for token in statement {
        if !token.category.is_reserved() {
            continue;
        }
        let has_alpha = token.text.chars().any(|c| c.is_alphabetic());
        if !has_alpha {
            continue;
        }
        if token.text.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) {
            upper += 1;
        } else if token.text.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()) {
            lower += 1;
        }
    }
    if lower > upper { "as" } else { "AS" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_core::{disambiguate, lex};
    use sqlfmt_dialects::ansi;

    #[test]
    fn implicit_alias_before_from_is_detected() {
        let tokens = disambiguate(lex("select a b from t", &ansi::dialect()));
        let b = tokens.iter().position(|t| t.value == "b").unwrap();
        assert!(should_insert_as_before(&tokens, b, AliasAs::Always));
    }

    #[test]
    fn property_access_is_not_an_alias() {
        let tokens = disambiguate(lex("select a.b from t", &ansi::dialect()));
        let b = tokens.iter().position(|t| t.value == "b").unwrap();
        assert!(!should_insert_as_before(&tokens, b, AliasAs::Always));
    }

    #[test]
    fn existing_as_is_not_duplicated() {
        let tokens = disambiguate(lex("select a as b from t", &ansi::dialect()));
        let b = tokens.iter().position(|t| t.value == "b").unwrap();
        assert!(!should_insert_as_before(&tokens, b, AliasAs::Always));
    }

    #[test]
    fn preserve_never_inserts() {
        let tokens = disambiguate(lex("select a b from t", &ansi::dialect()));
        let b = tokens.iter().position(|t| t.value == "b").unwrap();
        assert!(!should_insert_as_before(&tokens, b, AliasAs::Preserve));
    }

    #[test]
    fn as_removed_under_never() {
        let tokens = disambiguate(lex("select a as b from t", &ansi::dialect()));
        let as_tok = tokens.iter().find(|t| t.value.eq_ignore_ascii_case("as")).unwrap();
        assert!(should_remove_as(as_tok, AliasAs::Never));
        assert!(!should_remove_as(as_tok, AliasAs::Preserve));
    }

    #[test]
    fn synthesized_as_matches_majority_case() {
        let tokens = disambiguate(lex("SELECT a FROM t WHERE x = 1", &ansi::dialect()));
        assert_eq!(synthesized_as_text(&tokens), "AS");
        let tokens = disambiguate(lex("select a from t where x = 1", &ansi::dialect()));
        assert_eq!(synthesized_as_text(&tokens), "as");
    }
}
