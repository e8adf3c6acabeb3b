use crate::token::{Token, TokenCategory};

/// Applies the five category-rewriting passes, in order, over the whole
/// token stream. Each pass only looks at the nearest non-comment neighbor
/// on either side; later passes see the rewrites made by earlier ones.
pub fn disambiguate(mut tokens: Vec<Token>) -> Vec<Token> {
    reserved_near_property_access(&mut tokens);
    function_name_to_identifier(&mut tokens);
    data_type_to_parameterized(&mut tokens);
    identifier_to_array_identifier(&mut tokens);
    data_type_to_array_keyword(&mut tokens);
    tokens
}

fn prev_non_comment(tokens: &[Token], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tokens[j].category.is_comment())
}

fn next_non_comment(tokens: &[Token], i: usize) -> Option<usize> {
    (i + 1..tokens.len()).find(|&j| !tokens[j].category.is_comment())
}

/// 1. Reserved → Identifier near property access.
fn reserved_near_property_access(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if !tokens[i].category.is_reserved() {
            continue;
        }
        let prev_is_dot = prev_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::PropertyAccessOperator);
        let next_is_dot = next_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::PropertyAccessOperator);
        if prev_is_dot || next_is_dot {
            tokens[i].category = TokenCategory::Identifier;
        }
    }
}

/// 2. Function name → Identifier when not immediately followed by `(`.
fn function_name_to_identifier(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].category != TokenCategory::ReservedFunctionName {
            continue;
        }
        let followed_by_paren = next_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::BlockStart && tokens[j].text == "(");
        if !followed_by_paren {
            tokens[i].category = TokenCategory::Identifier;
        }
    }
}

/// 3. Data type → parameterized when immediately followed by `(`.
fn data_type_to_parameterized(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].category != TokenCategory::ReservedDataType {
            continue;
        }
        let followed_by_paren = next_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::BlockStart && tokens[j].text == "(");
        if followed_by_paren {
            tokens[i].category = TokenCategory::ReservedParameterizedDataType;
        }
    }
}

/// 4. Identifier → array identifier when immediately followed by `[`.
fn identifier_to_array_identifier(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].category != TokenCategory::Identifier {
            continue;
        }
        let followed_by_bracket = next_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::BlockStart && tokens[j].text == "[");
        if followed_by_bracket {
            tokens[i].category = TokenCategory::ArrayIdentifier;
        }
    }
}

/// 5. Data type → array keyword when immediately followed by `[`.
fn data_type_to_array_keyword(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        if tokens[i].category != TokenCategory::ReservedDataType {
            continue;
        }
        let followed_by_bracket = next_non_comment(tokens, i)
            .is_some_and(|j| tokens[j].category == TokenCategory::BlockStart && tokens[j].text == "[");
        if followed_by_bracket {
            tokens[i].category = TokenCategory::ArrayKeyword;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::lexer::lex;

    fn test_dialect() -> Dialect {
        let mut d = Dialect::new("test");
        d.commands = crate::dialect::KeywordTrie::from_phrases(["SELECT", "FROM"]);
        d.function_names = crate::dialect::KeywordTrie::from_phrases(["COUNT", "MAX"]);
        d.data_types = crate::dialect::KeywordTrie::from_phrases(["INT", "VARCHAR"]);
        d
    }

    #[test]
    fn function_name_not_followed_by_paren_becomes_identifier() {
        let dialect = test_dialect();
        let tokens = disambiguate(lex("select count from t", &dialect));
        let count = tokens.iter().find(|t| t.value == "COUNT").unwrap();
        assert_eq!(count.category, TokenCategory::Identifier);
    }

    #[test]
    fn function_name_followed_by_paren_stays_function() {
        let dialect = test_dialect();
        let tokens = disambiguate(lex("select count(*) from t", &dialect));
        let count = tokens.iter().find(|t| t.value == "COUNT").unwrap();
        assert_eq!(count.category, TokenCategory::ReservedFunctionName);
    }

    #[test]
    fn data_type_followed_by_paren_is_parameterized() {
        let dialect = test_dialect();
        let tokens = disambiguate(lex("cast(a as varchar(10))", &dialect));
        let varchar = tokens.iter().find(|t| t.value == "VARCHAR").unwrap();
        assert_eq!(varchar.category, TokenCategory::ReservedParameterizedDataType);
    }

    #[test]
    fn reserved_word_used_as_property_becomes_identifier() {
        let dialect = test_dialect();
        let tokens = disambiguate(lex("select a.from from t", &dialect));
        let from_prop = &tokens[3];
        assert_eq!(from_prop.value, "FROM");
        assert_eq!(from_prop.category, TokenCategory::Identifier);
    }

    #[test]
    fn identifier_followed_by_bracket_is_array_identifier() {
        let dialect = test_dialect();
        let tokens = disambiguate(lex("select arr[1] from t", &dialect));
        let arr = tokens.iter().find(|t| t.value == "arr").unwrap();
        assert_eq!(arr.category, TokenCategory::ArrayIdentifier);
    }
}
