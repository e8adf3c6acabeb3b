use sqlfmt_core::{Token, TokenCategory};

/// Cuts a disambiguated token stream into statements: each `;` operator
/// ends the statement it terminates (inclusive); a trailing non-empty span
/// after the last `;` is its own statement. The `EOF` token is dropped —
/// callers format each statement's token slice independently.
pub fn segment(tokens: &[Token]) -> Vec<&[Token]> {
    let mut statements = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if token.category == TokenCategory::Eof {
            if i > start {
                statements.push(&tokens[start..i]);
            }
            return statements;
        }
        if token.category == TokenCategory::Operator && token.value == ";" {
            statements.push(&tokens[start..=i]);
            start = i + 1;
        }
    }

    if start < tokens.len() {
        statements.push(&tokens[start..]);
    }
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_core::{disambiguate, lex};
    use sqlfmt_dialects::ansi;

    fn lex_str(src: &str) -> Vec<Token> {
        disambiguate(lex(src, &ansi::dialect()))
    }

    #[test]
    fn splits_on_semicolons() {
        let tokens = lex_str("select 1; select 2;");
        let stmts = segment(&tokens);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[0].last().unwrap().value == ";");
        assert!(stmts[1].last().unwrap().value == ";");
    }

    #[test]
    fn trailing_statement_without_semicolon() {
        let tokens = lex_str("select 1; select 2");
        let stmts = segment(&tokens);
        assert_eq!(stmts.len(), 2);
        assert!(stmts[1].last().unwrap().value != ";");
    }

    #[test]
    fn empty_input_has_no_statements() {
        let tokens = lex_str("");
        assert!(segment(&tokens).is_empty());
    }

    #[test]
    fn trailing_semicolon_with_only_whitespace_after_is_not_a_new_statement() {
        let tokens = lex_str("select 1;   ");
        let stmts = segment(&tokens);
        assert_eq!(stmts.len(), 1);
    }
}
