use sqlfmt_core::{Token, TokenCategory};

/// The projected inline rendered width of a token run: tokens joined with
/// their natural single-space separation, except a comma keeps its
/// trailing space but takes none before it. Used by both the inline-block
/// detector (§4.5) and the `expressionWidth`/integer branches of the
/// `multilineLists` decision (§4.7).
pub fn projected_width(tokens: &[Token]) -> usize {
    let mut width = 0;
    let mut prev_was_comma = false;

    for (i, token) in tokens.iter().enumerate() {
        let is_comma = token.category == TokenCategory::Operator && token.value == ",";
        if i > 0 && !prev_was_comma && !is_comma {
            width += 1;
        }
        width += token.value.len();
        if is_comma {
            width += 1;
        }
        prev_was_comma = is_comma;
    }

    width
}

/// Counts top-level commas (depth 0 with respect to `(`/`)`/`[`/`]`/`{`/`}`)
/// in `tokens`, plus one — the clause count used by the integer variant of
/// `multilineLists`.
pub fn top_level_clause_count(tokens: &[Token]) -> usize {
    let mut depth = 0i32;
    let mut commas = 0usize;

    for token in tokens {
        match token.category {
            TokenCategory::BlockStart => depth += 1,
            TokenCategory::BlockEnd => depth = (depth - 1).max(0),
            TokenCategory::Operator if depth == 0 && token.value == "," => commas += 1,
            _ => {}
        }
    }

    commas + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_core::{disambiguate, lex};
    use sqlfmt_dialects::ansi;

    #[test]
    fn width_counts_comma_trailing_space_only() {
        let tokens = disambiguate(lex("a, b", &ansi::dialect()));
        // "a" (1) + "," (1) + trailing space (1) + "b" (1) = 4; no leading
        // space before the comma.
        assert_eq!(projected_width(&tokens[..3]), 4);
    }

    #[test]
    fn clause_count_ignores_commas_inside_blocks() {
        let tokens = disambiguate(lex("a, f(x, y), b", &ansi::dialect()));
        assert_eq!(top_level_clause_count(&tokens), 3);
    }
}
