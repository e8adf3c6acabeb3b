use smol_str::SmolStr;

use crate::dialect::{Dialect, IdentifierQuoteStyle, StringStyle};
use crate::token::{Token, TokenCategory};

/// A cursor over the source characters, indexed so that arbitrary
/// lookahead/lookbehind is O(1). Source strings handled by this crate are
/// whole SQL statements, not streams, so holding the full character table
/// in memory is the expected resource profile (see the crate's
/// concurrency/resource notes).
struct Cursor<'a> {
    src: &'a str,
    chars: Vec<char>,
    offsets: Vec<usize>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        let mut chars = Vec::new();
        let mut offsets = Vec::new();
        for (i, c) in src.char_indices() {
            offsets.push(i);
            chars.push(c);
        }
        offsets.push(src.len());
        Cursor {
            src,
            chars,
            offsets,
            pos: 0,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.len()
    }

    fn byte_offset(&self, idx: usize) -> usize {
        self.offsets[idx]
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.src[self.byte_offset(from)..self.byte_offset(to)]
    }

    fn peek_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(self.pos)
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.peek_at(self.pos + n)
    }

    fn starts_with_at(&self, idx: usize, needle: &str) -> bool {
        self.slice(idx, self.len().min(idx + needle.chars().count())) == needle
    }
}

fn is_ident_start(c: char, dialect: &Dialect) -> bool {
    c.is_alphabetic() || c == '_' || dialect.extra_identifier_chars.contains(&c)
}

fn is_ident_continue(c: char, dialect: &Dialect) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || dialect.extra_identifier_chars.contains(&c)
}

/// Tokenizes `source` under `dialect`, producing a flat sequence ending in
/// an [`TokenCategory::Eof`] token. Never fails: unrecognized runs of
/// punctuation fall through to single-character `Operator` tokens.
pub fn lex(source: &str, dialect: &Dialect) -> Vec<Token> {
    let mut cur = Cursor::new(source);
    let mut tokens = Vec::new();

    loop {
        let ws_start = cur.pos;
        skip_whitespace(&mut cur);
        let whitespace_before = cur.slice(ws_start, cur.pos);

        if cur.at_end() {
            tokens.push(Token::new(
                TokenCategory::Eof,
                "",
                "",
                whitespace_before,
                cur.byte_offset(cur.pos),
            ));
            break;
        }

        let start = cur.pos;
        let start_offset = cur.byte_offset(start);
        let token = lex_line_comment(&mut cur, dialect)
            .or_else(|| lex_block_comment(&mut cur))
            .or_else(|| lex_string(&mut cur, dialect))
            .or_else(|| lex_quoted_identifier(&mut cur, dialect))
            .or_else(|| lex_reserved_word(&mut cur, dialect))
            .or_else(|| lex_variable(&mut cur, dialect))
            .or_else(|| lex_placeholder(&mut cur, dialect))
            .or_else(|| lex_number(&mut cur, &tokens))
            .or_else(|| lex_identifier(&mut cur, dialect))
            .or_else(|| lex_operator(&mut cur, dialect))
            .unwrap_or_else(|| lex_fallback(&mut cur));

        debug_assert!(cur.pos > start, "lexer must always make progress");
        tokens.push(Token::new(
            token.0,
            token.1,
            token.2,
            whitespace_before,
            start_offset,
        ));
    }

    tokens
}

fn skip_whitespace(cur: &mut Cursor) {
    while let Some(c) = cur.peek() {
        if c.is_whitespace() {
            cur.pos += 1;
        } else {
            break;
        }
    }
}

type Lexed<'a> = (TokenCategory, &'a str, SmolStr);

fn lex_line_comment<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let matches_prefix = cur.starts_with_at(start, "--")
        || dialect
            .line_comment_prefixes
            .iter()
            .any(|p| cur.starts_with_at(start, p));
    if !matches_prefix {
        return None;
    }
    while let Some(c) = cur.peek() {
        if c == '\n' {
            break;
        }
        cur.pos += 1;
    }
    let text = cur.slice(start, cur.pos);
    Some((TokenCategory::LineComment, text, SmolStr::from(text)))
}

fn lex_block_comment<'a>(cur: &mut Cursor<'a>) -> Option<Lexed<'a>> {
    let start = cur.pos;
    if !cur.starts_with_at(start, "/*") {
        return None;
    }
    cur.pos += 2;
    while !cur.at_end() && !cur.starts_with_at(cur.pos, "*/") {
        cur.pos += 1;
    }
    if !cur.at_end() {
        cur.pos += 2;
    }
    let text = cur.slice(start, cur.pos);
    Some((TokenCategory::BlockComment, text, SmolStr::from(text)))
}

/// Scans a `quote ... quote` body where an embedded `quote` can be escaped
/// either by doubling (`''`) or by a preceding backslash.
fn scan_quoted_body(cur: &mut Cursor, quote: char, allow_backslash_escape: bool) {
    cur.pos += 1; // opening quote
    loop {
        match cur.peek() {
            None => break,
            Some(c) if c == quote => {
                if cur.peek_ahead(1) == Some(quote) {
                    cur.pos += 2;
                    continue;
                }
                cur.pos += 1;
                break;
            }
            Some(c) if allow_backslash_escape && c == '\\' => {
                cur.pos += 2;
            }
            Some(_) => {
                cur.pos += 1;
            }
        }
    }
}

fn lex_string<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let c = cur.peek()?;

    for style in &dialect.string_styles {
        match style {
            StringStyle::SingleQuoted if c == '\'' => {
                scan_quoted_body(cur, '\'', true);
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::String, text, SmolStr::from(text)));
            }
            StringStyle::DoubleQuoted if c == '"' => {
                scan_quoted_body(cur, '"', true);
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::String, text, SmolStr::from(text)));
            }
            StringStyle::BacktickQuoted if c == '`' => {
                scan_quoted_body(cur, '`', false);
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::String, text, SmolStr::from(text)));
            }
            StringStyle::HexQuoted
                if (c == 'x' || c == 'X') && cur.peek_ahead(1) == Some('\'') =>
            {
                cur.pos += 1;
                scan_quoted_body(cur, '\'', false);
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::String, text, SmolStr::from(text)));
            }
            StringStyle::BitQuoted
                if (c == 'b' || c == 'B') && cur.peek_ahead(1) == Some('\'') =>
            {
                cur.pos += 1;
                scan_quoted_body(cur, '\'', false);
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::String, text, SmolStr::from(text)));
            }
            StringStyle::DollarTagged if c == '$' => {
                if let Some(end) = scan_dollar_tagged(cur, start) {
                    cur.pos = end;
                    let text = cur.slice(start, cur.pos);
                    return Some((TokenCategory::String, text, SmolStr::from(text)));
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns the char index just past the closing tag of a `$tag$ ... $tag$`
/// literal starting at `start`, or `None` if `start` isn't the opening of
/// one (i.e. there's no second unescaped `$` closing the tag, or no
/// matching closer appears later in the source).
fn scan_dollar_tagged(cur: &Cursor, start: usize) -> Option<usize> {
    let mut i = start + 1;
    while let Some(c) = cur.peek_at(i) {
        if c == '$' {
            break;
        }
        if !(c.is_alphanumeric() || c == '_') {
            return None;
        }
        i += 1;
    }
    if cur.peek_at(i) != Some('$') {
        return None;
    }
    let tag_end = i + 1;
    let tag = cur.slice(start, tag_end);
    let mut j = tag_end;
    while j < cur.len() {
        if cur.starts_with_at(j, tag) {
            return Some(j + tag.chars().count());
        }
        j += 1;
    }
    None
}

fn lex_quoted_identifier<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let c = cur.peek()?;
    for style in &dialect.identifier_quote_styles {
        match style {
            IdentifierQuoteStyle::DoubleQuote if c == '"' => {
                scan_quoted_body(cur, '"', false);
                return Some(quoted_identifier_token(cur, start, '"'));
            }
            IdentifierQuoteStyle::Backtick if c == '`' => {
                scan_quoted_body(cur, '`', false);
                return Some(quoted_identifier_token(cur, start, '`'));
            }
            IdentifierQuoteStyle::Bracket if c == '[' => {
                cur.pos += 1;
                while let Some(c) = cur.peek() {
                    if c == ']' {
                        if cur.peek_ahead(1) == Some(']') {
                            cur.pos += 2;
                            continue;
                        }
                        cur.pos += 1;
                        break;
                    }
                    cur.pos += 1;
                }
                let text = cur.slice(start, cur.pos);
                let value = text
                    .strip_prefix('[')
                    .and_then(|s| s.strip_suffix(']'))
                    .unwrap_or(text);
                return Some((TokenCategory::QuotedIdentifier, text, SmolStr::from(value)));
            }
            _ => {}
        }
    }
    None
}

fn quoted_identifier_token<'a>(cur: &Cursor<'a>, start: usize, quote: char) -> Lexed<'a> {
    let text = cur.slice(start, cur.pos);
    let value = text
        .strip_prefix(quote)
        .and_then(|s| s.strip_suffix(quote))
        .unwrap_or(text);
    (TokenCategory::QuotedIdentifier, text, SmolStr::from(value))
}

/// Rule 5: greedy multi-word reserved-phrase matching. Walks forward
/// collecting whitespace-separated "words" and asks every category's trie
/// how many of them it recognizes; the longest match wins, ties broken by
/// category priority.
fn lex_reserved_word<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    if !cur.peek().is_some_and(|c| is_ident_start(c, dialect)) {
        return None;
    }

    const MAX_WORDS: usize = 6;
    let mut word_spans: Vec<(usize, usize)> = Vec::with_capacity(MAX_WORDS);
    let mut p = start;
    while word_spans.len() < MAX_WORDS && cur.peek_at(p).is_some_and(|c| is_ident_start(c, dialect)) {
        let word_start = p;
        p += 1;
        while cur.peek_at(p).is_some_and(|c| is_ident_continue(c, dialect)) {
            p += 1;
        }
        word_spans.push((word_start, p));

        let mut look = p;
        while cur.peek_at(look).is_some_and(char::is_whitespace) {
            look += 1;
        }
        if !cur.peek_at(look).is_some_and(|c| is_ident_start(c, dialect)) {
            break;
        }
        p = look;
    }

    let word_strs: Vec<&str> = word_spans.iter().map(|&(s, e)| cur.slice(s, e)).collect();
    if word_strs.is_empty() {
        return None;
    }

    let categories: [(&crate::dialect::KeywordTrie, TokenCategory); 10] = [
        (&dialect.commands, TokenCategory::ReservedCommand),
        (&dialect.binary_commands, TokenCategory::ReservedBinaryCommand),
        (&dialect.dependent_clauses, TokenCategory::ReservedDependentClause),
        (&dialect.join_conditions, TokenCategory::ReservedJoinCondition),
        (&dialect.logical_operators, TokenCategory::ReservedLogicalOperator),
        (&dialect.case_start, TokenCategory::ReservedCaseStart),
        (&dialect.case_end, TokenCategory::ReservedCaseEnd),
        (&dialect.reserved_keywords, TokenCategory::ReservedKeyword),
        (&dialect.function_names, TokenCategory::ReservedFunctionName),
        (&dialect.data_types, TokenCategory::ReservedDataType),
    ];

    let mut best: Option<(usize, TokenCategory)> = None;
    for (trie, category) in categories {
        if let Some(len) = trie.longest_match(&word_strs) {
            if best.is_none_or(|(best_len, _)| len > best_len) {
                best = Some((len, category));
            }
        }
    }

    let (len, category) = best?;
    let end = word_spans[len - 1].1;
    let text = cur.slice(start, end);
    cur.pos = end;

    // Canonicalize internal whitespace to single spaces for `value`.
    let value = SmolStr::from(word_strs[..len].join(" ").to_ascii_uppercase());
    Some((category, text, value))
}

fn lex_variable<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let mut prefixes: Vec<&str> = dialect.variable_prefixes.clone();
    prefixes.sort_by_key(|p| std::cmp::Reverse(p.len()));
    for prefix in prefixes {
        if cur.starts_with_at(start, prefix) {
            let after = start + prefix.chars().count();
            let mut p = after;
            while cur.peek_at(p).is_some_and(|c| is_ident_continue(c, dialect)) {
                p += 1;
            }
            if p > after || prefix.chars().count() > 1 {
                cur.pos = p;
                let text = cur.slice(start, cur.pos);
                return Some((TokenCategory::Variable, text, SmolStr::from(text)));
            }
        }
    }
    None
}

fn lex_placeholder<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let c = cur.peek()?;
    if !dialect.placeholder_prefixes.contains(&c) {
        return None;
    }
    let mut p = start + 1;
    if c == '?' {
        while cur.peek_at(p).is_some_and(|c| c.is_ascii_digit()) {
            p += 1;
        }
        cur.pos = p;
        let text = cur.slice(start, cur.pos);
        return Some((TokenCategory::Placeholder, text, SmolStr::from(text)));
    }
    match cur.peek_at(p) {
        Some(nc) if is_ident_start(nc, dialect) || nc.is_ascii_digit() => {
            while cur.peek_at(p).is_some_and(|c| is_ident_continue(c, dialect)) {
                p += 1;
            }
            cur.pos = p;
            let text = cur.slice(start, cur.pos);
            Some((TokenCategory::Placeholder, text, SmolStr::from(text)))
        }
        Some('"') => {
            cur.pos = p;
            scan_quoted_body(cur, '"', false);
            let text = cur.slice(start, cur.pos);
            Some((TokenCategory::Placeholder, text, SmolStr::from(text)))
        }
        _ => None,
    }
}

fn lex_number<'a>(cur: &mut Cursor<'a>, tokens: &[Token]) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let c = cur.peek()?;

    let is_sign = c == '+' || c == '-';
    let mut p = start;
    if is_sign {
        if !cur.peek_ahead(1).is_some_and(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        if !sign_is_unambiguous(tokens) {
            return None;
        }
        p += 1;
    }

    let digits_start = p;
    while cur.peek_at(p).is_some_and(|c| c.is_ascii_digit()) {
        p += 1;
    }
    let mut saw_digits = p > digits_start;

    if cur.peek_at(p) == Some('.') {
        let frac_start = p + 1;
        let mut fp = frac_start;
        while cur.peek_at(fp).is_some_and(|c| c.is_ascii_digit()) {
            fp += 1;
        }
        if fp > frac_start || saw_digits {
            p = fp;
            saw_digits = true;
        }
    }

    if !saw_digits {
        return None;
    }

    if matches!(cur.peek_at(p), Some('e') | Some('E')) {
        let mut ep = p + 1;
        if matches!(cur.peek_at(ep), Some('+') | Some('-')) {
            ep += 1;
        }
        let exp_digits_start = ep;
        while cur.peek_at(ep).is_some_and(|c| c.is_ascii_digit()) {
            ep += 1;
        }
        if ep > exp_digits_start {
            p = ep;
        }
    }

    cur.pos = p;
    let text = cur.slice(start, cur.pos);
    Some((TokenCategory::Number, text, SmolStr::from(text)))
}

/// A leading `+`/`-` attaches to a number only when the previous
/// non-comment token leaves us in "operand" position (start of input,
/// after an operator, open bracket, comma, or reserved command/keyword).
fn sign_is_unambiguous(tokens: &[Token]) -> bool {
    let Some(prev) = tokens.iter().rev().find(|t| !t.category.is_comment()) else {
        return true;
    };
    !matches!(
        prev.category,
        TokenCategory::Number
            | TokenCategory::Identifier
            | TokenCategory::QuotedIdentifier
            | TokenCategory::ArrayIdentifier
            | TokenCategory::String
            | TokenCategory::Variable
            | TokenCategory::Placeholder
            | TokenCategory::BlockEnd
    )
}

fn lex_identifier<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    if !cur.peek().is_some_and(|c| is_ident_start(c, dialect)) {
        return None;
    }
    let mut p = start + 1;
    while cur.peek_at(p).is_some_and(|c| is_ident_continue(c, dialect)) {
        p += 1;
    }
    cur.pos = p;
    let text = cur.slice(start, cur.pos);
    Some((TokenCategory::Identifier, text, SmolStr::from(text)))
}

fn lex_operator<'a>(cur: &mut Cursor<'a>, dialect: &Dialect) -> Option<Lexed<'a>> {
    let start = cur.pos;
    let c = cur.peek()?;

    if "([{".contains(c) {
        cur.pos += 1;
        let text = cur.slice(start, cur.pos);
        return Some((TokenCategory::BlockStart, text, SmolStr::from(text)));
    }
    if ")]}".contains(c) {
        cur.pos += 1;
        let text = cur.slice(start, cur.pos);
        return Some((TokenCategory::BlockEnd, text, SmolStr::from(text)));
    }
    if c == '.' && !cur.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
        cur.pos += 1;
        let text = cur.slice(start, cur.pos);
        return Some((TokenCategory::PropertyAccessOperator, text, SmolStr::from(text)));
    }

    for op in &dialect.operators {
        if cur.starts_with_at(start, op) {
            cur.pos = start + op.chars().count();
            let text = cur.slice(start, cur.pos);
            return Some((TokenCategory::Operator, text, SmolStr::from(text)));
        }
    }
    None
}

fn lex_fallback<'a>(cur: &mut Cursor<'a>) -> Lexed<'a> {
    let start = cur.pos;
    cur.pos += 1;
    let text = cur.slice(start, cur.pos);
    (TokenCategory::Operator, text, SmolStr::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, IdentifierQuoteStyle, StringStyle};

    fn test_dialect() -> Dialect {
        let mut d = Dialect::new("test");
        d.commands = crate::dialect::KeywordTrie::from_phrases([
            "SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY",
        ]);
        d.binary_commands = crate::dialect::KeywordTrie::from_phrases(["UNION", "UNION ALL"]);
        d.logical_operators = crate::dialect::KeywordTrie::from_phrases(["AND", "OR"]);
        d.join_conditions = crate::dialect::KeywordTrie::from_phrases(["ON"]);
        d.reserved_keywords = crate::dialect::KeywordTrie::from_phrases(["AS", "BETWEEN", "ASC"]);
        d.function_names = crate::dialect::KeywordTrie::from_phrases(["COUNT"]);
        d.data_types = crate::dialect::KeywordTrie::from_phrases(["VARCHAR"]);
        d.identifier_quote_styles = vec![IdentifierQuoteStyle::DoubleQuote];
        d.string_styles = vec![StringStyle::SingleQuoted];
        d.placeholder_prefixes = vec!['?', ':'];
        d
    }

    fn values(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.category != TokenCategory::Eof)
            .map(|t| t.value.to_string())
            .collect()
    }

    #[test]
    fn reproduces_source_exactly() {
        let dialect = test_dialect();
        let source = "select  a, b\nfrom t -- trailing\nwhere x > 1";
        let tokens = lex(source, &dialect);
        let mut rebuilt = String::new();
        for t in &tokens {
            rebuilt.push_str(&t.whitespace_before);
            rebuilt.push_str(&t.text);
        }
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn multi_word_command_longest_match_wins() {
        let dialect = test_dialect();
        let tokens = lex("select a from t group by a", &dialect);
        let group_by = tokens.iter().find(|t| t.value == "GROUP BY");
        assert!(group_by.is_some());
        assert_eq!(
            group_by.unwrap().category,
            TokenCategory::ReservedCommand
        );
    }

    #[test]
    fn reserved_value_normalizes_internal_whitespace_but_keeps_raw_text() {
        let dialect = test_dialect();
        let tokens = lex("select a from t group\n  by a", &dialect);
        let group_by = tokens.iter().find(|t| t.value == "GROUP BY").unwrap();
        assert_eq!(group_by.text, "group\n  by");
    }

    #[test]
    fn function_name_immediately_followed_by_paren() {
        let dialect = test_dialect();
        let tokens = lex("select count(*) from t", &dialect);
        let count = tokens.iter().find(|t| t.value == "COUNT").unwrap();
        assert_eq!(count.category, TokenCategory::ReservedFunctionName);
    }

    #[test]
    fn string_literal_preserves_doubled_quote_escape() {
        let dialect = test_dialect();
        let tokens = lex("select 'it''s' from t", &dialect);
        let s = tokens
            .iter()
            .find(|t| t.category == TokenCategory::String)
            .unwrap();
        assert_eq!(s.text, "'it''s'");
    }

    #[test]
    fn quoted_identifier_strips_quotes_in_value() {
        let dialect = test_dialect();
        let tokens = lex(r#"select "my col" from t"#, &dialect);
        let ident = tokens
            .iter()
            .find(|t| t.category == TokenCategory::QuotedIdentifier)
            .unwrap();
        assert_eq!(ident.text, "\"my col\"");
        assert_eq!(ident.value, "my col");
    }

    #[test]
    fn placeholder_and_number_and_operator() {
        let dialect = test_dialect();
        let tokens = lex("where x >= ?1 and y = :name", &dialect);
        assert_eq!(values(&tokens), vec![
            "WHERE", "x", ">=", "?1", "AND", "y", "=", ":name"
        ]);
        assert_eq!(tokens[2].category, TokenCategory::Operator);
        assert_eq!(tokens[3].category, TokenCategory::Placeholder);
        assert_eq!(tokens[7].category, TokenCategory::Placeholder);
    }

    #[test]
    fn negative_number_only_in_operand_position() {
        let dialect = test_dialect();
        let tokens = lex("select -1, a - 1", &dialect);
        let minus_one = &tokens[1];
        assert_eq!(minus_one.category, TokenCategory::Number);
        assert_eq!(minus_one.text, "-1");

        // `a - 1`: minus is a binary operator here, not part of the number.
        let op_tokens: Vec<_> = tokens
            .iter()
            .filter(|t| t.value == "-" || t.value == "1")
            .collect();
        assert!(op_tokens.iter().any(|t| t.category == TokenCategory::Operator));
    }

    #[test]
    fn scientific_notation_number() {
        let dialect = test_dialect();
        let tokens = lex("select 1.5e-10", &dialect);
        let num = tokens
            .iter()
            .find(|t| t.category == TokenCategory::Number)
            .unwrap();
        assert_eq!(num.text, "1.5e-10");
    }

    #[test]
    fn block_comment_and_line_comment_survive() {
        let dialect = test_dialect();
        let tokens = lex("/* c1 */ select a -- c2\nfrom t", &dialect);
        let block = tokens
            .iter()
            .find(|t| t.category == TokenCategory::BlockComment)
            .unwrap();
        assert_eq!(block.text, "/* c1 */");
        let line = tokens
            .iter()
            .find(|t| t.category == TokenCategory::LineComment)
            .unwrap();
        assert_eq!(line.text, "-- c2");
    }

    #[test]
    fn unrecognized_punctuation_falls_back_to_single_char_operator() {
        let dialect = test_dialect();
        let tokens = lex("select a, b", &dialect);
        let comma = tokens.iter().find(|t| t.text == ",").unwrap();
        assert_eq!(comma.category, TokenCategory::Operator);
    }

    #[test]
    fn brackets_and_dot_categorize_as_block_and_property_access() {
        let dialect = test_dialect();
        let tokens = lex("select a.b from t(1)", &dialect);
        assert!(tokens.iter().any(|t| t.category == TokenCategory::PropertyAccessOperator));
        assert!(tokens.iter().any(|t| t.category == TokenCategory::BlockStart && t.text == "("));
        assert!(tokens.iter().any(|t| t.category == TokenCategory::BlockEnd && t.text == ")"));
    }

    #[test]
    fn always_ends_with_eof() {
        let dialect = test_dialect();
        let tokens = lex("select 1", &dialect);
        assert_eq!(tokens.last().unwrap().category, TokenCategory::Eof);
    }
}
