use ahash::AHashMap;

/// A trie over whitespace-normalized, uppercased keyword phrases, keyed
/// word-by-word so that multi-word reserved phrases (`GROUP BY`, `LEFT
/// OUTER JOIN`) can be longest-matched against an arbitrary run of
/// whitespace-separated words without scanning the whole set on every
/// token.
#[derive(Debug, Clone, Default)]
pub struct KeywordTrie {
    root: TrieNode,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: AHashMap<String, TrieNode>,
    terminal: bool,
}

impl KeywordTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for phrase in phrases {
            trie.insert(phrase.as_ref());
        }
        trie
    }

    pub fn insert(&mut self, phrase: &str) {
        let mut node = &mut self.root;
        for word in phrase.split_whitespace() {
            node = node
                .children
                .entry(word.to_ascii_uppercase())
                .or_default();
        }
        node.terminal = true;
    }

    /// Given a sequence of already-uppercased words, returns the number of
    /// leading words that form the longest phrase present in this trie, or
    /// `None` if no prefix (of any length) is a complete phrase.
    pub fn longest_match(&self, words: &[&str]) -> Option<usize> {
        let mut node = &self.root;
        let mut best = None;
        for (i, word) in words.iter().enumerate() {
            match node.children.get(&word.to_ascii_uppercase()) {
                Some(next) => {
                    node = next;
                    if node.terminal {
                        best = Some(i + 1);
                    }
                }
                None => break,
            }
        }
        best
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}

/// A string-literal style a dialect may enable: which delimiter(s) open
/// and close a string, and how an embedded delimiter is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    /// `'...'`, embedded quotes doubled (`''`) or backslash-escaped.
    SingleQuoted,
    /// `"..."` (dialects where strings, not identifiers, use double quotes).
    DoubleQuoted,
    /// `` `...` `` (legacy MySQL string literal extension).
    BacktickQuoted,
    /// `$tag$ ... $tag$` (PostgreSQL dollar-quoting).
    DollarTagged,
    /// `x'...'` / `X'...'` hex-encoded byte string.
    HexQuoted,
    /// `b'...'` / `B'...'` bit-string literal.
    BitQuoted,
}

/// An identifier-quoting style a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierQuoteStyle {
    /// `"identifier"`
    DoubleQuote,
    /// `` `identifier` ``
    Backtick,
    /// `[identifier]`
    Bracket,
}

/// An immutable dialect definition: keyword tables, operator list, and
/// tokenizer configuration. Cheap to `Clone` and safe to share across
/// threads once constructed.
#[derive(Debug, Clone)]
pub struct Dialect {
    pub name: &'static str,
    pub commands: KeywordTrie,
    pub binary_commands: KeywordTrie,
    pub dependent_clauses: KeywordTrie,
    pub join_conditions: KeywordTrie,
    pub logical_operators: KeywordTrie,
    pub reserved_keywords: KeywordTrie,
    pub function_names: KeywordTrie,
    pub data_types: KeywordTrie,
    pub case_start: KeywordTrie,
    pub case_end: KeywordTrie,
    /// Operators, longest-match first. Built and sorted at construction.
    pub operators: Vec<&'static str>,
    pub string_styles: Vec<StringStyle>,
    pub identifier_quote_styles: Vec<IdentifierQuoteStyle>,
    /// Placeholder prefixes, e.g. `?`, `$`, `:`, `@`.
    pub placeholder_prefixes: Vec<char>,
    /// Variable-reference prefixes distinct from placeholders, e.g. `@@`
    /// for session/system variables in MySQL and T-SQL. Checked
    /// longest-first.
    pub variable_prefixes: Vec<&'static str>,
    /// Extra line-comment prefixes beyond `--`, e.g. `#` for MySQL.
    pub line_comment_prefixes: Vec<&'static str>,
    /// Whether `identifier[...]` is array-element access.
    pub supports_bracket_array_access: bool,
    /// Extra characters allowed inside an unquoted identifier besides
    /// `[A-Za-z0-9_]`, e.g. `$` or `#`.
    pub extra_identifier_chars: Vec<char>,
}

impl Dialect {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            commands: KeywordTrie::new(),
            binary_commands: KeywordTrie::new(),
            dependent_clauses: KeywordTrie::new(),
            join_conditions: KeywordTrie::new(),
            logical_operators: KeywordTrie::new(),
            reserved_keywords: KeywordTrie::new(),
            function_names: KeywordTrie::new(),
            data_types: KeywordTrie::new(),
            case_start: KeywordTrie::from_phrases(["CASE"]),
            case_end: KeywordTrie::from_phrases(["END"]),
            operators: default_operators(),
            string_styles: vec![StringStyle::SingleQuoted],
            identifier_quote_styles: vec![IdentifierQuoteStyle::DoubleQuote],
            placeholder_prefixes: vec!['?'],
            variable_prefixes: vec![],
            line_comment_prefixes: vec![],
            supports_bracket_array_access: false,
            extra_identifier_chars: vec!['_'],
        }
    }
}

/// Operators shared by (almost) every dialect, longest first so a greedy
/// scan never needs a second pass.
pub fn default_operators() -> Vec<&'static str> {
    let mut ops = vec![
        "<=>", "!==", "<<", ">>", "<>", "!=", "<=", ">=", "||", "::", ":=", "->>", "->", "~~",
        "!~", "=", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^", "~", "!", "?", "@", ":", "$",
        "#",
    ];
    ops.sort_by_key(|o| std::cmp::Reverse(o.len()));
    ops
}
