use sqlfmt_core::{Dialect, IdentifierQuoteStyle, StringStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "sqlite";
    d.string_styles = vec![StringStyle::SingleQuoted];
    d.identifier_quote_styles = vec![
        IdentifierQuoteStyle::DoubleQuote,
        IdentifierQuoteStyle::Backtick,
        IdentifierQuoteStyle::Bracket,
    ];
    d.placeholder_prefixes = vec!['?', ':', '@', '$'];
    d.commands.insert("PRAGMA");
    d.reserved_keywords.insert("AUTOINCREMENT");
    d.reserved_keywords.insert("WITHOUT ROWID");
    d
}
