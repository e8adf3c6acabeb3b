use sqlfmt_core::{Dialect, IdentifierQuoteStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "bigquery";
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::Backtick];
    d.placeholder_prefixes = vec!['?'];
    d.variable_prefixes = vec!["@@", "@"];
    d.extra_identifier_chars = vec!['_'];
    d.supports_bracket_array_access = true;
    for kw in ["STRUCT", "GEOGRAPHY", "BYTES"] {
        d.data_types.insert(kw);
    }
    d.reserved_keywords.insert("REPLACE");
    d.commands.insert("QUALIFY");
    d
}
