use sqlfmt_core::{Dialect, IdentifierQuoteStyle, StringStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "postgresql";
    d.string_styles = vec![StringStyle::SingleQuoted, StringStyle::DollarTagged];
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::DoubleQuote];
    d.placeholder_prefixes = vec!['$'];
    d.supports_bracket_array_access = true;
    for kw in [
        "JSONB", "UUID", "BYTEA", "INET", "CIDR", "MACADDR", "TSVECTOR", "TSQUERY",
    ] {
        d.data_types.insert(kw);
    }
    for op in ["::", "->>", "->", "#>>", "#>", "@>", "<@", "?|", "?&"] {
        d.operators.insert(0, op);
    }
    d.operators.sort_by_key(|o| std::cmp::Reverse(o.len()));
    d
}
