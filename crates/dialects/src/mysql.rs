use sqlfmt_core::{Dialect, IdentifierQuoteStyle, StringStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "mysql";
    d.string_styles = vec![
        StringStyle::SingleQuoted,
        StringStyle::DoubleQuoted,
        StringStyle::HexQuoted,
        StringStyle::BitQuoted,
    ];
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::Backtick];
    d.line_comment_prefixes = vec!["#"];
    d.variable_prefixes = vec!["@@", "@"];
    d.extra_identifier_chars = vec!['_', '$'];
    for kw in ["UNSIGNED", "ZEROFILL", "AUTO_INCREMENT", "ENGINE"] {
        d.reserved_keywords.insert(kw);
    }
    for kw in ["IFNULL", "GROUP_CONCAT"] {
        d.function_names.insert(kw);
    }
    d.binary_commands.insert("STRAIGHT_JOIN");
    d
}
