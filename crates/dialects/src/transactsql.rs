use sqlfmt_core::{Dialect, IdentifierQuoteStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "transactsql";
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::Bracket];
    d.placeholder_prefixes = vec!['@'];
    d.variable_prefixes = vec!["@@"];
    d.extra_identifier_chars = vec!['_', '#', '$'];
    for kw in ["NVARCHAR", "UNIQUEIDENTIFIER", "DATETIME2"] {
        d.data_types.insert(kw);
    }
    for kw in ["OUTPUT", "OVER"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("EXEC");
    d.commands.insert("PRINT");
    d
}
