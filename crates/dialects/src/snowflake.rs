use sqlfmt_core::{Dialect, IdentifierQuoteStyle};

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "snowflake";
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::DoubleQuote];
    d.placeholder_prefixes = vec!['?'];
    d.variable_prefixes = vec!["$"];
    d.supports_bracket_array_access = true;
    for kw in ["VARIANT", "OBJECT", "GEOGRAPHY", "GEOMETRY"] {
        d.data_types.insert(kw);
    }
    for kw in ["QUALIFY", "SAMPLE", "MINUS"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("COPY INTO");
    d.function_names.insert("FLATTEN");
    d.operators.insert(0, "::");
    d.operators.sort_by_key(|o| std::cmp::Reverse(o.len()));
    d
}
