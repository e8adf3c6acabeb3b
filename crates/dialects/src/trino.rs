use sqlfmt_core::Dialect;

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "trino";
    d.placeholder_prefixes = vec!['?'];
    d.supports_bracket_array_access = true;
    for kw in ["ROW", "MAP", "ARRAY"] {
        d.data_types.insert(kw);
    }
    d.reserved_keywords.insert("UNNEST");
    d.commands.insert("SHOW CATALOGS");
    d
}
