use sqlfmt_core::Dialect;

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "n1ql";
    d.placeholder_prefixes = vec!['$'];
    d.extra_identifier_chars = vec!['_', '-'];
    for kw in ["OBJECT", "ARRAY"] {
        d.data_types.insert(kw);
    }
    for kw in ["NEST", "UNNEST", "USE KEYS"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("INFER");
    d
}
