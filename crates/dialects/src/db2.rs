use sqlfmt_core::Dialect;

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "db2";
    d.placeholder_prefixes = vec!['?'];
    for kw in ["VARGRAPHIC", "DBCLOB", "GRAPHIC"] {
        d.data_types.insert(kw);
    }
    for kw in ["FETCH FIRST", "ORGANIZE BY"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("LABEL ON");
    d
}
