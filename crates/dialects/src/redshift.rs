use sqlfmt_core::Dialect;

use crate::postgresql;

pub fn dialect() -> Dialect {
    let mut d = postgresql::dialect();
    d.name = "redshift";
    for kw in ["DISTKEY", "SORTKEY", "DISTSTYLE", "ENCODE"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("UNLOAD");
    d.commands.insert("COPY");
    d
}
