use sqlfmt_core::Dialect;

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "plsql";
    d.placeholder_prefixes = vec![':'];
    for kw in ["VARCHAR2", "NUMBER", "CLOB", "NVARCHAR2", "RAW"] {
        d.data_types.insert(kw);
    }
    for kw in ["CONNECT BY", "START WITH", "BULK COLLECT INTO"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("MERGE");
    d
}
