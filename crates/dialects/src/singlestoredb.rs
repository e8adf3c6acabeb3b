use sqlfmt_core::Dialect;

use crate::mysql;

pub fn dialect() -> Dialect {
    let mut d = mysql::dialect();
    d.name = "singlestoredb";
    d.reserved_keywords.insert("SHARD");
    d.commands.insert("OPTIMIZE TABLE");
    d
}
