use sqlfmt_core::Dialect;

use crate::mysql;

pub fn dialect() -> Dialect {
    let mut d = mysql::dialect();
    d.name = "mariadb";
    d.commands.insert("RETURNING");
    d.reserved_keywords.insert("SEQUENCE");
    d
}
