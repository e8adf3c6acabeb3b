use sqlfmt_core::Dialect;

use crate::hive;

pub fn dialect() -> Dialect {
    let mut d = hive::dialect();
    d.name = "spark";
    d.reserved_keywords.insert("QUALIFY");
    d.commands.insert("REFRESH TABLE");
    d.function_names.insert("TRANSFORM");
    d
}
