use sqlfmt_core::Dialect;

use crate::ansi;

pub fn dialect() -> Dialect {
    let mut d = ansi::dialect();
    d.name = "hive";
    d.placeholder_prefixes = vec![];
    d.extra_identifier_chars = vec!['_', ':'];
    for kw in ["STRUCT", "MAP", "ARRAY", "UNIONTYPE"] {
        d.data_types.insert(kw);
    }
    for kw in ["LATERAL VIEW", "CLUSTER BY", "DISTRIBUTE BY", "SORT BY"] {
        d.reserved_keywords.insert(kw);
    }
    d.commands.insert("MSCK REPAIR TABLE");
    d.function_names.insert("EXPLODE");
    d
}
