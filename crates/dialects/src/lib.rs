pub mod ansi;
pub mod bigquery;
pub mod db2;
pub mod hive;
pub mod mariadb;
pub mod mysql;
pub mod n1ql;
pub mod plsql;
pub mod postgresql;
pub mod redshift;
pub mod singlestoredb;
pub mod snowflake;
pub mod spark;
pub mod sqlite;
pub mod transactsql;
pub mod trino;

use sqlfmt_core::Dialect;

/// The closed set of dialects this crate can produce a [`Dialect`] for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialectTag {
    Sql,
    Bigquery,
    Db2,
    Hive,
    Mariadb,
    Mysql,
    N1ql,
    Plsql,
    Postgresql,
    Redshift,
    Singlestoredb,
    Snowflake,
    Spark,
    Sqlite,
    /// Alias: `tsql`.
    Transactsql,
    Trino,
}

impl DialectTag {
    /// Parses a dialect tag by its canonical name, accepting `tsql` as an
    /// alias for `transactsql`.
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "sql" => Self::Sql,
            "bigquery" => Self::Bigquery,
            "db2" => Self::Db2,
            "hive" => Self::Hive,
            "mariadb" => Self::Mariadb,
            "mysql" => Self::Mysql,
            "n1ql" => Self::N1ql,
            "plsql" => Self::Plsql,
            "postgresql" => Self::Postgresql,
            "redshift" => Self::Redshift,
            "singlestoredb" => Self::Singlestoredb,
            "snowflake" => Self::Snowflake,
            "spark" => Self::Spark,
            "sqlite" => Self::Sqlite,
            "transactsql" | "tsql" => Self::Transactsql,
            "trino" => Self::Trino,
            _ => return None,
        })
    }
}

/// Builds the [`Dialect`] for a given tag.
pub fn dialect_for_tag(tag: DialectTag) -> Dialect {
    match tag {
        DialectTag::Sql => ansi::dialect(),
        DialectTag::Bigquery => bigquery::dialect(),
        DialectTag::Db2 => db2::dialect(),
        DialectTag::Hive => hive::dialect(),
        DialectTag::Mariadb => mariadb::dialect(),
        DialectTag::Mysql => mysql::dialect(),
        DialectTag::N1ql => n1ql::dialect(),
        DialectTag::Plsql => plsql::dialect(),
        DialectTag::Postgresql => postgresql::dialect(),
        DialectTag::Redshift => redshift::dialect(),
        DialectTag::Singlestoredb => singlestoredb::dialect(),
        DialectTag::Snowflake => snowflake::dialect(),
        DialectTag::Spark => spark::dialect(),
        DialectTag::Sqlite => sqlite::dialect(),
        DialectTag::Transactsql => transactsql::dialect(),
        DialectTag::Trino => trino::dialect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag_round_trip() {
        let names = [
            "sql",
            "bigquery",
            "db2",
            "hive",
            "mariadb",
            "mysql",
            "n1ql",
            "plsql",
            "postgresql",
            "redshift",
            "singlestoredb",
            "snowflake",
            "spark",
            "sqlite",
            "transactsql",
            "trino",
        ];
        for name in names {
            assert!(DialectTag::parse(name).is_some(), "failed to parse {name}");
        }
    }

    #[test]
    fn tsql_is_an_alias_for_transactsql() {
        assert_eq!(DialectTag::parse("tsql"), Some(DialectTag::Transactsql));
    }

    #[test]
    fn every_dialect_builds_with_a_non_empty_keyword_table() {
        for tag in [
            DialectTag::Sql,
            DialectTag::Bigquery,
            DialectTag::Db2,
            DialectTag::Hive,
            DialectTag::Mariadb,
            DialectTag::Mysql,
            DialectTag::N1ql,
            DialectTag::Plsql,
            DialectTag::Postgresql,
            DialectTag::Redshift,
            DialectTag::Singlestoredb,
            DialectTag::Snowflake,
            DialectTag::Spark,
            DialectTag::Sqlite,
            DialectTag::Transactsql,
            DialectTag::Trino,
        ] {
            let d = dialect_for_tag(tag);
            assert!(!d.commands.is_empty());
            assert!(!d.reserved_keywords.is_empty());
        }
    }
}
