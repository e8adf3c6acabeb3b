use sqlfmt_core::{Dialect, IdentifierQuoteStyle, KeywordTrie, StringStyle};

/// Top-level clauses that start their own line.
pub const COMMANDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "GROUP BY",
    "HAVING",
    "ORDER BY",
    "LIMIT",
    "OFFSET",
    "FETCH FIRST",
    "INSERT INTO",
    "INSERT",
    "VALUES",
    "UPDATE",
    "SET",
    "DELETE FROM",
    "DELETE",
    "CREATE TABLE",
    "CREATE OR REPLACE TABLE",
    "CREATE VIEW",
    "CREATE OR REPLACE VIEW",
    "CREATE INDEX",
    "CREATE SCHEMA",
    "CREATE DATABASE",
    "ALTER TABLE",
    "DROP TABLE",
    "DROP VIEW",
    "DROP INDEX",
    "WITH",
    "MERGE INTO",
    "MERGE",
    "TRUNCATE TABLE",
    "EXPLAIN",
    "RETURNING",
    "WINDOW",
    "PARTITION BY",
    "QUALIFY",
];

/// Set-operators and join keywords that combine two query blocks.
pub const BINARY_COMMANDS: &[&str] = &[
    "UNION ALL",
    "UNION DISTINCT",
    "UNION",
    "INTERSECT ALL",
    "INTERSECT",
    "EXCEPT ALL",
    "EXCEPT",
    "MINUS",
    "INNER JOIN",
    "LEFT OUTER JOIN",
    "LEFT JOIN",
    "RIGHT OUTER JOIN",
    "RIGHT JOIN",
    "FULL OUTER JOIN",
    "FULL JOIN",
    "CROSS JOIN",
    "NATURAL JOIN",
    "JOIN",
];

/// Sub-clauses that attach to a prior command.
pub const DEPENDENT_CLAUSES: &[&str] = &[
    "WHEN", "ELSE", "THEN", "OVER", "FILTER", "WITHIN GROUP", "AS OF",
];

pub const JOIN_CONDITIONS: &[&str] = &["ON", "USING"];

pub const LOGICAL_OPERATORS: &[&str] = &["AND", "OR", "XOR"];

pub const RESERVED_KEYWORDS: &[&str] = &[
    "AS",
    "DISTINCT",
    "ALL",
    "NULL",
    "TRUE",
    "FALSE",
    "NOT",
    "IN",
    "LIKE",
    "ILIKE",
    "BETWEEN",
    "IS",
    "EXISTS",
    "ANY",
    "SOME",
    "ASC",
    "DESC",
    "NULLS FIRST",
    "NULLS LAST",
    "PRIMARY KEY",
    "FOREIGN KEY",
    "REFERENCES",
    "UNIQUE",
    "CHECK",
    "DEFAULT",
    "CONSTRAINT",
    "CASCADE",
    "COLUMN",
    "TABLE",
    "VIEW",
    "INDEX",
    "SCHEMA",
    "DATABASE",
    "IF NOT EXISTS",
    "IF EXISTS",
    "TEMPORARY",
    "TEMP",
    "RECURSIVE",
    "LATERAL",
    "UNNEST",
    "ARRAY",
    "STRUCT",
    "ROW",
    "ROWS",
    "RANGE",
    "UNBOUNDED",
    "PRECEDING",
    "FOLLOWING",
    "CURRENT ROW",
    "INTERVAL",
    "COLLATE",
    "ESCAPE",
    "FOR",
];

pub const FUNCTION_NAMES: &[&str] = &[
    "COUNT",
    "SUM",
    "AVG",
    "MIN",
    "MAX",
    "COALESCE",
    "NULLIF",
    "CAST",
    "TRY_CAST",
    "EXTRACT",
    "SUBSTRING",
    "TRIM",
    "UPPER",
    "LOWER",
    "CONCAT",
    "ROUND",
    "FLOOR",
    "CEIL",
    "CEILING",
    "ABS",
    "LENGTH",
    "REPLACE",
    "ROW_NUMBER",
    "RANK",
    "DENSE_RANK",
    "LAG",
    "LEAD",
    "NTILE",
    "FIRST_VALUE",
    "LAST_VALUE",
    "GENERATE_SERIES",
    "ARRAY_AGG",
    "STRING_AGG",
    "LISTAGG",
];

pub const DATA_TYPES: &[&str] = &[
    "INT",
    "INTEGER",
    "BIGINT",
    "SMALLINT",
    "TINYINT",
    "DECIMAL",
    "NUMERIC",
    "FLOAT",
    "DOUBLE",
    "DOUBLE PRECISION",
    "REAL",
    "BOOLEAN",
    "BOOL",
    "CHAR",
    "VARCHAR",
    "TEXT",
    "DATE",
    "TIME",
    "TIMESTAMP",
    "JSON",
    "BLOB",
    "CLOB",
    "BINARY",
    "VARBINARY",
];

/// The baseline ANSI SQL dialect every other dialect clones and patches.
pub fn dialect() -> Dialect {
    let mut d = Dialect::new("sql");
    d.commands = KeywordTrie::from_phrases(COMMANDS);
    d.binary_commands = KeywordTrie::from_phrases(BINARY_COMMANDS);
    d.dependent_clauses = KeywordTrie::from_phrases(DEPENDENT_CLAUSES);
    d.join_conditions = KeywordTrie::from_phrases(JOIN_CONDITIONS);
    d.logical_operators = KeywordTrie::from_phrases(LOGICAL_OPERATORS);
    d.reserved_keywords = KeywordTrie::from_phrases(RESERVED_KEYWORDS);
    d.function_names = KeywordTrie::from_phrases(FUNCTION_NAMES);
    d.data_types = KeywordTrie::from_phrases(DATA_TYPES);
    d.string_styles = vec![StringStyle::SingleQuoted];
    d.identifier_quote_styles = vec![IdentifierQuoteStyle::DoubleQuote];
    d.placeholder_prefixes = vec!['?'];
    d
}
