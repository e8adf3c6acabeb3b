//! A pretty-printer for SQL-family query languages: reproduces a query's
//! lexical content exactly and rewrites only the whitespace between tokens
//! according to configurable style rules.

pub mod alias;
pub mod error;
pub mod formatter;
pub mod inline_block;
pub mod options;
pub mod output;
pub mod segmenter;
pub mod tabular;
pub mod width;

pub use error::Error;
pub use options::{FormatOptions, FormatOptionsInput};

use sqlfmt_core::{disambiguate, lex};
use sqlfmt_dialects::dialect_for_tag;

/// Formats `query` under `options`, returning the reformatted source.
///
/// Preserves every identifier, literal, comment, and operator character
/// exactly; only inter-token whitespace is rewritten. Fails only when a
/// placeholder cannot be resolved against a supplied params table (lexer
/// ambiguities resolve silently; unbalanced brackets are not an error).
pub fn format(query: &str, options: &FormatOptions) -> Result<String, Error> {
    let dialect = dialect_for_tag(options.dialect);
    let tokens = disambiguate(lex(query, &dialect));
    let statements = segmenter::segment(&tokens);

    let mut rendered_statements = Vec::with_capacity(statements.len());
    for statement in statements {
        rendered_statements.push(formatter::format_statement(statement, options)?);
    }

    let separator = "\n".repeat(options.lines_between_queries + 1);
    let joined = rendered_statements.join(&separator);
    Ok(tabular::apply(&joined, options.indent_style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{AliasAs, Case, MultilineLists};

    fn fmt(query: &str) -> String {
        format(query, &FormatOptions::default()).unwrap()
    }

    fn fmt_with(query: &str, opts: FormatOptions) -> String {
        format(query, &opts).unwrap()
    }

    // §8 literal scenarios.

    #[test]
    fn scenario_1_select_1() {
        assert_eq!(fmt("select 1"), "SELECT\n  1");
    }

    #[test]
    fn scenario_2_select_list_and_where() {
        assert_eq!(
            fmt("select a,b from t where x>1"),
            "SELECT\n  a,\n  b\nFROM\n  t\nWHERE\n  x > 1"
        );
    }

    #[test]
    fn scenario_3_function_call_glued_to_paren() {
        let opts = FormatOptions {
            dialect: sqlfmt_dialects::DialectTag::Postgresql,
            keyword_case: Case::Upper,
            ..Default::default()
        };
        let out = fmt_with("select count(*) from t", opts);
        let lower = out.to_lowercase();
        assert!(lower.contains("count(*)"));
        assert!(!lower.contains("count (*)"));
    }

    #[test]
    fn scenario_4_property_access_is_glued() {
        assert!(fmt("select a.b from t").contains("a.b"));
    }

    #[test]
    fn scenario_5_between_and_stays_inline() {
        let out = fmt("select * from t where x between 1 and 2");
        assert!(out.contains("x between 1 and 2") || out.contains("x BETWEEN 1 AND 2"));
    }

    #[test]
    fn scenario_6_case_inside_select_forces_multiline() {
        let out = fmt("select case when a then 1 else 2 end from t");
        let select_to_from = &out[..out.find("FROM").unwrap()];
        assert!(select_to_from.contains('\n'));
    }

    // Testable-property laws, exercised over a small representative corpus.

    const CORPUS: &[&str] = &[
        "select 1",
        "select a, b from t where x > 1",
        "select a.b, count(*) from t group by a.b",
        "select a as b from t",
        "select * from t1 join t2 on t1.id = t2.id",
        "select case when a then 1 else 2 end from t",
        "-- a comment\nselect 1 /* inline */ from t",
        "select 1; select 2;",
    ];

    #[test]
    fn law_idempotence() {
        let opts = FormatOptions::default();
        for q in CORPUS {
            let once = format(q, &opts).unwrap();
            let twice = format(&once, &opts).unwrap();
            assert_eq!(once, twice, "not idempotent for {q:?}");
        }
    }

    #[test]
    fn law_lexical_preservation() {
        let opts = FormatOptions::default();
        fn strip_ws(s: &str) -> String {
            s.chars().filter(|c| !c.is_whitespace()).collect()
        }
        for q in CORPUS {
            let out = format(q, &opts).unwrap();
            assert_eq!(
                strip_ws(q).to_lowercase(),
                strip_ws(&out).to_lowercase(),
                "lexical content changed for {q:?}"
            );
        }
    }

    #[test]
    fn law_comment_preservation() {
        let q = "-- leading\nselect 1 /* trailing */ from t";
        let out = format(q, &FormatOptions::default()).unwrap();
        assert!(out.contains("leading"));
        assert!(out.contains("trailing"));
    }

    #[test]
    fn law_statement_independence() {
        let opts = FormatOptions::default();
        let q1 = "select 1";
        let q2 = "select 2";
        let combined = format(&format!("{q1};{q2}"), &opts).unwrap();
        let separate = format(&format!("{q1};"), &opts).unwrap();
        let sep = "\n".repeat(opts.lines_between_queries + 1);
        let expected = format!("{separate}{sep}{}", format(q2, &opts).unwrap());
        assert_eq!(combined, expected);
    }

    #[test]
    fn alias_as_always_inserts_as() {
        let opts = FormatOptions {
            alias_as: AliasAs::Always,
            ..Default::default()
        };
        let out = fmt_with("select a b from t", opts);
        assert!(out.contains("AS b") || out.contains("as b"));
    }

    #[test]
    fn alias_as_never_strips_as() {
        let opts = FormatOptions {
            alias_as: AliasAs::Never,
            ..Default::default()
        };
        let out = fmt_with("select a as b from t", opts);
        assert!(!out.to_lowercase().contains(" as "));
    }

    #[test]
    fn multiline_lists_avoid_keeps_select_list_inline() {
        let opts = FormatOptions {
            multiline_lists: MultilineLists::Avoid,
            ..Default::default()
        };
        let out = fmt_with("select a, b, c from t", opts);
        let select_line = out.lines().find(|l| l.contains("a, b, c"));
        assert!(select_line.is_some());
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let opts = FormatOptions {
            params: options::Params::Positional(vec![]),
            ..Default::default()
        };
        let err = format("select * from t where x = ?", &opts).unwrap_err();
        assert!(matches!(err, Error::Placeholder(_)));
    }

    #[test]
    fn placeholder_substitution_with_params() {
        let opts = FormatOptions {
            params: options::Params::Positional(vec!["1".to_string()]),
            ..Default::default()
        };
        let out = fmt_with("select * from t where x = ?", opts);
        assert!(out.contains("x = 1"));
    }

    #[test]
    fn unbalanced_parens_do_not_panic() {
        let _ = format("select f(a, b from t", &FormatOptions::default());
    }
}

