use std::collections::HashMap;

use sqlfmt_dialects::DialectTag;

use crate::error::Error;

/// Case-folding policy for one class of output token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Preserve,
    Upper,
    Lower,
}

impl Case {
    pub(crate) fn apply(self, text: &str) -> String {
        match self {
            Case::Preserve => text.to_owned(),
            Case::Upper => text.to_uppercase(),
            Case::Lower => text.to_lowercase(),
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "preserve" => Some(Case::Preserve),
            "upper" => Some(Case::Upper),
            "lower" => Some(Case::Lower),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Standard,
    TabularLeft,
    TabularRight,
}

impl IndentStyle {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "tabularLeft" => Some(Self::TabularLeft),
            "tabularRight" => Some(Self::TabularRight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperatorNewline {
    Before,
    After,
}

impl LogicalOperatorNewline {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommaPosition {
    After,
    Before,
    Tabular,
}

impl CommaPosition {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "after" => Some(Self::After),
            "before" => Some(Self::Before),
            "tabular" => Some(Self::Tabular),
            _ => None,
        }
    }
}

/// §4.7's `multilineLists` decision policy for a reserved command's clause
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultilineLists {
    Always,
    Avoid,
    ExpressionWidth,
    Count(usize),
}

impl MultilineLists {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "always" => Some(Self::Always),
            "avoid" => Some(Self::Avoid),
            "expressionWidth" => Some(Self::ExpressionWidth),
            n => n.parse::<usize>().ok().map(Self::Count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasAs {
    Preserve,
    Always,
    Never,
}

impl AliasAs {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "preserve" => Some(Self::Preserve),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Placeholder substitution table: positional (`?`, `$1`) or keyed
/// (`:name`, `@name`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Params {
    #[default]
    None,
    Positional(Vec<String>),
    Named(HashMap<String, String>),
}

/// Validated, fully-populated formatting configuration. Immutable,
/// `Clone + Send + Sync`; cheap to share across threads since `format`
/// takes it by reference.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub dialect: DialectTag,
    pub tab_width: usize,
    pub use_tabs: bool,
    pub keyword_case: Case,
    pub identifier_case: Case,
    pub function_case: Case,
    pub data_type_case: Case,
    pub indent_style: IndentStyle,
    pub logical_operator_newline: LogicalOperatorNewline,
    pub expression_width: usize,
    pub lines_between_queries: usize,
    pub dense_operators: bool,
    pub newline_before_semicolon: bool,
    pub newline_before_open_paren: bool,
    pub newline_before_close_paren: bool,
    pub tabulate_alias: bool,
    pub comma_position: CommaPosition,
    pub multiline_lists: MultilineLists,
    pub alias_as: AliasAs,
    pub params: Params,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            dialect: DialectTag::Sql,
            tab_width: 2,
            use_tabs: false,
            keyword_case: Case::Upper,
            identifier_case: Case::Preserve,
            function_case: Case::Preserve,
            data_type_case: Case::Preserve,
            indent_style: IndentStyle::Standard,
            logical_operator_newline: LogicalOperatorNewline::Before,
            expression_width: 50,
            lines_between_queries: 1,
            dense_operators: false,
            newline_before_semicolon: false,
            newline_before_open_paren: false,
            newline_before_close_paren: false,
            tabulate_alias: false,
            comma_position: CommaPosition::After,
            multiline_lists: MultilineLists::Always,
            alias_as: AliasAs::Preserve,
            params: Params::None,
        }
    }
}

impl FormatOptions {
    pub fn indent_step(&self) -> String {
        if self.use_tabs {
            "\t".to_owned()
        } else {
            " ".repeat(self.tab_width)
        }
    }
}

/// The `Partial<FormatOptions>`-shaped record a caller builds up from CLI
/// flags or a config file; every field is optional and defaults are filled
/// in (and validated) by [`FormatOptions::try_from`].
#[derive(Debug, Clone, Default)]
pub struct FormatOptionsInput {
    pub language: Option<String>,
    pub tab_width: Option<i64>,
    pub use_tabs: Option<bool>,
    pub keyword_case: Option<String>,
    pub identifier_case: Option<String>,
    pub function_case: Option<String>,
    pub data_type_case: Option<String>,
    pub indent_style: Option<String>,
    pub logical_operator_newline: Option<String>,
    pub expression_width: Option<i64>,
    pub lines_between_queries: Option<i64>,
    pub dense_operators: Option<bool>,
    pub newline_before_semicolon: Option<bool>,
    pub newline_before_open_paren: Option<bool>,
    pub newline_before_close_paren: Option<bool>,
    pub tabulate_alias: Option<bool>,
    pub comma_position: Option<String>,
    pub multiline_lists: Option<String>,
    pub alias_as: Option<String>,
    pub params: Option<Params>,
}

fn non_negative(name: &str, value: i64) -> Result<usize, Error> {
    usize::try_from(value).map_err(|_| Error::Config(format!("`{name}` must not be negative")))
}

impl TryFrom<FormatOptionsInput> for FormatOptions {
    type Error = Error;

    fn try_from(input: FormatOptionsInput) -> Result<Self, Error> {
        let mut opts = FormatOptions::default();

        if let Some(language) = input.language {
            opts.dialect = DialectTag::parse(&language)
                .ok_or_else(|| Error::Config(format!("unknown dialect `{language}`")))?;
        }
        if let Some(v) = input.tab_width {
            opts.tab_width = non_negative("tabWidth", v)?;
            if opts.tab_width == 0 {
                return Err(Error::Config("`tabWidth` must be positive".into()));
            }
        }
        if let Some(v) = input.use_tabs {
            opts.use_tabs = v;
        }
        if let Some(v) = input.keyword_case {
            opts.keyword_case = Case::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `keywordCase` value `{v}`")))?;
        }
        if let Some(v) = input.identifier_case {
            opts.identifier_case = Case::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `identifierCase` value `{v}`")))?;
        }
        if let Some(v) = input.function_case {
            opts.function_case = Case::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `functionCase` value `{v}`")))?;
        }
        if let Some(v) = input.data_type_case {
            opts.data_type_case = Case::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `dataTypeCase` value `{v}`")))?;
        }
        if let Some(v) = input.indent_style {
            opts.indent_style = IndentStyle::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `indentStyle` value `{v}`")))?;
        }
        if let Some(v) = input.logical_operator_newline {
            opts.logical_operator_newline = LogicalOperatorNewline::parse(&v).ok_or_else(|| {
                Error::Config(format!("invalid `logicalOperatorNewline` value `{v}`"))
            })?;
        }
        if let Some(v) = input.expression_width {
            opts.expression_width = non_negative("expressionWidth", v)?;
        }
        if let Some(v) = input.lines_between_queries {
            opts.lines_between_queries = non_negative("linesBetweenQueries", v)?;
        }
        if let Some(v) = input.dense_operators {
            opts.dense_operators = v;
        }
        if let Some(v) = input.newline_before_semicolon {
            opts.newline_before_semicolon = v;
        }
        if let Some(v) = input.newline_before_open_paren {
            opts.newline_before_open_paren = v;
        }
        if let Some(v) = input.newline_before_close_paren {
            opts.newline_before_close_paren = v;
        }
        if let Some(v) = input.tabulate_alias {
            opts.tabulate_alias = v;
        }
        if let Some(v) = input.comma_position {
            opts.comma_position = CommaPosition::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `commaPosition` value `{v}`")))?;
        }
        if let Some(v) = input.multiline_lists {
            opts.multiline_lists = MultilineLists::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `multilineLists` value `{v}`")))?;
        }
        if let Some(v) = input.alias_as {
            opts.alias_as = AliasAs::parse(&v)
                .ok_or_else(|| Error::Config(format!("invalid `aliasAs` value `{v}`")))?;
        }
        if let Some(v) = input.params {
            opts.params = v;
        }

        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let opts = FormatOptions::default();
        assert_eq!(opts.tab_width, 2);
        assert!(!opts.use_tabs);
        assert_eq!(opts.keyword_case, Case::Upper);
        assert_eq!(opts.multiline_lists, MultilineLists::Always);
    }

    #[test]
    fn rejects_unknown_dialect() {
        let input = FormatOptionsInput {
            language: Some("not-a-dialect".into()),
            ..Default::default()
        };
        assert!(matches!(
            FormatOptions::try_from(input),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_negative_tab_width() {
        let input = FormatOptionsInput {
            tab_width: Some(-1),
            ..Default::default()
        };
        assert!(matches!(
            FormatOptions::try_from(input),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn rejects_unknown_keyword_case() {
        let input = FormatOptionsInput {
            keyword_case: Some("shout".into()),
            ..Default::default()
        };
        assert!(matches!(
            FormatOptions::try_from(input),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn accepts_integer_multiline_lists() {
        let input = FormatOptionsInput {
            multiline_lists: Some("3".into()),
            ..Default::default()
        };
        let opts = FormatOptions::try_from(input).unwrap();
        assert_eq!(opts.multiline_lists, MultilineLists::Count(3));
    }
}
