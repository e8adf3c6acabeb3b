use smol_str::SmolStr;

/// The closed set of lexical categories a [`Token`] can carry.
///
/// Disambiguation (see [`crate::disambiguate`]) rewrites a token's category
/// in place based on neighboring tokens; the set of possible categories
/// never grows beyond this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    ReservedCommand,
    ReservedBinaryCommand,
    ReservedDependentClause,
    ReservedJoinCondition,
    ReservedLogicalOperator,
    ReservedKeyword,
    ReservedFunctionName,
    ReservedDataType,
    ReservedParameterizedDataType,
    ReservedCaseStart,
    ReservedCaseEnd,
    Identifier,
    ArrayIdentifier,
    ArrayKeyword,
    QuotedIdentifier,
    String,
    Variable,
    Placeholder,
    Number,
    Operator,
    PropertyAccessOperator,
    BlockStart,
    BlockEnd,
    LineComment,
    BlockComment,
    Eof,
}

impl TokenCategory {
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenCategory::ReservedCommand
                | TokenCategory::ReservedBinaryCommand
                | TokenCategory::ReservedDependentClause
                | TokenCategory::ReservedJoinCondition
                | TokenCategory::ReservedLogicalOperator
                | TokenCategory::ReservedKeyword
                | TokenCategory::ReservedFunctionName
                | TokenCategory::ReservedDataType
                | TokenCategory::ReservedParameterizedDataType
                | TokenCategory::ReservedCaseStart
                | TokenCategory::ReservedCaseEnd
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenCategory::LineComment | TokenCategory::BlockComment)
    }
}

/// A single lexical unit, carrying enough of the source to reproduce it
/// exactly (`whitespace_before + text`, concatenated in source order,
/// reproduces the original input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    /// The original source slice for this token.
    pub text: SmolStr,
    /// The canonicalized form: reserved text has internal whitespace
    /// collapsed to single spaces; quoted identifiers have their quote
    /// wrapper stripped. For operators `value == text`.
    pub value: SmolStr,
    /// The literal whitespace run that preceded this token in the source.
    pub whitespace_before: SmolStr,
    /// Byte offset of the first character of `text` in the source.
    pub start_offset: usize,
}

impl Token {
    pub fn new(
        category: TokenCategory,
        text: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
        whitespace_before: impl Into<SmolStr>,
        start_offset: usize,
    ) -> Self {
        Self {
            category,
            text: text.into(),
            value: value.into(),
            whitespace_before: whitespace_before.into(),
            start_offset,
        }
    }

    pub fn eof(start_offset: usize) -> Self {
        Self::new(TokenCategory::Eof, "", "", "", start_offset)
    }
}
