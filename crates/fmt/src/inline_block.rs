use ahash::{AHashMap, AHashSet};
use sqlfmt_core::{Token, TokenCategory};

use crate::width::projected_width;

/// Precomputed paren-matching and inline-eligibility for one statement's
/// token slice (§4.5). Built once per statement; the formatter consults it
/// by index as it walks the token stream.
pub struct InlineBlocks {
    close_of: AHashMap<usize, usize>,
    inline_opens: AHashSet<usize>,
}

impl InlineBlocks {
    pub fn matching_close(&self, open_idx: usize) -> Option<usize> {
        self.close_of.get(&open_idx).copied()
    }

    pub fn is_inline(&self, open_idx: usize) -> bool {
        self.inline_opens.contains(&open_idx)
    }
}

/// A block disqualifies itself from inline rendering if it contains any of
/// these categories at any nesting depth.
fn disqualifies_inline(category: TokenCategory) -> bool {
    matches!(
        category,
        TokenCategory::ReservedCommand
            | TokenCategory::ReservedBinaryCommand
            | TokenCategory::BlockComment
            | TokenCategory::ReservedCaseStart
    )
}

pub fn analyze(tokens: &[Token], expression_width: usize) -> InlineBlocks {
    let mut close_of = AHashMap::new();
    let mut inline_opens = AHashSet::new();
    let mut stack: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.category {
            TokenCategory::BlockStart => stack.push(i),
            TokenCategory::BlockEnd => {
                if let Some(open) = stack.pop() {
                    close_of.insert(open, i);
                }
            }
            _ => {}
        }
    }

    for (&open, &close) in &close_of {
        let body = &tokens[open + 1..close];
        let disqualified = body.iter().any(|t| disqualifies_inline(t.category));
        if !disqualified && projected_width(&tokens[open..=close]) <= expression_width {
            inline_opens.insert(open);
        }
    }

    InlineBlocks {
        close_of,
        inline_opens,
    }
}
