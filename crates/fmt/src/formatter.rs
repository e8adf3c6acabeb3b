use sqlfmt_core::{Token, TokenCategory};

use crate::alias;
use crate::error::Error;
use crate::inline_block::{self, InlineBlocks};
use crate::options::{Case, FormatOptions, IndentStyle, MultilineLists, Params};
use crate::output::OutputBuffer;
use crate::tabular;
use crate::width::{projected_width, top_level_clause_count};

/// Formats one statement's token slice (no `EOF`, no cross-statement
/// state) per §4.7's dispatch table.
pub fn format_statement(tokens: &[Token], opts: &FormatOptions) -> Result<String, Error> {
    let blocks = inline_block::analyze(tokens, opts.expression_width);
    let mut out = OutputBuffer::new(opts.indent_step());
    let mut state = State {
        current_newline: false,
        last_command_value: None,
        open_stack: Vec::new(),
        positional_idx: 0,
    };

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.category {
            TokenCategory::ReservedCommand => emit_command(&mut out, tokens, i, opts, &mut state),
            TokenCategory::ReservedBinaryCommand => emit_binary_command(&mut out, token, opts),
            TokenCategory::ReservedDependentClause => {
                out.add_newline();
                out.add_with_spaces(&tabular::wrap(&cased_text(token, opts), opts.indent_style));
            }
            TokenCategory::ReservedJoinCondition => {
                out.add_with_spaces(&cased_text(token, opts));
            }
            TokenCategory::ReservedLogicalOperator => {
                emit_logical_operator(&mut out, tokens, i, opts, &mut state)
            }
            TokenCategory::ReservedKeyword => {
                if !alias::should_remove_as(token, opts.alias_as) {
                    out.add_with_spaces(&cased_text(token, opts));
                }
            }
            TokenCategory::ReservedCaseStart => {
                out.add_with_spaces(&cased_text(token, opts));
                out.inc_block_level();
                if matches!(opts.multiline_lists, MultilineLists::Always) {
                    out.add_newline();
                }
            }
            TokenCategory::ReservedCaseEnd => {
                out.dec_block_level();
                out.add_newline();
                out.add_with_spaces(&cased_text(token, opts));
            }
            TokenCategory::BlockStart => emit_block_start(&mut out, tokens, i, opts, &blocks, &mut state),
            TokenCategory::BlockEnd => emit_block_end(&mut out, token, opts, &blocks, &mut state),
            TokenCategory::LineComment => {
                out.add_with_spaces(&token.text);
                out.add_newline();
            }
            TokenCategory::BlockComment => {
                out.add_newline();
                let indent = out.current_indent();
                out.add_without_spaces(&reindent_block_comment(&token.text, &indent));
                out.add_newline();
            }
            TokenCategory::Placeholder => {
                let value = resolve_placeholder(token, &opts.params, &mut state.positional_idx)?;
                out.add_with_spaces(&value);
            }
            TokenCategory::PropertyAccessOperator => {
                out.add_without_spaces(&token.text);
            }
            TokenCategory::Operator => emit_operator(&mut out, tokens, i, opts, &blocks, &state),
            TokenCategory::Eof => {}
            _ => emit_default(&mut out, tokens, i, opts),
        }
        i += 1;
    }

    Ok(out.finish())
}

struct State {
    current_newline: bool,
    last_command_value: Option<String>,
    open_stack: Vec<usize>,
    positional_idx: usize,
}

fn cased_text(token: &Token, opts: &FormatOptions) -> String {
    match token.category {
        TokenCategory::Identifier | TokenCategory::QuotedIdentifier | TokenCategory::ArrayIdentifier => {
            opts.identifier_case.apply(&token.text)
        }
        TokenCategory::ReservedFunctionName => opts.function_case.apply(&token.text),
        TokenCategory::ReservedDataType
        | TokenCategory::ReservedParameterizedDataType
        | TokenCategory::ArrayKeyword => opts.data_type_case.apply(&token.text),
        _ if token.category.is_reserved() => match opts.keyword_case {
            Case::Preserve => token.text.to_string(),
            other => other.apply(&token.value),
        },
        _ => token.text.to_string(),
    }
}

/// True when `tokens[i]` had no whitespace before it in the source and
/// immediately follows a token that is itself glued to what precedes it
/// (a property access, or an open paren with nothing between it and us) —
/// e.g. the `b` in `a.b`, or the `*` in `count(*)`.
fn glue_before(tokens: &[Token], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    match tokens[i - 1].category {
        TokenCategory::PropertyAccessOperator => true,
        TokenCategory::BlockStart => tokens[i].whitespace_before.is_empty(),
        _ => false,
    }
}

fn find_tail_end(tokens: &[Token], command_idx: usize) -> usize {
    for (j, tok) in tokens.iter().enumerate().skip(command_idx + 1) {
        if tok.category == TokenCategory::ReservedCommand
            || (tok.category == TokenCategory::Operator && tok.value == ";")
        {
            return j;
        }
    }
    tokens.len()
}

fn decide_multiline(tail: &[Token], opts: &FormatOptions) -> bool {
    match opts.multiline_lists {
        MultilineLists::Always => true,
        MultilineLists::Avoid => false,
        MultilineLists::ExpressionWidth => projected_width(tail) > opts.expression_width,
        MultilineLists::Count(n) => {
            top_level_clause_count(tail) > n || projected_width(tail) > opts.expression_width
        }
    }
}

fn is_tabular(opts: &FormatOptions) -> bool {
    matches!(opts.indent_style, IndentStyle::TabularLeft | IndentStyle::TabularRight)
}

fn emit_command(out: &mut OutputBuffer, tokens: &[Token], i: usize, opts: &FormatOptions, state: &mut State) {
    let token = &tokens[i];
    let tail_end = find_tail_end(tokens, i);
    let tail = &tokens[i + 1..tail_end];
    let is_select = token.value.eq_ignore_ascii_case("select");
    state.current_newline = decide_multiline(tail, opts)
        || (is_select && tail.iter().any(|t| t.category == TokenCategory::ReservedCaseStart));

    out.dec_top_level();
    out.add_newline();
    out.add_with_spaces(&tabular::wrap(&cased_text(token, opts), opts.indent_style));

    let next_is_open_paren = tokens
        .get(i + 1)
        .is_some_and(|t| t.category == TokenCategory::BlockStart && t.text == "(");
    if !(is_tabular(opts) && next_is_open_paren) {
        out.inc_top_level();
    }
    if state.current_newline && !is_tabular(opts) {
        out.add_newline();
    }

    state.last_command_value = Some(token.value.to_ascii_uppercase().to_string());
}

fn emit_binary_command(out: &mut OutputBuffer, token: &Token, opts: &FormatOptions) {
    out.add_newline();
    let is_join = token.value.to_ascii_uppercase().contains("JOIN");
    if !is_join && !is_tabular(opts) {
        out.dec_top_level();
    }
    out.add_with_spaces(&tabular::wrap(&cased_text(token, opts), opts.indent_style));
    if !is_join {
        out.add_newline();
    }
}

fn emit_logical_operator(
    out: &mut OutputBuffer,
    tokens: &[Token],
    i: usize,
    opts: &FormatOptions,
    state: &mut State,
) {
    let token = &tokens[i];
    let is_between_and = token.value.eq_ignore_ascii_case("and")
        && i >= 2
        && tokens[i - 2].value.eq_ignore_ascii_case("between");

    if is_between_and {
        out.add_with_spaces(&cased_text(token, opts));
        return;
    }

    if is_tabular(opts) {
        out.dec_top_level();
    }

    let rendered = tabular::wrap(&cased_text(token, opts), opts.indent_style);
    if !state.current_newline {
        out.add_with_spaces(&rendered);
        return;
    }

    match opts.logical_operator_newline {
        crate::options::LogicalOperatorNewline::Before => {
            out.add_newline();
            out.add_with_spaces(&rendered);
        }
        crate::options::LogicalOperatorNewline::After => {
            out.add_with_spaces(&rendered);
            out.add_newline();
        }
    }
}

fn emit_block_start(
    out: &mut OutputBuffer,
    tokens: &[Token],
    i: usize,
    opts: &FormatOptions,
    blocks: &InlineBlocks,
    state: &mut State,
) {
    let token = &tokens[i];
    let glue = i > 0
        && !matches!(
            tokens[i - 1].category,
            TokenCategory::BlockStart | TokenCategory::LineComment | TokenCategory::Operator
        )
        && token.whitespace_before.is_empty();

    if glue {
        out.add_without_spaces(&token.text);
    } else if opts.newline_before_open_paren {
        out.add_newline();
        out.add_without_spaces(&token.text);
    } else {
        out.add_with_spaces(&token.text);
    }

    state.open_stack.push(i);
    let inline = blocks.is_inline(i);
    if !inline {
        out.inc_block_level();
        out.add_newline();
    }
}

fn emit_block_end(
    out: &mut OutputBuffer,
    token: &Token,
    opts: &FormatOptions,
    blocks: &InlineBlocks,
    state: &mut State,
) {
    let open_idx = state.open_stack.pop();
    let inline = open_idx.is_some_and(|o| blocks.is_inline(o));

    if inline {
        out.add_without_spaces(&token.text);
        return;
    }

    out.dec_block_level();
    if opts.newline_before_close_paren {
        out.add_newline();
        if is_tabular(opts) {
            out.add_without_spaces(&opts.indent_step());
        }
        out.add_without_spaces(&token.text);
    } else {
        out.add_without_newlines_before(&token.text);
    }
}

fn emit_operator(
    out: &mut OutputBuffer,
    tokens: &[Token],
    i: usize,
    opts: &FormatOptions,
    blocks: &InlineBlocks,
    state: &State,
) {
    let token = &tokens[i];
    match token.value.as_str() {
        "," => {
            out.add_without_spaces(&token.text);
            let inside_inline = state
                .open_stack
                .last()
                .is_some_and(|&o| blocks.is_inline(o));
            let after_limit = state.last_command_value.as_deref() == Some("LIMIT");
            if !inside_inline && !after_limit && state.current_newline {
                out.add_newline();
            }
        }
        ";" => {
            if opts.newline_before_semicolon {
                out.add_newline();
            }
            out.add_without_spaces(&token.text);
        }
        "$" | "[" => out.add_with_spaces(&token.text),
        ":" | "]" => out.add_without_spaces(&token.text),
        "." | "{" | "}" | "`" => out.add_without_spaces(&token.text),
        _ => {
            let prev_is_command = i > 0 && tokens[i - 1].category == TokenCategory::ReservedCommand;
            if glue_before(tokens, i) || (opts.dense_operators && !prev_is_command) {
                out.add_without_spaces(&token.text);
            } else {
                out.add_with_spaces(&token.text);
            }
        }
    }
}

fn emit_default(out: &mut OutputBuffer, tokens: &[Token], i: usize, opts: &FormatOptions) {
    if alias::should_insert_as_before(tokens, i, opts.alias_as) {
        out.add_with_spaces(alias::synthesized_as_text(tokens));
    }
    let text = cased_text(&tokens[i], opts);
    if glue_before(tokens, i) {
        out.add_without_spaces(&text);
    } else {
        out.add_with_spaces(&text);
    }
}

fn resolve_placeholder(token: &Token, params: &Params, positional_idx: &mut usize) -> Result<String, Error> {
    match params {
        Params::None => Ok(token.text.to_string()),
        Params::Positional(list) => {
            let idx = if token.value.len() <= 1 {
                let i = *positional_idx;
                *positional_idx += 1;
                i
            } else {
                token.value[1..]
                    .parse::<usize>()
                    .map_err(|_| Error::Placeholder(format!("invalid positional placeholder `{}`", token.value)))?
                    .checked_sub(1)
                    .ok_or_else(|| Error::Placeholder(format!("invalid positional placeholder `{}`", token.value)))?
            };
            list.get(idx)
                .cloned()
                .ok_or_else(|| Error::Placeholder(format!("no value supplied for placeholder `{}`", token.value)))
        }
        Params::Named(map) => {
            if token.value.len() <= 1 {
                return Err(Error::Placeholder(format!(
                    "placeholder `{}` requires a name",
                    token.value
                )));
            }
            map.get(&token.value[1..])
                .cloned()
                .ok_or_else(|| Error::Placeholder(format!("no value supplied for placeholder `{}`", token.value)))
        }
    }
}

fn reindent_block_comment(text: &str, indent: &str) -> String {
    let mut lines = text.lines();
    let Some(first) = lines.next() else {
        return text.to_owned();
    };
    let mut rendered = first.to_owned();
    for line in lines {
        rendered.push('\n');
        rendered.push_str(indent);
        rendered.push_str(line.trim_start());
    }
    rendered
}
