use crate::options::IndentStyle;

/// Private-use sentinel bracketing a tabular-eligible token in the main
/// formatter's output, consumed only by [`apply`] in this module. Never
/// appears in real SQL source, so it is safe to search/strip blindly.
pub const MARK: char = '\u{E000}';

const COLUMN_WIDTH: usize = 10;

/// Wraps `text` in tabular markers when `style` calls for column alignment;
/// a no-op passthrough under `Standard`.
pub fn wrap(text: &str, style: IndentStyle) -> String {
    if matches!(style, IndentStyle::TabularLeft | IndentStyle::TabularRight) {
        format!("{MARK}{text}{MARK}")
    } else {
        text.to_owned()
    }
}

/// Final sweep (§4.8): right- or left-pads each marker-wrapped token to a
/// fixed column width, then removes the markers. A no-op under `Standard`.
pub fn apply(rendered: &str, style: IndentStyle) -> String {
    if matches!(style, IndentStyle::Standard) {
        return rendered.to_owned();
    }
    let lines: Vec<String> = rendered.lines().map(|l| pad_line(l, style)).collect();
    lines.join("\n")
}

fn pad_line(line: &str, style: IndentStyle) -> String {
    let Some(start) = line.find(MARK) else {
        return line.to_owned();
    };
    let after_start = start + MARK.len_utf8();
    let Some(rel_end) = line[after_start..].find(MARK) else {
        return line.to_owned();
    };
    let end = after_start + rel_end;
    let before = &line[..start];
    let token = &line[after_start..end];
    let after = &line[end + MARK.len_utf8()..];
    let padded = match style {
        IndentStyle::TabularLeft => format!("{token:<COLUMN_WIDTH$}"),
        IndentStyle::TabularRight => format!("{token:>COLUMN_WIDTH$}"),
        IndentStyle::Standard => token.to_owned(),
    };
    format!("{before}{padded}{after}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_pads_marked_token() {
        let wrapped = wrap("SELECT", IndentStyle::TabularLeft);
        let line = format!("{wrapped}x");
        let out = apply(&line, IndentStyle::TabularLeft);
        assert_eq!(out, format!("{:<10}x", "SELECT"));
    }

    #[test]
    fn right_pads_marked_token() {
        let wrapped = wrap("FROM", IndentStyle::TabularRight);
        let line = format!("{wrapped}x");
        let out = apply(&line, IndentStyle::TabularRight);
        assert_eq!(out, format!("{:>10}x", "FROM"));
    }

    #[test]
    fn standard_style_is_a_no_op() {
        assert_eq!(wrap("SELECT", IndentStyle::Standard), "SELECT");
    }
}
