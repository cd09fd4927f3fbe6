//! Markdown building blocks: index rules, code blocks, details blocks.

use textwrap::{core::display_width, Options, WordSeparator, WordSplitter, WrapAlgorithm};

const RULE_HEAD: &str = "<!-- ";
const RULE_TAIL: &str = " -->";

/// Render a hidden horizontal rule ending in an `[INDEX]` marker.
///
/// The line is `width` columns wide: `<!-- ------…---[A] -->`. When the
/// fixed parts alone exceed `width` the dashes are omitted.
pub fn horizontal_rule(index: &str, width: usize) -> String {
    let marker = format!("[{}]", index);
    let fixed = display_width(RULE_HEAD) + display_width(RULE_TAIL) + display_width(&marker);
    let dashes = "-".repeat(width.saturating_sub(fixed));

    format!("{}{}{}{}", RULE_HEAD, dashes, marker, RULE_TAIL)
}

/// Expand tabs and word-wrap lines longer than `width`.
///
/// Wrapping breaks at spaces only; a single word longer than `width` is
/// left intact on its own line.
pub fn wrap_lines(lines: &[String], width: usize) -> Vec<String> {
    let options = Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.replace('\t', "    ");
        if display_width(&line) > width {
            wrapped.extend(
                textwrap::wrap(&line, &options)
                    .into_iter()
                    .map(|l| l.into_owned()),
            );
        } else {
            wrapped.push(line);
        }
    }
    wrapped
}

/// Render a fenced bash block with the command and its output.
///
/// Output with more than `details_after` lines is folded into a
/// [`details_block`] labelled with the command.
pub fn code_block(cmd: &str, lines: &[String], width: usize, details_after: usize) -> String {
    let body = wrap_lines(lines, width).join("\n");
    let block = format!("```bash\n$ {}\n{}\n```\n", cmd, body.trim());

    if lines.len() > details_after {
        details_block(cmd, block.trim())
    } else {
        block
    }
}

/// Wrap content in a collapsible `<details>` element.
pub fn details_block(cmd: &str, content: &str) -> String {
    format!(
        "<details><summary>$ {}</summary>\n<div>\n\n{}\n\n</div></details>\n",
        cmd, content
    )
}
