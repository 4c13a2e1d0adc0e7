//! The markdown-to-HTML substitution pipeline.

use regex::Regex;

/// Renders markdown to HTML markup.
///
/// Compiles the substitution patterns once; reuse a single instance when
/// rendering repeatedly (the preview path re-renders on every edit).
///
/// The renderer is total: any input produces output, and text that matches
/// no pattern passes through unchanged apart from newline handling.
/// Unbalanced markers (an unterminated code fence, a stray `*`) are left as
/// literal text. No escaping or sanitization is performed; the caller owns
/// the decision to treat the output as trusted markup.
///
/// # Examples
///
/// ```
/// use quill::render::MarkdownRenderer;
///
/// let renderer = MarkdownRenderer::new();
/// let html = renderer.render("# Hello\n**world**");
/// assert_eq!(html, "<h1>Hello</h1><br /><strong>world</strong>");
/// ```
pub struct MarkdownRenderer {
    h3: Regex,
    h2: Regex,
    h1: Regex,
    wikilink: Regex,
    tag: Regex,
    bold: Regex,
    italic: Regex,
    code_block: Regex,
    inline_code: Regex,
    bullet: Regex,
    ordered: Regex,
    task_open: Regex,
    task_done: Regex,
}

impl MarkdownRenderer {
    /// Creates a renderer with all patterns compiled.
    pub fn new() -> Self {
        Self {
            // Three heading levels, deepest first. A line with 4+ leading
            // '#' matches none of these and falls through as literal text.
            h3: Regex::new(r"(?m)^### (.*)$").unwrap(),
            h2: Regex::new(r"(?m)^## (.*)$").unwrap(),
            h1: Regex::new(r"(?m)^# (.*)$").unwrap(),
            wikilink: Regex::new(r"\[\[(.*?)\]\]").unwrap(),
            tag: Regex::new(r"#([A-Za-z0-9_]+)").unwrap(),
            bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.*?)\*").unwrap(),
            code_block: Regex::new(r"(?s)```(.*?)```").unwrap(),
            inline_code: Regex::new(r"`(.*?)`").unwrap(),
            bullet: Regex::new(r"(?m)^- (.*)$").unwrap(),
            ordered: Regex::new(r"(?m)^\d+\. (.*)$").unwrap(),
            task_open: Regex::new(r"(?m)^- \[ \] (.*)$").unwrap(),
            task_done: Regex::new(r"(?m)^- \[x\] (.*)$").unwrap(),
        }
    }

    /// Converts raw note text into displayable markup.
    ///
    /// Passes run in a fixed order, each over the previous pass's output:
    /// headings (h3, h2, h1), wikilinks, tags, bold, italic, fenced code,
    /// inline code, bullet items, ordered items, task items, then newlines.
    /// Later passes see markup introduced by earlier ones; that interference
    /// is accepted behavior, not a defect. Notably the bullet pass consumes
    /// `- [ ] ` lines before the task passes can see them, and fenced code
    /// contents have already been through every earlier pass.
    ///
    /// Lines are never grouped into paragraph or list containers: every
    /// newline becomes an explicit `<br />`.
    pub fn render(&self, text: &str) -> String {
        let out = self.h3.replace_all(text, "<h3>${1}</h3>");
        let out = self.h2.replace_all(&out, "<h2>${1}</h2>");
        let out = self.h1.replace_all(&out, "<h1>${1}</h1>");

        let out = self
            .wikilink
            .replace_all(&out, r#"<span class="wikilink">${1}</span>"#);
        let out = self
            .tag
            .replace_all(&out, r#"<span class="tag">#${1}</span>"#);

        let out = self.bold.replace_all(&out, "<strong>${1}</strong>");
        let out = self.italic.replace_all(&out, "<em>${1}</em>");

        let out = self
            .code_block
            .replace_all(&out, "<pre><code>${1}</code></pre>");
        let out = self.inline_code.replace_all(&out, "<code>${1}</code>");

        let out = self.bullet.replace_all(&out, "<li>${1}</li>");
        let out = self
            .ordered
            .replace_all(&out, r#"<li class="ordered">${1}</li>"#);

        let out = self.task_open.replace_all(
            &out,
            r#"<li class="task"><input type="checkbox" /> ${1}</li>"#,
        );
        let out = self.task_done.replace_all(
            &out,
            r#"<li class="task"><input type="checkbox" checked /> ${1}</li>"#,
        );

        out.replace('\n', "<br />")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders markdown to HTML with a one-off renderer.
///
/// Convenience for single conversions; construct a [`MarkdownRenderer`]
/// directly to reuse the compiled patterns.
pub fn render_markdown(text: &str) -> String {
    MarkdownRenderer::new().render(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(text: &str) -> String {
        MarkdownRenderer::new().render(text)
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn pattern_free_text_only_gains_line_breaks() {
        assert_eq!(
            render("plain text\nwith two lines"),
            "plain text<br />with two lines"
        );
    }

    #[test]
    fn pattern_free_single_line_unchanged() {
        assert_eq!(render("nothing to see here"), "nothing to see here");
    }

    #[test]
    fn heading_levels_one_through_three() {
        assert_eq!(render("# One"), "<h1>One</h1>");
        assert_eq!(render("## Two"), "<h2>Two</h2>");
        assert_eq!(render("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn four_leading_hashes_fall_through() {
        // Only three heading levels exist; deeper nesting is not a heading
        // and the tag pass cannot match a '#' followed by another '#'.
        assert_eq!(render("#### Deep"), "#### Deep");
    }

    #[test]
    fn heading_requires_trailing_space() {
        assert_eq!(render("#NoSpace"), r##"<span class="tag">#NoSpace</span>"##);
    }

    #[test]
    fn heading_then_bold_scenario() {
        assert_eq!(
            render("# Hello\n**world**"),
            "<h1>Hello</h1><br /><strong>world</strong>"
        );
    }

    #[test]
    fn wikilink_becomes_chip() {
        assert_eq!(
            render("see [[Daily Notes]]"),
            r#"see <span class="wikilink">Daily Notes</span>"#
        );
    }

    #[test]
    fn wikilink_and_tag_scenario() {
        let html = render("Visit [[Zettelkasten Method]] and tag #research");
        assert_eq!(
            html,
            r##"Visit <span class="wikilink">Zettelkasten Method</span> and tag <span class="tag">#research</span>"##
        );
    }

    #[test]
    fn unterminated_wikilink_left_literal() {
        assert_eq!(render("broken [[link"), "broken [[link");
    }

    #[test]
    fn tag_stops_at_non_word_character() {
        // '#knowledge-management' only captures up to the hyphen.
        assert_eq!(
            render("#knowledge-management"),
            r##"<span class="tag">#knowledge</span>-management"##
        );
    }

    #[test]
    fn bold_then_italic_ordering() {
        assert_eq!(
            render("**bold** and *ital*"),
            "<strong>bold</strong> and <em>ital</em>"
        );
    }

    #[test]
    fn bold_delimiters_do_not_feed_italic() {
        // The bold pass consumes both asterisk pairs; nothing is left for
        // the italic pass to match.
        assert_eq!(render("**just bold**"), "<strong>just bold</strong>");
    }

    #[test]
    fn stray_asterisk_left_literal() {
        assert_eq!(render("a * b"), "a * b");
    }

    #[test]
    fn fenced_code_block_spans_lines() {
        let html = render("```\nlet x = 1;\nlet y = 2;\n```");
        assert_eq!(
            html,
            "<pre><code><br />let x = 1;<br />let y = 2;<br /></code></pre>"
        );
    }

    #[test]
    fn fence_contents_are_not_protected_from_earlier_passes() {
        // Headings inside a fence were already transformed by the time the
        // fence pass runs. Accepted pipeline behavior.
        let html = render("```\n# hi\n```");
        assert_eq!(html, "<pre><code><br /><h1>hi</h1><br /></code></pre>");
    }

    #[test]
    fn unterminated_fence_falls_to_inline_code() {
        // The fence pass needs a closing ```; without one the inline-code
        // pass eats the first two backticks.
        assert_eq!(render("``` not closed"), "<code></code>` not closed");
    }

    #[test]
    fn inline_code() {
        assert_eq!(render("use `cargo` here"), "use <code>cargo</code> here");
    }

    #[test]
    fn bullet_list_items_stay_flat() {
        assert_eq!(
            render("- one\n- two"),
            "<li>one</li><br /><li>two</li>"
        );
    }

    #[test]
    fn ordered_list_items() {
        assert_eq!(
            render("1. first\n2. second"),
            r#"<li class="ordered">first</li><br /><li class="ordered">second</li>"#
        );
    }

    #[test]
    fn task_lines_are_consumed_by_the_bullet_pass() {
        // '- [ ] ' starts with '- ', so the bullet pass claims the line
        // before the task passes run. Preserved pipeline ordering.
        assert_eq!(render("- [ ] todo"), "<li>[ ] todo</li>");
        assert_eq!(render("- [x] done"), "<li>[x] done</li>");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(render("a\n\nb"), "a<br /><br />b");
    }

    #[test]
    fn rendered_headings_and_wikilinks_are_stable_under_rerender() {
        let once = render("# Hello\nvisit [[Other Note]]");
        let twice = render(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn bold_wraps_already_substituted_chips() {
        let html = render("**see [[Note]]**");
        assert_eq!(
            html,
            r#"<strong>see <span class="wikilink">Note</span></strong>"#
        );
    }

    #[test]
    fn render_markdown_matches_renderer() {
        let renderer = MarkdownRenderer::new();
        let text = "# T\n- item\n#tag";
        assert_eq!(render_markdown(text), renderer.render(text));
    }
}
