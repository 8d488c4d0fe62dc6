//! Markdown stripping for search snippets and tag extraction.
//!
//! Turns a markdown body into a flat, query-friendly string. The passes run
//! in a fixed order and each is a plain regex substitution, so malformed
//! markdown degrades to literal text instead of failing. The whole pipeline
//! is idempotent: running it on its own output is a no-op.

use regex::Regex;
use std::sync::LazyLock;

/// ATX headers: the `#` markers at line start, heading text is kept.
static HEADERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#{1,6}\s+").expect("header regex is a compile-time constant")
});

/// Fenced code blocks, including the fences. An unterminated fence does not
/// match and is left as literal text.
static CODE_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```").expect("code block regex is a compile-time constant")
});

/// Inline code spans; the backticks go, the code text stays.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("inline code regex is a compile-time constant"));

/// Image syntax, removed entirely (alt text is rarely prose).
static IMAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("image regex is a compile-time constant")
});

/// Links: keep the link text, discard the URL.
static LINKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("link regex is a compile-time constant")
});

/// Horizontal rules on their own line.
static RULES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:-{3,}|\*{3,}|_{3,})\s*$").expect("rule regex is a compile-time constant")
});

/// Bold emphasis pairs.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").expect("bold regex is a compile-time constant")
});

/// Italic emphasis pairs.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*]+)\*|_([^_]+)_").expect("italic regex is a compile-time constant")
});

/// Runs of whitespace (including newlines) collapse to a single space.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is a compile-time constant"));

/// Strip markdown syntax from `text`, collapsing it into one line of plain
/// text. Pure and infallible; unmatched syntax survives as literal text.
pub fn strip_markdown(text: &str) -> String {
    let text = HEADERS.replace_all(text, "");
    let text = CODE_BLOCKS.replace_all(&text, " ");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = IMAGES.replace_all(&text, " ");
    let text = LINKS.replace_all(&text, "$1");
    let text = RULES.replace_all(&text, " ");
    let text = BOLD.replace_all(&text, "$1$2");
    let text = ITALIC.replace_all(&text, "$1$2");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
