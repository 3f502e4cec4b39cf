//! Neutral color tags and the terminal escape post-pass.
//!
//! The renderer never embeds escape sequences directly. It emits placeholder
//! tags like `[green]` and `[reset]` inline, and a single substitution pass
//! afterwards either strips every tag (plain output) or swaps each for its
//! ANSI escape. Tags do not need to balance; `[reset]` appears explicitly
//! wherever a color region ends.

use colored::Color;

/// The closed set of tags the renderer may emit.
pub const COLOR_TAGS: [&str; 8] = [
    "[green]",
    "[red]",
    "[blue]",
    "[cyan]",
    "[yellow]",
    "[light_yellow]",
    "[bold]",
    "[reset]",
];

/// Remove every color tag, leaving plain text.
pub fn strip_colors(out: &str) -> String {
    let mut text = out.to_string();
    for tag in COLOR_TAGS {
        text = text.replace(tag, "");
    }
    text
}

/// Substitute every color tag for its ANSI escape sequence.
pub fn colorize(out: &str) -> String {
    let mut text = out.to_string();
    for tag in COLOR_TAGS {
        text = text.replace(tag, &ansi(tag));
    }
    text
}

fn ansi(tag: &str) -> String {
    match tag {
        "[green]" => fg(Color::Green),
        "[red]" => fg(Color::Red),
        "[blue]" => fg(Color::Blue),
        "[cyan]" => fg(Color::Cyan),
        "[yellow]" => fg(Color::Yellow),
        "[light_yellow]" => fg(Color::BrightYellow),
        "[bold]" => "\x1b[1m".to_string(),
        _ => "\x1b[0m".to_string(),
    }
}

fn fg(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}
