//! Markup stripping.
//!
//! A single-pass scanner that drops everything between `<` and `>` and
//! decodes the bare `&lt` / `&gt` escapes. There is no tree, no attribute
//! parsing and no knowledge of `<script>` or `<style>`: text inside those
//! elements is emitted like any other text.

/// Escapes recognised outside tags, with the character each decodes to.
///
/// The match is on the three-character prefix, but a match always consumes
/// four characters: the escape plus whatever follows it, normally `;`.
const ESCAPES: [(&[char], char); 2] = [(&['&', 'l', 't'], '<'), (&['&', 'g', 't'], '>')];

/// Characters consumed by a matched escape.
const ESCAPE_WIDTH: usize = 4;

/// Strip tags from `markup`, returning the remaining text.
///
/// A `<` that is never closed swallows the rest of the input.
pub fn strip(markup: &str) -> String {
    let chars: Vec<char> = markup.chars().collect();
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '<' {
            in_tag = true;
            i += 1;
        } else if c == '>' {
            in_tag = false;
            i += 1;
        } else if in_tag {
            i += 1;
        } else if let Some(&(_, decoded)) = ESCAPES
            .iter()
            .find(|(escape, _)| chars[i..].starts_with(escape))
        {
            text.push(decoded);
            i += ESCAPE_WIDTH;
        } else {
            text.push(c);
            i += 1;
        }
    }

    text
}
