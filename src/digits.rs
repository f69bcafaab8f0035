//! Large block-glyph text for the clock label.
//!
//! Each glyph is a 5-row bitmap. At scale `s` every bitmap pixel becomes a
//! block `2s` columns wide and `s` rows tall (terminal cells are roughly twice
//! as tall as they are wide), and glyphs are separated by `s` blank columns.

/// Bitmap rows per glyph.
pub const GLYPH_ROWS: usize = 5;

const FILL: char = '█';

fn glyph(c: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match c {
        '0' => ["###", "#.#", "#.#", "#.#", "###"],
        '1' => [".#.", "##.", ".#.", ".#.", "###"],
        '2' => ["###", "..#", "###", "#..", "###"],
        '3' => ["###", "..#", "###", "..#", "###"],
        '4' => ["#.#", "#.#", "###", "..#", "..#"],
        '5' | 'S' => ["###", "#..", "###", "..#", "###"],
        '6' => ["###", "#..", "###", "#.#", "###"],
        '7' => ["###", "..#", "..#", "..#", "..#"],
        '8' => ["###", "#.#", "###", "#.#", "###"],
        '9' => ["###", "#.#", "###", "..#", "###"],
        ':' => [".", "#", ".", "#", "."],
        'T' => ["###", ".#.", ".#.", ".#.", ".#."],
        'I' => ["###", ".#.", ".#.", ".#.", "###"],
        'M' => ["#...#", "##.##", "#.#.#", "#...#", "#...#"],
        'E' => ["###", "#..", "###", "#..", "###"],
        'U' => ["#.#", "#.#", "#.#", "#.#", "###"],
        'P' => ["###", "#.#", "###", "#..", "#.."],
        '\'' => ["#", "#", ".", ".", "."],
        '!' => ["#", "#", "#", ".", "#"],
        ' ' => ["..", "..", "..", "..", ".."],
        _ => return None,
    };
    Some(rows)
}

/// Column width of `text` drawn at `scale`, or `None` if some character has
/// no glyph.
pub fn width(text: &str, scale: usize) -> Option<usize> {
    let mut pixels = 0;
    let mut count = 0usize;
    for c in text.chars() {
        pixels += glyph(c)?[0].len();
        count += 1;
    }
    Some(pixels * 2 * scale + count.saturating_sub(1) * scale)
}

/// Row height of any text drawn at `scale`.
pub fn height(scale: usize) -> usize {
    GLYPH_ROWS * scale
}

/// Draws `text` at `scale`. Every returned line has the same column width.
///
/// Returns `None` if `scale` is zero or some character has no glyph.
///
/// # Examples
///
/// ```rust
/// use countdown_tui::digits;
///
/// let lines = digits::render("1", 1).unwrap();
/// assert_eq!(lines.len(), 5);
/// assert_eq!(lines[0], "  ██  ");
/// ```
pub fn render(text: &str, scale: usize) -> Option<Vec<String>> {
    if scale == 0 {
        return None;
    }
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;
    let gap = " ".repeat(scale);
    let mut lines = Vec::with_capacity(height(scale));

    for row in 0..GLYPH_ROWS {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.push_str(&gap);
            }
            for pixel in g[row].chars() {
                let cell = if pixel == '#' { FILL } else { ' ' };
                for _ in 0..2 * scale {
                    line.push(cell);
                }
            }
        }
        for _ in 0..scale {
            lines.push(line.clone());
        }
    }
    Some(lines)
}

/// Largest scale, at most `preferred`, at which `text` fits in
/// `max_width` x `max_height` cells. Zero means it does not fit even at scale
/// one.
pub fn fit_scale(text: &str, preferred: usize, max_width: usize, max_height: usize) -> usize {
    (1..=preferred)
        .rev()
        .find(|&scale| {
            height(scale) <= max_height
                && width(text, scale).is_some_and(|w| w <= max_width)
        })
        .unwrap_or(0)
}
