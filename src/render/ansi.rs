//! ANSI escape sequence emission
//!
//! Builders for the small CSI vocabulary this core emits: relative cursor
//! movement (`ESC [ <n> <C>` with `C` in `A`/`B`/`C`/`D`) and
//! erase-to-end-of-line (`ESC [ K`). Sequences are produced as code points
//! because the transport consumes code-point arrays, not bytes.
//!
//! The count is always written explicitly (`ESC[1D`, never `ESC[D`) so the
//! emitted shape is byte-for-byte predictable for terminal compatibility.

/// The escape code point introducing every sequence
pub const ESC: char = '\u{1b}';

fn csi(out: &mut Vec<char>, n: usize, final_char: char) {
    if n == 0 {
        return;
    }
    out.push(ESC);
    out.push('[');
    out.extend(n.to_string().chars());
    out.push(final_char);
}

/// Append `ESC [ n A` (cursor up n rows); nothing for n = 0
pub fn cursor_up(out: &mut Vec<char>, n: usize) {
    csi(out, n, 'A');
}

/// Append `ESC [ n B` (cursor down n rows); nothing for n = 0
pub fn cursor_down(out: &mut Vec<char>, n: usize) {
    csi(out, n, 'B');
}

/// Append `ESC [ n C` (cursor right n columns); nothing for n = 0
pub fn cursor_right(out: &mut Vec<char>, n: usize) {
    csi(out, n, 'C');
}

/// Append `ESC [ n D` (cursor left n columns); nothing for n = 0
pub fn cursor_left(out: &mut Vec<char>, n: usize) {
    csi(out, n, 'D');
}

/// Append `ESC [ K` (erase from cursor to end of line)
pub fn erase_to_end(out: &mut Vec<char>) {
    out.push(ESC);
    out.push('[');
    out.push('K');
}
