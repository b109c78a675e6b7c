/// Strips the vendor's full-line `//` comments from the quasi-JSON list
/// source.
///
/// A line is dropped when its first non-whitespace characters are `//`;
/// every other line, blank and whitespace-only lines included, passes
/// through unchanged. `//` occurring mid-line (inside a string value,
/// say) never triggers removal. Kept lines come out newline-terminated,
/// so line numbers in later parse diagnostics can shift relative to the
/// raw source. Idempotent.
pub fn decomment(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim_start().starts_with("//") {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
