//! Single-line CSV tokenizer for the spreadsheet export.
//!
//! The export is read line by line, so quoted fields cannot span lines. An
//! unterminated quote simply runs to the end of the line.

/// Splits one CSV line into its raw field values.
///
/// Inside a quoted field, `""` yields a literal quote and `,` is kept as data.
/// The last field is always emitted, so `""` (empty input) yields one empty field.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
