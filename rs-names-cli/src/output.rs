use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Lowercases a name and capitalizes the first letter of each word.
///
/// Words are separated by whitespace or hyphens: `"MARY-JANE o'neil"` → `"Mary-Jane O'neil"`.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
        word_start = c.is_whitespace() || c == '-';
    }
    result
}

/// Formats generated names for display.
///
/// A single name is printed bare, several names as a numbered list.
pub fn format_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [name] => format!("{}\n", name.as_ref()),
        _ => names
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}. {}\n", index + 1, name.as_ref()))
            .collect(),
    }
}

/// Writes `text` to `path`, or to stdout when no path is given.
pub fn write_output(text: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}
