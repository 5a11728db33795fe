// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_WRAP_WIDTH: usize = 17;

/// Break `paragraph` into lines no longer than `width` characters.
/// Words longer than a line are hyphenated.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = std::cmp::max(width, MINIMUM_WRAP_WIDTH);
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() < width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let mut characters: Vec<char> = word.chars().collect();

    while characters.len() > width {
        let rest = characters.split_off(width - 1);
        lines.push(format!("{}-", characters.iter().collect::<String>()));
        characters = rest;
    }

    current.extend(characters);
}

/// Where reports and diagnostics are written.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &dyn std::error::Error);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &dyn std::error::Error) {
        eprintln!("{error}");
    }
}
