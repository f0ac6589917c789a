use std::io::{self, Write};

/// Prompts on stdout and reads one line, newline included.
pub fn input(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

pub fn str_to_bool(mut answer: String) -> Option<bool> {
    answer.make_ascii_lowercase();
    match answer.trim() {
        "y" | "yes" | "true" => Some(true),
        "n" | "no" | "false" => Some(false),
        _ => None,
    }
}
