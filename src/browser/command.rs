//! Parsing of the single-line commands typed at the browser prompt.

/// A command entered at the prompt. Item numbers are 1-based, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Up,
    NextPage,
    PrevPage,
    Help,
    /// `g <path>`
    Goto(String),
    /// `<N>`: enter a directory or show a file
    Open(usize),
    /// `o <N>`
    Reveal(usize),
    /// `d <N>`
    Delete(usize),
    Invalid(String),
}

impl Command {
    /// Parse a prompt line. Verbs are case-insensitive; `g` keeps the path as typed.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let verb = verb.to_lowercase();

        match (verb.as_str(), rest.is_empty()) {
            ("q" | "quit" | "exit", true) => Command::Quit,
            ("." | ".." | "...", true) => Command::Up,
            ("n", true) => Command::NextPage,
            ("p", true) => Command::PrevPage,
            ("h" | "?" | "help", true) => Command::Help,
            ("g", false) => Command::Goto(rest.to_string()),
            ("o", false) => Self::numbered(rest, Command::Reveal, line),
            ("d", false) => Self::numbered(rest, Command::Delete, line),
            (number, true) => Self::numbered(number, Command::Open, line),
            _ => Command::Invalid(line.to_string()),
        }
    }

    fn numbered(arg: &str, make: fn(usize) -> Command, line: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(n) => make(n),
            Err(_) => Command::Invalid(line.to_string()),
        }
    }
}
