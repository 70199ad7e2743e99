#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    MinimizeWords,
    FormatExamples,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "minimize_words" => Command::MinimizeWords,
            "format_examples" => Command::FormatExamples,
            _ => Command::Unknown,
        }
    }
}
