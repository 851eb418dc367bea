//! Line-based input for the terminal shell.

/// What one line of user input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    ScrollDown,
    ScrollUp,
    Top,
    /// Load a new locator.
    Open(String),
    Quit,
    Unknown(String),
}

impl InputEvent {
    /// Parse a line typed at the prompt. An empty line scrolls down.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" | "j" | "down" => InputEvent::ScrollDown,
            "k" | "up" => InputEvent::ScrollUp,
            "g" | "top" => InputEvent::Top,
            "q" | "quit" => InputEvent::Quit,
            _ => match line.strip_prefix("o ") {
                Some(url) if !url.trim().is_empty() => InputEvent::Open(url.trim().to_string()),
                _ => InputEvent::Unknown(line.to_string()),
            },
        }
    }
}
