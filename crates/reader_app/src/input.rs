/// One line typed by the user, read as an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Copy,
    Save,
    Install,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Type a URL and press Enter to extract its content.
  :copy     copy the extracted text to the clipboard
  :save     save the extracted text to the download directory
  :install  install this app (when offered)
  :quit     exit";

/// Anything that is not a `:` command is a URL, passed on untrimmed.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(name) = line.trim().strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };
    match name.trim().to_ascii_lowercase().as_str() {
        "copy" | "c" => Command::Copy,
        "save" | "download" | "s" => Command::Save,
        "install" | "i" => Command::Install,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
