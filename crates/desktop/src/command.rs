use std::str::FromStr;

/// A line typed at the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quantity` is kept raw; the controller validates it like the add form.
    Add { name: String, quantity: String },
    Remove { name: String },
    Buy { name: String },
    Return { name: String },
    Refresh,
    Help,
    Quit,
}

impl Command {
    pub const USAGE: &'static str = "commands: add <name> <qty> | remove <name> | buy <name> | return <name> | refresh | help | quit";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let named = |usage: &'static str| {
            if rest.is_empty() {
                Err(CommandError::Usage(usage))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" => {
                // Item names may contain spaces; the quantity is the last word.
                let Some((name, quantity)) = rest.rsplit_once(char::is_whitespace) else {
                    return Err(CommandError::Usage("add <name> <qty>"));
                };
                Ok(Command::Add {
                    name: name.trim().to_string(),
                    quantity: quantity.to_string(),
                })
            }
            "remove" | "rm" => Ok(Command::Remove {
                name: named("remove <name>")?,
            }),
            "buy" | "purchase" => Ok(Command::Buy {
                name: named("buy <name>")?,
            }),
            "return" => Ok(Command::Return {
                name: named("return <name>")?,
            }),
            "refresh" | "r" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
