//! Command table and input parsing

/// Every command the REPL understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Exit,
}

impl CommandKind {
    /// Commands that take a single name argument
    pub fn takes_name(self) -> bool {
        matches!(self, Self::Explore | Self::Catch | Self::Inspect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Command table built once at startup and passed to the REPL by reference
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let commands = vec![
            Command {
                name: "help",
                description: "Displays a help message",
                kind: CommandKind::Help,
            },
            Command {
                name: "map",
                description: "Displays the next 20 location areas",
                kind: CommandKind::Map,
            },
            Command {
                name: "mapb",
                description: "Displays the previous 20 location areas",
                kind: CommandKind::MapBack,
            },
            Command {
                name: "explore",
                description: "Lists the Pokemon found in a location area",
                kind: CommandKind::Explore,
            },
            Command {
                name: "catch",
                description: "Throws a Pokeball at a Pokemon",
                kind: CommandKind::Catch,
            },
            Command {
                name: "inspect",
                description: "Shows details about a caught Pokemon",
                kind: CommandKind::Inspect,
            },
            Command {
                name: "pokedex",
                description: "Lists the Pokemon you have caught",
                kind: CommandKind::Pokedex,
            },
            Command {
                name: "exit",
                description: "Exits the Pokedex",
                kind: CommandKind::Exit,
            },
        ];
        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of user input, resolved against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Empty,
    Unknown,
    TooManyArguments,
    Run {
        command: &'a Command,
        arg: Option<String>,
    },
}

/// Lowercase, split on whitespace and look the first word up
pub fn parse_input<'a>(registry: &'a CommandRegistry, line: &str) -> Input<'a> {
    let line = line.trim().to_lowercase();
    let words: Vec<&str> = line.split_whitespace().collect();

    let Some(first) = words.first() else {
        return Input::Empty;
    };
    let Some(command) = registry.get(first) else {
        return Input::Unknown;
    };

    match words.len() {
        1 => Input::Run { command, arg: None },
        2 => Input::Run {
            command,
            arg: Some(words[1].to_string()),
        },
        _ => Input::TooManyArguments,
    }
}
