use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Increment(u64),
    Decrement(u64),
    Randomize(u64),
    List,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("command '{0}' expects a counter id")]
    MissingId(&'static str),
    #[error("invalid counter id: {0}")]
    InvalidId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or("");

        let command = match keyword {
            "add" => Command::Add,
            "inc" => Command::Increment(parse_id("inc", tokens.next())?),
            "dec" => Command::Decrement(parse_id("dec", tokens.next())?),
            "rand" => Command::Randomize(parse_id("rand", tokens.next())?),
            "list" => Command::List,
            "quit" => Command::Quit,
            other => return Err(CommandParseError::UnknownCommand(other.to_string())),
        };

        debug!("Parsed command: {:?}", command);
        Ok(command)
    }
}

fn parse_id(keyword: &'static str, token: Option<&str>) -> Result<u64, CommandParseError> {
    let token = token.ok_or(CommandParseError::MissingId(keyword))?;
    token
        .parse()
        .map_err(|_| CommandParseError::InvalidId(token.to_string()))
}
