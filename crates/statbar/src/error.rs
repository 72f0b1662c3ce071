use std::fmt;

/// Failure taxonomy for one invocation. Transport/HttpStatus/Decode are
/// caught per menu section; Config and Persistence abort the command.
#[derive(Debug)]
pub enum Error {
    Transport(String),
    HttpStatus(String),
    Decode(String),
    Config(String),
    Persistence(String),
}

impl Error {
    pub fn transport<M: Into<String>>(msg: M) -> Self {
        Self::Transport(msg.into())
    }

    pub fn http_status<M: Into<String>>(msg: M) -> Self {
        Self::HttpStatus(msg.into())
    }

    pub fn decode<M: Into<String>>(msg: M) -> Self {
        Self::Decode(msg.into())
    }

    pub fn config<M: Into<String>>(msg: M) -> Self {
        Self::Config(msg.into())
    }

    pub fn persistence<M: Into<String>>(msg: M) -> Self {
        Self::Persistence(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "network error: {msg}"),
            Self::HttpStatus(msg) => write!(f, "unexpected status: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Persistence(msg) => write!(f, "persistence error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::persistence(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
