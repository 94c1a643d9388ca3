use thiserror::Error;

/// Everything that can go wrong between reading the arguments and printing
/// the answer. The `Display` text is what lands in the JSON `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("could not parse {what} from '{input}'")]
    Parse { what: &'static str, input: String },

    #[error("Missing {library}: not installed.")]
    MissingDependency { library: &'static str },

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Unexpected(String),
}

impl CalcError {
    pub fn parse(what: &'static str, input: &str) -> Self {
        Self::Parse {
            what,
            input: input.to_string(),
        }
    }

    pub fn overflow(during: &str) -> Self {
        Self::Unexpected(format!("arithmetic overflow while computing {during}"))
    }

    /// Process exit status for this error when it reaches the command-line boundary.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse { .. } | Self::Unexpected(_) => 0,
            Self::MissingDependency { .. } => 1,
            Self::Usage(_) => 2,
        }
    }
}
