#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no event source was given")]
    MissingEventSource,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to write event trace: {0}")]
    Fmt(#[from] std::fmt::Error),
    #[cfg(feature = "libyaml")]
    #[error("YAML parser error: {0}")]
    Yaml(libyaml_safer::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(feature = "libyaml")]
impl From<libyaml_safer::Error> for Error {
    fn from(err: libyaml_safer::Error) -> Self {
        Error::Yaml(err)
    }
}
