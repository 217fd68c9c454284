use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Language tag attached to language-tooling servers (e.g. `go`, `dart`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Language {
    fn from(language: &str) -> Self {
        Self::new(language)
    }
}

impl From<String> for Language {
    fn from(language: String) -> Self {
        Self(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extra per-descriptor attributes a registry is parametrized over.
///
/// `()` carries nothing; [`Language`] tags language-tooling servers.
pub trait ServerAttributes: Clone + fmt::Debug + Send + Sync + 'static {
    fn language(&self) -> Option<&Language> {
        None
    }
}

impl ServerAttributes for () {}

impl ServerAttributes for Language {
    fn language(&self) -> Option<&Language> {
        Some(self)
    }
}

/// Stored record for one managed process-server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerDescriptor<A = ()> {
    pub name: String,
    pub attributes: A,
    pub command: String,
    pub args: Vec<String>,
    pub running: bool,
}

impl<A: ServerAttributes> ServerDescriptor<A> {
    pub(crate) fn new(name: String, attributes: A, command: String, args: Vec<String>) -> Self {
        Self {
            name,
            attributes,
            command,
            args,
            running: false,
        }
    }

    pub fn language(&self) -> Option<&Language> {
        self.attributes.language()
    }
}

impl<A: ServerAttributes> Serialize for ServerDescriptor<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let language = self.language();
        let len = if language.is_some() { 5 } else { 4 };

        let mut state = serializer.serialize_struct("ServerDescriptor", len)?;
        state.serialize_field("name", &self.name)?;
        match language {
            Some(language) => state.serialize_field("language", language)?,
            None => state.skip_field("language")?,
        }
        state.serialize_field("command", &self.command)?;
        state.serialize_field("args", &self.args)?;
        state.serialize_field("running", &self.running)?;
        state.end()
    }
}
