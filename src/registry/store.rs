use super::descriptor::{Language, ServerAttributes, ServerDescriptor};
use super::error::RegistryError;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, warn};

type Servers<A> = HashMap<String, ServerDescriptor<A>>;

/// Concurrency-safe store of named server descriptors.
///
/// Register/start/stop take the write lock; lookups and listings share the
/// read lock. Each lock is held for exactly one operation. Only intended
/// state is tracked: nothing is spawned.
pub struct ServerRegistry<A: ServerAttributes = ()> {
    kind: &'static str,
    servers: RwLock<Servers<A>>,
}

impl<A: ServerAttributes> ServerRegistry<A> {
    pub fn with_kind(kind: &'static str) -> Self {
        Self {
            kind,
            servers: RwLock::new(HashMap::new()),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Adds a stopped descriptor; fails if the name is taken
    pub fn insert(
        &self,
        name: impl Into<String>,
        attributes: A,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut servers = self.write();

        if servers.contains_key(&name) {
            warn!(kind = self.kind, server = %name, "Duplicate registration rejected");
            return Err(RegistryError::DuplicateRegistration {
                kind: self.kind,
                name,
            });
        }

        let descriptor = ServerDescriptor::new(name.clone(), attributes, command.into(), args);
        info!(
            kind = self.kind,
            server = %name,
            command = %descriptor.command,
            "Registered server"
        );
        servers.insert(name, descriptor);
        Ok(())
    }

    /// Marks a server running. Starting a running server is an error.
    pub fn start(&self, name: &str) -> Result<(), RegistryError> {
        let mut servers = self.write();
        let server = servers.get_mut(name).ok_or_else(|| self.not_found(name))?;

        if server.running {
            warn!(kind = self.kind, server = name, "Server already running");
            return Err(RegistryError::AlreadyRunning {
                kind: self.kind,
                name: name.to_string(),
            });
        }

        server.running = true;
        info!(kind = self.kind, server = name, "Server started");
        Ok(())
    }

    /// Marks a server stopped. Stopping a stopped server succeeds.
    pub fn stop(&self, name: &str) -> Result<(), RegistryError> {
        let mut servers = self.write();
        let server = servers.get_mut(name).ok_or_else(|| self.not_found(name))?;

        if server.running {
            info!(kind = self.kind, server = name, "Server stopped");
        }
        server.running = false;
        Ok(())
    }

    /// Snapshot of every descriptor, in no particular order
    pub fn list_servers(&self) -> Vec<ServerDescriptor<A>> {
        self.read().values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<ServerDescriptor<A>> {
        self.read().get(name).cloned()
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.read().get(name).is_some_and(|s| s.running)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn not_found(&self, name: &str) -> RegistryError {
        warn!(kind = self.kind, server = name, "Unknown server");
        RegistryError::NotFound {
            kind: self.kind,
            name: name.to_string(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Servers<A>> {
        self.servers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Servers<A>> {
        self.servers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ServerRegistry<Language> {
    /// Registry for language-tooling servers
    pub fn new() -> Self {
        Self::with_kind("lsp")
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        language: impl Into<Language>,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.insert(name, language.into(), command, args)
    }

    /// A running server tagged with `language`.
    ///
    /// When several match, which one is returned is unspecified.
    pub fn get_by_language(&self, language: &str) -> Option<ServerDescriptor<Language>> {
        self.read()
            .values()
            .find(|s| s.running && s.attributes.as_str() == language)
            .cloned()
    }
}

impl Default for ServerRegistry<Language> {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerRegistry<()> {
    /// Registry for protocol-adapter servers
    pub fn new() -> Self {
        Self::with_kind("mcp")
    }

    pub fn register(
        &self,
        name: impl Into<String>,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Result<(), RegistryError> {
        self.insert(name, (), command, args)
    }
}

impl Default for ServerRegistry<()> {
    fn default() -> Self {
        Self::new()
    }
}
