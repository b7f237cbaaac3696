//! Plugin metadata and host registration.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginManifest {
    pub name: &'static str,
    pub category: &'static str,
    /// Oldest host version the plugin supports.
    pub min_host_version: (u32, u32, u32),
}

pub const MANIFEST: PluginManifest = PluginManifest {
    name: "DCC Plugin for Transform Operations",
    category: "Object",
    min_host_version: (4, 0, 0),
};

pub const ENDPOINT_PROPERTY: &str = "dcc_server_endpoint";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/transform";

/// One thing the plugin adds to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Panel {
        id: &'static str,
        label: &'static str,
        category: &'static str,
    },
    Operator {
        id: &'static str,
        label: &'static str,
    },
    SceneProperty {
        name: &'static str,
        label: &'static str,
        default: &'static str,
    },
}

impl Registration {
    pub fn id(&self) -> &'static str {
        match self {
            Registration::Panel { id, .. } | Registration::Operator { id, .. } => *id,
            Registration::SceneProperty { name, .. } => *name,
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Registration::Panel { .. } => write!(f, "panel {}", self.id()),
            Registration::Operator { .. } => write!(f, "operator {}", self.id()),
            Registration::SceneProperty { .. } => write!(f, "scene property {}", self.id()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{0} is already registered")]
    AlreadyRegistered(String),
    #[error("{0} is not registered")]
    NotRegistered(String),
}

/// The host's class/property registry.
pub trait HostRegistry {
    fn register(&mut self, registration: Registration) -> Result<(), RegistryError>;
    fn unregister(&mut self, id: &str) -> Result<(), RegistryError>;
}

/// Everything [`register`] adds, in order.
pub fn registrations() -> [Registration; 3] {
    [
        Registration::Panel {
            id: crate::panel::PANEL_ID,
            label: crate::panel::PANEL_LABEL,
            category: crate::panel::PANEL_CATEGORY,
        },
        Registration::Operator {
            id: crate::operator::SubmitOperator::ID,
            label: crate::operator::SubmitOperator::LABEL,
        },
        Registration::SceneProperty {
            name: ENDPOINT_PROPERTY,
            label: "Server Endpoint",
            default: DEFAULT_ENDPOINT,
        },
    ]
}

/// Register the panel, the submit operator and the endpoint property.
pub fn register(host: &mut impl HostRegistry) -> Result<(), RegistryError> {
    for registration in registrations() {
        tracing::debug!(%registration, "registering");
        host.register(registration)?;
    }
    tracing::info!(plugin = MANIFEST.name, "plugin registered");
    Ok(())
}

/// Remove everything [`register`] added.
pub fn unregister(host: &mut impl HostRegistry) -> Result<(), RegistryError> {
    for registration in registrations() {
        host.unregister(registration.id())?;
    }
    tracing::info!(plugin = MANIFEST.name, "plugin unregistered");
    Ok(())
}
