//! `dcclink-plugin`
//!
//! Content-tool side of dcclink: a panel that edits the active object's
//! transform and an operator that submits it to the transform API.
//!
//! The host application is reached only through the traits defined here
//! ([`HostRegistry`], [`Reporter`]), so the plugin logic runs and tests
//! without the host.

pub mod manifest;
pub mod operator;
pub mod panel;
pub mod scene;

pub use manifest::{HostRegistry, MANIFEST, PluginManifest, Registration, RegistryError, register, unregister};
pub use operator::{OperatorResult, ReportLevel, Reporter, SubmitError, SubmitOperator};
pub use panel::{ObjectDraft, PanelError, PanelRow, TransformPanel};
pub use scene::{Scene, SceneObject};
