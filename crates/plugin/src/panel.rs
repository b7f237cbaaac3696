//! Transform panel.
//!
//! The panel works on a draft copied from the scene when it opens. Edits stay
//! in the draft until [`TransformPanel::apply`]; dropping the panel discards
//! them.

use dcclink_core::Vec3;

use crate::operator::SubmitOperator;
use crate::scene::Scene;

pub const PANEL_ID: &str = "DCC_PT_PANEL";
pub const PANEL_LABEL: &str = "DCC Plugin UI";
pub const PANEL_CATEGORY: &str = "DCC Plugin";

/// Editable copy of the active object's name and transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDraft {
    /// Name of the scene object this draft writes back to.
    target: String,
    pub name: String,
    pub location: Vec3,
    pub rotation_euler: Vec3,
    pub scale: Vec3,
}

impl ObjectDraft {
    pub fn target(&self) -> &str {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("object `{0}` no longer exists in the scene")]
    ObjectGone(String),
    #[error("an object named `{0}` already exists")]
    NameTaken(String),
}

/// One line of the panel layout, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelRow {
    Label(&'static str),
    Field { label: &'static str, value: String },
    Button { label: &'static str, operator: &'static str },
}

#[derive(Debug, Clone)]
pub struct TransformPanel {
    object: Option<ObjectDraft>,
    pub server_endpoint: String,
}

impl TransformPanel {
    pub fn open(scene: &Scene) -> Self {
        let object = scene.active_object().map(|o| ObjectDraft {
            target: o.name.clone(),
            name: o.name.clone(),
            location: o.location,
            rotation_euler: o.rotation_euler,
            scale: o.scale,
        });

        Self {
            object,
            server_endpoint: scene.server_endpoint.clone(),
        }
    }

    pub fn object(&self) -> Option<&ObjectDraft> {
        self.object.as_ref()
    }

    /// `None` when the scene had no active object at open time.
    pub fn object_mut(&mut self) -> Option<&mut ObjectDraft> {
        self.object.as_mut()
    }

    /// Write the draft back to the scene.
    pub fn apply(self, scene: &mut Scene) -> Result<(), PanelError> {
        if let Some(draft) = self.object {
            if draft.name != draft.target && scene.objects().iter().any(|o| o.name == draft.name) {
                return Err(PanelError::NameTaken(draft.name));
            }
            let Some(object) = scene.object_mut(&draft.target) else {
                return Err(PanelError::ObjectGone(draft.target));
            };
            object.name = draft.name;
            object.location = draft.location;
            object.rotation_euler = draft.rotation_euler;
            object.scale = draft.scale;
            tracing::debug!(object = %object.name, "panel applied");
        }

        scene.server_endpoint = self.server_endpoint;
        Ok(())
    }

    /// Render model in layout order.
    pub fn rows(&self) -> Vec<PanelRow> {
        let mut rows = vec![PanelRow::Label("Active Object:")];

        match &self.object {
            Some(draft) => {
                rows.push(PanelRow::Field {
                    label: "Name",
                    value: draft.name.clone(),
                });
                rows.push(PanelRow::Label("Transform Controls:"));
                rows.push(PanelRow::Field {
                    label: "Location",
                    value: format_vec3(draft.location),
                });
                rows.push(PanelRow::Field {
                    label: "Rotation",
                    value: format_vec3(draft.rotation_euler),
                });
                rows.push(PanelRow::Field {
                    label: "Scale",
                    value: format_vec3(draft.scale),
                });
            }
            None => rows.push(PanelRow::Label("(none)")),
        }

        rows.push(PanelRow::Label("Server Endpoint:"));
        rows.push(PanelRow::Field {
            label: "Endpoint",
            value: self.server_endpoint.clone(),
        });
        rows.push(PanelRow::Button {
            label: SubmitOperator::LABEL,
            operator: SubmitOperator::ID,
        });
        rows
    }
}

fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v[0], v[1], v[2])
}
