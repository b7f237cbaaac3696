//! Transform payloads submitted by the content tool.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

/// Three-component vector (x, y, z).
pub type Vec3 = [f64; 3];

/// Location, Euler rotation and scale of one scene object.
///
/// Every field is optional on the wire; which ones are required depends on
/// the endpoint, see [`TransformKind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformPayload {
    #[serde(default, deserialize_with = "vec3_or_empty", skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec3>,
    #[serde(default, deserialize_with = "vec3_or_empty", skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Vec3>,
    #[serde(default, deserialize_with = "vec3_or_empty", skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vec3>,
}

/// An empty array counts as an absent vector; any other length than three is
/// rejected.
fn vec3_or_empty<'de, D>(deserializer: D) -> Result<Option<Vec3>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(components) = Option::<Vec<f64>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if components.is_empty() {
        return Ok(None);
    }
    Vec3::try_from(components.as_slice())
        .map(Some)
        .map_err(|_| D::Error::invalid_length(components.len(), &"3 components"))
}

impl TransformPayload {
    /// Payload carrying all three vectors.
    pub fn full(location: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            location: Some(location),
            rotation: Some(rotation),
            scale: Some(scale),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

/// The four transform endpoints and what each one requires.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// `/transform`: at least one vector.
    Full,
    /// `/translation`: `location`.
    Translation,
    /// `/rotation`: `rotation`.
    Rotation,
    /// `/scale`: `scale`.
    Scale,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Full,
        TransformKind::Translation,
        TransformKind::Rotation,
        TransformKind::Scale,
    ];

    pub fn path(self) -> &'static str {
        match self {
            TransformKind::Full => "/transform",
            TransformKind::Translation => "/translation",
            TransformKind::Rotation => "/rotation",
            TransformKind::Scale => "/scale",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            TransformKind::Full => "Transform data received successfully",
            TransformKind::Translation => "Translation received successfully",
            TransformKind::Rotation => "Rotation received successfully",
            TransformKind::Scale => "Scale received successfully",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            TransformKind::Full => "At least one transform required.",
            TransformKind::Translation => "Location data is required.",
            TransformKind::Rotation => "Rotation data is required.",
            TransformKind::Scale => "Scale data is required.",
        }
    }

    /// Check that the fields this endpoint needs are present.
    pub fn validate(self, payload: &TransformPayload) -> DomainResult<()> {
        let present = match self {
            TransformKind::Full => !payload.is_empty(),
            TransformKind::Translation => payload.location.is_some(),
            TransformKind::Rotation => payload.rotation.is_some(),
            TransformKind::Scale => payload.scale.is_some(),
        };

        if present {
            Ok(())
        } else {
            Err(DomainError::validation(self.missing_message()))
        }
    }
}
