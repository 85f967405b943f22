use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::config::{CollisionConfig, Viewport};
use crate::components::sprite::Flip;

/// Scene description: viewport, collision tuning and the sprites to spawn.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub collision: CollisionConfig,
    /// Sprites in spawn order.
    #[serde(default)]
    pub sprites: Vec<SpriteDescriptor>,
}

/// Construction parameters for one sprite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Name for lookups and log output.
    pub name: String,
    /// Key of a raster in the [`RasterRegistry`](crate::assets::registry::RasterRegistry).
    pub image: String,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    /// Pivot on the image center instead of the top-left corner.
    #[serde(default)]
    pub use_origin: bool,
    #[serde(default)]
    pub rotation_speed: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub flip: Flip,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed scene manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sprite '{name}' has non-positive scale {scale}")]
    NonPositiveScale { name: String, scale: f32 },
    #[error("sprite '{name}' references unknown image '{image}'")]
    UnknownImage { name: String, image: String },
}

fn default_scale() -> f32 {
    1.0
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    ///
    /// Rejects sprites whose scale would make their transform non-invertible.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let manifest: SceneManifest = serde_json::from_str(json)?;
        for desc in &manifest.sprites {
            if desc.scale.is_nan() || desc.scale <= 0.0 {
                return Err(ConfigError::NonPositiveScale {
                    name: desc.name.clone(),
                    scale: desc.scale,
                });
            }
        }
        Ok(manifest)
    }
}
