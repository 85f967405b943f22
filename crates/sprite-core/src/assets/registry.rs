use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::manifest::{ConfigError, SceneManifest, SpriteDescriptor};
use crate::components::raster::Raster;
use crate::components::sprite::Sprite;

/// Named, shared rasters. Every sprite built from the same name points at
/// the same pixel buffer.
pub struct RasterRegistry {
    rasters: HashMap<String, Arc<Raster>>,
}

impl RasterRegistry {
    pub fn new() -> Self {
        Self {
            rasters: HashMap::new(),
        }
    }

    /// Register a decoded raster under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, raster: Raster) -> Arc<Raster> {
        let raster = Arc::new(raster);
        self.rasters.insert(name.into(), Arc::clone(&raster));
        raster
    }

    /// Look up a raster by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<Arc<Raster>> {
        self.rasters.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }

    /// Build one sprite from its descriptor.
    pub fn build_sprite(&self, desc: &SpriteDescriptor) -> Result<Sprite, ConfigError> {
        let image = self.get(&desc.image).ok_or_else(|| ConfigError::UnknownImage {
            name: desc.name.clone(),
            image: desc.image.clone(),
        })?;

        Ok(Sprite::new(image)
            .with_position(desc.position)
            .with_velocity(desc.velocity)
            .with_centered_origin(desc.use_origin)
            .with_rotation_speed(desc.rotation_speed)
            .with_scale(desc.scale)
            .with_flip(desc.flip))
    }

    /// Build every sprite in the manifest, in order.
    pub fn spawn_all(&self, manifest: &SceneManifest) -> Result<Vec<Sprite>, ConfigError> {
        let sprites = manifest
            .sprites
            .iter()
            .map(|desc| self.build_sprite(desc))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "spawned {} sprites from {} rasters",
            sprites.len(),
            self.rasters.len()
        );
        Ok(sprites)
    }
}

impl Default for RasterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::raster::Rgba;
    use crate::components::sprite::Flip;
    use glam::Vec2;

    fn registry() -> RasterRegistry {
        let mut reg = RasterRegistry::new();
        reg.insert("wario", Raster::filled(16, 20, Rgba::WHITE));
        reg.insert("spike", Raster::filled(8, 8, Rgba::WHITE));
        reg
    }

    #[test]
    fn spawns_from_manifest() {
        let json = r#"{
            "sprites": [
                { "name": "w1", "image": "wario", "position": [10, 20], "velocity": [5, 0],
                  "use_origin": true, "rotation_speed": 2.0, "scale": 1.5, "flip": "horizontal" },
                { "name": "w2", "image": "wario" },
                { "name": "s1", "image": "spike" }
            ]
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        let reg = registry();
        let sprites = reg.spawn_all(&manifest).unwrap();
        assert_eq!(sprites.len(), 3);

        let w1 = &sprites[0];
        assert_eq!(w1.position, Vec2::new(10.0, 20.0));
        assert_eq!(w1.initial_velocity, Vec2::new(5.0, 0.0));
        assert_eq!(w1.origin, Vec2::new(8.0, 10.0));
        assert_eq!(w1.rotation_speed, 2.0);
        assert_eq!(w1.scale, 1.5);
        assert_eq!(w1.flip, Flip::Horizontal);

        assert!(Arc::ptr_eq(&sprites[0].image, &sprites[1].image));
        assert_eq!(sprites[1].origin, Vec2::ZERO);
    }

    #[test]
    fn unknown_image_is_an_error() {
        let json = r#"{ "sprites": [ { "name": "ghost", "image": "boo" } ] }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        let err = registry().spawn_all(&manifest).unwrap_err();
        assert!(err.to_string().contains("boo"));
    }

    #[test]
    fn unknown_returns_none() {
        let reg = RasterRegistry::new();
        assert!(reg.get("nonexistent").is_none());
        assert!(reg.is_empty());
    }
}
