pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{CollisionConfig, ScanOrder, Viewport};
pub use crate::core::bounds::{bounding_rect, Rect};
pub use crate::core::pixel::intersect_pixels;
pub use crate::core::transform::sprite_transform;
pub use components::raster::{Raster, RasterError, Rgba};
pub use components::sprite::{DrawCommand, Flip, Lifecycle, Sprite};
pub use systems::collision::{check_collision, Contact};
pub use systems::kinematics::{
    elapsed_seconds, is_off_screen, reflect_in_viewport, update, update_bounded,
    wrap_angle, BodyState, Displacement, EulerIntegrator, Integrator,
};
pub use systems::motion::Motion;
pub use assets::manifest::{ConfigError, SceneManifest, SpriteDescriptor};
pub use assets::registry::RasterRegistry;
