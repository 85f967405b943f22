use serde::{Deserialize, Serialize};

/// Visible area sprites are bounced inside of, in world units.
/// Supplied by the display layer and only ever read here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Which raster's pixel grid the narrow phase walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Walk the argument sprite's grid through the calling sprite's space.
    #[default]
    AsCalled,
    /// Walk whichever raster has fewer pixels. Same answer, less work.
    SmallerFirst,
}

/// Tuning for pairwise collision checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionConfig {
    #[serde(default)]
    pub scan: ScanOrder,
}

impl CollisionConfig {
    pub fn with_scan(mut self, scan: ScanOrder) -> Self {
        self.scan = scan;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Viewport::default(), Viewport::new(800.0, 600.0));
        assert_eq!(CollisionConfig::default().scan, ScanOrder::AsCalled);
    }

    #[test]
    fn scan_order_from_json() {
        let cfg: CollisionConfig = serde_json::from_str(r#"{ "scan": "smaller_first" }"#).unwrap();
        assert_eq!(cfg.scan, ScanOrder::SmallerFirst);

        let cfg: CollisionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.scan, ScanOrder::AsCalled);
    }
}
