use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Stable handle for a bubble, assigned at spawn and never reused
/// within one engine instance.
pub type BubbleId = u32;

/// A simulated circular body tied to a navigation destination.
pub struct Bubble {
    /// Unique ID for this bubble
    pub id: BubbleId,
    // === Physics State ===
    /// Center position in container pixels
    pub pos: Vec2,
    /// Velocity vector (pixels per frame)
    pub velocity: Vec2,
    /// Collision weight; heavier bubbles shift lighter ones more
    pub mass: f32,
    /// Rendered diameter, refreshed from host measurements every step.
    /// 0.0 until the first measurement arrives (not-yet-rendered element).
    pub size: f32,
    // === Presentation ===
    /// Hover flag mirrored to CSS by the host; no physics effect
    pub hovered: bool,
    /// Destination key handed back to the host on a tap
    pub destination: String,
}

impl Bubble {
    pub fn from_spec(id: BubbleId, spec: &BubbleSpec) -> Self {
        Self {
            id,
            pos: Vec2::new(spec.x, spec.y),
            velocity: Vec2::new(spec.dx, spec.dy),
            mass: spec.mass,
            size: 0.0,
            hovered: false,
            destination: spec.destination.clone(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Top-left offset the host applies to the element (center minus half-size).
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.pos.x - self.size / 2.0, self.pos.y - self.size / 2.0)
    }
}

/// One bubble entry in a scene bundle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BubbleSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub dx: f32,
    #[serde(default)]
    pub dy: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
    pub destination: String,
}

fn default_mass() -> f32 {
    1.0
}

/// Host-loadable scene description (initial bubble set).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneBundle {
    pub bubbles: Vec<BubbleSpec>,
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Built-in three-bubble scene used when the host loads nothing.
    pub fn from_generated() -> Self {
        Self {
            bubbles: vec![
                BubbleSpec {
                    x: 300.0,
                    y: 300.0,
                    dx: 0.5,
                    dy: 1.0,
                    mass: 1.0, // Lightest bubble
                    destination: "pages/about me.html".to_string(),
                },
                BubbleSpec {
                    x: 250.0,
                    y: 250.0,
                    dx: 0.45,
                    dy: 0.3,
                    mass: 1.5, // Medium weight bubble
                    destination: "pages/contact.html".to_string(),
                },
                BubbleSpec {
                    x: 700.0,
                    y: 250.0,
                    dx: 0.2,
                    dy: 1.0,
                    mass: 2.0, // Heaviest bubble
                    destination: "pages/products.html".to_string(),
                },
            ],
        }
    }
}
