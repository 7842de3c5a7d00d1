//! Visual state of one animated element.
//!
//! Keyframes are authored in viewport-relative units ([`VisualSpec`]) and
//! resolved against the current [`Viewport`] into pixel-space
//! [`VisualState`]s, so a resize changes what a keyframe means without any
//! re-authoring.

use glam::Vec2;

use crate::layout::Viewport;

/// A length that may depend on the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Vw(f32),
    Vh(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    #[inline]
    pub fn resolve(self, viewport: Viewport) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Vw(v) => viewport.width * v / 100.0,
            Length::Vh(v) => viewport.height * v / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::ZERO
    }
}

/// Resolved transform and opacity for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub offset: Vec2,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const RESTING: VisualState = VisualState {
        offset: Vec2::ZERO,
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 0.0,
    };

    pub fn lerp(a: &VisualState, b: &VisualState, t: f32) -> VisualState {
        VisualState {
            offset: a.offset.lerp(b.offset, t),
            opacity: a.opacity + (b.opacity - a.opacity) * t,
            scale: a.scale + (b.scale - a.scale) * t,
            rotation_deg: a.rotation_deg + (b.rotation_deg - a.rotation_deg) * t,
        }
    }

    pub fn is_resting(&self) -> bool {
        *self == VisualState::RESTING
    }
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState::RESTING
    }
}

/// Authored visual state; offsets stay unresolved until sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSpec {
    pub x: Length,
    pub y: Length,
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl VisualSpec {
    pub const RESTING: VisualSpec = VisualSpec {
        x: Length::ZERO,
        y: Length::ZERO,
        opacity: 1.0,
        scale: 1.0,
        rotation_deg: 0.0,
    };

    /// Invisible at rest position; the usual starting point for builders.
    pub const HIDDEN: VisualSpec = VisualSpec {
        opacity: 0.0,
        ..VisualSpec::RESTING
    };

    pub fn x(mut self, x: Length) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: Length) -> Self {
        self.y = y;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn resolve(&self, viewport: Viewport) -> VisualState {
        VisualState {
            offset: Vec2::new(self.x.resolve(viewport), self.y.resolve(viewport)),
            opacity: self.opacity,
            scale: self.scale,
            rotation_deg: self.rotation_deg,
        }
    }
}

impl Default for VisualSpec {
    fn default() -> Self {
        VisualSpec::RESTING
    }
}
