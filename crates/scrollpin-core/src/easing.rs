/// Easing curves available to keyframe segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    /// No easing: progress maps straight through.
    #[default]
    Linear,
    /// Quadratic ease-in, used for the snappier exits.
    Power2In,
    /// Quadratic ease-out, used for snap tweens and reveals.
    Power2Out,
}

impl Ease {
    /// Map `t` (clamped to `[0, 1]`) through the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}
