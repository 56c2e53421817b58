//! Visual properties animated on a target element.
//!
//! Units follow the browser conventions the content was designed with:
//! offsets are CSS pixels, rotation is degrees, and scale, opacity and clip
//! are unit-less factors. The terminal painter converts pixels to cells.

use serde::{Deserialize, Serialize};

/// Snapshot of every animatable property of one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualProps {
    /// Horizontal offset in pixels (positive moves right)
    pub offset_x: f32,
    /// Vertical offset in pixels (positive moves down)
    pub offset_y: f32,
    /// Uniform scale factor (1.0 = natural size)
    pub scale: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub opacity: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// Fraction of the content revealed from the top (1.0 = fully shown)
    pub clip: f32,
}

impl VisualProps {
    /// The resting, fully visible state.
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        rotation: 0.0,
        clip: 1.0,
    };

    /// Fully visible state with a different scale.
    #[must_use]
    pub const fn scaled(scale: f32) -> Self {
        Self {
            scale,
            ..Self::IDENTITY
        }
    }

    /// Builder: set both offsets.
    #[must_use]
    pub const fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Builder: set opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Builder: set scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set clip fraction.
    #[must_use]
    pub const fn with_clip(mut self, clip: f32) -> Self {
        self.clip = clip;
        self
    }

    /// Linear interpolation between `self` and `to`.
    ///
    /// Progress outside 0.0..1.0 is allowed (overshooting eases such as
    /// `back.out` rely on it), but the endpoints are returned exactly so a
    /// settled animation never carries float drift.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *to;
        }
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            rotation: mix(self.rotation, to.rotation),
            clip: mix(self.clip, to.clip).clamp(0.0, 1.0),
        }
    }

    /// Layers `other` on top of `self`.
    ///
    /// Offsets and rotation add; scale, opacity and clip multiply. The
    /// identity is neutral on both sides.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            offset_x: self.offset_x + other.offset_x,
            offset_y: self.offset_y + other.offset_y,
            scale: self.scale * other.scale,
            opacity: (self.opacity * other.opacity).clamp(0.0, 1.0),
            rotation: self.rotation + other.rotation,
            clip: (self.clip * other.clip).clamp(0.0, 1.0),
        }
    }
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let hidden = VisualProps::IDENTITY.with_opacity(0.0).with_scale(0.8);
        assert_eq!(hidden.lerp(&VisualProps::IDENTITY, 0.0), hidden);
        assert_eq!(hidden.lerp(&VisualProps::IDENTITY, 1.0), VisualProps::IDENTITY);
    }

    #[test]
    fn test_lerp_midpoint() {
        let from = VisualProps::IDENTITY.with_offset(0.0, 50.0).with_opacity(0.0);
        let mid = from.lerp(&VisualProps::IDENTITY, 0.5);
        assert!((mid.offset_y - 25.0).abs() < f32::EPSILON);
        assert!((mid.opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lerp_overshoot_clamps_opacity_only() {
        let from = VisualProps::IDENTITY.with_scale(0.8).with_opacity(0.0);
        let over = from.lerp(&VisualProps::IDENTITY, 1.1);
        assert!(over.scale > 1.0);
        assert!((over.opacity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_compose_identity_is_neutral() {
        let p = VisualProps::IDENTITY
            .with_offset(3.0, -4.0)
            .with_scale(1.05)
            .with_rotation(10.0);
        assert_eq!(p.compose(&VisualProps::IDENTITY), p);
        assert_eq!(VisualProps::IDENTITY.compose(&p), p);
    }

    #[test]
    fn test_compose_layers() {
        let entry = VisualProps::IDENTITY.with_offset(0.0, 10.0).with_opacity(0.5);
        let hover = VisualProps::scaled(1.1).with_offset(0.0, -10.0);
        let out = entry.compose(&hover);
        assert!(out.offset_y.abs() < f32::EPSILON);
        assert!((out.scale - 1.1).abs() < f32::EPSILON);
        assert!((out.opacity - 0.5).abs() < f32::EPSILON);
    }
}
