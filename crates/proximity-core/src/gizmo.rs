//! Debug gizmo primitives.
//!
//! These are plain values describing what a debug renderer should draw; they
//! carry no drawing code. A host collects them each frame and forwards them to
//! its own line/sphere renderer.

use glam::Vec3;
use smallvec::SmallVec;

use crate::config::ProximityConfig;
use crate::constants::{LABEL_HEIGHT, MAX_REVERB_GIZMO_ALPHA, MIDPOINT_CUBE_SIZE};

/// Linear RGBA color in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    // Matches the common engine "yellow" (1, 0.92, 0.016).
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Gizmo {
    WireSphere {
        center: Vec3,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: Color,
    },
    WireCube {
        center: Vec3,
        size: Vec3,
        color: Color,
    },
    Label {
        position: Vec3,
        text: String,
    },
}

pub type GizmoList = SmallVec<[Gizmo; 6]>;

/// Threshold spheres around the source, plus the listener link while playing.
pub fn proximity_gizmos(
    config: &ProximityConfig,
    source: Vec3,
    listener: Vec3,
    is_playing: bool,
) -> GizmoList {
    let palette = &config.palette;
    let mut out = GizmoList::new();
    out.push(Gizmo::WireSphere {
        center: source,
        radius: config.volume.near,
        color: palette.volume,
    });
    out.push(Gizmo::WireSphere {
        center: source,
        radius: config.volume.far,
        color: palette.zero_volume,
    });
    out.push(Gizmo::WireSphere {
        center: source,
        radius: config.reverb.near,
        color: palette.reverb,
    });
    out.push(Gizmo::WireSphere {
        center: source,
        radius: config.reverb.far,
        color: palette.reverb.with_alpha(MAX_REVERB_GIZMO_ALPHA),
    });

    if is_playing {
        out.push(Gizmo::Line {
            from: listener,
            to: source,
            color: Color::YELLOW,
        });
        out.push(Gizmo::WireCube {
            center: (listener + source) / 2.0,
            size: Vec3::splat(MIDPOINT_CUBE_SIZE),
            color: Color::YELLOW,
        });
    }
    out
}

/// Readout placed above the listener.
pub fn distance_label(listener: Vec3, distance: f32, volume: f32, reverb_level: f32) -> Gizmo {
    // Adding 0.0 turns a rounded -0 into 0 so the readout never shows "-0".
    let reverb_level = reverb_level.round() + 0.0;
    Gizmo::Label {
        position: listener + Vec3::Y * LABEL_HEIGHT,
        text: format!(
            "Distance: {:.2}m\nVolume: {:.2}\nReverb: {:.0}",
            distance, volume, reverb_level
        ),
    }
}
