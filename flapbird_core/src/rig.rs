// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The character and obstacle rigs.
//!
//! A rig is a fixed table of [`RigEntry`] values. Each entry names a part and
//! places a unit cube (spanning `[-1, 1]` on every axis) relative to the
//! rig's root with a local `translation * scale` transform. The tables are
//! compile-time constants; nothing mutates them at runtime.

use crate::color::Rgba;
use crate::transform::Transform3d;

/// Body yellow.
pub const BIRD_YELLOW: Rgba = Rgba::from_hex(0xF9DC35);
/// Beak orange.
pub const LIP_ORANGE: Rgba = Rgba::from_hex(0xFE9800);
/// Pipe wall green.
pub const PIPE_GREEN: Rgba = Rgba::from_hex(0x528A2C);
/// Shadowed pipe opening.
pub const PIPE_DARK_GREEN: Rgba = Rgba::from_hex(0x142409);

/// Primitive mesh a draw command refers to.
///
/// Renderers own the geometry; the core only passes the identifier through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshId {
    /// Unit cube spanning `[-1, 1]³`.
    Cube,
    /// Unit sphere.
    Sphere,
}

/// How a renderer should light a part.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shading {
    /// Phong-style shading with partial ambient light.
    #[default]
    Lit,
    /// Flat, fully ambient color with no diffuse term.
    Unlit,
}

impl Shading {
    /// Ambient coefficient.
    #[must_use]
    pub const fn ambient(self) -> f32 {
        match self {
            Self::Lit => 0.4,
            Self::Unlit => 1.0,
        }
    }

    /// Diffuse coefficient.
    #[must_use]
    pub const fn diffusivity(self) -> f32 {
        match self {
            Self::Lit => 0.6,
            Self::Unlit => 0.0,
        }
    }
}

/// A named part of the bird.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    /// Torso.
    Body,
    /// Wing on the -X side.
    LeftWing,
    /// Wing on the +X side.
    RightWing,
    /// Upper half of the beak.
    UpperLip,
    /// Lower half of the beak.
    LowerLip,
    /// White of the eye on the -X side.
    RightEyeWhite,
    /// Pupil on the -X side.
    RightPupil,
    /// White of the eye on the +X side.
    LeftEyeWhite,
    /// Pupil on the +X side.
    LeftPupil,
}

impl BodyPart {
    /// Short identifier for logs and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::LeftWing => "left-wing",
            Self::RightWing => "right-wing",
            Self::UpperLip => "upper-lip",
            Self::LowerLip => "lower-lip",
            Self::RightEyeWhite => "right-eye-white",
            Self::RightPupil => "right-pupil",
            Self::LeftEyeWhite => "left-eye-white",
            Self::LeftPupil => "left-pupil",
        }
    }
}

/// A named part of a pipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipeSegment {
    /// The wide rim at the top of the pipe.
    Cap,
    /// The dark opening inside the rim.
    CapInner,
    /// The pipe shaft.
    Body,
}

impl PipeSegment {
    /// Short identifier for logs and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cap => "pipe-cap",
            Self::CapInner => "pipe-cap-inner",
            Self::Body => "pipe-body",
        }
    }
}

/// Any rig part, so bird and pipe commands can share one list type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartId {
    /// A bird part.
    Bird(BodyPart),
    /// A pipe part.
    Pipe(PipeSegment),
}

impl PartId {
    /// Short identifier for logs and traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bird(part) => part.name(),
            Self::Pipe(segment) => segment.name(),
        }
    }
}

impl From<BodyPart> for PartId {
    fn from(part: BodyPart) -> Self {
        Self::Bird(part)
    }
}

impl From<PipeSegment> for PartId {
    fn from(segment: PipeSegment) -> Self {
        Self::Pipe(segment)
    }
}

/// One row of a rig table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigEntry<P> {
    /// Which part this row draws.
    pub part: P,
    /// Primitive to draw.
    pub mesh: MeshId,
    /// Placement relative to the rig root.
    pub local: Transform3d,
    /// Surface color.
    pub color: Rgba,
    /// Lighting mode.
    pub shading: Shading,
}

const fn cube<P>(
    part: P,
    [tx, ty, tz]: [f64; 3],
    [sx, sy, sz]: [f64; 3],
    color: Rgba,
    shading: Shading,
) -> RigEntry<P> {
    RigEntry {
        part,
        mesh: MeshId::Cube,
        local: Transform3d::from_translation(tx, ty, tz).concat(Transform3d::from_scale(sx, sy, sz)),
        color,
        shading,
    }
}

/// The bird: body, wings, beak, and eyes, in draw order.
#[rustfmt::skip]
pub const BIRD_RIG: [RigEntry<BodyPart>; 9] = [
    cube(BodyPart::Body,          [ 0.0,   0.0,   0.0], [0.8,  1.0, 1.2 ], BIRD_YELLOW, Shading::Lit),
    cube(BodyPart::LeftWing,      [-1.15, -0.4,  -0.4], [0.2,  0.6, 0.8 ], Rgba::WHITE, Shading::Lit),
    cube(BodyPart::RightWing,     [ 1.15, -0.4,  -0.4], [0.2,  0.6, 0.8 ], Rgba::WHITE, Shading::Lit),
    cube(BodyPart::UpperLip,      [ 0.0,   0.0,   1.0], [1.1,  0.2, 1.0 ], LIP_ORANGE,  Shading::Lit),
    cube(BodyPart::LowerLip,      [ 0.0,  -0.3,   0.7], [1.05, 0.2, 1.0 ], LIP_ORANGE,  Shading::Lit),
    cube(BodyPart::RightEyeWhite, [-0.75,  0.55,  0.7], [0.1,  0.5, 0.3 ], Rgba::WHITE, Shading::Lit),
    cube(BodyPart::RightPupil,    [-0.8,   0.6,   0.7], [0.1,  0.3, 0.15], Rgba::BLACK, Shading::Lit),
    cube(BodyPart::LeftEyeWhite,  [ 0.75,  0.55,  0.7], [0.1,  0.5, 0.3 ], Rgba::WHITE, Shading::Lit),
    cube(BodyPart::LeftPupil,     [ 0.8,   0.6,   0.7], [0.1,  0.3, 0.15], Rgba::BLACK, Shading::Lit),
];

/// A pipe standing on its placement origin, in draw order.
///
/// The inner cap is a hair taller than the rim so its top face wins the depth
/// test.
#[rustfmt::skip]
pub const PIPE_RIG: [RigEntry<PipeSegment>; 3] = [
    cube(PipeSegment::Cap,      [0.0, 2.0, 0.0], [1.2, 0.5,   1.2], PIPE_GREEN,      Shading::Lit),
    cube(PipeSegment::CapInner, [0.0, 2.0, 0.0], [0.9, 0.501, 0.9], PIPE_DARK_GREEN, Shading::Unlit),
    cube(PipeSegment::Body,     [0.0, 0.0, 0.0], [1.0, 2.0,   1.0], PIPE_GREEN,      Shading::Lit),
];
