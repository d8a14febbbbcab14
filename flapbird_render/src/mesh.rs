// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-cube geometry.
//!
//! Every rig part is a [`MeshId::Cube`](flapbird_core::rig::MeshId::Cube)
//! spanning `[-1, 1]³`. Each face has its own four vertices so normals stay
//! flat; triangles wind counter-clockwise when seen from outside.

use bytemuck::{Pod, Zeroable};

use flapbird_core::rig::MeshId;

/// One cube vertex as uploaded to a vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Outward face normal.
    pub normal: [f32; 3],
}

const fn v(position: [f32; 3], normal: [f32; 3]) -> CubeVertex {
    CubeVertex { position, normal }
}

const NEG_Y: [f32; 3] = [0.0, -1.0, 0.0];
const POS_Y: [f32; 3] = [0.0, 1.0, 0.0];
const NEG_X: [f32; 3] = [-1.0, 0.0, 0.0];
const POS_X: [f32; 3] = [1.0, 0.0, 0.0];
const POS_Z: [f32; 3] = [0.0, 0.0, 1.0];
const NEG_Z: [f32; 3] = [0.0, 0.0, -1.0];

/// 24 vertices: four per face, faces ordered -Y, +Y, -X, +X, +Z, -Z.
#[rustfmt::skip]
const CUBE_VERTICES: [CubeVertex; 24] = [
    v([-1.0, -1.0, -1.0], NEG_Y), v([ 1.0, -1.0, -1.0], NEG_Y),
    v([-1.0, -1.0,  1.0], NEG_Y), v([ 1.0, -1.0,  1.0], NEG_Y),
    v([ 1.0,  1.0, -1.0], POS_Y), v([-1.0,  1.0, -1.0], POS_Y),
    v([ 1.0,  1.0,  1.0], POS_Y), v([-1.0,  1.0,  1.0], POS_Y),
    v([-1.0, -1.0, -1.0], NEG_X), v([-1.0, -1.0,  1.0], NEG_X),
    v([-1.0,  1.0, -1.0], NEG_X), v([-1.0,  1.0,  1.0], NEG_X),
    v([ 1.0, -1.0,  1.0], POS_X), v([ 1.0, -1.0, -1.0], POS_X),
    v([ 1.0,  1.0,  1.0], POS_X), v([ 1.0,  1.0, -1.0], POS_X),
    v([-1.0, -1.0,  1.0], POS_Z), v([ 1.0, -1.0,  1.0], POS_Z),
    v([-1.0,  1.0,  1.0], POS_Z), v([ 1.0,  1.0,  1.0], POS_Z),
    v([ 1.0, -1.0, -1.0], NEG_Z), v([-1.0, -1.0, -1.0], NEG_Z),
    v([ 1.0,  1.0, -1.0], NEG_Z), v([-1.0,  1.0, -1.0], NEG_Z),
];

/// Two triangles per face, 36 indices into [`cube_vertices`].
#[rustfmt::skip]
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 1, 3, 2,
    4, 5, 6, 5, 7, 6,
    8, 9, 10, 9, 11, 10,
    12, 13, 14, 13, 15, 14,
    16, 17, 18, 17, 19, 18,
    20, 21, 22, 21, 23, 22,
];

/// The cube's vertices.
#[must_use]
pub fn cube_vertices() -> &'static [CubeVertex] {
    &CUBE_VERTICES
}

/// Vertex and index data for `mesh`, if this crate provides it.
///
/// Sphere tessellation is left to the GPU backend.
#[must_use]
pub fn geometry(mesh: MeshId) -> Option<(&'static [CubeVertex], &'static [u16])> {
    match mesh {
        MeshId::Cube => Some((&CUBE_VERTICES, &CUBE_INDICES)),
        MeshId::Sphere => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn counts() {
        assert_eq!(cube_vertices().len(), 24);
        assert_eq!(CUBE_INDICES.len(), 36);
        assert!(CUBE_INDICES.iter().all(|&i| usize::from(i) < 24));
    }

    #[test]
    fn vertices_lie_on_their_face() {
        for vertex in cube_vertices() {
            assert_eq!(dot(vertex.position, vertex.normal), 1.0, "{vertex:?}");
        }
    }

    #[test]
    fn triangles_face_outward() {
        for tri in CUBE_INDICES.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| cube_vertices()[usize::from(i)]);
            let n = cross(sub(b.position, a.position), sub(c.position, a.position));
            assert!(dot(n, a.normal) > 0.0, "triangle {tri:?} winds inward");
        }
    }

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(size_of::<CubeVertex>(), 24);
        assert_eq!(bytemuck::cast_slice::<CubeVertex, u8>(cube_vertices()).len(), 24 * 24);
    }

    #[test]
    fn only_cube_geometry_is_bundled() {
        assert!(geometry(MeshId::Cube).is_some());
        assert!(geometry(MeshId::Sphere).is_none());
    }
}
