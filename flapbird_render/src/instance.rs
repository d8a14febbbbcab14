// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance GPU records.

use bytemuck::{Pod, Zeroable};

use crate::plan::RenderItem;

/// One instanced draw, laid out for a vertex buffer with
/// per-instance step mode.
///
/// `lighting` is `[ambient, diffusivity, 0, 0]`; the padding keeps the record
/// a multiple of 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    /// Model matrix, column-major.
    pub model: [f32; 16],
    /// Linear RGBA color.
    pub color: [f32; 4],
    /// Ambient and diffuse coefficients.
    pub lighting: [f32; 4],
}

impl From<&RenderItem> for InstanceRaw {
    fn from(item: &RenderItem) -> Self {
        Self {
            model: item.world_transform,
            color: item.color,
            lighting: [item.shading.ambient(), item.shading.diffusivity(), 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use flapbird_core::compose::expand_pipe;
    use flapbird_core::transform::Transform3d;

    use super::*;

    #[test]
    fn record_is_sixteen_byte_aligned_in_size() {
        assert_eq!(size_of::<InstanceRaw>(), 96);
        assert_eq!(size_of::<InstanceRaw>() % 16, 0);
    }

    #[test]
    fn shading_becomes_lighting_coefficients() {
        let list = expand_pipe(Transform3d::IDENTITY);
        let records: alloc::vec::Vec<InstanceRaw> = list
            .iter()
            .map(|c| InstanceRaw::from(&RenderItem::from(c)))
            .collect();
        assert_eq!(records[0].lighting, [0.4, 0.6, 0.0, 0.0], "cap is lit");
        assert_eq!(records[1].lighting, [1.0, 0.0, 0.0, 0.0], "opening is unlit");

        let bytes: &[u8] = bytemuck::cast_slice(&records);
        assert_eq!(bytes.len(), 3 * 96);
    }
}
