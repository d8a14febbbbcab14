// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plan: an ordered sequence of draw items for one frame.

use alloc::vec::Vec;

use flapbird_core::backend::Renderer;
use flapbird_core::compose::DrawCommand;
use flapbird_core::rig::{MeshId, PartId, Shading};

use crate::instance::InstanceRaw;

/// A single draw item in the render plan.
///
/// Same content as a [`DrawCommand`], narrowed to the single-precision
/// layout GPU backends upload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem {
    /// The rig part this item originates from.
    pub part: PartId,
    /// Mesh to draw.
    pub mesh: MeshId,
    /// Model matrix (column-major 4x4).
    pub world_transform: [f32; 16],
    /// Color as `[r, g, b, a]`.
    pub color: [f32; 4],
    /// Lighting mode.
    pub shading: Shading,
}

impl From<&DrawCommand> for RenderItem {
    fn from(command: &DrawCommand) -> Self {
        Self {
            part: command.part,
            mesh: command.mesh,
            world_transform: command.world_transform.to_cols_array_f32(),
            color: command.color.to_array(),
            shading: command.shading,
        }
    }
}

/// An ordered list of draw items for a single frame.
///
/// Implements [`Renderer`], so a
/// [`DrawList`](flapbird_core::compose::DrawList) can be submitted straight
/// into it. GPU backends then read [`items`](Self::items) or pack
/// [`instances`](Self::instances).
#[derive(Clone, Debug, Default)]
pub struct RenderPlan {
    /// Draw items in submission order.
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Creates an empty render plan.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the plan is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Packs every item into per-instance GPU records, in order.
    #[must_use]
    pub fn instances(&self) -> Vec<InstanceRaw> {
        let mut out = Vec::with_capacity(self.items.len());
        self.instances_into(&mut out);
        out
    }

    /// Like [`instances`](Self::instances), appending to `out`.
    pub fn instances_into(&self, out: &mut Vec<InstanceRaw>) {
        out.extend(self.items.iter().map(InstanceRaw::from));
    }

    /// Packs only the items drawn with `mesh`.
    #[must_use]
    pub fn instances_for(&self, mesh: MeshId) -> Vec<InstanceRaw> {
        self.items
            .iter()
            .filter(|item| item.mesh == mesh)
            .map(InstanceRaw::from)
            .collect()
    }
}

impl Renderer for RenderPlan {
    fn draw(&mut self, command: &DrawCommand) {
        self.items.push(RenderItem::from(command));
    }
}
