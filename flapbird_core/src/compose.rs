// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pose composition.
//!
//! Expands a single root transform into one [`DrawCommand`] per rig entry,
//! with `world = root * local`. The bird and the pipes are independent rigs:
//! the bird's root comes from [`Pose::transform`](crate::flight::Pose::transform),
//! a pipe's root is whatever placement the host chooses.
//!
//! Composition is pure. Nothing is drawn until the host calls
//! [`DrawList::submit`] with a [`Renderer`].

use alloc::vec::Vec;

use crate::backend::Renderer;
use crate::color::Rgba;
use crate::rig::{BIRD_RIG, MeshId, PIPE_RIG, PartId, RigEntry, Shading};
use crate::transform::Transform3d;

/// One primitive to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// Rig part that produced this command.
    pub part: PartId,
    /// Primitive mesh.
    pub mesh: MeshId,
    /// Model matrix: rig root composed with the part's local transform.
    pub world_transform: Transform3d,
    /// Surface color.
    pub color: Rgba,
    /// Lighting mode.
    pub shading: Shading,
}

/// An ordered list of draw commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` commands.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Removes all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the commands in draw order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawCommand> {
        self.items.iter()
    }

    /// The commands as a slice, in draw order.
    #[must_use]
    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.items
    }

    /// Hands every command to `renderer`, in order, one `draw` call each.
    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for command in &self.items {
            renderer.draw(command);
        }
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Expands the bird rig under `root`.
///
/// `root` is usually a [`Pose`](crate::flight::Pose). Returns exactly one
/// command per bird part (9), in rig order.
#[must_use]
pub fn expand(root: impl Into<Transform3d>) -> DrawList {
    let mut out = DrawList::with_capacity(BIRD_RIG.len());
    expand_into(root, &mut out);
    out
}

/// Like [`expand`], appending to `out` instead of allocating.
pub fn expand_into(root: impl Into<Transform3d>, out: &mut DrawList) {
    expand_rig(root.into(), &BIRD_RIG, out);
}

/// Expands the pipe rig under `placement`.
///
/// Returns exactly 3 commands: cap, cap-inner, body.
#[must_use]
pub fn expand_pipe(placement: impl Into<Transform3d>) -> DrawList {
    let mut out = DrawList::with_capacity(PIPE_RIG.len());
    expand_pipe_into(placement, &mut out);
    out
}

/// Like [`expand_pipe`], appending to `out` instead of allocating.
pub fn expand_pipe_into(placement: impl Into<Transform3d>, out: &mut DrawList) {
    expand_rig(placement.into(), &PIPE_RIG, out);
}

fn expand_rig<P: Copy + Into<PartId>>(root: Transform3d, rig: &[RigEntry<P>], out: &mut DrawList) {
    debug_assert!(root.is_finite(), "non-finite rig root: {root:?}");
    out.items.reserve(rig.len());
    out.items.extend(rig.iter().map(|entry| DrawCommand {
        part: entry.part.into(),
        mesh: entry.mesh,
        world_transform: root * entry.local,
        color: entry.color,
        shading: entry.shading,
    }));
}
