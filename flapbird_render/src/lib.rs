// Copyright 2026 the Flapbird Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-plan definitions and GPU-ready data for flapbird.
//!
//! This crate provides the intermediate representation between
//! [`flapbird_core`]'s pose composition and a GPU backend. It defines:
//!
//! - [`RenderItem`]: a single draw item with single-precision data
//! - [`RenderPlan`]: an ordered list of draw items for one frame; implements
//!   [`Renderer`](flapbird_core::backend::Renderer)
//! - [`InstanceRaw`]: a `bytemuck::Pod` per-instance record
//! - [`mesh`]: unit-cube vertices and indices

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod instance;
pub mod mesh;
mod plan;

pub use instance::InstanceRaw;
pub use plan::{RenderItem, RenderPlan};
