//! WGSL source for the triangle's vertex/fragment pair.
//!
//! The vertex stage passes `coordinates` straight through as clip-space
//! position; the fragment stage writes one flat color read from a uniform.

use bytemuck::{Pod, Zeroable};

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Bind group slot and binding of the fill color uniform.
pub const FILL_GROUP: u32 = 0;
pub const FILL_BINDING: u32 = 0;

pub const TRIANGLE_SHADER: &str = r#"
struct Fill {
    color: vec4<f32>,
}

@group(0) @binding(0) var<uniform> fill: Fill;

@vertex
fn vs_main(@location(0) coordinates: vec3<f32>) -> @builtin(position) vec4<f32> {
    return vec4<f32>(coordinates, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return fill.color;
}
"#;

/// Uniform block behind `fill`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FillUniform {
    pub color: [f32; 4],
}
