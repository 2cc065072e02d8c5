//! CPU-side asset payloads and the loader error taxonomy.
//!
//! The frontend fills these on a background thread and hands them over
//! through [`AssetSlots`]; a missing asset stays an explicit empty slot and
//! the scene keeps rendering without it.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("i/o error reading asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Equirectangular environment map, RGBA8.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EnvironmentMap {
    /// Decode a PNG into RGBA8 pixels, reporting coarse progress in
    /// \[0, 1\] to `progress`.
    pub fn load_png(path: &Path, mut progress: impl FnMut(f32)) -> Result<Self, AssetError> {
        progress(0.0);
        let bytes = std::fs::read(path)?;
        progress(0.5);
        let img = image::load_from_memory(&bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        progress(1.0);
        log::info!("environment map {}x{} decoded", width, height);
        Ok(Self {
            pixels: rgba.into_raw(),
            width,
            height,
        })
    }
}

/// Interleaved mesh vertex: position, normal, uv.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Triangle mesh with interleaved vertices, ready for GPU upload.
#[derive(Clone, Debug)]
pub struct ModelMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl ModelMesh {
    /// Generate the built-in display model, a UV sphere. Progress in
    /// \[0, 1\] is reported once per latitude ring.
    pub fn generate(
        sectors: u32,
        stacks: u32,
        radius: f32,
        mut progress: impl FnMut(f32),
    ) -> Self {
        let sectors = sectors.max(3);
        let stacks = stacks.max(2);

        let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
        let sector_step = std::f32::consts::TAU / sectors as f32;
        let stack_step = std::f32::consts::PI / stacks as f32;
        for i in 0..=stacks {
            let stack_angle = std::f32::consts::FRAC_PI_2 - i as f32 * stack_step;
            let ring = radius * stack_angle.cos();
            let y = radius * stack_angle.sin();
            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let x = ring * sector_angle.cos();
                let z = ring * sector_angle.sin();
                vertices.push(MeshVertex {
                    position: [x, y, z],
                    normal: [x / radius, y / radius, z / radius],
                    uv: [j as f32 / sectors as f32, i as f32 / stacks as f32],
                });
            }
            progress(i as f32 / stacks as f32);
        }

        // Two triangles per quad, skipping the degenerate pole rows.
        let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
        for i in 0..stacks {
            let k1 = i * (sectors + 1);
            let k2 = k1 + sectors + 1;
            for j in 0..sectors {
                if i != 0 {
                    indices.extend_from_slice(&[k1 + j, k1 + j + 1, k2 + j]);
                }
                if i != stacks - 1 {
                    indices.extend_from_slice(&[k1 + j + 1, k2 + j + 1, k2 + j]);
                }
            }
        }

        Self { vertices, indices }
    }
}

/// Hand-off point between the loader thread and the render loop.
#[derive(Default)]
pub struct AssetSlots {
    pub environment: Option<EnvironmentMap>,
    pub model: Option<ModelMesh>,
}
