use std::path::Path;

use anyhow::{Context, Result};

/// Checker fallback dimensions.
const CHECKER_SIZE: u32 = 64;
const CHECKER_CELL: u32 = 8;

/// Decoded RGBA8 image data, ready for GPU upload. Decoding happens on the
/// CPU side so the renderer only ever sees bytes it can upload directly.
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Loads the shared texture, or substitutes a generated checkerboard so
    /// the demo still runs without assets on disk.
    pub fn load_or_checker(path: &Path) -> Self {
        match Self::load(path) {
            Ok(texture) => texture,
            Err(err) => {
                log::warn!("{:#}; using checkerboard fallback", err);
                Self::checkerboard()
            }
        }
    }

    pub fn checkerboard() -> Self {
        let mut rgba = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
        for y in 0..CHECKER_SIZE {
            for x in 0..CHECKER_SIZE {
                let even = ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0;
                let shade = if even { 220 } else { 90 };
                rgba.extend_from_slice(&[shade, shade, shade, 255]);
            }
        }
        Self {
            width: CHECKER_SIZE,
            height: CHECKER_SIZE,
            rgba,
        }
    }

    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shape Texture"),
            size: wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            &self.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_is_fully_opaque_rgba() {
        let tex = TextureImage::checkerboard();
        assert_eq!(tex.rgba.len(), (tex.width * tex.height * 4) as usize);
        assert!(tex.rgba.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn checkerboard_has_two_shades() {
        let tex = TextureImage::checkerboard();
        let mut shades: Vec<u8> = tex.rgba.chunks(4).map(|px| px[0]).collect();
        shades.sort_unstable();
        shades.dedup();
        assert_eq!(shades.len(), 2, "checker should alternate exactly two shades");
    }

    #[test]
    fn missing_file_falls_back() {
        let tex = TextureImage::load_or_checker(Path::new("definitely-not-here.png"));
        assert_eq!(tex.width, CHECKER_SIZE);
    }
}
