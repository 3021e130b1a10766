//! Image-backed GPU textures for sprite rendering

use std::path::Path;

use crate::error::{Error, Result};

/// How texture coordinates outside [0, 1] are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    Clamp,
}

impl From<Wrap> for wgpu::AddressMode {
    fn from(wrap: Wrap) -> Self {
        match wrap {
            Wrap::Repeat => wgpu::AddressMode::Repeat,
            Wrap::Clamp => wgpu::AddressMode::ClampToEdge,
        }
    }
}

/// A sampled 2D texture with linear filtering
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Load an image file and upload it as an sRGB RGBA texture.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
        wrap: Wrap,
    ) -> Result<Self> {
        let path = path.as_ref();
        let image = decode_rgba(path)?;
        let label = path.display().to_string();
        Ok(Self::from_rgba(device, queue, &image, &label, wrap))
    }

    /// Upload already decoded RGBA pixels.
    pub fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &image::RgbaImage,
        label: &str,
        wrap: Wrap,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_raw(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let address_mode = wgpu::AddressMode::from(wrap);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: address_mode,
            address_mode_v: address_mode,
            address_mode_w: address_mode,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        log::debug!("uploaded texture {} ({}x{})", label, width, height);

        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }
}

/// Decode an image file into 8-bit RGBA, whatever its source channel layout.
pub fn decode_rgba(path: &Path) -> Result<image::RgbaImage> {
    let image = image::open(path).map_err(|source| Error::Image {
        path: path.display().to_string(),
        source,
    })?;
    Ok(image.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("common-texture-{}-{}", std::process::id(), name))
    }

    #[test]
    fn decode_expands_rgb_to_rgba() {
        let path = temp_path("rgb.png");
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]));
        rgb.save(&path).expect("write test image");

        let rgba = decode_rgba(&path).expect("decode test image");
        assert_eq!(rgba.dimensions(), (3, 2));
        assert_eq!(rgba.get_pixel(2, 1).0, [10, 20, 30, 255]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_reports_image_error() {
        let path = temp_path("does-not-exist.png");
        match decode_rgba(&path) {
            Err(Error::Image { path: reported, .. }) => {
                assert!(reported.ends_with("does-not-exist.png"))
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("decoding a missing file should fail"),
        }
    }

    #[test]
    fn wrap_modes_map_to_address_modes() {
        assert_eq!(wgpu::AddressMode::from(Wrap::Repeat), wgpu::AddressMode::Repeat);
        assert_eq!(wgpu::AddressMode::from(Wrap::Clamp), wgpu::AddressMode::ClampToEdge);
    }
}
