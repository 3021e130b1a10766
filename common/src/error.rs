//! Error type shared by the simulation crates

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while setting up the window, GPU or image assets.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    /// No adapter is compatible with the window surface.
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    /// Surface reported no formats for the chosen adapter.
    #[error("surface has no supported texture formats")]
    NoSurfaceFormat,

    #[error("failed to load image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_actionable() {
        assert_eq!(Error::NoAdapter.to_string(), "no suitable GPU adapter found");
        assert_eq!(
            Error::NoSurfaceFormat.to_string(),
            "surface has no supported texture formats"
        );
    }

    #[test]
    fn image_error_names_the_path() {
        let source = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = Error::Image {
            path: "assets/space.png".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("assets/space.png"), "message was: {message}");
        assert!(std::error::Error::source(&err).is_some());
    }
}
