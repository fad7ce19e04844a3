//! Asset lookup and loading: sprite image, HUD font, music file
//!
//! Assets live in a single directory. It comes from the config if set,
//! otherwise `assets/` next to the executable, otherwise `./assets/`.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading an asset from disk
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    Missing(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decoded RGBA8 sprite ready for upload
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl SpriteImage {
    /// Decode PNG bytes into RGBA8
    pub fn from_png_bytes(bytes: &[u8], path: &Path) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        Ok(Self {
            width: img.width(),
            height: img.height(),
            data: img.into_raw(),
        })
    }

    /// Stand-in sprite drawn when the image is unavailable: a grey body with
    /// a darker one-pixel outline so bunnies stay visible on white
    pub fn placeholder(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                let edge = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                let shade = if edge { 64 } else { 200 };
                data.extend_from_slice(&[shade, shade, shade, 255]);
            }
        }

        Self {
            width,
            height,
            data,
        }
    }
}

/// Resolved asset directory
#[derive(Debug, Clone)]
pub struct Assets {
    root: PathBuf,
}

impl Assets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the asset directory: explicit setting, then `<exe dir>/assets`,
    /// then `./assets`
    pub fn resolve(configured: Option<&Path>) -> Self {
        if let Some(dir) = configured {
            return Self::new(dir);
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")));
        Self::resolve_with(beside_exe.as_deref())
    }

    fn resolve_with(beside_exe: Option<&Path>) -> Self {
        match beside_exe {
            Some(dir) if dir.is_dir() => Self::new(dir),
            _ => Self::new("assets"),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Read a file from the asset directory
    pub fn read(&self, file: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.path(file);
        if !path.exists() {
            return Err(AssetError::Missing(path));
        }
        std::fs::read(&path).map_err(|source| AssetError::Io { path, source })
    }

    /// Load and decode a sprite image
    pub fn load_sprite(&self, file: &str) -> Result<SpriteImage, AssetError> {
        let bytes = self.read(file)?;
        SpriteImage::from_png_bytes(&bytes, &self.path(file))
    }

    /// Load raw font bytes (TTF/OTF)
    pub fn load_font(&self, file: &str) -> Result<Vec<u8>, AssetError> {
        self.read(file)
    }
}
