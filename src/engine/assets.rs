use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use ahash::HashMap;
use renderer::RasterImage;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("File not found ({0})")]
    FileNotFound(PathBuf),

    #[error("Decode error ({0}): {1}")]
    Decode(PathBuf, image::ImageError),

    #[error("Unsupported uri scheme ({0})")]
    UnsupportedScheme(String),

    #[error("Unknown resource ({0})")]
    UnknownResource(ResourceId),

    #[error("Unknown error ({0})")]
    Unknown(PathBuf, String),
}

impl AssetError {
    pub fn from_io_error(error: std::io::Error, path: &Path) -> Self {
        match error {
            err if err.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound(path.to_path_buf())
            }
            err => Self::Unknown(path.to_path_buf(), err.kind().to_string()),
        }
    }
}

/// Identifies an image registered with [Assets::register_resource].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

pub trait AssetFileSystem {
    fn load(&self, path: &Path) -> Result<Vec<u8>, AssetError>;
}

/// Loads images from files, uris and registered resource ids.
#[derive(Clone)]
pub struct Assets {
    file_system: Arc<dyn AssetFileSystem>,
    resources: HashMap<ResourceId, PathBuf>,
}

impl Assets {
    pub fn with_file_system(file_system: Arc<dyn AssetFileSystem>) -> Self {
        Self {
            file_system,
            resources: HashMap::default(),
        }
    }

    /// Assets read from the platform file system relative to `root`.
    pub fn from_dir(root: impl Into<PathBuf>) -> Self {
        Self::with_file_system(Arc::new(PlatformFileSystem::new(root.into())))
    }

    /// Associate a resource id with an image path.
    pub fn register_resource(&mut self, id: ResourceId, path: impl Into<PathBuf>) {
        self.resources.insert(id, path.into());
    }

    pub fn load_raw(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, AssetError> {
        self.file_system.load(path.as_ref())
    }

    pub fn load_config_file(&self, path: impl AsRef<Path>) -> Result<String, AssetError> {
        let path = path.as_ref();
        String::from_utf8(self.load_raw(path)?)
            .map_err(|_| AssetError::Unknown(path.to_path_buf(), "invalid utf-8".to_string()))
    }

    /// Load and decode an image, guessing the format from its contents.
    pub fn load_image(&self, path: impl AsRef<Path>) -> Result<RasterImage, AssetError> {
        let path = path.as_ref();
        let data = self.load_raw(path)?;
        let image = image::load_from_memory(&data)
            .map_err(|err| AssetError::Decode(path.to_path_buf(), err))?;

        debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );

        Ok(RasterImage::from(image))
    }

    pub fn load_resource_image(&self, id: ResourceId) -> Result<RasterImage, AssetError> {
        let path = self
            .resources
            .get(&id)
            .ok_or(AssetError::UnknownResource(id))?;
        self.load_image(path)
    }

    /// Load an image from a `file://` uri or a plain path.
    pub fn load_uri_image(&self, uri: &str) -> Result<RasterImage, AssetError> {
        let path = match uri.split_once("://") {
            Some(("file", path)) => path,
            Some((scheme, _)) => return Err(AssetError::UnsupportedScheme(scheme.to_string())),
            None => uri,
        };
        self.load_image(path)
    }
}

pub struct PlatformFileSystem {
    root: PathBuf,
}

impl PlatformFileSystem {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl AssetFileSystem for PlatformFileSystem {
    fn load(&self, path: &Path) -> Result<Vec<u8>, AssetError> {
        std::fs::read(self.root.join(path)).map_err(|err| AssetError::from_io_error(err, path))
    }
}
