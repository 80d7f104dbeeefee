use crate::{fs, models, Client};
use eyre::{eyre, Result, WrapErr};
use image::{
    io::Reader as ImageReader, DynamicImage, GenericImageView, ImageFormat,
};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};
use url::Url;

/// A single timeline media entry.
#[derive(Debug, Clone)]
pub struct Media {
    /// URL of the renderable image asset.
    display_url: Url,
    /// Post shortcode, when the document provides one.
    shortcode: Option<String>,
}

impl Media {
    /// Returns the image asset URL.
    pub fn display_url(&self) -> &Url {
        &self.display_url
    }

    /// Downloads and decodes the image asset.
    pub fn fetch(&self, client: &Client) -> Result<Photo> {
        let mut buf = Vec::new();
        client
            .get_image(&self.display_url, &mut buf)
            .with_context(|| {
                format!("download image from {}", self.display_url)
            })?;

        let reader = ImageReader::new(Cursor::new(&buf))
            .with_guessed_format()
            .with_context(|| {
                format!("determine image format from {}", self.display_url)
            })?;
        let format = reader.format().ok_or_else(|| {
            eyre!("unknown image format from {}", self.display_url)
        })?;
        let image = reader
            .decode()
            .with_context(|| format!("decode image from {}", self.display_url))?;

        Ok(Photo {
            bytes: buf,
            format,
            image,
            name: self.file_stem(),
        })
    }

    /// Returns a name for the saved file: the post shortcode if the document
    /// provided one, the last URL path segment otherwise.
    fn file_stem(&self) -> String {
        if let Some(code) = &self.shortcode {
            return code.clone();
        }

        self.display_url
            .path_segments()
            .and_then(|segments| segments.last())
            .and_then(|name| Path::new(name).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "image".to_owned())
    }
}

impl From<models::profile::Edge> for Media {
    fn from(value: models::profile::Edge) -> Self {
        Self {
            display_url: value.node.display_url,
            shortcode: value.node.shortcode,
        }
    }
}

// -----------------------------------------------------------------------------

/// A downloaded, decoded image asset.
#[derive(Debug)]
pub struct Photo {
    /// Raw bytes, as served.
    bytes: Vec<u8>,
    /// Detected format.
    format: ImageFormat,
    /// Decoded image.
    image: DynamicImage,
    /// File stem for saving.
    name: String,
}

impl Photo {
    /// Returns the image width, in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the image height, in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the detected image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the photo filename, extension matching the detected format.
    pub fn filename(&self) -> PathBuf {
        let mut filename = fs::sanitize_name(&self.name);
        filename.set_extension(
            self.format.extensions_str().first().copied().unwrap_or("img"),
        );
        filename
    }

    /// Saves the photo under `directory`, keeping the bytes as served.
    pub fn save_at(&self, directory: &Path) -> Result<PathBuf> {
        let path = [directory, self.filename().as_path()]
            .into_iter()
            .collect::<PathBuf>();

        fs::atomic_write(&path, &self.bytes)
            .with_context(|| format!("save {}", path.display()))?;

        Ok(path)
    }
}
