use super::{layout, NetworkLine, ReportError, Typeface};
use ab_glyph::FontVec;
use image::{imageops, RgbaImage};
use std::{collections::HashMap, path::Path};

/// font, header logo and network icons used when drawing reports. every
/// asset is optional; a missing one changes the rendering, never fails it.
#[derive(Debug)]
pub struct ReportAssets {
    pub typeface: Typeface,
    pub logo: Option<RgbaImage>,
    pub icons: HashMap<NetworkLine, RgbaImage>,
}

impl ReportAssets {
    pub fn none() -> ReportAssets {
        Self {
            typeface: Typeface::unavailable(),
            logo: None,
            icons: HashMap::new(),
        }
    }

    /// loads whichever assets are configured. unreadable files are logged and
    /// skipped.
    pub fn load(
        font_file: Option<&Path>,
        header_logo: Option<&Path>,
        icon_directory: Option<&Path>,
    ) -> ReportAssets {
        let typeface = match font_file.map(load_font) {
            Some(Ok(font)) => Typeface::new(font),
            Some(Err(e)) => {
                log::warn!("{e}; report text will not be drawn");
                Typeface::unavailable()
            }
            None => {
                log::warn!("no font file configured; report text will not be drawn");
                Typeface::unavailable()
            }
        };
        let logo = match header_logo.map(load_image) {
            Some(Ok(logo)) => Some(imageops::resize(
                &logo,
                layout::LOGO_SIZE,
                layout::LOGO_SIZE,
                imageops::FilterType::Triangle,
            )),
            Some(Err(e)) => {
                log::warn!("{e}; reports will have no header logo");
                None
            }
            None => None,
        };
        let icons = match icon_directory {
            Some(directory) => load_icons(directory),
            None => {
                log::warn!("no icon directory configured; stations get route badges only");
                HashMap::new()
            }
        };
        Self {
            typeface,
            logo,
            icons,
        }
    }

    pub fn icon(&self, line: &NetworkLine) -> Option<&RgbaImage> {
        self.icons.get(line)
    }

    pub fn has_icon(&self, line: &NetworkLine) -> bool {
        self.icons.contains_key(line)
    }
}

impl Default for ReportAssets {
    fn default() -> Self {
        Self::none()
    }
}

fn load_icons(directory: &Path) -> HashMap<NetworkLine, RgbaImage> {
    let mut icons = HashMap::new();
    for line in NetworkLine::ALL {
        let path = directory.join(line.icon_filename());
        match load_image(&path) {
            Ok(icon) => {
                icons.insert(line, icon);
            }
            Err(e) => log::warn!("{e}; stations on the {line} line fall back to route badges"),
        }
    }
    log::debug!("loaded {} network icons from {}", icons.len(), directory.display());
    icons
}

fn load_font(path: &Path) -> Result<FontVec, ReportError> {
    let bytes = std::fs::read(path).map_err(|e| asset_error(path, e))?;
    FontVec::try_from_vec(bytes).map_err(|e| asset_error(path, e))
}

fn load_image(path: &Path) -> Result<RgbaImage, ReportError> {
    let image = image::open(path).map_err(|e| asset_error(path, e))?;
    Ok(image.to_rgba8())
}

fn asset_error(path: &Path, e: impl std::fmt::Display) -> ReportError {
    ReportError::AssetError(format!("{}: {e}", path.display()))
}
