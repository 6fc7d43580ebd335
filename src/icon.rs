// SPDX-License-Identifier: MPL-2.0
//! Window icon loading.
//! Rasterizes the embedded branding SVG at runtime into an RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &[u8] = include_bytes!("../assets/branding/reaction_picker.svg");

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the branding SVG to a square RGBA buffer.
fn rasterize(target: u32) -> Option<tiny_skia::Pixmap> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon could not be parsed");
            return None;
        }
    };

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        target as f32 / size.width(),
        target as f32 / size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Window icon built from the embedded branding SVG.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
