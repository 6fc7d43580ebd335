// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Picker geometry
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Tween durations and magnitudes

## Examples

```
use reaction_picker::ui::design_tokens::{motion, palette, opacity};
use iced::Color;

let panel_shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};

// Icons enter one after another
let third_icon_delay = motion::ENTRANCE_STAGGER * 2;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.3, 0.6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW: f32 = 0.12;
    pub const SHADOW_DARK: f32 = 0.4;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    use super::spacing;

    /// Edge length of the trigger and of each reaction icon.
    pub const ICON: f32 = 40.0;

    /// Horizontal gap between panel icons.
    pub const ICON_GAP: f32 = spacing::XS;

    /// Inner padding of the panel.
    pub const PANEL_PADDING: f32 = spacing::SM;

    /// Natural panel width: six icons, five gaps, padding on both sides.
    pub const PANEL_WIDTH: f32 = 6.0 * ICON + 5.0 * ICON_GAP + 2.0 * PANEL_PADDING;

    /// Panel width while an icon is magnified.
    pub const PANEL_WIDTH_EXPANDED: f32 = 320.0;

    pub const PANEL_HEIGHT: f32 = ICON + 2.0 * PANEL_PADDING;

    /// Horizontal distance from the trigger's left edge to the panel centre.
    pub const PANEL_ANCHOR_X: f32 = 140.0;

    /// Space between the bottom of the panel and the top of the trigger.
    pub const PANEL_OFFSET_Y: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Caption under the trigger
    pub const BODY: f32 = 14.0;

    /// Small body - Label above a magnified icon
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    /// Offset of the panel drop shadow.
    pub const PANEL_OFFSET_Y: f32 = 6.0;

    /// Extra size of each blur ring.
    pub const PANEL_SPREAD: f32 = 3.0;

    /// Number of rings used to fake the blur.
    pub const PANEL_RINGS: u8 = 4;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Panel fade-in when the pointer enters the widget.
    pub const PANEL_SHOW: Duration = Duration::from_millis(100);

    /// Panel fade-out when the pointer leaves or a reaction is chosen.
    pub const PANEL_HIDE: Duration = Duration::from_millis(300);

    /// Panel widening while an icon is magnified.
    pub const PANEL_WIDEN: Duration = Duration::from_millis(300);

    /// Per-icon entrance tween.
    pub const ENTRANCE: Duration = Duration::from_millis(100);

    /// Delay between consecutive icon entrances.
    pub const ENTRANCE_STAGGER: Duration = Duration::from_millis(50);

    /// Scale icons start their entrance from.
    pub const ENTRANCE_FROM_SCALE: f32 = 0.0;

    /// Vertical offset icons start their entrance from.
    pub const ENTRANCE_FROM_Y: f32 = 30.0;

    /// Magnification and settle tweens on icons.
    pub const MAGNIFY: Duration = Duration::from_millis(200);

    pub const MAGNIFY_SCALE: f32 = 1.8;

    /// Vertical lift of the magnified icon (negative is up).
    pub const MAGNIFY_LIFT: f32 = -15.0;

    /// Reference distance for neighbour displacement.
    pub const DISPLACEMENT_DISTANCE: f32 = 15.0;

    /// Share of [`DISPLACEMENT_DISTANCE`] each neighbour moves.
    pub const DISPLACEMENT_FACTOR: f32 = 0.4;

    /// Trigger pulse after a new reaction is chosen.
    pub const EMPHASIS: Duration = Duration::from_millis(200);

    pub const EMPHASIS_SCALE: f32 = 1.2;

    /// Extra pulse cycles (one repeat plays the way back).
    pub const EMPHASIS_REPEAT: u32 = 1;

    /// Draw layer of icons at rest.
    pub const LAYER_BASE: u8 = 1;

    /// Draw layer of the magnified icon.
    pub const LAYER_RAISED: u8 = 10;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::LG > spacing::SM);

    // Sizing validation
    assert!(sizing::PANEL_WIDTH_EXPANDED > sizing::PANEL_WIDTH);
    assert!(opacity::SHADOW < opacity::SHADOW_DARK);

    // Motion validation
    assert!(motion::MAGNIFY_SCALE > 1.0);
    assert!(motion::EMPHASIS_SCALE > 1.0);
    assert!(motion::LAYER_RAISED > motion::LAYER_BASE);
    assert!(motion::EMPHASIS_REPEAT % 2 == 1);

    // Typography validation
    assert!(typography::BODY > typography::BODY_SM);
};
