//! The named 256-colour terminal palette as normalised RGBA values.
//!
//! Every palette entry is a `pub const`; [`ALL_COLOURS`] lists them with
//! their display names, and [`Colour::by_name`] looks one up.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// An RGBA colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Colour {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From 8-bit channels, fully opaque.
    pub fn from_rgb256(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba256(red, green, blue, 255)
    }

    pub fn from_rgba256(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            f32::from(alpha) / 255.0,
        )
    }

    /// Same colour with another alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Looks up a palette entry by its display name, e.g. `"DeepSkyBlue4"`.
    ///
    /// ```
    /// # use sxs_toolbox::colour::{self, Colour};
    /// assert_eq!(Colour::by_name("Maroon"), Some(colour::MAROON));
    /// assert_eq!(Colour::by_name("NoSuchColour"), None);
    /// ```
    pub fn by_name(name: &str) -> Option<Colour> {
        COLOURS_BY_NAME.get(name).copied()
    }
}

/// Plain RGBA message layout used by visualisation front ends.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<Colour> for ColorRgba {
    fn from(c: Colour) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A colour attached to a named scene object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectColor {
    pub id: String,
    pub color: ColorRgba,
}

impl ObjectColor {
    pub fn with_id(id: impl Into<String>, colour: Colour) -> Self {
        Self {
            id: id.into(),
            color: colour.into(),
        }
    }
}

impl From<Colour> for ObjectColor {
    fn from(c: Colour) -> Self {
        Self {
            id: String::new(),
            color: c.into(),
        }
    }
}

lazy_static! {
    static ref COLOURS_BY_NAME: HashMap<&'static str, Colour> =
        ALL_COLOURS.iter().copied().collect();
}

pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0, 1.0);
pub const MAROON: Colour = Colour::new(0.5019608, 0.0, 0.0, 1.0);
pub const GREEN: Colour = Colour::new(0.0, 0.5019608, 0.0, 1.0);
pub const OLIVE: Colour = Colour::new(0.5019608, 0.5019608, 0.0, 1.0);
pub const NAVY: Colour = Colour::new(0.0, 0.0, 0.5019608, 1.0);
pub const PURPLE: Colour = Colour::new(0.5019608, 0.0, 0.5019608, 1.0);
pub const TEAL: Colour = Colour::new(0.0, 0.5019608, 0.5019608, 1.0);
pub const SILVER: Colour = Colour::new(0.7529412, 0.7529412, 0.7529412, 1.0);
pub const GREY: Colour = Colour::new(0.5019608, 0.5019608, 0.5019608, 1.0);
pub const RED: Colour = Colour::new(1.0, 0.0, 0.0, 1.0);
pub const LIME: Colour = Colour::new(0.0, 1.0, 0.0, 1.0);
pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0, 1.0);
pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0, 1.0);
pub const FUCHSIA: Colour = Colour::new(1.0, 0.0, 1.0, 1.0);
pub const AQUA: Colour = Colour::new(0.0, 1.0, 1.0, 1.0);
pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0, 1.0);
pub const GREY_0: Colour = Colour::new(0.0, 0.0, 0.0, 1.0);
pub const NAVY_BLUE: Colour = Colour::new(0.0, 0.0, 0.37254903, 1.0);
pub const DARK_BLUE: Colour = Colour::new(0.0, 0.0, 0.5294118, 1.0);
pub const BLUE_3: Colour = Colour::new(0.0, 0.0, 0.6862745, 1.0);
pub const BLUE_4: Colour = Colour::new(0.0, 0.0, 0.84313726, 1.0);
pub const BLUE_1: Colour = Colour::new(0.0, 0.0, 1.0, 1.0);
pub const DARK_GREEN: Colour = Colour::new(0.0, 0.37254903, 0.0, 1.0);
pub const DEEP_SKY_BLUE_4: Colour = Colour::new(0.0, 0.37254903, 0.37254903, 1.0);
pub const DEEP_SKY_BLUE_5: Colour = Colour::new(0.0, 0.37254903, 0.5294118, 1.0);
pub const DEEP_SKY_BLUE_6: Colour = Colour::new(0.0, 0.37254903, 0.6862745, 1.0);
pub const DODGER_BLUE_3: Colour = Colour::new(0.0, 0.37254903, 0.84313726, 1.0);
pub const DODGER_BLUE_2: Colour = Colour::new(0.0, 0.37254903, 1.0, 1.0);
pub const GREEN_4: Colour = Colour::new(0.0, 0.5294118, 0.0, 1.0);
pub const SPRING_GREEN_4: Colour = Colour::new(0.0, 0.5294118, 0.37254903, 1.0);
pub const TURQUOISE_4: Colour = Colour::new(0.0, 0.5294118, 0.5294118, 1.0);
pub const DEEP_SKY_BLUE_3: Colour = Colour::new(0.0, 0.5294118, 0.6862745, 1.0);
pub const DEEP_SKY_BLUE_7: Colour = Colour::new(0.0, 0.5294118, 0.84313726, 1.0);
pub const DODGER_BLUE_1: Colour = Colour::new(0.0, 0.5294118, 1.0, 1.0);
pub const SPRING_GREEN_3: Colour = Colour::new(0.0, 0.6862745, 0.37254903, 1.0);
pub const DARK_CYAN: Colour = Colour::new(0.0, 0.6862745, 0.5294118, 1.0);
pub const LIGHT_SEA_GREEN: Colour = Colour::new(0.0, 0.6862745, 0.6862745, 1.0);
pub const DEEP_SKY_BLUE_2: Colour = Colour::new(0.0, 0.6862745, 0.84313726, 1.0);
pub const DEEP_SKY_BLUE_1: Colour = Colour::new(0.0, 0.6862745, 1.0, 1.0);
pub const GREEN_3: Colour = Colour::new(0.0, 0.84313726, 0.0, 1.0);
pub const SPRING_GREEN_2: Colour = Colour::new(0.0, 0.84313726, 0.5294118, 1.0);
pub const CYAN_3: Colour = Colour::new(0.0, 0.84313726, 0.6862745, 1.0);
pub const DARK_TURQUOISE: Colour = Colour::new(0.0, 0.84313726, 0.84313726, 1.0);
pub const TURQUOISE_2: Colour = Colour::new(0.0, 0.84313726, 1.0, 1.0);
pub const GREEN_1: Colour = Colour::new(0.0, 1.0, 0.0, 1.0);
pub const SPRING_GREEN_1: Colour = Colour::new(0.0, 1.0, 0.5294118, 1.0);
pub const MEDIUM_SPRING_GREEN: Colour = Colour::new(0.0, 1.0, 0.6862745, 1.0);
pub const CYAN_2: Colour = Colour::new(0.0, 1.0, 0.84313726, 1.0);
pub const CYAN_1: Colour = Colour::new(0.0, 1.0, 1.0, 1.0);
pub const DARK_RED: Colour = Colour::new(0.37254903, 0.0, 0.0, 1.0);
pub const DEEP_PINK_4: Colour = Colour::new(0.37254903, 0.0, 0.37254903, 1.0);
pub const PURPLE_4: Colour = Colour::new(0.37254903, 0.0, 0.6862745, 1.0);
pub const PURPLE_3: Colour = Colour::new(0.37254903, 0.0, 0.84313726, 1.0);
pub const BLUE_VIOLET: Colour = Colour::new(0.37254903, 0.0, 1.0, 1.0);
pub const ORANGE_4: Colour = Colour::new(0.37254903, 0.37254903, 0.0, 1.0);
pub const GREY_37: Colour = Colour::new(0.37254903, 0.37254903, 0.37254903, 1.0);
pub const MEDIUM_PURPLE_4: Colour = Colour::new(0.37254903, 0.37254903, 0.5294118, 1.0);
pub const SLATE_BLUE_3: Colour = Colour::new(0.37254903, 0.37254903, 0.6862745, 1.0);
pub const SLATE_BLUE_4: Colour = Colour::new(0.37254903, 0.37254903, 0.84313726, 1.0);
pub const ROYAL_BLUE_1: Colour = Colour::new(0.37254903, 0.37254903, 1.0, 1.0);
pub const CHARTREUSE_4: Colour = Colour::new(0.37254903, 0.5294118, 0.0, 1.0);
pub const PALE_TURQUOISE_4: Colour = Colour::new(0.37254903, 0.5294118, 0.5294118, 1.0);
pub const STEEL_BLUE: Colour = Colour::new(0.37254903, 0.5294118, 0.6862745, 1.0);
pub const STEEL_BLUE_3: Colour = Colour::new(0.37254903, 0.5294118, 0.84313726, 1.0);
pub const CORNFLOWER_BLUE: Colour = Colour::new(0.37254903, 0.5294118, 1.0, 1.0);
pub const CHARTREUSE_3: Colour = Colour::new(0.37254903, 0.6862745, 0.0, 1.0);
pub const DARK_SEA_GREEN_4: Colour = Colour::new(0.37254903, 0.6862745, 0.37254903, 1.0);
pub const CADET_BLUE: Colour = Colour::new(0.37254903, 0.6862745, 0.5294118, 1.0);
pub const SKY_BLUE_3: Colour = Colour::new(0.37254903, 0.6862745, 0.84313726, 1.0);
pub const STEEL_BLUE_1: Colour = Colour::new(0.37254903, 0.6862745, 1.0, 1.0);
pub const PALE_GREEN_3: Colour = Colour::new(0.37254903, 0.84313726, 0.37254903, 1.0);
pub const SEA_GREEN_3: Colour = Colour::new(0.37254903, 0.84313726, 0.5294118, 1.0);
pub const AQUAMARINE_3: Colour = Colour::new(0.37254903, 0.84313726, 0.6862745, 1.0);
pub const MEDIUM_TURQUOISE: Colour = Colour::new(0.37254903, 0.84313726, 0.84313726, 1.0);
pub const CHARTREUSE_2: Colour = Colour::new(0.37254903, 1.0, 0.0, 1.0);
pub const SEA_GREEN_2: Colour = Colour::new(0.37254903, 1.0, 0.37254903, 1.0);
pub const SEA_GREEN_1: Colour = Colour::new(0.37254903, 1.0, 0.6862745, 1.0);
pub const AQUAMARINE_1: Colour = Colour::new(0.37254903, 1.0, 0.84313726, 1.0);
pub const DARK_SLATE_GRAY_2: Colour = Colour::new(0.37254903, 1.0, 1.0, 1.0);
pub const DARK_MAGENTA: Colour = Colour::new(0.5294118, 0.0, 0.5294118, 1.0);
pub const DARK_VIOLET: Colour = Colour::new(0.5294118, 0.0, 0.84313726, 1.0);
pub const LIGHT_PINK_4: Colour = Colour::new(0.5294118, 0.37254903, 0.37254903, 1.0);
pub const PLUM_4: Colour = Colour::new(0.5294118, 0.37254903, 0.5294118, 1.0);
pub const MEDIUM_PURPLE_3: Colour = Colour::new(0.5294118, 0.37254903, 0.6862745, 1.0);
pub const SLATE_BLUE_1: Colour = Colour::new(0.5294118, 0.37254903, 1.0, 1.0);
pub const WHEAT_4: Colour = Colour::new(0.5294118, 0.5294118, 0.37254903, 1.0);
pub const GREY_53: Colour = Colour::new(0.5294118, 0.5294118, 0.5294118, 1.0);
pub const LIGHT_SLATE_GREY: Colour = Colour::new(0.5294118, 0.5294118, 0.6862745, 1.0);
pub const MEDIUM_PURPLE: Colour = Colour::new(0.5294118, 0.5294118, 0.84313726, 1.0);
pub const LIGHT_SLATE_BLUE: Colour = Colour::new(0.5294118, 0.5294118, 1.0, 1.0);
pub const YELLOW_4: Colour = Colour::new(0.5294118, 0.6862745, 0.0, 1.0);
pub const LIGHT_SKY_BLUE_3: Colour = Colour::new(0.5294118, 0.6862745, 0.84313726, 1.0);
pub const SKY_BLUE_2: Colour = Colour::new(0.5294118, 0.6862745, 1.0, 1.0);
pub const DARK_OLIVE_GREEN_3: Colour = Colour::new(0.5294118, 0.84313726, 0.37254903, 1.0);
pub const DARK_SLATE_GRAY_3: Colour = Colour::new(0.5294118, 0.84313726, 0.84313726, 1.0);
pub const SKY_BLUE_1: Colour = Colour::new(0.5294118, 0.84313726, 1.0, 1.0);
pub const CHARTREUSE_1: Colour = Colour::new(0.5294118, 1.0, 0.0, 1.0);
pub const PALE_GREEN_1: Colour = Colour::new(0.5294118, 1.0, 0.6862745, 1.0);
pub const DARK_SLATE_GRAY_1: Colour = Colour::new(0.5294118, 1.0, 1.0, 1.0);
pub const MEDIUM_VIOLET_RED: Colour = Colour::new(0.6862745, 0.0, 0.5294118, 1.0);
pub const MEDIUM_ORCHID_3: Colour = Colour::new(0.6862745, 0.37254903, 0.6862745, 1.0);
pub const MEDIUM_ORCHID: Colour = Colour::new(0.6862745, 0.37254903, 0.84313726, 1.0);
pub const MEDIUM_PURPLE_2: Colour = Colour::new(0.6862745, 0.37254903, 1.0, 1.0);
pub const DARK_GOLDENROD: Colour = Colour::new(0.6862745, 0.5294118, 0.0, 1.0);
pub const ROSY_BROWN: Colour = Colour::new(0.6862745, 0.5294118, 0.5294118, 1.0);
pub const GREY_63: Colour = Colour::new(0.6862745, 0.5294118, 0.6862745, 1.0);
pub const DARK_KHAKI: Colour = Colour::new(0.6862745, 0.6862745, 0.37254903, 1.0);
pub const NAVAJO_WHITE_3: Colour = Colour::new(0.6862745, 0.6862745, 0.5294118, 1.0);
pub const GREY_69: Colour = Colour::new(0.6862745, 0.6862745, 0.6862745, 1.0);
pub const LIGHT_STEEL_BLUE_3: Colour = Colour::new(0.6862745, 0.6862745, 0.84313726, 1.0);
pub const LIGHT_STEEL_BLUE: Colour = Colour::new(0.6862745, 0.6862745, 1.0, 1.0);
pub const DARK_SEA_GREEN_3: Colour = Colour::new(0.6862745, 0.84313726, 0.5294118, 1.0);
pub const DARK_SEA_GREEN_2: Colour = Colour::new(0.6862745, 0.84313726, 0.6862745, 1.0);
pub const LIGHT_CYAN_3: Colour = Colour::new(0.6862745, 0.84313726, 0.84313726, 1.0);
pub const LIGHT_SKY_BLUE_1: Colour = Colour::new(0.6862745, 0.84313726, 1.0, 1.0);
pub const GREEN_YELLOW: Colour = Colour::new(0.6862745, 1.0, 0.0, 1.0);
pub const DARK_OLIVE_GREEN_2: Colour = Colour::new(0.6862745, 1.0, 0.37254903, 1.0);
pub const DARK_SEA_GREEN_1: Colour = Colour::new(0.6862745, 1.0, 0.84313726, 1.0);
pub const PALE_TURQUOISE_1: Colour = Colour::new(0.6862745, 1.0, 1.0, 1.0);
pub const RED_3: Colour = Colour::new(0.84313726, 0.0, 0.0, 1.0);
pub const DEEP_PINK_3: Colour = Colour::new(0.84313726, 0.0, 0.37254903, 1.0);
pub const MAGENTA_3: Colour = Colour::new(0.84313726, 0.0, 0.84313726, 1.0);
pub const MAGENTA_2: Colour = Colour::new(0.84313726, 0.0, 1.0, 1.0);
pub const DARK_ORANGE_3: Colour = Colour::new(0.84313726, 0.37254903, 0.0, 1.0);
pub const INDIAN_RED: Colour = Colour::new(0.84313726, 0.37254903, 0.37254903, 1.0);
pub const HOT_PINK_3: Colour = Colour::new(0.84313726, 0.37254903, 0.5294118, 1.0);
pub const HOT_PINK_2: Colour = Colour::new(0.84313726, 0.37254903, 0.6862745, 1.0);
pub const ORCHID: Colour = Colour::new(0.84313726, 0.37254903, 0.84313726, 1.0);
pub const MEDIUM_ORCHID_1: Colour = Colour::new(0.84313726, 0.37254903, 1.0, 1.0);
pub const ORANGE_3: Colour = Colour::new(0.84313726, 0.5294118, 0.0, 1.0);
pub const LIGHT_SALMON_3: Colour = Colour::new(0.84313726, 0.5294118, 0.37254903, 1.0);
pub const LIGHT_PINK_3: Colour = Colour::new(0.84313726, 0.5294118, 0.5294118, 1.0);
pub const PINK_3: Colour = Colour::new(0.84313726, 0.5294118, 0.6862745, 1.0);
pub const PLUM_3: Colour = Colour::new(0.84313726, 0.5294118, 0.84313726, 1.0);
pub const VIOLET: Colour = Colour::new(0.84313726, 0.5294118, 1.0, 1.0);
pub const GOLD_3: Colour = Colour::new(0.84313726, 0.6862745, 0.0, 1.0);
pub const LIGHT_GOLDENROD_3: Colour = Colour::new(0.84313726, 0.6862745, 0.37254903, 1.0);
pub const TAN: Colour = Colour::new(0.84313726, 0.6862745, 0.5294118, 1.0);
pub const MISTY_ROSE_3: Colour = Colour::new(0.84313726, 0.6862745, 0.6862745, 1.0);
pub const THISTLE_3: Colour = Colour::new(0.84313726, 0.6862745, 0.84313726, 1.0);
pub const PLUM_2: Colour = Colour::new(0.84313726, 0.6862745, 1.0, 1.0);
pub const YELLOW_3: Colour = Colour::new(0.84313726, 0.84313726, 0.0, 1.0);
pub const KHAKI_3: Colour = Colour::new(0.84313726, 0.84313726, 0.37254903, 1.0);
pub const LIGHT_GOLDENROD_2: Colour = Colour::new(0.84313726, 0.84313726, 0.5294118, 1.0);
pub const LIGHT_YELLOW_3: Colour = Colour::new(0.84313726, 0.84313726, 0.6862745, 1.0);
pub const GREY_84: Colour = Colour::new(0.84313726, 0.84313726, 0.84313726, 1.0);
pub const LIGHT_STEEL_BLUE_1: Colour = Colour::new(0.84313726, 0.84313726, 1.0, 1.0);
pub const YELLOW_2: Colour = Colour::new(0.84313726, 1.0, 0.0, 1.0);
pub const DARK_OLIVE_GREEN_1: Colour = Colour::new(0.84313726, 1.0, 0.37254903, 1.0);
pub const HONEYDEW_2: Colour = Colour::new(0.84313726, 1.0, 0.84313726, 1.0);
pub const LIGHT_CYAN_1: Colour = Colour::new(0.84313726, 1.0, 1.0, 1.0);
pub const RED_1: Colour = Colour::new(1.0, 0.0, 0.0, 1.0);
pub const DEEP_PINK_2: Colour = Colour::new(1.0, 0.0, 0.37254903, 1.0);
pub const DEEP_PINK_1: Colour = Colour::new(1.0, 0.0, 0.5294118, 1.0);
pub const MAGENTA_1: Colour = Colour::new(1.0, 0.0, 1.0, 1.0);
pub const ORANGE_RED_1: Colour = Colour::new(1.0, 0.37254903, 0.0, 1.0);
pub const INDIAN_RED_1: Colour = Colour::new(1.0, 0.37254903, 0.37254903, 1.0);
pub const HOT_PINK: Colour = Colour::new(1.0, 0.37254903, 0.6862745, 1.0);
pub const DARK_ORANGE: Colour = Colour::new(1.0, 0.5294118, 0.0, 1.0);
pub const SALMON_1: Colour = Colour::new(1.0, 0.5294118, 0.37254903, 1.0);
pub const LIGHT_CORAL: Colour = Colour::new(1.0, 0.5294118, 0.5294118, 1.0);
pub const PALE_VIOLET_RED_1: Colour = Colour::new(1.0, 0.5294118, 0.6862745, 1.0);
pub const ORCHID_2: Colour = Colour::new(1.0, 0.5294118, 0.84313726, 1.0);
pub const ORCHID_1: Colour = Colour::new(1.0, 0.5294118, 1.0, 1.0);
pub const ORANGE_1: Colour = Colour::new(1.0, 0.6862745, 0.0, 1.0);
pub const SANDY_BROWN: Colour = Colour::new(1.0, 0.6862745, 0.37254903, 1.0);
pub const LIGHT_SALMON_1: Colour = Colour::new(1.0, 0.6862745, 0.5294118, 1.0);
pub const LIGHT_PINK_1: Colour = Colour::new(1.0, 0.6862745, 0.6862745, 1.0);
pub const PINK_1: Colour = Colour::new(1.0, 0.6862745, 0.84313726, 1.0);
pub const PLUM_1: Colour = Colour::new(1.0, 0.6862745, 1.0, 1.0);
pub const GOLD_1: Colour = Colour::new(1.0, 0.84313726, 0.0, 1.0);
pub const NAVAJO_WHITE_1: Colour = Colour::new(1.0, 0.84313726, 0.6862745, 1.0);
pub const MISTY_ROSE_1: Colour = Colour::new(1.0, 0.84313726, 0.84313726, 1.0);
pub const THISTLE_1: Colour = Colour::new(1.0, 0.84313726, 1.0, 1.0);
pub const YELLOW_1: Colour = Colour::new(1.0, 1.0, 0.0, 1.0);
pub const LIGHT_GOLDENROD_1: Colour = Colour::new(1.0, 1.0, 0.37254903, 1.0);
pub const KHAKI_1: Colour = Colour::new(1.0, 1.0, 0.5294118, 1.0);
pub const WHEAT_1: Colour = Colour::new(1.0, 1.0, 0.6862745, 1.0);
pub const CORNSILK_1: Colour = Colour::new(1.0, 1.0, 0.84313726, 1.0);
pub const GREY_100: Colour = Colour::new(1.0, 1.0, 1.0, 1.0);
pub const GREY_3: Colour = Colour::new(0.03137255, 0.03137255, 0.03137255, 1.0);
pub const GREY_7: Colour = Colour::new(0.07058824, 0.07058824, 0.07058824, 1.0);
pub const GREY_11: Colour = Colour::new(0.10980392, 0.10980392, 0.10980392, 1.0);
pub const GREY_15: Colour = Colour::new(0.14901961, 0.14901961, 0.14901961, 1.0);
pub const GREY_19: Colour = Colour::new(0.1882353, 0.1882353, 0.1882353, 1.0);
pub const GREY_23: Colour = Colour::new(0.22745098, 0.22745098, 0.22745098, 1.0);
pub const GREY_27: Colour = Colour::new(0.26666668, 0.26666668, 0.26666668, 1.0);
pub const GREY_30: Colour = Colour::new(0.30588236, 0.30588236, 0.30588236, 1.0);
pub const GREY_35: Colour = Colour::new(0.34509805, 0.34509805, 0.34509805, 1.0);
pub const GREY_39: Colour = Colour::new(0.38431373, 0.38431373, 0.38431373, 1.0);
pub const GREY_42: Colour = Colour::new(0.42352942, 0.42352942, 0.42352942, 1.0);
pub const GREY_46: Colour = Colour::new(0.4627451, 0.4627451, 0.4627451, 1.0);
pub const GREY_50: Colour = Colour::new(0.5019608, 0.5019608, 0.5019608, 1.0);
pub const GREY_54: Colour = Colour::new(0.5411765, 0.5411765, 0.5411765, 1.0);
pub const GREY_58: Colour = Colour::new(0.5803922, 0.5803922, 0.5803922, 1.0);
pub const GREY_62: Colour = Colour::new(0.61960787, 0.61960787, 0.61960787, 1.0);
pub const GREY_66: Colour = Colour::new(0.65882355, 0.65882355, 0.65882355, 1.0);
pub const GREY_70: Colour = Colour::new(0.69803923, 0.69803923, 0.69803923, 1.0);
pub const GREY_74: Colour = Colour::new(0.7372549, 0.7372549, 0.7372549, 1.0);
pub const GREY_78: Colour = Colour::new(0.7764706, 0.7764706, 0.7764706, 1.0);
pub const GREY_82: Colour = Colour::new(0.8156863, 0.8156863, 0.8156863, 1.0);
pub const GREY_85: Colour = Colour::new(0.85490197, 0.85490197, 0.85490197, 1.0);
pub const GREY_89: Colour = Colour::new(0.89411765, 0.89411765, 0.89411765, 1.0);
pub const GREY_93: Colour = Colour::new(0.93333334, 0.93333334, 0.93333334, 1.0);

/// Every palette entry with its display name, in palette order.
pub const ALL_COLOURS: &[(&str, Colour)] = &[
    ("Black", BLACK),
    ("Maroon", MAROON),
    ("Green", GREEN),
    ("Olive", OLIVE),
    ("Navy", NAVY),
    ("Purple", PURPLE),
    ("Teal", TEAL),
    ("Silver", SILVER),
    ("Grey", GREY),
    ("Red", RED),
    ("Lime", LIME),
    ("Yellow", YELLOW),
    ("Blue", BLUE),
    ("Fuchsia", FUCHSIA),
    ("Aqua", AQUA),
    ("White", WHITE),
    ("Grey0", GREY_0),
    ("NavyBlue", NAVY_BLUE),
    ("DarkBlue", DARK_BLUE),
    ("Blue3", BLUE_3),
    ("Blue4", BLUE_4),
    ("Blue1", BLUE_1),
    ("DarkGreen", DARK_GREEN),
    ("DeepSkyBlue4", DEEP_SKY_BLUE_4),
    ("DeepSkyBlue5", DEEP_SKY_BLUE_5),
    ("DeepSkyBlue6", DEEP_SKY_BLUE_6),
    ("DodgerBlue3", DODGER_BLUE_3),
    ("DodgerBlue2", DODGER_BLUE_2),
    ("Green4", GREEN_4),
    ("SpringGreen4", SPRING_GREEN_4),
    ("Turquoise4", TURQUOISE_4),
    ("DeepSkyBlue3", DEEP_SKY_BLUE_3),
    ("DeepSkyBlue7", DEEP_SKY_BLUE_7),
    ("DodgerBlue1", DODGER_BLUE_1),
    ("SpringGreen3", SPRING_GREEN_3),
    ("DarkCyan", DARK_CYAN),
    ("LightSeaGreen", LIGHT_SEA_GREEN),
    ("DeepSkyBlue2", DEEP_SKY_BLUE_2),
    ("DeepSkyBlue1", DEEP_SKY_BLUE_1),
    ("Green3", GREEN_3),
    ("SpringGreen2", SPRING_GREEN_2),
    ("Cyan3", CYAN_3),
    ("DarkTurquoise", DARK_TURQUOISE),
    ("Turquoise2", TURQUOISE_2),
    ("Green1", GREEN_1),
    ("SpringGreen1", SPRING_GREEN_1),
    ("MediumSpringGreen", MEDIUM_SPRING_GREEN),
    ("Cyan2", CYAN_2),
    ("Cyan1", CYAN_1),
    ("DarkRed", DARK_RED),
    ("DeepPink4", DEEP_PINK_4),
    ("Purple4", PURPLE_4),
    ("Purple3", PURPLE_3),
    ("BlueViolet", BLUE_VIOLET),
    ("Orange4", ORANGE_4),
    ("Grey37", GREY_37),
    ("MediumPurple4", MEDIUM_PURPLE_4),
    ("SlateBlue3", SLATE_BLUE_3),
    ("SlateBlue4", SLATE_BLUE_4),
    ("RoyalBlue1", ROYAL_BLUE_1),
    ("Chartreuse4", CHARTREUSE_4),
    ("PaleTurquoise4", PALE_TURQUOISE_4),
    ("SteelBlue", STEEL_BLUE),
    ("SteelBlue3", STEEL_BLUE_3),
    ("CornflowerBlue", CORNFLOWER_BLUE),
    ("Chartreuse3", CHARTREUSE_3),
    ("DarkSeaGreen4", DARK_SEA_GREEN_4),
    ("CadetBlue", CADET_BLUE),
    ("SkyBlue3", SKY_BLUE_3),
    ("SteelBlue1", STEEL_BLUE_1),
    ("PaleGreen3", PALE_GREEN_3),
    ("SeaGreen3", SEA_GREEN_3),
    ("Aquamarine3", AQUAMARINE_3),
    ("MediumTurquoise", MEDIUM_TURQUOISE),
    ("Chartreuse2", CHARTREUSE_2),
    ("SeaGreen2", SEA_GREEN_2),
    ("SeaGreen1", SEA_GREEN_1),
    ("Aquamarine1", AQUAMARINE_1),
    ("DarkSlateGray2", DARK_SLATE_GRAY_2),
    ("DarkMagenta", DARK_MAGENTA),
    ("DarkViolet", DARK_VIOLET),
    ("LightPink4", LIGHT_PINK_4),
    ("Plum4", PLUM_4),
    ("MediumPurple3", MEDIUM_PURPLE_3),
    ("SlateBlue1", SLATE_BLUE_1),
    ("Wheat4", WHEAT_4),
    ("Grey53", GREY_53),
    ("LightSlateGrey", LIGHT_SLATE_GREY),
    ("MediumPurple", MEDIUM_PURPLE),
    ("LightSlateBlue", LIGHT_SLATE_BLUE),
    ("Yellow4", YELLOW_4),
    ("LightSkyBlue3", LIGHT_SKY_BLUE_3),
    ("SkyBlue2", SKY_BLUE_2),
    ("DarkOliveGreen3", DARK_OLIVE_GREEN_3),
    ("DarkSlateGray3", DARK_SLATE_GRAY_3),
    ("SkyBlue1", SKY_BLUE_1),
    ("Chartreuse1", CHARTREUSE_1),
    ("PaleGreen1", PALE_GREEN_1),
    ("DarkSlateGray1", DARK_SLATE_GRAY_1),
    ("MediumVioletRed", MEDIUM_VIOLET_RED),
    ("MediumOrchid3", MEDIUM_ORCHID_3),
    ("MediumOrchid", MEDIUM_ORCHID),
    ("MediumPurple2", MEDIUM_PURPLE_2),
    ("DarkGoldenrod", DARK_GOLDENROD),
    ("RosyBrown", ROSY_BROWN),
    ("Grey63", GREY_63),
    ("DarkKhaki", DARK_KHAKI),
    ("NavajoWhite3", NAVAJO_WHITE_3),
    ("Grey69", GREY_69),
    ("LightSteelBlue3", LIGHT_STEEL_BLUE_3),
    ("LightSteelBlue", LIGHT_STEEL_BLUE),
    ("DarkSeaGreen3", DARK_SEA_GREEN_3),
    ("DarkSeaGreen2", DARK_SEA_GREEN_2),
    ("LightCyan3", LIGHT_CYAN_3),
    ("LightSkyBlue1", LIGHT_SKY_BLUE_1),
    ("GreenYellow", GREEN_YELLOW),
    ("DarkOliveGreen2", DARK_OLIVE_GREEN_2),
    ("DarkSeaGreen1", DARK_SEA_GREEN_1),
    ("PaleTurquoise1", PALE_TURQUOISE_1),
    ("Red3", RED_3),
    ("DeepPink3", DEEP_PINK_3),
    ("Magenta3", MAGENTA_3),
    ("Magenta2", MAGENTA_2),
    ("DarkOrange3", DARK_ORANGE_3),
    ("IndianRed", INDIAN_RED),
    ("HotPink3", HOT_PINK_3),
    ("HotPink2", HOT_PINK_2),
    ("Orchid", ORCHID),
    ("MediumOrchid1", MEDIUM_ORCHID_1),
    ("Orange3", ORANGE_3),
    ("LightSalmon3", LIGHT_SALMON_3),
    ("LightPink3", LIGHT_PINK_3),
    ("Pink3", PINK_3),
    ("Plum3", PLUM_3),
    ("Violet", VIOLET),
    ("Gold3", GOLD_3),
    ("LightGoldenrod3", LIGHT_GOLDENROD_3),
    ("Tan", TAN),
    ("MistyRose3", MISTY_ROSE_3),
    ("Thistle3", THISTLE_3),
    ("Plum2", PLUM_2),
    ("Yellow3", YELLOW_3),
    ("Khaki3", KHAKI_3),
    ("LightGoldenrod2", LIGHT_GOLDENROD_2),
    ("LightYellow3", LIGHT_YELLOW_3),
    ("Grey84", GREY_84),
    ("LightSteelBlue1", LIGHT_STEEL_BLUE_1),
    ("Yellow2", YELLOW_2),
    ("DarkOliveGreen1", DARK_OLIVE_GREEN_1),
    ("Honeydew2", HONEYDEW_2),
    ("LightCyan1", LIGHT_CYAN_1),
    ("Red1", RED_1),
    ("DeepPink2", DEEP_PINK_2),
    ("DeepPink1", DEEP_PINK_1),
    ("Magenta1", MAGENTA_1),
    ("OrangeRed1", ORANGE_RED_1),
    ("IndianRed1", INDIAN_RED_1),
    ("HotPink", HOT_PINK),
    ("DarkOrange", DARK_ORANGE),
    ("Salmon1", SALMON_1),
    ("LightCoral", LIGHT_CORAL),
    ("PaleVioletRed1", PALE_VIOLET_RED_1),
    ("Orchid2", ORCHID_2),
    ("Orchid1", ORCHID_1),
    ("Orange1", ORANGE_1),
    ("SandyBrown", SANDY_BROWN),
    ("LightSalmon1", LIGHT_SALMON_1),
    ("LightPink1", LIGHT_PINK_1),
    ("Pink1", PINK_1),
    ("Plum1", PLUM_1),
    ("Gold1", GOLD_1),
    ("NavajoWhite1", NAVAJO_WHITE_1),
    ("MistyRose1", MISTY_ROSE_1),
    ("Thistle1", THISTLE_1),
    ("Yellow1", YELLOW_1),
    ("LightGoldenrod1", LIGHT_GOLDENROD_1),
    ("Khaki1", KHAKI_1),
    ("Wheat1", WHEAT_1),
    ("Cornsilk1", CORNSILK_1),
    ("Grey100", GREY_100),
    ("Grey3", GREY_3),
    ("Grey7", GREY_7),
    ("Grey11", GREY_11),
    ("Grey15", GREY_15),
    ("Grey19", GREY_19),
    ("Grey23", GREY_23),
    ("Grey27", GREY_27),
    ("Grey30", GREY_30),
    ("Grey35", GREY_35),
    ("Grey39", GREY_39),
    ("Grey42", GREY_42),
    ("Grey46", GREY_46),
    ("Grey50", GREY_50),
    ("Grey54", GREY_54),
    ("Grey58", GREY_58),
    ("Grey62", GREY_62),
    ("Grey66", GREY_66),
    ("Grey70", GREY_70),
    ("Grey74", GREY_74),
    ("Grey78", GREY_78),
    ("Grey82", GREY_82),
    ("Grey85", GREY_85),
    ("Grey89", GREY_89),
    ("Grey93", GREY_93),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb256_normalises() {
        let c = Colour::from_rgb256(255, 0, 51);
        assert_eq!(c, Colour::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_names_are_unique() {
        assert_eq!(COLOURS_BY_NAME.len(), ALL_COLOURS.len());
    }
}
