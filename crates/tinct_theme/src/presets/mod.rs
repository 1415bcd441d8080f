//! Built-in palettes and menu palettes.
//!
//! The color values are the toolkit's stock themes. Light themes share the
//! neutral font and border ramps below and differ only in their accent tints.

use crate::color::Color;
use crate::palette::{DisabledColors, FontSizes, MenuPalette, Palette, RoleColors};
use crate::style::{MenuStyleId, StyleId};

/// Neutral font color ramp shared by the light themes
pub mod font {
    use crate::color::Color;

    pub const PRIMARY: Color = Color::rgb(48.0 / 255.0, 48.0 / 255.0, 48.0 / 255.0);
    pub const REGULAR: Color = Color::rgb(96.0 / 255.0, 96.0 / 255.0, 96.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(144.0 / 255.0, 144.0 / 255.0, 144.0 / 255.0);
    pub const PLAIN: Color = Color::SILVER;
    pub const WHITE: Color = Color::rgb(248.0 / 255.0, 248.0 / 255.0, 248.0 / 255.0);
}

/// Neutral border color ramp shared by the light themes
pub mod border {
    use crate::color::Color;

    pub const PRIMARY: Color = Color::rgb(220.0 / 255.0, 223.0 / 255.0, 230.0 / 255.0);
    pub const REGULAR: Color = Color::rgb(228.0 / 255.0, 231.0 / 255.0, 237.0 / 255.0);
    pub const SECONDARY: Color = Color::rgb(235.0 / 255.0, 238.0 / 255.0, 245.0 / 255.0);
    pub const PLAIN: Color = Color::rgb(242.0 / 255.0, 246.0 / 255.0, 252.0 / 255.0);
}

/// Accent colors of the stock themes
pub mod accent {
    use crate::color::Color;

    pub const BLUE: Color = Color::rgb(80.0 / 255.0, 160.0 / 255.0, 255.0 / 255.0);
    pub const GREEN: Color = Color::rgb(110.0 / 255.0, 190.0 / 255.0, 40.0 / 255.0);
    pub const RED: Color = Color::rgb(230.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);
    pub const GRAY: Color = Color::rgb(140.0 / 255.0, 140.0 / 255.0, 140.0 / 255.0);
    pub const ORANGE: Color = Color::rgb(220.0 / 255.0, 155.0 / 255.0, 40.0 / 255.0);
    pub const PURPLE: Color = Color::rgb(102.0 / 255.0, 58.0 / 255.0, 183.0 / 255.0);
    pub const LAYUI_GREEN: Color = Color::rgb(0.0, 150.0 / 255.0, 136.0 / 255.0);
    pub const LAYUI_RED: Color = Color::rgb(1.0, 87.0 / 255.0, 34.0 / 255.0);
    pub const LAYUI_ORANGE: Color = Color::rgb(1.0, 184.0 / 255.0, 0.0);
    pub const LAYUI_BLACK: Color = Color::rgb(52.0 / 255.0, 55.0 / 255.0, 66.0 / 255.0);
    pub const DARK_BLUE: Color = Color::rgb(14.0 / 255.0, 30.0 / 255.0, 63.0 / 255.0);

    pub const LIGHT_BLUE: Color = Color::rgb(235.0 / 255.0, 243.0 / 255.0, 1.0);
    pub const LIGHT_GREEN: Color = Color::rgb(239.0 / 255.0, 248.0 / 255.0, 232.0 / 255.0);
    pub const LIGHT_RED: Color = Color::rgb(251.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0);
    pub const LIGHT_GRAY: Color = Color::rgb(242.0 / 255.0, 242.0 / 255.0, 244.0 / 255.0);
    pub const LIGHT_ORANGE: Color = Color::rgb(251.0 / 255.0, 245.0 / 255.0, 233.0 / 255.0);
    pub const LIGHT_PURPLE: Color = Color::rgb(250.0 / 255.0, 238.0 / 255.0, 1.0);

    pub const REGULAR_BLUE: Color = Color::rgb(216.0 / 255.0, 233.0 / 255.0, 1.0);
    pub const REGULAR_GREEN: Color = Color::rgb(224.0 / 255.0, 242.0 / 255.0, 210.0 / 255.0);
    pub const REGULAR_RED: Color = Color::rgb(248.0 / 255.0, 222.0 / 255.0, 222.0 / 255.0);
    pub const REGULAR_GRAY: Color = Color::rgb(230.0 / 255.0, 230.0 / 255.0, 232.0 / 255.0);
    pub const REGULAR_ORANGE: Color = Color::rgb(247.0 / 255.0, 234.0 / 255.0, 210.0 / 255.0);
}

#[derive(Clone, Copy)]
struct AccentBase {
    accent: Color,
    light: Color,
    regular: Color,
    fore: Color,
}

impl AccentBase {
    /// Tints derived from the accent for themes without hand-picked ones
    fn derived(accent: Color, fore: Color) -> Self {
        Self {
            accent,
            light: blend(accent, Color::WHITE, 0.9),
            regular: blend(accent, Color::WHITE, 0.8),
            fore,
        }
    }
}

/// All stock palettes except `Colorful`, in registration order.
pub fn builtin_palettes(fonts: FontSizes) -> Vec<Palette> {
    let light = |id: StyleId, base: AccentBase| light_palette(id, base, fonts);

    vec![
        light(
            StyleId::Blue,
            AccentBase {
                accent: accent::BLUE,
                light: accent::LIGHT_BLUE,
                regular: accent::REGULAR_BLUE,
                fore: Color::WHITE,
            },
        ),
        light(
            StyleId::Orange,
            AccentBase {
                accent: accent::ORANGE,
                light: accent::LIGHT_ORANGE,
                regular: accent::REGULAR_ORANGE,
                fore: Color::WHITE,
            },
        ),
        light(
            StyleId::Gray,
            AccentBase {
                accent: accent::GRAY,
                light: accent::LIGHT_GRAY,
                regular: accent::REGULAR_GRAY,
                fore: Color::WHITE,
            },
        ),
        light(
            StyleId::Green,
            AccentBase {
                accent: accent::GREEN,
                light: accent::LIGHT_GREEN,
                regular: accent::REGULAR_GREEN,
                fore: Color::WHITE,
            },
        ),
        light(
            StyleId::Red,
            AccentBase {
                accent: accent::RED,
                light: accent::LIGHT_RED,
                regular: accent::REGULAR_RED,
                fore: Color::WHITE,
            },
        ),
        dark_palette(StyleId::DarkBlue, accent::DARK_BLUE, accent::BLUE, fonts),
        light(
            StyleId::LayuiGreen,
            AccentBase::derived(accent::LAYUI_GREEN, Color::WHITE),
        ),
        light(
            StyleId::LayuiRed,
            AccentBase::derived(accent::LAYUI_RED, Color::WHITE),
        ),
        light(
            StyleId::LayuiOrange,
            AccentBase::derived(accent::LAYUI_ORANGE, Color::WHITE),
        ),
        dark_palette(StyleId::Black, accent::LAYUI_BLACK, accent::BLUE, fonts),
        light(
            StyleId::Purple,
            AccentBase {
                accent: accent::PURPLE,
                light: accent::LIGHT_PURPLE,
                regular: blend(accent::PURPLE, Color::WHITE, 0.8),
                fore: Color::WHITE,
            },
        ),
    ]
}

/// Accent-driven palette: surfaces take the accent, text takes `fore`.
pub fn colorful_palette(accent: Color, fore: Color, fonts: FontSizes) -> Palette {
    Palette {
        id: StyleId::Colorful,
        name: StyleId::Colorful.display_name().to_string(),
        primary_color: accent,
        fore_color: fore,
        fill: RoleColors {
            primary: accent,
            secondary: blend(accent, Color::BLACK, 0.15),
            regular: blend(accent, Color::WHITE, 0.2),
            plain: blend(accent, Color::WHITE, 0.4),
        },
        border: RoleColors {
            primary: accent,
            secondary: blend(accent, Color::WHITE, 0.3),
            regular: blend(accent, Color::WHITE, 0.5),
            plain: blend(accent, Color::WHITE, 0.7),
        },
        font: RoleColors {
            primary: fore,
            secondary: fore.with_alpha(0.7),
            regular: fore.with_alpha(0.85),
            plain: fore.with_alpha(0.5),
        },
        disabled: DisabledColors {
            fill: blend(accent, Color::WHITE, 0.6),
            fore: blend(fore, accent, 0.5),
        },
        fonts,
    }
}

/// The three menu color sets every menu catalog starts with.
pub fn builtin_menu_palettes() -> Vec<MenuPalette> {
    MenuStyleId::ALL.into_iter().map(menu_palette).collect()
}

/// Stock color set for one menu style
pub fn menu_palette(id: MenuStyleId) -> MenuPalette {
    match id {
        MenuStyleId::Custom => MenuPalette {
            id,
            back_color: accent::LAYUI_BLACK,
            fore_color: Color::WHITE,
            selected_color: blend(accent::LAYUI_BLACK, Color::BLACK, 0.3),
            selected_fore_color: accent::BLUE,
            hover_color: blend(accent::LAYUI_BLACK, Color::WHITE, 0.1),
            child_back_color: blend(accent::LAYUI_BLACK, Color::BLACK, 0.2),
        },
        MenuStyleId::Black => MenuPalette {
            id,
            back_color: Color::rgb(56.0 / 255.0, 56.0 / 255.0, 56.0 / 255.0),
            fore_color: font::WHITE,
            selected_color: Color::rgb(36.0 / 255.0, 36.0 / 255.0, 36.0 / 255.0),
            selected_fore_color: accent::BLUE,
            hover_color: Color::rgb(76.0 / 255.0, 76.0 / 255.0, 76.0 / 255.0),
            child_back_color: Color::rgb(48.0 / 255.0, 48.0 / 255.0, 48.0 / 255.0),
        },
        MenuStyleId::White => MenuPalette {
            id,
            back_color: Color::WHITE,
            fore_color: font::PRIMARY,
            selected_color: accent::LIGHT_BLUE,
            selected_fore_color: accent::BLUE,
            hover_color: accent::REGULAR_BLUE,
            child_back_color: font::WHITE,
        },
    }
}

fn light_palette(id: StyleId, base: AccentBase, fonts: FontSizes) -> Palette {
    Palette {
        id,
        name: id.display_name().to_string(),
        primary_color: base.accent,
        fore_color: base.fore,
        fill: RoleColors {
            primary: base.accent,
            secondary: base.regular,
            regular: base.light,
            plain: Color::WHITE,
        },
        border: RoleColors {
            primary: base.accent,
            secondary: border::SECONDARY,
            regular: border::REGULAR,
            plain: border::PLAIN,
        },
        font: RoleColors {
            primary: font::PRIMARY,
            secondary: font::SECONDARY,
            regular: font::REGULAR,
            plain: font::PLAIN,
        },
        disabled: DisabledColors {
            fill: font::PLAIN,
            fore: font::REGULAR,
        },
        fonts,
    }
}

fn dark_palette(id: StyleId, background: Color, highlight: Color, fonts: FontSizes) -> Palette {
    Palette {
        id,
        name: id.display_name().to_string(),
        primary_color: highlight,
        fore_color: Color::WHITE,
        fill: RoleColors {
            primary: highlight,
            secondary: blend(background, Color::WHITE, 0.15),
            regular: blend(background, Color::WHITE, 0.08),
            plain: background,
        },
        border: RoleColors {
            primary: highlight,
            secondary: blend(background, Color::WHITE, 0.3),
            regular: blend(background, Color::WHITE, 0.2),
            plain: blend(background, Color::WHITE, 0.1),
        },
        font: RoleColors {
            primary: font::WHITE,
            secondary: font::PLAIN,
            regular: border::PRIMARY,
            plain: font::SECONDARY,
        },
        disabled: DisabledColors {
            fill: blend(background, Color::WHITE, 0.2),
            fore: font::SECONDARY,
        },
        fonts,
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    Color::lerp(&a, &b, t)
}
