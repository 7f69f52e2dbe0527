//! 预定义颜色表
//!
//! 常用的命名颜色，可直接用于 [`ColorPair`](crate::color::ColorPair) 与自定义样式。

use crate::color::Color;

// 基础色
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

// 红色系
pub const RED: Color = Color::rgb(255, 0, 0);
pub const DARK_RED: Color = Color::rgb(139, 0, 0);
pub const LIGHT_RED: Color = Color::rgb(255, 102, 102);
pub const CRIMSON: Color = Color::rgb(220, 20, 60);
pub const SALMON: Color = Color::rgb(250, 128, 114);
pub const CORAL: Color = Color::rgb(255, 127, 80);
pub const FIREBRICK: Color = Color::rgb(178, 34, 34);
pub const MAROON: Color = Color::rgb(128, 0, 0);
pub const TOMATO: Color = Color::rgb(255, 99, 71);
pub const ROSE: Color = Color::rgb(255, 0, 127);

// 绿色系
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const DARK_GREEN: Color = Color::rgb(0, 139, 0);
pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);
pub const FOREST_GREEN: Color = Color::rgb(34, 139, 34);
pub const LIME: Color = Color::rgb(50, 205, 50);
pub const OLIVE: Color = Color::rgb(128, 128, 0);
pub const CHARTREUSE: Color = Color::rgb(127, 255, 0);
pub const SPRING_GREEN: Color = Color::rgb(0, 255, 127);

// 蓝色系
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
pub const LIGHT_BLUE: Color = Color::rgb(173, 216, 230);
pub const NAVY: Color = Color::rgb(0, 0, 128);
pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
pub const CORNFLOWER_BLUE: Color = Color::rgb(100, 149, 237);
pub const SLATE_BLUE: Color = Color::rgb(106, 90, 205);
pub const AZURE: Color = Color::rgb(0, 127, 255);
pub const TURQUOISE: Color = Color::rgb(64, 224, 208);

// 青色与紫色系
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const AQUA: Color = CYAN;
pub const AQUAMARINE: Color = Color::rgb(127, 255, 212);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const FUCHSIA: Color = MAGENTA;
pub const VIOLET: Color = Color::rgb(127, 0, 255);
pub const INDIGO: Color = Color::rgb(75, 0, 130);
pub const PURPLE: Color = Color::rgb(128, 0, 128);
pub const LAVENDER: Color = Color::rgb(230, 230, 250);
pub const PLUM: Color = Color::rgb(221, 160, 221);
pub const THISTLE: Color = Color::rgb(216, 191, 216);

// 粉色系
pub const PINK: Color = Color::rgb(255, 192, 203);
pub const HOT_PINK: Color = Color::rgb(255, 105, 180);
pub const DEEP_PINK: Color = Color::rgb(255, 20, 147);
pub const MISTY_ROSE: Color = Color::rgb(255, 228, 225);

// 黄色与橙色系
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const GOLD: Color = Color::rgb(255, 215, 0);
pub const KHAKI: Color = Color::rgb(240, 230, 140);
pub const ORANGE: Color = Color::rgb(255, 165, 0);

// 棕色系
pub const BROWN: Color = Color::rgb(165, 42, 42);
pub const CHOCOLATE: Color = Color::rgb(210, 105, 30);
pub const TAN: Color = Color::rgb(210, 180, 140);
pub const PERU: Color = Color::rgb(205, 133, 63);
pub const SIENNA: Color = Color::rgb(160, 82, 45);
pub const WHEAT: Color = Color::rgb(245, 222, 179);

// 灰色系
pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
pub const GRAY: Color = Color::rgb(128, 128, 128);
pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
pub const SILVER: Color = LIGHT_GRAY;
pub const GAINSBORO: Color = Color::rgb(220, 220, 220);
pub const SLATE_GRAY: Color = Color::rgb(112, 128, 144);

// 浅色系
pub const BEIGE: Color = Color::rgb(245, 245, 220);
pub const BISQUE: Color = Color::rgb(255, 228, 196);
pub const IVORY: Color = Color::rgb(255, 255, 240);
pub const LINEN: Color = Color::rgb(250, 240, 230);
pub const MINT_CREAM: Color = Color::rgb(245, 255, 250);
pub const MOCCASIN: Color = Color::rgb(255, 228, 181);
pub const NAVAJO_WHITE: Color = Color::rgb(255, 222, 173);

/// 按名称查找颜色（小写、下划线分隔，如 `slate_blue`）
pub fn by_name(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => BLACK,
        "white" => WHITE,
        "red" => RED,
        "dark_red" => DARK_RED,
        "light_red" => LIGHT_RED,
        "crimson" => CRIMSON,
        "salmon" => SALMON,
        "coral" => CORAL,
        "firebrick" => FIREBRICK,
        "maroon" => MAROON,
        "tomato" => TOMATO,
        "rose" => ROSE,
        "green" => GREEN,
        "dark_green" => DARK_GREEN,
        "light_green" => LIGHT_GREEN,
        "forest_green" => FOREST_GREEN,
        "lime" => LIME,
        "olive" => OLIVE,
        "chartreuse" => CHARTREUSE,
        "spring_green" => SPRING_GREEN,
        "blue" => BLUE,
        "dark_blue" => DARK_BLUE,
        "light_blue" => LIGHT_BLUE,
        "navy" => NAVY,
        "royal_blue" => ROYAL_BLUE,
        "sky_blue" => SKY_BLUE,
        "cornflower_blue" => CORNFLOWER_BLUE,
        "slate_blue" => SLATE_BLUE,
        "azure" => AZURE,
        "turquoise" => TURQUOISE,
        "cyan" | "aqua" => CYAN,
        "aquamarine" => AQUAMARINE,
        "magenta" | "fuchsia" => MAGENTA,
        "violet" => VIOLET,
        "indigo" => INDIGO,
        "purple" => PURPLE,
        "lavender" => LAVENDER,
        "plum" => PLUM,
        "thistle" => THISTLE,
        "pink" => PINK,
        "hot_pink" => HOT_PINK,
        "deep_pink" => DEEP_PINK,
        "misty_rose" => MISTY_ROSE,
        "yellow" => YELLOW,
        "gold" => GOLD,
        "khaki" => KHAKI,
        "orange" => ORANGE,
        "brown" => BROWN,
        "chocolate" => CHOCOLATE,
        "tan" => TAN,
        "peru" => PERU,
        "sienna" => SIENNA,
        "wheat" => WHEAT,
        "dark_gray" => DARK_GRAY,
        "gray" => GRAY,
        "light_gray" | "silver" => LIGHT_GRAY,
        "gainsboro" => GAINSBORO,
        "slate_gray" => SLATE_GRAY,
        "beige" => BEIGE,
        "bisque" => BISQUE,
        "ivory" => IVORY,
        "linen" => LINEN,
        "mint_cream" => MINT_CREAM,
        "moccasin" => MOCCASIN,
        "navajo_white" => NAVAJO_WHITE,
        _ => return None,
    };
    Some(color)
}
