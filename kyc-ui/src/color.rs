use iced::Color;

pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const INK: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const BLUE: Color = Color::from_rgb(
    0x25 as f32 / 255.0,
    0x63 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const DARK_BLUE: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x4E as f32 / 255.0,
    0xD8 as f32 / 255.0,
);
pub const LIGHT_BLUE: Color = Color::from_rgb(
    0xDB as f32 / 255.0,
    0xEA as f32 / 255.0,
    0xFE as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
pub const DARK_GREEN: Color = Color::from_rgb(
    0x15 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0x3D as f32 / 255.0,
);
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0xFC as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
);
pub const DARK_RED: Color = Color::from_rgb(
    0xB9 as f32 / 255.0,
    0x1C as f32 / 255.0,
    0x1C as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
);
pub const ORANGE: Color = Color::from_rgb(
    0xD9 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x06 as f32 / 255.0,
);
pub const LIGHT_ORANGE: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF3 as f32 / 255.0,
    0xC7 as f32 / 255.0,
);
pub const TRANSPARENT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
