use iced::{font::Weight, Font};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const MEDIUM: Font = Font {
    weight: Weight::Medium,
    ..Font::DEFAULT
};

pub const REGULAR: Font = Font::DEFAULT;
