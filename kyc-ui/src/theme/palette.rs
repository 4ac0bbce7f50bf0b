use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub pills: Pills,
    pub text_inputs: TextInputs,
    pub scrollable: Scrollable,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
    pub overlay: iced::Color,
    pub rule: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub success: Button,
    pub destructive: Button,
    pub transparent: Button,
    pub row: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub modal: ContainerPalette,
    pub warning: ContainerPalette,
    pub success: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pills {
    pub pending: ContainerPalette,
    pub approved: ContainerPalette,
    pub rejected: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scrollable {
    pub rail: iced::Color,
    pub scroller: iced::Color,
    pub scroller_hovered: iced::Color,
}

fn filled(background: iced::Color, hovered: iced::Color) -> Button {
    Button {
        active: ButtonPalette {
            background,
            text: color::WHITE,
            border: None,
        },
        hovered: ButtonPalette {
            background: hovered,
            text: color::WHITE,
            border: None,
        },
        pressed: Some(ButtonPalette {
            background: hovered,
            text: color::WHITE,
            border: None,
        }),
        disabled: Some(ButtonPalette {
            background: color::GREY_3,
            text: color::WHITE,
            border: None,
        }),
    }
}

fn input(border: iced::Color, focused: iced::Color) -> TextInput {
    let active = TextInputPalette {
        background: color::WHITE,
        icon: color::GREY_3,
        placeholder: color::GREY_3,
        value: color::INK,
        selection: color::LIGHT_BLUE,
        border: Some(border),
    };
    TextInput {
        active,
        focused: TextInputPalette {
            border: Some(focused),
            ..active
        },
        disabled: TextInputPalette {
            background: color::GREY_1,
            value: color::GREY_3,
            ..active
        },
    }
}

fn pill(background: iced::Color, text: iced::Color) -> ContainerPalette {
    ContainerPalette {
        background,
        text: Some(text),
        border: None,
    }
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                foreground: color::WHITE,
                overlay: color::TRANSPARENT_BLACK,
                rule: color::GREY_2,
            },
            text: Text {
                primary: color::INK,
                secondary: color::GREY_4,
                accent: color::BLUE,
                error: color::RED,
            },
            buttons: Buttons {
                primary: filled(color::BLUE, color::DARK_BLUE),
                success: filled(color::GREEN, color::DARK_GREEN),
                destructive: filled(color::RED, color::DARK_RED),
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::INK,
                        border: Some(color::GREY_2),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: Some(color::GREY_3),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::BLUE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::DARK_BLUE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                row: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::INK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::INK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_2),
                },
                modal: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: None,
                },
                warning: ContainerPalette {
                    background: color::LIGHT_ORANGE,
                    text: Some(color::INK),
                    border: Some(color::ORANGE),
                },
                success: ContainerPalette {
                    background: color::LIGHT_GREEN,
                    text: Some(color::DARK_GREEN),
                    border: Some(color::GREEN),
                },
            },
            pills: Pills {
                pending: pill(color::LIGHT_ORANGE, color::ORANGE),
                approved: pill(color::LIGHT_GREEN, color::DARK_GREEN),
                rejected: pill(color::LIGHT_RED, color::DARK_RED),
            },
            text_inputs: TextInputs {
                primary: input(color::GREY_2, color::BLUE),
                invalid: input(color::RED, color::RED),
            },
            scrollable: Scrollable {
                rail: color::TRANSPARENT,
                scroller: color::GREY_2,
                scroller_hovered: color::GREY_3,
            },
        }
    }
}
