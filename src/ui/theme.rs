//! Editor themes, keyed by the same identifiers the surface accepts
//! (`vs-dark`, `vs`, `hc-black`).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
    pub title: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "vs-dark" | "dark" => Some(Self::Dark),
            "vs" | "light" | "vs-light" => Some(Self::Light),
            "hc-black" | "hc" | "high-contrast" => Some(Self::HighContrast),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "vs-dark",
            Self::Light => "vs",
            Self::HighContrast => "hc-black",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                fg: Color::Rgb(0xd4, 0xd4, 0xd4),
                bg: Color::Rgb(0x1e, 0x1e, 0x1e),
                border: Color::Rgb(0x3c, 0x3c, 0x3c),
                title: Color::Rgb(0x56, 0x9c, 0xd6),
            },
            Self::Light => Palette {
                fg: Color::Rgb(0x00, 0x00, 0x00),
                bg: Color::Rgb(0xff, 0xff, 0xfe),
                border: Color::Rgb(0xd4, 0xd4, 0xd4),
                title: Color::Rgb(0x00, 0x00, 0xff),
            },
            Self::HighContrast => Palette {
                fg: Color::Rgb(0xff, 0xff, 0xff),
                bg: Color::Rgb(0x00, 0x00, 0x00),
                border: Color::Rgb(0x6f, 0xc3, 0xdf),
                title: Color::Rgb(0xf3, 0x8b, 0x00),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/theme.rs"]
mod tests;
