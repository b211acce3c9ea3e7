//! Container styling.
//!
//! [`get_styles`] turns a style object and an optional class override into the
//! presentation attributes a host applies to the box around the editor.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxSizing {
    ContentBox,
    BorderBox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Length {
    Auto,
    Px(u16),
    Percent(u16),
}

impl Length {
    /// Terminal cells for this length, at `px_per_cell` pixels per cell.
    /// `Auto` and percentages have no fixed size and map to zero.
    pub fn cells(self, px_per_cell: u16) -> u16 {
        match self {
            Length::Px(px) if px_per_cell > 0 => px.div_ceil(px_per_cell),
            _ => 0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Auto => write!(f, "auto"),
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleObject {
    pub box_sizing: Option<BoxSizing>,
    pub padding_left: Option<Length>,
    pub padding_right: Option<Length>,
    pub max_width: Option<Length>,
    pub overflow: Option<Overflow>,
    pub border_radius: Option<Length>,
}

impl StyleObject {
    pub fn box_sizing(mut self, v: BoxSizing) -> Self {
        self.box_sizing = Some(v);
        self
    }

    pub fn padding_x(mut self, v: Length) -> Self {
        self.padding_left = Some(v);
        self.padding_right = Some(v);
        self
    }

    pub fn max_width(mut self, v: Length) -> Self {
        self.max_width = Some(v);
        self
    }

    pub fn overflow(mut self, v: Overflow) -> Self {
        self.overflow = Some(v);
        self
    }

    pub fn border_radius(mut self, v: Length) -> Self {
        self.border_radius = Some(v);
        self
    }

    pub fn is_rounded(&self) -> bool {
        matches!(self.border_radius, Some(Length::Px(r)) if r > 0)
    }

    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(v) = self.box_sizing {
            let v = match v {
                BoxSizing::ContentBox => "content-box",
                BoxSizing::BorderBox => "border-box",
            };
            out.push(("box-sizing", v.to_string()));
        }
        if let Some(v) = self.padding_left {
            out.push(("padding-left", v.to_string()));
        }
        if let Some(v) = self.padding_right {
            out.push(("padding-right", v.to_string()));
        }
        if let Some(v) = self.max_width {
            out.push(("max-width", v.to_string()));
        }
        if let Some(v) = self.overflow {
            let v = match v {
                Overflow::Visible => "visible",
                Overflow::Hidden => "hidden",
            };
            out.push(("overflow", v.to_string()));
        }
        if let Some(v) = self.border_radius {
            out.push(("border-radius", v.to_string()));
        }
        out
    }

    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub class_name: String,
    pub style: StyleObject,
}

impl Presentation {
    pub fn has_class(&self, name: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == name)
    }

    pub fn inline_style(&self) -> String {
        self.style.to_css()
    }
}

/// The generated class is derived from the declarations, so equal styles share a
/// class. A non-blank override is appended after it.
pub fn get_styles(style: &StyleObject, class_name: Option<&str>) -> Presentation {
    let generated = format!("cp-{:016x}", fnv1a64(style.to_css().as_bytes()));
    let class_name = match class_name.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {}", generated, extra),
        None => generated,
    };
    Presentation {
        class_name,
        style: *style,
    }
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    bytes
        .iter()
        .fold(OFFSET, |h, b| (h ^ *b as u64).wrapping_mul(PRIME))
}

#[cfg(test)]
#[path = "../../tests/unit/ui/style.rs"]
mod tests;
