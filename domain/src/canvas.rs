use std::fmt;

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1350;

/// The canvas is split into three contiguous horizontal bands. The band
/// heights must sum to the canvas height; each band holds exactly one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Header,
    Body,
    Footer,
}

impl Band {
    #[must_use]
    pub fn top(self) -> u32 {
        match self {
            Self::Header => 0,
            Self::Body => 200,
            Self::Footer => 1150,
        }
    }

    #[must_use]
    pub fn height(self) -> u32 {
        match self {
            Self::Header => 200,
            Self::Body => 950,
            Self::Footer => 200,
        }
    }
}

/// Which source image a buffer or frame came from. Error messages name the
/// role so callers can tell which of the three inputs was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    AiImage,
    HeaderTemplate,
    FooterTemplate,
}

impl LayerRole {
    /// The JSON field the role is submitted under.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::AiImage => "aiImage",
            Self::HeaderTemplate => "headerTemplate",
            Self::FooterTemplate => "footerTemplate",
        }
    }

    #[must_use]
    pub fn band(self) -> Band {
        match self {
            Self::AiImage => Band::Body,
            Self::HeaderTemplate => Band::Header,
            Self::FooterTemplate => Band::Footer,
        }
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AiImage => "AI image",
            Self::HeaderTemplate => "header",
            Self::FooterTemplate => "footer",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::{Band, CANVAS_HEIGHT, CANVAS_WIDTH, LayerRole};

    #[test]
    fn bands_partition_canvas_height() {
        assert_eq!(Band::Header.top(), 0);
        assert_eq!(Band::Body.top(), Band::Header.top() + Band::Header.height());
        assert_eq!(Band::Footer.top(), Band::Body.top() + Band::Body.height());
        assert_eq!(
            Band::Header.height() + Band::Body.height() + Band::Footer.height(),
            CANVAS_HEIGHT
        );
        assert_eq!(CANVAS_WIDTH, 1080);
    }

    #[test]
    fn roles_map_to_their_bands() {
        assert_eq!(LayerRole::HeaderTemplate.band(), Band::Header);
        assert_eq!(LayerRole::AiImage.band(), Band::Body);
        assert_eq!(LayerRole::FooterTemplate.band(), Band::Footer);
    }
}
