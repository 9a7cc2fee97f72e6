use serde::Serialize;

/// Pixel edge the prepared source image must have before rendering.
pub const SOURCE_SIZE: u32 = 1024;

/// Device idiom a catalog entry is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Idiom {
    #[serde(rename = "iphone")]
    Iphone,
    #[serde(rename = "ipad")]
    Ipad,
    #[serde(rename = "ios-marketing")]
    IosMarketing,
}

/// One planned output: a pixel size plus its asset-catalog classification.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpec {
    pub pixels: u32,
    pub idiom: Idiom,
    /// Point size as the catalog spells it, e.g. "83.5x83.5".
    pub size: &'static str,
    pub scale: &'static str,
}

impl SizeSpec {
    pub fn filename(&self, prefix: &str) -> String {
        format!("{prefix}_{}.png", self.pixels)
    }
}

/// Every size an AppIcon.appiconset needs, ascending by pixel edge.
pub const SIZE_PLAN: [SizeSpec; 13] = [
    SizeSpec {
        pixels: 20,
        idiom: Idiom::Ipad,
        size: "20x20",
        scale: "1x",
    },
    SizeSpec {
        pixels: 29,
        idiom: Idiom::Ipad,
        size: "29x29",
        scale: "1x",
    },
    SizeSpec {
        pixels: 40,
        idiom: Idiom::Iphone,
        size: "20x20",
        scale: "2x",
    },
    SizeSpec {
        pixels: 58,
        idiom: Idiom::Iphone,
        size: "29x29",
        scale: "2x",
    },
    SizeSpec {
        pixels: 60,
        idiom: Idiom::Iphone,
        size: "20x20",
        scale: "3x",
    },
    SizeSpec {
        pixels: 76,
        idiom: Idiom::Ipad,
        size: "76x76",
        scale: "1x",
    },
    SizeSpec {
        pixels: 80,
        idiom: Idiom::Iphone,
        size: "40x40",
        scale: "2x",
    },
    SizeSpec {
        pixels: 87,
        idiom: Idiom::Iphone,
        size: "29x29",
        scale: "3x",
    },
    SizeSpec {
        pixels: 120,
        idiom: Idiom::Iphone,
        size: "60x60",
        scale: "2x",
    },
    SizeSpec {
        pixels: 152,
        idiom: Idiom::Ipad,
        size: "76x76",
        scale: "2x",
    },
    SizeSpec {
        pixels: 167,
        idiom: Idiom::Ipad,
        size: "83.5x83.5",
        scale: "2x",
    },
    SizeSpec {
        pixels: 180,
        idiom: Idiom::Iphone,
        size: "60x60",
        scale: "3x",
    },
    SizeSpec {
        pixels: 1024,
        idiom: Idiom::IosMarketing,
        size: "1024x1024",
        scale: "1x",
    },
];
