use crate::foundation::core::Hsl;

/// One of the fixed traditional pigments a generated mounting starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BaseColor {
    /// Stable identifier.
    pub id: &'static str,
    /// Traditional pigment name.
    pub name: &'static str,
    /// Base hue/saturation/lightness before jitter.
    pub hsl: Hsl,
}

/// The eight base pigments. Order is part of the seed contract: index `i` is chosen by the
/// first draw of the stream.
pub const BASE_COLORS: [BaseColor; 8] = [
    BaseColor {
        id: "cinnabar",
        name: "朱砂",
        hsl: Hsl { h: 4, s: 72, l: 45 },
    },
    BaseColor {
        id: "azurite",
        name: "石青",
        hsl: Hsl { h: 205, s: 62, l: 38 },
    },
    BaseColor {
        id: "malachite",
        name: "石绿",
        hsl: Hsl { h: 160, s: 45, l: 38 },
    },
    BaseColor {
        id: "gamboge",
        name: "藤黄",
        hsl: Hsl { h: 42, s: 80, l: 52 },
    },
    BaseColor {
        id: "rouge",
        name: "胭脂",
        hsl: Hsl { h: 345, s: 60, l: 40 },
    },
    BaseColor {
        id: "ochre",
        name: "赭石",
        hsl: Hsl { h: 22, s: 55, l: 40 },
    },
    BaseColor {
        id: "indigo",
        name: "黛蓝",
        hsl: Hsl { h: 225, s: 35, l: 30 },
    },
    BaseColor {
        id: "incense",
        name: "香色",
        hsl: Hsl { h: 36, s: 40, l: 58 },
    },
];
