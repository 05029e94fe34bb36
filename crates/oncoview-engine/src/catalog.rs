use oncoview_types::ClassificationCode;
use serde::Serialize;

/// Hex color used to paint a category (`#rrggbb`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorToken(&'static str);

impl ColorToken {
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Decode to RGB components for terminal truecolor output
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// One known cancer subtype category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub code: ClassificationCode,
    pub color: ColorToken,
    /// Class name used by the inference service (also the probability key)
    pub label: &'static str,
    pub description: &'static str,
}

/// Display attributes resolved for a code. Always available, see [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDisplay {
    pub color: ColorToken,
    pub label: &'static str,
    pub description: &'static str,
}

pub const FALLBACK_COLOR: ColorToken = ColorToken::new("#95a5a6");
pub const FALLBACK_LABEL: &str = "Unknown";
pub const FALLBACK_DESCRIPTION: &str = "No detail available";

pub const FALLBACK: CategoryDisplay = CategoryDisplay {
    color: FALLBACK_COLOR,
    label: FALLBACK_LABEL,
    description: FALLBACK_DESCRIPTION,
};

const CATALOG: [CategoryEntry; 5] = [
    CategoryEntry {
        code: ClassificationCode::new(0),
        color: ColorToken::new("#3498db"),
        label: "Breast",
        description: "General breast cancer",
    },
    CategoryEntry {
        code: ClassificationCode::new(1),
        color: ColorToken::new("#e74c3c"),
        label: "Breast Invasive Ductal Carcinoma",
        description: "Invasive Ductal Carcinoma",
    },
    CategoryEntry {
        code: ClassificationCode::new(2),
        color: ColorToken::new("#f39c12"),
        label: "Breast Invasive Lobular Carcinoma",
        description: "Invasive Lobular Carcinoma",
    },
    CategoryEntry {
        code: ClassificationCode::new(3),
        color: ColorToken::new("#9b59b6"),
        label: "Breast Invasive Mixed Mucinous Carcinoma",
        description: "Invasive Mixed Mucinous Carcinoma",
    },
    CategoryEntry {
        code: ClassificationCode::new(4),
        color: ColorToken::new("#e67e22"),
        label: "Breast Mixed Ductal and Lobular Carcinoma",
        description: "Mixed Ductal and Lobular Carcinoma",
    },
];

impl CategoryEntry {
    pub fn display(&self) -> CategoryDisplay {
        CategoryDisplay {
            color: self.color,
            label: self.label,
            description: self.description,
        }
    }
}

/// All known categories, ordered by code
pub fn entries() -> &'static [CategoryEntry] {
    &CATALOG
}

pub fn find(code: ClassificationCode) -> Option<&'static CategoryEntry> {
    CATALOG.iter().find(|entry| entry.code == code)
}

pub fn is_known(code: ClassificationCode) -> bool {
    find(code).is_some()
}

/// Resolve display attributes for any code; unknown codes get [`FALLBACK`]
pub fn lookup(code: ClassificationCode) -> CategoryDisplay {
    find(code).map(CategoryEntry::display).unwrap_or(FALLBACK)
}

pub fn color_for(code: ClassificationCode) -> ColorToken {
    lookup(code).color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let ductal = lookup(ClassificationCode::new(1));
        assert_eq!(ductal.color.as_str(), "#e74c3c");
        assert_eq!(ductal.label, "Breast Invasive Ductal Carcinoma");
        assert_eq!(ductal.description, "Invasive Ductal Carcinoma");

        assert_eq!(color_for(ClassificationCode::new(0)).as_str(), "#3498db");
        assert_eq!(color_for(ClassificationCode::new(4)).as_str(), "#e67e22");
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [-1, 5, 99, i64::MIN, i64::MAX] {
            let display = lookup(ClassificationCode::new(code));
            assert_eq!(display, FALLBACK, "code {}", code);
        }
        assert_eq!(lookup(ClassificationCode::new(99)).color.as_str(), "#95a5a6");
        assert_eq!(
            lookup(ClassificationCode::new(99)).description,
            "No detail available"
        );
    }

    #[test]
    fn test_entries_are_sorted_and_unique() {
        let codes: Vec<i64> = entries().iter().map(|e| e.code.value()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rgb_decoding() {
        assert_eq!(ColorToken::new("#3498db").rgb(), Some((0x34, 0x98, 0xdb)));
        assert_eq!(FALLBACK_COLOR.rgb(), Some((0x95, 0xa5, 0xa6)));
        assert_eq!(ColorToken::new("3498db").rgb(), None);
        assert_eq!(ColorToken::new("#zzzzzz").rgb(), None);
    }
}
