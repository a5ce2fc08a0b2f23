//! Catalog of software licenses the assistant recognizes by name.

use serde::{Deserialize, Serialize};

/// Product family a license belongs to.
///
/// Declaration order is the order categories are scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseCategory {
    Enterprise,
    Design,
    Development,
    Security,
    Cloud,
}

impl LicenseCategory {
    /// All categories in scan order.
    pub const ALL: [LicenseCategory; 5] = [
        Self::Enterprise,
        Self::Design,
        Self::Development,
        Self::Security,
        Self::Cloud,
    ];

    /// License product names in this category, in scan order.
    pub fn licenses(&self) -> &'static [&'static str] {
        match self {
            Self::Enterprise => &[
                "Microsoft 365",
                "Windows Server",
                "SQL Server",
                "Oracle Database",
                "SAP ERP",
            ],
            Self::Design => &[
                "Adobe Creative Cloud",
                "AutoCAD",
                "Maya",
                "3ds Max",
                "Solidworks",
            ],
            Self::Development => &[
                "Visual Studio",
                "IntelliJ IDEA",
                "JetBrains Suite",
                "Unity Pro",
                "Unreal Engine",
            ],
            Self::Security => &["Norton", "McAfee", "Kaspersky", "Bitdefender", "Symantec"],
            Self::Cloud => &[
                "AWS",
                "Microsoft Azure",
                "Google Cloud",
                "IBM Cloud",
                "Oracle Cloud",
            ],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Enterprise => "Enterprise",
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Security => "Security",
            Self::Cloud => "Cloud",
        }
    }

    /// First license of this category mentioned in already-lowercased text.
    pub fn first_mentioned_in(&self, lower_text: &str) -> Option<&'static str> {
        self.licenses()
            .iter()
            .copied()
            .find(|license| lower_text.contains(&license.to_lowercase()))
    }

    /// Finds the category a license name belongs to.
    pub fn of(license: &str) -> Option<LicenseCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.licenses().contains(&license))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_lists_five_licenses() {
        for category in LicenseCategory::ALL {
            assert_eq!(category.licenses().len(), 5, "{:?}", category);
        }
    }

    #[test]
    fn first_mentioned_in_respects_list_order() {
        let text = "we run sql server on windows server";
        assert_eq!(
            LicenseCategory::Enterprise.first_mentioned_in(text),
            Some("Windows Server")
        );
    }

    #[test]
    fn first_mentioned_in_matches_inside_words() {
        assert_eq!(
            LicenseCategory::Design.first_mentioned_in("mayan artefacts"),
            Some("Maya")
        );
    }

    #[test]
    fn first_mentioned_in_returns_none_without_match() {
        assert_eq!(LicenseCategory::Security.first_mentioned_in("hello"), None);
    }

    #[test]
    fn of_finds_owning_category() {
        assert_eq!(LicenseCategory::of("Unity Pro"), Some(LicenseCategory::Development));
        assert_eq!(LicenseCategory::of("Oracle Cloud"), Some(LicenseCategory::Cloud));
        assert_eq!(LicenseCategory::of("Lotus Notes"), None);
    }
}
