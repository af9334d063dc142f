//! Package profiles: per-package multipliers, structural line items and
//! section titles.

use serde::{Deserialize, Serialize};

use crate::core::currency::{round_money, sanitize};

/// The investment package selected for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Furnished package, 1BR/2BR/3BR properties.
    Furnished,
    /// Unfurnished package 1, 1BR/2BR properties.
    Unfurnished1,
    /// Unfurnished package 2, 3BR/4BR properties.
    Unfurnished2,
}

/// Fixed characteristics of a package.
///
/// Multipliers are applied to the monthly rent to estimate gross revenue
/// and expenses. `furnishing_items` controls which optional cost lines
/// (stocking, smart lock, photos) appear in the investment itemization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageProfile {
    pub revenue_multiplier: f64,
    pub expense_multiplier: f64,
    pub furnishing_items: bool,
}

/// Result section a title is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Investment,
    Profit,
}

impl PackageKind {
    pub fn profile(self) -> PackageProfile {
        match self {
            PackageKind::Furnished => PackageProfile {
                revenue_multiplier: 1.58,
                expense_multiplier: 1.16,
                furnishing_items: true,
            },
            PackageKind::Unfurnished1 | PackageKind::Unfurnished2 => PackageProfile {
                revenue_multiplier: 2.3,
                expense_multiplier: 2.7,
                furnishing_items: false,
            },
        }
    }

    pub fn section_title(self, section: Section) -> &'static str {
        match (self, section) {
            (PackageKind::Furnished, Section::Investment) => {
                "FURNISHED PACKAGE (1BR/2BR/3BR) Investment"
            }
            (PackageKind::Furnished, Section::Profit) => {
                "FURNISHED PACKAGE (1BR/2BR/3BR) Profits/ROI"
            }
            (PackageKind::Unfurnished1, Section::Investment) => {
                "UNFURNISHED PACKAGE 1 (1BR/2BR) Investment"
            }
            (PackageKind::Unfurnished1, Section::Profit) => {
                "UNFURNISHED PACKAGE 1 (1BR/2BR) Profits/ROI"
            }
            (PackageKind::Unfurnished2, Section::Investment) => {
                "UNFURNISHED PACKAGE 2 (3BR/4BR) Investment"
            }
            (PackageKind::Unfurnished2, Section::Profit) => {
                "UNFURNISHED PACKAGE 2 (3BR/4BR) Profits/ROI"
            }
        }
    }
}

/// Monthly revenue/expense estimates derived from rent, source currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyEstimates {
    pub gross_revenue: f64,
    pub expenses: f64,
}

/// Estimates monthly gross revenue and expenses from the rent figure.
///
/// Total function: a non-finite rent is treated as 0.
pub fn derive_monthly_estimates(kind: PackageKind, rent: f64) -> MonthlyEstimates {
    let profile = kind.profile();
    let rent = sanitize(rent);
    MonthlyEstimates {
        gross_revenue: round_money(rent * profile.revenue_multiplier),
        expenses: round_money(rent * profile.expense_multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furnished_estimates() {
        let est = derive_monthly_estimates(PackageKind::Furnished, 2000.0);
        assert_eq!(est.gross_revenue, 3160.0);
        assert_eq!(est.expenses, 2320.0);
    }

    #[test]
    fn test_unfurnished_packages_share_multipliers() {
        let a = derive_monthly_estimates(PackageKind::Unfurnished1, 1500.0);
        let b = derive_monthly_estimates(PackageKind::Unfurnished2, 1500.0);
        assert_eq!(a, b);
        assert_eq!(a.gross_revenue, 3450.0);
        assert_eq!(a.expenses, 4050.0);
    }

    #[test]
    fn test_non_finite_rent_is_zeroed() {
        let est = derive_monthly_estimates(PackageKind::Furnished, f64::NAN);
        assert_eq!(est.gross_revenue, 0.0);
        assert_eq!(est.expenses, 0.0);
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(
            PackageKind::Furnished.section_title(Section::Investment),
            "FURNISHED PACKAGE (1BR/2BR/3BR) Investment"
        );
        assert_eq!(
            PackageKind::Unfurnished2.section_title(Section::Profit),
            "UNFURNISHED PACKAGE 2 (3BR/4BR) Profits/ROI"
        );
    }

    #[test]
    fn test_package_kind_deserialization() {
        let kind: PackageKind = serde_yaml::from_str("unfurnished1").unwrap();
        assert_eq!(kind, PackageKind::Unfurnished1);
    }
}
