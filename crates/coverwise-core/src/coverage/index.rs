//! Cost Index Store
//!
//! Reference construction cost indices for a single market. Each category
//! carries an annual series of index points relative to its first year
//! (100.0). The reference table is built once per process and shared.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether a category tracks materials or labor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostClass {
    Material,
    Labor,
}

impl CostClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Labor => "labor",
        }
    }
}

impl std::fmt::Display for CostClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One year of a cost category's index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyIndex {
    pub year: i32,
    /// Index points relative to the category's first year
    pub value: f64,
    /// Percent change vs the prior year (informational)
    pub percent_change: f64,
}

/// A single cost driver, e.g. "Lumber & Wood Products"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub name: String,
    pub class: CostClass,
    pub icon: String,
    /// Ordered by year, one entry per year
    pub series: Vec<YearlyIndex>,
}

impl CostCategory {
    /// Index value for a year, if the series covers it
    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.series.iter().find(|p| p.year == year).map(|p| p.value)
    }

    /// First word of the name, used for compact chart labels
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Read-only material and labor indices for one market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostIndexStore {
    /// Market the indices describe, e.g. "Chicago metro area"
    pub market: String,
    pub materials: Vec<CostCategory>,
    pub labor: Vec<CostCategory>,
}

static REFERENCE: OnceLock<CostIndexStore> = OnceLock::new();

impl CostIndexStore {
    /// Build a store from custom categories, checking the series invariants
    pub fn new(
        market: impl Into<String>,
        materials: Vec<CostCategory>,
        labor: Vec<CostCategory>,
    ) -> Result<Self> {
        let store = Self {
            market: market.into(),
            materials,
            labor,
        };
        store.validate()?;
        Ok(store)
    }

    /// The shipped Chicago metro reference table
    pub fn reference() -> &'static CostIndexStore {
        REFERENCE.get_or_init(build_reference)
    }

    /// Categories of one class
    pub fn categories(&self, class: CostClass) -> &[CostCategory] {
        match class {
            CostClass::Material => &self.materials,
            CostClass::Labor => &self.labor,
        }
    }

    /// Materials followed by labor
    pub fn all_categories(&self) -> impl Iterator<Item = &CostCategory> {
        self.materials.iter().chain(self.labor.iter())
    }

    /// Sorted union of every year present in any category
    pub fn years(&self) -> Vec<i32> {
        self.all_categories()
            .flat_map(|c| c.series.iter().map(|p| p.year))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years().first().copied()
    }

    /// Latest indexed year; the engine treats this as the present
    pub fn latest_year(&self) -> Option<i32> {
        self.years().last().copied()
    }

    /// True when at least one category has a data point for `year`
    pub fn contains_year(&self, year: i32) -> bool {
        self.all_categories().any(|c| c.value_for(year).is_some())
    }

    /// Check class tags, year ordering/uniqueness and positive values
    pub fn validate(&self) -> Result<()> {
        for (class, categories) in [
            (CostClass::Material, &self.materials),
            (CostClass::Labor, &self.labor),
        ] {
            for category in categories {
                if category.class != class {
                    return Err(Error::InvalidData(format!(
                        "Category '{}' is tagged {} but listed under {}",
                        category.name, category.class, class
                    )));
                }
                if category.series.is_empty() {
                    return Err(Error::InvalidData(format!(
                        "Category '{}' has no index data",
                        category.name
                    )));
                }
                for pair in category.series.windows(2) {
                    if pair[1].year <= pair[0].year {
                        return Err(Error::InvalidData(format!(
                            "Category '{}' years must be unique and ascending ({} after {})",
                            category.name, pair[1].year, pair[0].year
                        )));
                    }
                }
                if let Some(bad) = category.series.iter().find(|p| p.value <= 0.0) {
                    return Err(Error::InvalidData(format!(
                        "Category '{}' has a non-positive index in {}",
                        category.name, bad.year
                    )));
                }
            }
        }
        Ok(())
    }
}

const REFERENCE_MARKET: &str = "Chicago metro area";

/// (name, icon, [(year, index, percent change)])
type SeedCategory = (&'static str, &'static str, &'static [(i32, f64, f64)]);

const MATERIAL_SEED: &[SeedCategory] = &[
    (
        "Lumber & Wood Products",
        "🪵",
        &[
            (2019, 100.0, 0.0),
            (2020, 108.5, 8.5),
            (2021, 172.3, 58.8),
            (2022, 145.2, -15.7),
            (2023, 128.6, -11.4),
            (2024, 135.4, 5.3),
            (2025, 142.8, 5.5),
        ],
    ),
    (
        "Brick & Masonry",
        "🧱",
        &[
            (2019, 100.0, 0.0),
            (2020, 103.2, 3.2),
            (2021, 112.8, 9.3),
            (2022, 124.5, 10.4),
            (2023, 133.7, 7.4),
            (2024, 141.2, 5.6),
            (2025, 148.9, 5.5),
        ],
    ),
    (
        "Roofing Materials",
        "🏠",
        &[
            (2019, 100.0, 0.0),
            (2020, 105.8, 5.8),
            (2021, 118.4, 11.9),
            (2022, 135.6, 14.5),
            (2023, 148.2, 9.3),
            (2024, 156.8, 5.8),
            (2025, 164.5, 4.9),
        ],
    ),
    (
        "Concrete & Cement",
        "🪨",
        &[
            (2019, 100.0, 0.0),
            (2020, 102.4, 2.4),
            (2021, 108.6, 6.1),
            (2022, 119.8, 10.3),
            (2023, 128.4, 7.2),
            (2024, 135.6, 5.6),
            (2025, 142.3, 4.9),
        ],
    ),
    (
        "Windows & Glass",
        "🪟",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.2, 4.2),
            (2021, 115.8, 11.1),
            (2022, 128.4, 10.9),
            (2023, 138.6, 7.9),
            (2024, 145.2, 4.8),
            (2025, 151.8, 4.5),
        ],
    ),
    (
        "Electrical Materials",
        "⚡",
        &[
            (2019, 100.0, 0.0),
            (2020, 106.8, 6.8),
            (2021, 125.4, 17.4),
            (2022, 142.8, 13.9),
            (2023, 152.6, 6.9),
            (2024, 159.4, 4.5),
            (2025, 166.2, 4.3),
        ],
    ),
    (
        "Plumbing Fixtures",
        "🚿",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.5, 4.5),
            (2021, 116.2, 11.2),
            (2022, 129.8, 11.7),
            (2023, 140.2, 8.0),
            (2024, 148.6, 6.0),
            (2025, 155.8, 4.8),
        ],
    ),
    (
        "HVAC Equipment",
        "❄️",
        &[
            (2019, 100.0, 0.0),
            (2020, 103.8, 3.8),
            (2021, 112.4, 8.3),
            (2022, 125.6, 11.7),
            (2023, 136.8, 8.9),
            (2024, 145.2, 6.1),
            (2025, 152.4, 5.0),
        ],
    ),
];

const LABOR_SEED: &[SeedCategory] = &[
    (
        "General Construction Workers",
        "👷",
        &[
            (2019, 100.0, 0.0),
            (2020, 103.2, 3.2),
            (2021, 108.8, 5.4),
            (2022, 116.4, 7.0),
            (2023, 124.8, 7.2),
            (2024, 132.6, 6.3),
            (2025, 139.8, 5.4),
        ],
    ),
    (
        "Electricians",
        "🔌",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.5, 4.5),
            (2021, 112.6, 7.8),
            (2022, 122.8, 9.1),
            (2023, 133.4, 8.6),
            (2024, 143.2, 7.3),
            (2025, 152.6, 6.6),
        ],
    ),
    (
        "Plumbers",
        "🔧",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.8, 4.8),
            (2021, 113.2, 8.0),
            (2022, 124.6, 10.1),
            (2023, 135.8, 9.0),
            (2024, 146.2, 7.7),
            (2025, 156.4, 7.0),
        ],
    ),
    (
        "HVAC Technicians",
        "🌡️",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.2, 4.2),
            (2021, 111.8, 7.3),
            (2022, 121.4, 8.6),
            (2023, 131.6, 8.4),
            (2024, 141.2, 7.3),
            (2025, 150.4, 6.5),
        ],
    ),
    (
        "Roofers",
        "🏗️",
        &[
            (2019, 100.0, 0.0),
            (2020, 105.2, 5.2),
            (2021, 114.8, 9.1),
            (2022, 126.4, 10.1),
            (2023, 138.2, 9.3),
            (2024, 149.6, 8.2),
            (2025, 160.8, 7.5),
        ],
    ),
    (
        "Carpenters",
        "🪚",
        &[
            (2019, 100.0, 0.0),
            (2020, 103.8, 3.8),
            (2021, 110.6, 6.6),
            (2022, 119.2, 7.8),
            (2023, 128.4, 7.7),
            (2024, 137.2, 6.9),
            (2025, 145.6, 6.1),
        ],
    ),
    (
        "Painters",
        "🎨",
        &[
            (2019, 100.0, 0.0),
            (2020, 102.8, 2.8),
            (2021, 108.4, 5.4),
            (2022, 115.2, 6.3),
            (2023, 122.6, 6.4),
            (2024, 129.8, 5.9),
            (2025, 136.4, 5.1),
        ],
    ),
    (
        "Masons",
        "🧱",
        &[
            (2019, 100.0, 0.0),
            (2020, 104.6, 4.6),
            (2021, 112.8, 7.8),
            (2022, 123.2, 9.2),
            (2023, 134.6, 9.3),
            (2024, 145.4, 8.0),
            (2025, 155.8, 7.2),
        ],
    ),
];

fn build_reference() -> CostIndexStore {
    CostIndexStore {
        market: REFERENCE_MARKET.to_string(),
        materials: seed_categories(MATERIAL_SEED, CostClass::Material),
        labor: seed_categories(LABOR_SEED, CostClass::Labor),
    }
}

fn seed_categories(seed: &[SeedCategory], class: CostClass) -> Vec<CostCategory> {
    seed.iter()
        .map(|(name, icon, points)| CostCategory {
            name: name.to_string(),
            class,
            icon: icon.to_string(),
            series: points
                .iter()
                .map(|&(year, value, percent_change)| YearlyIndex {
                    year,
                    value,
                    percent_change,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_store_shape() {
        let store = CostIndexStore::reference();
        assert_eq!(store.market, "Chicago metro area");
        assert_eq!(store.materials.len(), 8);
        assert_eq!(store.labor.len(), 8);
        assert!(store.all_categories().all(|c| c.series.len() == 7));
        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_reference_store_years() {
        let store = CostIndexStore::reference();
        assert_eq!(store.years(), vec![2019, 2020, 2021, 2022, 2023, 2024, 2025]);
        assert_eq!(store.first_year(), Some(2019));
        assert_eq!(store.latest_year(), Some(2025));
        assert!(store.contains_year(2022));
        assert!(!store.contains_year(2018));
    }

    #[test]
    fn test_baseline_is_one_hundred() {
        let store = CostIndexStore::reference();
        for category in store.all_categories() {
            assert_eq!(category.series[0].value, 100.0, "{}", category.name);
        }
    }

    #[test]
    fn test_reference_is_shared() {
        let a = CostIndexStore::reference() as *const CostIndexStore;
        let b = CostIndexStore::reference() as *const CostIndexStore;
        assert_eq!(a, b);
    }

    #[test]
    fn test_value_for_and_short_name() {
        let store = CostIndexStore::reference();
        let lumber = &store.materials[0];
        assert_eq!(lumber.value_for(2021), Some(172.3));
        assert_eq!(lumber.value_for(2030), None);
        assert_eq!(lumber.short_name(), "Lumber");
    }

    fn category(name: &str, class: CostClass, points: &[(i32, f64)]) -> CostCategory {
        CostCategory {
            name: name.to_string(),
            class,
            icon: String::new(),
            series: points
                .iter()
                .map(|&(year, value)| YearlyIndex {
                    year,
                    value,
                    percent_change: 0.0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_new_rejects_duplicate_years() {
        let result = CostIndexStore::new(
            "Test",
            vec![category(
                "Steel",
                CostClass::Material,
                &[(2020, 100.0), (2020, 110.0)],
            )],
            vec![],
        );
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_new_rejects_misfiled_class() {
        let result = CostIndexStore::new(
            "Test",
            vec![category("Roofers", CostClass::Labor, &[(2020, 100.0)])],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_year_range() {
        let store = CostIndexStore::new(
            "Test",
            vec![category(
                "Steel",
                CostClass::Material,
                &[(2010, 100.0), (2011, 104.0), (2012, 109.0)],
            )],
            vec![category(
                "Welders",
                CostClass::Labor,
                &[(2010, 100.0), (2011, 102.0), (2012, 105.0)],
            )],
        )
        .unwrap();

        assert_eq!(store.first_year(), Some(2010));
        assert_eq!(store.latest_year(), Some(2012));
    }
}
