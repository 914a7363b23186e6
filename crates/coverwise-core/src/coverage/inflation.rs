//! Inflation Aggregator
//!
//! Percentage changes across cost categories. The engine only uses the
//! point-to-point `average_inflation`; the combined series and breakdowns
//! feed charts and reports.

use serde::{Deserialize, Serialize};

use super::index::{CostCategory, CostClass, CostIndexStore};

/// Average index points of each class for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedIndexPoint {
    pub year: i32,
    pub materials_index_avg: f64,
    pub labor_index_avg: f64,
    /// Mean of the materials and labor averages
    pub combined_index_avg: f64,
}

/// Change of a single category between two years
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChange {
    pub name: String,
    pub short_name: String,
    pub icon: String,
    pub class: CostClass,
    /// Percent; 0 when either endpoint is missing
    pub change_pct: f64,
}

/// Change of the averaged series between a baseline and the latest year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub from_year: i32,
    pub to_year: i32,
    pub materials_change: f64,
    pub labor_change: f64,
    pub combined_change: f64,
}

fn percent_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}

/// Mean percent change from `from_year` to `to_year`.
///
/// Categories lacking either endpoint are left out of the average rather
/// than counted as zero. Returns 0 when no category has both points.
pub fn average_inflation(categories: &[CostCategory], from_year: i32, to_year: i32) -> f64 {
    let changes: Vec<f64> = categories
        .iter()
        .filter_map(|c| match (c.value_for(from_year), c.value_for(to_year)) {
            (Some(from), Some(to)) => Some(percent_change(from, to)),
            _ => None,
        })
        .collect();

    if changes.is_empty() {
        return 0.0;
    }
    changes.iter().sum::<f64>() / changes.len() as f64
}

/// Mean index value of the categories that have a point in `year`
fn mean_index(categories: &[CostCategory], year: i32) -> f64 {
    let values: Vec<f64> = categories.iter().filter_map(|c| c.value_for(year)).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-year materials, labor and combined averages across the whole store
pub fn combined_series(store: &CostIndexStore) -> Vec<CombinedIndexPoint> {
    store
        .years()
        .into_iter()
        .map(|year| {
            let materials = mean_index(&store.materials, year);
            let labor = mean_index(&store.labor, year);
            CombinedIndexPoint {
                year,
                materials_index_avg: materials,
                labor_index_avg: labor,
                combined_index_avg: (materials + labor) / 2.0,
            }
        })
        .collect()
}

/// Combined series restricted to `from_year` onward
pub fn combined_series_from(store: &CostIndexStore, from_year: i32) -> Vec<CombinedIndexPoint> {
    combined_series(store)
        .into_iter()
        .filter(|p| p.year >= from_year)
        .collect()
}

/// Change of each category from `from_year` to `to_year`, in store order
pub fn category_breakdown(
    categories: &[CostCategory],
    from_year: i32,
    to_year: i32,
) -> Vec<CategoryChange> {
    categories
        .iter()
        .map(|c| {
            let change_pct = match (c.value_for(from_year), c.value_for(to_year)) {
                (Some(from), Some(to)) => percent_change(from, to),
                _ => 0.0,
            };
            CategoryChange {
                name: c.name.clone(),
                short_name: c.short_name().to_string(),
                icon: c.icon.clone(),
                class: c.class,
                change_pct,
            }
        })
        .collect()
}

/// Change of the averaged series from `baseline_year` (or the first point
/// when the baseline is not in the series) to the last point
pub fn series_summary(series: &[CombinedIndexPoint], baseline_year: i32) -> Option<SeriesSummary> {
    let latest = series.last()?;
    let baseline = series
        .iter()
        .find(|p| p.year == baseline_year)
        .or_else(|| series.first())?;

    Some(SeriesSummary {
        from_year: baseline.year,
        to_year: latest.year,
        materials_change: percent_change(baseline.materials_index_avg, latest.materials_index_avg),
        labor_change: percent_change(baseline.labor_index_avg, latest.labor_index_avg),
        combined_change: percent_change(baseline.combined_index_avg, latest.combined_index_avg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::index::YearlyIndex;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
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
    fn test_average_inflation_reference_materials() {
        let store = CostIndexStore::reference();
        let pct = average_inflation(&store.materials, 2019, 2025);
        assert!(approx(pct, 53.0875), "got {}", pct);
    }

    #[test]
    fn test_average_inflation_reference_labor() {
        let store = CostIndexStore::reference();
        let pct = average_inflation(&store.labor, 2019, 2025);
        assert!(approx(pct, 49.725), "got {}", pct);
    }

    #[test]
    fn test_average_inflation_same_year_is_zero() {
        let store = CostIndexStore::reference();
        assert_eq!(average_inflation(&store.materials, 2022, 2022), 0.0);
    }

    #[test]
    fn test_average_inflation_excludes_missing_endpoints() {
        let categories = vec![
            category("A", CostClass::Material, &[(2020, 100.0), (2021, 110.0)]),
            // No 2021 point: excluded, not counted as zero
            category("B", CostClass::Material, &[(2020, 100.0)]),
            category("C", CostClass::Material, &[(2020, 100.0), (2021, 130.0)]),
        ];
        assert!(approx(average_inflation(&categories, 2020, 2021), 20.0));
    }

    #[test]
    fn test_average_inflation_no_data_is_zero() {
        let store = CostIndexStore::reference();
        assert_eq!(average_inflation(&store.labor, 2015, 2025), 0.0);
        assert_eq!(average_inflation(&[], 2019, 2025), 0.0);
    }

    #[test]
    fn test_average_inflation_can_be_negative() {
        let store = CostIndexStore::reference();
        // Lumber fell after the 2021 spike
        let lumber = &store.materials[..1];
        assert!(average_inflation(lumber, 2021, 2023) < 0.0);
    }

    #[test]
    fn test_combined_series_reference() {
        let store = CostIndexStore::reference();
        let series = combined_series(store);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].year, 2019);
        assert!(approx(series[0].materials_index_avg, 100.0));
        assert!(approx(series[0].labor_index_avg, 100.0));
        assert!(approx(series[0].combined_index_avg, 100.0));

        let last = series.last().unwrap();
        assert_eq!(last.year, 2025);
        assert!(approx(last.materials_index_avg, 153.0875));
        assert!(approx(last.labor_index_avg, 149.725));
        assert!(approx(
            last.combined_index_avg,
            (153.0875 + 149.725) / 2.0
        ));
    }

    #[test]
    fn test_combined_series_sparse_year_averages_present_categories() {
        let store = CostIndexStore::new(
            "Test market",
            vec![
                category("A", CostClass::Material, &[(2020, 100.0), (2021, 120.0)]),
                // No 2021 point
                category("B", CostClass::Material, &[(2020, 100.0)]),
            ],
            vec![category("L", CostClass::Labor, &[(2020, 100.0), (2021, 110.0)])],
        )
        .unwrap();

        let series = combined_series(&store);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].year, 2021);
        assert!(approx(series[1].materials_index_avg, 120.0));
        assert!(approx(series[1].combined_index_avg, 115.0));
    }

    #[test]
    fn test_combined_series_from_filters_years() {
        let series = combined_series_from(CostIndexStore::reference(), 2022);
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024, 2025]);
    }

    #[test]
    fn test_category_breakdown() {
        let store = CostIndexStore::reference();
        let breakdown = category_breakdown(&store.labor, 2019, 2025);

        assert_eq!(breakdown.len(), 8);
        assert_eq!(breakdown[0].name, "General Construction Workers");
        assert_eq!(breakdown[0].short_name, "General");
        assert_eq!(breakdown[0].class, CostClass::Labor);
        assert!(approx(breakdown[0].change_pct, 39.8));
    }

    #[test]
    fn test_category_breakdown_missing_year_is_zero() {
        let store = CostIndexStore::reference();
        let breakdown = category_breakdown(&store.materials, 2012, 2025);
        assert!(breakdown.iter().all(|c| c.change_pct == 0.0));
    }

    #[test]
    fn test_series_summary_uses_baseline_or_first() {
        let series = combined_series(CostIndexStore::reference());

        let from_2019 = series_summary(&series, 2019).unwrap();
        assert_eq!(from_2019.from_year, 2019);
        assert_eq!(from_2019.to_year, 2025);
        assert!(approx(from_2019.materials_change, 53.0875));

        let fallback = series_summary(&series, 1990).unwrap();
        assert_eq!(fallback.from_year, 2019);

        assert!(series_summary(&[], 2019).is_none());
    }
}
