//! Coverage Analyzer
//!
//! Compares a policy's declared dwelling coverage to the rebuild cost of the
//! home at the policy's own start year and at the present year.

use tracing::{info, warn};

use super::estimator::RebuildCostEstimator;
use super::index::CostIndexStore;
use super::inflation::average_inflation;
use crate::config::EstimatorConfig;
use crate::error::{Error, Result};
use crate::models::{CoverageAnalysis, HomeDetails, PolicyData, QualityTier};

pub struct CoverageAnalyzer<'a> {
    estimator: RebuildCostEstimator<'a>,
}

impl<'a> CoverageAnalyzer<'a> {
    pub fn new(store: &'a CostIndexStore, config: &'a EstimatorConfig) -> Self {
        Self {
            estimator: RebuildCostEstimator::new(store, config),
        }
    }

    pub fn estimator(&self) -> &RebuildCostEstimator<'a> {
        &self.estimator
    }

    pub fn current_year(&self) -> i32 {
        self.estimator.current_year()
    }

    /// Analyze with year validation when `strict_years` is enabled
    pub fn analyze_checked(&self, policy: &PolicyData, home: &HomeDetails) -> Result<CoverageAnalysis> {
        if self.estimator.config().strict_years {
            let store = self.estimator.store();
            let year = policy.policy_year();
            if let (Some(first), Some(last)) = (store.first_year(), store.latest_year()) {
                if year < first || year > last {
                    return Err(Error::YearOutOfRange { year, first, last });
                }
            }
        }
        Ok(self.analyze(policy, home))
    }

    /// Analyze a policy against its home. Never fails: a policy year outside
    /// the indices produces an unescalated estimate and a warning.
    pub fn analyze(&self, policy: &PolicyData, home: &HomeDetails) -> CoverageAnalysis {
        let store = self.estimator.store();
        let config = self.estimator.config();
        let policy_year = policy.policy_year();
        let current_year = self.current_year();

        if !store.contains_year(policy_year) {
            warn!(
                policy = %policy.policy_number,
                policy_year,
                "Policy year has no index data; estimate will not be escalated"
            );
        }

        let original = self.estimator.breakdown(home, policy_year, policy_year);
        let rebuild_cost_original = original.total;
        let rebuild_cost_current = self.estimator.rebuild_cost(home, current_year, policy_year);

        let material_inflation = average_inflation(&store.materials, policy_year, current_year);
        let labor_inflation = average_inflation(&store.labor, policy_year, current_year);
        let total_inflation =
            material_inflation * config.material_weight + labor_inflation * config.labor_weight;

        let coverage = policy.current_coverage;
        let coverage_gap = rebuild_cost_current - coverage;
        let is_underinsured = coverage < rebuild_cost_current;
        let underinsured_percent = if is_underinsured {
            (rebuild_cost_current - coverage) / rebuild_cost_current * 100.0
        } else {
            0.0
        };
        let recommended_coverage = recommended_coverage(rebuild_cost_current, config);

        info!(
            policy = %policy.policy_number,
            policy_year,
            current_year,
            rebuild_cost_current,
            coverage_gap,
            is_underinsured,
            "Analyzed coverage"
        );

        CoverageAnalysis {
            original_coverage: coverage,
            rebuild_cost_original,
            rebuild_cost_current,
            material_inflation,
            labor_inflation,
            total_inflation,
            coverage_gap,
            recommended_coverage,
            coverage_buffer: config.coverage_buffer,
            is_underinsured,
            underinsured_percent,
            quality: original.quality,
            policy_year,
            current_year,
            market: store.market.clone(),
        }
    }

    /// Quality tier the estimator assigns to a home
    pub fn quality(&self, home: &HomeDetails) -> QualityTier {
        super::quality::score_quality(home, self.current_year())
    }
}

/// Current cost plus the buffer, rounded up to the configured increment
pub fn recommended_coverage(rebuild_cost: f64, config: &EstimatorConfig) -> f64 {
    let buffered = rebuild_cost * (1.0 + config.coverage_buffer);
    (buffered / config.rounding_increment).ceil() * config.rounding_increment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CoolingType, ExteriorType, FinishQuality, GarageType, HeatingType, RoofType,
    };
    use chrono::NaiveDate;

    fn policy(coverage: f64, start: NaiveDate) -> PolicyData {
        PolicyData {
            policy_number: "SF-2019-847291".to_string(),
            policyholder_name: "Andrew Watson".to_string(),
            address: "1847 N Winchester Ave".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip_code: "60622".to_string(),
            policy_start_date: start,
            current_coverage: coverage,
            annual_premium: 2_400.0,
            deductible: 2_500.0,
        }
    }

    fn scenario_policy() -> PolicyData {
        policy(650_000.0, NaiveDate::from_ymd_opt(2019, 11, 15).unwrap())
    }

    fn scenario_home() -> HomeDetails {
        HomeDetails {
            square_footage: 2800,
            year_built: 1920,
            stories: 2,
            bedrooms: 4,
            bathrooms: 2.5,
            garage_type: GarageType::Detached,
            garage_cars: 2,
            roof_type: RoofType::AsphaltShingle,
            roof_age: 12,
            exterior_type: ExteriorType::Brick,
            heating_type: HeatingType::ForcedAir,
            cooling_type: CoolingType::CentralAc,
            has_basement: true,
            basement_finished: true,
            has_pool: false,
            kitchen_quality: FinishQuality::Upgraded,
            bathroom_quality: FinishQuality::Standard,
        }
    }

    #[test]
    fn test_scenario_analysis() {
        let config = EstimatorConfig::default();
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let analysis = analyzer.analyze(&scenario_policy(), &scenario_home());

        assert_eq!(analysis.quality, QualityTier::Standard);
        assert_eq!(analysis.policy_year, 2019);
        assert_eq!(analysis.current_year, 2025);
        assert_eq!(analysis.rebuild_cost_original, 776_727.0);
        assert_eq!(analysis.rebuild_cost_current, 1_173_401.0);
        assert!((analysis.total_inflation - 51.07).abs() < 1e-9);
        assert_eq!(analysis.coverage_gap, 523_401.0);
        assert!(analysis.is_underinsured);
        assert!((analysis.underinsured_percent - 44.605).abs() < 0.01);
        assert_eq!(analysis.recommended_coverage, 1_300_000.0);
        assert_eq!(analysis.market, "Chicago metro area");
    }

    #[test]
    fn test_gap_sign_matches_underinsured_flag() {
        let config = EstimatorConfig::default();
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let start = NaiveDate::from_ymd_opt(2019, 11, 15).unwrap();

        for coverage in [0.0, 650_000.0, 1_173_400.0, 1_173_401.0, 2_000_000.0] {
            let analysis = analyzer.analyze(&policy(coverage, start), &scenario_home());
            assert_eq!(analysis.is_underinsured, analysis.coverage_gap > 0.0, "{}", coverage);
            if !analysis.is_underinsured {
                assert_eq!(analysis.underinsured_percent, 0.0);
            }
        }
    }

    #[test]
    fn test_surplus_is_negative_gap() {
        let config = EstimatorConfig::default();
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let start = NaiveDate::from_ymd_opt(2019, 11, 15).unwrap();
        let analysis = analyzer.analyze(&policy(1_500_000.0, start), &scenario_home());

        assert!(!analysis.is_underinsured);
        assert_eq!(analysis.coverage_gap, 1_173_401.0 - 1_500_000.0);
        assert_eq!(analysis.additional_coverage_needed(), 0.0);
        // Recommendation is produced regardless of status
        assert_eq!(analysis.recommended_coverage, 1_300_000.0);
    }

    #[test]
    fn test_recommended_coverage_bound() {
        let config = EstimatorConfig::default();
        for cost in [1.0, 9_090.0, 250_000.0, 776_727.0, 1_173_401.0, 3_333_333.0] {
            let recommended = recommended_coverage(cost, &config);
            assert!(recommended >= cost * 1.1);
            assert_eq!(recommended % 10_000.0, 0.0);
        }
    }

    #[test]
    fn test_recommended_coverage_custom_buffer() {
        let config = EstimatorConfig {
            coverage_buffer: 0.25,
            rounding_increment: 5_000.0,
            ..Default::default()
        };
        assert_eq!(recommended_coverage(100_000.0, &config), 125_000.0);
        assert_eq!(recommended_coverage(100_001.0, &config), 130_000.0);
    }

    #[test]
    fn test_current_year_policy_has_no_inflation() {
        let config = EstimatorConfig::default();
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let analysis = analyzer.analyze(&policy(650_000.0, start), &scenario_home());

        assert_eq!(analysis.total_inflation, 0.0);
        assert_eq!(analysis.rebuild_cost_original, analysis.rebuild_cost_current);
    }

    #[test]
    fn test_unindexed_year_degrades_without_strict() {
        let config = EstimatorConfig::default();
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let start = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();

        let analysis = analyzer
            .analyze_checked(&policy(650_000.0, start), &scenario_home())
            .unwrap();
        assert_eq!(analysis.total_inflation, 0.0);
        assert_eq!(analysis.rebuild_cost_current, analysis.rebuild_cost_original);
    }

    #[test]
    fn test_strict_years_rejects_unindexed_year() {
        let config = EstimatorConfig {
            strict_years: true,
            ..Default::default()
        };
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let start = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();

        let err = analyzer
            .analyze_checked(&policy(650_000.0, start), &scenario_home())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::YearOutOfRange {
                year: 2015,
                first: 2019,
                last: 2025
            }
        ));

        assert!(analyzer
            .analyze_checked(&scenario_policy(), &scenario_home())
            .is_ok());
    }

    #[test]
    fn test_pinned_current_year() {
        let config = EstimatorConfig {
            current_year: Some(2022),
            ..Default::default()
        };
        let analyzer = CoverageAnalyzer::new(CostIndexStore::reference(), &config);
        let analysis = analyzer.analyze(&scenario_policy(), &scenario_home());

        assert_eq!(analysis.current_year, 2022);
        assert!(analysis.rebuild_cost_current < 1_173_401.0);
        assert!(analysis.rebuild_cost_current > analysis.rebuild_cost_original);
    }
}
