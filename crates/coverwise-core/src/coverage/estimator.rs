//! Rebuild Cost Estimator
//!
//! Turns a home into a rebuild cost for an arbitrary target year:
//!
//! 1. Quality tier selects a base cost per square foot
//! 2. Roof, exterior, kitchen and bathroom multipliers apply in sequence
//! 3. Flat costs for basement, garage and pool are added
//! 4. Multi-story homes get a 5% surcharge per extra story
//! 5. Blended material/labor escalation from the baseline to the target year
//! 6. Rounded to whole dollars

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::index::CostIndexStore;
use super::inflation::average_inflation;
use super::quality::quality_score;
use crate::config::EstimatorConfig;
use crate::models::{
    ExteriorType, FinishQuality, GarageType, HomeDetails, QualityTier, RoofType,
};

/// Share of the footprint assumed finished-or-not for basement pricing
const BASEMENT_AREA_RATIO: f64 = 0.3;
const BASEMENT_FINISHED_PER_SQFT: f64 = 80.0;
const BASEMENT_UNFINISHED_PER_SQFT: f64 = 40.0;

const GARAGE_SQFT_PER_CAR: f64 = 250.0;
const GARAGE_COST_PER_SQFT: f64 = 75.0;

const POOL_COST: f64 = 45_000.0;

const STORY_SURCHARGE: f64 = 0.05;

pub fn roof_multiplier(roof: RoofType) -> f64 {
    match roof {
        RoofType::AsphaltShingle => 1.00,
        RoofType::Metal => 1.15,
        RoofType::Tile => 1.25,
        RoofType::Slate => 1.40,
        RoofType::Flat => 0.95,
        RoofType::Unknown => {
            warn!("Unknown roof type, using neutral multiplier");
            1.00
        }
    }
}

pub fn exterior_multiplier(exterior: ExteriorType) -> f64 {
    match exterior {
        ExteriorType::Vinyl => 0.95,
        ExteriorType::Wood => 1.05,
        ExteriorType::Brick => 1.20,
        ExteriorType::Stucco => 1.10,
        ExteriorType::FiberCement => 1.12,
        ExteriorType::Unknown => {
            warn!("Unknown exterior type, using neutral multiplier");
            1.00
        }
    }
}

pub fn kitchen_multiplier(quality: FinishQuality) -> f64 {
    match quality {
        FinishQuality::Standard => 1.00,
        FinishQuality::Upgraded => 1.08,
        FinishQuality::Premium => 1.18,
        FinishQuality::Unknown => {
            warn!("Unknown kitchen quality, using neutral multiplier");
            1.00
        }
    }
}

pub fn bathroom_multiplier(quality: FinishQuality) -> f64 {
    match quality {
        FinishQuality::Standard => 1.00,
        FinishQuality::Upgraded => 1.05,
        FinishQuality::Premium => 1.12,
        FinishQuality::Unknown => {
            warn!("Unknown bathroom quality, using neutral multiplier");
            1.00
        }
    }
}

/// Blended cost escalation between two years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub from_year: i32,
    pub to_year: i32,
    /// Percent
    pub material_pct: f64,
    /// Percent
    pub labor_pct: f64,
    /// Weighted blend, percent
    pub blended_pct: f64,
    /// Multiplier applied to the running cost
    pub factor: f64,
}

impl Escalation {
    fn none(from_year: i32, to_year: i32) -> Self {
        Self {
            from_year,
            to_year,
            material_pct: 0.0,
            labor_pct: 0.0,
            blended_pct: 0.0,
            factor: 1.0,
        }
    }
}

/// Every intermediate value of a rebuild cost estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebuildCostBreakdown {
    pub quality: QualityTier,
    pub quality_score: u32,
    pub square_footage: u32,
    pub base_cost_per_sqft: f64,
    pub base_cost: f64,
    pub roof_multiplier: f64,
    pub exterior_multiplier: f64,
    pub kitchen_multiplier: f64,
    pub bathroom_multiplier: f64,
    pub cost_after_multipliers: f64,
    pub basement_cost: f64,
    pub garage_cost: f64,
    pub pool_cost: f64,
    pub stories_factor: f64,
    /// Cost before escalation
    pub subtotal: f64,
    pub escalation: Escalation,
    /// Rounded to whole dollars
    pub total: f64,
}

/// Rebuild cost estimator over a cost index store
pub struct RebuildCostEstimator<'a> {
    store: &'a CostIndexStore,
    config: &'a EstimatorConfig,
}

impl<'a> RebuildCostEstimator<'a> {
    pub fn new(store: &'a CostIndexStore, config: &'a EstimatorConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &'a CostIndexStore {
        self.store
    }

    pub fn config(&self) -> &'a EstimatorConfig {
        self.config
    }

    /// The configured present year, else the latest indexed year
    pub fn current_year(&self) -> i32 {
        self.config
            .current_year
            .or_else(|| self.store.latest_year())
            .unwrap_or_else(|| {
                use chrono::Datelike;
                chrono::Utc::now().year()
            })
    }

    /// Blended escalation from `baseline_year` to `target_year`.
    ///
    /// No escalation when the target is not after the baseline.
    pub fn escalation(&self, baseline_year: i32, target_year: i32) -> Escalation {
        if target_year <= baseline_year {
            return Escalation::none(baseline_year, target_year);
        }

        let material_pct = average_inflation(&self.store.materials, baseline_year, target_year);
        let labor_pct = average_inflation(&self.store.labor, baseline_year, target_year);
        let blended = (material_pct / 100.0) * self.config.material_weight
            + (labor_pct / 100.0) * self.config.labor_weight;

        Escalation {
            from_year: baseline_year,
            to_year: target_year,
            material_pct,
            labor_pct,
            blended_pct: material_pct * self.config.material_weight
                + labor_pct * self.config.labor_weight,
            factor: 1.0 + blended,
        }
    }

    /// Step-by-step rebuild cost for `home` priced in `target_year`
    pub fn breakdown(
        &self,
        home: &HomeDetails,
        target_year: i32,
        baseline_year: i32,
    ) -> RebuildCostBreakdown {
        let score = quality_score(home, self.current_year());
        let quality = QualityTier::from_score(score);
        let base_cost_per_sqft = quality.base_cost_per_sqft();
        let base_cost = base_cost_per_sqft * home.square_footage as f64;

        let roof = roof_multiplier(home.roof_type);
        let exterior = exterior_multiplier(home.exterior_type);
        let kitchen = kitchen_multiplier(home.kitchen_quality);
        let bathroom = bathroom_multiplier(home.bathroom_quality);

        let mut cost = base_cost;
        cost *= roof;
        cost *= exterior;
        cost *= kitchen;
        cost *= bathroom;
        let cost_after_multipliers = cost;

        let basement_cost = if home.has_basement {
            let rate = if home.basement_finished {
                BASEMENT_FINISHED_PER_SQFT
            } else {
                BASEMENT_UNFINISHED_PER_SQFT
            };
            home.square_footage as f64 * BASEMENT_AREA_RATIO * rate
        } else {
            0.0
        };

        let garage_cost = if home.garage_type != GarageType::None {
            home.garage_cars as f64 * GARAGE_SQFT_PER_CAR * GARAGE_COST_PER_SQFT
        } else {
            0.0
        };

        let pool_cost = if home.has_pool { POOL_COST } else { 0.0 };

        cost += basement_cost;
        cost += garage_cost;
        cost += pool_cost;

        // Zero stories is treated as a single story
        let stories_factor = if home.stories > 1 {
            1.0 + (home.stories - 1) as f64 * STORY_SURCHARGE
        } else {
            1.0
        };
        cost *= stories_factor;
        let subtotal = cost;

        let escalation = self.escalation(baseline_year, target_year);
        cost *= escalation.factor;

        let total = cost.round();

        debug!(
            quality = %quality,
            score,
            target_year,
            baseline_year,
            escalation_pct = escalation.blended_pct,
            total,
            "Estimated rebuild cost"
        );

        RebuildCostBreakdown {
            quality,
            quality_score: score,
            square_footage: home.square_footage,
            base_cost_per_sqft,
            base_cost,
            roof_multiplier: roof,
            exterior_multiplier: exterior,
            kitchen_multiplier: kitchen,
            bathroom_multiplier: bathroom,
            cost_after_multipliers,
            basement_cost,
            garage_cost,
            pool_cost,
            stories_factor,
            subtotal,
            escalation,
            total,
        }
    }

    /// Rebuild cost in whole dollars
    pub fn rebuild_cost(&self, home: &HomeDetails, target_year: i32, baseline_year: i32) -> f64 {
        self.breakdown(home, target_year, baseline_year).total
    }
}
