//! Domain models for Coverwise

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An insurance policy as declared on the declarations page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyData {
    pub policy_number: String,
    pub policyholder_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// Start date; its year is the inflation baseline
    pub policy_start_date: NaiveDate,
    /// Dwelling coverage (Coverage A) in dollars
    pub current_coverage: f64,
    pub annual_premium: f64,
    pub deductible: f64,
}

impl PolicyData {
    /// Year the policy was written
    pub fn policy_year(&self) -> i32 {
        self.policy_start_date.year()
    }

    /// Single-line mailing address
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip_code
        )
    }
}

/// Physical attributes of the insured structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeDetails {
    pub square_footage: u32,
    pub year_built: i32,
    pub stories: u32,
    pub bedrooms: u32,
    /// Half baths count as 0.5
    pub bathrooms: f64,
    pub garage_type: GarageType,
    /// Garage capacity in cars (ignored when there is no garage)
    pub garage_cars: u32,
    pub roof_type: RoofType,
    pub roof_age: u32,
    pub exterior_type: ExteriorType,
    pub heating_type: HeatingType,
    pub cooling_type: CoolingType,
    pub has_basement: bool,
    pub basement_finished: bool,
    pub has_pool: bool,
    pub kitchen_quality: FinishQuality,
    pub bathroom_quality: FinishQuality,
}

/// Garage configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarageType {
    None,
    Attached,
    Detached,
}

impl GarageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Attached => "attached",
            Self::Detached => "detached",
        }
    }
}

impl std::str::FromStr for GarageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "attached" => Ok(Self::Attached),
            "detached" => Ok(Self::Detached),
            _ => Err(format!("Unknown garage type: {}", s)),
        }
    }
}

impl std::fmt::Display for GarageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Roof covering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    AsphaltShingle,
    Metal,
    Tile,
    Slate,
    Flat,
    /// Anything not in the table; priced and scored neutrally
    #[serde(other)]
    Unknown,
}

impl RoofType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsphaltShingle => "asphalt_shingle",
            Self::Metal => "metal",
            Self::Tile => "tile",
            Self::Slate => "slate",
            Self::Flat => "flat",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::AsphaltShingle => "Asphalt Shingle",
            Self::Metal => "Metal",
            Self::Tile => "Tile",
            Self::Slate => "Slate",
            Self::Flat => "Flat",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::str::FromStr for RoofType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asphalt_shingle" | "asphalt" => Ok(Self::AsphaltShingle),
            "metal" => Ok(Self::Metal),
            "tile" => Ok(Self::Tile),
            "slate" => Ok(Self::Slate),
            "flat" => Ok(Self::Flat),
            _ => Err(format!("Unknown roof type: {}", s)),
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exterior cladding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExteriorType {
    Brick,
    Vinyl,
    Wood,
    Stucco,
    FiberCement,
    /// Anything not in the table; priced and scored neutrally
    #[serde(other)]
    Unknown,
}

impl ExteriorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brick => "brick",
            Self::Vinyl => "vinyl",
            Self::Wood => "wood",
            Self::Stucco => "stucco",
            Self::FiberCement => "fiber_cement",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brick => "Brick",
            Self::Vinyl => "Vinyl Siding",
            Self::Wood => "Wood Siding",
            Self::Stucco => "Stucco",
            Self::FiberCement => "Fiber Cement",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::str::FromStr for ExteriorType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brick" => Ok(Self::Brick),
            "vinyl" => Ok(Self::Vinyl),
            "wood" => Ok(Self::Wood),
            "stucco" => Ok(Self::Stucco),
            "fiber_cement" | "fibercement" => Ok(Self::FiberCement),
            _ => Err(format!("Unknown exterior type: {}", s)),
        }
    }
}

impl std::fmt::Display for ExteriorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary heating system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingType {
    ForcedAir,
    Radiant,
    HeatPump,
    Boiler,
}

impl HeatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForcedAir => "forced_air",
            Self::Radiant => "radiant",
            Self::HeatPump => "heat_pump",
            Self::Boiler => "boiler",
        }
    }
}

impl std::str::FromStr for HeatingType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forced_air" => Ok(Self::ForcedAir),
            "radiant" => Ok(Self::Radiant),
            "heat_pump" => Ok(Self::HeatPump),
            "boiler" => Ok(Self::Boiler),
            _ => Err(format!("Unknown heating type: {}", s)),
        }
    }
}

/// Cooling system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoolingType {
    CentralAc,
    WindowUnits,
    None,
}

impl CoolingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CentralAc => "central_ac",
            Self::WindowUnits => "window_units",
            Self::None => "none",
        }
    }
}

impl std::str::FromStr for CoolingType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "central_ac" => Ok(Self::CentralAc),
            "window_units" => Ok(Self::WindowUnits),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown cooling type: {}", s)),
        }
    }
}

/// Finish level of a kitchen or bathroom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishQuality {
    Standard,
    Upgraded,
    Premium,
    /// Anything not in the table; priced neutrally, scored as standard
    #[serde(other)]
    Unknown,
}

impl FinishQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Upgraded => "upgraded",
            Self::Premium => "premium",
            Self::Unknown => "unknown",
        }
    }
}

impl std::str::FromStr for FinishQuality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "upgraded" => Ok(Self::Upgraded),
            "premium" => Ok(Self::Premium),
            _ => Err(format!("Unknown finish quality: {}", s)),
        }
    }
}

impl std::fmt::Display for FinishQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Construction grade derived from home attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Economy,
    Standard,
    Premium,
    Luxury,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Luxury => "luxury",
        }
    }

    /// Tier for a summed quality score. Lower bounds are inclusive.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 12 => Self::Luxury,
            s if s >= 8 => Self::Premium,
            s if s >= 5 => Self::Standard,
            _ => Self::Economy,
        }
    }

    /// Rebuild cost per square foot in baseline-year dollars
    pub fn base_cost_per_sqft(&self) -> f64 {
        match self {
            Self::Economy => 125.0,
            Self::Standard => 175.0,
            Self::Premium => 250.0,
            Self::Luxury => 350.0,
        }
    }
}

impl std::str::FromStr for QualityTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("Unknown quality tier: {}", s)),
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of comparing declared coverage to the current rebuild cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageAnalysis {
    pub original_coverage: f64,
    /// Rebuild cost at the policy's own start year, no escalation
    pub rebuild_cost_original: f64,
    /// Rebuild cost escalated to the current year
    pub rebuild_cost_current: f64,
    /// Percent
    pub material_inflation: f64,
    /// Percent
    pub labor_inflation: f64,
    /// Weighted blend of material and labor inflation, percent
    pub total_inflation: f64,
    /// Current rebuild cost minus coverage; negative is a surplus
    pub coverage_gap: f64,
    pub recommended_coverage: f64,
    /// Buffer included in the recommendation (0.10 = 10%)
    pub coverage_buffer: f64,
    pub is_underinsured: bool,
    /// Share of the rebuild cost left uncovered, 0 when adequately insured
    pub underinsured_percent: f64,
    pub quality: QualityTier,
    pub policy_year: i32,
    pub current_year: i32,
    /// Cost market the indices describe
    pub market: String,
}

impl CoverageAnalysis {
    /// Coverage as a percentage of the current rebuild cost
    pub fn coverage_ratio(&self) -> f64 {
        if self.rebuild_cost_current <= 0.0 {
            return 0.0;
        }
        self.original_coverage / self.rebuild_cost_current * 100.0
    }

    /// Coverage increase needed to reach the recommendation
    pub fn additional_coverage_needed(&self) -> f64 {
        (self.recommended_coverage - self.original_coverage).max(0.0)
    }

    /// Whole years from the policy year to the present, never negative
    pub fn years_since_policy(&self) -> i32 {
        self.current_year.saturating_sub(self.policy_year).max(0)
    }
}
