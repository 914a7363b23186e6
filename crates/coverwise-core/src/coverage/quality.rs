//! Home Quality Scorer
//!
//! Deterministic point accumulation over age, finishes, cladding and roof.
//! Scores range 0-13 and map to a tier via [`QualityTier::from_score`].

use tracing::debug;

use crate::models::{ExteriorType, FinishQuality, HomeDetails, QualityTier, RoofType};

fn age_points(age: i32) -> u32 {
    match age {
        a if a < 5 => 3,
        a if a < 15 => 2,
        a if a < 30 => 1,
        _ => 0,
    }
}

fn finish_points(quality: FinishQuality) -> u32 {
    match quality {
        FinishQuality::Premium => 3,
        FinishQuality::Upgraded => 2,
        FinishQuality::Standard | FinishQuality::Unknown => 1,
    }
}

fn exterior_points(exterior: ExteriorType) -> u32 {
    match exterior {
        ExteriorType::Brick | ExteriorType::FiberCement => 2,
        ExteriorType::Stucco | ExteriorType::Wood => 1,
        ExteriorType::Vinyl | ExteriorType::Unknown => 0,
    }
}

fn roof_points(roof: RoofType) -> u32 {
    match roof {
        RoofType::Slate | RoofType::Tile => 2,
        RoofType::Metal => 1,
        RoofType::AsphaltShingle | RoofType::Flat | RoofType::Unknown => 0,
    }
}

/// Raw quality points for a home, with age measured against `current_year`
pub fn quality_score(home: &HomeDetails, current_year: i32) -> u32 {
    let age = current_year.saturating_sub(home.year_built);
    age_points(age)
        + finish_points(home.kitchen_quality)
        + finish_points(home.bathroom_quality)
        + exterior_points(home.exterior_type)
        + roof_points(home.roof_type)
}

/// Quality tier for a home
pub fn score_quality(home: &HomeDetails, current_year: i32) -> QualityTier {
    let score = quality_score(home, current_year);
    let tier = QualityTier::from_score(score);
    debug!(score, tier = %tier, "Scored home quality");
    tier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoolingType, GarageType, HeatingType};

    fn base_home() -> HomeDetails {
        HomeDetails {
            square_footage: 2000,
            year_built: 1950,
            stories: 1,
            bedrooms: 3,
            bathrooms: 2.0,
            garage_type: GarageType::None,
            garage_cars: 0,
            roof_type: RoofType::AsphaltShingle,
            roof_age: 10,
            exterior_type: ExteriorType::Vinyl,
            heating_type: HeatingType::ForcedAir,
            cooling_type: CoolingType::CentralAc,
            has_basement: false,
            basement_finished: false,
            has_pool: false,
            kitchen_quality: FinishQuality::Standard,
            bathroom_quality: FinishQuality::Standard,
        }
    }

    #[test]
    fn test_minimum_score_is_economy() {
        // Old, vinyl, asphalt, standard finishes: 0 + 1 + 1 + 0 + 0
        let home = base_home();
        assert_eq!(quality_score(&home, 2025), 2);
        assert_eq!(score_quality(&home, 2025), QualityTier::Economy);
    }

    #[test]
    fn test_maximum_score_is_luxury() {
        let home = HomeDetails {
            year_built: 2023,
            kitchen_quality: FinishQuality::Premium,
            bathroom_quality: FinishQuality::Premium,
            exterior_type: ExteriorType::Brick,
            roof_type: RoofType::Slate,
            ..base_home()
        };
        assert_eq!(quality_score(&home, 2025), 13);
        assert_eq!(score_quality(&home, 2025), QualityTier::Luxury);
    }

    #[test]
    fn test_age_brackets() {
        let at = |built: i32| quality_score(&HomeDetails { year_built: built, ..base_home() }, 2025);
        // Finishes contribute 2 in the base home
        assert_eq!(at(2021), 5); // age 4
        assert_eq!(at(2020), 4); // age 5
        assert_eq!(at(2011), 4); // age 14
        assert_eq!(at(2010), 3); // age 15
        assert_eq!(at(1996), 3); // age 29
        assert_eq!(at(1995), 2); // age 30
    }

    #[test]
    fn test_ancient_year_built_earns_no_age_points() {
        let home = HomeDetails {
            year_built: i32::MIN,
            ..base_home()
        };
        assert_eq!(quality_score(&home, 2025), 2);
        assert_eq!(score_quality(&home, 2025), QualityTier::Economy);
    }

    #[test]
    fn test_exterior_and_roof_points() {
        let score = |exterior, roof| {
            quality_score(
                &HomeDetails {
                    exterior_type: exterior,
                    roof_type: roof,
                    ..base_home()
                },
                2025,
            )
        };
        assert_eq!(score(ExteriorType::FiberCement, RoofType::Tile), 6);
        assert_eq!(score(ExteriorType::Stucco, RoofType::Metal), 4);
        assert_eq!(score(ExteriorType::Wood, RoofType::Flat), 3);
        assert_eq!(score(ExteriorType::Unknown, RoofType::Unknown), 2);
    }

    #[test]
    fn test_unknown_finish_scores_as_standard() {
        let home = HomeDetails {
            kitchen_quality: FinishQuality::Unknown,
            bathroom_quality: FinishQuality::Unknown,
            ..base_home()
        };
        assert_eq!(quality_score(&home, 2025), quality_score(&base_home(), 2025));
    }

    #[test]
    fn test_scenario_home_lands_on_standard_boundary() {
        // 1920 brick, asphalt roof, upgraded kitchen, standard bath:
        // 0 + 2 + 1 + 2 + 0 = 5, the inclusive lower bound of standard
        let home = HomeDetails {
            year_built: 1920,
            exterior_type: ExteriorType::Brick,
            kitchen_quality: FinishQuality::Upgraded,
            ..base_home()
        };
        assert_eq!(quality_score(&home, 2025), 5);
        assert_eq!(score_quality(&home, 2025), QualityTier::Standard);
    }

    #[test]
    fn test_improving_one_attribute_never_lowers_tier() {
        let finishes = [
            FinishQuality::Standard,
            FinishQuality::Upgraded,
            FinishQuality::Premium,
        ];
        for pair in finishes.windows(2) {
            let lower = HomeDetails {
                kitchen_quality: pair[0],
                ..base_home()
            };
            let higher = HomeDetails {
                kitchen_quality: pair[1],
                ..base_home()
            };
            assert!(score_quality(&higher, 2025) >= score_quality(&lower, 2025));
        }

        let roofs = [RoofType::AsphaltShingle, RoofType::Metal, RoofType::Slate];
        for pair in roofs.windows(2) {
            let lower = HomeDetails {
                roof_type: pair[0],
                ..base_home()
            };
            let higher = HomeDetails {
                roof_type: pair[1],
                ..base_home()
            };
            assert!(quality_score(&higher, 2025) >= quality_score(&lower, 2025));
        }
    }
}
