//! Policy and home intake
//!
//! Manual-entry files (TOML or JSON) and the declarations-page upload path.
//! Uploads are not parsed: the document is acknowledged and the sample
//! input stands in for extracted values.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{
    CoolingType, ExteriorType, FinishQuality, GarageType, HeatingType, HomeDetails, PolicyData,
    RoofType,
};

/// A policy and the home it insures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub policy: PolicyData,
    pub home: HomeDetails,
}

impl AnalysisInput {
    /// Demo policy and home used when nothing else is provided
    pub fn sample() -> Self {
        Self {
            policy: PolicyData {
                policy_number: "SF-2019-847291".to_string(),
                policyholder_name: "Andrew Watson".to_string(),
                address: "1847 N Winchester Ave".to_string(),
                city: "Chicago".to_string(),
                state: "IL".to_string(),
                zip_code: "60622".to_string(),
                policy_start_date: NaiveDate::from_ymd_opt(2019, 11, 15).unwrap_or_default(),
                current_coverage: 650_000.0,
                annual_premium: 2_400.0,
                deductible: 2_500.0,
            },
            home: HomeDetails {
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
            },
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::InvalidData(format!("Invalid input: {}", e)))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidData(format!("Failed to serialize input: {}", e)))
    }

    /// Basic sanity checks on manually entered values
    pub fn validate(&self) -> Result<()> {
        if self.home.square_footage == 0 {
            return Err(Error::InvalidData("square_footage must be positive".into()));
        }
        if self.policy.current_coverage < 0.0 {
            return Err(Error::InvalidData("current_coverage cannot be negative".into()));
        }
        if self.home.year_built > self.policy.policy_year() + 1 {
            return Err(Error::InvalidData(format!(
                "year_built {} is after the policy start year {}",
                self.home.year_built,
                self.policy.policy_year()
            )));
        }
        Ok(())
    }
}

/// Load a manual-entry file, choosing the format by extension
pub fn load_input(path: &Path) -> Result<AnalysisInput> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let input = match extension.as_str() {
        "toml" => AnalysisInput::from_toml(&fs::read_to_string(path)?)?,
        "json" => AnalysisInput::from_json(&fs::read_to_string(path)?)?,
        _ => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };

    debug!(path = %path.display(), policy = %input.policy.policy_number, "Loaded input file");
    input.validate()?;
    Ok(input)
}

/// Accept a declarations page. No extraction is performed; the sample input
/// is returned in place of parsed values.
pub fn from_declarations_page(path: &Path) -> Result<AnalysisInput> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(acknowledge_upload(&name, metadata.len()))
}

/// Acknowledge an uploaded document by name and size
pub fn acknowledge_upload(file_name: &str, size: u64) -> AnalysisInput {
    info!(
        file = file_name,
        bytes = size,
        "Declarations page received; using sample values"
    );
    AnalysisInput::sample()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_sample_values() {
        let input = AnalysisInput::sample();
        assert_eq!(input.policy.policy_number, "SF-2019-847291");
        assert_eq!(input.policy.policy_year(), 2019);
        assert_eq!(input.policy.current_coverage, 650_000.0);
        assert_eq!(input.home.square_footage, 2800);
        assert_eq!(input.home.bathrooms, 2.5);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_load_toml_input() {
        let dir = TempDir::new().unwrap();
        let content = AnalysisInput::sample().to_toml().unwrap();
        let path = write_file(&dir, "home.toml", &content);

        let input = load_input(&path).unwrap();
        assert_eq!(input, AnalysisInput::sample());
    }

    #[test]
    fn test_load_json_input() {
        let dir = TempDir::new().unwrap();
        let content = serde_json::to_string_pretty(&AnalysisInput::sample()).unwrap();
        let path = write_file(&dir, "home.JSON", &content);

        let input = load_input(&path).unwrap();
        assert_eq!(input.home.exterior_type, ExteriorType::Brick);
    }

    #[test]
    fn test_unknown_roof_in_input_is_tolerated() {
        let json = serde_json::to_string(&AnalysisInput::sample())
            .unwrap()
            .replace("asphalt_shingle", "thatch");
        let input = AnalysisInput::from_json(&json).unwrap();
        assert_eq!(input.home.roof_type, RoofType::Unknown);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "home.yaml", "policy: {}");
        assert!(matches!(load_input(&path), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_input_rejected() {
        let dir = TempDir::new().unwrap();
        let mut sample = AnalysisInput::sample();
        sample.home.square_footage = 0;
        let path = write_file(&dir, "home.toml", &sample.to_toml().unwrap());
        assert!(matches!(load_input(&path), Err(Error::InvalidData(_))));

        let path = write_file(&dir, "broken.toml", "policy = 3");
        assert!(matches!(load_input(&path), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_declarations_page_returns_sample() {
        let mut file = Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4 placeholder").unwrap();

        let input = from_declarations_page(file.path()).unwrap();
        assert_eq!(input, AnalysisInput::sample());
    }

    #[test]
    fn test_declarations_page_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = from_declarations_page(&dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
