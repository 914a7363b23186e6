//! CSV export of cost index data
//!
//! Supports:
//! - Combined materials/labor series (chart data)
//! - Per-category change breakdown between two years

use csv::Writer;

use crate::coverage::{CategoryChange, CombinedIndexPoint};
use crate::error::{Error, Result};

/// Export the combined series as `year,materials,labor,combined`
pub fn export_series_csv(series: &[CombinedIndexPoint]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["year", "materials", "labor", "combined"])?;

    for point in series {
        writer.write_record([
            point.year.to_string(),
            format!("{:.1}", point.materials_index_avg),
            format!("{:.1}", point.labor_index_avg),
            format!("{:.1}", point.combined_index_avg),
        ])?;
    }

    finish(writer)
}

/// Export category changes as `class,name,change_pct`
pub fn export_breakdown_csv(changes: &[CategoryChange]) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["class", "name", "change_pct"])?;

    for change in changes {
        writer.write_record([
            change.class.as_str().to_string(),
            change.name.clone(),
            format!("{:.1}", change.change_pct),
        ])?;
    }

    finish(writer)
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{category_breakdown, combined_series, CostIndexStore};

    #[test]
    fn test_export_series_csv() {
        let series = combined_series(CostIndexStore::reference());
        let csv = export_series_csv(&series).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "year,materials,labor,combined");
        assert_eq!(lines[1], "2019,100.0,100.0,100.0");
        assert_eq!(lines.len(), 8);
        assert!(lines[7].starts_with("2025,153.1,149.7,"));
    }

    #[test]
    fn test_export_series_csv_empty() {
        let csv = export_series_csv(&[]).unwrap();
        assert_eq!(csv, "year,materials,labor,combined\n");
    }

    #[test]
    fn test_export_breakdown_csv() {
        let store = CostIndexStore::reference();
        let changes = category_breakdown(&store.materials, 2019, 2025);
        let csv = export_breakdown_csv(&changes).unwrap();

        assert!(csv.starts_with("class,name,change_pct\n"));
        assert!(csv.contains("material,Lumber & Wood Products,42.8\n"));
        assert_eq!(csv.lines().count(), 1 + changes.len());
    }
}
