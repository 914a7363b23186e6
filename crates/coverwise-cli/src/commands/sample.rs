//! Sample input command implementation

use anyhow::Result;
use coverwise_core::AnalysisInput;

pub fn cmd_sample(json: bool) -> Result<()> {
    print!("{}", render_sample(json)?);
    Ok(())
}

/// Sample manual-entry file contents
pub fn render_sample(json: bool) -> Result<String> {
    let sample = AnalysisInput::sample();
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&sample)?))
    } else {
        Ok(sample.to_toml()?)
    }
}
