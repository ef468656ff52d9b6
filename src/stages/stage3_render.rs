use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::io::{write_extraction_json, HumanReport};
use crate::models::TranscriptExtraction;

/// Configuration for Stage 3 rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to generate the JSON report
    pub generate_machine: bool,
    /// Whether to generate the human-readable report
    pub generate_human: bool,
    /// Line width for wrapped utterance text
    pub wrap_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            generate_machine: true,
            generate_human: false,
            wrap_width: 80,
        }
    }
}

/// Result of Stage 3 rendering
#[derive(Debug)]
pub struct RenderResult {
    /// Path to the JSON report (if generated)
    pub machine_path: Option<PathBuf>,
    /// Path to the text report (if generated)
    pub human_path: Option<PathBuf>,
}

/// Execute Stage 3: write `<date>.json` and optionally `<date>.txt` into `output_dir`
pub fn render_extraction(
    extraction: &TranscriptExtraction,
    output_dir: &Path,
    config: &RenderConfig,
) -> Result<RenderResult> {
    let mut result = RenderResult {
        machine_path: None,
        human_path: None,
    };

    if config.generate_machine {
        let path = output_dir.join(format!("{}.json", extraction.date));
        info!("Writing extraction to {:?}", path);
        write_extraction_json(extraction, &path)?;
        result.machine_path = Some(path);
    }

    if config.generate_human {
        let path = output_dir.join(format!("{}.txt", extraction.date));
        info!("Writing human report to {:?}", path);
        HumanReport::new(extraction, config.wrap_width).write_file(&path)?;
        result.human_path = Some(path);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert!(config.generate_machine);
        assert!(!config.generate_human);
        assert_eq!(config.wrap_width, 80);
    }

    #[test]
    fn test_render_writes_both_reports() {
        let dir = tempfile::tempdir().unwrap();
        let extraction = TranscriptExtraction {
            date: "2025-06-11".to_string(),
            session_date: None,
            segments: vec![],
            interactions: vec![],
        };
        let config = RenderConfig {
            generate_human: true,
            ..Default::default()
        };

        let result = render_extraction(&extraction, dir.path(), &config).unwrap();

        assert_eq!(result.machine_path, Some(dir.path().join("2025-06-11.json")));
        assert!(result.human_path.as_ref().is_some_and(|p| p.exists()));
    }
}
