//! Editor configuration
//!
//! Stored as YAML. Default location: `<config dir>/vecbuilder/config.yaml`.
//! Every field is optional; anything missing falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vecbuilder_core::synth::LineLayout;
use vecbuilder_core::MAX_ORF_GROUPS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// ORF groups in a fresh composition (1-3).
    pub initial_orf_groups: usize,
    pub sequence: SequenceConfig,
    pub map: MapConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_orf_groups: 3,
            sequence: SequenceConfig::default(),
            map: MapConfig::default(),
        }
    }
}

/// Layout of the sequence listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub bases_per_line: usize,
    pub bases_per_block: usize,
    /// Line width of the per-part listing in the detail view.
    pub detail_bases_per_line: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            bases_per_line: 50,
            bases_per_block: 10,
            detail_bases_per_line: 100,
        }
    }
}

impl SequenceConfig {
    pub fn line_layout(&self) -> LineLayout {
        LineLayout {
            bases_per_line: self.bases_per_line,
            bases_per_block: self.bases_per_block,
        }
    }
}

/// Geometry of the circular map, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub size: f64,
    pub ring_radius: f64,
    pub inner_radius: f64,
    pub label_radius: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size: 800.0,
            ring_radius: 200.0,
            inner_radius: 180.0,
            label_radius: 280.0,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("vecbuilder")
        .join("config.yaml")
}

/// Read the editor config at `path`.
///
/// A missing file gives the defaults. An unreadable or malformed file is
/// logged and also gives the defaults. Out-of-range values are replaced
/// field by field.
pub fn load_config(path: &Path) -> EditorConfig {
    if !path.exists() {
        log::debug!("no editor config at {:?}, using defaults", path);
        return EditorConfig::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("cannot read editor config {:?}: {}; using defaults", path, e);
            return EditorConfig::default();
        }
    };
    let mut config = match serde_yaml::from_str::<EditorConfig>(&contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("editor config {:?} is malformed: {}; using defaults", path, e);
            return EditorConfig::default();
        }
    };
    config.sanitize();

    log::info!(
        "editor config {:?}: {} ORF group(s), {} bp per sequence line",
        path,
        config.initial_orf_groups,
        config.sequence.bases_per_line
    );
    config
}

impl EditorConfig {
    /// Replace values a session cannot start with.
    fn sanitize(&mut self) {
        if !(1..=MAX_ORF_GROUPS).contains(&self.initial_orf_groups) {
            let fallback = EditorConfig::default().initial_orf_groups;
            log::warn!(
                "initial_orf_groups = {} is outside 1..={}; using {}",
                self.initial_orf_groups,
                MAX_ORF_GROUPS,
                fallback
            );
            self.initial_orf_groups = fallback;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.initial_orf_groups, 3);
        assert_eq!(config.sequence.line_layout(), LineLayout::default());
        assert_eq!(config.map.label_radius, 280.0);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "initial_orf_groups: 1\nsequence:\n  bases_per_line: 60\n";
        let config: EditorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.initial_orf_groups, 1);
        assert_eq!(config.sequence.bases_per_line, 60);
        assert_eq!(config.sequence.bases_per_block, 10);
        assert_eq!(config.map, MapConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml"));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "initial_orf_groups: [not, a, number]").unwrap();
        assert_eq!(load_config(&path), EditorConfig::default());
    }

    #[test]
    fn test_out_of_range_group_count_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        for bad in [0, 4, 12] {
            std::fs::write(
                &path,
                format!("initial_orf_groups: {}\nsequence:\n  bases_per_line: 60\n", bad),
            )
            .unwrap();
            let config = load_config(&path);
            assert_eq!(config.initial_orf_groups, 3);
            // The rest of the file is kept.
            assert_eq!(config.sequence.bases_per_line, 60);
        }

        std::fs::write(&path, "initial_orf_groups: 2\n").unwrap();
        assert_eq!(load_config(&path).initial_orf_groups, 2);
    }

    #[test]
    fn test_loaded_config_starts_a_session() {
        use crate::session::Session;
        use vecbuilder_components::Catalog;
        use vecbuilder_core::VectorTemplate;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "initial_orf_groups: 0\n").unwrap();
        let config = load_config(&path);
        let session =
            Session::new(&VectorTemplate::aav(), config.initial_orf_groups, Catalog::builtin())
                .unwrap();
        assert_eq!(session.composition().editable_group_count(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "map:\n  ring_radius: 150\n").unwrap();
        let config = load_config(&path);
        assert_eq!(config.map.ring_radius, 150.0);
        assert_eq!(config.initial_orf_groups, 3);
    }
}
