use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::components::{AngleUnit, Vec2};
use crate::error::VecError;

/// Sheet loaded when no path is given.
pub const DEFAULT_SHEET: &str = "assets/vectors.yaml";

/// A vector with a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedVec {
    pub name: String,
    pub at: Vec2,
}

/// Named collection of vectors read from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSheet {
    pub name: String,
    /// Unit angles are reported in.
    #[serde(default)]
    pub unit: AngleUnit,
    pub vectors: Vec<NamedVec>,
}

impl VectorSheet {
    /// Loads a sheet from a YAML file.
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<VectorSheet, VecError> {
        let file_content = std::fs::read_to_string(file_path)?;
        Self::from_yaml(&file_content)
    }

    /// Parses a sheet, rejecting one without vectors.
    pub fn from_yaml(content: &str) -> Result<VectorSheet, VecError> {
        let sheet: VectorSheet = serde_yaml::from_str(content)?;
        if sheet.vectors.is_empty() {
            return Err(VecError::EmptySheet);
        }

        Ok(sheet)
    }

    /// Finds the first vector with the given name.
    pub fn get(&self, name: &str) -> Option<&Vec2> {
        self.vectors.iter().find(|v| v.name == name).map(|v| &v.at)
    }

    /// Sum of every vector in the sheet.
    pub fn total(&self) -> Vec2 {
        self.vectors.iter().fold(Vec2::ORIGIN, |acc, v| acc + v.at)
    }

    /// Lines describing every vector, the total, and the distance between
    /// neighbours.
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![format!("Sheet: {}", self.name)];

        for v in self.vectors.iter() {
            lines.push(format!("{}: {}", v.name, v.at.describe_in(self.unit)));
        }

        lines.push(format!("Total: {}", self.total()));

        for pair in self.vectors.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            lines.push(format!(
                "Distance {} -> {}: {:.6}",
                a.name,
                b.name,
                a.at.distance(&b.at)
            ));
        }

        lines
    }
}

/// Obtains all YAML filenames within a directory, sorted.
pub fn get_yaml_filenames(path: &Path) -> Result<Vec<PathBuf>, VecError> {
    let mut yaml_files = Vec::new();
    if !path.is_dir() {
        return Ok(yaml_files);
    }

    for entry in std::fs::read_dir(path)?.flatten() {
        let entry_path = entry.path();
        if entry_path.extension().is_some_and(|ext| ext == "yaml") {
            yaml_files.push(entry_path);
        }
    }

    yaml_files.sort();
    Ok(yaml_files)
}
