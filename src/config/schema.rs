//! Configuration schema definitions.
//!
//! These structs map to the optional YAML profile passed with `--config`.
//! Every level is `#[serde(default)]`, so a profile only needs to name the
//! fields it changes; everything else keeps the PhenoAI defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound for any timeout, in seconds (one day).
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Root configuration for an installation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Interpreter program to run (auto-detected when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,

    /// Directory the interpreter runs in. Scripts run with `-c`, so this
    /// directory is on `sys.path` (useful for checking a source checkout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,

    /// Bounded wait for each import subprocess, in seconds.
    #[serde(default = "default_import_timeout")]
    pub import_timeout_secs: u64,

    /// The package under test.
    pub package: PackageConfig,

    /// The package's command-line entry point.
    pub cli: CliConfig,

    /// Third-party libraries the package relies on.
    pub dependencies: DependencyConfig,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            interpreter: None,
            working_dir: None,
            import_timeout_secs: default_import_timeout(),
            package: PackageConfig::default(),
            cli: CliConfig::default(),
            dependencies: DependencyConfig::default(),
        }
    }
}

fn default_import_timeout() -> u64 {
    60
}

fn default_cli_timeout() -> u64 {
    10
}

/// Identity of the package under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Human-readable name used in report lines.
    pub display_name: String,

    /// Top-level importable module.
    pub module: String,

    /// Distribution name used in install hints.
    pub pip_name: String,

    /// Symbols that must be importable after the top-level module.
    pub imports: Vec<ImportTarget>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            display_name: "PhenoAI".to_string(),
            module: "phenoAI".to_string(),
            pip_name: "phenoai".to_string(),
            imports: vec![
                ImportTarget::symbol("phenoAI", "PhenoAI"),
                ImportTarget::symbol("phenoAI.analysis", "vegetation_indices"),
                ImportTarget::symbol("phenoAI.preprocessing", "atmospheric_correction"),
            ],
        }
    }
}

/// A module, optionally narrowed to one name imported from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTarget {
    /// Dotted module path.
    pub module: String,

    /// Name imported from the module (`from module import symbol`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl ImportTarget {
    /// Target a whole module.
    pub fn module(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: None,
        }
    }

    /// Target a single name inside a module.
    pub fn symbol(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: Some(symbol.into()),
        }
    }

    /// The name shown in report lines.
    pub fn label(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.module)
    }

    /// Fully dotted name (`module.symbol`, or just `module`).
    pub fn qualified_name(&self) -> String {
        match &self.symbol {
            Some(symbol) => format!("{}.{}", self.module, symbol),
            None => self.module.clone(),
        }
    }
}

impl std::fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "from {} import {}", self.module, symbol),
            None => write!(f, "import {}", self.module),
        }
    }
}

/// The package's command-line entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Module run with `-m`.
    pub module: String,

    /// Arguments passed to the module.
    pub args: Vec<String>,

    /// Bounded wait for the CLI subprocess, in seconds.
    #[serde(default = "default_cli_timeout")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            module: "phenoAI.cli".to_string(),
            args: vec!["--help".to_string()],
            timeout_secs: default_cli_timeout(),
        }
    }
}

/// Required and optional third-party libraries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
    /// Libraries whose absence fails the check.
    pub required: Vec<Dependency>,

    /// Libraries reported for information only, in declaration order.
    pub optional: Vec<Dependency>,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        let required = [
            "numpy",
            "scipy",
            "opencv-python",
            "matplotlib",
            "pandas",
            "scikit-learn",
            "pillow",
            "rasterio",
            "shapely",
            "geopandas",
        ]
        .into_iter()
        .map(Dependency::named)
        .collect();

        let optional = vec![
            Dependency::described("tensorflow", "TensorFlow (for deep learning features)"),
            Dependency::described("torch", "PyTorch (alternative deep learning)"),
            Dependency::described("jupyter", "Jupyter (for notebook support)"),
            Dependency::described("sphinx", "Sphinx (for documentation)"),
        ];

        Self { required, optional }
    }
}

/// A third-party library, written either as a bare name or as a map.
///
/// ```yaml
/// required:
///   - numpy
///   - name: scikit-learn
///     module: sklearn
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DependencyEntry")]
pub struct Dependency {
    /// Distribution name as the user knows it.
    pub name: String,

    /// Importable module, when it differs from the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    /// What the library enables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Dependency {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            description: None,
        }
    }

    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            description: Some(description.into()),
        }
    }

    /// Module looked up for this dependency.
    ///
    /// Without an explicit `module`, hyphens in the name become underscores
    /// (`opencv-python` is looked up as `opencv_python`).
    pub fn import_name(&self) -> String {
        match &self.module {
            Some(module) => module.clone(),
            None => self.name.replace('-', "_"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        module: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

impl From<DependencyEntry> for Dependency {
    fn from(entry: DependencyEntry) -> Self {
        match entry {
            DependencyEntry::Name(name) => Dependency::named(name),
            DependencyEntry::Detailed {
                name,
                module,
                description,
            } => Dependency {
                name,
                module,
                description,
            },
        }
    }
}
