use crate::aggregate::NormalizationConfig;
use crate::report::{ReportAssets, ReportError};
use config::{Config, Environment, File, FileFormat};
use retrace_gtfs::schedule::{CatalogConfig, ScheduleCatalog};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// run configuration. every field is optional; without a schedule directory,
/// stop reports label stops by their raw codes and draw no route badges.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RetraceConfig {
    /// directory holding routes.txt, trips.txt, stops.txt and stop_times.txt
    pub schedule_directory: Option<PathBuf>,
    /// directory holding one `<line>.png` icon per rapid transit line
    pub icon_directory: Option<PathBuf>,
    /// TrueType or OpenType font used for all report text
    pub font_file: Option<PathBuf>,
    /// image drawn in the top left corner of every report
    pub header_logo: Option<PathBuf>,
    /// count routes that only drop off at a stop as serving it
    pub include_dropoff_only: bool,
    pub normalization: NormalizationConfig,
}

impl RetraceConfig {
    pub const ENV_PREFIX: &'static str = "RETRACE";

    /// reads the optional configuration file, then applies RETRACE_*
    /// environment variables on top of it.
    pub fn load(file: Option<&String>) -> Result<RetraceConfig, ReportError> {
        Self::load_with_prefix(file, Self::ENV_PREFIX)
    }

    /// [`RetraceConfig::load`] with a custom environment variable prefix.
    pub fn load_with_prefix(
        file: Option<&String>,
        env_prefix: &str,
    ) -> Result<RetraceConfig, ReportError> {
        let mut builder = Config::builder();
        if let Some(f) = file {
            builder = builder.add_source(File::new(f, file_format(f)?));
        }
        let settings = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .map_err(|e| ReportError::ConfigurationError(format!("failure reading settings: {e}")))?;
        settings
            .try_deserialize()
            .map_err(|e| ReportError::ConfigurationError(format!("failure decoding settings: {e}")))
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            include_dropoff_only: self.include_dropoff_only,
        }
    }

    /// builds the schedule catalog, or an empty one if no schedule directory
    /// is configured.
    pub fn load_catalog(&self) -> Result<ScheduleCatalog, ReportError> {
        match &self.schedule_directory {
            Some(directory) => {
                let catalog =
                    ScheduleCatalog::try_from_directory(directory, &self.catalog_config())?;
                Ok(catalog)
            }
            None => {
                log::warn!("no schedule directory configured; stops are labelled by code");
                Ok(ScheduleCatalog::empty())
            }
        }
    }

    pub fn load_assets(&self) -> ReportAssets {
        ReportAssets::load(
            self.font_file.as_deref(),
            self.header_logo.as_deref(),
            self.icon_directory.as_deref(),
        )
    }
}

impl TryFrom<&String> for RetraceConfig {
    type Error = ReportError;

    /// reads a TOML or JSON configuration file without environment overrides.
    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let settings = Config::builder()
            .add_source(File::new(f, file_format(f)?))
            .build()
            .map_err(|e| ReportError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        settings
            .try_deserialize()
            .map_err(|e| ReportError::ConfigurationError(format!("failure decoding {f}: {e}")))
    }
}

fn file_format(f: &str) -> Result<FileFormat, ReportError> {
    if f.ends_with(".toml") {
        Ok(FileFormat::Toml)
    } else if f.ends_with(".json") {
        Ok(FileFormat::Json)
    } else {
        Err(ReportError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}

#[cfg(test)]
mod test {
    use super::RetraceConfig;
    use crate::aggregate::{LabelMapping, NormalizationConfig};
    use std::path::PathBuf;

    #[test]
    fn test_toml_file() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let path = dir.path().join("retrace.toml");
        std::fs::write(
            &path,
            r#"
schedule_directory = "/data/google_transit"
include_dropoff_only = true

[normalization]
rename = [{ from = "Moody Center Stn", to = "Moody Centre Stn" }]
merge = []
"#,
        )
        .expect("write config");
        let f = path.to_string_lossy().to_string();
        let config = RetraceConfig::try_from(&f).expect("valid config");
        assert_eq!(
            config.schedule_directory,
            Some(PathBuf::from("/data/google_transit"))
        );
        assert!(config.include_dropoff_only);
        assert!(config.catalog_config().include_dropoff_only);
        assert_eq!(config.font_file, None);
        assert_eq!(
            config.normalization,
            NormalizationConfig {
                rename: vec![LabelMapping::new("Moody Center Stn", "Moody Centre Stn")],
                merge: vec![],
            }
        );
    }

    #[test]
    fn test_json_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let path = dir.path().join("retrace.json");
        std::fs::write(&path, r#"{ "font_file": "fonts/Inter.ttf" }"#).expect("write config");
        let f = path.to_string_lossy().to_string();
        let config = RetraceConfig::try_from(&f).expect("valid config");
        assert_eq!(config.font_file, Some(PathBuf::from("fonts/Inter.ttf")));
        assert!(!config.include_dropoff_only);
        assert_eq!(config.normalization, NormalizationConfig::default());
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().expect("could not create temp dir");
        let path = dir.path().join("retrace.toml");
        std::fs::write(
            &path,
            r#"
font_file = "/fonts/from_file.ttf"
header_logo = "/images/logo.png"
"#,
        )
        .expect("write config");
        let f = path.to_string_lossy().to_string();
        std::env::set_var("RETRACE_LAYER_TEST_FONT_FILE", "/fonts/from_env.ttf");
        std::env::set_var("RETRACE_LAYER_TEST_INCLUDE_DROPOFF_ONLY", "true");
        let result = RetraceConfig::load_with_prefix(Some(&f), "RETRACE_LAYER_TEST");
        std::env::remove_var("RETRACE_LAYER_TEST_FONT_FILE");
        std::env::remove_var("RETRACE_LAYER_TEST_INCLUDE_DROPOFF_ONLY");

        let config = result.expect("valid config");
        assert_eq!(config.font_file, Some(PathBuf::from("/fonts/from_env.ttf")));
        assert_eq!(config.header_logo, Some(PathBuf::from("/images/logo.png")));
        assert!(config.include_dropoff_only);
        assert_eq!(config.normalization, NormalizationConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let f = String::from("retrace.yaml");
        assert!(RetraceConfig::try_from(&f).is_err());
    }

    #[test]
    fn test_no_schedule_gives_empty_catalog() {
        let catalog = RetraceConfig::default()
            .load_catalog()
            .expect("empty catalog");
        assert!(catalog.is_empty());
    }
}
