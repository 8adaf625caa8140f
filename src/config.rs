use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".clsrc.json";

/// Reserved call name recognized when the config does not override it.
pub const DEFAULT_FUNCTION_NAME: &str = "tw";

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
});

/// User-facing options as read from `.clsrc.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    #[serde(default = "default_sourcemap")]
    pub sourcemap: bool,
    #[serde(default = "default_breakpoints")]
    pub breakpoints: BTreeMap<String, String>,
    #[serde(default)]
    pub enable_variants: bool,
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

fn default_includes() -> Vec<String> {
    ["**/*.js", "**/*.jsx", "**/*.ts", "**/*.tsx"]
        .map(String::from)
        .to_vec()
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_sourcemap() -> bool {
    true
}

fn default_breakpoints() -> BTreeMap<String, String> {
    [
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1536px"),
    ]
    .into_iter()
    .map(|(name, width)| (name.to_string(), width.to_string()))
    .collect()
}

fn default_function_name() -> String {
    DEFAULT_FUNCTION_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: default_includes(),
            excludes: default_excludes(),
            sourcemap: default_sourcemap(),
            breakpoints: default_breakpoints(),
            enable_variants: false,
            function_name: default_function_name(),
        }
    }
}

/// The option set the transform runs with.
///
/// Built once per session and shared read-only; file filters are not part of
/// it because hosts apply them before invoking the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub breakpoints: BTreeMap<String, String>,
    pub enable_variants: bool,
    pub sourcemap: bool,
    pub function_name: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or `functionName` is
    /// not a JavaScript identifier.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for pattern in &self.excludes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'excludes': \"{}\"", pattern))?;
        }

        if !IDENTIFIER.is_match(&self.function_name) {
            bail!(
                "Invalid 'functionName': \"{}\" is not a JavaScript identifier",
                self.function_name
            );
        }

        Ok(())
    }

    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            breakpoints: self.breakpoints.clone(),
            enable_variants: self.enable_variants,
            sourcemap: self.sourcemap,
            function_name: self.function_name.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
