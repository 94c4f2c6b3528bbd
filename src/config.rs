//! Configuration support for runtime-inventory.
//!
//! Settings come from a YAML file (`runtime-inventory.config.yml`, discovered
//! in the working directory or given explicitly) and from the agent-argument
//! string `key1=value1;key2=value2`, which overrides the file.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::dto::DeploymentContext;
use crate::inventory::services::PollSettings;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "runtime-inventory.config.yml";

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;
pub const DEFAULT_POLL_CEILING_MS: u64 = 3000;

const ARG_NAME: &str = "name";
const ARG_TOKEN: &str = "token";
const ARG_TOKEN_FILE: &str = "token_file";
const ARG_POD_NAME: &str = "pod_name";
const ARG_POD_NAMESPACE: &str = "pod_namespace";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Delivery queue capacity; 0 means unbounded.
    pub queue_capacity: Option<usize>,
    pub poll_interval_ms: Option<u64>,
    pub poll_ceiling_ms: Option<u64>,
    /// Archives the inspected process has loaded.
    pub classpath: Option<Vec<PathBuf>>,
    /// Runtime properties such as `jboss.home.dir` and `module.path`.
    pub properties: Option<BTreeMap<String, String>>,
    /// Application name carried into the workload report.
    pub identification_name: Option<String>,
    pub pod_name: Option<String>,
    pub pod_namespace: Option<String>,
    pub token: Option<String>,
    pub log_level: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings::new(
            Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS)),
            Duration::from_millis(self.poll_ceiling_ms.unwrap_or(DEFAULT_POLL_CEILING_MS)),
        )
    }

    pub fn deployment_context(&self) -> DeploymentContext {
        DeploymentContext::new(
            self.token.is_some(),
            self.pod_name.clone(),
            self.pod_namespace.clone(),
        )
        .with_identification_name(self.identification_name.clone())
    }

    /// Overlays agent arguments on top of the file settings.
    pub fn apply_agent_args(&mut self, args: AgentArgs) {
        self.identification_name = Some(args.name);
        if args.token.is_some() {
            self.token = args.token;
        }
        if args.pod_name.is_some() {
            self.pod_name = args.pod_name;
        }
        if args.pod_namespace.is_some() {
            self.pod_namespace = args.pod_namespace;
        }
    }
}

/// Agent arguments in the `key1=value1;key2=value2` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentArgs {
    pub name: String,
    pub token: Option<String>,
    pub pod_name: Option<String>,
    pub pod_namespace: Option<String>,
}

impl AgentArgs {
    /// Parses an agent-argument string.
    ///
    /// # Errors
    /// Returns an error if a pair is not exactly `key=value` or if the
    /// mandatory `name` is missing or empty. Keys other than `name`, `token`,
    /// `token_file`, `pod_name` and `pod_namespace` are warned about and ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut pairs = BTreeMap::new();
        for pair in raw.split(';') {
            let parts: Vec<&str> = pair.split('=').collect();
            if parts.len() != 2 {
                bail!(
                    "Malformed agent arguments: '{}'\n\n💡 Hint: Arguments must be key=value pairs separated by ';' (e.g., \"name=my-app;pod_name=web-1\").",
                    pair
                );
            }
            pairs.insert(parts[0].to_string(), parts[1].to_string());
        }

        let name = pairs.remove(ARG_NAME).unwrap_or_default();
        if name.is_empty() {
            bail!(
                "Agent arguments require a name for identification.\n\n💡 Hint: Add \"name=<application name>\" to the agent arguments."
            );
        }

        let token = match pairs.remove(ARG_TOKEN) {
            Some(token) => Some(token),
            None => pairs
                .remove(ARG_TOKEN_FILE)
                .and_then(|path| read_token_file(Path::new(&path))),
        };
        let pod_name = pairs.remove(ARG_POD_NAME);
        let pod_namespace = pairs.remove(ARG_POD_NAMESPACE);

        for key in pairs.keys() {
            eprintln!(
                "⚠️  Warning: Unknown agent argument '{}' will be ignored.",
                key
            );
        }

        Ok(Self {
            name,
            token,
            pod_name,
            pod_namespace,
        })
    }
}

fn read_token_file(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(token) => Some(token.trim().to_string()),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Unable to read specified token file, this is probably misconfiguration"
            );
            None
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let interval = config.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
    let ceiling = config.poll_ceiling_ms.unwrap_or(DEFAULT_POLL_CEILING_MS);

    if interval == 0 {
        bail!(
            "Invalid config: poll_interval_ms must be greater than 0.\n\n\
             💡 Hint: The default interval is {} ms.",
            DEFAULT_POLL_INTERVAL_MS
        );
    }
    if ceiling < interval {
        bail!(
            "Invalid config: poll_ceiling_ms ({}) must not be smaller than poll_interval_ms ({}).\n\n\
             💡 Hint: The defaults are {} ms and {} ms.",
            ceiling,
            interval,
            DEFAULT_POLL_CEILING_MS,
            DEFAULT_POLL_INTERVAL_MS
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
