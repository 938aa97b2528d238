//! Configuration discovery and effective settings resolution.
//!
//! Shipmeta reads `shipmeta.toml|yaml|yml` from the project root (or the
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `locale`: `en-US`
//! - `out_dir`: `.shipmeta`
//! - `store`: `.shipmeta/store`
//! - `extensions`: `["swift"]`
//!
//! Overrides precedence: CLI > config file > defaults. Relative directories
//! are resolved against the detected root. The engine modules never read
//! configuration; the binary passes resolved values explicitly.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOCALE: &str = "en-US";
pub const DEFAULT_OUT_DIR: &str = ".shipmeta";
pub const DEFAULT_STORE: &str = ".shipmeta/store";

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `shipmeta.toml|yaml`.
pub struct ShipmetaConfig {
    pub output: Option<String>,
    pub locale: Option<String>,
    pub out_dir: Option<String>,
    pub store: Option<String>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: String,
    pub locale: String,
    pub out_dir: PathBuf,
    pub store: PathBuf,
    pub extensions: Vec<String>,
}

#[derive(Debug, Default, Clone)]
/// Values supplied on the command line; `None` defers to config/defaults.
pub struct CliOverrides<'a> {
    pub root: Option<&'a str>,
    pub output: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub out_dir: Option<&'a str>,
    pub store: Option<&'a str>,
}

/// Walk upward from `start` to detect the configuration root.
///
/// Stops when a `shipmeta.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("shipmeta.toml").exists()
            || cur.join("shipmeta.yaml").exists()
            || cur.join("shipmeta.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ShipmetaConfig` from `shipmeta.toml` or `shipmeta.yaml|yml` if
/// present and well-formed.
pub fn load_config(root: &Path) -> Option<ShipmetaConfig> {
    let toml_path = root.join("shipmeta.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ShipmetaConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["shipmeta.yaml", "shipmeta.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ShipmetaConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides<'_>) -> Effective {
    let start = PathBuf::from(cli.root.unwrap_or("."));
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let locale = cli
        .locale
        .map(|s| s.to_string())
        .or(cfg.locale)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let out_dir = cli
        .out_dir
        .map(|s| s.to_string())
        .or(cfg.out_dir)
        .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());
    let store = cli
        .store
        .map(|s| s.to_string())
        .or(cfg.store)
        .unwrap_or_else(|| DEFAULT_STORE.to_string());
    let extensions = cfg
        .extensions
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| vec!["swift".to_string()]);

    Effective {
        out_dir: root.join(out_dir),
        store: root.join(store),
        root,
        output,
        locale,
        extensions,
    }
}
