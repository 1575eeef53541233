//! Substat table and quota settings, backed by a JSON file.
//!
//! The file is created with the built-in table the first time it is loaded
//! and is read as-is afterwards. Callers load it once and pass the
//! resulting [`Config`] down explicitly.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::stat::StatDefinition;

/// An RGB color stored as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Hex notation, e.g. `#ff3c3c`.
    pub fn hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Quota and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rolls each user may perform per day.
    pub daily_limit: u32,
    /// User ids exempt from the daily limit.
    pub white_list: BTreeSet<String>,
    /// Substats drawn per roll.
    pub stats_count: usize,
    /// Color for highlighted stats.
    pub max_value_color: Rgb,
    /// Color for ordinary stats.
    pub normal_color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_limit: 20,
            white_list: BTreeSet::new(),
            stats_count: 5,
            max_value_color: Rgb([255, 60, 60]),
            normal_color: Rgb([255, 255, 255]),
        }
    }
}

impl Settings {
    /// Whether the user is exempt from the daily limit.
    pub fn is_whitelisted(&self, user_id: &str) -> bool {
        self.white_list.contains(user_id)
    }
}

/// The full configuration: substat table plus settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Every substat an Echo can roll.
    pub substats: Vec<StatDefinition>,
    /// Quota and presentation settings.
    #[serde(default)]
    pub settings: Settings,
}

const PERCENT_TIERS: [f64; 8] = [11.6, 10.9, 10.1, 9.4, 8.6, 7.9, 7.1, 6.4];

impl Default for Config {
    fn default() -> Self {
        let substats = vec![
            StatDefinition::new("攻击", "攻击", &[50.0, 40.0, 30.0], false),
            StatDefinition::new("攻击", "攻击", &PERCENT_TIERS, true),
            StatDefinition::new(
                "生命",
                "生命",
                &[580.0, 540.0, 510.0, 470.0, 430.0, 390.0, 360.0, 320.0],
                false,
            ),
            StatDefinition::new("生命", "生命", &PERCENT_TIERS, true),
            StatDefinition::new("防御", "防御", &[60.0, 50.0, 40.0], false),
            StatDefinition::new(
                "防御",
                "防御",
                &[14.7, 13.8, 12.8, 11.8, 10.9, 10.0, 9.0, 8.1],
                true,
            ),
            StatDefinition::new(
                "暴击",
                "暴击",
                &[10.5, 9.9, 9.3, 8.7, 8.1, 7.5, 6.9, 6.3],
                true,
            ),
            StatDefinition::new(
                "暴击伤害",
                "暴击伤害",
                &[21.0, 19.8, 18.6, 17.4, 16.2, 15.0, 13.8, 12.6],
                true,
            ),
            StatDefinition::new("共鸣效率", "共鸣效率", &PERCENT_TIERS, true),
            StatDefinition::new("普攻伤害加成", "普攻伤害加成", &PERCENT_TIERS, true),
            StatDefinition::new("重击伤害加成", "重击伤害加成", &PERCENT_TIERS, true),
            StatDefinition::new("共鸣技能伤害加成", "共鸣技能伤害加成", &PERCENT_TIERS, true),
            StatDefinition::new("共鸣解放伤害加成", "共鸣解放伤害加成", &PERCENT_TIERS, true),
        ];
        Self {
            substats,
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Check that every substat can actually be rolled.
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(def) = self.substats.iter().find(|d| d.values.is_empty()) {
            return Err(CoreError::InvalidConfig(format!(
                "substat '{}' has no values",
                def.name
            )));
        }
        Ok(())
    }

    /// Number of stats a roll will actually contain.
    pub fn stats_per_roll(&self) -> usize {
        self.settings.stats_count.min(self.substats.len())
    }
}

/// Loads the config from a JSON file, creating it on first use.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// File name used inside a data directory.
    pub const FILE_NAME: &'static str = "phantom_substats_config.json";

    /// A store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store backed by [`Self::FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the config, writing and returning the default if the file is absent.
    pub fn load(&self) -> CoreResult<Config> {
        if !self.path.exists() {
            let config = Config::default();
            self.save(&config)?;
            log::info!("created default config at {}", self.path.display());
            return Ok(config);
        }

        let text = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        let config: Config = serde_json::from_str(&text).map_err(|source| CoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        config.validate()?;
        log::debug!(
            "loaded {} substats from {}",
            config.substats.len(),
            self.path.display()
        );
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, config: &Config) -> CoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|source| CoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
