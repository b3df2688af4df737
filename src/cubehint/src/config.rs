use std::{
    fmt::Debug,
    fs,
    ops::Index,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use facelet_cube::{Color, Strictness};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Read when `--config` is not given. A missing file means defaults.
pub const DEFAULT_CONFIG_PATH: &str = "cubehint.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scramble_length: usize,
    pub seed: Option<u64>,
    pub strict_modifiers: bool,
    pub color_names: ColorNames,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scramble_length: 20,
            seed: None,
            strict_modifiers: false,
            color_names: ColorNames::default(),
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or from [`DEFAULT_CONFIG_PATH`] if
    /// it exists.
    ///
    /// # Errors
    ///
    /// If an explicitly given file cannot be read, or any file read cannot be
    /// parsed
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    debug!("No {DEFAULT_CONFIG_PATH} found, using the default configuration");
                    return Ok(Config::default());
                }
                default
            }
        };

        info!("Reading configuration from {}", path.display());
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        Config::from_toml(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// # Errors
    ///
    /// If `text` is not a valid configuration
    pub fn from_toml(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }

    #[must_use]
    pub fn strictness(&self) -> Strictness {
        if self.strict_modifiers {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}

/// Display names for the six colors.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "ColorNamesRepr", into = "ColorNamesRepr")]
pub struct ColorNames([String; 6]);

impl ColorNames {
    /// The first letter of a color's name, used to draw the cube.
    #[must_use]
    pub fn letter(&self, color: Color) -> char {
        self[color]
            .chars()
            .next()
            .map_or('?', |letter| letter.to_ascii_uppercase())
    }
}

impl Default for ColorNames {
    fn default() -> Self {
        ColorNamesRepr::default().into()
    }
}

impl Index<Color> for ColorNames {
    type Output = str;

    fn index(&self, index: Color) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl Debug for ColorNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ColorNamesRepr::from(self.clone()).fmt(f)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct ColorNamesRepr {
    white: String,
    green: String,
    red: String,
    blue: String,
    orange: String,
    yellow: String,
}

impl Default for ColorNamesRepr {
    fn default() -> Self {
        ColorNamesRepr {
            white: "white".to_owned(),
            green: "green".to_owned(),
            red: "red".to_owned(),
            blue: "blue".to_owned(),
            orange: "orange".to_owned(),
            yellow: "yellow".to_owned(),
        }
    }
}

impl From<ColorNamesRepr> for ColorNames {
    fn from(value: ColorNamesRepr) -> Self {
        let mut out = [const { String::new() }; 6];
        out[Color::White as usize] = value.white;
        out[Color::Green as usize] = value.green;
        out[Color::Red as usize] = value.red;
        out[Color::Blue as usize] = value.blue;
        out[Color::Orange as usize] = value.orange;
        out[Color::Yellow as usize] = value.yellow;
        ColorNames(out)
    }
}

impl From<ColorNames> for ColorNamesRepr {
    fn from(value: ColorNames) -> Self {
        let [white, green, red, blue, orange, yellow] = value.0;
        ColorNamesRepr {
            white,
            green,
            red,
            blue,
            orange,
            yellow,
        }
    }
}
