//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{Y_PAD, Y_TEXT},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Empty means no title row
    pub title: String,
    /// Blank margin at the top and bottom
    pub y_pad: f64,
    /// Height of one text row
    pub y_text: f64,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    #[inline]
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Lowest y a box may reach: above the margin and the name row.
    #[inline]
    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        self.y_pad + self.y_text
    }

    /// Highest y a box may reach: below the margin and the title row.
    #[inline]
    #[must_use]
    pub fn plot_top(&self) -> f64 {
        let top = 1.0 - self.y_pad;
        if self.has_title() { top - self.y_text } else { top }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::new(),
            y_pad: Y_PAD,
            y_text: Y_TEXT,
        }
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    title: Option<String>,
    y_pad: Option<f64>,
    y_text: Option<f64>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    pub fn title_opt(mut self, t: Option<&str>) -> Self {
        if let Some(t) = t {
            self.title = Some(t.to_owned());
        }
        self
    }
    #[inline]
    pub fn y_pad(mut self, v: f64) -> Self {
        self.y_pad = Some(v);
        self
    }
    #[inline]
    pub fn y_text(mut self, v: f64) -> Self {
        self.y_text = Some(v);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let y_pad = fraction("y_pad", self.y_pad.unwrap_or(Y_PAD))?;
        let y_text = fraction("y_text", self.y_text.unwrap_or(Y_TEXT))?;
        let cfg = Config {
            title: self.title.unwrap_or_default(),
            y_pad,
            y_text,
        };
        let (bottom, top) = (cfg.plot_bottom(), cfg.plot_top());
        if bottom >= top {
            return Err(ConfigError::NoPlotArea { bottom, top });
        }
        Ok(cfg)
    }
}

fn fraction(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidFraction { field, value })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
