//! Display width.

use std::env;

/// Narrowest display the renderer will lay out.
pub const MIN_COLUMNS: usize = 8;

/// Capability that decides how many columns the display occupies.
pub trait Scale {
    fn columns(&self) -> usize;
}

/// A fixed width, used for batch output and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedScale(pub usize);

impl Scale for FixedScale {
    fn columns(&self) -> usize {
        self.0.max(MIN_COLUMNS)
    }
}

/// Preferred width clamped to the current viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportScale {
    preferred: usize,
    viewport: Option<usize>,
}

impl ViewportScale {
    pub fn new(preferred: usize) -> Self {
        Self {
            preferred,
            viewport: None,
        }
    }

    /// Use the terminal width advertised in `COLUMNS`, if any.
    pub fn from_env(preferred: usize) -> Self {
        let mut scale = Self::new(preferred);
        if let Some(columns) = env::var("COLUMNS").ok().and_then(|v| v.parse().ok()) {
            scale.resize(columns);
        }
        scale
    }

    /// Record a new viewport width.
    pub fn resize(&mut self, viewport: usize) {
        self.viewport = Some(viewport);
    }
}

impl Scale for ViewportScale {
    fn columns(&self) -> usize {
        let columns = match self.viewport {
            Some(viewport) => self.preferred.min(viewport),
            None => self.preferred,
        };
        columns.max(MIN_COLUMNS)
    }
}
