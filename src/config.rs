// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Slicing parameters.

use serde::{Deserialize, Serialize};

use crate::numeric::scalar::EPS;

/// How many loops a slice call collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Stop after the first walk. Correct for parts whose cross-section is a
    /// single simply-connected region at every height.
    #[default]
    First,
    /// Keep scanning unvisited faces and emit one polygon per walk.
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Distance below which a vertex counts as lying on the slicing plane.
    pub tolerance: f64,
    pub loops: LoopMode,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            tolerance: EPS,
            loops: LoopMode::First,
        }
    }
}

impl SliceConfig {
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_loops(mut self, loops: LoopMode) -> Self {
        self.loops = loops;
        self
    }

    /// Collect every loop at each height.
    #[must_use]
    pub fn all_loops() -> Self {
        Self::default().with_loops(LoopMode::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SliceConfig::default();
        assert!((config.tolerance - 1e-6).abs() < f64::EPSILON);
        assert_eq!(config.loops, LoopMode::First);
    }

    #[test]
    fn test_builder() {
        let config = SliceConfig::default()
            .with_tolerance(1e-4)
            .with_loops(LoopMode::All);
        assert!((config.tolerance - 1e-4).abs() < f64::EPSILON);
        assert_eq!(config, SliceConfig::all_loops().with_tolerance(1e-4));
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: SliceConfig = serde_json::from_str(r#"{ "loops": "all" }"#).unwrap();
        assert_eq!(config.loops, LoopMode::All);
        assert!((config.tolerance - EPS).abs() < f64::EPSILON);
    }
}
