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

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::{LoopMode, SliceConfig},
    geometry::plane::SlicePlane,
    impl_part,
    slicing::{
        polygon::{Polygon, SliceReport},
        walker::ContourWalker,
    },
};

impl_part! {
    /// Cross-section of the part at `z = height`, counter-clockwise seen from
    /// above. Empty when the plane misses or only touches the part.
    ///
    /// Only the first loop found is returned; use [`Part::slice_with`] with
    /// [`LoopMode::All`] for disconnected sections.
    pub fn slice_at(&self, height: T) -> Polygon<T> {
        self.slice_with(height, &SliceConfig::default()).into_first()
    }

    pub fn slice_with(&self, height: T, config: &SliceConfig) -> SliceReport<T> {
        let tolerance = T::from(config.tolerance);
        let mut report = SliceReport::default();

        let inside = self
            .bounds()
            .is_some_and(|b| b.strictly_contains_on_axis(2, &height, &tolerance));
        if !inside {
            debug!(?height, "slice plane outside part");
            return report;
        }

        let mut walker = ContourWalker::new(self, SlicePlane::new(height, tolerance));
        for seed in 0..self.face_count() {
            let outcome = walker.walk_from(seed);
            if walker.has_path() {
                report.loops.push(Polygon::new(walker.take_path()));
            }
            if let Err(err) = outcome {
                warn!(%err, seed, "contour walk aborted");
                report.failure = Some(err);
                break;
            }
            if config.loops == LoopMode::First && !report.loops.is_empty() {
                break;
            }
        }

        report.faces_visited = walker.faces_visited();
        debug!(
            loops = report.loops.len(),
            faces_visited = report.faces_visited,
            "sliced part"
        );
        report
    }

    /// [`Part::slice_at`] for every height, in parallel.
    pub fn slice_layers(&self, heights: &[T]) -> Vec<Polygon<T>> {
        heights.par_iter().map(|h| self.slice_at(h.clone())).collect()
    }

    pub fn slice_layers_with(&self, heights: &[T], config: &SliceConfig) -> Vec<SliceReport<T>> {
        heights
            .par_iter()
            .map(|h| self.slice_with(h.clone(), config))
            .collect()
    }

    /// `first + i * step` for integer `i >= 0`, restricted to heights that
    /// [`Part::slice_at`] would not reject as outside. Heights that round to
    /// the same value are emitted once.
    pub fn layer_heights(&self, first: T, step: T) -> Vec<T> {
        let Some(aabb) = self.bounds() else {
            return Vec::new();
        };
        if !step.is_positive() {
            return Vec::new();
        }
        let tolerance = T::tolerance();
        let lo = &aabb.min[2] + &tolerance;
        let hi = &aabb.max[2] - &tolerance;

        // Index range from the bounds, so the loop count never depends on
        // `h + step` making progress.
        let steps_to = |bound: &T| (&(bound - &first) / &step).to_f64();
        let (Some(start), Some(end)) = (steps_to(&lo), steps_to(&hi)) else {
            return Vec::new();
        };
        let (start, end) = (start.ceil().max(0.0), end.floor());
        if !start.is_finite() || !end.is_finite() || end < start {
            return Vec::new();
        }

        let mut heights: Vec<T> = Vec::new();
        for i in start as u64..=end as u64 {
            let h = &first + &(&step * &T::from(i as f64));
            if !aabb.strictly_contains_on_axis(2, &h, &tolerance) {
                continue;
            }
            if heights.last().is_some_and(|prev| h <= *prev) {
                continue;
            }
            heights.push(h);
        }
        heights
    }
}
