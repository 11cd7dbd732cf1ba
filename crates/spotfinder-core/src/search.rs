// crates/spotfinder-core/src/search.rs

//! # Search pipeline
//!
//! ```text
//! Start -> TextFiltered -> TagFiltered -> BoxFiltered -> DistanceFiltered
//! ```
//!
//! Each stage narrows the candidate list handed to the next one and is the
//! identity when its criterion is absent. Candidates keep the order of the
//! input; nothing is added or reordered. The box stage is the cheap
//! accelerator, the distance stage the exact verifier.

use crate::config::SearchConfig;
use crate::criteria::{LocationFilter, SearchCriteria};
use crate::geo::{haversine_km, BoundingBox};
use crate::text::TextQuery;
use crate::traits::Searchable;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Matching entries, borrowed from the searched collection, in input order.
pub type SearchResult<'a, T> = Vec<&'a T>;

/// Pipeline states, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    TextFiltered,
    TagFiltered,
    BoxFiltered,
    DistanceFiltered,
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::Start,
        Self::TextFiltered,
        Self::TagFiltered,
        Self::BoxFiltered,
        Self::DistanceFiltered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::TextFiltered => "text",
            Self::TagFiltered => "tags",
            Self::BoxFiltered => "bbox",
            Self::DistanceFiltered => "distance",
        }
    }
}

/// Candidate count after one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: Stage,
    pub candidates: usize,
    /// The criterion for this stage was absent, so it passed everything through.
    pub skipped: bool,
}

/// What a search did: candidates left after each stage and the box used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub stages: Vec<StageCount>,
    pub bbox: Option<BoundingBox>,
}

impl SearchReport {
    /// Candidates remaining after `stage`.
    pub fn count_after(&self, stage: Stage) -> Option<usize> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.candidates)
    }

    fn record(&mut self, stage: Stage, candidates: usize, skipped: bool) {
        debug!(stage = stage.as_str(), candidates, skipped, "stage complete");
        self.stages.push(StageCount {
            stage,
            candidates,
            skipped,
        });
    }
}

/// Stateless search engine. Holds only its [`SearchConfig`], so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Filter `entries` by `criteria`, preserving input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spotfinder_core::prelude::*;
    ///
    /// let spots = vec![
    ///     CatalogEntry::new(1, "A", 35.4681, 133.0486).with_tags("outdoor"),
    ///     CatalogEntry::new(2, "B", 35.4690, 133.0490).with_tags("indoor"),
    ///     CatalogEntry::new(3, "C", 40.0, 140.0).with_tags("outdoor"),
    /// ];
    /// let engine = SearchEngine::default();
    /// let criteria = SearchCriteria::new()
    ///     .tags("outdoor")
    ///     .within(Coordinate::new(35.4681, 133.0486), 1.0, engine.config());
    ///
    /// let hits = engine.search(&spots, &criteria);
    /// assert_eq!(hits.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
    /// ```
    pub fn search<'a, T, I>(&self, entries: I, criteria: &SearchCriteria) -> SearchResult<'a, T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.search_with_report(entries, criteria).0
    }

    /// Run the pipeline and also report per-stage candidate counts.
    #[instrument(level = "debug", skip_all)]
    pub fn search_with_report<'a, T, I>(
        &self,
        entries: I,
        criteria: &SearchCriteria,
    ) -> (SearchResult<'a, T>, SearchReport)
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut report = SearchReport::default();
        let mut candidates: Vec<&'a T> = entries.into_iter().collect();
        report.record(Stage::Start, candidates.len(), false);

        // 1. Text
        let text = criteria
            .text_query
            .as_deref()
            .and_then(|q| TextQuery::new(q, self.config.text_folding));
        if let Some(q) = &text {
            candidates.retain(|e| q.matches(*e));
        }
        report.record(Stage::TextFiltered, candidates.len(), text.is_none());

        // 2. Tags
        if let Some(filter) = &criteria.tag_filter {
            candidates.retain(|e| filter.matches_with(*e, self.config.text_folding));
        }
        report.record(
            Stage::TagFiltered,
            candidates.len(),
            criteria.tag_filter.is_none(),
        );

        // 3 + 4. Location: box pre-filter, then the exact distance.
        // Hand-built filters bypass normalization; re-run it against this
        // engine's config so the box is never built from an out-of-range center.
        let location = criteria
            .location
            .and_then(|loc| LocationFilter::new(loc.center, loc.radius_km, &self.config));
        if criteria.location.is_some() && location.is_none() {
            warn!("location filter has a non-finite center; location stages skipped");
        }
        match location {
            Some(loc) => {
                let radius_km = loc.radius_km;
                let bbox = BoundingBox::around(loc.center, radius_km, &self.config);
                report.bbox = Some(bbox);

                candidates.retain(|e| bbox.contains_point(&e.coordinate()));
                report.record(Stage::BoxFiltered, candidates.len(), false);

                let earth = self.config.earth_radius_km;
                candidates.retain(|e| haversine_km(earth, loc.center, e.coordinate()) <= radius_km);
                report.record(Stage::DistanceFiltered, candidates.len(), false);
            }
            None => {
                report.record(Stage::BoxFiltered, candidates.len(), true);
                report.record(Stage::DistanceFiltered, candidates.len(), true);
            }
        }

        (candidates, report)
    }
}

/// Filter `entries` with the default engine configuration.
pub fn search<'a, T: Searchable>(entries: &'a [T], criteria: &SearchCriteria) -> SearchResult<'a, T> {
    SearchEngine::default().search(entries, criteria)
}
