//! Context classifier: a schema bound to a shared corpus.

mod analysis;

use std::sync::Arc;

use tessel_ir::Vocabulary;
use tracing::trace;

use crate::engine::{self, Neighbor};
use crate::{context_distance, Corpus, FeatureVector, LabelCode, LabelField, Schema};

pub use analysis::{NeighborDetail, PredictionAnalysis};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The query is not a full-width vector for this schema.
    #[error("schema `{schema}` expects {expected}-wide feature vectors, got {found}")]
    WidthMismatch {
        schema: &'static str,
        expected: usize,
        found: usize,
    },
    /// The corpus was built for a different vector width.
    #[error("schema `{schema}` projects {expected}-wide vectors but the corpus holds {corpus}-wide ones")]
    CorpusMismatch {
        schema: &'static str,
        expected: usize,
        corpus: usize,
    },
}

/// k-NN classifier over one projection of a shared corpus.
///
/// Exemplars are projected once at construction. Queries are full-width
/// vectors; they are projected the same way before comparison.
#[derive(Clone, Debug)]
pub struct ContextClassifier {
    corpus: Arc<Corpus>,
    schema: Arc<Schema>,
    projected: Vec<FeatureVector>,
}

impl ContextClassifier {
    pub fn new(corpus: Arc<Corpus>, schema: Schema) -> Result<Self, ClassifyError> {
        if corpus.width() != schema.source_width() {
            return Err(ClassifyError::CorpusMismatch {
                schema: schema.name(),
                expected: schema.source_width(),
                corpus: corpus.width(),
            });
        }
        let projected = corpus
            .exemplars()
            .iter()
            .map(|e| schema.project(&e.features))
            .collect();
        Ok(ContextClassifier {
            corpus,
            schema: Arc::new(schema),
            projected,
        })
    }

    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline]
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// Context distance between two projected vectors of this schema.
    #[inline]
    pub fn distance(&self, a: &[i32], b: &[i32]) -> f64 {
        context_distance(self.schema.mask(), a, b)
    }

    fn project_query(&self, query: &[i32]) -> Result<FeatureVector, ClassifyError> {
        if query.len() != self.schema.source_width() {
            return Err(ClassifyError::WidthMismatch {
                schema: self.schema.name(),
                expected: self.schema.source_width(),
                found: query.len(),
            });
        }
        Ok(self.schema.project(query))
    }

    fn neighbors_of(
        &self,
        projected: &[i32],
        k: usize,
        field: LabelField,
        max_distance: f64,
    ) -> Vec<Neighbor> {
        let candidates = self
            .projected
            .iter()
            .zip(self.corpus.exemplars())
            .map(|(features, exemplar)| (features.as_slice(), exemplar.label(field)));
        engine::nearest(candidates, projected, k, max_distance, |a, b| {
            self.distance(a, b)
        })
    }

    /// The `k` nearest exemplars within `max_distance`, closest first.
    pub fn neighbors(
        &self,
        k: usize,
        query: &[i32],
        field: LabelField,
        max_distance: f64,
    ) -> Result<Vec<Neighbor>, ClassifyError> {
        let projected = self.project_query(query)?;
        Ok(self.neighbors_of(&projected, k, field, max_distance))
    }

    /// Majority label among the `k` nearest exemplars within `max_distance`.
    pub fn classify(
        &self,
        k: usize,
        query: &[i32],
        field: LabelField,
        max_distance: f64,
    ) -> Result<LabelCode, ClassifyError> {
        let neighbors = self.neighbors(k, query, field, max_distance)?;
        let label = engine::majority(&neighbors);
        trace!(
            schema = self.schema.name(),
            neighbors = neighbors.len(),
            %label,
            "classified"
        );
        Ok(label)
    }

    /// Neighbour-by-neighbour account of what [`classify`](Self::classify)
    /// would return.
    pub fn explain(
        &self,
        k: usize,
        query: &[i32],
        field: LabelField,
        max_distance: f64,
    ) -> Result<PredictionAnalysis, ClassifyError> {
        let projected = self.project_query(query)?;
        let neighbors = self.neighbors_of(&projected, k, field, max_distance);
        let votes = engine::tally(&neighbors);
        let winner = votes.first().map_or(LabelCode::NONE, |v| v.label);
        let neighbors = neighbors
            .into_iter()
            .map(|neighbor| NeighborDetail {
                features: self.projected[neighbor.exemplar].clone(),
                origin: self
                    .corpus
                    .get(neighbor.exemplar)
                    .and_then(|e| e.origin.clone()),
                neighbor,
            })
            .collect();
        Ok(PredictionAnalysis {
            schema: Arc::clone(&self.schema),
            field,
            query: projected,
            neighbors,
            votes,
            winner,
        })
    }

    /// Render a full-width vector through this schema.
    pub fn describe(&self, query: &[i32], vocab: &dyn Vocabulary) -> String {
        self.schema.render(&self.schema.project(query), vocab)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
