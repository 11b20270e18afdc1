//! Diagnostic account of one classification.

use std::fmt;
use std::sync::Arc;

use tessel_ir::Vocabulary;

use crate::engine::{Neighbor, Vote};
use crate::{Decision, FeatureVector, LabelCode, LabelField, Origin, Schema};

#[derive(Clone, Debug)]
pub struct NeighborDetail {
    pub neighbor: Neighbor,
    /// Projected features of the exemplar.
    pub features: FeatureVector,
    pub origin: Option<Origin>,
}

/// Neighbours, votes and winner for one query.
#[derive(Clone, Debug)]
pub struct PredictionAnalysis {
    pub(crate) schema: Arc<Schema>,
    pub field: LabelField,
    /// Projected query.
    pub query: FeatureVector,
    pub neighbors: Vec<NeighborDetail>,
    /// Winner first.
    pub votes: Vec<Vote>,
    pub winner: LabelCode,
}

impl PredictionAnalysis {
    #[inline]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[inline]
    pub fn decision(&self) -> Decision {
        self.winner.decode()
    }

    /// `"70% for newline(1) (7/10 neighbors)"`.
    pub fn rationale(&self) -> String {
        let total = self.neighbors.len();
        match self.votes.first() {
            Some(vote) if total > 0 => {
                let pct = (vote.count * 100 + total / 2) / total;
                format!(
                    "{pct}% for {} ({}/{total} neighbors)",
                    vote.label.decode(),
                    vote.count
                )
            }
            _ => "no neighbors within threshold".to_string(),
        }
    }

    /// Multi-line report with token and rule names resolved through `vocab`.
    pub fn display<'a>(&'a self, vocab: &'a dyn Vocabulary) -> impl fmt::Display + 'a {
        Report {
            analysis: self,
            vocab,
        }
    }
}

struct Report<'a> {
    analysis: &'a PredictionAnalysis,
    vocab: &'a dyn Vocabulary,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        writeln!(
            f,
            "{} [{:?}]: {}",
            a.schema.name(),
            a.field,
            a.schema.render(&a.query, self.vocab)
        )?;
        writeln!(f, "  {}", a.rationale())?;
        for vote in &a.votes {
            writeln!(
                f,
                "  {:>4} x {} (cumulative distance {:.3})",
                vote.count,
                vote.label.decode(),
                vote.cumulative_distance
            )?;
        }
        for detail in &a.neighbors {
            write!(
                f,
                "    {:.3} {} <- {}",
                detail.neighbor.distance,
                detail.neighbor.label.decode(),
                a.schema.render(&detail.features, self.vocab)
            )?;
            if let Some(origin) = &detail.origin {
                write!(f, " @ {}{}", origin.document, origin.token)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
