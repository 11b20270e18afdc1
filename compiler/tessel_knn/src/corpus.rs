//! Labelled exemplars.

use std::sync::Arc;

use tessel_ir::TokenIdx;

use crate::{FeatureVector, LabelCode};

/// Which label of an exemplar a classifier votes with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelField {
    /// Newline / whitespace decision.
    Whitespace,
    /// Alignment decision.
    Alignment,
}

/// Where an exemplar was observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    pub document: Arc<str>,
    pub token: TokenIdx,
}

/// One full-width feature vector with both of its labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exemplar {
    pub features: FeatureVector,
    pub whitespace: LabelCode,
    pub alignment: LabelCode,
    pub origin: Option<Origin>,
}

impl Exemplar {
    pub fn new(features: FeatureVector, whitespace: LabelCode, alignment: LabelCode) -> Self {
        Exemplar {
            features,
            whitespace,
            alignment,
            origin: None,
        }
    }

    #[must_use]
    pub fn with_origin(mut self, document: Arc<str>, token: TokenIdx) -> Self {
        self.origin = Some(Origin { document, token });
        self
    }

    #[inline]
    pub fn label(&self, field: LabelField) -> LabelCode {
        match field {
            LabelField::Whitespace => self.whitespace,
            LabelField::Alignment => self.alignment,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    #[error("exemplar {index} has {found} features, corpus vectors have {expected}")]
    WidthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

/// The exemplars every classifier of a model votes over.
///
/// All vectors share one width. Once wrapped in an `Arc` and handed to
/// classifiers the corpus is never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
    width: usize,
    exemplars: Vec<Exemplar>,
}

impl Corpus {
    pub fn new(width: usize) -> Self {
        Corpus {
            width,
            exemplars: Vec::new(),
        }
    }

    /// Build from a batch of exemplars, checking every width.
    pub fn from_exemplars(
        width: usize,
        exemplars: impl IntoIterator<Item = Exemplar>,
    ) -> Result<Self, CorpusError> {
        let mut corpus = Corpus::new(width);
        for exemplar in exemplars {
            corpus.push(exemplar)?;
        }
        Ok(corpus)
    }

    pub fn push(&mut self, exemplar: Exemplar) -> Result<(), CorpusError> {
        if exemplar.features.len() != self.width {
            return Err(CorpusError::WidthMismatch {
                index: self.exemplars.len(),
                expected: self.width,
                found: exemplar.features.len(),
            });
        }
        self.exemplars.push(exemplar);
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.exemplars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exemplars.is_empty()
    }

    #[inline]
    pub fn exemplars(&self) -> &[Exemplar] {
        &self.exemplars
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Exemplar> {
        self.exemplars.get(index)
    }
}
