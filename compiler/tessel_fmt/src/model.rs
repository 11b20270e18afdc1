//! The shared model: one corpus, two classifiers.

use std::sync::Arc;

use tessel_features::{alignment_schema, whitespace_schema, CorpusBuilder, ExtractError};
use tessel_ir::InputDocument;
use tessel_knn::{ClassifyError, ContextClassifier, Corpus, CorpusError, Schema, SchemaError};
use tracing::debug;

use crate::FormatConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error("{document}: {source}")]
    Extract {
        document: String,
        #[source]
        source: ExtractError,
    },
}

/// Immutable after construction; share it by reference or `Arc` across any
/// number of formatter runs.
#[derive(Clone, Debug)]
pub struct Model {
    whitespace: ContextClassifier,
    alignment: ContextClassifier,
}

impl Model {
    /// Classifiers over the standard newline/whitespace and alignment schemas.
    pub fn new(corpus: Arc<Corpus>) -> Result<Self, ModelError> {
        Model::with_schemas(corpus, whitespace_schema()?, alignment_schema()?)
    }

    pub fn with_schemas(
        corpus: Arc<Corpus>,
        whitespace: Schema,
        alignment: Schema,
    ) -> Result<Self, ModelError> {
        Ok(Model {
            whitespace: ContextClassifier::new(Arc::clone(&corpus), whitespace)?,
            alignment: ContextClassifier::new(corpus, alignment)?,
        })
    }

    /// Collect a corpus from already-formatted documents and build on it.
    pub fn train<'a>(
        documents: impl IntoIterator<Item = &'a InputDocument>,
        config: &FormatConfig,
    ) -> Result<Self, ModelError> {
        let mut builder = CorpusBuilder::new(config.indent_width, config.tab_size);
        for doc in documents {
            builder
                .add_document(doc)
                .map_err(|source| ModelError::Extract {
                    document: doc.name.clone(),
                    source,
                })?;
        }
        let documents = builder.documents();
        let corpus = builder.finish()?;
        debug!(documents, exemplars = corpus.len(), "trained");
        Model::new(Arc::new(corpus))
    }

    /// Newline/whitespace classifier.
    #[inline]
    pub fn whitespace(&self) -> &ContextClassifier {
        &self.whitespace
    }

    #[inline]
    pub fn alignment(&self) -> &ContextClassifier {
        &self.alignment
    }

    #[inline]
    pub fn corpus(&self) -> &Arc<Corpus> {
        self.whitespace.corpus()
    }
}
