//! Reconstruction engine.
//!
//! One [`Formatter::format`] call owns its cursor, its copy of the token
//! stream and its analysis records; the [`Model`] is only read. Many runs can
//! share one model concurrently.

use tessel_features::{
    observed_alignment, observed_whitespace, FeatureExtractor, StructuralExtractor, FIRST_ON_LINE,
    PREV_END_COLUMN,
};
use tessel_ir::{InputDocument, Position, Span, Token, TokenIdx, TokenStream, Vocabulary};
use tessel_knn::{ClassifyError, ContextClassifier, Decision, LabelCode, LabelField};
use tracing::{debug, warn};

use crate::align::Aligner;
use crate::analysis::TokenPositionAnalysis;
use crate::comments::reemit_comments;
use crate::cursor::Cursor;
use crate::merge::needs_separator;
use crate::{FormatConfig, Model};

/// Fatal failures. Everything else (weak predictions, unresolvable
/// alignment, merge hazards) is absorbed by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Extract(#[from] tessel_features::ExtractError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Output of one run.
#[derive(Clone, Debug)]
pub struct FormattedDocument {
    pub text: String,
    /// The input stream re-stamped with output positions, counted from the
    /// first real token. Hidden tokens carry no position.
    pub tokens: TokenStream,
    /// Indexed by token index; `Some` for every real token the engine
    /// decided on when analysis is enabled.
    pub analysis: Vec<Option<TokenPositionAnalysis>>,
}

impl FormattedDocument {
    fn verbatim(doc: &InputDocument) -> Self {
        FormattedDocument {
            text: doc.tokens.text(),
            tokens: doc.tokens.clone(),
            analysis: vec![None; doc.tokens.len()],
        }
    }

    /// Analysis records in stream order.
    pub fn analyses(&self) -> impl Iterator<Item = &TokenPositionAnalysis> {
        self.analysis.iter().flatten()
    }
}

/// Formats documents against a [`Model`].
pub struct Formatter<'m, V, E = StructuralExtractor> {
    model: &'m Model,
    vocab: V,
    extractor: E,
    config: FormatConfig,
}

impl<'m, V: Vocabulary> Formatter<'m, V> {
    pub fn new(model: &'m Model, vocab: V, config: FormatConfig) -> Self {
        Formatter::with_extractor(model, vocab, StructuralExtractor, config)
    }
}

impl<'m, V: Vocabulary, E: FeatureExtractor> Formatter<'m, V, E> {
    pub fn with_extractor(model: &'m Model, vocab: V, extractor: E, config: FormatConfig) -> Self {
        Formatter {
            model,
            vocab,
            extractor,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Reformat `doc`.
    ///
    /// Only a feature vector that does not fit the model's schemas is an
    /// error; every other miss degrades to plainer layout.
    pub fn format(&self, doc: &InputDocument) -> Result<FormattedDocument, FormatError> {
        let real = doc.tokens.real_tokens();
        let (Some(&first), Some(&second)) = (real.first(), real.get(1)) else {
            return Ok(FormattedDocument::verbatim(doc));
        };
        if real.len() < 3 {
            return Ok(FormattedDocument::verbatim(doc));
        }

        let mut tokens = doc.tokens.clone();
        tokens.wipe_positions();
        let first_len = tokens.get(first).map_or(0, Token::char_len);
        tokens.set_position(first, Position::new(1, 0));
        tokens.set_position(second, Position::new(1, first_len));

        let mut run = Run {
            formatter: self,
            doc,
            tokens,
            cursor: Cursor::with_capacity(doc.source.len() + doc.source.len() / 4),
            analysis: vec![None; doc.tokens.len()],
        };
        // Hidden text before the first real token is written but not counted:
        // coordinates start at the first real token, where the pins put it.
        let leading: String = run
            .tokens
            .hidden_to_left(first)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        run.cursor.emit_verbatim(&leading);
        run.cursor.restart();
        let prefix = run.tokens.text_through(second);
        run.cursor
            .emit_verbatim(prefix.strip_prefix(leading.as_str()).unwrap_or(&prefix));

        for &idx in &real[2..] {
            run.process_token(idx)?;
        }
        let trailing = run.tokens.hidden_after_last_real();
        reemit_comments(trailing, &mut run.cursor);

        Ok(FormattedDocument {
            text: run.cursor.output(),
            tokens: run.tokens,
            analysis: run.analysis,
        })
    }
}

/// State owned by one formatting run.
struct Run<'f, 'm, V, E> {
    formatter: &'f Formatter<'m, V, E>,
    doc: &'f InputDocument,
    /// Output stream: positions wiped, re-stamped as tokens are emitted.
    tokens: TokenStream,
    cursor: Cursor,
    analysis: Vec<Option<TokenPositionAnalysis>>,
}

impl<V: Vocabulary, E: FeatureExtractor> Run<'_, '_, V, E> {
    fn process_token(&mut self, idx: TokenIdx) -> Result<(), FormatError> {
        let config = self.formatter.config;
        let model = self.formatter.model;
        let Some(token) = self.doc.tokens.get(idx) else {
            return Ok(());
        };

        let after_line_comment =
            reemit_comments(self.tokens.hidden_to_left(idx), &mut self.cursor);

        let mut features = self.formatter.extractor.extract(
            self.doc,
            idx,
            self.cursor.line(),
            config.tab_size,
        )?;
        // The extractor cannot know where the previous token ended in the
        // output; the cursor does.
        if let Some(slot) = features.get_mut(PREV_END_COLUMN) {
            *slot = i32::try_from(self.cursor.column()).unwrap_or(i32::MAX);
        }

        let whitespace = self.classify(model.whitespace(), &features, LabelField::Whitespace)?;
        let (mut newlines, mut spaces) = match whitespace.decode() {
            Decision::InjectNewline(n) => (u32::from(n), 0),
            Decision::InjectWhitespace(n) => (0, u32::from(n)),
            _ => (0, 0),
        };
        let forced_newline = after_line_comment && newlines == 0;
        if forced_newline {
            newlines = 1;
        }

        // Alignment exemplars are matched on whether they start a line, which
        // is only known now.
        if let Some(slot) = features.get_mut(FIRST_ON_LINE) {
            *slot = i32::from(newlines > 0);
        }
        let alignment = self.classify(model.alignment(), &features, LabelField::Alignment)?;

        let prev = self
            .tokens
            .prev_real(idx)
            .and_then(|p| self.tokens.get(p))
            .map_or("", |t| t.text.as_str());
        let failsafe = spaces == 0 && needs_separator(prev, &token.text, &self.formatter.vocab);
        if failsafe {
            spaces = 1;
        }

        if newlines > 0 {
            self.cursor.newlines(newlines);
            let aligner = Aligner {
                tree: &self.doc.tree,
                tokens: &self.tokens,
                indent_width: config.indent_width,
            };
            if let Some(column) = aligner.target_column(alignment.decode(), idx, self.cursor.line())
            {
                self.cursor.spaces(column);
            }
        } else {
            self.cursor.spaces(spaces);
        }

        debug!(
            token = %idx,
            newlines,
            spaces,
            alignment = %alignment,
            failsafe,
            "decided"
        );

        self.tokens
            .set_position(idx, Position::new(self.cursor.line(), self.cursor.column()));
        let span = self.cursor.emit_token(&token.text);

        if config.collect_analysis {
            let record = self.analyze(idx, &features, whitespace, alignment, span)?;
            self.analysis[idx.index()] = Some(TokenPositionAnalysis {
                failsafe,
                forced_newline,
                ..record
            });
        }
        Ok(())
    }

    fn classify(
        &self,
        classifier: &ContextClassifier,
        features: &[i32],
        field: LabelField,
    ) -> Result<LabelCode, FormatError> {
        let config = &self.formatter.config;
        classifier
            .classify(config.k, features, field, config.max_context_distance)
            .inspect_err(|err| warn!(document = %self.doc.name, %err, "feature vector rejected"))
            .map_err(FormatError::from)
    }

    fn analyze(
        &self,
        idx: TokenIdx,
        features: &[i32],
        whitespace: LabelCode,
        alignment: LabelCode,
        span: Span,
    ) -> Result<TokenPositionAnalysis, FormatError> {
        let config = &self.formatter.config;
        let model = self.formatter.model;
        let vocab = &self.formatter.vocab;
        let explain = |classifier: &ContextClassifier, field| {
            classifier
                .explain(config.k, features, field, config.max_context_distance)
                .map(|analysis| analysis.display(vocab).to_string())
        };
        Ok(TokenPositionAnalysis {
            token: idx,
            text: self
                .doc
                .tokens
                .get(idx)
                .map(|t| t.text.clone())
                .unwrap_or_default(),
            predicted_whitespace: whitespace.decode(),
            predicted_alignment: alignment.decode(),
            observed_whitespace: observed_whitespace(&self.doc.tokens, idx, config.tab_size),
            observed_alignment: observed_alignment(self.doc, idx, config.indent_width),
            failsafe: false,
            forced_newline: false,
            whitespace_analysis: explain(model.whitespace(), LabelField::Whitespace)?,
            alignment_analysis: explain(model.alignment(), LabelField::Alignment)?,
            span,
        })
    }
}
