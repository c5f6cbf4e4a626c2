use std::fmt;

use hashbrown::{HashMap, HashSet};

use crate::errors::{MinilearnError, Result};
use crate::label::Label;
use crate::tokenizer::{count_tokens, tokenize};

/// Reason why a text could not be scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degenerate {
    /// No document has been fitted.
    NoTrainingData,

    /// The text contains no words.
    NoWords,
}

impl fmt::Display for Degenerate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoTrainingData => write!(f, "model has no training data"),
            Self::NoWords => write!(f, "no words found to score"),
        }
    }
}

/// Result of [`TextClassifier::predict_with_score()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// The text was scored. Scores are log-posteriors up to a shared constant.
    Scored {
        label: Label,
        positive: f64,
        negative: f64,
    },

    /// The text was not scored and the default label applies.
    Degenerate(Degenerate),
}

impl Prediction {
    /// Gets the predicted label. Degenerate predictions are [`Label::Negative`].
    pub fn label(&self) -> Label {
        match self {
            Self::Scored { label, .. } => *label,
            Self::Degenerate(_) => Label::Negative,
        }
    }

    /// Gets the `(positive, negative)` scores, if the text was scored.
    pub fn scores(&self) -> Option<(f64, f64)> {
        match self {
            Self::Scored {
                positive, negative, ..
            } => Some((*positive, *negative)),
            Self::Degenerate(_) => None,
        }
    }

    /// Gets the reason why the text was not scored.
    pub fn degenerate(&self) -> Option<Degenerate> {
        match self {
            Self::Scored { .. } => None,
            Self::Degenerate(d) => Some(*d),
        }
    }
}

/// Word statistics of one class.
#[derive(Debug, Clone, Default)]
struct ClassCounts {
    bag: HashMap<String, usize>,
    n_docs: usize,
    n_words: usize,
}

impl ClassCounts {
    fn add_document(&mut self, text: &str, vocabulary: &mut HashSet<String>) {
        for token in tokenize(text) {
            if !vocabulary.contains(&token) {
                vocabulary.insert(token.clone());
            }
            *self.bag.entry(token).or_insert(0) += 1;
            self.n_words += 1;
        }
        self.n_docs += 1;
    }

    fn count(&self, token: &str) -> usize {
        self.bag.get(token).copied().unwrap_or(0)
    }

    /// Laplace-smoothed log-likelihood of a token.
    fn log_likelihood(&self, token: &str, vocabulary_size: usize) -> f64 {
        let numerator = self.count(token) as f64 + 1.0;
        let denominator = self.n_words as f64 + vocabulary_size as f64;
        (numerator / denominator).ln()
    }
}

/// Multinomial Naive Bayes text classifier with add-one smoothing.
///
/// # Examples
///
/// ```
/// use minilearn::{Label, TextClassifier};
///
/// let mut classifier = TextClassifier::new();
/// classifier
///     .fit(&[
///         ("win cash now", 1),
///         ("claim your prize", 1),
///         ("lunch at noon", 0),
///         ("see you at the gym", 0),
///     ])
///     .unwrap();
///
/// assert_eq!(Label::Positive, classifier.predict("Cash prize!"));
/// assert_eq!(Label::Negative, classifier.predict("see you at lunch"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextClassifier {
    positive: ClassCounts,
    negative: ClassCounts,
    vocabulary: HashSet<String>,
}

impl TextClassifier {
    /// Creates a new classifier without training data.
    pub fn new() -> Self {
        Self::default()
    }

    fn class(&self, label: Label) -> &ClassCounts {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Gets the number of training documents of a class.
    pub fn n_documents(&self, label: Label) -> usize {
        self.class(label).n_docs
    }

    /// Gets the total number of word occurrences of a class.
    pub fn n_words(&self, label: Label) -> usize {
        self.class(label).n_words
    }

    /// Gets the number of occurrences of a word in a class.
    pub fn word_count(&self, label: Label, token: &str) -> usize {
        self.class(label).count(token)
    }

    /// Gets the number of distinct words over both classes.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Checks whether the vocabulary contains a word.
    pub fn contains_word(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// Checks whether at least one document has been fitted.
    pub fn is_trained(&self) -> bool {
        self.positive.n_docs + self.negative.n_docs != 0
    }

    /// Trains the classifier, discarding everything learned before.
    ///
    /// # Arguments
    ///
    /// * `documents` - Pairs of a text and its label. Label 1 is the positive class and 0 is the
    ///   negative class.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned if a label is neither 0 nor 1. In that
    /// case the classifier keeps its previous state.
    pub fn fit<S>(&mut self, documents: &[(S, i32)]) -> Result<()>
    where
        S: AsRef<str>,
    {
        let labels = documents
            .iter()
            .enumerate()
            .map(|(i, (_, y))| {
                Label::from_i32(*y).map_err(|_| {
                    MinilearnError::invalid_argument(
                        "documents",
                        format!("label of document {} must be 0 or 1, got {}", i, y),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        *self = Self::new();
        for ((text, _), label) in documents.iter().zip(labels) {
            let counts = match label {
                Label::Positive => &mut self.positive,
                Label::Negative => &mut self.negative,
            };
            counts.add_document(text.as_ref(), &mut self.vocabulary);
        }
        log::debug!(
            "fitted {} positive / {} negative documents, {} words in vocabulary",
            self.positive.n_docs,
            self.negative.n_docs,
            self.vocabulary.len(),
        );
        Ok(())
    }

    /// Predicts a label.
    ///
    /// [`Label::Negative`] is returned when the classifier has no training data or `text`
    /// contains no words. Use [`predict_with_score()`](Self::predict_with_score) to tell these
    /// cases apart.
    pub fn predict(&self, text: &str) -> Label {
        self.predict_with_score(text).label()
    }

    /// Predicts a label and returns the class scores.
    ///
    /// Each class starts from its log prior and adds, for every occurrence of a word, the
    /// log-likelihood `ln((count + 1) / (class_words + vocabulary_size))`. The vocabulary is
    /// shared by both classes. Ties are resolved as [`Label::Positive`].
    pub fn predict_with_score(&self, text: &str) -> Prediction {
        if !self.is_trained() {
            log::warn!("{}", Degenerate::NoTrainingData);
            return Prediction::Degenerate(Degenerate::NoTrainingData);
        }
        let local = count_tokens(text);
        if local.is_empty() {
            log::warn!("{}", Degenerate::NoWords);
            return Prediction::Degenerate(Degenerate::NoWords);
        }

        let n_docs = (self.positive.n_docs + self.negative.n_docs) as f64;
        let mut positive = (self.positive.n_docs as f64 / n_docs).ln();
        let mut negative = (self.negative.n_docs as f64 / n_docs).ln();

        let vocabulary_size = self.vocabulary.len();
        for (token, &times) in &local {
            let times = times as f64;
            positive += times * self.positive.log_likelihood(token, vocabulary_size);
            negative += times * self.negative.log_likelihood(token, vocabulary_size);
        }

        Prediction::Scored {
            label: Label::from(positive >= negative),
            positive,
            negative,
        }
    }
}
