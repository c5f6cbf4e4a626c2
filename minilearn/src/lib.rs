#![cfg_attr(docsrs, feature(doc_cfg))]

//! # minilearn
//!
//! Two small supervised learners for binary classification:
//!
//! * [`LinearClassifier`]: a perceptron over dense feature vectors.
//! * [`TextClassifier`]: a multinomial Naive Bayes model over words, with add-one smoothing.
//!
//! ## Examples
//!
//! ```
//! use minilearn::{Label, LinearClassifier, TextClassifier};
//!
//! let mut perceptron = LinearClassifier::new(2, 0.2).unwrap();
//! let report = perceptron
//!     .fit_with_callback(
//!         &[[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]],
//!         &[0, 1, 1, 1],
//!         25,
//!         |r| eprintln!("epoch {} errors {}", r.epoch, r.n_errors),
//!     )
//!     .unwrap();
//! assert!(report.converged());
//! assert_eq!(Label::Positive, perceptron.predict(&[1.0, 1.0]).unwrap());
//!
//! let mut bayes = TextClassifier::new();
//! bayes.fit(&[("claim your prize", 1), ("lunch at noon", 0)]).unwrap();
//! assert_eq!(Label::Positive, bayes.predict("Prize!"));
//! ```
//!
//! Diagnostics are also emitted through the [`log`](https://docs.rs/log) facade.

mod errors;
mod label;
mod naive_bayes;
mod perceptron;

pub mod tokenizer;

pub use errors::{InvalidArgumentError, MinilearnError, Result};
pub use label::Label;
pub use naive_bayes::{Degenerate, Prediction, TextClassifier};
pub use perceptron::{EpochReport, FitReport, LinearClassifier, ParamsDisplay};
