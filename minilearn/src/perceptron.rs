use std::fmt;

use crate::errors::{MinilearnError, Result};
use crate::label::Label;

/// Progress of a single training epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochReport {
    /// 1-origin epoch index.
    pub epoch: usize,

    /// Number of examples misclassified (and therefore updated) during the epoch.
    pub n_errors: usize,
}

/// Summary of a call to [`LinearClassifier::fit()`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitReport {
    epochs: Vec<EpochReport>,
    converged: bool,
}

impl FitReport {
    /// Gets the reports of all epochs that were run, in order.
    pub fn epochs(&self) -> &[EpochReport] {
        &self.epochs
    }

    /// Gets the number of epochs that were run.
    pub fn n_epochs(&self) -> usize {
        self.epochs.len()
    }

    /// Checks whether an epoch finished without any error.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Gets the epoch at which training converged, if it did.
    pub fn converged_epoch(&self) -> Option<usize> {
        self.converged.then(|| self.epochs.len())
    }
}

/// Binary linear classifier trained with the perceptron rule.
///
/// # Examples
///
/// ```
/// use minilearn::{Label, LinearClassifier};
///
/// let xs = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
/// let ys = [0, 1, 1, 1];
///
/// let mut classifier = LinearClassifier::new(2, 0.2).unwrap();
/// let report = classifier.fit(&xs, &ys, 25).unwrap();
/// assert!(report.converged());
///
/// assert_eq!(Label::Negative, classifier.predict(&[0.0, 0.0]).unwrap());
/// assert_eq!(Label::Positive, classifier.predict(&[1.0, 0.0]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearClassifier {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
}

impl LinearClassifier {
    /// Creates a new classifier with all weights and the bias set to zero.
    ///
    /// # Arguments
    ///
    /// * `n_features` - The dimension of feature vectors.
    /// * `learning_rate` - The step size of each update.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned if `learning_rate` is not a positive
    /// finite number.
    pub fn new(n_features: usize, learning_rate: f64) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(MinilearnError::invalid_argument(
                "learning_rate",
                format!("must be a positive finite number, got {}", learning_rate),
            ));
        }
        Ok(Self {
            weights: vec![0.0; n_features],
            bias: 0.0,
            learning_rate,
        })
    }

    /// Gets the dimension of feature vectors.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Gets the current weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Gets the current bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns an object that formats the weights and the bias with three decimals.
    pub fn params(&self) -> ParamsDisplay<'_> {
        ParamsDisplay { classifier: self }
    }

    fn check_dimension(&self, arg: &'static str, xs: &[f64]) -> Result<()> {
        if xs.len() != self.weights.len() {
            return Err(MinilearnError::invalid_argument(
                arg,
                format!(
                    "expected {} features, got {}",
                    self.weights.len(),
                    xs.len()
                ),
            ));
        }
        Ok(())
    }

    #[inline(always)]
    fn score(&self, xs: &[f64]) -> f64 {
        dot(&self.weights, xs) + self.bias
    }

    #[inline(always)]
    fn step(score: f64) -> Label {
        Label::from(score >= 0.0)
    }

    /// Computes `w · x + b` for a feature vector.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned if the length of `xs` differs from
    /// [`n_features()`](Self::n_features).
    pub fn decision_function(&self, xs: &[f64]) -> Result<f64> {
        self.check_dimension("features", xs)?;
        Ok(self.score(xs))
    }

    /// Predicts a label. A score of exactly zero is classified as positive.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned if the length of `xs` differs from
    /// [`n_features()`](Self::n_features).
    pub fn predict(&self, xs: &[f64]) -> Result<Label> {
        self.decision_function(xs).map(Self::step)
    }

    /// Predicts labels of multiple feature vectors.
    ///
    /// # Errors
    ///
    /// Fails on the first row whose length differs from [`n_features()`](Self::n_features).
    pub fn predict_batch<V>(&self, rows: &[V]) -> Result<Vec<Label>>
    where
        V: AsRef<[f64]>,
    {
        rows.iter().map(|xs| self.predict(xs.as_ref())).collect()
    }

    /// Trains the classifier. See [`fit_with_callback()`](Self::fit_with_callback).
    pub fn fit<V>(&mut self, xs: &[V], ys: &[i32], max_epochs: usize) -> Result<FitReport>
    where
        V: AsRef<[f64]>,
    {
        self.fit_with_callback(xs, ys, max_epochs, |_| ())
    }

    /// Trains the classifier with the perceptron rule.
    ///
    /// Examples are visited in order, and each misclassified example immediately moves the
    /// weights and the bias by `learning_rate * (label - guess)`. Training stops after
    /// `max_epochs` epochs or after the first epoch without errors. The current parameters are
    /// the starting point, so calling this again continues training.
    ///
    /// # Arguments
    ///
    /// * `xs` - Feature vectors.
    /// * `ys` - Labels of `xs`. Each must be 0 or 1.
    /// * `max_epochs` - The maximum number of passes over the data.
    /// * `callback` - Called after every epoch.
    ///
    /// # Returns
    ///
    /// The per-epoch error counts.
    ///
    /// # Errors
    ///
    /// [`MinilearnError::InvalidArgument`] will be returned, before any parameter is modified,
    /// when:
    ///
    /// * `max_epochs` is zero.
    /// * `xs` and `ys` have different lengths.
    /// * a feature vector's length differs from [`n_features()`](Self::n_features).
    /// * a label is neither 0 nor 1.
    pub fn fit_with_callback<V, F>(
        &mut self,
        xs: &[V],
        ys: &[i32],
        max_epochs: usize,
        mut callback: F,
    ) -> Result<FitReport>
    where
        V: AsRef<[f64]>,
        F: FnMut(&EpochReport),
    {
        if max_epochs == 0 {
            return Err(MinilearnError::invalid_argument(
                "max_epochs",
                "must be at least 1",
            ));
        }
        if xs.len() != ys.len() {
            return Err(MinilearnError::invalid_argument(
                "labels",
                format!("expected {} labels, got {}", xs.len(), ys.len()),
            ));
        }
        for row in xs {
            self.check_dimension("xs", row.as_ref())?;
        }
        let labels = ys
            .iter()
            .map(|&y| {
                Label::from_i32(y).map_err(|_| {
                    MinilearnError::invalid_argument(
                        "labels",
                        format!("must be 0 or 1, got {}", y),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut report = FitReport::default();
        for epoch in 1..=max_epochs {
            let mut n_errors = 0;
            for (row, &label) in xs.iter().zip(&labels) {
                let row = row.as_ref();
                let guess = Self::step(self.score(row));
                let delta = label.as_i32() - guess.as_i32();
                if delta != 0 {
                    let step = self.learning_rate * f64::from(delta);
                    for (w, &x) in self.weights.iter_mut().zip(row) {
                        *w += step * x;
                    }
                    self.bias += step;
                    n_errors += 1;
                }
            }
            let epoch_report = EpochReport { epoch, n_errors };
            log::debug!("epoch {} errors {}", epoch, n_errors);
            callback(&epoch_report);
            report.epochs.push(epoch_report);
            if n_errors == 0 {
                log::info!("converged at epoch {}", epoch);
                report.converged = true;
                break;
            }
        }
        if !report.converged {
            log::warn!("not converged within {} epochs", max_epochs);
        }
        Ok(report)
    }
}

/// Helper struct for printing the parameters of a [`LinearClassifier`].
pub struct ParamsDisplay<'a> {
    classifier: &'a LinearClassifier,
}

impl fmt::Display for ParamsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "weights: ")?;
        for w in &self.classifier.weights {
            write!(f, "{:.3} ", w)?;
        }
        write!(f, " bias: {:.3}", self.classifier.bias)
    }
}

fn dot(ws: &[f64], xs: &[f64]) -> f64 {
    ws.iter().zip(xs).map(|(w, x)| w * x).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OR_XS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];
    const OR_YS: [i32; 4] = [0, 1, 1, 1];

    #[test]
    fn test_new_zero_initialized() {
        let c = LinearClassifier::new(3, 0.1).unwrap();

        assert_eq!(&[0.0, 0.0, 0.0], c.weights());
        assert_eq!(0.0, c.bias());
        assert_eq!(3, c.n_features());
    }

    #[test]
    fn test_new_invalid_learning_rate() {
        assert!(LinearClassifier::new(2, 0.0).is_err());
        assert!(LinearClassifier::new(2, -0.5).is_err());
        assert!(LinearClassifier::new(2, f64::NAN).is_err());
    }

    #[test]
    fn test_predict_zero_score_is_positive() {
        let c = LinearClassifier::new(2, 0.1).unwrap();

        assert_eq!(Label::Positive, c.predict(&[5.0, -3.0]).unwrap());
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let c = LinearClassifier::new(2, 0.1).unwrap();

        let e = c.predict(&[1.0]).unwrap_err();
        assert_eq!(
            "InvalidArgumentError: features: expected 2 features, got 1",
            e.to_string()
        );
        assert!(c.predict(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_predict_idempotent() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        c.fit(&OR_XS, &OR_YS, 25).unwrap();
        let before = c.clone();

        let first = c.predict(&[0.0, 1.0]).unwrap();
        let second = c.predict(&[0.0, 1.0]).unwrap();

        assert_eq!(first, second);
        assert_eq!(before, c);
    }

    #[test]
    fn test_fit_or_epochs() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        let mut seen = vec![];

        let report = c
            .fit_with_callback(&OR_XS, &OR_YS, 25, |r| seen.push(*r))
            .unwrap();

        let expected = vec![
            EpochReport { epoch: 1, n_errors: 2 },
            EpochReport { epoch: 2, n_errors: 2 },
            EpochReport { epoch: 3, n_errors: 1 },
            EpochReport { epoch: 4, n_errors: 0 },
        ];
        assert_eq!(expected, seen);
        assert_eq!(&expected[..], report.epochs());
        assert_eq!(Some(4), report.converged_epoch());
    }

    #[test]
    fn test_fit_or_params() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        c.fit(&OR_XS, &OR_YS, 25).unwrap();

        assert_eq!("weights: 0.200 0.200  bias: -0.200", c.params().to_string());
    }

    #[test]
    fn test_fit_stops_at_max_epochs() {
        // XOR is not linearly separable.
        let ys = [0, 1, 1, 0];
        let mut c = LinearClassifier::new(2, 0.1).unwrap();
        let mut n_calls = 0;

        let report = c
            .fit_with_callback(&OR_XS, &ys, 7, |_| n_calls += 1)
            .unwrap();

        assert_eq!(7, n_calls);
        assert_eq!(7, report.n_epochs());
        assert!(!report.converged());
        assert_eq!(None, report.converged_epoch());
    }

    #[test]
    fn test_fit_continues_from_current_params() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        c.fit(&OR_XS, &OR_YS, 2).unwrap();
        let weights = c.weights().to_vec();
        let bias = c.bias();

        let report = c.fit(&OR_XS, &OR_YS, 1).unwrap();

        // The third epoch of a fresh run makes a single update on (0, 0).
        assert_eq!(1, report.epochs()[0].n_errors);
        assert_eq!(weights, c.weights());
        assert!((bias - 0.2 - c.bias()).abs() < 1e-12);
    }

    #[test]
    fn test_fit_empty_dataset() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        let xs: [[f64; 2]; 0] = [];

        let report = c.fit(&xs, &[], 10).unwrap();

        assert_eq!(Some(1), report.converged_epoch());
    }

    #[test]
    fn test_fit_length_mismatch() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();

        let e = c.fit(&OR_XS, &[0, 1, 1], 25).unwrap_err();
        assert_eq!(
            "InvalidArgumentError: labels: expected 4 labels, got 3",
            e.to_string()
        );
    }

    #[test]
    fn test_fit_row_dimension_mismatch() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        let xs = vec![vec![0.0, 0.0], vec![1.0]];

        assert!(c.fit(&xs, &[0, 1], 25).is_err());
        assert_eq!(&[0.0, 0.0], c.weights());
    }

    #[test]
    fn test_fit_invalid_label_leaves_params() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();

        let e = c.fit(&OR_XS, &[0, 1, 2, 1], 25).unwrap_err();
        assert_eq!(
            "InvalidArgumentError: labels: must be 0 or 1, got 2",
            e.to_string()
        );
        assert_eq!(&[0.0, 0.0], c.weights());
        assert_eq!(0.0, c.bias());
    }

    #[test]
    fn test_fit_zero_epochs() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();

        assert!(c.fit(&OR_XS, &OR_YS, 0).is_err());
    }

    #[test]
    fn test_predict_batch() {
        let mut c = LinearClassifier::new(2, 0.2).unwrap();
        c.fit(&OR_XS, &OR_YS, 25).unwrap();

        let expected = vec![
            Label::Negative,
            Label::Positive,
            Label::Positive,
            Label::Positive,
        ];
        assert_eq!(expected, c.predict_batch(&OR_XS).unwrap());
    }
}
