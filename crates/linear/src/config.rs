use nalgebra::RealField;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// Pivots with magnitude at or below this times `max |A[i][j]|` are treated as zero unless
/// configured otherwise.
pub const DEFAULT_SINGULAR_TOL: f64 = 1e-12;

/// How the row permutation of a factorization is chosen.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pivoting {
    /// Partial pivoting: at each elimination step the largest-magnitude candidate of the partially
    /// reduced column is moved onto the diagonal.
    #[default]
    Partial,
    /// Legacy static pivoting: the whole permutation is chosen up front from the columns of the
    /// original matrix (see [`crate::pivot::static_permutation`]). It never looks at the reduced
    /// matrix, so it can pick a zero or tiny pivot on matrices partial pivoting handles fine.
    Static,
}

/// Options for [`crate::Lup::factorize_with`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LupConfig<T = f64> {
    pub pivoting: Pivoting,
    /// Threshold below which a diagonal entry of U counts as zero, relative to the largest
    /// absolute entry of the factorized matrix. Scaling `A` by a constant does not change which
    /// pivots are treated as zero.
    pub singular_tol: T,
}

impl<T: RealField> Default for LupConfig<T> {
    fn default() -> Self {
        LupConfig {
            pivoting: Pivoting::default(),
            singular_tol: nalgebra::convert(DEFAULT_SINGULAR_TOL),
        }
    }
}

impl<T: RealField> LupConfig<T> {
    pub fn new(pivoting: Pivoting, singular_tol: T) -> Self {
        LupConfig {
            pivoting,
            singular_tol,
        }
    }

    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn with_singular_tol(mut self, singular_tol: T) -> Self {
        self.singular_tol = singular_tol;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LupConfig::<f64>::default();
        assert_eq!(config.pivoting, Pivoting::Partial);
        assert_eq!(config.singular_tol, 1e-12);

        let config = config
            .with_pivoting(Pivoting::Static)
            .with_singular_tol(1e-8);
        assert_eq!(config, LupConfig::new(Pivoting::Static, 1e-8));
    }
}
