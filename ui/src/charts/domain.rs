use crate::data::Series;

/// Min/max of the series currently on screen. Always recomputed; never
/// cached across selections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn of(series: &Series) -> Option<Self> {
        Some(Self {
            min: series.min()?,
            max: series.max()?,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `value` mapped into `[0, 1]`. A zero-width domain maps everything
    /// to 0 so degenerate series draw flat.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 || !span.is_finite() || !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Sample;

    #[test]
    fn normalizes_between_extremes() {
        let series: Series = [Sample::new("a", 10.0), Sample::new("b", 30.0)]
            .into_iter()
            .collect();
        let domain = ValueDomain::of(&series).unwrap();
        assert_eq!(domain.normalize(10.0), 0.0);
        assert_eq!(domain.normalize(20.0), 0.5);
        assert_eq!(domain.normalize(30.0), 1.0);
    }

    #[test]
    fn flat_domain_is_zero() {
        let domain = ValueDomain { min: 7.0, max: 7.0 };
        assert_eq!(domain.normalize(7.0), 0.0);
        assert!(ValueDomain::of(&Series::default()).is_none());
    }
}
