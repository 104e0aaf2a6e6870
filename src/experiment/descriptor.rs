use crate::core::ids::pair_count;
use crate::error::{ExperimentError, Result};
use crate::experiment::formula::EdgeFormula;

/// One unresolved row of a sweep: a vertex count and the formula to derive
/// its edge count from.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorRequest {
    pub n: usize,
    pub formula: EdgeFormula,
    pub trials: u32,
}

/// A validated experiment: `m <= C(n, 2)`, `n >= 2` and `trials > 0`.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentDescriptor {
    pub n: usize,
    pub formula: &'static str,
    pub m: usize,
    pub p: f64,
    pub trials: u32,
}

impl ExperimentDescriptor {
    pub fn resolve(request: &DescriptorRequest) -> Result<Self> {
        let n = request.n;
        let value = request.formula.evaluate(n);
        if !value.is_finite() || value < 0.0 {
            return Err(ExperimentError::InvalidEdgeTarget {
                formula: request.formula.name,
                value,
            });
        }
        let m = value.floor() as usize;

        if n < 2 {
            return Err(ExperimentError::TooFewVertices { n });
        }
        let max = pair_count(n);
        if m > max {
            return Err(ExperimentError::InvalidArgument { requested: m, max });
        }
        if request.trials == 0 {
            return Err(ExperimentError::ZeroTrials);
        }

        Ok(Self {
            n,
            formula: request.formula.name,
            m,
            p: m as f64 / max as f64,
            trials: request.trials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn request(name: &str, n: usize, trials: u32) -> DescriptorRequest {
        DescriptorRequest {
            n,
            formula: EdgeFormula::by_name(name).unwrap(),
            trials,
        }
    }

    #[test]
    fn test_resolve_floors() {
        let d = ExperimentDescriptor::resolve(&request("sqrt(n)", 10, 100)).unwrap();

        assert_eq!(3, d.m);
        assert_eq!("sqrt(n)", d.formula);
        assert_relative_eq!(3.0 / 45.0, d.p);
    }

    #[test]
    fn test_resolve_n5() {
        let d = ExperimentDescriptor::resolve(&request("n", 5, 5000)).unwrap();

        assert_eq!(5, d.m);
        assert_relative_eq!(0.5, d.p);
        assert_eq!(5000, d.trials);
    }

    #[test]
    fn test_too_many_edges() {
        // 3 * 5 = 15 > C(5, 2) = 10
        let err = ExperimentDescriptor::resolve(&request("3n", 5, 10)).unwrap_err();
        assert!(matches!(
            err,
            ExperimentError::InvalidArgument {
                requested: 15,
                max: 10
            }
        ));
    }

    #[test]
    fn test_too_few_vertices() {
        let err = ExperimentDescriptor::resolve(&request("sqrt(n)", 1, 10)).unwrap_err();
        assert!(matches!(err, ExperimentError::TooFewVertices { n: 1 }));
    }

    #[test]
    fn test_zero_trials() {
        let err = ExperimentDescriptor::resolve(&request("n", 10, 0)).unwrap_err();
        assert!(matches!(err, ExperimentError::ZeroTrials));
    }

    #[test]
    fn test_bad_formula_value() {
        fn negative(_: usize) -> f64 {
            -1.0
        }
        fn nan(_: usize) -> f64 {
            f64::NAN
        }
        for eval in [negative as fn(usize) -> f64, nan] {
            let req = DescriptorRequest {
                n: 10,
                formula: EdgeFormula {
                    name: "bad",
                    eval,
                    ns_max: 10,
                },
                trials: 1,
            };
            let err = ExperimentDescriptor::resolve(&req).unwrap_err();
            assert!(matches!(
                err,
                ExperimentError::InvalidEdgeTarget { formula: "bad", .. }
            ));
        }
    }
}
