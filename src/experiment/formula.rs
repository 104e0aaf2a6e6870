/// A named edge-count formula `n -> m` and the largest vertex count it is
/// swept up to.
#[derive(Debug, Clone, Copy)]
pub struct EdgeFormula {
    pub name: &'static str,
    pub eval: fn(usize) -> f64,
    pub ns_max: usize,
}

fn sqrt_n(n: usize) -> f64 {
    (n as f64).sqrt()
}

fn linear(n: usize) -> f64 {
    n as f64
}

fn one_and_half_n(n: usize) -> f64 {
    1.5 * n as f64
}

fn twice_n(n: usize) -> f64 {
    2.0 * n as f64
}

fn thrice_n(n: usize) -> f64 {
    3.0 * n as f64
}

fn n_log2_n(n: usize) -> f64 {
    n as f64 * (n as f64).log2()
}

pub const STANDARD_FORMULAS: [EdgeFormula; 6] = [
    EdgeFormula {
        name: "sqrt(n)",
        eval: sqrt_n,
        ns_max: 500,
    },
    EdgeFormula {
        name: "n",
        eval: linear,
        ns_max: 800,
    },
    EdgeFormula {
        name: "1.5n",
        eval: one_and_half_n,
        ns_max: 800,
    },
    EdgeFormula {
        name: "2n",
        eval: twice_n,
        ns_max: 800,
    },
    EdgeFormula {
        name: "3n",
        eval: thrice_n,
        ns_max: 1200,
    },
    EdgeFormula {
        name: "n*log2(n)",
        eval: n_log2_n,
        ns_max: 300,
    },
];

impl EdgeFormula {
    pub fn by_name(name: &str) -> Option<EdgeFormula> {
        STANDARD_FORMULAS.iter().find(|f| f.name == name).copied()
    }

    pub fn evaluate(&self, n: usize) -> f64 {
        (self.eval)(n)
    }
}
