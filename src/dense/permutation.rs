/// Row permutation recorded during pivoting: a mapping from logical row
/// position to original row index, plus the parity of the transpositions.
/// The mapping is a bijection on {0,...,n-1} at all times because the only
/// mutation is swapping two entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    vec: Vec<usize>,
    parity: bool,
}

impl Permutation {
    /// identity permutation: perm[i] = i, even parity
    pub fn identity(n: usize) -> Permutation {
        Permutation {
            vec: (0..n).collect(),
            parity: false,
        }
    }

    /// Swap positions `a` and `b`. The parity flips iff `a != b`;
    /// `permute(a, a)` is a no-op.
    pub fn permute(&mut self, a: usize, b: usize) {
        if a != b {
            self.vec.swap(a, b);
            self.parity = !self.parity;
        }
    }

    pub fn vector(&self) -> &[usize] {
        &self.vec
    }

    /// whether an odd number of effective transpositions occurred
    pub fn parity(&self) -> bool {
        self.parity
    }

    /// sign of the determinant contribution: -1.0 for odd parity, 1.0 for even
    pub fn sign(&self) -> f64 {
        if self.parity { -1.0 } else { 1.0 }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}
