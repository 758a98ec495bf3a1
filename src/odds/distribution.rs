use super::bucket::Bucket;
use crate::Probability;

/// Probability mass over the six terminal buckets. Sums to 1 (within
/// floating point tolerance) whenever computed from a live starting hand.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Distribution([Probability; 6]);

impl Distribution {
    /// All mass on a single bucket.
    pub fn unit(bucket: Bucket) -> Self {
        let mut dist = Self::default();
        dist.0[bucket as usize] = 1.0;
        dist
    }

    pub fn get(&self, bucket: Bucket) -> Probability {
        self.0[bucket as usize]
    }

    pub fn add(&mut self, bucket: Bucket, mass: Probability) {
        self.0[bucket as usize] += mass;
    }

    pub fn mass(&self) -> Probability {
        self.0.iter().sum()
    }

    pub fn masses(&self) -> &[Probability; 6] {
        &self.0
    }

    /// Bit-exact equality, for determinism checks.
    pub fn identical(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl From<[Probability; 6]> for Distribution {
    fn from(masses: [Probability; 6]) -> Self {
        Self(masses)
    }
}

impl std::ops::Add for Distribution {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut sum = self;
        for (lhs, rhs) in sum.0.iter_mut().zip(other.0.iter()) {
            *lhs += rhs;
        }
        sum
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for bucket in Bucket::ALL {
            write!(f, "{:>4} {:>7.4} ", bucket, self.get(bucket))?;
        }
        Ok(())
    }
}
