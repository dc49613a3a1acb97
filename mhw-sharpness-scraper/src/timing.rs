use std::iter::Sum;
use std::ops::Add;
use std::time::Duration;

/// Time spent fetching documents versus extracting weapons from them.
///
/// Returned by each category task and summed upward; nothing is recorded
/// globally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub network: Duration,
    pub processing: Duration,
}

impl Timings {
    pub fn new(network: Duration, processing: Duration) -> Self {
        Self {
            network,
            processing,
        }
    }

    pub fn total(&self) -> Duration {
        self.network + self.processing
    }
}

impl Add for Timings {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            network: self.network + rhs.network,
            processing: self.processing + rhs.processing,
        }
    }
}

impl Sum for Timings {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_componentwise() {
        let parts = [
            Timings::new(Duration::from_millis(100), Duration::from_millis(5)),
            Timings::new(Duration::from_millis(250), Duration::from_millis(7)),
        ];
        let total: Timings = parts.into_iter().sum();
        assert_eq!(total.network, Duration::from_millis(350));
        assert_eq!(total.processing, Duration::from_millis(12));
        assert_eq!(total.total(), Duration::from_millis(362));
    }
}
