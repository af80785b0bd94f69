use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    Tab,
    Mail,
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no browser window available")]
    NoWindow,
    #[error("popup blocked for {0}")]
    PopupBlocked(String),
    #[error("host rejected request: {0}")]
    Rejected(String),
}

/// Side effects the terminal asks of the page hosting it.
pub trait Host {
    fn navigate(&mut self, route: &str) -> Result<(), HostError>;
    fn open_external(&mut self, url: &str, target: OpenTarget) -> Result<(), HostError>;
}

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
    /// Renders `ms` the way the host locale prints a date and time.
    fn format_local(&self, ms: f64) -> String;
}

pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// xorshift64* generator. Same seed, same sequence.
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            // zero is a fixed point of xorshift
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..50 {
            assert_eq!(a.pick_index(4), b.pick_index(4));
        }
    }

    #[test]
    fn test_seeded_random_stays_in_range() {
        let mut r = SeededRandom::new(0);
        for _ in 0..200 {
            assert!(r.pick_index(3) < 3);
        }
    }

    #[test]
    fn test_host_error_messages() {
        assert_eq!(
            HostError::PopupBlocked("https://x".into()).to_string(),
            "popup blocked for https://x"
        );
    }
}
