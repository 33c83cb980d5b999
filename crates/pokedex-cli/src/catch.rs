//! Pokeball throws

use rand::Rng;
use std::io::{self, Write};
use std::time::Duration;

/// Throw power is drawn uniformly from `0..THROW_POWER_MAX`
pub const THROW_POWER_MAX: u32 = 1000;

const ANIMATION_ROUNDS: usize = 3;
const ANIMATION_STEP: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Caught,
    Escaped,
}

/// Roll a throw against `difficulty` (the creature's total base stats)
pub fn throw<R: Rng>(rng: &mut R, difficulty: u32) -> CatchOutcome {
    let power = rng.random_range(0..THROW_POWER_MAX);
    tracing::debug!(power, difficulty, "Pokeball thrown");
    outcome(power, difficulty)
}

fn outcome(power: u32, difficulty: u32) -> CatchOutcome {
    if power >= difficulty {
        CatchOutcome::Caught
    } else {
        CatchOutcome::Escaped
    }
}

/// Blink three dots a few times while the ball wobbles
pub async fn animate<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    for _ in 0..ANIMATION_ROUNDS {
        write!(out, "\r")?;
        for _ in 0..3 {
            write!(out, ".")?;
            out.flush()?;
            tokio::time::sleep(ANIMATION_STEP).await;
        }
        write!(out, "\r")?;
        for _ in 0..3 {
            write!(out, " ")?;
            out.flush()?;
            tokio::time::sleep(ANIMATION_STEP).await;
        }
    }
    write!(out, "\r")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_outcome_boundary() {
        assert_eq!(outcome(300, 300), CatchOutcome::Caught);
        assert_eq!(outcome(299, 300), CatchOutcome::Escaped);
        assert_eq!(outcome(0, 0), CatchOutcome::Caught);
    }

    #[test]
    fn test_zero_difficulty_always_caught() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(throw(&mut rng, 0), CatchOutcome::Caught);
        }
    }

    #[test]
    fn test_impossible_difficulty_always_escapes() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(throw(&mut rng, THROW_POWER_MAX), CatchOutcome::Escaped);
        }
    }

    #[test]
    fn test_same_seed_same_outcomes() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let left: Vec<_> = (0..20).map(|_| throw(&mut a, 500)).collect();
        let right: Vec<_> = (0..20).map(|_| throw(&mut b, 500)).collect();
        assert_eq!(left, right);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_output() {
        let mut out = Vec::new();
        let started = tokio::time::Instant::now();

        animate(&mut out).await.unwrap();

        assert!(started.elapsed() >= ANIMATION_STEP * 18);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('.').count(), 9);
        assert!(text.ends_with('\r'));
    }
}
