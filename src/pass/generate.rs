//! Password sampling.

use std::io::{self, Write};

use log::trace;
use rand::Rng;
use zeroize::Zeroize;

use super::config::GeneratorConfig;
use crate::entropy::HwRng;

impl GeneratorConfig {
    /// Generate a password from the hardware-counter source.
    pub fn generate(&self) -> String {
        self.generate_with(&mut HwRng::new())
    }

    /// Generate a password, picking a class uniformly for every position and
    /// then a character uniformly within it.
    ///
    /// Returns an empty string when the length is zero or no class is active.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let classes = self.active_classes();
        let length = self.get_length();
        if length == 0 || classes.is_empty() {
            return String::new();
        }

        trace!("sampling {length} chars from {} classes", classes.len());
        (0..length)
            .map(|_| {
                let chars = classes[rng.gen_range(0..classes.len())].chars();
                chars[rng.gen_range(0..chars.len())]
            })
            .collect()
    }
}

/// Write `count` passwords, one per line. Each line is wiped once written.
pub fn generate_batch<R, W>(
    config: &GeneratorConfig,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    for _ in 0..count {
        let mut pass = config.generate_with(rng);
        pass.push('\n');
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharClass;

    fn config(length: i64, classes: &[CharClass]) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        config.set_length(length);
        for &class in classes {
            config.add_class(class);
        }
        config
    }

    #[test]
    fn zero_length_gives_empty_string() {
        let config = config(0, &CharClass::ALL);
        assert_eq!(config.generate(), "");
    }

    #[test]
    fn no_classes_gives_empty_string() {
        let config = config(16, &[]);
        assert_eq!(config.generate(), "");
    }

    #[test]
    fn numbers_only_scenario() {
        let mut config = GeneratorConfig::new();
        config.add_class(CharClass::Numbers);
        config.set_length(8);
        let pass = config.generate();
        assert_eq!(pass.chars().count(), 8);
        assert!(pass.chars().all(|c| c.is_ascii_digit()), "{pass:?}");
    }

    #[test]
    fn output_stays_within_active_classes() {
        let active = [CharClass::Lowercase, CharClass::Punctuation];
        let config = config(64, &active);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pass = config.generate_with(&mut rng);
            assert_eq!(pass.chars().count(), 64);
            assert!(pass.chars().all(|c| active.iter().any(|a| a.contains(c))));
        }
    }

    #[test]
    fn every_length_is_honoured() {
        let mut rng = StdRng::seed_from_u64(3);
        for length in 1..=25 {
            let config = config(length, &CharClass::ALL);
            assert_eq!(config.generate_with(&mut rng).chars().count(), length as usize);
        }
    }

    #[test]
    fn classes_are_picked_evenly_not_by_size() {
        let config = config(10_000, &[CharClass::Numbers, CharClass::Punctuation]);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let pass = config.generate_with(&mut rng);
        let digits = pass.chars().filter(|c| c.is_ascii_digit()).count();
        let ratio = digits as f64 / 10_000.0;
        // size-weighted sampling would give 10/42, about 24%
        assert!((0.46..=0.54).contains(&ratio), "digit ratio {ratio}");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = config(20, &CharClass::ALL);
        let a = config.generate_with(&mut StdRng::seed_from_u64(99));
        let b = config.generate_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn generate_does_not_mutate_config() {
        let config = config(12, &[CharClass::Uppercase]);
        let before = config.clone();
        let _ = config.generate();
        assert_eq!(config, before);
    }

    #[test]
    fn batch_writes_one_line_per_password() {
        let config = config(10, &[CharClass::Uppercase]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();
        generate_batch(&config, 5, &mut rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 10));
        assert!(lines.iter().all(|l| l.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn batch_with_empty_config_writes_blank_lines() {
        let config = GeneratorConfig::new();
        let mut out = Vec::new();
        generate_batch(&config, 3, &mut HwRng::new(), &mut out).unwrap();
        assert_eq!(out, b"\n\n\n");
    }
}
