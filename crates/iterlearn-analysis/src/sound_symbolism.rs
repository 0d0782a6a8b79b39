//! Sound symbolism: stimulus pointedness by the sounds in their labels.
//!
//! The sound inventory is a fixed enumeration of the transcription symbols
//! used by the experiment, with accumulators per sound, rather than an
//! ad hoc string-keyed map grown by membership tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use iterlearn_core::{mean, population_std, Triangle};

/// `P^2 / A` for an equilateral triangle (`12 * sqrt(3)`), the reference
/// shape for pointedness.
const EQUILATERAL_RATIO: f64 = 20.784_609_690_826_528;

/// Pointedness of a triangle: the log ratio of the area an equilateral
/// triangle with the same perimeter would have to the actual area.
///
/// Zero for an equilateral triangle; grows as the triangle becomes more
/// elongated or spiky, reaching `f64::INFINITY` for a degenerate
/// (zero-area, collinear) triangle.
pub fn pointedness(triangle: &Triangle) -> f64 {
    let perimeter = triangle.perimeter();
    let expected_area = perimeter * perimeter / EQUILATERAL_RATIO;
    (expected_area / triangle.area()).ln()
}

/// The experiment's transcription sound inventory.
///
/// Each variant carries the ASCII transcription symbol that appears in
/// segmented words (uppercase for the sounds the transcription distinguishes
/// from their lowercase counterparts) and an IPA rendering for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    // Consonants
    B, Ch, D, Dh, F, G, H, Jh, K, L, M, N, Ng, P, R, S, Sh, T, Th, V, W, Y, Z, Zh,
    // Vowels
    Aa, Ae, Ao, Aw, Ax, Ay, Eh, Ey, Ih, Iy, Oi, Ow, Uh, Uw, Ux,
}

impl Sound {
    /// Every sound in the inventory.
    pub const ALL: [Sound; 39] = [
        Sound::B, Sound::Ch, Sound::D, Sound::Dh, Sound::F, Sound::G, Sound::H, Sound::Jh,
        Sound::K, Sound::L, Sound::M, Sound::N, Sound::Ng, Sound::P, Sound::R, Sound::S,
        Sound::Sh, Sound::T, Sound::Th, Sound::V, Sound::W, Sound::Y, Sound::Z, Sound::Zh,
        Sound::Aa, Sound::Ae, Sound::Ao, Sound::Aw, Sound::Ax, Sound::Ay, Sound::Eh, Sound::Ey,
        Sound::Ih, Sound::Iy, Sound::Oi, Sound::Ow, Sound::Uh, Sound::Uw, Sound::Ux,
    ];

    /// ASCII transcription symbol as it appears in segmented words.
    pub fn symbol(self) -> &'static str {
        match self {
            Sound::B => "b",
            Sound::Ch => "C",
            Sound::D => "d",
            Sound::Dh => "D",
            Sound::F => "f",
            Sound::G => "g",
            Sound::H => "h",
            Sound::Jh => "J",
            Sound::K => "k",
            Sound::L => "l",
            Sound::M => "m",
            Sound::N => "n",
            Sound::Ng => "N",
            Sound::P => "p",
            Sound::R => "r",
            Sound::S => "s",
            Sound::Sh => "S",
            Sound::T => "t",
            Sound::Th => "T",
            Sound::V => "v",
            Sound::W => "w",
            Sound::Y => "y",
            Sound::Z => "z",
            Sound::Zh => "Z",
            Sound::Aa => "AA",
            Sound::Ae => "AE",
            Sound::Ao => "AO",
            Sound::Aw => "AW",
            Sound::Ax => "AX",
            Sound::Ay => "AY",
            Sound::Eh => "EH",
            Sound::Ey => "EY",
            Sound::Ih => "IH",
            Sound::Iy => "IY",
            Sound::Oi => "OI",
            Sound::Ow => "OW",
            Sound::Uh => "UH",
            Sound::Uw => "UW",
            Sound::Ux => "UX",
        }
    }

    /// IPA rendering for presentation.
    pub fn ipa(self) -> &'static str {
        match self {
            Sound::B => "b",
            Sound::Ch => "tʃ",
            Sound::D => "d",
            Sound::Dh => "ð",
            Sound::F => "f",
            Sound::G => "g",
            Sound::H => "h",
            Sound::Jh => "dʒ",
            Sound::K => "k",
            Sound::L => "l",
            Sound::M => "m",
            Sound::N => "n",
            Sound::Ng => "ŋ",
            Sound::P => "p",
            Sound::R => "r",
            Sound::S => "s",
            Sound::Sh => "ʃ",
            Sound::T => "t",
            Sound::Th => "θ",
            Sound::V => "v",
            Sound::W => "w",
            Sound::Y => "j",
            Sound::Z => "z",
            Sound::Zh => "ʒ",
            Sound::Aa => "ɑː",
            Sound::Ae => "a",
            Sound::Ao => "ɔː",
            Sound::Aw => "aʊ",
            Sound::Ax => "ə",
            Sound::Ay => "ʌɪ",
            Sound::Eh => "ɛ",
            Sound::Ey => "eɪ",
            Sound::Ih => "ɪ",
            Sound::Iy => "iː",
            Sound::Oi => "ɔɪ",
            Sound::Ow => "əʊ",
            Sound::Uh => "ə",
            Sound::Uw => "uː",
            Sound::Ux => "ʌ",
        }
    }

    /// Whether `word` (a joined transcription) contains this sound.
    pub fn occurs_in(self, word: &str) -> bool {
        word.contains(self.symbol())
    }
}

/// Accumulates pointedness samples per sound.
#[derive(Debug, Clone, Default)]
pub struct SoundProfile {
    samples: HashMap<Sound, Vec<f64>>,
}

impl SoundProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stimulus: every sound occurring in `word` receives the
    /// triangle's pointedness as a sample.
    pub fn record(&mut self, word: &str, triangle: &Triangle) {
        let value = pointedness(triangle);
        for sound in Sound::ALL {
            if sound.occurs_in(word) {
                self.samples.entry(sound).or_default().push(value);
            }
        }
    }

    /// Number of stimuli recorded for a sound.
    pub fn sample_count(&self, sound: Sound) -> usize {
        self.samples.get(&sound).map_or(0, Vec::len)
    }

    /// Mean pointedness for a sound, if any samples were recorded.
    pub fn mean_pointedness(&self, sound: Sound) -> Option<f64> {
        let values = self.samples.get(&sound)?;
        Some(mean(values))
    }

    /// Population standard deviation of a sound's pointedness samples.
    pub fn std_pointedness(&self, sound: Sound) -> Option<f64> {
        let values = self.samples.get(&sound)?;
        Some(population_std(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iterlearn_core::Point;

    fn equilateral() -> Triangle {
        let h = 3f64.sqrt() / 2.0;
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, h),
        )
    }

    fn sliver() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 0.1),
        )
    }

    #[test]
    fn equilateral_pointedness_is_zero() {
        assert!(pointedness(&equilateral()).abs() < 1e-9);
    }

    #[test]
    fn slivers_are_pointier() {
        assert!(pointedness(&sliver()) > pointedness(&equilateral()));
    }

    #[test]
    fn inventory_symbols_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for sound in Sound::ALL {
            assert!(seen.insert(sound.symbol()), "duplicate {}", sound.symbol());
        }
        assert_eq!(seen.len(), 39);
    }

    #[test]
    fn occurrence_is_case_sensitive() {
        // "S" transcribes ʃ; lowercase "s" is a different sound.
        assert!(Sound::Sh.occurs_in("Sip"));
        assert!(!Sound::Sh.occurs_in("sip"));
        assert!(Sound::S.occurs_in("sip"));
        assert!(Sound::Aa.occurs_in("kAAn"));
        // The ɔɪ diphthong is transcribed "OI", not "OY".
        assert!(Sound::Oi.occurs_in("tOIn"));
        assert!(!Sound::Oi.occurs_in("tOYn"));
    }

    #[test]
    fn oi_diphthong_accumulates_samples() {
        let mut profile = SoundProfile::new();
        profile.record("tOIn", &sliver());
        assert_eq!(profile.sample_count(Sound::Oi), 1);
        assert!(profile.mean_pointedness(Sound::Oi).unwrap() > 0.0);
    }

    #[test]
    fn degenerate_triangle_pointedness_is_infinite() {
        let flat = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert_eq!(flat.area(), 0.0);
        assert_eq!(pointedness(&flat), f64::INFINITY);
    }

    #[test]
    fn profile_accumulates_by_sound() {
        let mut profile = SoundProfile::new();
        profile.record("kiki", &sliver());
        profile.record("bOWbOW", &equilateral());

        assert_eq!(profile.sample_count(Sound::K), 1);
        assert_eq!(profile.sample_count(Sound::B), 1);
        assert_eq!(profile.sample_count(Sound::Ow), 1);
        assert_eq!(profile.sample_count(Sound::M), 0);

        assert!(profile.mean_pointedness(Sound::K).unwrap() > 0.0);
        assert!(profile.mean_pointedness(Sound::B).unwrap().abs() < 1e-9);
        assert_eq!(profile.mean_pointedness(Sound::M), None);
    }
}
