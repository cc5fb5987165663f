//! Equal-tempered pitch names and their frequencies, tuned to A = 440 Hz.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One octave of pitches from middle C up to the C above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    C,
    CSharp,
    D,
    EFlat,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    BFlat,
    B,
    /// The C one octave above [`Pitch::C`].
    HighC,
}

impl Pitch {
    pub const ALL: [Pitch; 13] = [
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::EFlat,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
        Pitch::A,
        Pitch::BFlat,
        Pitch::B,
        Pitch::HighC,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pitch::C => "C",
            Pitch::CSharp => "C#",
            Pitch::D => "D",
            Pitch::EFlat => "Eb",
            Pitch::E => "E",
            Pitch::F => "F",
            Pitch::FSharp => "F#",
            Pitch::G => "G",
            Pitch::GSharp => "G#",
            Pitch::A => "A",
            Pitch::BFlat => "Bb",
            Pitch::B => "B",
            Pitch::HighC => "C'",
        }
    }

    /// Semitones above [`Pitch::C`].
    pub fn semitone(self) -> i32 {
        self as i32
    }

    /// The frequency in Hz.
    pub fn frequency(self) -> f64 {
        440.0 * 2.0_f64.powf((self.semitone() - Pitch::A.semitone()) as f64 / 12.0)
    }
}

impl FromStr for Pitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pitch::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownPitch(s.to_owned()))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
