//! Render one block of a single note and print every sample.
//!
//! Usage: `cargo run --example print_block -- [PITCH]` where `PITCH` is one of
//! `C C# D Eb E F F# G G# A Bb B C'` (default `C`).

use happy_fixsynth::{note::Pitch, Block, Config, Fixed, Oscillator, Sinusoid, BUFSIZE};

fn main() -> Result<(), happy_fixsynth::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let pitch: Pitch = match std::env::args().nth(1) {
        Some(name) => name.parse()?,
        None => Pitch::C,
    };
    let cfg = Config::default();
    eprintln!("{pitch}: {:.3} Hz", pitch.frequency());

    let mut osc = Sinusoid::new();
    osc.set(Fixed::ONE, cfg.block_frequency(pitch.frequency()));
    let mut buf: Block = [Fixed::ZERO; BUFSIZE];
    osc.iterate(&mut buf);

    for (i, sample) in buf.iter().enumerate() {
        println!("{i:4} {sample}");
    }
    Ok(())
}
