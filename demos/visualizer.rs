use happy_fixsynth::{note::Pitch, Block, Config, Fixed, Oscillator, Sinusoid, BUFSIZE};

fn main() {
    let cfg = Config {
        sample_rate: 4000.0,
        ..Default::default()
    };
    let mut a = Sinusoid::new();
    let mut e = Sinusoid::new();

    // The first block fades in, the second one holds.
    let mut out_buf: Block = [Fixed::ZERO; BUFSIZE];
    for _ in 0..2 {
        out_buf.fill(Fixed::ZERO);
        a.set(Fixed::from_f64(0.5), cfg.block_frequency(Pitch::A.frequency()));
        e.set(Fixed::from_f64(0.25), cfg.block_frequency(Pitch::E.frequency()));
        a.iterate(&mut out_buf);
        e.iterate(&mut out_buf);
    }

    for sample in out_buf.iter().take(256) {
        // construct a waveform
        let width = 80;
        let zero = width / 2;
        let amp = (sample.to_f64() * zero as f64) as i32;
        let mut wave = String::new();
        for i in 0..width {
            if i == zero {
                wave.push('|');
            } else if i == zero + amp {
                wave.push('+');
            } else {
                wave.push(' ');
            }
        }
        println!("{}", wave);
    }
}
