//! Play the 13-note scale on the default output device, one note per few blocks.

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Sample,
};
use happy_fixsynth::{note::Pitch, Block, Config, Fixed, Oscillator, Sinusoid, BUFSIZE};

const BLOCKS_PER_NOTE: usize = 12;

fn main() {
    env_logger::init();

    let host = cpal::default_host();
    let out_dev = host
        .default_output_device()
        .expect("no output device available");
    let mut support_config_range = out_dev
        .supported_output_configs()
        .expect("No supported config");
    let config = support_config_range
        .find(|c| c.sample_format() == cpal::SampleFormat::F32)
        .expect("no supported output configuration")
        .with_max_sample_rate();

    let sample_rate = config.sample_rate().0 as f64;
    println!("Sample rate: {}", sample_rate);
    let channel_count = config.channels() as usize;
    println!("Channels: {}", channel_count);

    let cfg = Config {
        sample_rate,
        ..Default::default()
    };
    // Score: every pitch, then one silent block count to let the last note fade out.
    let score = Pitch::ALL.map(Some).into_iter().chain([None]).collect::<Vec<_>>();
    let duration =
        (score.len() * BLOCKS_PER_NOTE * BUFSIZE) as f64 / sample_rate + 0.2;

    let stream = out_dev
        .build_output_stream(
            &config.config(),
            {
                let mut osc = Sinusoid::new();
                let mut block: Block = [Fixed::ZERO; BUFSIZE];
                let mut cursor = BUFSIZE; // Next sample to read from `block`
                let mut blocks_played = 0;
                move |d: &mut [f32], _info| {
                    d.fill(Sample::EQUILIBRIUM);
                    for frame in d.chunks_mut(channel_count) {
                        if cursor == BUFSIZE {
                            let note = score.get(blocks_played / BLOCKS_PER_NOTE).copied().flatten();
                            match note {
                                Some(pitch) => osc.set(
                                    Fixed::from_f64(0.3),
                                    cfg.block_frequency(pitch.frequency()),
                                ),
                                None => osc.set(Fixed::ZERO, Fixed::ZERO),
                            }
                            block.fill(Fixed::ZERO);
                            osc.iterate(&mut block);
                            blocks_played += 1;
                            cursor = 0;
                        }
                        frame.fill(block[cursor].to_f64() as f32);
                        cursor += 1;
                    }
                }
            },
            |e| panic!("{}", e),
            None,
        )
        .unwrap();

    stream.play().unwrap();

    std::thread::sleep(std::time::Duration::from_secs_f64(duration));
}
