use anyhow::Result;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Synthetic assignment count for one generated puzzle. Counts grow with
/// both difficulty factors, with multiplicative run-to-run noise.
fn synth_assignments(size_factor: f64, type_factor: f64, rng: &mut SimpleRng) -> u64 {
    let mean = 400.0 * (1.0 + 4.0 * size_factor) * (1.0 + 1.5 * type_factor);
    let noisy = mean * (1.0 + rng.gauss(0.0, 0.15));
    noisy.max(1.0).round() as u64
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut wtr = csv::Writer::from_path("results.csv")?;
    wtr.write_record(["size", "type", "asgs"])?;

    let mut rows = 0usize;
    for size_f in 5..9 {
        for type_f in 1..10 {
            let size_factor = size_f as f64 / 10.0;
            let type_factor = type_f as f64 / 10.0;
            for _ in 0..10 {
                let asgs = synth_assignments(size_factor, type_factor, &mut rng);
                wtr.write_record([
                    size_factor.to_string(),
                    type_factor.to_string(),
                    asgs.to_string(),
                ])?;
                rows += 1;
            }
        }
    }

    wtr.flush()?;
    println!("wrote results.csv ({rows} rows)");
    Ok(())
}
