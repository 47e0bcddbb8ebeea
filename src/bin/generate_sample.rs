//! Writes a folder of synthetic aim-trainer stats files for trying the viewer.
//!
//! Usage: `generate_sample [OUT_DIR]` (defaults to `sample_stats`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// (scenario, runs, starting score, improvement per run)
const SCENARIOS: &[(&str, usize, f64, f64)] = &[
    ("Gridshot Ultimate", 12, 780.0, 6.5),
    ("1wall6targets TE", 9, 64.0, 1.2),
    ("Close Long Strafes Invincible", 6, 2450.0, -8.0),
];

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

/// Write one stats file in the trainer's layout: kill rows, then a
/// `Field:,value` summary block.
fn write_stats_file(path: &Path, scenario: &str, score: f64, rng: &mut SimpleRng) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "Kill #", "Timestamp", "Bot", "Weapon", "TTK", "Shots", "Hits", "Accuracy",
    ])?;
    let kills = 20 + (rng.next_u64() % 20) as usize;
    let mut ttk_sum = 0.0;
    for kill in 1..=kills {
        let ttk = rng.gauss(0.45, 0.08).max(0.1);
        ttk_sum += ttk;
        let shots = 1 + rng.next_u64() % 3;
        writer.write_record([
            kill.to_string(),
            format!("12:{:02}:{:02}.000", kill / 60, kill % 60),
            "Target".to_string(),
            "Pistol".to_string(),
            format!("{ttk:.6}"),
            shots.to_string(),
            "1".to_string(),
            format!("{:.6}", 1.0 / shots as f64),
        ])?;
    }

    writer.write_record([""])?;
    let avg_ttk = format!("{:.6}", ttk_sum / kills as f64);
    let score = format!("{score:.6}");
    writer.write_record(["Kills:", kills.to_string().as_str()])?;
    writer.write_record(["Deaths:", "0"])?;
    writer.write_record(["Avg TTK:", avg_ttk.as_str()])?;
    writer.write_record(["Score:", score.as_str()])?;
    writer.write_record(["Scenario:", scenario])?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_stats"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let mut written = 0usize;

    for (s, &(scenario, runs, start, step)) in SCENARIOS.iter().enumerate() {
        let noise = start.abs() * 0.02;
        for run in 0..runs {
            let score = (start + step * run as f64 + rng.gauss(0.0, noise)).max(0.0);
            let name = format!(
                "{scenario} - Challenge - 2024.03.{:02}-{:02}.{:02}.00 Stats.csv",
                1 + s,
                10 + run / 60,
                run % 60
            );
            write_stats_file(&out_dir.join(&name), scenario, score, &mut rng)?;
            written += 1;
        }
    }

    log::info!("Wrote {written} stats files");
    println!("Wrote {written} stats files to {}", out_dir.display());
    Ok(())
}
