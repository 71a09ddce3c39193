use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

use salescope::data::DEFAULT_DATA_FILE;

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

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const REGIONS: &[&str] = &["North", "South", "East", "West"];
const EXTRA_ROWS: usize = 33;

/// The seven canonical dirty rows: a duplicate id (101), mixed date formats
/// in one column, a blank Sales cell, and a numeral-string 600.
const CANONICAL_ROWS: [(i64, &str, &str, &str); 7] = [
    (101, "2025-11-01", "500", "North"),
    (102, "2025-11-01", "200", "South"),
    (103, "2025-11-02", "", "North"),
    (104, "Nov 3, 2025", "400", "East"),
    (101, "2025-11-04", "500", "North"),
    (106, "2025-11-05", "600", "West"),
    (107, "2025-11-06", "700", "West"),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(DEFAULT_DATA_FILE)
        .with_context(|| format!("creating {DEFAULT_DATA_FILE}"))?;
    writer
        .write_record(["TransactionID", "Date", "Sales", "Region"])
        .context("writing header")?;

    for (id, date, sales, region) in CANONICAL_ROWS {
        writer
            .write_record([id.to_string().as_str(), date, sales, region])
            .context("writing canonical row")?;
    }

    // A seeded batch of extra dirty rows so the trend chart has substance:
    // rotating date formats, occasional duplicate ids, blank or textual
    // sales values, the odd unparseable date.
    let mut id: i64 = 108;
    let mut date = NaiveDate::from_ymd_opt(2025, 11, 7).expect("valid start date");
    let mut duplicates = 0usize;

    for i in 0..EXTRA_ROWS {
        let row_id = if i > 0 && rng.next_f64() < 0.10 {
            duplicates += 1;
            id - 1
        } else {
            let fresh = id;
            id += 1;
            fresh
        };

        let date_text = if rng.next_f64() < 0.06 {
            "pending".to_string()
        } else {
            match i % 3 {
                0 => date.format("%Y-%m-%d").to_string(),
                1 => date.format("%b %d, %Y").to_string(),
                _ => date.format("%m/%d/%Y").to_string(),
            }
        };

        let sales_text = {
            let roll = rng.next_f64();
            if roll < 0.08 {
                String::new()
            } else if roll < 0.14 {
                "N/A".to_string()
            } else {
                let amount = rng.gauss(450.0, 150.0).max(25.0);
                if i % 4 == 0 {
                    // Numeral string without decimals, like the classic '600'.
                    (amount.round() as i64).to_string()
                } else {
                    format!("{amount:.2}")
                }
            }
        };

        let region = rng.pick(REGIONS);

        writer
            .write_record([
                row_id.to_string().as_str(),
                date_text.as_str(),
                sales_text.as_str(),
                region,
            ])
            .context("writing generated row")?;

        date = date + Duration::days((rng.next_u64() % 3) as i64);
    }

    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} rows ({} canonical + {} generated, {} duplicate ids) to {DEFAULT_DATA_FILE}",
        CANONICAL_ROWS.len() + EXTRA_ROWS,
        CANONICAL_ROWS.len(),
        EXTRA_ROWS,
        duplicates + 1
    );

    Ok(())
}
