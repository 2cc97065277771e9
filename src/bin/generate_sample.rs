use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Booster eras in flight order: (category, first flight, success rate, max payload kg).
const ERAS: [(&str, i64, f64, f64); 5] = [
    ("v1.0", 1, 0.40, 700.0),
    ("v1.1", 6, 0.45, 4500.0),
    ("FT", 21, 0.75, 9600.0),
    ("B4", 39, 0.80, 9600.0),
    ("B5", 50, 0.95, 16000.0),
];

const FLIGHTS: i64 = 56;

/// Minimal deterministic PRNG (SplitMix64).
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Launch {
    flight: i64,
    site: &'static str,
    class: i64,
    payload: f64,
    booster: String,
    category: &'static str,
}

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    (1..=FLIGHTS)
        .map(|flight| {
            let (category, _, success_rate, max_payload) = ERAS
                .iter()
                .rev()
                .find(|(_, first, _, _)| flight >= *first)
                .copied()
                .unwrap_or(ERAS[0]);
            // Early flights often flew with no payload at all.
            let payload = if rng.next_f64() < 0.05 {
                0.0
            } else {
                (rng.next_f64() * max_payload).round()
            };
            Launch {
                flight,
                site: rng.pick(&SITES),
                class: i64::from(rng.next_f64() < success_rate),
                payload,
                booster: format!("F9 {category} B{:04}", 1000 + flight),
                category,
            }
        })
        .collect()
}

fn write_parquet(launches: &[Launch], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.booster.as_str()))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn write_csv(launches: &[Launch], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for l in launches {
        writer.write_record([
            l.flight.to_string(),
            l.site.to_string(),
            l.class.to_string(),
            format!("{:.1}", l.payload),
            l.booster.clone(),
            l.category.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng(42);
    let launches = generate(&mut rng);

    write_parquet(&launches, "spacex_launch_dash.parquet")?;
    write_csv(&launches, "spacex_launch_dash.csv")?;

    println!(
        "Wrote {} launches to spacex_launch_dash.parquet and spacex_launch_dash.csv",
        launches.len()
    );
    Ok(())
}
