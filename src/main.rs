use anyhow::{Context, Result};
use log::info;
use rand::{thread_rng, Rng};

use noise_injection_tool::data::{
    generator::SequenceGenerator,
    limits::Limit,
    noise::{NoiseInjector, StepRange},
    table::{Column, Dataset},
    widen,
};

const ROWS: usize = 200;
const NOISE_FRACTION: f64 = 0.15;
const OUTPUT_PATH: &str = "./study_data.csv";

fn noisy_column<R: Rng>(
    rng: &mut R,
    name: &str,
    limits: (i64, i64),
    negative: StepRange,
    positive: StepRange,
) -> Result<Column> {
    let limits = [Limit::Int(limits.0), Limit::Int(limits.1)];
    let values = SequenceGenerator::new(ROWS, &limits).generate(rng)?;

    let cells = widen(&values);
    let cells = NoiseInjector::new(negative, NOISE_FRACTION).inject(rng, &cells)?;
    let cells = NoiseInjector::new(positive, NOISE_FRACTION).inject(rng, &cells)?;

    Ok(Column::new(name, cells))
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = thread_rng();

    let studying_hours = noisy_column(
        &mut rng,
        "Hours",
        (0, 10),
        StepRange::new(0, -5, -1),
        StepRange::new(11, 25, 1),
    )?;
    let average_marks = noisy_column(
        &mut rng,
        "marks",
        (0, 100),
        StepRange::new(0, -50, -1),
        StepRange::new(100, 150, 1),
    )?;

    let dataset = Dataset::new(vec![studying_hours, average_marks])?;
    dataset
        .to_csv_file(OUTPUT_PATH)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;
    info!("wrote {} rows to {}", dataset.height(), OUTPUT_PATH);

    println!("{dataset}");

    Ok(())
}
