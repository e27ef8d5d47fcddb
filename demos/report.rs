use meteo_report::{generate_daily_summary, generate_summary, load_data_from_csv};
use miette::{miette, IntoDiagnostic};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> miette::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let file = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("Missing filename"))?;
    tracing::info!("opening {file}");

    let table = load_data_from_csv(&file)?;

    print!("{}", generate_summary(&table)?);
    println!();
    print!("{}", generate_daily_summary(&table)?);

    std::io::Write::flush(&mut std::io::stdout()).into_diagnostic()?;
    Ok(())
}
