use clap::Parser;
use neuro_atlas::app::report::{self, RenderOptions};
use neuro_atlas::core::{aggregate, dataset};
use neuro_atlas::utils::{logger, validation::Validate};
use neuro_atlas::{CliConfig, DatasetProvider, DisplayConfig, OutputFormat, Result};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting neuro-atlas CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli) {
        Ok(()) => {
            tracing::info!("✅ Report completed");
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<()> {
    let display = match &cli.config {
        Some(path) => DisplayConfig::from_file(path)?,
        None => DisplayConfig::default(),
    };
    display.validate()?;

    let provider = dataset::builtin();

    if cli.list {
        for name in provider.list_disorders() {
            println!("{}", name);
        }
        return Ok(());
    }

    // Default selection is the first table entry.
    let name = match &cli.disorder {
        Some(name) => name.clone(),
        None => provider.list_disorders()[0].to_string(),
    };

    let row = provider.get_row(&name)?;
    let description = provider.description(&name)?;
    let stats = aggregate::summarize(row)?;

    tracing::debug!(
        "Summary for {}: {} up, {} down, {} neutral",
        name,
        stats.increased,
        stats.decreased,
        stats.neutral
    );

    match cli.format {
        OutputFormat::Json => {
            println!("{}", report::render_json(&name, description, row, &stats)?);
        }
        OutputFormat::Text if cli.no_animation => {
            println!(
                "{}",
                report::render_text(
                    &name,
                    description,
                    row,
                    &stats,
                    &RenderOptions::new(&display, cli.no_color)
                )
            );
        }
        OutputFormat::Text => {
            let opts = RenderOptions::new(&display, cli.no_color);
            println!("=== {} ===", name);
            println!("{}\n", description);
            println!("Neurotransmitter Levels");
            let delay = std::time::Duration::from_millis(display.animation_ms());
            for line in report::bar_lines(row, &opts) {
                println!("{}", line);
                std::thread::sleep(delay);
            }
            println!();
            for line in report::summary_lines(&stats, &opts) {
                println!("{}", line);
            }
            println!("\nLegend");
            for line in report::legend_lines() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
