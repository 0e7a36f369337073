use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use lns::config::LNSConfig;
use lns::io::cli::Cli;
use lns::io::report::TextReport;
use lns::io::{SPOutput, read_instance};
use lns::opt::context::RunContext;
use lns::{EPOCH, io, opt};
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use strippack::io::svg::layout_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LNSConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(strip_width) = args.strip_width {
        config.strip_width = strip_width;
    }
    if let Some(seed) = args.seed {
        config.prng_seed = Some(seed);
    }
    config.validate()?;

    info!("[MAIN] Successfully parsed LNSConfig: {config:?}");

    let ext_instance = read_instance(&args.input_file)?;
    let instance = strippack::io::import(&ext_instance, config.strip_width)?;
    info!(
        "[MAIN] loaded instance {} with {} items, height lower bound: {}",
        instance.name,
        instance.total_item_qty(),
        instance.height_lower_bound()
    );

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let report = TextReport::create(&args.report_file)?;
    let mut ctx = RunContext::new(rng, report);

    let max_iterations = usize::try_from(args.max_iterations)?;
    let layout = opt::solve(
        args.algorithm,
        &instance,
        &config,
        max_iterations,
        args.annealing,
        &mut ctx,
    )?;
    let elapsed = ctx.elapsed();

    info!("[MAIN] > Evaluation");
    info!("[MAIN]      Packing Efficiency: {:.3}%", layout.fitness() * 100.0);
    info!("[MAIN]      Packing Height:     {}", layout.height());
    info!("[MAIN]      Elapsed Time:       {}ms", elapsed.as_millis());
    info!(
        "[MAIN]      Solution:           '{}'",
        strippack::io::sequence_signature(layout.placed_items())
    );
    info!("[MAIN] total run time: {:.3}s", EPOCH.elapsed().as_secs_f64());

    let input_name = args.input_file.display().to_string();
    let algorithm = args.algorithm.name();
    io::write_text_solution(&layout, &input_name, algorithm, elapsed, &args.solution_file)?;

    if let Some(json_path) = &args.json {
        let output = SPOutput {
            instance: ext_instance,
            algorithm: algorithm.to_string(),
            solution: strippack::io::export(&layout, elapsed),
            config,
        };
        io::write_json(&output, json_path)?;
    }

    if let Some(svg_path) = &args.svg {
        let svg = layout_to_svg(&layout, config.svg_draw_options, algorithm);
        io::write_svg(&svg, svg_path)?;
    }

    Ok(())
}
