use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::{Deserialize, Serialize};
use strippack::entities::Layout;
use strippack::io::ext_repr::{ExtSPInstance, ExtSPSolution};
use svg::Document;

use crate::EPOCH;
use crate::config::LNSConfig;

pub mod cli;
pub mod report;

/// Instance, solution and configuration of a run, bundled in one JSON document
#[derive(Serialize, Deserialize, Clone)]
pub struct SPOutput {
    #[serde(flatten)]
    pub instance: ExtSPInstance,
    pub algorithm: String,
    pub solution: ExtSPSolution,
    pub config: LNSConfig,
}

/// Reads an instance from a JSON file (`.json` extension) or from the plain text format.
pub fn read_instance(path: &Path) -> Result<ExtSPInstance> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("instance")
        .to_string();

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
        _ => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("could not read instance file: {}", path.display()))?;
            strippack::io::parse_text_instance(&name, &content)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

pub fn write_text_solution(
    layout: &Layout,
    instance_name: &str,
    algorithm: &str,
    elapsed: Duration,
    path: &Path,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    strippack::io::write_text_solution(&mut writer, layout, instance_name, algorithm, elapsed)?;

    info!("solution written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open json file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)?;

    info!("json written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)?;
    info!("svg written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] start time: {}", jiff::Timestamp::now());
    Ok(())
}
