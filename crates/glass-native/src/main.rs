use anyhow::Context;
use clap::Parser;
use glass_core::{DisplacementMap, FilterState, GlassParams};
use serde_json::json;
use std::fs;
use std::io::Write;

mod config;

use config::{Config, OutputFormat};

fn build_params(cfg: &Config) -> anyhow::Result<GlassParams> {
    let mut params = GlassParams::default().with_preset(cfg.preset);
    for (field, value) in &cfg.overrides {
        params = params
            .with_change(*field, value.clone())
            .with_context(|| format!("applying override for `{field}`"))?;
    }
    Ok(params)
}

fn render(params: &GlassParams, format: OutputFormat) -> anyhow::Result<String> {
    let map = DisplacementMap::from_params(params);
    Ok(match format {
        OutputFormat::Svg => map.to_svg(),
        OutputFormat::DataUri => map.to_data_uri(),
        OutputFormat::Json => {
            let report = json!({
                "params": params,
                "inset": {
                    "x": map.inset().x,
                    "y": map.inset().y,
                    "width": map.inset().width,
                    "height": map.inset().height,
                },
                "filter": FilterState::from_params(params),
            });
            serde_json::to_string_pretty(&report)?
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cfg = Config::parse();
    let params = build_params(&cfg)?;
    log::info!(
        "rendering {} ({}x{}, radius {}) as {:?}",
        params.preset,
        params.width,
        params.height,
        params.radius,
        cfg.format
    );
    let out = render(&params, cfg.format)?;

    match &cfg.output {
        Some(path) => {
            fs::write(path, out.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {} bytes to {}", out.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
