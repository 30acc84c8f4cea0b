use clap::{Parser, ValueEnum};
use glass_core::{ControlValue, Field, ParamError, Preset};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glass-map",
    version,
    about = "Render the displacement map and filter values of a glass preset"
)]
pub struct Config {
    #[arg(long, default_value = "dock", value_parser = parse_preset)]
    pub preset: Preset,

    /// Override one parameter, e.g. `--set width=240 --set blend=screen`.
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(Field, ControlValue)>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Write to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// `data:` URI as fed to `feImage`
    #[value(alias = "uri")]
    DataUri,
    /// Parameters plus every value pushed into the filter graph
    Json,
}

fn parse_preset(s: &str) -> Result<Preset, ParamError> {
    s.parse()
}

fn parse_override(s: &str) -> Result<(Field, ControlValue), ParamError> {
    let (key, raw) = s.split_once('=').ok_or_else(|| ParamError::InvalidValue {
        field: "set",
        value: s.to_string(),
    })?;
    let field: Field = key.trim().parse()?;
    let value = ControlValue::parse_for(field, raw)?;
    Ok((field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_parse_by_field_kind() {
        assert_eq!(
            parse_override("width=240"),
            Ok((Field::Width, ControlValue::Number(240.0)))
        );
        assert_eq!(
            parse_override("icons=false"),
            Ok((Field::Icons, ControlValue::Bool(false)))
        );
        assert_eq!(
            parse_override("mode=pill"),
            Ok((Field::Preset, ControlValue::Choice("pill".into())))
        );
        assert!(parse_override("width").is_err());
        assert!(parse_override("depth=3").is_err());
    }

    #[test]
    fn cli_defaults() {
        let cfg = Config::parse_from(["glass-map"]);
        assert_eq!(cfg.preset, Preset::Dock);
        assert_eq!(cfg.format, OutputFormat::Svg);
        assert!(cfg.overrides.is_empty());

        let cfg = Config::parse_from([
            "glass-map", "--preset", "free", "--set", "r=5", "--format", "json",
        ]);
        assert_eq!(cfg.preset, Preset::Free);
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.overrides, vec![(Field::R, ControlValue::Number(5.0))]);
    }
}
