use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{AnalyzeArgs, BondsArgs, ConfigArgs};
use crate::error::{CliError, Result};
use molmeasure::core::bonds::BondCriteria;
use molmeasure::workflows::config::{AnalysisConfig, AnalysisConfigBuilder};
use std::str::FromStr;

pub fn build_bond_criteria(args: &BondsArgs) -> Result<BondCriteria> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_with_overrides(&args.config)?;

    let bonds_file = file_config.bonds.take().unwrap_or_default();
    let min_bond = args
        .min_bond
        .or(bonds_file.min_bond)
        .unwrap_or(defaults.min_bond);
    let max_bond = args
        .max_bond
        .or(bonds_file.max_bond)
        .unwrap_or(defaults.max_bond);

    Ok(BondCriteria::new(min_bond, max_bond)?)
}

pub fn build_analysis_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = load_with_overrides(&args.config)?;

    let bonds_file = file_config.bonds.take().unwrap_or_default();
    let angles_file = file_config.angles.take().unwrap_or_default();

    let include_angles = if args.no_angles {
        false
    } else {
        angles_file.enabled.unwrap_or(defaults.include_angles)
    };
    let degrees = if args.radians {
        false
    } else {
        angles_file.degrees.unwrap_or(defaults.degrees)
    };

    let analysis_config = AnalysisConfigBuilder::new()
        .min_bond(
            args.min_bond
                .or(bonds_file.min_bond)
                .unwrap_or(defaults.min_bond),
        )
        .max_bond(
            args.max_bond
                .or(bonds_file.max_bond)
                .unwrap_or(defaults.max_bond),
        )
        .include_angles(include_angles)
        .degrees(degrees)
        .build()?;
    Ok(analysis_config)
}

fn load_with_overrides(args: &ConfigArgs) -> Result<FileConfig> {
    let file_config = FileConfig::load(args.config.as_deref())?;
    apply_set_values(file_config, &args.set_values)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "bonds.min-bond" => {
                config.bonds.get_or_insert_with(Default::default).min_bond =
                    Some(parse_value(key, value_str, "float")?);
            }
            "bonds.max-bond" => {
                config.bonds.get_or_insert_with(Default::default).max_bond =
                    Some(parse_value(key, value_str, "float")?);
            }
            "angles.enabled" => {
                config.angles.get_or_insert_with(Default::default).enabled =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "angles.degrees" => {
                config.angles.get_or_insert_with(Default::default).degrees =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            kind, key, value_str
        ))
    })
}
