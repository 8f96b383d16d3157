//! Pattern file loading

use super::Grid;
use crate::config::EdgePolicy;
use crate::error::ConfigurationError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a pattern file
///
/// Two layouts are accepted:
/// - rows: each line is a row of `0`/`1` characters, blank lines ignored
/// - flat: `0`/`1` values separated by commas or whitespace, which must form
///   a square
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P, edge_policy: EdgePolicy) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content, edge_policy)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a grid from either pattern layout
pub fn parse_pattern(content: &str, edge_policy: EdgePolicy) -> Result<Grid, ConfigurationError> {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ConfigurationError::EmptyPattern);
    }

    let is_flat = lines
        .iter()
        .any(|line| line.contains(',') || line.contains(char::is_whitespace));

    if is_flat {
        let values = parse_flat_values(&lines)?;
        Grid::from_pattern(&values, edge_policy)
    } else {
        let rows = parse_rows(&lines)?;
        Grid::from_rows(rows, edge_policy)
    }
}

fn parse_flat_values(lines: &[&str]) -> Result<Vec<u8>, ConfigurationError> {
    lines
        .iter()
        .flat_map(|&line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            other => Err(ConfigurationError::InvalidPatternSymbol {
                symbol: other.to_string(),
                position,
            }),
        })
        .collect()
}

fn parse_rows(lines: &[&str]) -> Result<Vec<Vec<bool>>, ConfigurationError> {
    let mut position = 0;
    let mut rows = Vec::with_capacity(lines.len());

    for line in lines {
        let mut row = Vec::with_capacity(line.len());
        for ch in line.chars() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                other => {
                    return Err(ConfigurationError::InvalidPatternSymbol {
                        symbol: other.to_string(),
                        position,
                    })
                }
            }
            position += 1;
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Blinker (oscillator, period 2)
    let blinker_content = "00000\n00000\n01110\n00000\n00000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    // Glider, with room to travel
    let glider_content = "00100000\n10100000\n01100000\n00000000\n\
                          00000000\n00000000\n00000000\n00000000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Beacon (oscillator, period 2)
    let beacon_content = "000000\n011000\n011000\n000110\n000110\n000000\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}
