use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};

use legv8_rs::program::{disassemble_from, Program, BASE_ADDRESS};

mod source;
use source::load_words;

#[derive(Parser, Debug)]
#[command(author, version, about = "LEGv8 binary-text disassembler", long_about = None)]
struct Cli {
    /// Input file: one 32-character binary word per line
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: PathBuf,
    /// Output prefix; the listing is written to <PREFIX>_dis.txt
    #[arg(short = 'o', long = "output", value_name = "PREFIX")]
    output: Option<PathBuf>,
    /// Address assigned to the first word
    #[arg(long, default_value_t = BASE_ADDRESS)]
    base: u32,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn render(program: &Program, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let mut buf = String::new();
            for line in program.lines() {
                buf.push_str(&line);
                buf.push('\n');
            }
            buf
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(program)?;
            json.push('\n');
            json
        }
    })
}

fn dis_path(prefix: &Path) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push("_dis.txt");
    PathBuf::from(name)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let words = load_words(&cli.input)?;
    let program = disassemble_from(&words, cli.base)?;

    // Everything above can fail; nothing is written until the whole
    // stream decoded cleanly.
    let rendered = render(&program, cli.format)?;
    match cli.output {
        Some(prefix) => {
            let path = dis_path(&prefix);
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_appends_dis_suffix() {
        assert_eq!(dis_path(Path::new("team13")), PathBuf::from("team13_dis.txt"));
        assert_eq!(
            dis_path(Path::new("out/run1")),
            PathBuf::from("out/run1_dis.txt")
        );
    }

    #[test]
    fn text_render_one_line_per_word() {
        let words = [0u32, 0xFEDE_FFE7, 0xFFFF_FFFF];
        let program = disassemble_from(&words, BASE_ADDRESS).unwrap();
        let text = render(&program, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with('\n'));
    }
}
