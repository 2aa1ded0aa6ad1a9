//! CLI tool for sheetmap - renders JSON spreadsheet documents as HTML tables
//!
//! Usage:
//!   sheetmap_cli <doc.json>               # Output HTML to stdout
//!   sheetmap_cli <doc.json> -o out.html   # Output HTML to file
//!   sheetmap_cli <doc.json> --summary     # Print sheet titles and sizes

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use sheetmap::error::Result;
use sheetmap::DocumentMapper;

const USAGE: &str = "Usage: sheetmap_cli <doc.json> [--summary] [-o output.html]";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(input_path) = args.first() else {
        return Err(USAGE.into());
    };
    let summary = args.iter().skip(1).any(|a| a == "--summary");
    let output_path = match args.iter().position(|a| a == "-o") {
        Some(i) => Some(
            args.get(i + 1)
                .ok_or_else(|| format!("-o needs a file name\n{USAGE}"))?,
        ),
        None => None,
    };

    let data = fs::read_to_string(input_path)?;
    let mapper = DocumentMapper::from_json(&data)?;

    let output = if summary {
        let mut out = String::new();
        for sheet in 0..mapper.len() {
            let size = mapper.size(sheet);
            out.push_str(&format!(
                "{}\t{:?}\t{} rows x {} cols\n",
                sheet,
                mapper.title(sheet),
                size.rows,
                size.cols
            ));
        }
        out
    } else {
        let mut html = mapper.to_html();
        html.push('\n');
        html
    };

    match output_path {
        Some(path) => {
            fs::write(path, &output)?;
            eprintln!("Written: {path}");
        }
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}
