use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glyphgrid::{
    load_image, read_line, scan, write_charmap, write_report, CharLayout, CharMap, GlyphError,
    Pixel, ReadOptions, ScanOptions,
};
use image::RgbaImage;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "glyphgrid", about = "Bitmap font sheet scanner", version)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = parse_level)]
    log_level: log::LevelFilter,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Extract glyph masks from a font sheet
    Scan {
        /// Font sheet image; prompted for when omitted
        sheet: Option<PathBuf>,
        #[command(flatten)]
        grid: GridArgs,
        /// Also print the mask => character dictionary
        #[arg(long)]
        charmap: bool,
        /// Print the table as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Read a line of text from a screenshot using a font sheet's masks
    Read {
        /// Font sheet image
        #[arg(long)]
        sheet: PathBuf,
        /// Screenshot to read from
        image: PathBuf,
        #[command(flatten)]
        grid: GridArgs,
        /// Screen x of the first glyph column
        #[arg(short, long)]
        x: u32,
        /// Screen y of the first glyph row
        #[arg(short, long)]
        y: u32,
        /// GUI scale: screen pixels per font pixel
        #[arg(long, default_value = "1")]
        scale: u32,
        /// Ink color as RRGGBB; alpha is ignored
        #[arg(long, default_value = "ffffff", value_parser = parse_ink)]
        ink: Pixel,
        /// Number of text lines to read
        #[arg(long, default_value = "1")]
        lines: u32,
        /// Distance between lines in font pixels
        #[arg(long, default_value = "9")]
        line_step: u32,
    },
}

#[derive(Args)]
struct GridArgs {
    /// Pixel offset of the first glyph row on the sheet
    #[arg(long, default_value = "16")]
    origin_row: u32,
    /// Number of glyph rows to scan
    #[arg(long, default_value = "6")]
    rows: u32,
    /// Cell edge length in pixels
    #[arg(long, default_value = "8")]
    cell_size: u32,
    /// Character code of the glyph at cell (0, 0)
    #[arg(long, default_value = "0")]
    first_code: u32,
    /// Glyphs per sheet row
    #[arg(long, default_value = "16")]
    columns: u32,
}

impl GridArgs {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(self.origin_row, self.rows, self.cell_size)
    }

    fn layout(&self) -> CharLayout {
        CharLayout {
            first_code: self.first_code,
            columns: self.columns,
        }
    }
}

fn parse_level(s: &str) -> std::result::Result<log::LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("expected off, error, warn, info, debug or trace, got {s:?}"))
}

fn parse_ink(s: &str) -> std::result::Result<Pixel, String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got {s:?}"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("bad color {s:?}: {e}"))
    };
    Ok(Pixel::rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Screen y of text line `index`, or `None` once it no longer fits in a `u32`.
fn line_origin(y: u32, index: u32, line_step: u32, scale: u32) -> Option<u32> {
    index
        .checked_mul(line_step)?
        .checked_mul(scale)?
        .checked_add(y)
}

fn prompt_path() -> Result<PathBuf> {
    eprint!("Location to font sheet image? ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

fn open(path: &Path) -> Result<RgbaImage> {
    load_image(path).map_err(|e| {
        let hint = match &e {
            GlyphError::PathNotFound(_) => "Path not found.",
            GlyphError::InvalidImage { .. } => "Is this a valid image?",
            _ => "Could not load image.",
        };
        anyhow::Error::new(e).context(hint)
    })
}

fn scan_sheet(path: &Path, grid: &GridArgs) -> Result<glyphgrid::GlyphTable> {
    let sheet = open(path)?;
    let options = grid.scan_options();
    options
        .check(&sheet)
        .with_context(|| format!("cannot scan {}", path.display()))?;
    let table = scan(&sheet, &options);
    log::info!("{} glyphs on {}", table.len(), path.display());
    Ok(table)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .init();

    match cli.command {
        Cmd::Scan {
            sheet,
            grid,
            charmap,
            json,
        } => {
            let path = match sheet {
                Some(p) => p,
                None => prompt_path()?,
            };
            let table = scan_sheet(&path, &grid)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &table)?;
                writeln!(out)?;
            } else {
                write_report(&table, grid.cell_size, &mut out)?;
            }
            if charmap {
                let map = CharMap::from_table(&table, &grid.layout());
                writeln!(out, "\n{} Characters Mapped.", map.len())?;
                write_charmap(&map, &mut out)?;
            }
        }
        Cmd::Read {
            sheet,
            image,
            grid,
            x,
            y,
            scale,
            ink,
            lines,
            line_step,
        } => {
            let table = scan_sheet(&sheet, &grid)?;
            let map = CharMap::from_table(&table, &grid.layout());
            let shot = open(&image)?;
            let options = ReadOptions {
                scale,
                cell_height: grid.cell_size,
                max_x: None,
            };
            for i in 0..lines {
                let Some(line_y) = line_origin(y, i, line_step, scale) else {
                    break;
                };
                if line_y >= shot.height() {
                    break;
                }
                let text = read_line(&shot, &map, x, line_y, &options, |p| p.rgb_eq(ink));
                log::debug!("line {i} at y={line_y}: {text:?}");
                if !text.is_empty() {
                    println!("{text}");
                }
            }
        }
    }
    Ok(())
}
