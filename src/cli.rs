// src/cli.rs
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{self, WrapErr};
use log::LevelFilter;

use crate::analyze::guide::numbered_steps;
use crate::analyze::{SortColumn, SortDirection};
use crate::client::YouTube;
use crate::config::consts::DEFAULT_KEYWORDS;
use crate::config::options::{ApiOptions, AppOptions, ExportFormat, PageKind};
use crate::core::sanitize::group_thousands;
use crate::data::DataSet;
use crate::file::{normalize_separators, read_keywords_file, write_export};
use crate::logging::LogSink;
use crate::progress::Progress;
use crate::runner::{run_channel, run_topics};

#[derive(Parser)]
#[command(name = "yt_scout")]
#[command(about = "YouTube channel analyzer and viral topic scanner")]
#[command(version)]
pub struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YouTube Data API key (overrides YOUTUBE_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Export file (extension optional)
    #[arg(short, long, global = true)]
    pub out: Option<String>,

    /// Export format
    #[arg(long, value_enum, default_value = "csv", global = true)]
    pub format: FormatArg,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile one channel: overview, most viewed videos, top tags
    Channel {
        /// Channel URL (/channel/ID, /user/NAME, /c/NAME, /@handle, or any page linking to it)
        url: String,
    },

    /// Scan keywords for recent high-view videos on small channels
    Topics {
        /// Keyword (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// File with one keyword per line
        #[arg(long)]
        keywords_file: Option<PathBuf>,

        /// Days back to search (1-30)
        #[arg(long, default_value = "7")]
        days: u32,

        /// Minimum views
        #[arg(long, default_value = "1000")]
        min_views: u64,

        /// Maximum channel subscribers
        #[arg(long, default_value = "3000")]
        max_subs: u64,

        /// Sort column (views, likes, comments, publish-date, subscribers)
        #[arg(long, default_value = "views")]
        sort: SortColumn,

        /// Sort ascending (default: descending)
        #[arg(long)]
        asc: bool,
    },
}

/// Prints progress lines to stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, label: &str) { eprintln!("  ✓ {label}"); }
}

pub fn run() -> eyre::Result<()> {
    let cli = Cli::parse();
    crate::logging::init(
        LogSink::Stderr,
        if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info },
    );

    let mut opts = AppOptions::default();
    opts.api = ApiOptions::from_env().with_key(cli.api_key);
    opts.export.format = cli.format.into();
    if let Some(out) = &cli.out {
        opts.export.set_path(&normalize_separators(out));
    }

    let yt = YouTube::new(&opts.api)?;
    let mut progress = StderrProgress;

    match cli.command {
        Commands::Channel { url } => {
            opts.channel.url = url;
            let run = run_channel(&yt, &opts.channel.url, Some(&mut progress))?;
            print_channel(&run.report);
            print_table(&run.table);
            if cli.out.is_some() {
                let path = write_export(&opts.export, PageKind::Channel, &run.table)
                    .wrap_err("export failed")?;
                println!("\nWrote {}", path.display());
            }
        }
        Commands::Topics { keywords, keywords_file, days, min_views, max_subs, sort, asc } => {
            let mut all = keywords;
            if let Some(path) = keywords_file {
                all.extend(read_keywords_file(&path)?);
            }
            if all.is_empty() {
                all = DEFAULT_KEYWORDS.iter().map(|k| s!(*k)).collect();
            }
            opts.topics.set_keywords(&all);
            opts.topics.days = days;
            opts.topics.min_views = min_views;
            opts.topics.max_subscribers = max_subs;
            opts.topics.sort_by = sort;
            opts.topics.direction = SortDirection::from_ascending(asc);

            let run = run_topics(&yt, &opts.topics, Utc::now(), Some(&mut progress))?;
            println!(
                "{} video(s) scanned, {} kept (views ≥ {}, subscribers ≤ {})\n",
                run.rows.len(),
                run.shown.len(),
                group_thousands(min_views),
                group_thousands(max_subs),
            );
            if run.no_matches() {
                println!("No videos matched your filters.");
                return Ok(());
            }
            print_table(&run.table);
            if cli.out.is_some() {
                let path = write_export(&opts.export, PageKind::Topics, &run.table)
                    .wrap_err("export failed")?;
                println!("\nWrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_channel(report: &crate::analyze::ChannelReport) {
    let o = &report.overview;
    println!("{} ({})", o.title, o.id);
    println!("  Created:       {}", o.created_on);
    println!("  Subscribers:   {}", group_thousands(o.subscribers));
    println!("  Total views:   {}", group_thousands(o.total_views));
    println!("  Videos:        {}", group_thousands(o.video_count));
    println!("  Monetization:  {}", o.monetization.label());
    println!("  Description:   {}", o.description);
    println!();
    if report.top_tags.is_empty() {
        println!("Top tags: (none)");
    } else {
        println!("Top tags: {}", report.keywords().join(", "));
    }
    println!();
    println!("How to build a channel like this:");
    for step in numbered_steps() {
        println!("  {step}");
    }
    println!();
}

const MAX_CELL: usize = 48;

fn clip(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL {
        s!(cell)
    } else {
        let mut out: String = cell.chars().take(MAX_CELL - 1).collect();
        out.push('…');
        out
    }
}

/// Left-aligned columns, widths by char count.
fn print_table(ds: &DataSet) {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(ds.row_count() + 1);
    if let Some(h) = &ds.headers {
        lines.push(h.iter().map(|c| clip(c)).collect());
    }
    lines.extend(ds.rows.iter().map(|r| r.iter().map(|c| clip(c)).collect()));

    let cols = ds.header_count();
    let mut widths = vec![0usize; cols];
    for line in &lines {
        for (i, cell) in line.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    for line in &lines {
        let mut out = s!();
        for (i, cell) in line.iter().enumerate().take(cols) {
            let pad = widths[i] - cell.chars().count();
            out.push_str(cell);
            if i + 1 < cols {
                out.push_str(&" ".repeat(pad + 2));
            }
        }
        println!("{}", out.trim_end());
    }
}
