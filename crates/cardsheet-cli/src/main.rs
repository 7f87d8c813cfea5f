mod logger;

use anyhow::{Context, Result, bail};
use cardsheet::{CardSide, FlashcardOptions, PreviewCell, PreviewPage};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Width of one cell in the text preview
const PREVIEW_CELL_WIDTH: usize = 26;

#[derive(Parser)]
#[command(name = "cardsheet", about = "Duplex flashcard sheet generator", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a double-sided flashcard PDF from a two-column CSV
    Generate {
        /// Input CSV file (columns: term, definition; first row is a header)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, default_value = cardsheet::constants::DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print the front and mirrored back of one sheet
    Preview {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Sheet to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Write the default options to a JSON file
    Config {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(clap::Args)]
struct LayoutArgs {
    /// Options file (JSON); command line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// How the backs are mirrored for duplex printing
    #[arg(long, value_enum)]
    mirror: Option<MirrorArg>,

    /// Card font
    #[arg(long, value_enum)]
    font: Option<FontArg>,

    /// Leave out the dashed cut guides
    #[arg(long)]
    no_cut_lines: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum MirrorArg {
    /// Reverse columns (printer flips on the short edge)
    Horizontal,
    /// Reverse rows (printer flips on the long edge)
    Vertical,
    None,
}

#[derive(Clone, Copy, ValueEnum)]
enum FontArg {
    Inter,
    Roboto,
    OpenSans,
    Montserrat,
    PlayfairDisplay,
    Merriweather,
}

impl From<MirrorArg> for cardsheet::MirrorAxis {
    fn from(arg: MirrorArg) -> Self {
        match arg {
            MirrorArg::Horizontal => Self::Horizontal,
            MirrorArg::Vertical => Self::Vertical,
            MirrorArg::None => Self::None,
        }
    }
}

impl From<FontArg> for cardsheet::FontChoice {
    fn from(arg: FontArg) -> Self {
        match arg {
            FontArg::Inter => Self::Inter,
            FontArg::Roboto => Self::Roboto,
            FontArg::OpenSans => Self::OpenSans,
            FontArg::Montserrat => Self::Montserrat,
            FontArg::PlayfairDisplay => Self::PlayfairDisplay,
            FontArg::Merriweather => Self::Merriweather,
        }
    }
}

impl LayoutArgs {
    async fn resolve(&self) -> Result<FlashcardOptions> {
        let mut options = match &self.config {
            Some(path) => FlashcardOptions::load(path)
                .await
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => FlashcardOptions::default(),
        };

        if let Some(mirror) = self.mirror {
            options.axis = mirror.into();
        }
        if let Some(font) = self.font {
            options.font = font.into();
        }
        if self.no_cut_lines {
            options.show_cut_lines = false;
        }

        options.validate()?;
        Ok(options)
    }
}

async fn load_cards(input: &Path) -> Result<Vec<cardsheet::Flashcard>> {
    let cards = cardsheet::load_from_csv(input)
        .await
        .with_context(|| format!("Could not read {}", input.display()))?;
    if cards.is_empty() {
        bail!(
            "{} contains no flashcards (expected two columns: term, definition)",
            input.display()
        );
    }
    Ok(cards)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            layout,
        } => {
            let options = layout.resolve().await?;
            let cards = load_cards(&input).await?;

            let summary = cardsheet::calculate_summary(cards.len(), &options.grid)?;
            println!("Layout:");
            println!("  Cards: {}", summary.cards);
            println!("  Sheets: {}", summary.sheets);
            println!("  Output pages: {}", summary.output_pages);
            println!("  Empty cells: {}", summary.empty_slots);
            println!(
                "  Mirror: {} ({})",
                options.axis.name(),
                options.axis.duplex_edge()
            );
            println!("  Font: {}", options.font.name());

            cardsheet::generate_pdf(&cards, &options, &output).await?;
            println!(
                "Generated {} flashcards → {}",
                cards.len(),
                output.display()
            );
        }

        Commands::Preview {
            input,
            page,
            layout,
        } => {
            let options = layout.resolve().await?;
            let cards = load_cards(&input).await?;

            let preview = cardsheet::preview_page(&cards, &options, page.saturating_sub(1))?;
            let Some(preview) = preview else {
                let sheets = cardsheet::calculate_summary(cards.len(), &options.grid)?.sheets;
                bail!("Sheet {page} does not exist ({sheets} sheets in total)");
            };
            print_preview(&preview, options.grid.cols, options.axis);
        }

        Commands::Config { output } => {
            FlashcardOptions::default()
                .save(&output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}

fn print_preview(preview: &PreviewPage<'_>, cols: usize, axis: cardsheet::MirrorAxis) {
    println!(
        "Sheet {} of {} - front (terms)",
        preview.page_index + 1,
        preview.page_count
    );
    print_grid(&preview.front, cols, CardSide::Front);
    println!();
    println!(
        "Sheet {} of {} - back (definitions), {} mirror",
        preview.page_index + 1,
        preview.page_count,
        axis.name()
    );
    print_grid(&preview.back, cols, CardSide::Back);
}

fn print_grid(cells: &[Option<PreviewCell<'_>>], cols: usize, side: CardSide) {
    let separator = format!("+{}", format!("{}+", "-".repeat(PREVIEW_CELL_WIDTH)).repeat(cols));
    println!("{separator}");
    for row in cells.chunks(cols) {
        let line: String = row
            .iter()
            .map(|cell| {
                let label = preview_label(cell, side);
                format!(" {label:<width$}|", width = PREVIEW_CELL_WIDTH - 1)
            })
            .collect();
        println!("|{line}");
        println!("{separator}");
    }
}

fn preview_label(cell: &Option<PreviewCell<'_>>, side: CardSide) -> String {
    let Some(cell) = cell else {
        return "(empty)".to_string();
    };

    let label = format!("#{} {}", cell.card_number, cell.card.text(side).trim());
    let max = PREVIEW_CELL_WIDTH - 2;
    if label.chars().count() > max {
        let truncated: String = label.chars().take(max - 1).collect();
        format!("{truncated}…")
    } else {
        label
    }
}
