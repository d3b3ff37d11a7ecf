use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};

use boxkit::{
    init_logging, plan, render_plan, BoxParameters, DxfTemplate, LayoutError, LayoutStrategy,
    LidType, TabStyle, TEMPLATE_PATH,
};

#[derive(Parser)]
#[command(name = "boxkit")]
#[command(about = "Generate laser-cut box panels as DXF sheets")]
#[command(version)]
#[command(group(ArgGroup::new("style").args(["castled", "uncastled"])))]
struct Cli {
    /// Inner width of the box
    width: Option<f64>,

    /// Inner height of the box
    height: Option<f64>,

    /// Inner depth of the box
    depth: Option<f64>,

    /// Material thickness
    thickness: Option<f64>,

    /// Finger-jointed (castled) edges
    #[arg(short, long)]
    castled: bool,

    /// Straight-notch edges
    #[arg(short, long)]
    uncastled: bool,

    /// Layout strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Packed)]
    layout: StrategyArg,

    /// Gap between adjacent panels in the strip layout (default: twice the thickness)
    #[arg(long)]
    spacing: Option<f64>,

    /// Lid style for the strip layout
    #[arg(long, value_enum, default_value_t = LidArg::None)]
    lid: LidArg,

    /// Which panel pair carries the lid
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    lid_side: u8,

    /// Directory the sheets are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Bed-fitting multi-sheet layout
    Packed,
    /// Single-sheet strip layout
    Strip,
}

impl From<StrategyArg> for LayoutStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Packed => LayoutStrategy::Packed,
            StrategyArg::Strip => LayoutStrategy::Strip,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LidArg {
    None,
    Inside,
    Outside,
}

impl From<LidArg> for LidType {
    fn from(value: LidArg) -> Self {
        match value {
            LidArg::None => LidType::None,
            LidArg::Inside => LidType::Inside,
            LidArg::Outside => LidType::Outside,
        }
    }
}

/// Tracks whether any parameter was gathered interactively; the overflow
/// acknowledgment prompt only makes sense in that mode.
struct Prompter {
    used: bool,
}

impl Prompter {
    fn new() -> Self {
        Self { used: false }
    }

    fn read_line(&mut self, label: &str) -> anyhow::Result<String> {
        self.used = true;
        print!("\n{label}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok(line.trim().to_string())
    }

    fn number(&mut self, label: &str) -> anyhow::Result<f64> {
        let line = self.read_line(label)?;
        line.parse::<f64>()
            .with_context(|| format!("invalid number for {label}: '{line}'"))
    }

    fn style(&mut self) -> anyhow::Result<TabStyle> {
        let answer = self.read_line("Castled? (y/n)")?;
        Ok(if answer.starts_with('y') || answer.starts_with('Y') {
            TabStyle::Castled
        } else {
            TabStyle::Straight
        })
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    // The header template is a startup requirement; fail before prompting.
    let template = DxfTemplate::load(TEMPLATE_PATH)?;

    let mut prompter = Prompter::new();
    if cli.width.is_none()
        || cli.height.is_none()
        || cli.depth.is_none()
        || cli.thickness.is_none()
    {
        println!("The dimensions are the desired inner dimensions of the box.");
    }

    let width = match cli.width {
        Some(value) => value,
        None => prompter.number("Width")?,
    };
    let depth = match cli.depth {
        Some(value) => value,
        None => prompter.number("Depth")?,
    };
    let height = match cli.height {
        Some(value) => value,
        None => prompter.number("Height")?,
    };
    let thickness = match cli.thickness {
        Some(value) => value,
        None => prompter.number("Thickness of material")?,
    };

    let style = if cli.castled {
        TabStyle::Castled
    } else if cli.uncastled {
        TabStyle::Straight
    } else {
        prompter.style()?
    };

    let params = BoxParameters {
        width,
        depth,
        height,
        thickness,
        style,
        strategy: cli.layout.into(),
        spacing: cli.spacing,
        lid: cli.lid.into(),
        lid_side: cli.lid_side,
    };

    match plan(&params) {
        Ok(layout) => {
            let files = render_plan(&layout, &template, &cli.out_dir)?;
            for file in &files {
                println!("wrote {}", file.display());
            }
            Ok(())
        }
        Err(err @ LayoutError::BedOverflow { .. }) => {
            eprintln!("{err}");
            eprintln!("This piece cannot fit on the cutter bed.");
            if prompter.used {
                let _ = prompter.read_line("Press Enter to exit");
            }
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
