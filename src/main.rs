use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use jtime::App;
use jtime::cli::Target;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "jtime")]
#[command(about = "Fill the commit message with the branch's ticket id and a #time work log", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub target: Target,

    /// Work time to log instead of prompting for it (e.g. 1d3h25m)
    #[arg(short, long)]
    pub time: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write "<ticket> #time <work time> " into the commit message (default)
    Annotate {
        #[command(flatten)]
        target: Target,
        /// Work time to log instead of prompting for it (e.g. 1d3h25m)
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Print the ticket id of the current branch
    Ticket {
        #[command(flatten)]
        target: Target,
    },
}

fn setup_logging() -> Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_timer(timer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let ok = match cli.command {
        Some(Commands::Ticket { target }) => {
            let app = App::from_target(&target, &cwd, None);
            app.cmd_ticket(target.context_root().as_deref(), &mut stdout, &mut stderr)
                .await?
        }
        Some(Commands::Annotate { target, time }) => {
            let app = App::from_target(&target, &cwd, time);
            app.cmd_annotate(target.context_root().as_deref(), &mut stdout, &mut stderr)
                .await?
        }
        None => {
            let app = App::from_target(&cli.target, &cwd, cli.time);
            app.cmd_annotate(cli.target.context_root().as_deref(), &mut stdout, &mut stderr)
                .await?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
