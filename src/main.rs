//! sim-contract command line
//!
//! Checks engine snapshots and settings files against the contract, and
//! emits seeded sample snapshots.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::Read;
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::{Parser, Subcommand, ValueEnum};

    use sim_contract::codec;
    use sim_contract::sample;
    use sim_contract::schema::{RendererData, SimulationKind};
    use sim_contract::{ContractConfig, ContractError, ContractResult};

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum Kind {
        Balls,
        Fluid,
        RigidBody,
    }

    impl From<Kind> for SimulationKind {
        fn from(kind: Kind) -> Self {
            match kind {
                Kind::Balls => SimulationKind::BouncingBalls,
                Kind::Fluid => SimulationKind::Fluid,
                Kind::RigidBody => SimulationKind::RigidBody,
            }
        }
    }

    #[derive(Debug, Parser)]
    #[command(name = "sim-contract", version, about = "Validate simulation snapshots and settings")]
    struct Args {
        /// JSON file overriding contract tolerances
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Validate a renderer frame
        Check {
            #[arg(long, value_enum)]
            kind: Kind,
            /// Frame JSON file (stdin when omitted)
            file: Option<PathBuf>,
        },
        /// Validate a settings object
        Settings {
            #[arg(long, value_enum)]
            kind: Kind,
            file: Option<PathBuf>,
        },
        /// Print a valid sample frame
        Sample {
            #[arg(long, value_enum)]
            kind: Kind,
            #[arg(long, default_value_t = 16)]
            count: usize,
            #[arg(long, default_value_t = 0)]
            seed: u64,
            /// Emit the full workspace instead of light bodies (rigid-body only)
            #[arg(long)]
            full: bool,
        },
    }

    fn read_input(file: Option<&PathBuf>) -> ContractResult<String> {
        match file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }

    fn sample_frame(kind: SimulationKind, count: usize, seed: u64, full: bool) -> RendererData {
        match kind {
            SimulationKind::BouncingBalls => sample::balls(seed, count).into(),
            SimulationKind::Fluid => sample::fluid(seed, count).into(),
            SimulationKind::RigidBody if full => sample::workspace(seed, count).into(),
            SimulationKind::RigidBody => sample::light_bodies(seed, count).into(),
        }
    }

    fn execute(args: Args) -> ContractResult<()> {
        let config = match &args.config {
            Some(path) => ContractConfig::load(path)?,
            None => ContractConfig::default(),
        };

        match args.command {
            Command::Check { kind, file } => {
                let json = read_input(file.as_ref())?;
                let frame = codec::decode_frame_with(kind.into(), &json, &config)?;
                log::info!("{} frame ok", frame.kind());
                println!("ok");
            }
            Command::Settings { kind, file } => {
                let json = read_input(file.as_ref())?;
                let settings = codec::decode_settings_with(kind.into(), &json, &config)?;
                log::info!("settings ok (visual filter {})", settings.visual_filter_code());
                println!("ok");
            }
            Command::Sample { kind, count, seed, full } => {
                let frame = sample_frame(kind.into(), count, seed, full);
                println!("{}", codec::encode(&frame)?);
            }
        }
        Ok(())
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let args = Args::parse();
        match execute(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => report(&err),
        }
    }

    /// Log a failure once and map it to the process exit code
    fn report(err: &ContractError) -> ExitCode {
        log::error!("{}: {}", err.code(), err);
        match err {
            ContractError::Io(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `sim_contract::wasm::start`
}
