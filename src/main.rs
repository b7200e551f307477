use clap::{Parser, Subcommand};
use std::path::PathBuf;

use colorcube::{GridPipeline, UniformPipeline, write_image};

#[derive(Parser)]
#[command(name = "colorcube")]
#[command(about = "Generate synthetic images that sample the RGB color cube")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print pipeline progress while generating
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Exhaustive grid sampling, packed in enumeration order
    Grid {
        /// Samples per channel
        #[arg(long, default_value_t = 128)]
        steps: u32,

        /// Output image path
        #[arg(long, default_value = "rgb_grid_128.png")]
        filename: PathBuf,
    },

    /// Evenly spaced samples placed in uniformly random order
    Uniform {
        /// Output image width in pixels
        #[arg(long, default_value_t = 256)]
        width: u32,

        /// Output image height in pixels
        #[arg(long, default_value_t = 256)]
        height: u32,

        /// Shuffle seed for reproducible placement
        #[arg(long)]
        seed: Option<u64>,

        /// Output image path
        #[arg(long, default_value = "uniform_rgb_image.png")]
        filename: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Grid { steps, filename } => {
            let image = GridPipeline::new()
                .with_steps(steps)
                .with_verbose(args.verbose)
                .generate()?;
            write_image(&image, &filename)?;

            println!(
                "Image '{}' created successfully with a {}x{}x{} grid of colors.",
                filename.display(),
                steps,
                steps,
                steps
            );
        }
        Command::Uniform {
            width,
            height,
            seed,
            filename,
        } => {
            let mut pipeline = UniformPipeline::new()
                .with_dimensions(width, height)
                .with_verbose(args.verbose);
            if let Some(seed) = seed {
                pipeline = pipeline.with_seed(seed);
            }
            let image = pipeline.generate()?;
            write_image(&image, &filename)?;

            println!(
                "Image '{}' created successfully with {} uniformly distributed colors.",
                filename.display(),
                width as u64 * height as u64
            );
        }
    }

    Ok(())
}
