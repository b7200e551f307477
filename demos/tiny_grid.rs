use colorcube::{GridPipeline, write_image};

fn main() -> anyhow::Result<()> {
    // Small enough to eyeball: 4 steps per channel, 64 colors in an 8x8 raster
    let image = GridPipeline::new()
        .with_steps(4)
        .with_verbose(true)
        .generate()?;

    write_image(&image, "tiny_grid.png")?;
    println!("Wrote tiny_grid.png ({}x{})", image.width(), image.height());

    Ok(())
}
