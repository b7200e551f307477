use colorcube::{UniformPipeline, write_image};

fn main() -> anyhow::Result<()> {
    // Same seed, same picture: rerun and diff the files to check
    let image = UniformPipeline::new()
        .with_dimensions(128, 128)
        .with_seed(42)
        .with_verbose(true)
        .generate()?;

    write_image(&image, "seeded_uniform.png")?;
    println!("Wrote seeded_uniform.png ({}x{})", image.width(), image.height());

    Ok(())
}
