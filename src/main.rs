use anyhow::Result;
use plset::Written;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = plset::args::parsed();
    let Written { path, track_count } = plset::run(&args)?;
    println!("Created {} ({track_count} tracks)", path.display());
    Ok(())
}
