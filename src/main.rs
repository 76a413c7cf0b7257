use clap::Parser;
use perya::analysis::Comparison;
use perya::config::Experiment;
use perya::sim::Progress;
use perya::sim::Session;

fn main() -> anyhow::Result<()> {
    perya::log();
    let args = Experiment::parse();
    args.check()?;
    log::info!(
        "simulating {} sessions x {} rounds per configuration, strategy {:?}",
        args.num_sessions,
        args.rounds_per_session,
        args.strategy,
    );
    let fair = simulate(&args, "fair", args.fair()?, 0)?;
    let tweaked = simulate(&args, "tweaked", args.tweaked()?, 1)?;
    let comparison = Comparison::between(
        ("fair", &fair),
        ("tweaked", &tweaked),
        args.significance_level,
    )?;
    println!("{}", comparison);
    if let Some(ref path) = args.export {
        let file = std::fs::File::create(path)?;
        let records = serde_json::json!({
            "fair": fair,
            "tweaked": tweaked,
            "comparison": comparison,
        });
        serde_json::to_writer_pretty(file, &records)?;
        log::info!("exported session records to {}", path.display());
    }
    Ok(())
}

fn simulate(
    args: &Experiment,
    name: &str,
    model: perya::game::Model,
    stream: u64,
) -> anyhow::Result<Vec<Session>> {
    log::info!("running {} configuration", name);
    let progress = Progress::new(args.num_sessions, 10);
    let sessions = args.engine(model, stream).run_with(|_| progress.tick())?;
    Ok(sessions)
}
