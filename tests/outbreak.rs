use contagion::config::Config;
use contagion::error::{Error, Result};
use contagion::interactor;
use contagion::models::*;
use contagion::simulation::{Model, Simulation};

fn config(seed: u64) -> Config {
    Config {
        cell_count: 60,
        infected_count: 6,
        immune_count: 6,
        recovery_period: 30,
        seed: Some(seed),
        ..Default::default()
    }
}

/// Every infected cell recovers within a bounded number of ticks once no
/// vulnerable cell is left to catch it, so a run always ends.
#[test]
fn outbreak_runs_to_completion() -> Result<()> {
    let mut model = Model::with_config(&config(11))?;
    let total = model.population().len();
    let mut last_immune = model.counts().immune;
    while !model.is_complete() {
        model.tick();
        let counts = model.counts();
        assert_eq!(counts.vulnerable + counts.infected + counts.immune, total);
        assert!(counts.immune >= last_immune, "immunity is never lost");
        last_immune = counts.immune;
        assert!(model.time() < 100_000, "outbreak never ended");
    }
    assert_eq!(model.counts().infected, 0);
    Ok(())
}

#[test]
fn seeded_runs_are_reproducible() -> Result<()> {
    let mut a = Model::with_config(&config(5))?;
    let mut b = Model::with_config(&config(5))?;
    for _ in 0..50 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.population(), b.population());
    assert_eq!(a.counts(), b.counts());
    Ok(())
}

#[test]
fn ticking_advances_time_exactly() -> Result<()> {
    let mut model = Model::new(10, 1.0, 2, 0)?;
    for n in 1..=17 {
        Simulation::tick(&mut model);
        assert_eq!(Simulation::time(&model), n);
    }
    Ok(())
}

#[test]
fn invalid_counts_are_rejected() {
    let cases = [(10, 0, 0), (10, 10, 0), (10, 11, 0), (10, 1, -1), (10, 1, 11)];
    for &(cells, infected, immune) in cases.iter() {
        match Model::new(cells, 1.0, infected, immune) {
            Err(Error::InvalidArgument(_)) => {}
            Err(e) => panic!("{:?}: wrong error {}", (cells, infected, immune), e),
            Ok(_) => panic!("{:?}: accepted", (cells, infected, immune)),
        }
    }
}

#[test]
fn invalid_geometry_is_rejected() {
    let mut config = config(1);
    config.bounds_height = -10.0;
    match Model::with_config(&config) {
        Err(Error::InvalidConfig(msg)) => assert!(msg.contains("BOUNDS_HEIGHT")),
        Err(e) => panic!("wrong error {}", e),
        Ok(_) => panic!("accepted negative bounds"),
    }
}

#[test]
fn isolated_population_never_spreads() -> Result<()> {
    let mut config = Config::default();
    config.recovery_period = 3;
    let mut sick = Cell::new(Point::new(-150.0, -150.0), Point::zero());
    sick.contract_disease();
    let healthy = Cell::new(Point::new(150.0, 150.0), Point::zero());
    let mut model = Model::from_cells(config, vec![sick, healthy]);
    for _ in 0..4 {
        model.tick();
    }
    assert!(model.is_complete());
    assert!(model.population()[0].is_immune());
    assert!(model.population()[1].is_vulnerable());
    Ok(())
}

#[test]
fn driver_streams_frames_until_complete() -> Result<()> {
    let mut input = "{\"CELL_COUNT\": 20, \"INFECTED_COUNT\": 2, \"IMMUNE_COUNT\": 0, \"RECOVERY_PERIOD\": 5, \"SEED\": 9}\n".as_bytes();
    let config = interactor::read_config(&mut input)?;
    let model = Model::with_config(&config)?;
    let mut out = Vec::new();
    let time = interactor::drive(model, config.max_ticks, &mut out)?;

    let text = String::from_utf8(out).expect("frames are utf-8");
    let frames: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("frame is json"))
        .collect();
    assert_eq!(frames.len() as i64, time + 1);
    assert_eq!(frames[0]["counts"]["infected"], 2);
    assert_eq!(frames[0]["cells"].as_array().map(|cells| cells.len()), Some(20));
    let last = frames.last().expect("at least one frame");
    assert_eq!(last["complete"], true);
    assert_eq!(last["counts"]["infected"], 0);
    Ok(())
}
