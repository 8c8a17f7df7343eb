use bayes_search::{play_round, SearchConfig, SearchPlan, SearchState, NUM_AREAS};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const DEFAULT_MAX_ROUNDS: usize = 100;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [max_rounds]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_rounds: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_ROUNDS,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = SearchConfig::default();
    let mut state = SearchState::from_config(&config)?;
    let target = state.place_target(&mut rng, NUM_AREAS)?;

    let mut rounds = 0;
    let mut found_in = None;
    let mut plans = Vec::new();
    while rounds < max_rounds {
        let plan = SearchPlan::suggest(&state.priors());
        let report = play_round(&mut state, &mut rng, plan)?;
        rounds += 1;
        plans.push(plan);
        if report.found_in.is_some() {
            found_in = report.found_in;
            break;
        }
    }

    let (x, y) = target.chart_position(state.areas())?;
    let result = json!({
        "seed": seed,
        "found": found_in.is_some(),
        "rounds": rounds,
        "target": {"area": target.area, "x": x, "y": y},
        "plans": plans,
        "final_priors": state.priors(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
