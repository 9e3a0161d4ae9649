use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use mock_social_graph::avatar::candidate_avatars;
use mock_social_graph::config::Config;
use mock_social_graph::data::loader::{load_raw_identities, load_relations};
use mock_social_graph::data::synthetic::generate_identities;
use mock_social_graph::data::PersonId;
use mock_social_graph::network::{display_records, Snapshot};
use mock_social_graph::relation::{FixedSampler, RandomSampler, RelationSampler};
use mock_social_graph::{storage, viz, SocialNetwork};

#[derive(Parser, Debug)]
#[clap(
    name = "mock-social-graph",
    about = "Fabricate a mock social network and compute friend-of-friend distances"
)]
struct Cli {
    /// JSON array of raw identities; synthetic identities are generated when omitted
    #[clap(long)]
    input: Option<String>,

    /// JSON configuration file
    #[clap(long)]
    config: Option<String>,

    /// JSON array of forced relations to use instead of random sampling
    #[clap(long)]
    relations: Option<String>,

    /// Output directory for results
    #[clap(long, default_value = "social_results")]
    output_dir: String,

    /// Number of synthetic identities
    #[clap(long)]
    users: Option<usize>,

    /// Maximum friends sampled per person
    #[clap(long)]
    max_friends: Option<usize>,

    /// Seed for identity generation and relation sampling
    #[clap(long)]
    seed: Option<u64>,

    /// Replace this person's avatar with a random candidate after the refresh
    #[clap(long)]
    change_avatar: Option<PersonId>,

    /// Print the shortest path between two display names
    #[clap(long, num_args = 2, value_names = ["FROM", "TO"])]
    path: Option<Vec<String>>,

    /// Skip visualizations
    #[clap(long)]
    skip_viz: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(users) = args.users {
        config.identity_count = users;
    }
    if let Some(max_friends) = args.max_friends {
        config.max_friends = max_friends;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    log::info!("Starting mock social network build");
    log::info!("Output: {}", args.output_dir);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // 1. Seed identities
    let raw = match &args.input {
        Some(path) => load_raw_identities(path)?,
        None => generate_identities(config.identity_count, &mut rng),
    };

    // 2. Run the pipeline with the requested sampler
    let sampler: Box<dyn RelationSampler> = match &args.relations {
        Some(path) => Box::new(FixedSampler::new(load_relations(path)?)),
        None => Box::new(RandomSampler::from_seed(config.seed, config.max_friends)),
    };
    let mut network = SocialNetwork::new(config, sampler);
    network.refresh(&raw);

    // 3. Optional avatar change
    if let Some(id) = args.change_avatar {
        let candidates = candidate_avatars(&mut rng, network.config().avatar_choices);
        if let Some(url) = candidates.choose(&mut rng) {
            if network.update_avatar(id, url.clone()) {
                log::info!("Person {} now uses avatar {}", id, url);
            }
        }
    }

    // 4. Optional ad-hoc path query
    if let Some(names) = &args.path {
        let result = network.shortest_path_between(&names[0], &names[1]);
        println!("{:?}", result);
    }

    report(network.snapshot());

    // 5. Save results
    storage::save_results(network.snapshot(), &args.output_dir)?;

    // 6. Generate visualizations if requested
    if !args.skip_viz {
        viz::generate_visualizations(network.snapshot(), &args.output_dir)?;
    }

    log::info!("Done. Results saved to {}", args.output_dir);

    Ok(())
}

fn report(snapshot: &Snapshot) {
    for person in snapshot.persons() {
        log::info!("{} ({} friends)", person.name, person.friends.len());
    }
    for record in display_records(snapshot.path_records()) {
        log::info!(
            "  {} -> {} : {}",
            snapshot.name_of(record.issuer),
            snapshot.name_of(record.receiver),
            record.hop_count
        );
    }
}
