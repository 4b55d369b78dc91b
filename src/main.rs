use anyhow::Context;
use family_graph::algorithm::generations::generation_counts;
use family_graph::algorithm::trees::{
    build_ancestor_tree_with_config, build_descendant_tree_with_config,
};
use family_graph::{
    FamilyStore, GraphConfig, PersonId, Snapshot, assign_generations, compute_sibling_links,
    find_root_people, resolve,
};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

fn config_from_env() -> GraphConfig {
    let config = GraphConfig::default();
    match std::env::var("FAMILY_GRAPH_ANCESTOR_DEPTH") {
        Ok(value) => match value.parse() {
            Ok(depth) => config.with_ancestor_depth(depth),
            Err(_) => {
                warn!("Ignoring invalid FAMILY_GRAPH_ANCESTOR_DEPTH: {value}");
                config
            }
        },
        Err(_) => config,
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: family-graph <snapshot.json> [person-id]");
        std::process::exit(2);
    };
    let person_id: Option<PersonId> = args
        .next()
        .map(|arg| arg.parse())
        .transpose()
        .context("person id must be an integer")?;

    let config = config_from_env();
    info!("{config}");

    let start = Instant::now();
    let snapshot = Snapshot::from_path(&path)
        .with_context(|| format!("Failed to load snapshot from {}", path.display()))?;
    info!(
        "Loaded {} people and {} relationships in {:?}",
        snapshot.people.len(),
        snapshot.relationships.len(),
        start.elapsed()
    );

    let store = FamilyStore::new(snapshot);
    let index = store.index()?;

    let roots = find_root_people(&index);
    let generations = assign_generations(&index);
    let sibling_links = compute_sibling_links(&index);
    info!(
        "{} root people, {} sibling links",
        roots.len(),
        sibling_links.len()
    );
    for (generation, count) in generation_counts(&generations) {
        info!("  generation {generation}: {count} people");
    }

    let output = match person_id {
        Some(id) => {
            let person = index
                .person(id)
                .with_context(|| format!("No person with id {id}"))?;
            serde_json::json!({
                "person": person,
                "relationships": resolve(&index, id),
                "ancestors": build_ancestor_tree_with_config(Some(person), &index, &config),
                "descendants": build_descendant_tree_with_config(person, &index, &config),
            })
        }
        None => serde_json::to_value(&generations)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
