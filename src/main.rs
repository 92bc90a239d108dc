// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resrank::{
    find_role, load_corpus, KeywordProfile, KeywordScorer, RankingEngine, RankingMode,
    SimilarityConfig, StopWords, BUILTIN_ROLES,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, RankArgs};

/// Environment variable holding the log filter, e.g. `RESRANK_LOG=debug`.
const LOG_ENV: &str = "RESRANK_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank(args) => run_rank(&args),
        Commands::Roles => {
            display::print_roles(BUILTIN_ROLES);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_rank(args: &RankArgs) -> Result<()> {
    let config = similarity_config(args)?;
    let engine = RankingEngine::new(&config)?;

    let (title, mode) = ranking_mode(args)?;
    if args.explain && !matches!(mode, RankingMode::Keyword(_)) {
        bail!("--explain only applies to --role or --profile");
    }

    let documents = load_corpus(&args.docs)
        .with_context(|| format!("loading corpus from {}", args.docs.display()))?;
    eprintln!("Loaded {} documents from {}", documents.len(), args.docs.display());

    let ranking = engine.rank(&mode, &documents)?;
    let limit = args.limit.unwrap_or(ranking.len());

    if args.json {
        let json = serde_json::to_string_pretty(ranking.top(limit))
            .context("serializing ranking")?;
        println!("{}", json);
        return Ok(());
    }

    let scorer = KeywordScorer::new();
    display::print_ranking(&title, &ranking, limit, |scored| {
        let RankingMode::Keyword(profile) = &mode else {
            return None;
        };
        if !args.explain {
            return None;
        }
        documents
            .iter()
            .find(|doc| doc.id == scored.id)
            .map(|doc| scorer.breakdown(&doc.text, profile))
    });
    Ok(())
}

/// Build the similarity config: file first, then command-line overrides.
fn similarity_config(args: &RankArgs) -> Result<SimilarityConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = read_file(path)?;
            SimilarityConfig::from_json(&content)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SimilarityConfig::default(),
    };

    if let Some(max_features) = args.max_features {
        config.max_features = Some(max_features);
    }
    if args.no_stop_words {
        config.stop_words = StopWords::None;
    }
    Ok(config)
}

fn ranking_mode(args: &RankArgs) -> Result<(String, RankingMode)> {
    if let Some(name) = &args.role {
        let role = find_role(name).ok_or_else(|| {
            let known: Vec<&str> = BUILTIN_ROLES.iter().map(|r| r.name).collect();
            anyhow!("unknown role '{}' (known: {})", name, known.join(", "))
        })?;
        return Ok((role.name.to_string(), RankingMode::Keyword(role.profile()?)));
    }

    if let Some(path) = &args.profile {
        let content = read_file(path)?;
        let profile: KeywordProfile = serde_json::from_str(&content)
            .with_context(|| format!("parsing keyword profile {}", path.display()))?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "profile".to_string());
        return Ok((title, RankingMode::Keyword(profile)));
    }

    if let Some(description) = &args.description {
        return Ok((
            "Job description".to_string(),
            RankingMode::Description(description.clone()),
        ));
    }

    bail!("one of --role, --profile or --description is required")
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
