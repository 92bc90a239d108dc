// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the resrank command-line interface.
//!
//! Two subcommands: `rank` to score a corpus against a role, a keyword
//! profile, or a free-text job description, and `roles` to list the built-in
//! role catalog.

pub mod display;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "resrank",
    about = "Rank resumes against a job role or description",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a corpus of resumes
    Rank(RankArgs),

    /// List the built-in job roles and their keyword weights
    Roles,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["role", "profile", "description"])
))]
pub struct RankArgs {
    /// JSON corpus file (array of {id, name, text}) or a directory of .txt files
    #[arg(short, long)]
    pub docs: PathBuf,

    /// Built-in role to rank against (see `resrank roles`)
    #[arg(short, long)]
    pub role: Option<String>,

    /// JSON keyword profile: {"keyword": weight, ...}
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Free-text job description to rank by similarity
    #[arg(long)]
    pub description: Option<String>,

    /// Show only the top N documents
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Emit the ranking as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Show per-keyword counts under each document (keyword modes only)
    #[arg(long)]
    pub explain: bool,

    /// JSON similarity config: {"stopWords": "english", "maxFeatures": 5000}
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the similarity feature cap
    #[arg(long)]
    pub max_features: Option<usize>,

    /// Keep English stop words in the similarity vocabulary
    #[arg(long)]
    pub no_stop_words: bool,
}
