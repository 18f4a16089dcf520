use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gedcom_diff::algorithm::matching::{ComparisonEngine, FilterMode, SimilarityWeights, SortMode};
use gedcom_diff::{DiffConfig, Document, Tag, TransformOptions, read_document, transform};
use itertools::Itertools;
use log::info;
use serde_json::{Value, json};

/// Compare the individuals of two GEDCOM files
#[derive(Parser)]
#[command(name = "gedcom-diff")]
#[command(version)]
#[command(after_help = "\
Examples:
  gedcom-diff old.ged new.ged
  gedcom-diff old.ged new.ged --filter unmatched --sort name
  gedcom-diff old.ged new.ged --children-weight 0.3 --json
  gedcom-diff old.ged new.ged --dump-json --tag-keys --exclude-tag CHAN")]
struct Cli {
    /// Left GEDCOM file
    left: PathBuf,

    /// Right GEDCOM file
    right: PathBuf,

    /// Which comparisons to print (all, different, unmatched)
    #[arg(long)]
    filter: Option<FilterMode>,

    /// Order of the comparisons (similarity, name)
    #[arg(long)]
    sort: Option<SortMode>,

    /// Pairs scoring below this are reported as unmatched
    #[arg(long, value_name = "F")]
    min_similarity: Option<f64>,

    /// Weight of the individual's own name and dates
    #[arg(long, value_name = "F")]
    own_weight: Option<f64>,

    /// Weight of the parents
    #[arg(long, value_name = "F")]
    parents_weight: Option<f64>,

    /// Weight of the spouses
    #[arg(long, value_name = "F")]
    spouses_weight: Option<f64>,

    /// Weight of the children
    #[arg(long, value_name = "F")]
    children_weight: Option<f64>,

    /// Score candidate pairs on a single thread
    #[arg(long)]
    no_parallel: bool,

    /// Show a progress bar while scoring
    #[arg(long)]
    progress: bool,

    /// Print the comparisons as a JSON array
    #[arg(long)]
    json: bool,

    /// Print both documents as JSON instead of comparing them
    #[arg(long)]
    dump_json: bool,

    /// With --dump-json: use tag labels such as "Birth" instead of codes
    #[arg(long)]
    pretty_tags: bool,

    /// With --dump-json: omit record pointers
    #[arg(long)]
    no_pointers: bool,

    /// With --dump-json: key objects by tag instead of emitting arrays
    #[arg(long)]
    tag_keys: bool,

    /// With --dump-json: render names as a single string
    #[arg(long)]
    string_name: bool,

    /// With --dump-json: drop tags outside the official vocabulary
    #[arg(long)]
    only_official_tags: bool,

    /// With --dump-json: drop this tag and its subtree (repeatable)
    #[arg(long, value_name = "TAG")]
    exclude_tag: Vec<String>,
}

impl Cli {
    /// Layer the flags over the environment configuration
    fn apply(&self, mut config: DiffConfig) -> DiffConfig {
        let weights = config.matching.weights;
        config.matching.weights = SimilarityWeights::new(
            self.own_weight.unwrap_or(weights.own),
            self.parents_weight.unwrap_or(weights.parents),
            self.spouses_weight.unwrap_or(weights.spouses),
            self.children_weight.unwrap_or(weights.children),
        );
        if let Some(min_similarity) = self.min_similarity {
            config.matching.min_similarity = min_similarity;
        }
        if self.no_parallel {
            config.matching.use_parallel = false;
        }
        config.matching.show_progress = self.progress;
        config.filter = self.filter.unwrap_or(config.filter);
        config.sort = self.sort.unwrap_or(config.sort);

        let options = &mut config.transform;
        options.pretty_tags |= self.pretty_tags;
        options.no_pointers |= self.no_pointers;
        options.tag_keys |= self.tag_keys;
        options.string_name |= self.string_name;
        options.only_official_tags |= self.only_official_tags;
        options
            .exclude_tags
            .extend(self.exclude_tag.iter().map(|code| Tag::from(code.as_str())));
        config
    }
}

/// Both documents side by side under `left` and `right`
fn dump_documents(left: &Document, right: &Document, options: &TransformOptions) -> Value {
    json!({
        "left": transform(left, options),
        "right": transform(right, options),
    })
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.apply(DiffConfig::from_env());

    let left = read_document(&cli.left)
        .with_context(|| format!("Failed to load {}", cli.left.display()))?;
    let right = read_document(&cli.right)
        .with_context(|| format!("Failed to load {}", cli.right.display()))?;

    for (label, document) in [("left", &left), ("right", &right)] {
        info!(
            "{label}: {} individuals, {} families, {} places",
            document.individuals().len(),
            document.families().len(),
            document.places().len()
        );
    }

    if cli.dump_json {
        let dump = dump_documents(&left, &right, &config.transform);
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("Failed to render JSON")?
        );
        return Ok(());
    }

    let engine =
        ComparisonEngine::new(config.matching.clone()).context("Invalid matching options")?;
    let comparisons = engine.compare(&left.individuals(), &right.individuals());
    let view = comparisons.view(config.filter, config.sort);

    info!(
        "Reporting {} of {} comparisons ({} matched)",
        view.len(),
        comparisons.len(),
        comparisons.matched_count()
    );

    if cli.json {
        let summaries = view.iter().map(|c| c.summary()).collect_vec();
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).context("Failed to render JSON")?
        );
        return Ok(());
    }

    for comparison in view {
        let differences = comparison.differences();
        if differences.is_empty() {
            println!("{comparison}");
        } else {
            println!("{comparison}  differs: {}", differences.iter().join(", "));
        }
    }

    Ok(())
}
