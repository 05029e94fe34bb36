use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters::{self, AggregatePresenter};
use anyhow::{Context, Result};
use oncoview_types::MultiModelPredictionResult;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct ShowOptions {
    pub file: Option<PathBuf>,
    pub expand: Vec<String>,
    pub expand_all: bool,
}

pub fn handle(config: &Config, options: ShowOptions, ctx: &HandlerContext) -> Result<()> {
    let result = load_result(options.file.as_deref())?;
    info!(models = result.predictions.len(), "loaded prediction response");

    let mut presenter = AggregatePresenter::new(config.class_code_table());
    presenter.present(result);

    if !options.expand.is_empty() {
        for model_name in &options.expand {
            if !presenter.contains_model(model_name) {
                warn!(model = %model_name, "no such model in response");
            }
            presenter.toggle(model_name);
        }
    } else if options.expand_all || config.display.expand_all {
        presenter.expand_all();
    }

    ctx.render(presenters::present_prediction_report(&presenter))
}

fn load_result(file: Option<&Path>) -> Result<MultiModelPredictionResult> {
    match file {
        Some(path) if path != Path::new("-") => {
            let reader = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            oncoview_types::read_payload(BufReader::new(reader))
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => oncoview_types::read_payload(io::stdin().lock())
            .context("Failed to read prediction response from stdin"),
    }
}
