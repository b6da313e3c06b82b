use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};

use kcc_assist::corpus::Corpus;
use kcc_assist::matcher::{vector::VectorIndex, QueryInput};
use kcc_assist::state::AppState;
use kcc_assist::translate::GoogleTranslator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load env
    let _ = dotenv::dotenv();
    let dataset =
        dotenv::var("KCC_DATASET").unwrap_or_else(|_| "cleaned_kcc_dataset.csv".to_string());

    // Corpus and index are fatal at startup: no queries without them.
    let corpus = Arc::new(
        Corpus::load_csv(Path::new(&dataset))
            .with_context(|| format!("cannot serve queries without corpus {dataset}"))?,
    );
    info!(entries = corpus.len(), dataset = %dataset, "corpus loaded");

    let index = Arc::new(VectorIndex::fit(&corpus));
    info!(terms = index.vocabulary_len(), "vector index built");

    let translator = Arc::new(GoogleTranslator::from_env()?);
    let state = AppState::new(corpus, index, translator);

    // Line-oriented driver standing in for the conversational front end:
    // one query per line on stdin, one formatted response per query.
    info!("ready, reading queries from stdin");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = state.engine.respond(&QueryInput::text(line)).await;
        println!("{reply}\n");
    }

    Ok(())
}
