//! Drives one knowledge base session against the configured site and prints
//! what the view would show.

use backend::config::SiteConfig;
use frontend::{app::KnowledgeBase, data_definitions::capabilities::ListCapabilities};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().without_time())
        .with(filter)
        .init();

    let config = SiteConfig::from_env()?;
    let capabilities = ListCapabilities::from_env()?;
    info!("Site {} ({:?})", config.site_url, capabilities);

    let (loader, pages) = backend::connect(&config);
    let mut kb = KnowledgeBase::new(config, capabilities, loader, pages);
    kb.load_taxonomy().await;

    for set in kb.term_tree().term_sets() {
        println!("{} ({} terms)", set.set_name, set.node_count());
    }

    let first_term = kb
        .term_tree()
        .term_sets()
        .iter()
        .find_map(|set| set.terms.first())
        .map(|term| term.id.clone());
    let Some(term_id) = first_term else {
        warn!("No terms loaded, nothing to list");
        return Ok(());
    };
    kb.select_term(&term_id).await;

    let list = kb.pages_list();
    let pagination = list.pagination();
    println!(
        "{}: {}-{} of {} (page {}/{})",
        list.category().unwrap_or_default(),
        pagination.start_index(),
        pagination.end_index(),
        pagination.total_items(),
        pagination.current_page(),
        pagination.total_pages(),
    );
    for item in list.visible_items() {
        println!("  {:>6}  {}", item.id, item.title.as_deref().unwrap_or_default());
    }
    Ok(())
}
