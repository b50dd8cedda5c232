use dexbase::Config;
use dexbase::generate::{self, Dump};

use tokio::fs;

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let dump = Dump::download().await?;
    let (catalog, encounters) = generate::normalize(&dump);

    fs::create_dir_all(config.data.join("generated")).await?;
    fs::write(config.catalog_path(), serde_json::to_string(&catalog)?).await?;
    fs::write(config.encounters_path(), serde_json::to_string(&encounters)?).await?;

    log::info!(
        "Generated {} Pokémon into {}",
        catalog.pokemon.len(),
        config.data.display()
    );

    Ok(())
}
