use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::warn;

use timberscope::{
    catalog::CatalogLoader, logging, rank_by_name, scoring::Recommendation, validation,
    Config, ParcelReport,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Timber parcel valuation and ranking")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parcel catalog (overrides the config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Sort key: score, price, acres or value
    #[arg(long)]
    sort: Option<String>,

    /// Seed for canopy grid generation (overrides the catalog seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Parcel to report on; defaults to the top-ranked parcel
    #[arg(long)]
    parcel: Option<u32>,

    /// Print the selected parcel report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_yaml(path)?,
        None => Config::default(),
    };
    logging::init(&config.logging);

    let catalog_path = cli.catalog.unwrap_or_else(|| config.catalog.clone());
    let catalog = CatalogLoader::new(".").load(&catalog_path)?;
    let parcels = catalog.build_parcels(cli.seed.or(config.random_seed));

    for finding in validation::validate_catalog(&parcels) {
        for issue in &finding.issues {
            warn!(parcel = finding.parcel_id, "{issue}");
        }
    }

    let sort = cli.sort.unwrap_or_else(|| config.default_sort.clone());
    let ranked = rank_by_name(&parcels, &sort);
    for (position, parcel) in ranked.iter().enumerate() {
        println!(
            "{:>2}. [{:>3}] {:<10} {:<36} {:>8.0} ac  ${:>10.0}  ${:.0}/ac",
            position + 1,
            parcel.score,
            Recommendation::from_score(parcel.score).label(),
            parcel.name,
            parcel.acres,
            parcel.asking_price,
            parcel.price_per_acre,
        );
    }

    let selected = match cli.parcel {
        Some(id) => ranked
            .iter()
            .find(|parcel| parcel.id == id)
            .ok_or_else(|| anyhow!("no parcel with id {id} in {}", catalog.name))?,
        None => ranked
            .first()
            .ok_or_else(|| anyhow!("catalog {} has no parcels", catalog.name))?,
    };

    let report = ParcelReport::build(selected, &config.pricing)?;
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        let valuation = &report.valuation;
        println!();
        println!("{} ({} County)", report.name, report.county);
        println!("  recommendation   {}", report.recommendation_label);
        println!("  value per acre   ${}", valuation.value_per_acre);
        println!("  ROI              {:.1}%", valuation.roi_pct);
        println!("  timber surplus   ${:.0}", valuation.timber_surplus);
        println!("  canopy closure   {}%", valuation.canopy_closure_pct);
        println!("  harvest ready    {} MBF", report.site.harvest_ready_mbf);
        for row in &report.species.rows {
            println!(
                "  {:<20} {:>6} MBF @ ${}/MBF = ${}",
                row.name, row.volume_mbf, row.price_per_mbf, row.value
            );
        }
    }
    Ok(())
}
