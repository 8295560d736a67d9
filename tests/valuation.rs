use std::path::PathBuf;

use timberscope::{
    catalog::CatalogLoader,
    rank, rank_by_name,
    scoring::Recommendation,
    species::{species_breakdown, SpeciesPriceTable},
    valuation::value_parcel,
    Parcel, ParcelReport, SortKey,
};

fn load_parcels() -> Vec<Parcel> {
    CatalogLoader::new(env!("CARGO_MANIFEST_DIR"))
        .load(PathBuf::from("catalogs/washington.yaml"))
        .unwrap()
        .build_parcels(None)
}

fn ids(ranked: &[&Parcel]) -> Vec<u32> {
    ranked.iter().map(|p| p.id).collect()
}

#[test]
fn computed_price_per_acre_matches_listing() {
    for parcel in load_parcels() {
        let valuation = value_parcel(&parcel).unwrap();
        assert!(
            (valuation.price_per_acre as f64 - parcel.price_per_acre).abs() <= 1.0,
            "parcel {}: computed {} vs listed {}",
            parcel.id,
            valuation.price_per_acre,
            parcel.price_per_acre
        );
    }
}

#[test]
fn roi_sign_follows_surplus() {
    for parcel in load_parcels() {
        let valuation = value_parcel(&parcel).unwrap();
        let surplus = parcel.timber_value - parcel.asking_price;
        assert_eq!(valuation.timber_surplus, surplus);
        if surplus > 0.0 {
            assert!(valuation.roi_pct > 0.0);
        } else if surplus < 0.0 {
            assert!(valuation.roi_pct < 0.0);
        } else {
            assert_eq!(valuation.roi_pct, 0.0);
        }
    }
}

#[test]
fn species_totals_ignore_canopy_seed() {
    let catalog = CatalogLoader::new(env!("CARGO_MANIFEST_DIR"))
        .load("catalogs/washington.yaml")
        .unwrap();
    let table = SpeciesPriceTable::default();
    let a = catalog.build_parcels(Some(1));
    let b = catalog.build_parcels(Some(2));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(
            species_breakdown(x, &table).unwrap(),
            species_breakdown(y, &table).unwrap()
        );
    }
}

#[test]
fn ranking_orders_fixture() {
    let parcels = load_parcels();
    assert_eq!(ids(&rank(&parcels, SortKey::Score)), vec![1, 4, 2, 5, 3]);
    assert_eq!(ids(&rank(&parcels, SortKey::Price)), vec![1, 5, 2, 3, 4]);
    assert_eq!(ids(&rank(&parcels, SortKey::Acres)), vec![4, 2, 3, 1, 5]);
    assert_eq!(ids(&rank(&parcels, SortKey::Value)), vec![4, 3, 2, 1, 5]);
    assert_eq!(ids(&rank_by_name(&parcels, "county")), vec![1, 2, 3, 4, 5]);
}

#[test]
fn ranking_is_an_idempotent_permutation() {
    let parcels = load_parcels();
    for key in SortKey::ALL {
        let once = rank(&parcels, key);
        let owned: Vec<Parcel> = once.iter().map(|p| (*p).clone()).collect();
        let twice = rank(&owned, key);
        assert_eq!(ids(&once), ids(&twice), "{key} not idempotent");

        let mut sorted_ids = ids(&once);
        sorted_ids.sort_unstable();
        assert_eq!(sorted_ids, vec![1, 2, 3, 4, 5]);
    }
    assert_eq!(parcels[0].id, 1, "input must not be reordered");
}

#[test]
fn reports_for_every_parcel() {
    let table = SpeciesPriceTable::default();
    let labels: Vec<Recommendation> = load_parcels()
        .iter()
        .map(|parcel| ParcelReport::build(parcel, &table).unwrap().recommendation)
        .collect();
    assert_eq!(
        labels,
        vec![
            Recommendation::StrongBuy,
            Recommendation::Consider,
            Recommendation::Consider,
            Recommendation::Consider,
            Recommendation::Consider,
        ]
    );
}
