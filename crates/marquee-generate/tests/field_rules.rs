use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marquee_generate::generators::catalog::{AGE_CERTIFICATIONS, ROLES};
use marquee_generate::{Credit, GeneratorContext, IdSequence, Title, generate_batch};

const CURRENT_YEAR: i32 = 2026;

fn titles(count: u64, seed: u64) -> Vec<Title> {
    let ctx = GeneratorContext::with_year(CURRENT_YEAR);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_batch(&ctx, count, &mut IdSequence::default(), &mut rng)
        .expect("batch")
}

fn credits(count: u64, seed: u64) -> Vec<Credit> {
    let ctx = GeneratorContext::with_year(CURRENT_YEAR);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_batch(&ctx, count, &mut IdSequence::default(), &mut rng)
        .expect("batch")
}

#[test]
fn title_ids_are_distinct() {
    let batch = titles(100, 1);
    let ids: HashSet<i64> = batch.iter().map(|title| title.id).collect();
    assert_eq!(ids.len(), batch.len());
}

#[test]
fn title_fields_respect_ranges() {
    for title in titles(2_000, 2) {
        assert!((1880..=CURRENT_YEAR).contains(&title.release_year));
        assert!((60..=240).contains(&title.runtime));
        assert!(!title.title_name.is_empty());
        assert!(!title.description.is_empty());
        assert!(!title.production_country.is_empty());
        assert!(AGE_CERTIFICATIONS.contains(&title.age_certification.as_str()));
        let genres = title.genres.split(", ").count();
        assert!((1..=4).contains(&genres), "genres {:?}", title.genres);
        if let Some(seasons) = title.seasons {
            assert!((1..=10).contains(&seasons));
        }
    }
}

#[test]
fn seasons_null_about_seventy_percent() {
    let batch = titles(10_000, 3);
    let nulls = batch.iter().filter(|title| title.seasons.is_none()).count();
    let rate = nulls as f64 / batch.len() as f64;
    assert!((0.66..=0.74).contains(&rate), "null rate {rate}");
}

#[test]
fn credit_fields_respect_ranges() {
    let batch = credits(2_000, 4);
    let ids: HashSet<i64> = batch.iter().map(|credit| credit.id).collect();
    assert_eq!(ids.len(), batch.len());
    for credit in batch {
        assert!((0..=100).contains(&credit.title_id));
        assert!(ROLES.contains(&credit.role.as_str()));
        assert!(!credit.real_name.is_empty());
        assert!(!credit.character_name.is_empty());
    }
}

#[test]
fn every_role_is_reachable() {
    let roles: HashSet<String> = credits(2_000, 5).into_iter().map(|c| c.role).collect();
    assert_eq!(roles.len(), ROLES.len());
}
