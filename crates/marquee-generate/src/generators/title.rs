use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::address::en::CountryCode;
use fake::faker::lorem::en::{Sentence, Word};
use rand::{Rng, RngCore};

use super::catalog::AGE_CERTIFICATIONS;
use super::{GeneratorContext, Record, pick};
use crate::model::Title;

pub const EARLIEST_RELEASE_YEAR: i32 = 1880;
pub const RUNTIME_MINUTES: RangeInclusive<i32> = 60..=240;
pub const GENRE_WORDS: RangeInclusive<usize> = 1..=4;
pub const SEASONS: RangeInclusive<i32> = 1..=10;
/// Probability that `Seasons` is left empty.
pub const SEASONS_NULL_RATE: f64 = 0.7;

impl Record for Title {
    const TABLE: &'static str = "titles";
    const FILE_NAME: &'static str = crate::TITLES_FILE;
    const COLUMNS: &'static [&'static str] = &[
        "Id",
        "TitleName",
        "Description",
        "ReleaseYear",
        "AgeCertification",
        "Runtime",
        "Genres",
        "ProductionCountry",
        "Seasons",
    ];

    fn fake(ctx: &GeneratorContext, id: i64, rng: &mut dyn RngCore) -> Self {
        Title {
            id,
            title_name: title_name(rng),
            description: description(rng),
            release_year: release_year(ctx, rng),
            age_certification: age_certification(rng),
            runtime: runtime(rng),
            genres: genres(rng),
            production_country: production_country(rng),
            seasons: seasons(rng),
        }
    }
}

pub fn title_name(rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng(rng)
}

pub fn description(rng: &mut dyn RngCore) -> String {
    Sentence(3..11).fake_with_rng(rng)
}

/// Year in `[1880, current_year]`. A context year before 1880 collapses to 1880.
pub fn release_year(ctx: &GeneratorContext, rng: &mut dyn RngCore) -> i32 {
    let latest = ctx.current_year.max(EARLIEST_RELEASE_YEAR);
    rng.random_range(EARLIEST_RELEASE_YEAR..=latest)
}

pub fn age_certification(rng: &mut dyn RngCore) -> String {
    pick(AGE_CERTIFICATIONS, rng).to_string()
}

pub fn runtime(rng: &mut dyn RngCore) -> i32 {
    rng.random_range(RUNTIME_MINUTES)
}

/// One to four lorem words joined with `", "`.
pub fn genres(rng: &mut dyn RngCore) -> String {
    let count = rng.random_range(GENRE_WORDS);
    let words: Vec<String> = (0..count)
        .map(|_| Word().fake_with_rng::<String, _>(rng))
        .collect();
    words.join(", ")
}

pub fn production_country(rng: &mut dyn RngCore) -> String {
    CountryCode().fake_with_rng(rng)
}

pub fn seasons(rng: &mut dyn RngCore) -> Option<i32> {
    if rng.random_bool(SEASONS_NULL_RATE) {
        None
    } else {
        Some(rng.random_range(SEASONS))
    }
}
