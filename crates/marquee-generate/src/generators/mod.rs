//! Per-field generation rules and the batch generator.
//!
//! Every column is filled by a plain function taking the run context and the
//! random source; records are assembled by calling those functions once per
//! field, in column order.

pub mod catalog;
pub mod credit;
pub mod title;

use chrono::Datelike;
use rand::{Rng, RngCore};
use serde::Serialize;

use crate::errors::GenerationError;
use crate::ids::IdSequence;

/// Values fixed for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorContext {
    /// Upper bound for release years.
    pub current_year: i32,
}

impl GeneratorContext {
    pub fn now() -> Self {
        Self::with_year(chrono::Utc::now().year())
    }

    pub fn with_year(current_year: i32) -> Self {
        Self { current_year }
    }
}

/// A record type with a fixed column layout.
pub trait Record: Serialize + Sized {
    /// Table name used in logs and reports.
    const TABLE: &'static str;
    /// File name the batch is exported to.
    const FILE_NAME: &'static str;
    /// Header row, in serialization order.
    const COLUMNS: &'static [&'static str];

    /// Build one record, drawing every field except `id` from `rng`.
    fn fake(ctx: &GeneratorContext, id: i64, rng: &mut dyn RngCore) -> Self;
}

/// Generate `count` records, taking ids from `ids` in order.
///
/// Fails without drawing anything when `ids` cannot supply `count` distinct ids.
pub fn generate_batch<T: Record>(
    ctx: &GeneratorContext,
    count: u64,
    ids: &mut IdSequence,
    rng: &mut dyn RngCore,
) -> Result<Vec<T>, GenerationError> {
    if !ids.has_room_for(count) {
        return Err(id_overflow::<T>(count, ids));
    }

    let capacity = usize::try_from(count).unwrap_or(0);
    let mut records = Vec::with_capacity(capacity);
    for _ in 0..count {
        let id = ids.next_id().ok_or_else(|| id_overflow::<T>(count, ids))?;
        records.push(T::fake(ctx, id, rng));
    }
    Ok(records)
}

pub(crate) fn id_overflow<T: Record>(count: u64, ids: &IdSequence) -> GenerationError {
    let table = T::TABLE;
    let start = match ids.peek() {
        Some(id) => format!("id {id}"),
        None => "exhausted sequence".to_string(),
    };
    GenerationError::InvalidOptions(format!(
        "{count} {table} starting at {start} overflow i64"
    ))
}

/// Uniform pick from a non-empty constant list.
pub(crate) fn pick(values: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    values[rng.random_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::model::{Credit, Title};

    #[test]
    fn batch_uses_sequence_ids_in_order() {
        let ctx = GeneratorContext::with_year(2024);
        let mut ids = IdSequence::new(10);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let titles: Vec<Title> = generate_batch(&ctx, 5, &mut ids, &mut rng).expect("batch");

        let got: Vec<i64> = titles.iter().map(|title| title.id).collect();
        assert_eq!(got, vec![10, 11, 12, 13, 14]);
        assert_eq!(ids.peek(), Some(15));
    }

    #[test]
    fn batch_ending_at_max_id_is_unique() {
        let ctx = GeneratorContext::with_year(2024);
        let mut ids = IdSequence::new(i64::MAX - 2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let credits: Vec<Credit> = generate_batch(&ctx, 3, &mut ids, &mut rng).expect("batch");

        let got: Vec<i64> = credits.iter().map(|credit| credit.id).collect();
        assert_eq!(got, vec![i64::MAX - 2, i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn batch_past_max_id_is_rejected() {
        let ctx = GeneratorContext::with_year(2024);
        let mut ids = IdSequence::new(i64::MAX - 1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = generate_batch::<Credit>(&ctx, 3, &mut ids, &mut rng);

        assert!(matches!(result, Err(GenerationError::InvalidOptions(_))));
        assert_eq!(ids.peek(), Some(i64::MAX - 1));
    }

    #[test]
    fn empty_batch_leaves_sequence_untouched() {
        let ctx = GeneratorContext::with_year(2024);
        let mut ids = IdSequence::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let credits: Vec<Credit> = generate_batch(&ctx, 0, &mut ids, &mut rng).expect("batch");

        assert!(credits.is_empty());
        assert_eq!(ids.peek(), Some(0));
    }

    #[test]
    fn same_seed_same_batch() {
        let ctx = GeneratorContext::with_year(2024);
        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);

        let a: Vec<Title> = generate_batch(&ctx, 20, &mut IdSequence::default(), &mut rng_a)
            .expect("batch A");
        let b: Vec<Title> = generate_batch(&ctx, 20, &mut IdSequence::default(), &mut rng_b)
            .expect("batch B");

        assert_eq!(a, b);
    }
}
