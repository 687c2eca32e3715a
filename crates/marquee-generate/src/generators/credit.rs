use std::ops::RangeInclusive;

use fake::Fake;
use fake::faker::name::en::Name;
use rand::{Rng, RngCore};

use super::catalog::ROLES;
use super::{GeneratorContext, Record, pick};
use crate::model::Credit;

/// Range `TitleId` is drawn from, independent of any generated title ids.
pub const TITLE_IDS: RangeInclusive<i64> = 0..=100;

impl Record for Credit {
    const TABLE: &'static str = "credits";
    const FILE_NAME: &'static str = crate::CREDITS_FILE;
    const COLUMNS: &'static [&'static str] =
        &["Id", "TitleId", "RealName", "CharacterName", "Role"];

    fn fake(_ctx: &GeneratorContext, id: i64, rng: &mut dyn RngCore) -> Self {
        Credit {
            id,
            title_id: title_id(rng),
            real_name: person_name(rng),
            character_name: person_name(rng),
            role: role(rng),
        }
    }
}

pub fn title_id(rng: &mut dyn RngCore) -> i64 {
    rng.random_range(TITLE_IDS)
}

pub fn person_name(rng: &mut dyn RngCore) -> String {
    Name().fake_with_rng(rng)
}

pub fn role(rng: &mut dyn RngCore) -> String {
    pick(ROLES, rng).to_string()
}
