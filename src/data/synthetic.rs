//! Synthetic identity generation, standing in for the remote random-user feed

use crate::data::{PersonId, RawPerson};
use rand::seq::SliceRandom;
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Facundo", "Gabriela", "Hugo", "Ines", "Joaquin",
    "Lucia", "Mateo", "Nora", "Oscar", "Paula", "Ramiro", "Sofia", "Tomas", "Valeria", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Benitez", "Castro", "Dominguez", "Fernandez", "Gomez", "Herrera", "Ibarra",
    "Juarez", "Lopez", "Medina", "Navarro", "Ortiz", "Perez", "Romero", "Suarez",
];

/// Fabricate `count` raw identities with sequential ids starting at 1
pub fn generate_identities<R: Rng>(count: usize, rng: &mut R) -> Vec<RawPerson> {
    log::info!("Generating {} synthetic identities", count);

    (1..=count as PersonId)
        .map(|id| {
            let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Anon");
            let last = LAST_NAMES.choose(rng).copied().unwrap_or("Ymous");
            let uid = random_uid(rng);

            RawPerson {
                id,
                avatar: format!("https://robohash.org/{}?set=set4", &uid[..8]),
                email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                uid,
                first_name: first.to_string(),
                last_name: last.to_string(),
            }
        })
        .collect()
}

/// uuid-shaped lowercase hex string
fn random_uid<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.gen();
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}
