//! Canonicalisation of Brazilian state names reported by ad platforms.
//!
//! Platforms report geography in unaccented English (`"State of Sao Paulo"`,
//! `"Parana"`); the dashboard groups and displays by the accented Portuguese
//! form. Some connectors put the state name in the city slot, so the same
//! normalisation is applied to both fields.

use std::sync::LazyLock;

use regex::Regex;

static STATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*state\s+of\s+").expect("valid state prefix regex"));

/// Unaccented provider spelling → canonical display name.
const STATE_NAMES: &[(&str, &str)] = &[
    ("Sao Paulo", "São Paulo"),
    ("Rio de Janeiro", "Rio de Janeiro"),
    ("Minas Gerais", "Minas Gerais"),
    ("Espirito Santo", "Espírito Santo"),
    ("Parana", "Paraná"),
    ("Goias", "Goiás"),
    ("Ceara", "Ceará"),
    ("Para", "Pará"),
    ("Maranhao", "Maranhão"),
    ("Piaui", "Piauí"),
    ("Bahia", "Bahia"),
    ("Pernambuco", "Pernambuco"),
    ("Rio Grande do Sul", "Rio Grande do Sul"),
    ("Santa Catarina", "Santa Catarina"),
    ("Distrito Federal", "Distrito Federal"),
    ("Amazonas", "Amazonas"),
    ("Mato Grosso", "Mato Grosso"),
    ("Mato Grosso do Sul", "Mato Grosso do Sul"),
];

/// Normalises a raw region or city name.
///
/// Strips a leading `"State of "` (any case), trims whitespace, then maps
/// known state spellings to their canonical form: exact match first, then
/// case-insensitive. Unknown names come back cleaned but otherwise unchanged.
#[must_use]
pub fn normalize_place_name(raw: &str) -> String {
    let cleaned = STATE_PREFIX.replace(raw, "");
    let cleaned = cleaned.trim();

    if let Some((_, canonical)) = STATE_NAMES.iter().find(|(key, _)| *key == cleaned) {
        return (*canonical).to_string();
    }

    let lowered = cleaned.to_lowercase();
    STATE_NAMES
        .iter()
        .find(|(key, _)| key.to_lowercase() == lowered)
        .map_or_else(|| cleaned.to_string(), |(_, canonical)| (*canonical).to_string())
}
