//! Seed Data
//!
//! The starter shelf used when storage is empty, and the fixed list behind
//! the "Importar lista" action.

use crate::domain::{IdSource, ManhuaItem, STATUS_IMPORTED};

struct SeedEntry {
    name: &'static str,
    description: &'static str,
    total: u32,
    current: u32,
}

const STARTER: &[(&str, SeedEntry, bool)] = &[
    (
        "starter-moonlit-contract",
        SeedEntry {
            name: "Moonlit Contract",
            description: "Um pacto assinado sob a lua cheia muda o destino de uma herdeira.",
            total: 120,
            current: 89,
        },
        true,
    ),
    (
        "starter-lotus-noir",
        SeedEntry {
            name: "Lotus Noir",
            description: "Uma assassina aposentada volta ao submundo de Xangai.",
            total: 80,
            current: 52,
        },
        false,
    ),
];

const IMPORT_LIST: &[SeedEntry] = &[
    SeedEntry {
        name: "Azure Blade",
        description: "Um aprendiz de ferreiro forja a espada que pode acabar com a seita.",
        total: 40,
        current: 17,
    },
    SeedEntry {
        name: "City of Jade",
        description: "Intrigas da corte numa capital erguida sobre jade.",
        total: 260,
        current: 204,
    },
    SeedEntry {
        name: "Crimson Pavilion",
        description: "",
        total: 150,
        current: 0,
    },
    SeedEntry {
        name: "Lotus Noir",
        description: "Uma assassina aposentada volta ao submundo de Xangai.",
        total: 80,
        current: 52,
    },
];

/// Starter shelf with fixed ids, so repeated fallbacks stay stable
pub fn starter_shelf() -> Vec<ManhuaItem> {
    STARTER
        .iter()
        .map(|(id, entry, favorite)| {
            ManhuaItem::new(*id, entry.name, entry.total, entry.current)
                .with_description(entry.description)
                .with_favorite(*favorite)
        })
        .collect()
}

/// Fresh "Importado" items for the import action
pub fn import_list(ids: &mut impl IdSource) -> Vec<ManhuaItem> {
    IMPORT_LIST
        .iter()
        .map(|entry| {
            ManhuaItem::new(ids.next_id(), entry.name, entry.total, entry.current)
                .with_description(entry.description)
                .with_status(STATUS_IMPORTED)
        })
        .collect()
}
