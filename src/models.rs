//! Frontend Models
//!
//! Shelf types from the core crate plus view-only data for the landing page.

pub use manhua_core::{FormMode, FormRow, FormStep, ManhuaItem, RowField, StatItem};

/// The single toast-like line under the hero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Bumped on every new note so a stale timer never clears a newer one
    pub seq: u32,
    pub text: String,
}

/// Landing page feature card
pub struct Feature {
    pub title: &'static str,
    pub detail: &'static str,
}

/// Landing page feed entry
pub struct Activity {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Prateleiras vivas",
        detail: "Monte estantes por gênero, humor ou fase e compartilhe.",
    },
    Feature {
        title: "Check-ins de capítulo",
        detail: "Marque manualmente o que leu e registre seu progresso.",
    },
    Feature {
        title: "Ritmo inteligente",
        detail: "Sugestões de leitura com base no seu tempo e hábito.",
    },
];

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Você marcou como lido: Moonlit Contract",
        detail: "Capítulo 89 salvo no seu histórico.",
    },
    Activity {
        title: "Atualização manual: Lotus Noir",
        detail: "Capítulo 53 registrado por você há 2h.",
    },
    Activity {
        title: "Nova lista: Manhuas de inverno",
        detail: "Criada por Lani. 8 títulos em comum.",
    },
];
