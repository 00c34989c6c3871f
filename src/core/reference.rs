//! Reference dictionaries for the piercing and jewelry catalog.
//!
//! Keys may be written with or without accents; they are normalized at
//! lookup time. Order inside every table is significant.

use crate::core::config::{ResolutionConfig, DEFAULT_SIMILARITY_THRESHOLD};
use crate::core::types::{KeywordEntry, OverrideEntry, PhraseEntry, TypeEntry};

type Row = (&'static str, &'static [&'static str]);

pub const DEFAULT_COLORS: &[&str] = &["Estándar"];
pub const BASELINE_COLORS: &[&str] = &["negro", "azul", "blanco"];

pub static OVERRIDES: &[Row] = &[
    ("plug", &["negro", "azul", "amarillo", "blanco", "verde", "morado"]),
];

const HEART: &[&str] = &["dorado", "negro", "plateado"];
const HINGE: &[&str] = &["azul", "cobre", "dorado", "negro", "multicolor"];
const NOSTRIL: &[&str] = &["azul", "multicolor", "negro"];
const FLOWER: &[&str] = &["azul", "celeste", "rojo", "rosa", "verde"];
const GEM: &[&str] = &["azul", "morado", "transparente", "rojo", "verde", "trebol"];
const NAVEL: &[&str] = &["dorado", "plateado", "multicolor"];
const ARROW: &[&str] = &["dorado", "negro", "plateado"];
// "mulicolor" and "cobrejpg" are the deployed tokens; fixing them is a data release.
const LONG_BARBELL: &[&str] = &["azul", "cobre", "dorado", "mulicolor"];
const CIRCULAR_ARROW: &[&str] = &["dorado", "cobrejpg", "negro"];
const STONE: &[&str] = &["cristal", "negro"];
const LABRET_SHAPE: &[&str] = &["dorado", "negro", "plateado", "rosa"];
const PLUG_SIMPLE: &[&str] = &["amarillo", "azul", "morado", "negro", "blanco", "verde"];
const PLUG_DOUBLE: &[&str] = &["amarillo", "azul", "beige", "caoba", "morado", "rojo", "verde"];
const DILATOR: &[&str] = &["negro", "rojo"];
const DUO: &[&str] = &["celeste", "dorado", "verde"];
const JELLYFISH: &[&str] = &["negro", "verde"];
const ACRYLIC: &[&str] = &["azul", "blanco", "rojo", "negro", "amarillo"];
const METAL: &[&str] = &["azul", "cobre", "dorado"];
const GOLDSMITH: &[&str] = &["dorado", "plateado"];
const SILICONE_TUNNEL: &[&str] = &["azul", "blanco", "rojo", "rosa", "negro", "verde"];

pub static PHRASES: &[Row] = &[
    // anillos
    ("anillo con corazón", HEART),
    ("anillo corazón", HEART),
    ("anillo con corazon", HEART),
    ("anillo corazon", HEART),
    ("anillo fino", HINGE),
    ("anillo con bisagra", HINGE),
    ("anillo bisagra", HINGE),
    ("aro para nostril", NOSTRIL),
    ("aro nostril", NOSTRIL),
    ("segment ring", &["azul", "dorado", "multicolor", "rosa"]),
    // bananas
    ("banana con rosa", FLOWER),
    ("banana flor", FLOWER),
    ("banana con flor", FLOWER),
    ("banana con gema", GEM),
    ("banana gema", GEM),
    ("banana simple", NAVEL),
    ("banana para el ombligo", NAVEL),
    ("banana para ombligo", NAVEL),
    // barbells
    ("barbell con alas", &["plateado"]),
    ("barbells alas", &["plateado"]),
    ("barbell alas", &["plateado"]),
    ("barbell flecha", ARROW),
    ("barbells flecha", ARROW),
    ("barbell con flecha", ARROW),
    ("barbell largo", LONG_BARBELL),
    ("barbells largo", LONG_BARBELL),
    ("circular barbell con flecha", CIRCULAR_ARROW),
    ("circular barbell flecha", CIRCULAR_ARROW),
    ("circular barbell con piedra", STONE),
    ("circular barbell piedra", STONE),
    // labrets
    ("labret corazón", LABRET_SHAPE),
    ("labret con corazón", LABRET_SHAPE),
    ("labret corazon", LABRET_SHAPE),
    ("labret simple", &["cobre", "dorado", "negro", "multicolor"]),
    ("labret triángulo", LABRET_SHAPE),
    ("labret triangulo", LABRET_SHAPE),
    ("labret con triángulo", LABRET_SHAPE),
    ("labret triangulos", LABRET_SHAPE),
    // plugs
    ("plug simple", PLUG_SIMPLE),
    ("plug", PLUG_SIMPLE),
    ("plug doble", PLUG_DOUBLE),
    ("plug dobles", PLUG_DOUBLE),
    ("plug de silicona", PLUG_DOUBLE),
    ("plug silicona", PLUG_DOUBLE),
    // dilatadores y expanders
    ("set de dilatadores", &["blanco", "rosa", "plateado", "violeta"]),
    ("dilatadores", DILATOR),
    ("dilatador", DILATOR),
    ("expander duo", DUO),
    ("expander con duo", DUO),
    ("expander medusa", JELLYFISH),
    ("expander con medusa", JELLYFISH),
    // túneles por material
    ("túnel de acrílico", ACRYLIC),
    ("tunel de acrílico", ACRYLIC),
    ("túnel acrílico", ACRYLIC),
    ("tunel acrilico", ACRYLIC),
    ("túnel de metal", METAL),
    ("tunel de metal", METAL),
    ("túnel metal", METAL),
    ("tunel metal", METAL),
    ("túnel orfebre", GOLDSMITH),
    ("tunel orfebre", GOLDSMITH),
    ("túnel mandala", GOLDSMITH),
    ("tunel mandala", GOLDSMITH),
    ("túnel de silicona", SILICONE_TUNNEL),
    ("tunel de silicona", SILICONE_TUNNEL),
    ("túnel silicona", SILICONE_TUNNEL),
    ("tunel silicona", SILICONE_TUNNEL),
    // genéricos
    ("túnel simple", SILICONE_TUNNEL),
    ("tunel simple", SILICONE_TUNNEL),
    ("túnel", SILICONE_TUNNEL),
    ("tunel", SILICONE_TUNNEL),
    ("piercing", HINGE),
];

pub static KEYWORDS: &[Row] = &[
    ("bisagra", HINGE),
    ("corazon", LABRET_SHAPE),
    ("triangulo", LABRET_SHAPE),
    ("flecha", ARROW),
    ("alas", &["plateado"]),
    ("gema", &["azul", "morado", "transparente", "rojo", "verde"]),
    ("acrilico", ACRYLIC),
    ("acrílico", ACRYLIC),
    ("silicona", SILICONE_TUNNEL),
    ("metal", METAL),
    ("orfebre", GOLDSMITH),
    ("mandala", GOLDSMITH),
    ("nostril", NOSTRIL),
    ("ombligo", NAVEL),
    ("piedra", STONE),
    ("duo", DUO),
    ("medusa", JELLYFISH),
    ("rosa", FLOWER),
    ("flor", FLOWER),
];

pub static TYPES: &[Row] = &[
    ("anillo", HINGE),
    ("aro", NOSTRIL),
    ("banana", &["azul", "dorado", "plateado", "verde", "rojo"]),
    ("barbell", &["azul", "cobre", "dorado", "negro", "plateado"]),
    ("labret", &["cobre", "dorado", "negro", "plateado", "rosa"]),
    ("plug", &["amarillo", "azul", "negro", "blanco", "verde"]),
    ("tunel", &["azul", "blanco", "dorado", "plateado", "rojo", "verde"]),
    ("túnel", &["azul", "blanco", "dorado", "plateado", "rojo", "verde"]),
    ("expander", &["celeste", "dorado", "negro", "verde"]),
    ("dilatador", &["blanco", "negro", "rosa", "rojo", "plateado", "violeta"]),
    ("piercing", HINGE),
];

fn rows<T>(table: &[Row], build: fn(&str, &[&str]) -> T) -> Vec<T> {
    table.iter().map(|&(key, colors)| build(key, colors)).collect()
}

impl ResolutionConfig {
    /// The curated storefront dictionaries.
    pub fn reference() -> Self {
        Self {
            overrides: rows(OVERRIDES, OverrideEntry::new),
            phrases: rows(PHRASES, PhraseEntry::new),
            keywords: rows(KEYWORDS, KeywordEntry::new),
            types: rows(TYPES, TypeEntry::new),
            default_colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            baseline_colors: BASELINE_COLORS.iter().map(|c| c.to_string()).collect(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
