//! Built-in ticket display names for the "special names" edition.

use once_cell::sync::Lazy;

use super::pool::POOL_SIZE;

/// Default set of 50 display names, one per ticket, in id order.
pub static DEFAULT_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Alegria", "Esperança", "Fortuna", "Estrela", "Trevo", "Aurora", "Brisa", "Cristal",
        "Diamante", "Esmeralda", "Felicidade", "Girassol", "Harmonia", "Íris", "Jasmim", "Luar",
        "Maré", "Nuvem", "Orvalho", "Pérola", "Quindim", "Rubi", "Safira", "Topázio", "Vitória",
        "Abacaxi", "Beija-Flor", "Canário", "Dourado", "Encanto", "Faísca", "Gaivota", "Horizonte",
        "Imperatriz", "Jandaia", "Lampejo", "Miragem", "Neblina", "Oásis", "Paixão", "Quimera",
        "Relâmpago", "Serenata", "Tempestade", "Universo", "Vagalume", "Xodó", "Zéfiro", "Âmbar",
        "Ventania",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});
