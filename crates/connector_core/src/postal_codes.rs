//! Static mapping from marketplace region labels to platform postal codes.
//!
//! The marketplace addresses orders by county label; the platform checkout
//! needs a concrete postal code for the shipping simulation. Loaded once,
//! immutable for the process lifetime.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref POSTAL_CODES: HashMap<&'static str, &'static str> = HashMap::from([
        ("Alba", "510010"),
        ("Arad", "310010"),
        ("Arges", "110010"),
        ("Bacau", "600010"),
        ("Bihor", "410010"),
        ("Bistrita-Nasaud", "420010"),
        ("Botosani", "710010"),
        ("Braila", "810010"),
        ("Brasov", "500010"),
        ("Bucuresti", "010010"),
        ("Buzau", "120010"),
        ("Calarasi", "910010"),
        ("Caras-Severin", "320010"),
        ("Cluj", "400010"),
        ("Constanta", "900010"),
        ("Covasna", "520010"),
        ("Dambovita", "130010"),
        ("Dolj", "200010"),
        ("Galati", "800010"),
        ("Giurgiu", "080010"),
        ("Gorj", "210010"),
        ("Harghita", "530010"),
        ("Hunedoara", "330010"),
        ("Ialomita", "920010"),
        ("Iasi", "700010"),
        ("Ilfov", "070010"),
        ("Maramures", "430010"),
        ("Mehedinti", "220010"),
        ("Mures", "540010"),
        ("Neamt", "610010"),
        ("Olt", "230010"),
        ("Prahova", "100010"),
        ("Salaj", "450010"),
        ("Satu Mare", "440010"),
        ("Sibiu", "550010"),
        ("Suceava", "720010"),
        ("Teleorman", "140010"),
        ("Timis", "300010"),
        ("Tulcea", "820010"),
        ("Valcea", "240010"),
        ("Vaslui", "730010"),
        ("Vrancea", "620010"),
    ]);
}

/// Postal code for a region label. An unrecognized label is not an error;
/// the simulation runs without a postal code in that case.
pub fn lookup(region: &str) -> Option<String> {
    POSTAL_CODES.get(region).map(|code| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_region_resolves() {
        assert_eq!(lookup("Cluj"), Some("400010".to_string()));
        assert_eq!(lookup("Bucuresti"), Some("010010".to_string()));
    }

    #[test]
    fn unknown_region_passes_through_as_none() {
        assert_eq!(lookup("Atlantis"), None);
        assert_eq!(lookup(""), None);
    }
}
