// src/app/contenu.rs
//
// Contenu statique de l’UI : “le saviez-vous ?” + fiches par unité.
// Aucune valeur numérique en dur ici : les repères sont calculés par le noyau.

use thermo_qpur::noyau::Unite;

pub const FAITS: [&str; 8] = [
    "À -40, les échelles Celsius et Fahrenheit se croisent : -40 °C = -40 °F.",
    "Le zéro absolu (0 K) n’a jamais été atteint ; on s’en approche à quelques milliardièmes de kelvin.",
    "On écrit « 300 K » et non « 300 °K » : le kelvin n’a pas de degré depuis 1967.",
    "L’échelle Réaumur place l’ébullition de l’eau à 80 °Ré ; on la trouvait encore sur les thermomètres de fromagerie.",
    "Fahrenheit avait fixé son zéro sur un mélange de glace, d’eau et de sel d’ammoniac.",
    "La surface du Soleil avoisine 5 800 K, son cœur environ 15 millions de kelvins.",
    "Le corps humain tourne autour de 37 °C, soit environ 98,6 °F.",
    "À l’origine, Celsius avait inversé son échelle : 0 pour l’ébullition, 100 pour la fusion.",
];

/// Fiche d’information d’une unité (popup).
pub struct FicheUnite {
    pub titre: &'static str,
    pub texte: &'static str,
}

pub fn fiche(unite: Unite) -> FicheUnite {
    match unite {
        Unite::Celsius => FicheUnite {
            titre: "Degré Celsius",
            texte: "Proposé par Anders Celsius (1742). Unité usuelle presque partout : \
                    0 pour la fusion de la glace, 100 pour l’ébullition de l’eau \
                    à pression normale.",
        },
        Unite::Fahrenheit => FicheUnite {
            titre: "Degré Fahrenheit",
            texte: "Proposé par Daniel Gabriel Fahrenheit (1724). Toujours en usage aux \
                    États-Unis. Un degré Fahrenheit vaut 5/9 de degré Celsius.",
        },
        Unite::Kelvin => FicheUnite {
            titre: "Kelvin",
            texte: "Unité SI de température thermodynamique (Lord Kelvin, 1848). \
                    Même pas que le Celsius, mais le zéro est le zéro absolu : \
                    aucune valeur négative n’a de sens.",
        },
        Unite::Reaumur => FicheUnite {
            titre: "Degré Réaumur",
            texte: "Proposé par René-Antoine Ferchault de Réaumur (1730). Longtemps courant \
                    en Europe : 0 pour la fusion, 80 pour l’ébullition de l’eau.",
        },
    }
}

/// Repères physiques (en °C) affichés dans chaque fiche, convertis à la volée.
pub const REPERES_C: [(&str, f64); 4] = [
    ("Zéro absolu", -273.15),
    ("Fusion de la glace", 0.0),
    ("Corps humain", 37.0),
    ("Ébullition de l’eau", 100.0),
];
