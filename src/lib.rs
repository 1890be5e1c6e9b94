// src/lib.rs
//
// Thermo Q-pur — bibliothèque
// ---------------------------
// Le noyau de conversion est exposé seul : n’importe quel front-end
// (l’app eframe de src/main.rs, ou aucun) peut en dépendre.

pub mod noyau;
