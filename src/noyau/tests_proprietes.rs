//! Tests de propriétés (campagne) : lois de conversion + table de plage.
//!
//! But : vérifier les lois sur beaucoup de valeurs sans dépendance externe.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - tolérance absolue 1e-9 sur les allers-retours (valeurs bornées à ±1e4)

use std::time::{Duration, Instant};

use super::{convertir, generer_plage, pas_plage, Unite, Valeur};

const TOLERANCE: f64 = 1e-9;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    /// Uniforme dans [min, max].
    fn entre(&mut self, min: f64, max: f64) -> f64 {
        let t = self.next_u32() as f64 / u32::MAX as f64;
        min + t * (max - min)
    }
    fn unite(&mut self) -> Unite {
        Unite::TOUTES[(self.next_u32() % 4) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers ------------------------ */

fn nombre(v: Valeur, ctx: &str) -> f64 {
    v.nombre()
        .unwrap_or_else(|| panic!("attendu un nombre ({ctx}), obtenu {v:?}"))
}

fn assert_proche(a: f64, b: f64, ctx: &str) {
    assert!((a - b).abs() <= TOLERANCE, "{ctx}: {a} vs {b}");
}

/// Plus petite valeur valide dans l’unité `u` (zéro absolu), avec une marge.
fn minimum_valide(u: Unite) -> f64 {
    u.depuis_celsius(-273.15) + 1e-6
}

/* ------------------------ Lois de conversion ------------------------ */

#[test]
fn prop_identite_celsius() {
    let start = Instant::now();
    let mut rng = Rng::new(0x7e57_c0de);

    for _ in 0..5_000 {
        budget(start, Duration::from_secs(2));
        let x = rng.entre(-273.15, 1.0e6);
        let r = convertir(x, Unite::Celsius);
        assert_eq!(nombre(r.celsius, "identité"), x, "x={x}");
    }
}

#[test]
fn prop_aller_retour_par_unite() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..5_000 {
        budget(start, Duration::from_secs(2));
        let u = rng.unite();
        let v = rng.entre(minimum_valide(u), 1.0e4);

        let c = u.vers_celsius(v);
        let retour = u.depuis_celsius(c);
        assert_proche(retour, v, &format!("{u} v={v}"));

        // via le moteur complet : la valeur dans l’unité source est reproduite
        let r = convertir(v, u);
        assert_proche(nombre(r.get(u), "source"), v, &format!("moteur {u} v={v}"));
    }
}

#[test]
fn prop_aller_retour_via_kelvin() {
    let mut rng = Rng::new(7);

    for _ in 0..2_000 {
        let u = rng.unite();
        let v = rng.entre(minimum_valide(u), 1.0e4);

        let k = nombre(convertir(v, u).kelvin, "kelvin");
        let retour = nombre(convertir(k, Unite::Kelvin).get(u), "retour");
        assert_proche(retour, v, &format!("{u} v={v} k={k}"));
    }
}

#[test]
fn prop_kelvin_jamais_negatif() {
    let mut rng = Rng::new(1234);

    for _ in 0..5_000 {
        let u = rng.unite();
        let v = rng.entre(-1.0e3, 1.0e3);
        let r = convertir(v, u);

        match r.kelvin {
            Valeur::Nombre(k) => assert!(k >= 0.0, "{u} v={v} k={k}"),
            Valeur::SousZeroAbsolu => {
                // tout ou rien
                for w in Unite::TOUTES {
                    assert_eq!(r.get(w), Valeur::SousZeroAbsolu, "{u} v={v} champ={w}");
                }
            }
        }
    }
}

#[test]
fn prop_coherence_croisee() {
    let mut rng = Rng::new(99);

    for _ in 0..2_000 {
        // marge au-dessus du zéro absolu : les reconversions arrondissent
        let c = rng.entre(-273.0, 1.0e4);
        let r = convertir(c, Unite::Celsius);
        let f = nombre(r.fahrenheit, "°F");
        let k = nombre(r.kelvin, "K");
        let re = nombre(r.reaumur, "°Ré");

        // chaque champ reconverti donne le même °C
        let c_f = nombre(convertir(f, Unite::Fahrenheit).celsius, "°F");
        assert_proche(c_f, c, "°F");
        let c_k = nombre(convertir(k, Unite::Kelvin).celsius, "K");
        assert_proche(c_k, c, "K");
        let c_re = nombre(convertir(re, Unite::Reaumur).celsius, "°Ré");
        assert_proche(c_re, c, "°Ré");
    }
}

#[test]
fn prop_points_connus() {
    let r = convertir(0.0, Unite::Celsius);
    assert_eq!(r.celsius, Valeur::Nombre(0.0));
    assert_eq!(r.fahrenheit, Valeur::Nombre(32.0));
    assert_eq!(r.kelvin, Valeur::Nombre(273.15));
    assert_eq!(r.reaumur, Valeur::Nombre(0.0));

    assert_eq!(convertir(-40.0, Unite::Celsius).fahrenheit, Valeur::Nombre(-40.0));

    let r = convertir(80.0, Unite::Reaumur);
    assert_eq!(r.celsius, Valeur::Nombre(100.0));
    assert_eq!(r.fahrenheit, Valeur::Nombre(212.0));

    assert_eq!(convertir(-273.15, Unite::Celsius).kelvin, Valeur::Nombre(0.0));
    assert!(!convertir(-273.16, Unite::Celsius).est_valide());
}

/* ------------------------ Table de plage ------------------------ */

#[test]
fn prop_plage_pas_constant() {
    let start = Instant::now();
    let mut rng = Rng::new(2024);

    for _ in 0..500 {
        budget(start, Duration::from_secs(2));

        let debut = rng.entre(-500.0, 500.0).round();
        let fin = debut + rng.entre(0.0, 1_000.0).round();

        let t = generer_plage(debut, fin);
        let pas = pas_plage(debut, fin);
        assert_eq!(pas, ((fin - debut) / 10.0).floor().max(1.0));

        assert!(!t.is_empty(), "[{debut}, {fin}]");
        assert_eq!(t[0].celsius, debut);
        assert_eq!(t.len(), ((fin - debut) / pas).floor() as usize + 1, "[{debut}, {fin}]");

        for w in t.windows(2) {
            assert_eq!(w[1].celsius - w[0].celsius, pas, "[{debut}, {fin}]");
        }
        assert!(t[t.len() - 1].celsius <= fin);

        // même entrée => même sortie
        assert_eq!(t, generer_plage(debut, fin));
    }
}

/// Boucle de référence : i = debut ; tant que i <= fin ; i += pas.
fn cles_reference(debut: f64, fin: f64) -> Vec<f64> {
    let pas = pas_plage(debut, fin);
    let mut out = Vec::new();
    let mut i = debut;
    while i <= fin {
        out.push(i);
        i += pas;
    }
    out
}

#[test]
fn prop_plage_bornes_fractionnaires() {
    let start = Instant::now();
    let mut rng = Rng::new(0xf4ac);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(2));

        // bornes non entières (au dixième ou quelconques)
        let debut = rng.entre(-400.0, 400.0);
        let debut = if rng.next_u32() % 2 == 0 {
            (debut * 10.0).round() / 10.0
        } else {
            debut
        };
        let fin = debut + rng.entre(0.0, 300.0);

        let t = generer_plage(debut, fin);
        let cles: Vec<f64> = t.iter().map(|l| l.celsius).collect();
        assert_eq!(cles, cles_reference(debut, fin), "[{debut}, {fin}]");

        // première ligne = debut, dernière <= fin, la suivante dépasserait fin
        let pas = pas_plage(debut, fin);
        assert_eq!(cles[0], debut);
        let derniere = cles[cles.len() - 1];
        assert!(derniere <= fin, "[{debut}, {fin}] derniere={derniere}");
        assert!(derniere + pas > fin, "[{debut}, {fin}] ligne manquante après {derniere}");

        for w in t.windows(2) {
            assert_proche(w[1].celsius - w[0].celsius, pas, &format!("[{debut}, {fin}]"));
        }
    }
}

#[test]
fn prop_plage_inversee_toujours_vide() {
    let mut rng = Rng::new(5);

    for _ in 0..500 {
        let fin = rng.entre(-1.0e4, 1.0e4);
        let debut = fin + rng.entre(1e-3, 1.0e4);
        assert!(generer_plage(debut, fin).is_empty(), "[{debut}, {fin}]");
    }
}

#[test]
fn prop_plage_lignes_coherentes_avec_moteur() {
    let t = generer_plage(-300.0, 300.0);
    for l in &t {
        let r = convertir(l.celsius, Unite::Celsius);
        assert_eq!(l.fahrenheit, r.fahrenheit);
        assert_eq!(l.kelvin, r.kelvin);
        assert_eq!(l.reaumur, r.reaumur);
    }
}
