// [tests/mirror/libs/core/dyspoissometer/mibr_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR MIBR (V12.0 - COLLISION CONVENTION)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DYSPOISSON-MIRROR
 * RESPONSABILIDAD: CONVENCIÓN DE COLISIÓN Y DUALIDAD DE SESGO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COLLISION CONVENTION: Cada par adyacente igual del orden estable
 *    aporta su posición original más temprana; la posición cero se
 *    descarta por carecer de predecesor.
 * 2. SKEW DUALITY: skew_from_mibr y mibr_from_skew se certifican como
 *    inversas monótonas.
 * =================================================================
 */

use entropics_core_dyspoisson::prelude::*;
use entropics_core_numeric::prelude::{Number, Uint};

#[test]
fn certify_collision_convention_reference_list() {
    println!("\n🎯 [INICIO]: Auditoría de la convención de colisión V12.0...");
    // Única colisión (valor 3 en posiciones 1 y 3): aporta la posición
    // temprana 1.
    let mibr_value = mibr(&[7, 3, 5, 3, 2]).expect("mibr");
    assert_eq!(mibr_value, 1);
    println!("   ✅ Lista de referencia: MIBR = 1 certificado.");
}

#[test]
fn certify_no_collision_and_zero_predecessor() {
    // Sin colisiones: el estadístico degrada al índice máximo.
    assert_eq!(mibr(&[4, 2, 7, 0, 5]).expect("mibr"), 4);
    // La colisión anclada en la posición cero se descarta.
    assert_eq!(mibr(&[9, 9, 4, 4]).expect("mibr"), 2);
    // Lista unitaria: índice máximo cero.
    assert_eq!(mibr(&[3]).expect("mibr"), 0);
}

#[test]
fn certify_expected_mibr_sqrt_law() {
    // Con Q == Z, la esperanza converge a sqrt(Z·pi/2) − 4/3 dentro de
    // una unidad.
    for mask_max in [255 as Uint, 4095, 16383] {
        let expected = mibr_expected(mask_max, mask_max);
        let approximation = (((mask_max as Number) + 1.0)
            * (core::f64::consts::FRAC_PI_2 as Number))
            .sqrt()
            - 4.0 / 3.0;
        assert!(
            (expected - approximation).abs() <= 1.5,
            "esperanza divergió en Z={}: {} vs {}",
            mask_max + 1,
            expected,
            approximation
        );
    }
    // Degeneraciones: conteo o span unitarios anulan la esperanza.
    assert_eq!(mibr_expected(0, 255), 0.0);
    assert_eq!(mibr_expected(255, 0), 0.0);
}

#[test]
fn certify_skew_duality() {
    println!("\n🎯 [INICIO]: Auditoría de dualidad de sesgo V12.0...");
    let mask_max = 1023 as Uint;
    // Monotonía decreciente del sesgo.
    let mut previous = skew_from_mibr(mask_max, 0);
    assert_eq!(previous, 1.0);
    for mibr_value in 1..=256 as Uint {
        let current = skew_from_mibr(mask_max, mibr_value);
        assert!(current <= previous);
        assert!((0.0..=1.0).contains(&current));
        previous = current;
    }
    // Inversión: el sesgo de un MIBR recupera al menos ese MIBR.
    for mibr_value in [1 as Uint, 16, 64, 256] {
        let skew = skew_from_mibr(mask_max, mibr_value);
        let recovered = mibr_from_skew(mask_max, skew);
        assert!(recovered >= mibr_value);
    }
    // Umbral inalcanzablemente alto: solo el MIBR nulo califica.
    assert_eq!(mibr_from_skew(mask_max, 1.0), 0);
    // Umbral nulo: todo MIBR califica hasta el span completo.
    assert_eq!(mibr_from_skew(mask_max, 0.0), mask_max);
    println!("   ✅ Dualidad de sesgo certificada.");
}
