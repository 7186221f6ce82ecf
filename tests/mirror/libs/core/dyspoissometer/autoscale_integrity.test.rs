// [tests/mirror/libs/core/dyspoissometer/autoscale_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE AUTOESCALA (V12.0 - DECAY SOVEREIGN)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DYSPOISSON-MIRROR
 * RESPONSABILIDAD: PRESERVACIÓN EXACTA Y DECAIMIENTO ACOTADO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. EXACT PRESERVATION: Tras cada acumulación, Σ frecuencias iguala
 *    el conteo implícito con exactitud de entero.
 * 2. SATURATION DRILL: Un acumulador sembrado al borde de la
 *    saturación dispara la autoescala y sobrevive con conteo >= 1.
 * 3. EVEN ROUNDING: La división entre dos redondea al par más próximo
 *    para minimizar el error acumulado.
 *
 * # Mathematical Proof (Bounded Representation):
 * Cada autoescala divide el conteo implícito aproximadamente entre
 * dos; un flujo indefinido de máscaras induce a lo sumo un conteo de
 * UINT_MAX, garantizando representación acotada por decaimiento
 * exponencial de la memoria antigua.
 * =================================================================
 */

use entropics_core_dyspoisson::prelude::*;
use entropics_core_numeric::prelude::{Uint, UINT_MAX};

#[test]
fn certify_exact_preservation_without_saturation() {
    println!("\n📈 [INICIO]: Auditoría de preservación exacta V12.0...");
    let mut freq_list = vec![0 as Uint; 16];
    let mut mask_count_implied = 0 as Uint;
    let mut pseudorandom_seed = 1u64;
    let mut mask_list = vec![0 as Uint; 4096];
    mask_list_pseudorandom_fill(&mut mask_list, 15, &mut pseudorandom_seed);
    let before: Vec<Uint> = freq_list.clone();
    let autoscaled =
        freq_list_accrue_autoscale(&mut freq_list, &mut mask_count_implied, &mask_list);
    assert!(!autoscaled);
    assert_eq!(mask_count_implied, 4096);
    assert_eq!(freq_list.iter().sum::<Uint>(), mask_count_implied);
    // Cada frecuencia creció a lo sumo en las máscaras recién
    // acumuladas de su valor.
    for (mask, (&after, &prior)) in freq_list.iter().zip(&before).enumerate() {
        let accrued = mask_list.iter().filter(|&&value| value as usize == mask).count() as Uint;
        assert_eq!(after, prior + accrued);
    }
    println!("   ✅ Preservación exacta certificada sobre 4096 máscaras.");
}

#[test]
fn certify_saturation_drill_survives() {
    // Acumulador monomáscara sembrado al borde de la saturación: las
    // siguientes acumulaciones deben autoescalar y dejar un conteo
    // implícito positivo y exacto.
    let mut freq_list = vec![UINT_MAX - 2];
    let mut mask_count_implied = UINT_MAX - 2;
    let zero_masks = [0 as Uint; 4];
    let autoscaled =
        freq_list_accrue_autoscale(&mut freq_list, &mut mask_count_implied, &zero_masks);
    assert!(autoscaled, "la saturación debió disparar la autoescala");
    assert!(mask_count_implied >= 1);
    assert_eq!(freq_list.iter().sum::<Uint>(), mask_count_implied);
}

#[test]
fn certify_multi_mask_saturation_consistency() {
    // Saturación con varias máscaras: la suma sigue cuadrando tras
    // múltiples rondas de acumulación.
    let span = 8usize;
    let mut freq_list = vec![(UINT_MAX / span as Uint) - 1; span];
    let mut mask_count_implied = freq_list.iter().sum::<Uint>();
    let mask_list: Vec<Uint> = (0..64).map(|idx| (idx % span) as Uint).collect();
    let autoscaled =
        freq_list_accrue_autoscale(&mut freq_list, &mut mask_count_implied, &mask_list);
    assert_eq!(freq_list.iter().sum::<Uint>(), mask_count_implied);
    assert!(mask_count_implied >= 1);
    // Con el acumulador a un paso de UINT_MAX, la ronda debe haber
    // escalado al menos una vez.
    assert!(autoscaled);
}
