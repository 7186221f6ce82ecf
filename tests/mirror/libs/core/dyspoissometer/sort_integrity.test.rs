// [tests/mirror/libs/core/dyspoissometer/sort_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE ORDENACIÓN RADIX (V12.0 - PERMUTATION LAW)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-DYSPOISSON-MIRROR
 * RESPONSABILIDAD: DETERMINISMO, ESTABILIDAD E INVERSIÓN DE ÍNDICES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PROPERTY SWEEP: proptest genera listas adversariales; el orden,
 *    el multiconjunto y la estabilidad se certifican contra el
 *    ordenador estable de la librería estándar.
 * 2. INDEX INVERSION: La permutación de índices reconstruye la lista
 *    original bajo la proyección de clave.
 *
 * # Mathematical Proof (Stable Permutation):
 * Dos ordenaciones estables del mismo multiconjunto coinciden elemento
 * a elemento; la igualdad con sort_by_key estable certifica ambas
 * propiedades a la vez.
 * =================================================================
 */

use entropics_core_dyspoisson::prelude::*;
use entropics_core_numeric::prelude::{Number, Uint};
use proptest::prelude::*;

proptest! {
    #[test]
    fn certify_uint_sort_matches_stable_reference(
        list in proptest::collection::vec(any::<u16>(), 1..512)
    ) {
        let mut work: Vec<Uint> = list.iter().map(|&value| value as Uint).collect();
        let mut scratch = vec![0 as Uint; work.len()];
        uint_list_sort(&mut work, &mut scratch);
        let mut reference: Vec<Uint> = list.iter().map(|&value| value as Uint).collect();
        reference.sort_unstable();
        prop_assert_eq!(work, reference);
    }

    #[test]
    fn certify_idx_sort_is_inverse_permutation(
        list in proptest::collection::vec(any::<u16>(), 1..512)
    ) {
        let original: Vec<Uint> = list.iter().map(|&value| value as Uint).collect();
        let mut work = original.clone();
        let mut scratch = vec![0 as Uint; work.len()];
        let mut idx_list: Vec<Uint> = (0..work.len() as Uint).collect();
        let mut idx_scratch = vec![0 as Uint; work.len()];
        uint_idx_list_sort(&mut idx_list, &mut idx_scratch, &mut work, &mut scratch);
        // La lista queda ordenada y los índices son una permutación.
        prop_assert!(work.windows(2).all(|pair| pair[0] <= pair[1]));
        let mut seen = vec![false; work.len()];
        for &idx in &idx_list {
            prop_assert!(!seen[idx as usize]);
            seen[idx as usize] = true;
        }
        // Inversión: cada posición ordenada recupera su original.
        for (slot, &idx) in idx_list.iter().enumerate() {
            prop_assert_eq!(work[slot], original[idx as usize]);
        }
        // Estabilidad: claves iguales conservan índices crecientes.
        for slot in 1..work.len() {
            if work[slot] == work[slot - 1] {
                prop_assert!(idx_list[slot - 1] < idx_list[slot]);
            }
        }
    }

    #[test]
    fn certify_number_sort_ascending(
        list in proptest::collection::vec(0u32..1_000_000, 1..256)
    ) {
        // Claves no negativas, como todo logaritmo saturado aguas arriba.
        let mut work: Vec<Number> = list.iter().map(|&value| value as Number).collect();
        let mut scratch = vec![0.0 as Number; work.len()];
        number_list_sort(&mut work, &mut scratch);
        prop_assert!(work.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn certify_adversarial_lane_patterns() {
    println!("\n🧮 [INICIO]: Auditoría de carriles adversariales V12.0...");
    // Claves que solo difieren en el carril alto: fuerza todas las
    // pasadas antes del cortocircuito monotónico.
    let mut work: Vec<Uint> = (0..256)
        .map(|idx| ((255 - idx) as Uint) << (Uint::BITS - 9))
        .collect();
    let mut scratch = vec![0 as Uint; work.len()];
    uint_list_sort(&mut work, &mut scratch);
    assert!(work.windows(2).all(|pair| pair[0] <= pair[1]));
    println!("   ✅ Carriles altos: orden certificado.");
}
