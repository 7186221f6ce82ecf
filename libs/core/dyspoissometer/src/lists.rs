// [libs/core/dyspoissometer/src/lists.rs]
/*!
 * =================================================================
 * APARATO: DISTRIBUTION PRIMITIVES (V12.0 - AUTOSCALE SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: LISTAS DE FRECUENCIA, POBLACIÓN Y ACUMULACIÓN
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ALLOCATION AWARENESS: Toda reserva pasa por 'try_reserve_exact';
 *    el fallo se reporta como error tipado, jamás como aborto.
 * 2. AUTOSCALE DECAY: El acumulador divide frecuencias entre dos con
 *    redondeo a par cuando el conteo implícito saturaría Uint,
 *    garantizando representación acotada para flujos indefinidos.
 * 3. NOMINAL PURITY: La longitud de cada slice porta el span; no se
 *    arrastran parámetros 'menos uno' redundantes.
 *
 * # Mathematical Proof (Decay Ordering):
 * La acumulación procede del índice 0 (pasado remoto) al final
 * (presente); cada evento de autoescala degrada más la memoria de las
 * máscaras antiguas que la de las recientes, produciendo decaimiento
 * exponencial de la relevancia estadística.
 * =================================================================
 */

use crate::errors::DyspoissonError;
use entropics_core_numeric::prelude::{Number, Uint, UINT_MAX};

/// Reserva una lista de Uint inicializada a cero, con conciencia de
/// fallo de reserva y de desborde del espacio de direcciones.
pub fn uint_list_new_zeroed(item_count: usize) -> Result<Vec<Uint>, DyspoissonError> {
    let mut list = Vec::new();
    list.try_reserve_exact(item_count)
        .map_err(|_| DyspoissonError::Allocation {
            requested_items: item_count,
        })?;
    list.resize(item_count, 0);
    Ok(list)
}

/// Reserva una lista de Number sin inicializar semánticamente (se
/// rellena a cero por higiene).
pub fn number_list_new_zeroed(item_count: usize) -> Result<Vec<Number>, DyspoissonError> {
    let mut list = Vec::new();
    list.try_reserve_exact(item_count)
        .map_err(|_| DyspoissonError::Allocation {
            requested_items: item_count,
        })?;
    list.resize(item_count, 0.0);
    Ok(list)
}

/// Convierte un conteo Uint a usize, detectando hosts cuyo espacio de
/// direcciones no puede contener la lista implicada.
pub fn uint_count_to_usize(item_count: u128) -> Result<usize, DyspoissonError> {
    usize::try_from(item_count).map_err(|_| DyspoissonError::Overflow {
        requested_items: item_count,
    })
}

/**
 * Rellena una lista de frecuencias para hacerla consistente con una
 * lista de máscaras, tras ponerla a cero.
 *
 * # Contrato:
 * Toda máscara debe caer en [0, freq_list.len() - 1]; la verificación
 * corre por cuenta del invocador cuando el dato no es confiable.
 */
pub fn freq_list_fill(freq_list: &mut [Uint], mask_list: &[Uint]) {
    freq_list.fill(0);
    for &mask in mask_list {
        freq_list[mask as usize] += 1;
    }
}

/// Frecuencia máxima presente en la lista.
#[must_use]
pub fn freq_max(freq_list: &[Uint]) -> Uint {
    freq_list.iter().copied().max().unwrap_or(0)
}

/**
 * Rellena una lista de poblaciones convencional (la primera entrada es
 * la población de la frecuencia uno) y retorna h0, el número de
 * máscaras que jamás ocurren.
 *
 * # Contrato:
 * 'pop_list' debe cubrir al menos la frecuencia máxima presente.
 */
pub fn pop_list_fill(freq_list: &[Uint], pop_list: &mut [Uint]) -> Uint {
    pop_list.fill(0);
    let mut h0 = 0 as Uint;
    for &freq in freq_list {
        if freq != 0 {
            pop_list[(freq - 1) as usize] += 1;
        } else {
            h0 += 1;
        }
    }
    h0
}

/**
 * Reserva y rellena la lista de poblaciones de una lista de frecuencias
 * de máximo desconocido.
 *
 * # Errors:
 * 'Allocation' si la reserva de la lista de poblaciones falla;
 * 'NumericDegenerate' si todas las frecuencias son cero.
 *
 * Retorna (pop_list, freq_max, h0).
 */
pub fn pop_list_new(freq_list: &[Uint]) -> Result<(Vec<Uint>, Uint, Uint), DyspoissonError> {
    let maximum = freq_max(freq_list);
    if maximum == 0 {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "lista de frecuencias sin entradas no nulas",
        });
    }
    let mut pop_list = uint_list_new_zeroed(uint_count_to_usize(maximum as u128)?)?;
    let h0 = pop_list_fill(freq_list, &mut pop_list);
    Ok((pop_list, maximum, h0))
}

/**
 * Variante obtusa: el invocador impone la frecuencia máxima rastreable
 * (por ejemplo, el número total de máscaras que podrían acumularse).
 *
 * Retorna (pop_list, h0); la lista cubre frecuencias [1, freq_max_bound].
 */
pub fn pop_list_obtuse_new(
    freq_list: &[Uint],
    freq_max_bound: Uint,
) -> Result<(Vec<Uint>, Uint), DyspoissonError> {
    let mut pop_list = uint_list_new_zeroed(uint_count_to_usize(freq_max_bound as u128)?)?;
    let h0 = pop_list_fill(freq_list, &mut pop_list);
    Ok((pop_list, h0))
}

/**
 * Acumula una lista de máscaras sobre una lista de frecuencias con
 * autoescala anti-desborde.
 *
 * # Logic:
 * Recorre las máscaras del índice 0 en adelante (la más antigua
 * primero). Cuando el conteo implícito alcanza UINT_MAX y aún quedan
 * máscaras, toda frecuencia se divide entre dos con redondeo
 * al-par-más-próximo (f -> (f >> 1) + (f & 3 == 3)) y el conteo
 * implícito se recalcula. Puede autoescalar más de una vez por
 * llamada.
 *
 * # Out:
 * Retorna true si la autoescala disparó al menos una vez.
 * 'mask_count_implied' queda en [1, UINT_MAX] e iguala exactamente la
 * suma de frecuencias resultante.
 */
pub fn freq_list_accrue_autoscale(
    freq_list: &mut [Uint],
    mask_count_implied: &mut Uint,
    mask_list: &[Uint],
) -> bool {
    let mut autoscaled = false;
    let mut implied = *mask_count_implied;
    let mut mask_idx_min = 0usize;
    while mask_idx_min < mask_list.len() {
        if implied == UINT_MAX {
            autoscaled = true;
            implied = 0;
            for freq in freq_list.iter_mut() {
                let halved = (*freq >> 1) + Uint::from((*freq & 3) == 3);
                *freq = halved;
                implied = implied.wrapping_add(halved);
            }
        }
        // Tras la autoescala el margen es al menos uno, luego el
        // fragmento nunca es vacío y el bucle progresa.
        let headroom = usize::try_from(UINT_MAX - implied).unwrap_or(usize::MAX);
        let remaining = mask_list.len() - mask_idx_min;
        let chunk = remaining.min(headroom);
        for &mask in &mask_list[mask_idx_min..mask_idx_min + chunk] {
            freq_list[mask as usize] += 1;
        }
        implied = implied.wrapping_add(chunk as Uint);
        mask_idx_min += chunk;
    }
    *mask_count_implied = implied;
    autoscaled
}
