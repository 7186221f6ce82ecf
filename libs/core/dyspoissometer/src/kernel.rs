// [libs/core/dyspoissometer/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: KERNEL DENSITY ENGINE (V12.0 - BITMAP DUAL)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: TAMAÑO, DENSIDAD Y SESGO DE KERNEL
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. BITMAP DUAL: La iteración x -> lista[lista[x]] corre en doble
 *    búfer con dos mapas de bits (pasadas par e impar); el punto fijo
 *    del conjunto de valores visitados marca el kernel.
 * 2. EXPECTATION DUAL: La esperanza de densidad ofrece una ruta rápida
 *    (corte por subdesbordamiento de términos) y una lenta (suma de
 *    menor a mayor magnitud tras localizar el primer término no nulo).
 * 3. SKEW CONFINEMENT: El sesgo normalizado bilateral queda confinado
 *    a [0, 1] con 0.5 como punto de equilibrio.
 *
 * # Mathematical Proof (Expected Density):
 * E[S0] = (1 + Σ_{p=1}^{Q−1} Q! / ((Q−p)!·Q^p)) / Q, evaluada en
 * espacio logarítmico para sobrevivir al rango dinámico del factorial.
 * =================================================================
 */

use crate::errors::DyspoissonError;
use crate::lists::uint_list_new_zeroed;
use entropics_core_numeric::prelude::{exp, log, log_sum, Number, Uint, UINT_BITS, UINT_BIT_MAX};

/**
 * Tamaño del kernel de una lista de máscaras.
 *
 * # In:
 * 'mask_list' contiene N máscaras, cada una en [0, N − 1].
 *
 * # Logic:
 * Itera la lista a través de sí misma en doble búfer hasta que el mapa
 * de bits de los enteros supervivientes es idéntico entre la pasada
 * par y la impar; el conteo de unos del mapa estable es el tamaño del
 * kernel, garantizado en [1, N].
 */
pub fn kernel_size(mask_list: &[Uint]) -> Result<Uint, DyspoissonError> {
    let mask_count = mask_list.len();
    if mask_count == 0 {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "lista de máscaras vacía para tamaño de kernel",
        });
    }
    let bitmap_len = (mask_count - 1) / (UINT_BITS as usize) + 1;
    let mut bitmap_even = uint_list_new_zeroed(bitmap_len)?;
    let mut bitmap_odd = uint_list_new_zeroed(bitmap_len)?;
    let mut iteration_even = uint_list_new_zeroed(mask_count)?;
    let mut iteration_odd = uint_list_new_zeroed(mask_count)?;
    iteration_even.copy_from_slice(mask_list);
    loop {
        bitmap_even.fill(0);
        for idx in 0..mask_count {
            let value = iteration_even[iteration_even[idx] as usize];
            iteration_odd[idx] = value;
            bitmap_even[(value >> UINT_BITS.trailing_zeros()) as usize] |=
                (1 as Uint) << (value & UINT_BIT_MAX as Uint);
        }
        bitmap_odd.fill(0);
        for idx in (0..mask_count).rev() {
            let value = iteration_odd[iteration_odd[idx] as usize];
            iteration_even[idx] = value;
            bitmap_odd[(value >> UINT_BITS.trailing_zeros()) as usize] |=
                (1 as Uint) << (value & UINT_BIT_MAX as Uint);
        }
        if bitmap_even == bitmap_odd {
            break;
        }
    }
    let kernel_size = bitmap_even
        .iter()
        .map(|word| word.count_ones() as Uint)
        .sum();
    Ok(kernel_size)
}

/// Densidad de kernel: tamaño / N, confinada a [0, 1].
#[must_use]
pub fn kernel_density(mask_idx_max: Uint, kernel_size: Uint) -> Number {
    let density = (kernel_size as Number) / ((mask_idx_max + 1) as Number);
    density.clamp(0.0, 1.0)
}

/**
 * Esperanza de la densidad de kernel, ruta rápida.
 *
 * Suma términos decrecientes hasta que dejan de alterar el acumulado.
 * Ligeramente inexacta porque muchos términos despreciables podrían
 * sumar algo apreciable; la ruta lenta cubre ese caso.
 */
#[must_use]
pub fn kernel_density_expected_fast(mask_idx_max: Uint) -> Number {
    let mask_idx_max_logsum = log_sum(mask_idx_max);
    let mask_count = mask_idx_max + 1;
    let mask_count_log = log(mask_count as Number);
    let mut density = 0.0 as Number;
    if mask_idx_max != 0 {
        let mut mask_count_minus_period = mask_idx_max - 1;
        let mut period_minus_1 = 1 as Uint;
        loop {
            let term = exp(
                mask_idx_max_logsum
                    - log_sum(mask_count_minus_period)
                    - (period_minus_1 as Number) * mask_count_log,
            );
            let density_old = density;
            density += term;
            if period_minus_1 == mask_idx_max || density == density_old {
                break;
            }
            mask_count_minus_period -= 1;
            period_minus_1 += 1;
        }
    }
    density += 1.0;
    density /= mask_count as Number;
    density.clamp(0.0, 1.0)
}

/**
 * Esperanza de la densidad de kernel, ruta lenta de máxima exactitud.
 *
 * # Logic:
 * Localiza por búsqueda binaria el mayor período con término no nulo y
 * suma después del término de menor al de mayor magnitud, preservando
 * los aportes que la ruta rápida descarta.
 */
#[must_use]
pub fn kernel_density_expected_slow(mask_idx_max: Uint) -> Number {
    let mask_idx_max_logsum = log_sum(mask_idx_max);
    let mask_count = mask_idx_max + 1;
    let mask_count_log = log(mask_count as Number);
    let mut density = 0.0 as Number;
    if mask_idx_max != 0 {
        let term_at = |period_minus_1: Uint| -> Number {
            exp(
                mask_idx_max_logsum
                    - log_sum(mask_idx_max - period_minus_1)
                    - (period_minus_1 as Number) * mask_count_log,
            )
        };
        let mut period_max = mask_idx_max;
        let mut period_min = 1 as Uint;
        while period_max != period_min {
            let period = period_max - ((period_max - period_min) >> 1);
            if term_at(period) != 0.0 {
                period_min = period;
            } else {
                period_max = period - 1;
            }
        }
        let mut period_minus_1 = period_max;
        while period_minus_1 != 0 {
            density += term_at(period_minus_1);
            period_minus_1 -= 1;
        }
    }
    density += 1.0;
    density /= mask_count as Number;
    density.clamp(0.0, 1.0)
}

/**
 * Sesgo de kernel: desviación normalizada bilateral de la densidad
 * observada respecto de la esperada.
 *
 * skew = 0.5·d/e si d ≤ e; si no, 0.5·(2 − e/d). Confinado a [0, 1],
 * con 0.5 como equilibrio exacto.
 */
#[must_use]
pub fn kernel_skew(kernel_density: Number, kernel_density_expected: Number) -> Number {
    let mut skew = 0.5 as Number;
    if kernel_density <= kernel_density_expected {
        skew *= kernel_density / kernel_density_expected;
    } else {
        skew *= 2.0 - (kernel_density_expected / kernel_density);
    }
    skew.clamp(0.0, 1.0)
}
