// [libs/core/dyspoissometer/src/logfreedom.rs]
/*!
 * =================================================================
 * APARATO: LOGFREEDOM ENGINE (V12.0 - LOG-GAMMA SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: LOGFREEDOM, DYSPOISSONISMO, SPARSITY, POISSON
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL PATH PARITY: Las rutas densa (lista de poblaciones) y
 *    dispersa (lista de frecuencias) convergen dentro de 4 épsilon.
 * 2. LOPD SHORTCUT: Cuando el conteo de máscaras iguala el span
 *    (distribución de Poisson lambda-uno), el primer término se
 *    duplica en lugar de reevaluarse vía ln-gamma.
 * 3. ZERO FLOOR: Todo resultado se satura en cero contra los epsilons
 *    negativos del redondeo; los ratios se confinan a [0, 1].
 *
 * # Mathematical Proof (Logfreedom):
 * L = lnΓ(Q+1) + lnΓ(Z+1) − lnΓ(h0+1)
 *     − Σ_f (lnΓ(H[f]+1) + H[f]·lnΓ(f+1))
 * cuenta, en logaritmo natural, las listas de máscaras compatibles con
 * la lista de poblaciones H bajo los vínculos (Q, Z).
 * =================================================================
 */

use crate::sort::uint_list_sort;
use entropics_core_numeric::prelude::{
    exp, log, log_np1, log_sum, log_sum_np1, Number, Uint,
};

/**
 * Logfreedom de una lista de poblaciones (ruta densa).
 *
 * # In:
 * 'pop_list' cubre las frecuencias [freq_min, freq_min + len − 1];
 * la población de la frecuencia cero (h0) queda implícita en
 * 'mask_max' y la suma de poblaciones. 'mask_idx_max' es Q − 1;
 * 'mask_max' es Z − 1.
 *
 * # Out:
 * Logfreedom, garantizada no negativa.
 */
#[must_use]
pub fn logfreedom_dense(
    freq_min: Uint,
    mask_idx_max: Uint,
    mask_max: Uint,
    pop_list: &[Uint],
) -> Number {
    let mut logfreedom = 0.0 as Number;
    if mask_max == 0 || pop_list.is_empty() {
        return logfreedom;
    }
    let mask_count = mask_idx_max + 1;
    logfreedom = log_sum(mask_count);
    // Atajo lambda-uno: con Q == Z ambos términos iniciales coinciden.
    if mask_idx_max == mask_max {
        logfreedom += logfreedom;
    } else {
        logfreedom += log_sum_np1(mask_max);
    }
    let pop_idx_start = usize::from(freq_min == 0);
    let pop_idx_max = pop_list.len() - 1;
    let mut h0 = mask_max.wrapping_add(1);
    let mut unaccounted = mask_count;
    // La población superior suele ser no nula mientras el resto se
    // concentra cerca de la base; procesarla primero maximiza la
    // probabilidad de salida temprana del barrido ascendente.
    let top_pop = pop_list[pop_idx_max];
    if top_pop != 0 {
        let freq = freq_min.wrapping_add(pop_idx_max as Uint);
        unaccounted = unaccounted.wrapping_sub(top_pop.wrapping_mul(freq));
        h0 = h0.wrapping_sub(top_pop);
        logfreedom -= log_sum(top_pop) + (top_pop as Number) * log_sum(freq);
    }
    if unaccounted != 0 {
        for pop_idx in pop_idx_start..pop_idx_max {
            let pop = pop_list[pop_idx];
            if pop != 0 {
                let freq = freq_min.wrapping_add(pop_idx as Uint);
                unaccounted = unaccounted.wrapping_sub(pop.wrapping_mul(freq));
                h0 = h0.wrapping_sub(pop);
                logfreedom -= log_sum(pop) + (pop as Number) * log_sum(freq);
                if unaccounted == 0 {
                    break;
                }
            }
        }
    }
    logfreedom -= log_sum(h0);
    logfreedom.max(0.0)
}

/**
 * Logfreedom directa de una lista de frecuencias (ruta dispersa).
 *
 * # In:
 * 'freq_list' contiene la frecuencia de cada máscara en [0, Z − 1];
 * la suma de frecuencias debe caer en [1, UINT_MAX]. 'scratch' debe
 * compartir longitud. Ambas listas quedan indefinidas al retornar.
 *
 * # Logic:
 * Compacta las frecuencias no nulas, las ordena ascendentemente y
 * recorre cada tramo de frecuencias iguales localizando su final por
 * búsqueda binaria, emitiendo un par (población, frecuencia) por tramo.
 */
#[must_use]
pub fn logfreedom_sparse(freq_list: &mut [Uint], scratch: &mut [Uint]) -> Number {
    let mut logfreedom = 0.0 as Number;
    let mask_span = freq_list.len();
    if mask_span < 2 {
        return logfreedom;
    }
    let mask_max = (mask_span - 1) as Uint;
    let mut freq_count = 0usize;
    let mut mask_count = 0 as Uint;
    for mask in 0..mask_span {
        let freq = freq_list[mask];
        if freq != 0 {
            scratch[freq_count] = freq;
            freq_count += 1;
            mask_count = mask_count.wrapping_add(freq);
        }
    }
    if freq_count == 0 {
        return logfreedom;
    }
    let freq_idx_max = freq_count - 1;
    let mask_idx_max = mask_count - 1;
    logfreedom = log_sum_np1(mask_idx_max) + log_sum_np1(mask_max);
    let h0 = mask_max - freq_idx_max as Uint;
    logfreedom -= log_sum(h0);
    uint_list_sort(&mut scratch[..freq_count], &mut freq_list[..freq_count]);
    let sorted = &scratch[..freq_count];
    let mut freq_idx_min = 0usize;
    while freq_idx_min <= freq_idx_max {
        let freq = sorted[freq_idx_min];
        // Búsqueda binaria del último índice del tramo de 'freq'. La
        // aritmética de índices evita el desborde y garantiza
        // terminación.
        let mut lo = freq_idx_min;
        let mut hi = freq_idx_max;
        while lo != hi {
            let mid = hi - ((hi - lo) >> 1);
            if sorted[mid] != freq {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        let run_end = lo + 1;
        let pop = (run_end - freq_idx_min) as Uint;
        freq_idx_min = run_end;
        logfreedom -= log_sum(pop) + (pop as Number) * log_sum(freq);
    }
    logfreedom.max(0.0)
}

/**
 * Dyspoissonismo a partir de logfreedom precalculada.
 *
 * D = 1 − L / (Q·ln Z), confinada a [0, 1]. Por convención retorna 0
 * cuando Q ∈ {0, 1} o Z == 1: el denominador se anula y no existe
 * cota inferior barata (D0) que devolver en su lugar.
 */
#[must_use]
pub fn dyspoissonism(logfreedom: Number, mask_idx_max: Uint, mask_max: Uint) -> Number {
    let mut dyspoissonism = 0.0 as Number;
    if mask_idx_max != 0 && mask_max != 0 {
        let mask_count_x_log_mask_span = log_np1(mask_max) * ((mask_idx_max + 1) as Number);
        if logfreedom < mask_count_x_log_mask_span {
            dyspoissonism = 1.0 - (logfreedom / mask_count_x_log_mask_span);
            dyspoissonism = dyspoissonism.clamp(0.0, 1.0);
        }
    }
    dyspoissonism
}

/**
 * Sparsity informacional: 1 − L / L_max, confinada a [0, 1].
 *
 * La densidad informacional sería marginalmente más precisa, pero
 * mucho menos útil como métrica de calidad de aleatoriedad.
 */
#[must_use]
pub fn sparsity(logfreedom: Number, logfreedom_max: Number) -> Number {
    let mut information_sparsity = 0.0 as Number;
    if logfreedom < logfreedom_max {
        information_sparsity = 1.0 - (logfreedom / logfreedom_max);
        information_sparsity = information_sparsity.clamp(0.0, 1.0);
    }
    information_sparsity
}

/**
 * Amplitud de probabilidad de Poisson en la frecuencia indicada, con
 * lambda = Q / Z.
 *
 * Aparato de investigación: evalúa en espacio logarítmico porque el
 * factorial directo costaría tiempo y exactitud.
 */
#[must_use]
pub fn poisson_term(freq: Uint, mask_idx_max: Uint, mask_max: Uint) -> Number {
    let mask_count = mask_idx_max + 1;
    let mask_span = (mask_max as Number) + 1.0;
    let lambda = (mask_count as Number) / mask_span;
    let lambda_log = log(lambda);
    let poisson_log = (freq as Number) * lambda_log - lambda - log_sum(freq);
    exp(poisson_log)
}
