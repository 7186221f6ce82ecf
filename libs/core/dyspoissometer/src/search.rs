// [libs/core/dyspoissometer/src/search.rs]
/*!
 * =================================================================
 * APARATO: MONTE CARLO SEARCH ENGINE (V12.0 - GRADIENT RIDER)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: MÁXIMA LOGFREEDOM, MEDIANA Y GENERACIÓN DE MASCARAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. GRADIENT RIDER: Cabalga el gradiente de logfreedom por pares de
 *    transferencias de población de suma cero, con inyección de ruido
 *    incondicional para escapar de máximos locales.
 * 2. TOPOLOGY TRIAD: Tres topologías de interacción bajada/subida
 *    (disjunta, solapada al centro, contigua), cada una con forma
 *    cerrada de ΔL(Δ) y bisección sobre su primera diferencia.
 * 3. SEED SOVEREIGNTY: Cada búsqueda posee su celda de semilla; el
 *    barrido rayon multi-semilla escala sin estado compartido.
 *
 * # Mathematical Proof (Optimal Transfer):
 * La segunda diferencia de ΔL(Δ) es monótonamente decreciente en las
 * tres topologías (suma de logaritmos cóncavos), luego ΔL es una "U"
 * invertida y el cero de su primera diferencia, localizado por
 * bisección, maximiza la ganancia.
 * =================================================================
 */

use crate::errors::DyspoissonError;
use crate::lists::{
    freq_list_fill, freq_max, number_list_new_zeroed, pop_list_fill, uint_count_to_usize,
    uint_list_new_zeroed,
};
use crate::logfreedom::logfreedom_dense;
use crate::sort::number_list_sort;
use entropics_core_numeric::prelude::{
    log, log_np1, log_sum, log_sum_np1, MarsagliaOscillator, Number, Uint,
};
use rayon::prelude::*;
use tracing::instrument;

/**
 * Aproxima la máxima logfreedom alcanzable por una lista de
 * poblaciones con conteo implícito Q = mask_idx_max + 1 y span
 * implícito Z = mask_max + 1.
 *
 * # In:
 * 'iteration_max' es el número de iteraciones, menos una. La celda
 * 'random_seed' pertenece al invocador y queda actualizada al salir,
 * lo que habilita barridos paralelos con semillas distintas.
 *
 * # Out:
 * Máxima logfreedom aproximada, no negativa. Con certeza práctica
 * queda por debajo del máximo infinitamente exacto: procede de una
 * lista de poblaciones evolucionada, no demostrada óptima.
 *
 * # Errors:
 * 'Allocation' si el crecimiento de la lista agota la memoria;
 * 'NumericDegenerate' si la lista óptima no audita contra (Q, Z).
 */
#[instrument(level = "debug", skip(random_seed))]
pub fn logfreedom_max(
    iteration_max: u64,
    mask_idx_max: Uint,
    mask_max: Uint,
    random_seed: &mut u64,
) -> Result<Number, DyspoissonError> {
    if mask_idx_max > 2 && mask_max > 1 {
        logfreedom_max_monte_carlo(iteration_max, mask_idx_max, mask_max, random_seed)
    } else if mask_max != 0 {
        Ok(logfreedom_max_closed_form(mask_idx_max, mask_max))
    } else {
        Ok(0.0)
    }
}

/// Formas cerradas baratas: Z == 2 para todo Q, y Q <= 3 para todo Z.
fn logfreedom_max_closed_form(mask_idx_max: Uint, mask_max: Uint) -> Number {
    let logfreedom_max;
    if mask_idx_max > 2 {
        // Exactamente dos máscaras posibles: el máximo es el término
        // central del binomio, duplicado en vías cuando Q es impar
        // (mayoría de ceros o mayoría de unos).
        let mask_count = mask_idx_max + 1;
        let mask_count_part0 = mask_count >> 1;
        let mask_count_part1 = mask_count - mask_count_part0;
        let mut central = log_sum(mask_count) - log_sum(mask_count_part0) - log_sum(mask_count_part1);
        if mask_count_part0 != mask_count_part1 {
            central += log(2.0);
        }
        logfreedom_max = central;
    } else {
        // Q en {1, 2, 3}: productos de spans decrecientes; con Q == 3 y
        // Z < 4 la partición H = {1, 1} supera a H = {3}.
        let mut product = log_np1(mask_max);
        if mask_idx_max != 0 {
            product += log(mask_max as Number);
            if mask_idx_max == 2 {
                product += log((mask_max.max(4) - 1) as Number);
            }
        }
        logfreedom_max = product;
    }
    logfreedom_max.max(0.0)
}

fn logfreedom_max_monte_carlo(
    iteration_max: u64,
    mask_idx_max: Uint,
    mask_max: Uint,
    random_seed: &mut u64,
) -> Result<Number, DyspoissonError> {
    let mask_count = mask_idx_max + 1;
    let mask_span = mask_max.wrapping_add(1);
    // Distribución semilla por partición de lambda: cada máscara en
    // frecuencia lambda o lambda+1, en cumplimiento exacto de (Q, Z).
    let (lambda, pop_lambda_plus_1) = if mask_span != 0 {
        (mask_count / mask_span, mask_count % mask_span)
    } else {
        (0, mask_count)
    };
    let pop_lambda = mask_span.wrapping_sub(pop_lambda_plus_1);
    // Las frecuencias viven en [freq_min, freq_bound], con
    // pop_idx_max == freq_bound - freq_min en todo momento.
    let mut pop_idx_max = 3usize;
    let mut freq_bound = pop_idx_max as Uint;
    let mut freq_min = 0 as Uint;
    let lambda_plus_1 = lambda + 1;
    if pop_idx_max as Uint <= lambda_plus_1 {
        freq_bound = lambda_plus_1 + 1;
        freq_min = lambda - 1;
    }
    let mut pop_idx_max_best = pop_idx_max;
    let mut freq_bound_best = freq_bound;
    let mut freq_min_best = freq_min;
    let mut pop_list = uint_list_new_zeroed(pop_idx_max + 1)?;
    let mut pop_list_best = uint_list_new_zeroed(pop_idx_max + 1)?;
    let pop_idx_lambda = (lambda - freq_min) as usize;
    let pop_idx_lambda_plus_1 = pop_idx_lambda + 1;
    pop_list[pop_idx_lambda] = pop_lambda;
    pop_list[pop_idx_lambda_plus_1] = pop_lambda_plus_1;
    pop_list_best[pop_idx_lambda] = pop_lambda;
    pop_list_best[pop_idx_lambda_plus_1] = pop_lambda_plus_1;
    let mut pop_nonzero_idx_min = pop_idx_lambda;
    let mut pop_nonzero_idx_max = pop_idx_lambda_plus_1;
    let mut pop_nonzero_idx_min_best = pop_nonzero_idx_min;
    let mut pop_nonzero_idx_max_best = pop_nonzero_idx_max;
    let mut pop_nonzero_idx_span = 2usize;
    // Suma de ΔL desde la última mejora; cuando pasa a positivo, la
    // lista actual supera a la mejor conocida y se instantánea.
    let mut logfreedom_delta_sum = 0.0 as Number;
    let mut oscillator = MarsagliaOscillator::new(*random_seed);
    let mut iteration = 0u64;
    let mut iteration_last_change = 0u64;
    let mut allocation_failure: Option<DyspoissonError> = None;
    loop {
        let mut pop_idx_down;
        let mut pop_idx_up;
        let mut pop_down_right;
        let mut pop_up_left;
        let mut pop_idx_delta;
        loop {
            loop {
                let draw = oscillator.draw_bounded(pop_nonzero_idx_span as u64) as usize;
                pop_idx_down = draw + pop_nonzero_idx_min;
                pop_down_right = pop_list[pop_idx_down];
                // La bajada exige población y no puede deslizar por
                // debajo de la frecuencia cero absoluta.
                if pop_down_right != 0 && !(pop_idx_down == 0 && freq_min == 0) {
                    break;
                }
            }
            loop {
                let draw = oscillator.draw_bounded(pop_nonzero_idx_span as u64) as usize;
                pop_idx_up = draw + pop_nonzero_idx_min;
                pop_up_left = pop_list[pop_idx_up];
                pop_idx_delta = pop_idx_down.wrapping_sub(pop_idx_up);
                // La subida exige población, y al menos dos unidades
                // cuando coincide con la bajada.
                if pop_up_left != 0 && !(pop_idx_delta == 0 && pop_up_left == 1) {
                    break;
                }
            }
            // delta == 1 intercambiaría unidades entre dos frecuencias
            // vecinas y puede atascarse; se redibuja desde cero.
            if pop_idx_delta != 1 {
                break;
            }
        }
        if pop_idx_down == 0 || pop_idx_up == pop_idx_max {
            // La jugada desliza fuera del borde: duplicar la lista y
            // recentrarla, ajustando [freq_min, freq_bound] al nuevo
            // intervalo.
            let pop_idx_max_old = pop_idx_max;
            let pop_idx_count_half = (pop_idx_max >> 1) + 1;
            freq_bound = freq_bound.wrapping_add(pop_idx_count_half as Uint);
            let freq_min_old = freq_min;
            freq_min = freq_min.wrapping_sub(pop_idx_count_half as Uint);
            pop_idx_max = (pop_idx_max << 1) + 1;
            if freq_min.wrapping_add(pop_idx_count_half as Uint) < pop_idx_count_half as Uint
                || freq_bound < pop_idx_count_half as Uint
            {
                freq_bound = pop_idx_max as Uint;
                freq_min = 0;
            }
            let shift = freq_min_old.wrapping_sub(freq_min) as usize;
            let mut pop_list_grown = match uint_list_new_zeroed(pop_idx_max + 1) {
                Ok(list) => list,
                Err(error) => {
                    allocation_failure = Some(error);
                    break;
                }
            };
            pop_list_grown[shift..shift + pop_idx_max_old + 1].copy_from_slice(&pop_list);
            pop_list = pop_list_grown;
            pop_idx_down += shift;
            pop_idx_up += shift;
            pop_nonzero_idx_min += shift;
            pop_nonzero_idx_max += shift;
        }
        let pop_down_left = pop_list[pop_idx_down - 1];
        let pop_up_right = pop_list[pop_idx_up + 1];
        let freq_down_right = freq_min.wrapping_add(pop_idx_down as Uint);
        let freq_up_left = freq_min.wrapping_add(pop_idx_up as Uint);
        let freq_expression = log((freq_down_right as Number) / ((freq_up_left + 1) as Number));
        // Primera diferencia de ΔL evaluada en Δ, por topología. Los
        // términos lnΓ colapsan en logaritmos simples al diferenciar.
        let delta_delta_at = |pop_delta: Uint| -> Number {
            let mut logfreedom_delta_delta = freq_expression;
            if pop_idx_delta > 2 {
                logfreedom_delta_delta -= log(
                    ((pop_down_left + pop_delta + 1) as Number)
                        * ((pop_up_right + pop_delta + 1) as Number)
                        / (((pop_down_right - pop_delta) as Number)
                            * ((pop_up_left - pop_delta) as Number)),
                );
            } else if pop_idx_delta == 0 {
                logfreedom_delta_delta -= log(
                    ((pop_down_left + pop_delta + 1) as Number)
                        * ((pop_up_right + pop_delta + 1) as Number)
                        / (((pop_down_right - (pop_delta << 1) - 1) as Number)
                            * ((pop_down_right - (pop_delta << 1)) as Number)),
                );
            } else {
                logfreedom_delta_delta -= log(
                    ((pop_down_left + (pop_delta << 1) + 1) as Number)
                        * ((pop_down_left + (pop_delta << 1) + 2) as Number)
                        / (((pop_down_right - pop_delta) as Number)
                            * ((pop_up_left - pop_delta) as Number)),
                );
            }
            logfreedom_delta_delta
        };
        let mut pop_delta_max = pop_down_right.min(pop_up_left);
        if pop_idx_delta == 0 {
            pop_delta_max >>= 1;
        }
        let mut pop_delta_min = 1 as Uint;
        // La primera diferencia no es evaluable en pop_delta_max (es
        // una diferencia de dos puntos vecinos), luego la bisección se
        // acota en pop_delta_max - 1.
        let mut pop_delta_max_minus_1 = pop_delta_max - pop_delta_min;
        if pop_delta_max_minus_1 != 0 && delta_delta_at(1) > 0.0 {
            while pop_delta_max_minus_1 != pop_delta_min {
                let pop_delta = pop_delta_max_minus_1 - ((pop_delta_max_minus_1 - pop_delta_min) >> 1);
                if delta_delta_at(pop_delta) > 0.0 {
                    pop_delta_min = pop_delta;
                } else {
                    pop_delta_max_minus_1 = pop_delta - 1;
                }
            }
            // La diferencia es positiva en el punto hallado: el Δ
            // óptimo es el vecino derecho.
            pop_delta_min += 1;
        }
        let pop_delta = pop_delta_min;
        // ΔL exacta del traslado elegido, aplicando la jugada siempre
        // (la inyección de ruido es deliberada aunque ΔL sea negativa).
        let mut logfreedom_delta =
            log_sum(pop_down_left) + log_sum(pop_down_right) + (pop_delta as Number) * freq_expression;
        let pop_down_left_new;
        let pop_down_right_new;
        let pop_up_left_new;
        let pop_up_right_new;
        if pop_idx_delta > 2 {
            logfreedom_delta += log_sum(pop_up_left) + log_sum(pop_up_right);
            pop_down_left_new = pop_down_left + pop_delta;
            pop_down_right_new = pop_down_right - pop_delta;
            pop_up_left_new = pop_up_left - pop_delta;
            pop_up_right_new = pop_up_right + pop_delta;
            logfreedom_delta -= log_sum(pop_down_left_new)
                + log_sum(pop_down_right_new)
                + log_sum(pop_up_left_new)
                + log_sum(pop_up_right_new);
        } else if pop_idx_delta == 0 {
            logfreedom_delta += log_sum(pop_up_right);
            pop_down_left_new = pop_down_left + pop_delta;
            pop_down_right_new = pop_down_right - (pop_delta << 1);
            pop_up_left_new = pop_down_right_new;
            pop_up_right_new = pop_up_right + pop_delta;
            logfreedom_delta -=
                log_sum(pop_down_left_new) + log_sum(pop_down_right_new) + log_sum(pop_up_right_new);
        } else {
            logfreedom_delta += log_sum(pop_up_left);
            pop_down_left_new = pop_down_left + (pop_delta << 1);
            pop_down_right_new = pop_down_right - pop_delta;
            pop_up_left_new = pop_up_left - pop_delta;
            pop_up_right_new = pop_down_left_new;
            logfreedom_delta -=
                log_sum(pop_down_left_new) + log_sum(pop_down_right_new) + log_sum(pop_up_left_new);
        }
        pop_list[pop_idx_down - 1] = pop_down_left_new;
        pop_list[pop_idx_down] = pop_down_right_new;
        pop_list[pop_idx_up] = pop_up_left_new;
        pop_list[pop_idx_up + 1] = pop_up_right_new;
        // Mantenimiento de la ventana de índices no nulos; algunos
        // ceros interiores son tolerables y no ameritan recorte.
        if pop_idx_down == pop_nonzero_idx_min {
            pop_nonzero_idx_min -= 1;
            pop_nonzero_idx_span += 1;
        } else if pop_idx_down == pop_nonzero_idx_max
            && pop_down_right_new == 0
            && pop_idx_up < pop_idx_down
        {
            pop_nonzero_idx_max -= 1;
            pop_nonzero_idx_span -= 1;
        }
        if pop_idx_up == pop_nonzero_idx_max {
            pop_nonzero_idx_max += 1;
            pop_nonzero_idx_span += 1;
        } else if pop_idx_up == pop_nonzero_idx_min
            && pop_up_left_new == 0
            && pop_idx_up < pop_idx_down
        {
            pop_nonzero_idx_min += 1;
            pop_nonzero_idx_span -= 1;
        }
        logfreedom_delta_sum += logfreedom_delta;
        if logfreedom_delta_sum > 0.0 {
            logfreedom_delta_sum = 0.0;
            iteration_last_change = iteration;
            if pop_idx_max != pop_idx_max_best {
                pop_list_best = match uint_list_new_zeroed(pop_idx_max + 1) {
                    Ok(list) => list,
                    Err(error) => {
                        allocation_failure = Some(error);
                        break;
                    }
                };
                pop_idx_max_best = pop_idx_max;
            }
            pop_list_best.copy_from_slice(&pop_list);
            pop_nonzero_idx_max_best = pop_nonzero_idx_max;
            pop_nonzero_idx_min_best = pop_nonzero_idx_min;
            freq_bound_best = freq_bound;
            freq_min_best = freq_min;
        } else if pop_nonzero_idx_span as u64 <= iteration - iteration_last_change {
            // Horizonte empírico agotado sin mejora: revertir a la
            // mejor lista conocida y mutar por otra vía.
            logfreedom_delta_sum = 0.0;
            iteration_last_change = iteration;
            pop_list.truncate(pop_idx_max_best + 1);
            pop_list.copy_from_slice(&pop_list_best);
            pop_idx_max = pop_idx_max_best;
            pop_nonzero_idx_max = pop_nonzero_idx_max_best;
            pop_nonzero_idx_min = pop_nonzero_idx_min_best;
            freq_bound = freq_bound_best;
            freq_min = freq_min_best;
            pop_nonzero_idx_span = pop_nonzero_idx_max_best - pop_nonzero_idx_min_best + 1;
        }
        if iteration == iteration_max {
            break;
        }
        iteration += 1;
    }
    *random_seed = oscillator.state();
    if let Some(error) = allocation_failure {
        return Err(error);
    }
    let logfreedom_max = logfreedom_dense(
        freq_min_best,
        mask_idx_max,
        mask_max,
        &pop_list_best[..=pop_nonzero_idx_max_best],
    );
    // Auditoría paranoica: la lista óptima debe reconstruir (Q, Z)
    // exactamente; ambos contadores deben terminar en menos uno.
    let mut mask_idx_audit = mask_idx_max;
    let mut mask_audit = mask_max;
    for pop_idx in pop_nonzero_idx_min_best..=pop_nonzero_idx_max_best {
        let pop = pop_list_best[pop_idx];
        let freq = freq_min_best.wrapping_add(pop_idx as Uint);
        mask_idx_audit = mask_idx_audit.wrapping_sub(pop.wrapping_mul(freq));
        mask_audit = mask_audit.wrapping_sub(pop);
    }
    if mask_idx_audit.wrapping_add(1) != 0 || mask_audit.wrapping_add(1) != 0 {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "la lista de poblaciones óptima no audita contra (Q, Z)",
        });
    }
    Ok(logfreedom_max)
}

/**
 * Barrido paralelo de máxima logfreedom con semillas independientes.
 *
 * Cada celda de semilla alimenta una búsqueda completa en su propio
 * worker rayon; el resultado es el máximo de los máximos y cada celda
 * queda actualizada para reanudar su flujo.
 */
#[instrument(level = "debug", skip(random_seed_list))]
pub fn logfreedom_max_parallel(
    iteration_max: u64,
    mask_idx_max: Uint,
    mask_max: Uint,
    random_seed_list: &mut [u64],
) -> Result<Number, DyspoissonError> {
    if random_seed_list.is_empty() {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "barrido paralelo sin celdas de semilla",
        });
    }
    let maxima: Result<Vec<Number>, DyspoissonError> = random_seed_list
        .par_iter_mut()
        .map(|random_seed| logfreedom_max(iteration_max, mask_idx_max, mask_max, random_seed))
        .collect();
    Ok(maxima?.into_iter().fold(0.0 as Number, Number::max))
}

/**
 * Genera una lista de máscaras pseudoaleatoria consistente con un
 * conteo y un span dados.
 *
 * # Logic:
 * Suma modular corrediza sobre el span: cada máscara nueva es la suma
 * del estado del oscilador y la máscara previa de esa posición, lo que
 * borra el leve sesgo de bit alto del oscilador. Con span potencia de
 * dos la conjunción reemplaza al costoso módulo.
 */
pub fn mask_list_pseudorandom_fill(mask_list: &mut [Uint], mask_max: Uint, random_seed: &mut u64) {
    let mut oscillator = MarsagliaOscillator::new(*random_seed);
    let mask_span = mask_max.wrapping_add(1);
    if mask_max & mask_span == 0 {
        for mask in mask_list.iter_mut() {
            let mixed = oscillator.state().wrapping_add(*mask as u64);
            *mask = (mixed as Uint) & mask_max;
            oscillator.step();
        }
    } else {
        for mask in mask_list.iter_mut() {
            let mixed = oscillator.state().wrapping_add(*mask as u64);
            *mask = (mixed % (mask_span as u64)) as Uint;
            oscillator.step();
        }
    }
    *random_seed = oscillator.state();
}

/**
 * Aproxima la mediana de la logfreedom de todas las listas de máscaras
 * consistentes con (Q, Z).
 *
 * La mediana separa con probabilidad esencialmente igual las listas de
 * mayor y menor logfreedom: un generador verdaderamente aleatorio debe
 * exhibirla asintóticamente. Exhibir logfreedom improbablemente baja
 * delata déficit de entropía; improbablemente alta, un intento de
 * contrivancia de máxima aleatoriedad.
 *
 * # Out:
 * El valor retornado es la logfreedom real de al menos una lista
 * generada, jamás una interpolación.
 */
#[instrument(level = "debug", skip(random_seed))]
pub fn logfreedom_median(
    iteration_max: Uint,
    mask_idx_max: Uint,
    mask_max: Uint,
    random_seed: &mut u64,
) -> Result<Number, DyspoissonError> {
    if mask_max == 0 || mask_idx_max == 0 {
        return Ok(log_sum_np1(mask_max).max(0.0));
    }
    let mask_span = uint_count_to_usize(mask_max as u128 + 1)?;
    let mask_count = uint_count_to_usize(mask_idx_max as u128 + 1)?;
    let trial_count = uint_count_to_usize(iteration_max as u128 + 1)?;
    let mut freq_list = uint_list_new_zeroed(mask_span)?;
    let mut logfreedom_list = number_list_new_zeroed(trial_count)?;
    let mut logfreedom_scratch = number_list_new_zeroed(trial_count)?;
    let mut mask_list = uint_list_new_zeroed(mask_count)?;
    let mut pop_list = uint_list_new_zeroed(mask_count)?;
    for trial in 0..trial_count {
        mask_list_pseudorandom_fill(&mut mask_list, mask_max, random_seed);
        freq_list_fill(&mut freq_list, &mask_list);
        let freq_maximum = freq_max(&freq_list);
        let pop_slice = &mut pop_list[..freq_maximum as usize];
        pop_list_fill(&freq_list, pop_slice);
        logfreedom_list[trial] = logfreedom_dense(1, mask_idx_max, mask_max, pop_slice);
    }
    number_list_sort(&mut logfreedom_list, &mut logfreedom_scratch);
    Ok(logfreedom_list[(trial_count - 1) >> 1].max(0.0))
}
