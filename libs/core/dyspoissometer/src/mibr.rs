// [libs/core/dyspoissometer/src/mibr.rs]
/*!
 * =================================================================
 * APARATO: MIBR ENGINE (V12.0 - COLLISION SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: ÍNDICE MÁXIMO ANTES DE REPETICIÓN Y SU SESGO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. INDEX-CARRYING SORT: La detección de colisiones ordena las
 *    máscaras arrastrando sus posiciones originales y explora los
 *    pares adyacentes iguales del resultado estable.
 * 2. ZERO-PREDECESSOR RULE: Cada colisión aporta la posición original
 *    más temprana del par; la posición cero carece de predecesor y se
 *    descarta, sellando el subdesborde clásico de esta estadística.
 * 3. SKEW DUALITY: skew_from_mibr y mibr_from_skew son inversas
 *    monótonas conectadas por búsqueda binaria.
 *
 * # Mathematical Proof (Skew):
 * K(m) = exp(lnΓ(Z) − lnΓ(Z−m) − m·ln Z) es la probabilidad de que un
 * prefijo de m+1 extracciones uniformes sobre Z símbolos carezca de
 * repeticiones; decrece monótonamente en m, habilitando la inversión
 * por bisección.
 * =================================================================
 */

use crate::errors::DyspoissonError;
use crate::lists::uint_list_new_zeroed;
use crate::sort::uint_idx_list_sort;
use entropics_core_numeric::prelude::{exp, log_np1, log_sum, Number, Uint};

/**
 * MIBR de una lista de máscaras.
 *
 * # Logic:
 * Ordena una copia de la lista arrastrando los índices originales y
 * recorre los pares adyacentes de valor igual. Cada par estable aporta
 * como candidato la posición original más temprana; los pares cuya
 * posición temprana es cero se descartan (sin predecesor). Sin
 * colisiones computables, retorna el índice máximo de la lista.
 */
pub fn mibr(mask_list: &[Uint]) -> Result<Uint, DyspoissonError> {
    let mask_count = mask_list.len();
    if mask_count == 0 {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "lista de máscaras vacía para MIBR",
        });
    }
    let mask_idx_max = (mask_count - 1) as Uint;
    let mut sorted = uint_list_new_zeroed(mask_count)?;
    sorted.copy_from_slice(mask_list);
    let mut sorted_scratch = uint_list_new_zeroed(mask_count)?;
    let mut idx_list = uint_list_new_zeroed(mask_count)?;
    for (slot, idx) in idx_list.iter_mut().enumerate() {
        *idx = slot as Uint;
    }
    let mut idx_scratch = uint_list_new_zeroed(mask_count)?;
    uint_idx_list_sort(&mut idx_list, &mut idx_scratch, &mut sorted, &mut sorted_scratch);
    let mut mibr = mask_idx_max;
    for slot in 1..mask_count {
        if sorted[slot] == sorted[slot - 1] {
            // El orden estable garantiza idx_list[slot - 1] como la
            // posición original más temprana del par.
            let earlier_idx = idx_list[slot - 1];
            if earlier_idx != 0 {
                mibr = mibr.min(earlier_idx);
            }
        }
    }
    Ok(mibr)
}

/**
 * Esperanza del MIBR (EMIBR) para un conteo y un span de máscaras.
 *
 * Suma ponderada truncada cuando los términos dejan de contribuir, con
 * corrección de cola por la masa de probabilidad restante. Para
 * consultas grandes con Q == Z, la aproximación
 * E ≈ sqrt(Z·π/2) − 4/3 converge a una unidad de este valor.
 */
#[must_use]
pub fn mibr_expected(mask_idx_max: Uint, mask_max: Uint) -> Number {
    let mut mibr_expected = 0.0 as Number;
    if mask_idx_max != 0 && mask_max != 0 {
        let mask_span = (mask_max as Number) + 1.0;
        let mask_span_recip = 1.0 / mask_span;
        let mibr_max = mask_idx_max.min(mask_max);
        let mut mibr = 1 as Uint;
        let mut weight_partial = (mask_max as Number) * mask_span_recip * mask_span_recip;
        let mut weight_sum = mask_span_recip;
        loop {
            let mibr_expected_old = mibr_expected;
            let weight = ((mibr as Number) + 1.0) * weight_partial;
            mibr_expected += (mibr as Number) * weight;
            weight_sum += weight;
            weight_partial *= ((mask_max - mibr) as Number) * mask_span_recip;
            if mibr_expected == mibr_expected_old || mibr == mibr_max {
                break;
            }
            mibr += 1;
        }
        mibr_expected += (mibr_max as Number) * (1.0 - weight_sum);
        mibr_expected = mibr_expected.clamp(0.0, mibr_max as Number);
    }
    mibr_expected
}

/**
 * Sesgo K para un span de máscaras y un MIBR dados.
 *
 * K = exp(lnΓ(Z) − lnΓ(Z−m) − m·ln Z), confinado a [0, 1]. Con span
 * unitario retorna 1 (toda lista repite de inmediato).
 */
#[must_use]
pub fn skew_from_mibr(mask_max: Uint, mibr: Uint) -> Number {
    let mut skew = 1.0 as Number;
    if mask_max != 0 {
        skew = exp(
            log_sum(mask_max) - log_sum(mask_max - mibr) - log_np1(mask_max) * (mibr as Number),
        );
        skew = skew.clamp(0.0, 1.0);
    }
    skew
}

/**
 * Máximo MIBR cuyo sesgo alcanza al menos el umbral dado, o mask_max
 * si ninguno lo hace.
 *
 * # Logic:
 * Bisección sobre la monotonía decreciente de skew_from_mibr.
 */
#[must_use]
pub fn mibr_from_skew(mask_max: Uint, skew: Number) -> Uint {
    let mut mibr_max = mask_max;
    if mask_max != 0 {
        let mut mibr_min = 0 as Uint;
        while mibr_max != mibr_min {
            let mibr = mibr_max - ((mibr_max - mibr_min) >> 1);
            let skew_mibr = skew_from_mibr(mask_max, mibr);
            if skew_mibr < skew {
                mibr_max = mibr - 1;
            } else {
                mibr_min = mibr;
            }
        }
    }
    mibr_max
}
