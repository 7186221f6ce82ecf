// [libs/core/dyspoissometer/src/stats.rs]
/*!
 * =================================================================
 * APARATO: TYPED MASK-LIST STATISTICS (V12.0 - WIDEN SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: LOGFREEDOM, MEDIA Y MOMENTOS DE LISTAS TIPADAS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. VIEW UNIFICATION: Un solo enum de vista reemplaza los cuatro
 *    punteros anulables clásicos; el ensanchamiento a u32 es el único
 *    punto de contacto con el tipo externo.
 * 2. U24 CITIZENSHIP: Las listas de tripletes de bytes little-endian
 *    son ciudadanas de primera clase, el compromiso clásico entre
 *    riqueza estadística y empaquetado tolerable.
 * 3. SIGN DUALITY: El indicador de signo reinterpreta las máscaras en
 *    complemento a dos sin tocar la representación almacenada.
 *
 * # Mathematical Proof (Moments):
 * Sin corrección de Bessel: var = Σδ²/n, kurtosis = n·Σδ⁴/(Σδ²)².
 * =================================================================
 */

use crate::errors::DyspoissonError;
use crate::lists::{uint_count_to_usize, uint_list_new_zeroed};
use crate::logfreedom::logfreedom_sparse;
use entropics_core_numeric::prelude::{sqrt, Number, Uint};

/// Vista tipada de una lista de máscaras externa.
#[derive(Debug, Clone, Copy)]
pub enum MaskListView<'a> {
    /// Máscaras de 8 bits.
    U8(&'a [u8]),
    /// Máscaras de 16 bits.
    U16(&'a [u16]),
    /// Máscaras de 24 bits empaquetadas como tripletes little-endian.
    U24(&'a [u8]),
    /// Máscaras de 32 bits.
    U32(&'a [u32]),
}

/// Momentos de una lista de máscaras (sin corrección de Bessel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskListStats {
    /// Media aritmética, confinada al rango representable del tipo.
    pub mean: Number,
    /// Varianza poblacional.
    pub variance: Number,
    /// Desviación estándar poblacional.
    pub sigma: Number,
    /// Curtosis (momento cuarto normalizado).
    pub kurtosis: Number,
}

impl<'a> MaskListView<'a> {
    /// Número de máscaras de la vista.
    #[must_use]
    pub fn mask_count(&self) -> usize {
        match self {
            Self::U8(list) => list.len(),
            Self::U16(list) => list.len(),
            Self::U24(list) => list.len() / 3,
            Self::U32(list) => list.len(),
        }
    }

    /// Ancho en bits de cada máscara.
    #[must_use]
    pub fn mask_bits(&self) -> u32 {
        match self {
            Self::U8(_) => 8,
            Self::U16(_) => 16,
            Self::U24(_) => 24,
            Self::U32(_) => 32,
        }
    }

    /// Máscara ensanchada a u32 en la posición dada.
    #[inline]
    fn widened(&self, mask_idx: usize) -> u32 {
        match self {
            Self::U8(list) => u32::from(list[mask_idx]),
            Self::U16(list) => u32::from(list[mask_idx]),
            Self::U24(list) => {
                let byte_idx = mask_idx * 3;
                u32::from(list[byte_idx])
                    | (u32::from(list[byte_idx + 1]) << 8)
                    | (u32::from(list[byte_idx + 2]) << 16)
            }
            Self::U32(list) => list[mask_idx],
        }
    }

    /// Máscara reinterpretada en complemento a dos del ancho nativo.
    #[inline]
    fn widened_signed(&self, mask_idx: usize) -> i64 {
        let mask = self.widened(mask_idx);
        match self {
            Self::U8(_) => i64::from(mask as u8 as i8),
            Self::U16(_) => i64::from(mask as u16 as i16),
            Self::U24(_) => {
                // Extensión de signo manual del bit 23.
                if mask & 0x0080_0000 != 0 {
                    i64::from(mask | 0xFF00_0000) - (1i64 << 32)
                } else {
                    i64::from(mask)
                }
            }
            Self::U32(_) => i64::from(mask as i32),
        }
    }
}

/**
 * Logfreedom de una lista de máscaras tipada.
 *
 * # Errors:
 * 'Overflow' si mask_max no cabe en el Uint de la precisión activa o
 * la lista de frecuencias implicada no cabe en memoria; 'Allocation'
 * si el host rechaza la reserva; 'NumericDegenerate' si la lista está
 * vacía.
 */
pub fn mask_list_logfreedom(
    view: MaskListView<'_>,
    mask_max: u32,
) -> Result<Number, DyspoissonError> {
    if mask_max == 0 {
        return Ok(0.0);
    }
    let mask_count = view.mask_count();
    if mask_count == 0 {
        return Err(DyspoissonError::NumericDegenerate {
            detail: "lista de máscaras vacía para logfreedom",
        });
    }
    if u128::from(mask_max) > u128::from(Uint::MAX) {
        return Err(DyspoissonError::Overflow {
            requested_items: u128::from(mask_max) + 1,
        });
    }
    let mask_span = uint_count_to_usize(u128::from(mask_max) + 1)?;
    let mut freq_list = uint_list_new_zeroed(mask_span)?;
    let mut scratch = uint_list_new_zeroed(mask_span)?;
    for mask_idx in 0..mask_count {
        freq_list[view.widened(mask_idx) as usize] += 1;
    }
    Ok(logfreedom_sparse(&mut freq_list, &mut scratch))
}

/// Logfreedom de una lista de máscaras u8.
pub fn u8_list_logfreedom(list: &[u8], mask_max: u8) -> Result<Number, DyspoissonError> {
    mask_list_logfreedom(MaskListView::U8(list), u32::from(mask_max))
}

/// Logfreedom de una lista de máscaras u16.
pub fn u16_list_logfreedom(list: &[u16], mask_max: u16) -> Result<Number, DyspoissonError> {
    mask_list_logfreedom(MaskListView::U16(list), u32::from(mask_max))
}

/// Logfreedom de una lista de máscaras u24 empaquetadas.
pub fn u24_list_logfreedom(list: &[u8], mask_max: u32) -> Result<Number, DyspoissonError> {
    mask_list_logfreedom(MaskListView::U24(list), mask_max)
}

/// Logfreedom de una lista de máscaras u32.
pub fn u32_list_logfreedom(list: &[u32], mask_max: u32) -> Result<Number, DyspoissonError> {
    mask_list_logfreedom(MaskListView::U32(list), mask_max)
}

/**
 * Media de una lista de máscaras tipada, con o sin reinterpretación de
 * signo.
 *
 * La media retornada queda confinada al rango representable del tipo
 * (con signo o sin él); es racional y rara vez entera.
 */
#[must_use]
pub fn mask_list_mean(view: MaskListView<'_>, signed: bool) -> Number {
    let mask_count = view.mask_count();
    if mask_count == 0 {
        return 0.0;
    }
    let mask_bits = view.mask_bits();
    let (floor, ceiling) = representable_bounds(mask_bits, signed);
    let mut signed_sum = 0i128;
    let mut unsigned_sum = 0u128;
    for mask_idx in 0..mask_count {
        if signed {
            signed_sum += i128::from(view.widened_signed(mask_idx));
        } else {
            unsigned_sum += u128::from(view.widened(mask_idx));
        }
    }
    let mean = if signed {
        (signed_sum as Number) / (mask_count as Number)
    } else {
        (unsigned_sum as Number) / (mask_count as Number)
    };
    mean.clamp(floor as Number, ceiling as Number)
}

/**
 * Media, varianza, desviación estándar y curtosis de una lista de
 * máscaras tipada. Sin corrección de Bessel.
 */
#[must_use]
pub fn mask_list_stats(view: MaskListView<'_>, signed: bool) -> MaskListStats {
    let mask_count = view.mask_count();
    let mean = mask_list_mean(view, signed);
    let mut variance_sum = 0.0 as Number;
    let mut kurtosis_sum = 0.0 as Number;
    for mask_idx in 0..mask_count {
        let value = if signed {
            view.widened_signed(mask_idx) as Number
        } else {
            view.widened(mask_idx) as Number
        };
        let delta = mean - value;
        let delta_squared = delta * delta;
        variance_sum += delta_squared;
        kurtosis_sum += delta_squared * delta_squared;
    }
    if mask_count == 0 || variance_sum == 0.0 {
        return MaskListStats {
            mean,
            variance: 0.0,
            sigma: 0.0,
            kurtosis: 0.0,
        };
    }
    let mask_count_number = mask_count as Number;
    let kurtosis = kurtosis_sum * mask_count_number / (variance_sum * variance_sum);
    let variance = variance_sum / mask_count_number;
    MaskListStats {
        mean,
        variance,
        sigma: sqrt(variance),
        kurtosis,
    }
}

fn representable_bounds(mask_bits: u32, signed: bool) -> (i64, i64) {
    if signed {
        let ceiling = (1i64 << (mask_bits - 1)) - 1;
        (-ceiling - 1, ceiling)
    } else {
        (0, (1i64 << mask_bits) - 1)
    }
}
